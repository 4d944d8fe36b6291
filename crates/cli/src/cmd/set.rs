use tracing::info;
use varopts_core::config::types::ResolvedConfig;
use varopts_core::set_var_opts;

use super::output::emit;
use super::tokens::{load_options, parse_tokens};
use crate::SetArgs;

pub fn run(rc: &ResolvedConfig, args: &SetArgs) {
    let options = load_options(&args.file);
    let parsed = parse_tokens(&args.args);

    let updated = match set_var_opts(&options, &parsed) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    info!(file = %args.file.display(), arguments = parsed.len(), "options set");

    let format = args.format.map_or(rc.output.format, Into::into);
    emit(&updated, &args.file, args.in_place, format);
}
