use tracing::info;
use varopts_core::config::types::ResolvedConfig;

use super::output::emit;
use super::tokens::{load_options, parse_token};
use crate::RenameArgs;

pub fn run(rc: &ResolvedConfig, args: &RenameArgs) {
    let mut options = load_options(&args.file);

    let selection = match parse_token(&args.selection) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = options.set_variable_names(&selection, &args.names) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    info!(file = %args.file.display(), renamed = args.names.len(), "variables renamed");

    let format = args.format.map_or(rc.output.format, Into::into);
    emit(&options, &args.file, args.in_place, format);
}
