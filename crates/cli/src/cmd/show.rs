use varopts_core::config::types::OutputFormat;

use super::output::print_options;
use super::tokens::load_options;
use crate::ShowArgs;

pub fn run(args: &ShowArgs) {
    let options = load_options(&args.file);
    print_options(&options, args.format.map_or(OutputFormat::Table, Into::into));
}
