//! Shared output formatting for options.

use std::path::Path;

use tabled::{Table, Tabled, settings::Style};
use varopts_core::config::types::OutputFormat;
use varopts_core::options::{DocumentFormat, OptionField};
use varopts_core::{Arg, ImportOptions, VariableOptions};

/// Row for the variables table.
#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    var_type: String,
    #[tabled(rename = "FillValue")]
    fill_value: String,
    #[tabled(rename = "TreatAsMissing")]
    treat_as_missing: String,
}

impl VariableRow {
    fn new(index: usize, v: &VariableOptions) -> Self {
        let fill_value = match v.fill_value() {
            Arg::Text(s) if s.is_empty() => "''".to_string(),
            other => other.to_string(),
        };
        Self {
            index,
            name: v.name().to_string(),
            var_type: v.var_type().to_string(),
            fill_value,
            treat_as_missing: v
                .option(OptionField::TreatAsMissing)
                .map(|a| a.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Print options in the requested format.
pub fn print_options(options: &ImportOptions, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(options),
        OutputFormat::Yaml => print_document(options, DocumentFormat::Yaml),
        OutputFormat::Json => print_document(options, DocumentFormat::Json),
    }
}

fn print_table(options: &ImportOptions) {
    if options.is_empty() {
        println!("(no variables)");
        return;
    }

    let rows: Vec<VariableRow> =
        options.variables().iter().enumerate().map(|(i, v)| VariableRow::new(i + 1, v)).collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("\nTotal: {} variables", rows.len());
}

fn print_document(options: &ImportOptions, format: DocumentFormat) {
    match options.to_document_string(format) {
        Ok(s) => println!("{}", s.trim_end_matches('\n')),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Print `options`, or save them to `path` when `in_place` is set.
pub fn emit(options: &ImportOptions, path: &Path, in_place: bool, format: OutputFormat) {
    if !in_place {
        print_options(options, format);
        return;
    }
    if let Err(e) = options.save(path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("Updated {}", path.display());
}
