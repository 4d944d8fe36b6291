use std::path::Path;

use varopts_core::config::loader::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   varopts doctor");
            println!(
                "path: {}",
                rc.source
                    .as_ref()
                    .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
            );
            println!("logging.level: {}", rc.logging.level);
            let log_file = rc.logging.file.as_ref().map(|p| p.display().to_string());
            println!("logging.file: {}", log_file.as_deref().unwrap_or("-"));
            println!("output.format: {}", rc.output.format.as_str());
        }
        Err(e) => {
            println!("FAIL varopts doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
