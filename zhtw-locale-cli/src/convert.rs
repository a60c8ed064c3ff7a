use std::path::PathBuf;

use zhtw_locale::{Config, ZhTwConverter, convert_locale};

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub header: Option<PathBuf>,
    pub rules_dirs: Vec<PathBuf>,
}

impl ConvertOptions {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config = config.with_input_dir(input);
        }
        if let Some(output) = &self.output {
            config = config.with_output_dir(output);
        }
        if let Some(header) = &self.header {
            config = config.with_header_path(header);
        }
        if !self.rules_dirs.is_empty() {
            config = config.with_rule_dirs(self.rules_dirs.iter().cloned());
        }
        config
    }
}

pub fn run_convert_command(config: &Config) -> Result<(), String> {
    let report = convert_locale(config, &ZhTwConverter).map_err(|e| e.to_string())?;

    println!("Header written: {}", report.header.display());
    for file in &report.batch.converted {
        println!(
            "Converted: {} ({} record(s), {} changed)",
            file.output.display(),
            file.records,
            file.changed
        );
    }
    for rule in &report.rules.malformed {
        println!(
            "Skipped malformed rule {}:{}: {}",
            rule.path.display(),
            rule.line_number,
            rule.content
        );
    }
    for (path, e) in &report.batch.failed {
        eprintln!("Failed: {}: {}", path.display(), e);
    }

    if !report.batch.is_success() {
        return Err(format!(
            "{} file(s) could not be converted",
            report.batch.failed.len()
        ));
    }

    println!(
        "✅ Traditional Chinese added: {}",
        config.output_dir.display()
    );
    Ok(())
}
