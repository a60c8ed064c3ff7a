//! Directory-level conversion of locale tables.
//!
//! [`process_dir`] is the batch processor: it rewrites every matching table
//! of one directory into another. [`convert_locale`] is a whole conversion
//! run: rules, manifest, and tables.

use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    converter::ScriptConverter,
    document::LocaleFile,
    error::Error,
    header::write_header,
    pipeline::Pipeline,
    rules::{RuleLoadReport, RuleSet},
    traits::Parser,
};

/// One converted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub changed: usize,
}

/// What a batch run did, file by file.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Result of [`convert_locale`].
#[derive(Debug)]
pub struct ConversionReport {
    pub rules: RuleLoadReport,
    pub header: PathBuf,
    pub batch: BatchReport,
}

/// Whether the file name of `path` ends in `.{extension}`. Case-sensitive.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(extension))
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Lists regular files in `dir` whose name ends in `.{extension}`, sorted by
/// file name.
pub fn matching_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    if !dir.is_dir() {
        return Err(Error::missing_path("input directory", dir));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if has_extension(&path, extension) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(Error::NoInputFiles {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }
    Ok(files)
}

/// Converts one table. The input is fully read and closed before the output
/// is created.
pub fn process_file(input: &Path, output: &Path, pipeline: &Pipeline<'_>) -> Result<ConvertedFile, Error> {
    let mut file = LocaleFile::read_from(input)?;
    let changed = file.apply(pipeline);
    file.write_to(output)?;
    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: file.record_count(),
        changed,
    })
}

/// Converts every matching table in `input_dir` into `output_dir`, creating
/// the output directory when needed.
///
/// A missing input directory or an empty selection returns an error before
/// anything is written. A failure on one file is recorded in the report and
/// the remaining files are still processed.
pub fn process_dir(
    input_dir: &Path,
    output_dir: &Path,
    extension: &str,
    pipeline: &Pipeline<'_>,
) -> Result<BatchReport, Error> {
    let files = matching_files(input_dir, extension)?;
    std::fs::create_dir_all(output_dir)?;
    Ok(process_files(&files, output_dir, pipeline))
}

fn process_files(files: &[PathBuf], output_dir: &Path, pipeline: &Pipeline<'_>) -> BatchReport {
    let mut report = BatchReport::default();
    for input in files {
        let Some(name) = input.file_name() else {
            tracing::warn!("Skipping {}: no file name", input.display());
            report.failed.push((input.clone(), Error::missing_path("file name", input)));
            continue;
        };
        let output = output_dir.join(name);
        tracing::info!("Processing {}", input.display());
        match process_file(input, &output, pipeline) {
            Ok(converted) => {
                tracing::debug!(
                    "{}: {} record(s), {} changed",
                    output.display(),
                    converted.records,
                    converted.changed
                );
                report.converted.push(converted);
            }
            Err(e) => {
                tracing::error!("Failed to convert {}: {}", input.display(), e);
                report.failed.push((input.clone(), e));
            }
        }
    }
    report
}

/// Runs a full conversion: loads rules from `config.rule_dirs`, writes the
/// manifest, and converts every table with `converter`.
///
/// Nothing is written if the input directory is missing or has no tables.
pub fn convert_locale(config: &Config, converter: &dyn ScriptConverter) -> Result<ConversionReport, Error> {
    let files = matching_files(&config.input_dir, &config.extension)?;

    let (rules, rule_report) = RuleSet::load_from_dirs(
        &config.rule_dirs,
        &config.substitution_file,
        &config.override_file,
    );

    std::fs::create_dir_all(&config.output_dir)?;
    write_header(&config.header_path)?;

    let pipeline = Pipeline::new(converter, &rules);
    let batch = process_files(&files, &config.output_dir, &pipeline);
    tracing::info!(
        "Converted {} file(s) into {}, {} failed",
        batch.converted.len(),
        config.output_dir.display(),
        batch.failed.len()
    );

    Ok(ConversionReport {
        rules: rule_report,
        header: config.header_path.clone(),
        batch,
    })
}
