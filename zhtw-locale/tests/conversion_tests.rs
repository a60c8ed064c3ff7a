use std::fs;
use std::path::Path;

use tempfile::TempDir;
use zhtw_locale::{
    Config, Error, HEADER, LocaleFile, ScriptConverter, ZhTwConverter, convert_locale,
    encoding::{decode_utf16le, encode_utf16le},
    traits::Parser,
};

/// Marks converted values so tests can tell conversion happened without
/// depending on a dictionary.
fn bracket(text: &str) -> String {
    format!("[{}]", text)
}

fn write_utf16(path: &Path, text: &str) {
    fs::write(path, encode_utf16le(text)).unwrap();
}

fn read_utf16(path: &Path) -> String {
    decode_utf16le(&fs::read(path).unwrap()).unwrap()
}

struct Layout {
    _root: TempDir,
    config: Config,
}

fn layout() -> Layout {
    let root = TempDir::new().unwrap();
    let base = root.path();
    fs::create_dir_all(base.join("Locale/2052")).unwrap();
    fs::create_dir_all(base.join("rules")).unwrap();
    let config = Config::new()
        .with_input_dir(base.join("Locale/2052"))
        .with_output_dir(base.join("Locale/1029"))
        .with_header_path(base.join("Locale/Header.txt"))
        .with_patch_file(base.join("Locale/1029/base.txt"))
        .with_rule_dirs([base.join("rules")]);
    Layout {
        _root: root,
        config,
    }
}

#[test]
fn test_full_run_converts_values_and_keeps_layout() {
    let layout = layout();
    let config = &layout.config;
    let input = "\u{feff}[base]\r\nGameName\t1\tdyson\r\n\r\nEmpty\t2\t\r\nLast \t3  end";
    write_utf16(&config.input_dir.join("base.txt"), input);

    let report = convert_locale(config, &bracket).unwrap();

    assert!(report.batch.is_success());
    assert_eq!(report.batch.converted.len(), 1);
    assert_eq!(report.batch.converted[0].records, 3);
    assert_eq!(
        read_utf16(&config.output_dir.join("base.txt")),
        "\u{feff}[base]\r\nGameName\t1\t[dyson]\r\n\r\nEmpty\t2\t[]\r\nLast \t3  [end]"
    );
}

#[test]
fn test_header_written_on_every_run() {
    let layout = layout();
    let config = &layout.config;
    write_utf16(&config.input_dir.join("base.txt"), "K\t1\tv\n");
    fs::create_dir_all(config.header_path.parent().unwrap()).unwrap();
    fs::write(&config.header_path, "stale").unwrap();

    convert_locale(config, &bracket).unwrap();

    let header = fs::read(&config.header_path).unwrap();
    assert_eq!(header, HEADER.as_bytes());
    assert!(header.ends_with(b"\n"));
}

#[test]
fn test_rules_apply_in_order_after_conversion() {
    let layout = layout();
    let config = &layout.config;
    let rules_dir = &config.rule_dirs[0];
    fs::write(
        rules_dir.join("substitutions.txt"),
        "# converted values are bracketed\n[a],b\nb,c\nonlyoneword\n",
    )
    .unwrap();
    fs::write(rules_dir.join("overrides.txt"), "Title,固定\n").unwrap();
    write_utf16(
        &config.input_dir.join("base.txt"),
        "Plain\t1\ta\nTitle\t2\tanything\n",
    );

    let report = convert_locale(config, &bracket).unwrap();

    assert_eq!(report.rules.malformed.len(), 1);
    assert_eq!(report.rules.malformed[0].content, "onlyoneword");
    assert_eq!(
        read_utf16(&config.output_dir.join("base.txt")),
        "Plain\t1\tc\nTitle\t2\t固定\n"
    );
}

#[test]
fn test_later_rule_dir_overrides_earlier() {
    let layout = layout();
    let bundled = layout.config.rule_dirs[0].clone();
    let beside_exe = bundled.parent().unwrap().join("beside-exe");
    fs::create_dir_all(&beside_exe).unwrap();
    fs::write(bundled.join("overrides.txt"), "K,bundled\n").unwrap();
    fs::write(beside_exe.join("overrides.txt"), "K,local\n").unwrap();
    let config = layout.config.clone().with_rule_dirs([bundled, beside_exe]);
    write_utf16(&config.input_dir.join("base.txt"), "K\t1\tv\n");

    convert_locale(&config, &bracket).unwrap();

    assert_eq!(read_utf16(&config.output_dir.join("base.txt")), "K\t1\tlocal\n");
}

#[test]
fn test_missing_rule_files_only_convert() {
    let layout = layout();
    let config = &layout.config;
    write_utf16(&config.input_dir.join("base.txt"), "K\t1\tv\n");

    let report = convert_locale(config, &bracket).unwrap();

    assert_eq!(report.rules.missing.len(), 2);
    assert_eq!(read_utf16(&config.output_dir.join("base.txt")), "K\t1\t[v]\n");
}

#[test]
fn test_missing_input_dir_writes_nothing() {
    let layout = layout();
    let config = layout
        .config
        .clone()
        .with_input_dir(layout.config.input_dir.join("absent"));

    let result = convert_locale(&config, &bracket);

    assert!(matches!(result, Err(Error::MissingPath { .. })));
    assert!(!config.output_dir.exists());
    assert!(!config.header_path.exists());
}

#[test]
fn test_no_matching_files_writes_nothing() {
    let layout = layout();
    let config = &layout.config;
    fs::write(config.input_dir.join("readme.md"), "not a table").unwrap();

    let result = convert_locale(config, &bracket);

    assert!(matches!(result, Err(Error::NoInputFiles { .. })));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_bad_file_does_not_stop_the_run() {
    let layout = layout();
    let config = &layout.config;
    fs::write(config.input_dir.join("a.txt"), [0x00u8, 0xD8, 0x41]).unwrap();
    write_utf16(&config.input_dir.join("b.txt"), "K\t1\tv\n");

    let report = convert_locale(config, &bracket).unwrap();

    assert_eq!(report.batch.failed.len(), 1);
    assert!(matches!(report.batch.failed[0].1, Error::Encoding { .. }));
    assert_eq!(read_utf16(&config.output_dir.join("b.txt")), "K\t1\t[v]\n");
}

#[test]
fn test_zhtw_converter_end_to_end() {
    let layout = layout();
    let config = &layout.config;
    write_utf16(&config.input_dir.join("base.txt"), "语言\t1\t简体中文\r\n");

    convert_locale(config, &ZhTwConverter).unwrap();

    let file = LocaleFile::read_from(config.output_dir.join("base.txt")).unwrap();
    let record = file.lines[0].as_record().unwrap();
    assert_eq!(record.key, "语言");
    assert_eq!(record.value, ZhTwConverter.convert("简体中文"));
    assert_eq!(record.value, "簡體中文");
    assert_eq!(record.eol.as_deref(), Some("\r\n"));
}
