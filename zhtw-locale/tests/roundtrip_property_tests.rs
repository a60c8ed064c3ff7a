use proptest::prelude::*;
use zhtw_locale::{Identity, Line, LocaleFile, Pipeline, Record, RuleSet};

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_ .]{0,15}").expect("valid key regex")
}

fn plain_key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_]{1,12}").expect("valid key regex")
}

fn key_with_number_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z_.]{0,8}( [0-9]{1,3}){1,2}").expect("valid key regex")
}

fn tab_sep_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex(" {0,2}\t[\t ]{0,2}").expect("valid separator regex")
}

fn sep_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[\t ]{1,3}").expect("valid separator regex")
}

fn id_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,6}").expect("valid id regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[^\r\n]{0,24}").expect("valid value regex")
}

fn eol_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("\n"), Just("\r\n")]
}

fn record_line_strategy() -> impl Strategy<Value = String> {
    (
        key_strategy(),
        sep_strategy(),
        id_strategy(),
        sep_strategy(),
        value_strategy(),
        eol_strategy(),
    )
        .prop_map(|(key, sep1, id, sep2, value, eol)| format!("{key}{sep1}{id}{sep2}{value}{eol}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn record_lines_serialize_back_exactly(line in record_line_strategy()) {
        let record = Record::parse(&line);
        prop_assert!(record.is_some(), "not parsed as a record: {:?}", line);
        prop_assert_eq!(record.unwrap().to_string(), line);
    }

    #[test]
    fn keys_with_number_tokens_stay_whole(
        key in key_with_number_strategy(),
        sep1 in tab_sep_strategy(),
        id in id_strategy(),
        sep2 in sep_strategy(),
        value in value_strategy(),
        eol in eol_strategy(),
    ) {
        let line = format!("{key}{sep1}{id}{sep2}{value}{eol}");
        let record = Record::parse(&line);
        prop_assert!(record.is_some(), "not parsed as a record: {:?}", line);
        let record = record.unwrap();
        prop_assert_eq!(&record.key, &key);
        prop_assert_eq!(&record.id, &id);
        prop_assert_eq!(record.to_string(), line);
    }

    #[test]
    fn lines_without_digits_pass_through(
        body in proptest::string::string_regex("[^0-9\r\n]{0,30}").expect("valid regex"),
        eol in eol_strategy(),
    ) {
        let raw = format!("{body}{eol}");
        let line = Line::parse(&raw);
        prop_assert!(line.as_record().is_none());
        prop_assert_eq!(line.to_string(), raw);
    }

    #[test]
    fn any_text_survives_parse_and_serialize(text in any::<String>()) {
        prop_assert_eq!(LocaleFile::parse(&text).to_string(), text);
    }

    #[test]
    fn identity_pipeline_changes_nothing(lines in prop::collection::vec(record_line_strategy(), 0..12)) {
        let text: String = lines
            .iter()
            .map(|l| if l.ends_with('\n') { l.clone() } else { format!("{l}\n") })
            .collect();
        let rules = RuleSet::new();
        let mut file = LocaleFile::parse(&text);
        prop_assert_eq!(file.apply(&Pipeline::new(&Identity, &rules)), 0);
        prop_assert_eq!(file.to_string(), text);
    }

    #[test]
    fn substitution_touches_only_the_value(
        key in plain_key_strategy(),
        sep1 in sep_strategy(),
        id in id_strategy(),
        sep2 in sep_strategy(),
        value in proptest::string::string_regex("[a-c ]{0,12}").expect("valid regex"),
        eol in eol_strategy(),
    ) {
        let mut rules = RuleSet::new();
        rules.push_substitution("a", "Z");
        let pipeline = Pipeline::new(&Identity, &rules);

        let mut file = LocaleFile::parse(&format!("{key}{sep1}{id}{sep2}{value}{eol}"));
        file.apply(&pipeline);

        let expected = format!("{key}{sep1}{id}{sep2}{}{eol}", value.replace('a', "Z"));
        prop_assert_eq!(file.to_string(), expected);
    }
}
