//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::path::PathBuf;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,10}(/[a-z]{1,10}){0,3}"),
        prop::option::of("[a-z]{1,20}"),
        prop::option::of("[ -~]{1,20}"),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(root, username, password, output_format)| Config {
            root: root.map(PathBuf::from),
            username,
            password,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins field by field; unset fields fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.root, high.root.or(low.root));
        prop_assert_eq!(merged.username, high.username.or(low.username));
        prop_assert_eq!(merged.password, high.password.or(low.password));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging an empty config is the identity
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // A config validates exactly when both credentials are present
    #[test]
    fn config_validation_requires_credentials(config in config_strategy()) {
        let valid = ConfigValidator::validate(&config).is_ok();
        prop_assert_eq!(valid, config.username.is_some() && config.password.is_some());
    }
}
