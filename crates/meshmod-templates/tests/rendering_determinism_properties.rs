//! Property-based tests for rendering determinism and literal preservation

use meshmod_templates::{render, ParameterMap};
use proptest::prelude::*;

/// Strategy for generating valid parameter names
fn parameter_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{1,8}".prop_filter("keyword is not a parameter name", |s| s != "upper")
}

/// Strategy for generating parameter values
fn parameter_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

/// Strategy for literal text that contains no delimiter sequences
fn literal_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,;:\\n()_-]{0,40}"
}

/// Strategy for a template with one placeholder and its mapping
fn single_placeholder_strategy() -> impl Strategy<Value = (String, ParameterMap)> {
    (
        literal_text_strategy(),
        parameter_name_strategy(),
        parameter_value_strategy(),
        literal_text_strategy(),
    )
        .prop_map(|(before, name, value, after)| {
            let template = format!("{}{{{{{}}}}}{}", before, name, after);
            let mut params = ParameterMap::new();
            params.insert(name, value);
            (template, params)
        })
}

proptest! {
    /// Property: rendering the same template with the same mapping twice
    /// yields identical strings
    #[test]
    fn prop_rendering_is_deterministic(
        (template, params) in single_placeholder_strategy(),
    ) {
        let first = render(&template, &params).unwrap();
        let second = render(&template, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a template with no placeholders renders to itself under any
    /// mapping
    #[test]
    fn prop_literal_templates_pass_through(
        text in literal_text_strategy(),
        extra in prop::collection::hash_map(
            parameter_name_strategy(),
            parameter_value_strategy(),
            0..4,
        ),
    ) {
        let mut params = ParameterMap::new();
        params.extend(extra);
        let rendered = render(&text, &params).unwrap();
        prop_assert_eq!(rendered, text);
    }

    /// Property: a template that is exactly one placeholder renders to
    /// exactly the mapped value
    #[test]
    fn prop_round_trip_substitution(
        name in parameter_name_strategy(),
        value in parameter_value_strategy(),
    ) {
        let template = format!("{{{{{}}}}}", name);
        let mut params = ParameterMap::new();
        params.insert(name, value.clone());
        prop_assert_eq!(render(&template, &params).unwrap(), value);
    }

    /// Property: literal text surrounding a placeholder survives rendering
    /// unchanged, in its original position
    #[test]
    fn prop_literals_preserved_around_placeholder(
        (template, params) in single_placeholder_strategy(),
    ) {
        let rendered = render(&template, &params).unwrap();
        let open = template.find("{{").unwrap();
        let close = template.find("}}").unwrap() + 2;
        prop_assert!(rendered.starts_with(&template[..open]));
        prop_assert!(rendered.ends_with(&template[close..]));
    }

    /// Property: modifier-before-name and modifier-after-name spellings
    /// render identically
    #[test]
    fn prop_modifier_orders_equivalent(
        name in parameter_name_strategy(),
        value in parameter_value_strategy(),
    ) {
        let mut params = ParameterMap::new();
        params.insert(name.clone(), value);
        let prefix = render(&format!("{{{{upper {}}}}}", name), &params).unwrap();
        let suffix = render(&format!("{{{{{} upper}}}}", name), &params).unwrap();
        prop_assert_eq!(prefix, suffix);
    }
}
