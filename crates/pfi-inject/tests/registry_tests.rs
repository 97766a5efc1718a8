use super::*;
use crate::fixtures::SKY_CORE_REGISTRY;
use std::io::Write;

#[test]
fn registry_preserves_declaration_order() {
    let registry = ShimRegistry::from_json_str(SKY_CORE_REGISTRY).unwrap();
    let members: Vec<&str> = registry.members().map(|(name, _)| name).collect();
    assert_eq!(members, ["at", "includes", "name", "finally", "toJSON"]);

    let at = registry.get("at").unwrap();
    let categories: Vec<&str> = at.keys().map(String::as_str).collect();
    assert_eq!(categories, ["Array", "String"]);
    assert_eq!(at["String"], "sky-core/polyfill/String/prototype/at");
    assert!(registry.get("trim").is_none());
    assert_eq!(registry.len(), 5);
}

#[test]
fn builder_matches_parsed_registry() {
    let built = ShimRegistry::new()
        .with_shim("includes", "Array", "A")
        .with_shim("includes", "String", "S");
    let parsed = ShimRegistry::from_json_str(r#"{"includes":{"Array":"A","String":"S"}}"#).unwrap();
    assert_eq!(built, parsed);
    assert_eq!(
        serde_json::to_string(&built).unwrap(),
        r#"{"includes":{"Array":"A","String":"S"}}"#
    );
}

#[test]
fn registry_rejects_malformed_entries() {
    let err = ShimRegistry::from_json_str(r#"["includes"]"#).unwrap_err();
    assert!(err.to_string().contains("keyed by member name"), "{err}");

    let err = ShimRegistry::from_json_str(r#"{"includes": "A"}"#).unwrap_err();
    assert!(err.to_string().contains("`includes`"), "{err}");

    let err = ShimRegistry::from_json_str(r#"{"includes": {"Array": 1}}"#).unwrap_err();
    assert!(err.to_string().contains("`includes`.`Array`"), "{err}");

    let err = ShimRegistry::from_json_str("{").unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse polyfill registry JSON"));
}

#[test]
fn empty_member_map_is_allowed() {
    let registry = ShimRegistry::from_json_str(r#"{"includes": {}}"#).unwrap();
    assert!(registry.get("includes").unwrap().is_empty());
    assert!(!registry.is_empty());
}

#[test]
fn tsconfig_plugin_options_with_comments() {
    let source = r#"{
        // Compiler settings
        "compilerOptions": {
            "target": "es5",
            /* The injector reads its options from the plugin entry. */
            "plugins": [
                { "transform": "other-plugin" },
                {
                    "transform": "polyfill-injector",
                    "polluting": {
                        "includes": { "Array": "shim/array-includes", },
                        "finally": { "Promise": "shim/promise-finally" },
                    },
                },
            ],
        },
    }"#;

    let options = PluginOptions::from_tsconfig_str(source).unwrap();
    let members: Vec<&str> = options.polluting.members().map(|(name, _)| name).collect();
    assert_eq!(members, ["includes", "finally"]);
    assert_eq!(
        options.polluting.get("finally").unwrap()["Promise"],
        "shim/promise-finally"
    );
}

#[test]
fn comment_markers_inside_strings_are_kept() {
    let source = r#"{ "compilerOptions": { "plugins": [ { "polluting": {
        "at": { "Array": "https://cdn.example/shims/at.js", "String": "/*keep*/" }
    } } ] } }"#;
    let options = PluginOptions::from_tsconfig_str(source).unwrap();
    let at = options.polluting.get("at").unwrap();
    assert_eq!(at["Array"], "https://cdn.example/shims/at.js");
    assert_eq!(at["String"], "/*keep*/");
}

#[test]
fn missing_polluting_yields_empty_registry() {
    for source in [
        "{}",
        r#"{ "compilerOptions": {} }"#,
        r#"{ "compilerOptions": { "plugins": [] } }"#,
        r#"{ "compilerOptions": { "plugins": [ { "transform": "x" } ] } }"#,
        r#"{ "compilerOptions": { "plugins": [ { "polluting": null } ] } }"#,
    ] {
        let options = PluginOptions::from_tsconfig_str(source).unwrap();
        assert!(options.polluting.is_empty(), "{source}");
    }
}

#[test]
fn invalid_plugin_options_are_rejected() {
    let err = PluginOptions::from_tsconfig_str(r#"{ "compilerOptions": { "plugins": {} } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("must be an array"), "{err}");

    let err = PluginOptions::from_tsconfig_str(
        r#"{ "compilerOptions": { "plugins": [ { "polluting": { "at": [] } } ] } }"#,
    )
    .unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid `polluting` option"), "{chain}");
    assert!(chain.contains("`at`"), "{chain}");
}

#[test]
fn tsconfig_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "compilerOptions": {{ "plugins": [ {{ "polluting": {{ "toJSON": {{ "Date": "shim/date" }} }} }} ] }} }}"#
    )
    .unwrap();

    let options = PluginOptions::from_tsconfig_path(file.path()).unwrap();
    assert_eq!(options.polluting.get("toJSON").unwrap()["Date"], "shim/date");
}

#[test]
fn missing_tsconfig_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tsconfig.json");
    let err = PluginOptions::from_tsconfig_path(&path).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("failed to read tsconfig"), "{chain}");
    assert!(chain.contains("tsconfig.json"), "{chain}");
}

#[test]
fn jsonc_normalization() {
    assert_eq!(crate::jsonc::normalize("[1, 2,]"), "[1, 2]");
    assert_eq!(crate::jsonc::normalize("{\"a\": 1, // c\n}"), "{\"a\": 1 \n}");
    assert_eq!(crate::jsonc::normalize("[/* a\nb */1]"), "[\n1]");
    assert_eq!(crate::jsonc::normalize(r#"["a\"//b",]"#), r#"["a\"//b"]"#);
}
