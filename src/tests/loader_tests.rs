#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::errors::CompileError;
    use crate::implementations::compiler::CssPropertyCompiler;
    use crate::implementations::config::{ CompilerConfig, ConfigError };
    use crate::implementations::record_loader::{
        parse_records,
        FileRecordSource,
        LoadError,
        RecordFormat,
    };
    use crate::traits::property_compiler::PropertyCompiler;
    use crate::traits::record_source::RecordSource;

    const JSON_RECORDS: &str = r#"
    {
        "parameters": { "priority": { "default": "Low" } },
        "data": [
            {
                "name": "color",
                "priority": "High",
                "inherited": true,
                "api_methods": ["parseSingleValue"]
            },
            { "name": "-webkit-color", "priority": "High", "alias_for": "color" },
            { "name": "src", "priority": "Low", "is_property": false, "is_descriptor": true },
            { "name": "width", "priority": "Low", "alias_for": "" }
        ]
    }
    "#;

    const YAML_RECORDS: &str = r#"
- name: opacity
  priority: Low
  interpolable: true
- name: -webkit-opacity
  priority: Low
  alias_for: opacity
"#;

    #[test]
    fn test_parses_wrapped_json() {
        let records = parse_records(JSON_RECORDS, RecordFormat::Json).unwrap();
        assert_eq!(records.len(), 4);

        let color = &records[0];
        assert!(color.is_property);
        assert!(!color.is_descriptor);
        assert_eq!(color.attributes["inherited"], serde_json::json!(true));
        assert_eq!(color.attributes["api_methods"], serde_json::json!(["parseSingleValue"]));
        assert!(!color.attributes.contains_key("name"));

        assert_eq!(records[1].alias_target(), Some("color"));
        assert!(!records[2].is_property);
        assert!(records[2].is_descriptor);
        assert!(!records[3].is_alias());
    }

    #[test]
    fn test_parses_bare_yaml() {
        let records = parse_records(YAML_RECORDS, RecordFormat::Yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].attributes["interpolable"], serde_json::json!(true));
        assert_eq!(records[1].alias_target(), Some("opacity"));
    }

    #[test]
    fn test_loaded_records_compile_with_attributes() {
        let records = parse_records(JSON_RECORDS, RecordFormat::Json).unwrap();
        let table = CssPropertyCompiler::default().compile(records).unwrap();

        let alias = table.alias_of("color").unwrap();
        assert_eq!(alias.attributes["inherited"], serde_json::json!(true));

        let json = serde_json::to_value(&table).unwrap();
        let entries = json["properties_including_aliases"].as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["name"], "color");
        assert_eq!(entries[0]["property_id"], "CSSPropertyColor");
        assert_eq!(entries[0]["attributes"]["inherited"], true);
        assert_eq!(entries[3]["enum_value"], 3 + 512);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(RecordFormat::from_path(Path::new("a/b.json")).unwrap(), RecordFormat::Json);
        assert_eq!(RecordFormat::from_path(Path::new("b.YML")).unwrap(), RecordFormat::Yaml);
        assert!(
            matches!(
                RecordFormat::from_path(Path::new("CSSProperties.json5")),
                Err(LoadError::UnsupportedFormat(ref ext)) if ext == "json5"
            )
        );
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let source = FileRecordSource::new("does/not/exist.json");
        match source.load() {
            Err(err @ CompileError::InvalidInput(_)) => assert!(!err.is_configuration_error()),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_records_are_rejected() {
        let result = parse_records(r#"[{ "priority": "High" }]"#, RecordFormat::Json);
        assert!(matches!(result, Err(LoadError::JsonError(_))));
    }

    #[test]
    fn test_malformed_record_error_names_the_field() {
        let wrapped = r#"{ "data": [{ "name": "color", "priority": "High" }, { "priority": "Low" }] }"#;
        let err = parse_records(wrapped, RecordFormat::Json).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{}", err);

        let err = parse_records("- priority: Low\n", RecordFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{}", err);
    }

    #[test]
    fn test_authored_attributes_do_not_shadow_computed_fields() {
        let records = parse_records(
            r#"[{ "name": "color", "priority": "High", "enum_value": 99, "property_id": "Bogus" }]"#,
            RecordFormat::Json
        ).unwrap();
        let table = CssPropertyCompiler::default().compile(records).unwrap();

        let json = serde_json::to_value(&table).unwrap();
        let color = &json["properties_including_aliases"][0];
        assert_eq!(color["enum_value"], 3);
        assert_eq!(color["property_id"], "CSSPropertyColor");
        assert_eq!(color["attributes"]["enum_value"], 99);
        assert_eq!(color["attributes"]["property_id"], "Bogus");
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let config = CompilerConfig::from_yaml("naming:\n  alias_prefix: CSSAlias\n").unwrap();
        assert_eq!(config.naming.alias_prefix, "CSSAlias");
        assert_eq!(config.naming.property_prefix, "CSSProperty");
        assert_eq!(config.naming.internal_prefix, "-internal-");

        let compiler = CssPropertyCompiler::new(config);
        let records = parse_records(YAML_RECORDS, RecordFormat::Yaml).unwrap();
        let table = compiler.compile(records).unwrap();
        assert_eq!(table.aliases()[0].property_id, "CSSAliasWebkitOpacity");
    }

    #[test]
    fn test_config_rejects_overlapping_prefixes() {
        let result = CompilerConfig::from_yaml(
            "naming:\n  property_prefix: CSSProperty\n  alias_prefix: CSSProperty\n"
        );
        assert!(matches!(result, Err(ConfigError::InvalidNaming(_))));

        let err: CompileError = result.unwrap_err().into();
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_in_memory_source() {
        let records = parse_records(YAML_RECORDS, RecordFormat::Yaml).unwrap();
        assert_eq!(records.describe(), "2 in-memory records");
        assert_eq!(records.load().unwrap(), records);
    }
}
