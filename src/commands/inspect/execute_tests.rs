//! Execute tests for inspect command.

#[cfg(test)]
mod tests {
    use super::super::InspectCmd;
    use crate::commands::Execute;
    use crate::test_utils::{create_temp_json_file, SALES_SCHEMA_JSON};
    use rstest::rstest;

    fn inspect_cmd(schema: &std::path::Path) -> InspectCmd {
        InspectCmd {
            schema: schema.to_path_buf(),
            model: None,
            type_name: None,
        }
    }

    #[rstest]
    fn test_inspect_lists_all_types() {
        let file = create_temp_json_file(SALES_SCHEMA_JSON);
        let result = inspect_cmd(file.path()).execute().unwrap();

        assert_eq!(result.model, "sales");
        assert_eq!(result.total_types, 3);
        let names: Vec<_> = result.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Address", "Order", "Person"]);
    }

    #[rstest]
    fn test_inspect_reports_classification() {
        let file = create_temp_json_file(SALES_SCHEMA_JSON);
        let result = inspect_cmd(file.path()).execute().unwrap();

        let person = result.types.iter().find(|t| t.name == "Person").unwrap();
        let by_name = |name: &str| person.properties.iter().find(|p| p.name == name).unwrap();

        assert!(by_name("Id").select_all);
        assert!(by_name("Address").select_all);
        // Collection navigation is a relationship, never select-all
        assert!(!by_name("Orders").select_all);
        assert_eq!(by_name("Orders").target, "[Order]");
    }

    #[rstest]
    fn test_inspect_filters_by_type() {
        let file = create_temp_json_file(SALES_SCHEMA_JSON);
        let mut cmd = inspect_cmd(file.path());
        cmd.type_name = Some("Order".to_string());

        let result = cmd.execute().unwrap();
        assert_eq!(result.total_types, 1);
        assert_eq!(result.types[0].name, "Order");
        assert!(result.types[0].declares_key);
    }

    #[rstest]
    fn test_inspect_unknown_type_fails() {
        let file = create_temp_json_file(SALES_SCHEMA_JSON);
        let mut cmd = inspect_cmd(file.path());
        cmd.type_name = Some("Ghost".to_string());

        let err = cmd.execute().unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[rstest]
    fn test_inspect_missing_schema_file_fails() {
        let cmd = inspect_cmd(std::path::Path::new("/nonexistent/schema.json"));
        assert!(cmd.execute().is_err());
    }

    #[rstest]
    fn test_inspect_requires_model_flag_for_multi_model_files() {
        let json = r#"{"models": [{"id": "a", "types": []}, {"id": "b", "types": []}]}"#;
        let file = create_temp_json_file(json);

        let err = inspect_cmd(file.path()).execute().unwrap_err();
        assert!(err.to_string().contains("--model"));

        let mut cmd = inspect_cmd(file.path());
        cmd.model = Some("b".to_string());
        assert_eq!(cmd.execute().unwrap().model, "b");
    }
}
