//! CLI parsing tests for project command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_defaults_test! {
        command: "project",
        variant: Project,
        required_args: ["Person", "--input", "people.json"],
        defaults: {
            schema: PathBuf::from("./schema.json"),
            model: None::<String>,
        },
    }

    crate::cli_option_test_with_required! {
        command: "project",
        variant: Project,
        required_args: ["Person", "--input", "people.json"],
        test_name: test_schema_path_option,
        args: ["--schema", "./sales.json"],
        field: schema,
        expected: PathBuf::from("./sales.json"),
    }

    crate::cli_option_test_with_required! {
        command: "project",
        variant: Project,
        required_args: ["Person", "--input", "people.json"],
        test_name: test_model_option,
        args: ["-m", "sales"],
        field: model,
        expected: Some("sales".to_string()),
    }

    #[rstest]
    fn test_type_name_is_positional() {
        let args =
            Args::try_parse_from(["schema_project", "project", "Person", "-i", "people.json"])
                .unwrap();
        match args.command {
            crate::commands::Command::Project(cmd) => {
                assert_eq!(cmd.type_name, "Person");
                assert_eq!(cmd.input, PathBuf::from("people.json"));
            }
            _ => panic!("Expected Project command"),
        }
    }

    #[rstest]
    fn test_input_is_required() {
        let result = Args::try_parse_from(["schema_project", "project", "Person"]);
        assert!(result.is_err(), "Missing --input should be rejected");
    }
}
