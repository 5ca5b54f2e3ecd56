#[cfg(test)]
mod tests {
    use clap::Parser;
    use reqwest::StatusCode;
    use rokim_todo::api::ServiceError;
    use rokim_todo::commands::{describe, Cli};
    use rokim_todo::libs::messages::Message;
    use rokim_todo::libs::store::StoreError;
    use rokim_todo::msg_bail_anyhow;

    #[test]
    fn test_parse_commands() {
        let valid = [
            vec!["rokim-todo", "init"],
            vec!["rokim-todo", "init", "--reset"],
            vec!["rokim-todo", "list", "--category", "Work", "--all"],
            vec!["rokim-todo", "add", "Buy milk", "-c", "Home"],
            vec!["rokim-todo", "edit", "3", "--title", "Renamed"],
            vec!["rokim-todo", "done", "3"],
            vec!["rokim-todo", "undo", "3"],
            vec!["rokim-todo", "delete", "3", "--yes"],
            vec!["rokim-todo", "board", "--api-url", "http://localhost:8080"],
            vec!["rokim-todo", "--api-url", "http://localhost:8080", "list"],
        ];
        for args in valid {
            assert!(Cli::try_parse_from(&args).is_ok(), "failed to parse {:?}", args);
        }
    }

    #[test]
    fn test_reject_invalid_commands() {
        assert!(Cli::try_parse_from(["rokim-todo"]).is_err());
        assert!(Cli::try_parse_from(["rokim-todo", "done"]).is_err());
        assert!(Cli::try_parse_from(["rokim-todo", "done", "three"]).is_err());
        assert!(Cli::try_parse_from(["rokim-todo", "watch"]).is_err());
    }

    #[test]
    fn test_describe_store_errors() {
        let redirect = StoreError::Service(ServiceError::Redirect {
            location: "http://todo.example.com/login".to_string(),
        });
        assert!(matches!(
            describe(&redirect),
            Message::SignInRequired(location) if location == "http://todo.example.com/login"
        ));

        let status = StoreError::Service(ServiceError::Status {
            url: "http://todo.example.com/api/v1/todos".to_string(),
            status: StatusCode::BAD_GATEWAY,
        });
        assert!(matches!(describe(&status), Message::RequestFailed(_)));

        let unknown = StoreError::UnknownCategory("Garden".to_string());
        assert_eq!(describe(&unknown).to_string(), "Category 'Garden' not found");

        let invalid = StoreError::InvalidInput("title must not be empty".to_string());
        assert_eq!(describe(&invalid).to_string(), "Invalid todo: title must not be empty");
    }

    fn require_category(known: &[&str], category: &str) -> anyhow::Result<()> {
        if !known.contains(&category) {
            msg_bail_anyhow!(Message::CategoryNotFound(category.to_string()))
        }
        Ok(())
    }

    #[test]
    fn test_bail_with_message() {
        assert!(require_category(&["Work"], "Work").is_ok());

        let err = require_category(&["Work"], "Garden").unwrap_err();
        assert_eq!(err.to_string(), "❌ Category 'Garden' not found");
    }
}
