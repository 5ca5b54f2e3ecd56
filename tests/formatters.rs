#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, Utc};
    use rokim_todo::libs::config::DisplayConfig;
    use rokim_todo::libs::filter::DetailToggles;
    use rokim_todo::libs::formatter::{format_datetime, todo_label, truncate_description, DEFAULT_DATE_FORMAT};
    use rokim_todo::libs::messages::Message;
    use rokim_todo::libs::todo::Todo;
    use rokim_todo::libs::view::View;

    fn todo(id: i64, title: &str, description: &str, done_at: Option<&str>) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: "Home".to_string(),
            completed_at: done_at.map(|value| value.parse().unwrap()),
            created_at: None,
        }
    }

    #[test]
    fn test_format_datetime_absent() {
        assert_eq!(format_datetime(None, DEFAULT_DATE_FORMAT), "");
    }

    #[test]
    fn test_format_datetime_uses_local_time() {
        let value: DateTime<Utc> = "2024-01-01T12:30:00Z".parse().unwrap();
        let expected = value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
        assert_eq!(format_datetime(Some(&value), DEFAULT_DATE_FORMAT), expected);
    }

    #[test]
    fn test_format_datetime_custom_format() {
        let value: DateTime<Utc> = "2024-07-15T00:00:00Z".parse().unwrap();
        let expected = value.with_timezone(&Local).format("%Y").to_string();
        assert_eq!(format_datetime(Some(&value), "%Y"), expected);
    }

    #[test]
    fn test_todo_label() {
        assert_eq!(todo_label(&todo(12, "Buy milk", "", None)), "#12 Buy milk [Home]");
        assert_eq!(
            todo_label(&todo(3, "Water plants", "", Some("2024-01-01T00:00:00Z"))),
            "#3 ✓ Water plants [Home]"
        );
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description(""), "");
        assert_eq!(truncate_description("Short note"), "Short note");
        assert_eq!(truncate_description("First line\nSecond line"), "First line…");

        let long = "é".repeat(60);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 49);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_messages() {
        assert_eq!(Message::TodoDeleted(3).to_string(), "Todo #3 deleted");
        assert_eq!(
            Message::TodoCreated(5, "Buy milk".to_string()).to_string(),
            "Todo #5 'Buy milk' created"
        );
        assert_eq!(
            Message::CategoryHeader {
                category: "Work".to_string(),
                shown: 1,
                total: 2
            }
            .to_string(),
            "▾ Work (1/2)"
        );
        assert!(Message::SignInRequired("http://example.com/login".to_string())
            .to_string()
            .contains("http://example.com/login"));
    }

    #[test]
    fn test_table_rows() {
        let first = todo(1, "Write report", "Quarterly numbers", None);
        let second = todo(2, "Send invoice", "", Some("2024-01-01T00:00:00Z"));
        let todos = vec![&first, &second];

        let table = View::todos(&todos, &DetailToggles::default(), &DisplayConfig::default());

        // Header plus one row per todo.
        assert_eq!(table.len(), 3);
        let header = table.get_row(0).unwrap();
        assert_eq!(header.len(), 4);
        assert_eq!(header.get_cell(2).unwrap().get_content(), "DESCRIPTION");
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "Write report");
        assert_eq!(table.get_row(1).unwrap().get_cell(3).unwrap().get_content(), "");
    }

    #[test]
    fn test_table_without_descriptions() {
        let only = todo(1, "Write report", "Quarterly numbers", None);
        let display = DisplayConfig {
            show_descriptions: false,
            ..DisplayConfig::default()
        };

        let table = View::todos(&[&only], &DetailToggles::default(), &display);

        assert_eq!(table.get_row(0).unwrap().len(), 3);
        assert_eq!(table.get_row(0).unwrap().get_cell(2).unwrap().get_content(), "DONE AT");
    }
}
