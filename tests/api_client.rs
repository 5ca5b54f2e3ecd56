#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use rokim_todo::api::{ServiceError, TaskService, TodoApi, TodoApiConfig};
    use rokim_todo::libs::store::TodoStore;
    use rokim_todo::libs::todo::NewTodo;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// A request as seen by the loopback server.
    #[derive(Debug)]
    struct Received {
        method: String,
        path: String,
        body: String,
    }

    fn response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
        let extra: String = headers
            .iter()
            .map(|(name, value)| format!("{}: {}\r\n", name, value))
            .collect();
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
            status,
            body.len(),
            extra,
            body
        )
    }

    fn json(body: &str) -> String {
        response("200 OK", &[], body)
    }

    async fn read_request(stream: &mut TcpStream) -> Received {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let read = stream.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before the request was complete");
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
                break position + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .map(|(_, value)| value.trim().parse::<usize>().unwrap())
            .unwrap_or(0);
        while buffer.len() < header_end + content_length {
            let read = stream.read(&mut chunk).await.unwrap();
            buffer.extend_from_slice(&chunk[..read]);
        }

        let mut request_line = head.lines().next().unwrap().split_whitespace();
        Received {
            method: request_line.next().unwrap().to_string(),
            path: request_line.next().unwrap().to_string(),
            body: String::from_utf8_lossy(&buffer[header_end..header_end + content_length]).to_string(),
        }
    }

    /// Serves one canned response per connection, in order, and returns what it received.
    async fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<Received>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let mut received = Vec::new();
            for canned in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                received.push(read_request(&mut stream).await);
                stream.write_all(canned.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            received
        });
        (base_url, handle)
    }

    fn api(base_url: &str) -> TodoApi {
        // The loopback server must be reached directly.
        for name in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
            std::env::remove_var(name);
        }
        TodoApi::new(&TodoApiConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_list_todos() {
        let body = r#"[
            {"id": 1, "title": "Write report", "description": null, "category": "Work", "done_at": null, "created_at": "2024-01-01T08:00:00Z"},
            {"id": 2, "title": "Send invoice", "description": "March", "category": "Work", "done_at": "2024-01-02T12:00:00Z"}
        ]"#;
        let (base_url, server) = serve(vec![json(body)]).await;

        let todos = api(&base_url).list().await.unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].description, "");
        assert!(!todos[0].is_done());
        assert!(todos[0].created_at.is_some());
        assert_eq!(todos[1].description, "March");
        assert!(todos[1].is_done());
        assert!(todos[1].created_at.is_none());

        let received = server.await.unwrap();
        assert_eq!(received[0].method, "GET");
        assert_eq!(received[0].path, "/api/v1/todos");
    }

    #[tokio::test]
    async fn test_base_url_path_is_kept() {
        let (base_url, server) = serve(vec![json("[]")]).await;

        let todos = api(&format!("{}/service", base_url)).list().await.unwrap();

        assert!(todos.is_empty());
        assert_eq!(server.await.unwrap()[0].path, "/service/api/v1/todos");
    }

    #[tokio::test]
    async fn test_create_todo() {
        let body = r#"{"id": 5, "title": "Buy milk", "description": "", "category": "Home", "done_at": null}"#;
        let (base_url, server) = serve(vec![response("201 Created", &[], body)]).await;

        let created = api(&base_url)
            .create(&NewTodo::new(" Buy milk ", "", "Home"))
            .await
            .unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.category, "Home");

        let received = server.await.unwrap();
        assert_eq!(received[0].method, "POST");
        assert_eq!(received[0].path, "/api/v1/todos");
        let sent: serde_json::Value = serde_json::from_str(&received[0].body).unwrap();
        assert_eq!(sent["title"], "Buy milk");
        assert_eq!(sent["category"], "Home");
    }

    #[tokio::test]
    async fn test_update_todo() {
        let body = r#"{"id": 3, "title": "Renamed", "description": "", "category": "Home", "done_at": null}"#;
        let (base_url, server) = serve(vec![json(body)]).await;

        let updated = api(&base_url)
            .update(3, &NewTodo::new("Renamed", "", "Home"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        let received = server.await.unwrap();
        assert_eq!(received[0].method, "PUT");
        assert_eq!(received[0].path, "/api/v1/todos/3");
    }

    #[tokio::test]
    async fn test_mark_done_accepts_partial_record() {
        let (base_url, server) = serve(vec![json(r#"{"done_at": "2024-03-05T10:30:00Z"}"#)]).await;

        let completion = api(&base_url).mark_done(3).await.unwrap();

        assert_eq!(
            completion.completed_at.map(|at| at.to_rfc3339()),
            Some("2024-03-05T10:30:00+00:00".to_string())
        );
        let received = server.await.unwrap();
        assert_eq!(received[0].method, "POST");
        assert_eq!(received[0].path, "/api/v1/todos/3/done");
    }

    #[tokio::test]
    async fn test_mark_undone_accepts_full_record() {
        let body = r#"{"id": 3, "title": "Water plants", "description": "", "category": "Home", "done_at": null}"#;
        let (base_url, server) = serve(vec![json(body)]).await;

        let completion = api(&base_url).mark_undone(3).await.unwrap();

        assert!(completion.completed_at.is_none());
        assert_eq!(server.await.unwrap()[0].path, "/api/v1/todos/3/to_do");
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let (base_url, server) = serve(vec![response("204 No Content", &[], "")]).await;

        api(&base_url).delete(3).await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received[0].method, "DELETE");
        assert_eq!(received[0].path, "/api/v1/todos/3");
    }

    #[tokio::test]
    async fn test_redirect_is_reported_with_absolute_location() {
        let (base_url, server) = serve(vec![response("302 Found", &[("Location", "/login?next=/todos")], "")]).await;

        let result = api(&base_url).list().await;

        match result {
            Err(ServiceError::Redirect { location }) => {
                assert_eq!(location, format!("{}/login?next=/todos", base_url));
            }
            other => panic!("expected a redirect error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_redirect_without_location() {
        let (base_url, server) = serve(vec![response("302 Found", &[], "")]).await;

        let result = api(&base_url).delete(1).await;

        assert!(matches!(result, Err(ServiceError::RedirectWithoutLocation { .. })));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status() {
        let (base_url, server) = serve(vec![response("500 Internal Server Error", &[], "{}")]).await;

        let result = api(&base_url).list().await;

        match result {
            Err(ServiceError::Status { status, url }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(url.ends_with("/api/v1/todos"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unexpected_body() {
        let (base_url, server) = serve(vec![json(r#"{"todos": []}"#)]).await;

        let result = api(&base_url).list().await;

        assert!(matches!(result, Err(ServiceError::Decode { .. })));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_zero_timeout_means_no_timeout() {
        let (base_url, server) = serve(vec![json("[]")]).await;
        let config = TodoApiConfig {
            api_url: base_url,
            timeout: 0,
        };
        for name in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
            std::env::remove_var(name);
        }

        let todos = TodoApi::new(&config).unwrap().list().await.unwrap();

        assert!(todos.is_empty());
        server.await.unwrap();
    }

    #[test]
    fn test_invalid_base_url() {
        let result = TodoApi::new(&TodoApiConfig::new("not a url"));
        assert!(matches!(result, Err(ServiceError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_store_over_http() {
        let list = r#"[
            {"id": 1, "title": "Write report", "description": "", "category": "Work", "done_at": null},
            {"id": 2, "title": "Send invoice", "description": "", "category": "Work", "done_at": "2024-01-01T00:00:00Z"}
        ]"#;
        let (base_url, server) = serve(vec![
            json(list),
            json(r#"{"done_at": "2024-03-05T10:30:00Z"}"#),
            response("302 Found", &[("Location", "http://auth.example.com/sign_in")], ""),
        ])
        .await;
        let mut store = TodoStore::new(api(&base_url));

        store.load_all().await.unwrap();
        assert_eq!(store.visible_todos("Work").unwrap().len(), 1);

        store.mark_done(1).await.unwrap();
        assert!(store.visible_todos("Work").unwrap().is_empty());

        // A redirect on delete leaves the todo in place.
        assert!(store.delete(1).await.is_err());
        assert!(store.get(1).is_some());

        assert_eq!(server.await.unwrap().len(), 3);
    }
}
