use super::{redirect, ServiceError, TaskService};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::todo::{Completion, NewTodo, Todo, TodoId};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{redirect::Policy, Client, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const TODOS_URL: &str = "api/v1/todos";
const DONE_SUFFIX: &str = "done";
const UNDONE_SUFFIX: &str = "to_do";
const DEFAULT_TIMEOUT: u64 = 30;

/// HTTP client for the todo service REST API.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: Client,
    base_url: Url,
}

impl TodoApi {
    pub fn new(config: &TodoApiConfig) -> Result<Self, ServiceError> {
        let base_url = Self::parse_base_url(&config.api_url)?;
        let mut builder = Client::builder().redirect(Policy::none()).cookie_store(true);
        if config.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout));
        }
        let client = builder
            .build()
            .map_err(|source| ServiceError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn parse_base_url(api_url: &str) -> Result<Url, ServiceError> {
        // Without the trailing slash `join` would drop the last path segment.
        let mut normalized = api_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let url = Url::parse(&normalized).map_err(|err| ServiceError::InvalidUrl {
            url: api_url.to_string(),
            reason: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl {
                url: api_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url.join(path).map_err(|err| ServiceError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: err.to_string(),
        })
    }

    fn todos_url(&self) -> Result<Url, ServiceError> {
        self.endpoint(TODOS_URL)
    }

    fn todo_url(&self, id: TodoId, suffix: Option<&str>) -> Result<Url, ServiceError> {
        match suffix {
            Some(suffix) => self.endpoint(&format!("{}/{}/{}", TODOS_URL, id, suffix)),
            None => self.endpoint(&format!("{}/{}", TODOS_URL, id)),
        }
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|source| ServiceError::Transport {
            url: url.to_string(),
            source,
        })?;
        let response = redirect::intercept(response)?;
        let status = response.status();
        debug!(url = %url, %status, "todo service responded");

        if !status.is_success() {
            return Err(ServiceError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ServiceError> {
        response.json::<T>().await.map_err(|source| ServiceError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl TaskService for TodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        let url = self.todos_url()?;
        let response = self.send(self.client.get(url.clone()), &url).await?;
        Self::decode(response, &url).await
    }

    async fn create(&self, todo: &NewTodo) -> Result<Todo, ServiceError> {
        let url = self.todos_url()?;
        let response = self.send(self.client.post(url.clone()).json(todo), &url).await?;
        Self::decode(response, &url).await
    }

    async fn update(&self, id: TodoId, todo: &NewTodo) -> Result<Todo, ServiceError> {
        let url = self.todo_url(id, None)?;
        let response = self.send(self.client.put(url.clone()).json(todo), &url).await?;
        Self::decode(response, &url).await
    }

    async fn mark_done(&self, id: TodoId) -> Result<Completion, ServiceError> {
        let url = self.todo_url(id, Some(DONE_SUFFIX))?;
        let response = self.send(self.client.post(url.clone()), &url).await?;
        Self::decode(response, &url).await
    }

    async fn mark_undone(&self, id: TodoId) -> Result<Completion, ServiceError> {
        let url = self.todo_url(id, Some(UNDONE_SUFFIX))?;
        let response = self.send(self.client.post(url.clone()), &url).await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, id: TodoId) -> Result<(), ServiceError> {
        let url = self.todo_url(id, None)?;
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

/// Connection settings for the todo service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TodoApiConfig {
    /// Base URL of the service, e.g. `http://localhost:8080`.
    pub api_url: String,
    /// Request timeout in seconds, `0` for none.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl TodoApiConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Todo service".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_else(|| Self::new("http://localhost:8080"));
        msg_print!(Message::ConfigModuleApi);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            timeout: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiTimeout.to_string())
                .default(config.timeout)
                .interact_text()?,
        })
    }
}
