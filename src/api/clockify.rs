//! Clockify REST API client.
//!
//! Wraps the handful of Clockify v1 endpoints the fill workflow uses. Every
//! request carries the API key in the `X-Api-Key` header together with a JSON
//! content type; responses are decoded with `serde`.
//!
//! ## Endpoints
//!
//! - `GET /workspaces`
//! - `GET /user`
//! - `GET /workspaces/{workspace}/projects`
//! - `GET /workspaces/{workspace}/projects/{project}/tasks`
//! - `GET /workspaces/{workspace}/user/{user}/time-entries?start&end&project`
//! - `POST /workspaces/{workspace}/time-entries`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clockfill::api::{clockify::Clockify, ClockifyConfig, TimeTracker};
//!
//! let client = Clockify::new(&ClockifyConfig::default(), "my-api-key")?;
//! let workspace = client.resolve_workspace().await?;
//! let projects = client.list_projects(&workspace.id).await?;
//! ```

use super::TimeTracker;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::workdays::WorkWindow;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, CONTENT_TYPE},
    Client, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Public Clockify API base URL.
pub const DEFAULT_API_URL: &str = "https://api.clockify.me/api/v1";

const API_KEY_HEADER: &str = "x-api-key";

/// Failures of a single Clockify request.
#[derive(Debug, Error)]
pub enum ClockifyError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with an unexpected status.
    #[error("{status}{}", body_suffix(.body))]
    Status { status: StatusCode, body: String },

    /// The response body could not be decoded.
    #[error("error decoding response (status {status}): {message} - body: {body}")]
    Decode {
        status: StatusCode,
        message: String,
        body: String,
    },

    #[error("no workspaces found")]
    NoWorkspaces,

    #[error("invalid API key: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(" - body: {}", body)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: String,
    pub name: String,
}

/// Request body of `POST /workspaces/{workspace}/time-entries`.
///
/// Clockify expects `billable` as the string `"true"` or `"false"`, and
/// `taskId` is left out entirely when no task was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub start: String,
    pub end: String,
    pub description: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(serialize_with = "bool_as_string")]
    pub billable: bool,
}

impl NewTimeEntry {
    pub fn new(window: &WorkWindow, description: &str, project_id: &str, task_id: Option<&str>, billable: bool) -> Self {
        Self {
            start: window.start_rfc3339(),
            end: window.end_rfc3339(),
            description: description.to_owned(),
            project_id: project_id.to_owned(),
            task_id: task_id.map(str::to_owned),
            billable,
        }
    }
}

fn bool_as_string<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

/// HTTP client for the Clockify API.
#[derive(Debug)]
pub struct Clockify {
    client: Client,
    config: ClockifyConfig,
    headers: HeaderMap,
}

impl Clockify {
    /// Creates a client for `config.api_url` authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// [`ClockifyError::InvalidHeader`] if the key cannot be sent as a header value.
    pub fn new(config: &ClockifyConfig, api_key: &str) -> Result<Self, ClockifyError> {
        let mut api_key = HeaderValue::from_str(api_key)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client: Client::new(),
            config: config.clone(),
            headers,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Sends a GET and returns status and raw body of a successful response.
    async fn get_raw(&self, path: &str, query: &[(&str, &str)]) -> Result<(StatusCode, String), ClockifyError> {
        let mut request = self.client.get(self.url(path)).headers(self.headers.clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(method = "GET", path, %status, "clockify request");

        if !status.is_success() {
            return Err(ClockifyError::Status { status, body });
        }
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClockifyError> {
        let (status, body) = self.get_raw(path, &[]).await?;
        decode(status, &body)
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ClockifyError> {
    serde_json::from_str(body).map_err(|e| ClockifyError::Decode {
        status,
        message: e.to_string(),
        body: body.to_owned(),
    })
}

impl TimeTracker for Clockify {
    async fn resolve_workspace(&self) -> Result<Workspace, ClockifyError> {
        let workspaces: Vec<Workspace> = self.get_json("/workspaces").await?;
        workspaces.into_iter().next().ok_or(ClockifyError::NoWorkspaces)
    }

    async fn resolve_current_user(&self) -> Result<User, ClockifyError> {
        self.get_json("/user").await
    }

    async fn list_projects(&self, workspace_id: &str) -> Result<Vec<Project>, ClockifyError> {
        self.get_json(&format!("/workspaces/{}/projects", workspace_id)).await
    }

    async fn list_tasks(&self, workspace_id: &str, project_id: &str) -> Result<Vec<Task>, ClockifyError> {
        self.get_json(&format!("/workspaces/{}/projects/{}/tasks", workspace_id, project_id))
            .await
    }

    async fn has_entry_in_window(
        &self,
        workspace_id: &str,
        user_id: &str,
        project_id: &str,
        window: &WorkWindow,
    ) -> Result<bool, ClockifyError> {
        let path = format!("/workspaces/{}/user/{}/time-entries", workspace_id, user_id);
        let (start, end) = (window.start_rfc3339(), window.end_rfc3339());
        let query = [("start", start.as_str()), ("end", end.as_str()), ("project", project_id)];

        let (status, body) = self.get_raw(&path, &query).await?;
        if body.trim().is_empty() {
            return Ok(false);
        }

        let entries: Vec<serde_json::Value> = decode(status, &body)?;
        Ok(!entries.is_empty())
    }

    async fn create_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<(), ClockifyError> {
        let path = format!("/workspaces/{}/time-entries", workspace_id);
        let response = self.client.post(self.url(&path)).headers(self.headers.clone()).json(entry).send().await?;
        let status = response.status();
        tracing::debug!(method = "POST", path = %path, %status, "clockify request");

        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(ClockifyError::Status { status, body });
        }
        Ok(())
    }
}

/// Configuration for the Clockify API integration.
///
/// The API key is deliberately not part of it: it comes from the
/// `CLOCKIFY_API_KEY` environment variable and never touches the config file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClockifyConfig {
    /// Base URL of the API, without a trailing slash.
    ///
    /// Defaults to the public Clockify endpoint; regional or self-hosted
    /// installations use their own.
    pub api_url: String,
}

impl Default for ClockifyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClockifyConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "clockify".to_string(),
            name: "Clockify".to_string(),
        }
    }

    /// Prompts for the Clockify settings, pre-filled with `config` or the defaults.
    pub fn init(config: &Option<Self>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleClockify);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
