//! HTTP access to the taskboard API.

use api_shared::{ErrorRes, Task, TaskReq};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};

/// Default API base URL when `TASKBOARD_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Errors from [`HttpTaskApi`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response, or its body could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The configured base URL cannot have paths appended to it.
    #[error("invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// True when the server was reached and answered, whatever the status.
    pub fn is_response(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Result type for client calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// The four calls the board makes against the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Task>>;

    async fn create(&self, req: TaskReq) -> ClientResult<Task>;

    async fn update(&self, id: &str, req: TaskReq) -> ClientResult<Task>;

    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// [`TaskApi`] over HTTP with reqwest.
///
/// No timeouts or retries are configured beyond reqwest's defaults.
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    client: Client,
    base_url: Url,
}

impl HttpTaskApi {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root of the API, e.g. `http://localhost:8000`. A trailing `/` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` does not parse as an http(s)-style URL
    /// that paths can be appended to.
    pub fn new(base_url: impl AsRef<str>) -> ClientResult<Self> {
        let raw = base_url.as_ref();
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: raw.to_string(),
            reason,
        };
        let base_url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("cannot be a base URL".into()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn tasks_url(&self) -> Url {
        self.endpoint(&["tasks"])
    }

    fn task_url(&self, id: &str) -> Url {
        self.endpoint(&["tasks", id])
    }

    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorRes>().await {
            Ok(body) => body.message,
            Err(_) => reason(status),
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let response = self.client.get(self.tasks_url()).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create(&self, req: TaskReq) -> ClientResult<Task> {
        let response = self.client.post(self.tasks_url()).json(&req).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, id: &str, req: TaskReq) -> ClientResult<Task> {
        let response = self.client.put(self.task_url(id)).json(&req).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        for base in ["http://localhost:8000", "http://localhost:8000/"] {
            let api = HttpTaskApi::new(base).unwrap();

            assert_eq!(api.tasks_url().as_str(), "http://localhost:8000/tasks");
            assert_eq!(
                api.task_url("abc").as_str(),
                "http://localhost:8000/tasks/abc"
            );
        }
    }

    #[test]
    fn test_task_url_keeps_base_path() {
        let api = HttpTaskApi::new("http://localhost:8000/api/").unwrap();

        assert_eq!(
            api.task_url("abc").as_str(),
            "http://localhost:8000/api/tasks/abc"
        );
    }

    #[test]
    fn test_task_url_encodes_id_as_one_segment() {
        let api = HttpTaskApi::new(DEFAULT_API_URL).unwrap();

        let url = api.task_url("a/b?c#d");

        assert_eq!(url.as_str(), "http://localhost:8000/tasks/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.path_segments().map(|s| s.count()), Some(2));
    }

    #[test]
    fn test_new_rejects_unusable_base_url() {
        assert!(matches!(
            HttpTaskApi::new("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpTaskApi::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_status_error_counts_as_response() {
        let err = ClientError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert!(err.is_response());
        assert_eq!(err.to_string(), "server returned 500: boom");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let api = HttpTaskApi::new("http://127.0.0.1:9").unwrap();

        let err = api.list().await.unwrap_err();
        assert!(!err.is_response());
    }
}
