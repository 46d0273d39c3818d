//! Backend API client.
//!
//! One `ApiClient` is built at startup from the resolved backend origin
//! and cloned into every call site. Requests always ride with cookies
//! (credentialed fetch) and carry a 10 second abort timeout. Failures
//! other than 400/401 are logged once here, then handed back as
//! [`ApiError`] for the caller to classify; this module never touches
//! auth state itself.

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, AbortSignal, File, FormData, RequestCredentials};

use crate::web;

/// Backend origin used when the page is served from a dev host.
const DEV_BACKEND: &str = "http://localhost:9090";

/// How long a request may stay in flight before it is aborted.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Resolves the backend origin for a given page hostname.
///
/// Dev hosts talk to the local backend on its own port; anywhere else
/// the API is served from the same origin as the page.
pub fn origin_for(hostname: &str, page_origin: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_BACKEND.to_string()
    } else {
        page_origin.to_string()
    }
}

/// Resolves the backend origin from the current window location.
pub fn backend_origin() -> String {
    let hostname = web::location::hostname().unwrap_or_default();
    let page_origin = web::location::origin().unwrap_or_default();
    origin_for(&hostname, &page_origin)
}

/// Errors produced by [`ApiClient`] calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` carries the
    /// parsed `{"error": ...}` payload when the body had that shape.
    Status { status: u16, message: Option<String> },
    /// The request went out but no response ever came back (server down,
    /// network gone, or the timeout fired).
    NoResponse(String),
    /// The request could not be constructed.
    BuildFailed(String),
    /// A response arrived but its body could not be decoded.
    ParseFailed(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Status {
                status,
                message: Some(msg),
            } => write!(f, "server returned {status}: {msg}"),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "server returned {status}"),
            ApiError::NoResponse(msg) => write!(f, "no response: {msg}"),
            ApiError::BuildFailed(msg) => write!(f, "request build failed: {msg}"),
            ApiError::ParseFailed(msg) => write!(f, "response parse failed: {msg}"),
        }
    }
}

/// Coarse failure classification shared by every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 400/401: the server no longer honors the session.
    SessionInvalid,
    /// Rejected locally before any request went out. Never produced by
    /// the transport; form-level checks use it.
    Validation,
    /// Sent but unanswered.
    Connectivity,
    /// Any other server-side rejection.
    ServerRejection,
}

impl ApiError {
    /// Classifies this error for state handling.
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Status {
                status: 400 | 401, ..
            } => FailureKind::SessionInvalid,
            ApiError::Status { .. } | ApiError::ParseFailed(_) => FailureKind::ServerRejection,
            ApiError::NoResponse(_) | ApiError::BuildFailed(_) => FailureKind::Connectivity,
        }
    }

    /// The HTTP status, when the server actually answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error payload shape used by the backend: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

/// Builder for `multipart/form-data` request bodies.
///
/// The browser derives the content type (and boundary) from the attached
/// `FormData` itself, so no header juggling happens here.
pub struct Multipart {
    inner: FormData,
}

impl Multipart {
    pub fn new() -> Result<Self, ApiError> {
        let inner = FormData::new().map_err(|e| ApiError::BuildFailed(format!("{e:?}")))?;
        Ok(Self { inner })
    }

    /// Appends a text field.
    pub fn text(self, name: &str, value: &str) -> Result<Self, ApiError> {
        self.inner
            .append_with_str(name, value)
            .map_err(|e| ApiError::BuildFailed(format!("{e:?}")))?;
        Ok(self)
    }

    /// Appends a file under its own filename.
    pub fn file(self, name: &str, file: &File) -> Result<Self, ApiError> {
        self.inner
            .append_with_blob_and_filename(name, file, &file.name())
            .map_err(|e| ApiError::BuildFailed(format!("{e:?}")))?;
        Ok(self)
    }

    fn into_inner(self) -> FormData {
        self.inner
    }
}

/// Aborts the associated fetch when the deadline passes.
///
/// Dropping the guard (response arrived, or the future was cancelled)
/// clears the timer before it can fire.
struct TimeoutGuard {
    signal: AbortSignal,
    _timer: Timeout,
}

impl TimeoutGuard {
    fn arm() -> Result<Self, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::BuildFailed(format!("{e:?}")))?;
        let signal = controller.signal();
        let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
        Ok(Self {
            signal,
            _timer: timer,
        })
    }
}

/// HTTP client for the auction backend.
///
/// Cheap to clone; holds only the resolved base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Builds a client pointed at the origin resolved from the window.
    pub fn from_window() -> Self {
        Self::new(backend_origin())
    }

    /// The resolved backend origin, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET `path`, decoding a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let guard = TimeoutGuard::arm().map_err(log_failure)?;
        let res = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&guard.signal))
            .send()
            .await
            .map_err(|e| log_failure(ApiError::NoResponse(e.to_string())))?;

        let res = check_status(res).await?;
        res.json::<T>()
            .await
            .map_err(|e| log_failure(ApiError::ParseFailed(e.to_string())))
    }

    /// POST `path` with no body; returns the response status.
    pub async fn post(&self, path: &str) -> Result<u16, ApiError> {
        let guard = TimeoutGuard::arm().map_err(log_failure)?;
        let res = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&guard.signal))
            .send()
            .await
            .map_err(|e| log_failure(ApiError::NoResponse(e.to_string())))?;

        let res = check_status(res).await?;
        Ok(res.status())
    }

    /// POST `path` with a multipart body; returns the response status.
    pub async fn post_form(&self, path: &str, form: Multipart) -> Result<u16, ApiError> {
        let guard = TimeoutGuard::arm().map_err(log_failure)?;
        let req = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&guard.signal))
            .body(form.into_inner())
            .map_err(|e| log_failure(ApiError::BuildFailed(e.to_string())))?;

        let res = req
            .send()
            .await
            .map_err(|e| log_failure(ApiError::NoResponse(e.to_string())))?;

        let res = check_status(res).await?;
        Ok(res.status())
    }
}

/// Turns a non-2xx response into [`ApiError::Status`], salvaging the
/// `{error}` payload when the body carries one.
async fn check_status(res: Response) -> Result<Response, ApiError> {
    if res.ok() {
        return Ok(res);
    }
    let status = res.status();
    let message = res.text().await.ok().as_deref().and_then(error_message);
    Err(log_failure(ApiError::Status { status, message }))
}

/// Failures are logged once at the client boundary, except 400/401:
/// those are ordinary state answers for the callers, not surprises.
fn log_failure(err: ApiError) -> ApiError {
    if err.kind() != FailureKind::SessionInvalid {
        leptos::logging::error!("API Error: {err}");
    }
    err
}

#[cfg(test)]
mod tests;
