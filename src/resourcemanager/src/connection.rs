// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Result;
use crate::error::Error;
use crate::error::rpc::Status;
use http::Method;
use serde_json::Value;

/// The default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cloudresourcemanager.googleapis.com/v2";

/// Issues a single API request and returns the decoded JSON response.
///
/// This is the seam between the resource types and the transport. The
/// [Folder][crate::model::Folder] operations are written against this trait,
/// so applications can wrap the provided [ReqwestConnection] with their own
/// authentication or retry layers, or substitute a mock in tests:
///
/// ```
/// # use google_cloud_resourcemanager_v1beta1 as resourcemanager;
/// mockall::mock! {
///     #[derive(Debug)]
///     Connection {}
///     #[async_trait::async_trait]
///     impl resourcemanager::connection::ApiConnection for Connection {
///         async fn request(
///             &self,
///             method: http::Method,
///             path: String,
///             body: Option<serde_json::Value>,
///             query: Vec<(String, String)>,
///         ) -> resourcemanager::Result<Option<serde_json::Value>>;
///     }
/// }
/// # fn main() {}
/// ```
///
/// Authentication, connection pooling, retries, and timeouts are the
/// responsibility of the implementation; the resource types never retry and
/// never inspect transport details beyond the returned [Error] kind.
#[async_trait::async_trait]
pub trait ApiConnection: std::fmt::Debug + Send + Sync {
    /// Sends one request to `path` (relative to the service endpoint).
    ///
    /// Returns `Ok(None)` when the response carries no body, e.g. for
    /// `204 No Content` responses to DELETE requests.
    async fn request(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
        query: Vec<(String, String)>,
    ) -> Result<Option<Value>>;
}

/// An [ApiConnection] implemented over HTTP/JSON with [reqwest].
#[derive(Clone, Debug)]
pub struct ReqwestConnection {
    inner: reqwest::Client,
    endpoint: String,
}

impl ReqwestConnection {
    /// Creates a connection against the default service endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a connection against a custom endpoint.
    ///
    /// Useful for testing, or to route requests through a regional or
    /// private endpoint.
    pub fn with_endpoint<T: Into<String>>(endpoint: T) -> Self {
        Self {
            inner: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this connection sends requests to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ReqwestConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ApiConnection for ReqwestConnection {
    async fn request(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
        query: Vec<(String, String)>,
    ) -> Result<Option<Value>> {
        tracing::debug!(method = %method, path = %path, "sending Resource Manager request");
        let mut builder = self
            .inner
            .request(method, format!("{}{path}", &self.endpoint))
            .query(&[("alt", "json")]);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let response = builder.send().await.map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response(response: reqwest::Response) -> Result<Option<Value>> {
    // DELETE and undelete respond with no usable body, sometimes as a
    // 204 No Content and sometimes as a 200 with an empty payload.
    let body = response.bytes().await.map_err(Error::io)?;
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice::<Value>(&body)
        .map(Some)
        .map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue};
    use serde_json::json;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn response_from(code: u16, content: &str) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(http_resp.into())
    }

    #[tokio::test]
    async fn http_error_bytes() -> TestResult {
        let response = response_from(400, r#"panic! at the proxy"#)?;
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"panic! at the proxy"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_status() -> TestResult {
        let body = json!({"error": {
            "code": 404,
            "message": "folders/123 does not exist",
            "status": "NOT_FOUND",
        }});
        let response = response_from(404, &body.to_string())?;
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().unwrap();
        assert_eq!(status.code, 404);
        assert_eq!(status.message, "folders/123 does not exist");
        Ok(())
    }

    #[tokio::test]
    #[test_case(204, ""; "204 with empty content")]
    #[test_case(200, ""; "200 with empty content")]
    async fn empty_content(code: u16, content: &str) -> TestResult {
        let response = response_from(code, content)?;
        let body = super::to_http_response(response).await?;
        assert_eq!(body, None);
        Ok(())
    }

    #[tokio::test]
    async fn json_content() -> TestResult {
        let response = response_from(200, r#"{"name": "folders/42"}"#)?;
        let body = super::to_http_response(response).await?;
        assert_eq!(body, Some(json!({"name": "folders/42"})));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_content() -> TestResult {
        let response = response_from(200, r#"{"name": "#)?;
        let err = super::to_http_response(response).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test]
    fn endpoints() {
        let conn = super::ReqwestConnection::new();
        assert_eq!(conn.endpoint(), super::DEFAULT_ENDPOINT);
        let conn = super::ReqwestConnection::with_endpoint("http://localhost:8080");
        assert_eq!(conn.endpoint(), "http://localhost:8080");
    }
}
