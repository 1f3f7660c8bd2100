//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On native targets requests go straight through `reqwest`. On WASM,
//! `reqwest::Response` holds JS values and is not `Send`, so the request is
//! executed on the JS thread with `wasm_bindgen_futures::spawn_local` and the
//! result is handed back through a `flume` channel. Either way
//! [`RequestBuilder::send`] yields a `Send` future, which is what the
//! `async_trait` backend contract requires.

use std::collections::HashMap;

use thiserror::Error;
use ustr::Ustr;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
}

/// A response reduced to owned, Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure (connection refused, DNS, aborted body...).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// Client bound to one API root, attaching the same headers to every request.
#[derive(Debug, Clone)]
pub struct Client {
    api_url: Ustr,
    default_headers: HashMap<String, String>,
}

impl Client {
    /// `api_url` is the root every request path is appended to, e.g.
    /// `https://example.com/api`.
    pub fn new(api_url: Ustr) -> Self {
        Self {
            api_url,
            default_headers: HashMap::new(),
        }
    }

    /// Adds a header sent with every request built by this client.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers
            .insert(name.into().to_lowercase(), value.into());
        self
    }

    pub fn api_url(&self) -> Ustr {
        self.api_url
    }

    /// Joins `path` onto the API root with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        let root = self.api_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{root}/{path}")
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::Get, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::Delete, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder {
            method,
            url: self.url(path),
            headers: self.default_headers.clone(),
        }
    }
}

/// A single request ready to be sent.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.method, self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(self.method, self.url, self.headers).await;
                if tx.send_async(result).await.is_err() {
                    log::debug!("HTTP response dropped, the caller stopped waiting");
                }
            });

            rx.recv_async()
                .await
                .map_err(|_err| HttpError::new("Request cancelled"))?
        }
    }
}

async fn execute(
    method: Method,
    url: String,
    headers: HashMap<String, String>,
) -> HttpResult<Response> {
    let client = reqwest::Client::new();

    let mut request = match method {
        Method::Get => client.get(&url),
        Method::Delete => client.delete(&url),
    };
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let mut response_headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            response_headers.insert(name.as_str().to_lowercase(), v.to_owned());
        }
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response {
        status,
        headers: response_headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> Response {
        Response {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(403).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut res = response(200);
        res.headers
            .insert("content-type".to_owned(), "application/json".to_owned());

        assert_eq!(res.header("Content-Type"), Some("application/json"));
        assert_eq!(res.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(res.header("x-missing"), None);
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let client = Client::new(Ustr::from("http://localhost:8000/api/"));
        assert_eq!(
            client.url("/debtors/"),
            "http://localhost:8000/api/debtors/"
        );

        let client = Client::new(Ustr::from("/api"));
        assert_eq!(client.url("debtors/7/"), "/api/debtors/7/");
    }

    #[test]
    fn test_default_headers_are_attached() {
        let client = Client::new(Ustr::from("/api")).with_header("Authorization", "Token abc");
        let request = client.delete("debtors/1/").header("Accept", "application/json");

        assert_eq!(request.method(), Method::Delete);
        assert_eq!(
            request.headers.get("authorization"),
            Some(&"Token abc".to_owned())
        );
        assert_eq!(
            request.headers.get("accept"),
            Some(&"application/json".to_owned())
        );
    }
}
