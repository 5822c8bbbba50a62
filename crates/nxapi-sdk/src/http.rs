//! HTTP access layer.
//!
//! [`HttpClient`] issues exactly one request per call and maps the outcome:
//!
//! * 2xx: the body is decoded into the requested type ([`SdkError::Decode`]
//!   on schema mismatch);
//! * anything else: [`SdkError::Status`] carrying the status code. The
//!   body of a failed response is never read.
//!
//! Request bodies are always JSON. `Content-Type: application/json` is set
//! first and caller supplied headers are applied on top, so a caller header
//! with the same name replaces the default.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SdkError;

/// Thin wrapper around a [`reqwest::Client`].
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Wrap an existing transport (timeouts, proxies etc. are its concern).
    pub fn new(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// `GET url` and decode the body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        headers: Option<HeaderMap>,
    ) -> Result<T, SdkError> {
        let req = self
            .inner
            .get(url.clone())
            .headers(headers.unwrap_or_default());
        let res = self.send(Method::GET, &url, req).await?;
        decode(&url, res).await
    }

    /// `POST url` with a JSON body and decode the reply.
    pub async fn post<B, T>(
        &self,
        url: Url,
        body: &B,
        headers: Option<HeaderMap>,
    ) -> Result<T, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.inner.post(url.clone());
        let req = with_json_body(req, body, headers)?;
        let res = self.send(Method::POST, &url, req).await?;
        decode(&url, res).await
    }

    /// `PUT url` with a JSON body and decode the reply.
    pub async fn put<B, T>(&self, url: Url, body: &B, headers: Option<HeaderMap>) -> Result<T, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.inner.put(url.clone());
        let req = with_json_body(req, body, headers)?;
        let res = self.send(Method::PUT, &url, req).await?;
        decode(&url, res).await
    }

    /// `DELETE url`; any response body is discarded.
    pub async fn delete(&self, url: Url, headers: Option<HeaderMap>) -> Result<(), SdkError> {
        let req = self
            .inner
            .delete(url.clone())
            .headers(headers.unwrap_or_default());
        self.send(Method::DELETE, &url, req).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: &Url,
        req: RequestBuilder,
    ) -> Result<Response, SdkError> {
        debug!(%method, %url, "sending request");
        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(SdkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        debug!(%method, %url, status = status.as_u16(), "response received");
        Ok(res)
    }
}

/// Default JSON content type with `extra` layered on top.
///
/// Same-named headers in `extra` replace the default.
pub fn json_headers(extra: Option<HeaderMap>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(extra) = extra {
        for (name, value) in &extra {
            headers.insert(name.clone(), value.clone());
        }
    }
    headers
}

/// `Authorization: Bearer {token}` as a header map.
pub fn bearer(token: &str) -> Result<HeaderMap, SdkError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| SdkError::InvalidToken("not a valid header value".into()))?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

fn with_json_body<B: Serialize + ?Sized>(
    req: RequestBuilder,
    body: &B,
    headers: Option<HeaderMap>,
) -> Result<RequestBuilder, SdkError> {
    let bytes = serde_json::to_vec(body).map_err(SdkError::Encode)?;
    Ok(req.headers(json_headers(headers)).body(bytes))
}

async fn decode<T: DeserializeOwned>(url: &Url, res: Response) -> Result<T, SdkError> {
    let bytes = res.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| SdkError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT, HeaderName};

    #[test]
    fn json_headers_default() {
        let headers = json_headers(None);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn caller_headers_are_merged() {
        let mut extra = HeaderMap::new();
        extra.insert(ACCEPT, HeaderValue::from_static("application/json"));
        extra.insert(
            HeaderName::from_static("x-trace"),
            HeaderValue::from_static("abc"),
        );
        let headers = json_headers(Some(extra));
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["x-trace"], "abc");
    }

    #[test]
    fn caller_content_type_wins() {
        let mut extra = HeaderMap::new();
        extra.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/merge-patch+json"),
        );
        let headers = json_headers(Some(extra));
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/merge-patch+json");
    }

    #[test]
    fn bearer_header() {
        let headers = bearer("abc.def").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc.def");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn bearer_rejects_control_characters() {
        assert!(matches!(bearer("bad\ntoken"), Err(SdkError::InvalidToken(_))));
    }
}
