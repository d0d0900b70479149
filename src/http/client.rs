use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, redirect::Policy};

use crate::models::{REQUEST_TIMEOUT_SECS, RunConfig};
use crate::{Error, Result};

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Shared session wrapper around a reqwest client.
///
/// One client is built per probe strategy; its connection pool is safe for
/// concurrent use by all workers and idle connections are capped at the
/// worker concurrency so in-flight sockets stay bounded.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &RunConfig, follow_redirects: bool) -> Result<Self> {
        let redirect = if follow_redirects {
            Policy::limited(10)
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(redirect)
            .pool_max_idle_per_host(config.concurrency.max(1))
            .cookie_store(follow_redirects)
            .default_headers(Self::build_headers(config)?)
            .build()?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }

    pub async fn post_form(
        &self,
        url: &str,
        form: &HashMap<String, String>,
    ) -> reqwest::Result<HttpResponse> {
        let response = self.client.post(url).form(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }

    fn build_headers(config: &RunConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                Error::InvalidHeader {
                    name: name.clone(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader {
                name: name.to_string(),
            })?;
            headers.insert(name, value);
        }

        if !config.cookies.is_empty() {
            let cookie = config
                .cookies
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            let value =
                HeaderValue::from_str(&cookie).map_err(|_| Error::InvalidHeader {
                    name: COOKIE.to_string(),
                })?;
            headers.insert(COOKIE, value);
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_header_names() {
        let mut config = RunConfig::new("http://example.com");
        config
            .headers
            .insert("bad header".to_string(), "value".to_string());

        let err = HttpClient::new(&config, false).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn builds_with_cookies_and_headers() {
        let mut config = RunConfig::new("http://example.com");
        config
            .headers
            .insert("User-Agent".to_string(), "Mozilla/5.0".to_string());
        config
            .cookies
            .insert("session".to_string(), "abc123".to_string());

        assert!(HttpClient::new(&config, true).is_ok());
    }
}
