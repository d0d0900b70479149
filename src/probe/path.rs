use url::Url;

use crate::http::HttpClient;
use crate::models::{Hit, Outcome, RunConfig};
use crate::probe::Probe;
use crate::{Error, Result};

/// Directory enumeration probe: GET without following redirects, classify
/// by indicator substring first, then by the interesting-status set.
pub struct PathProbe {
    client: HttpClient,
    base_url: String,
    success_indicators: Vec<String>,
    interesting_statuses: Vec<u16>,
}

impl PathProbe {
    pub fn new(config: &RunConfig) -> Result<Self> {
        Url::parse(&config.target_url).map_err(|source| Error::InvalidTarget {
            url: config.target_url.clone(),
            source,
        })?;

        let client = HttpClient::new(config, false)?;

        Ok(Self {
            client,
            base_url: config.target_url.trim_end_matches('/').to_string(),
            success_indicators: config.success_indicators.clone(),
            interesting_statuses: config.interesting_statuses.clone(),
        })
    }

    fn candidate_url(&self, candidate: &str) -> String {
        format!("{}/{}", self.base_url, candidate.trim_start_matches('/'))
    }

    fn classify(&self, status: u16, body: &str, url: String) -> Outcome {
        // Indicator match wins regardless of status.
        let indicated = self
            .success_indicators
            .iter()
            .any(|needle| body.contains(needle.as_str()));

        if indicated || self.interesting_statuses.contains(&status) {
            Outcome::Hit(Hit::Path { status, url })
        } else {
            Outcome::Miss
        }
    }
}

impl Probe for PathProbe {
    async fn attempt(&self, candidate: &str) -> Outcome {
        let url = self.candidate_url(candidate);

        match self.client.get(&url).await {
            Ok(response) => self.classify(response.status, &response.body, url),
            Err(error) => {
                tracing::debug!(%url, %error, "path probe failed");
                Outcome::Miss
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(indicators: Vec<&str>) -> PathProbe {
        let mut config = RunConfig::new("http://example.com/");
        config.success_indicators = indicators.into_iter().map(String::from).collect();
        PathProbe::new(&config).unwrap()
    }

    #[test]
    fn joins_url_stripping_separators() {
        let probe = probe(vec![]);
        assert_eq!(probe.candidate_url("admin"), "http://example.com/admin");
        assert_eq!(probe.candidate_url("/admin"), "http://example.com/admin");
    }

    #[test]
    fn interesting_statuses_are_hits() {
        let probe = probe(vec![]);
        for status in [200, 301, 302, 403] {
            let outcome = probe.classify(status, "", "http://example.com/x".to_string());
            assert!(outcome.is_hit(), "status {} should be a hit", status);
        }
        let miss = probe.classify(404, "", "http://example.com/x".to_string());
        assert_eq!(miss, Outcome::Miss);
    }

    #[test]
    fn indicator_overrides_status() {
        let probe = probe(vec!["Index of /"]);
        let outcome = probe.classify(404, "<h1>Index of /</h1>", "http://example.com/x".into());
        assert!(outcome.is_hit());
    }

    #[test]
    fn invalid_target_is_fatal() {
        let config = RunConfig::new("not a url");
        assert!(matches!(
            PathProbe::new(&config),
            Err(Error::InvalidTarget { .. })
        ));
    }
}
