use std::collections::HashMap;

use url::Url;

use crate::forms::discover_login_form;
use crate::http::HttpClient;
use crate::models::{Hit, Outcome, RunConfig};
use crate::probe::Probe;
use crate::{Error, Result};

/// Credential probe: POST the login form with the candidate password,
/// following redirects, and look for a success indicator in the body.
/// A hit ends the run.
#[derive(Debug)]
pub struct LoginProbe {
    client: HttpClient,
    target_url: String,
    /// Static part of every attempt: template fields overlaid with the
    /// hidden fields discovered on the login page, plus the username.
    form_fields: HashMap<String, String>,
    password_field: String,
    success_indicators: Vec<String>,
}

impl LoginProbe {
    pub async fn new(
        config: &RunConfig,
        username: &str,
        form_name: &str,
        username_field: &str,
        password_field: &str,
    ) -> Result<Self> {
        Url::parse(&config.target_url).map_err(|source| Error::InvalidTarget {
            url: config.target_url.clone(),
            source,
        })?;

        let client = HttpClient::new(config, true)?;

        let mut form_fields = config.form_fields.clone();
        let discovered = discover_login_form(&client, &config.target_url, form_name).await?;
        tracing::info!(fields = discovered.len(), "login form discovered");
        form_fields.extend(discovered);
        form_fields.insert(username_field.to_string(), username.to_string());

        Ok(Self {
            client,
            target_url: config.target_url.clone(),
            form_fields,
            password_field: password_field.to_string(),
            success_indicators: config.success_indicators.clone(),
        })
    }
}

impl Probe for LoginProbe {
    async fn attempt(&self, candidate: &str) -> Outcome {
        let mut form = self.form_fields.clone();
        form.insert(self.password_field.clone(), candidate.to_string());

        match self.client.post_form(&self.target_url, &form).await {
            Ok(response) => {
                let accepted = self
                    .success_indicators
                    .iter()
                    .any(|needle| response.body.contains(needle.as_str()));

                if accepted {
                    Outcome::Hit(Hit::Password {
                        secret: candidate.to_string(),
                    })
                } else {
                    Outcome::Miss
                }
            }
            Err(error) => {
                tracing::debug!(candidate, %error, "login attempt failed");
                Outcome::Miss
            }
        }
    }

    fn stop_on_hit(&self) -> bool {
        true
    }
}
