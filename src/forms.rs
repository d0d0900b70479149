use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::http::HttpClient;
use crate::{Error, Result};

/// Fetches the login page and extracts the hidden fields of its login form.
///
/// The returned map is merged into every credential attempt. Failing to
/// locate a recognizable form is fatal for login mode.
pub async fn discover_login_form(
    client: &HttpClient,
    url: &str,
    form_name: &str,
) -> Result<HashMap<String, String>> {
    let response = client.get(url).await?;

    extract_login_fields(&response.body, form_name).ok_or_else(|| Error::FormNotFound {
        url: url.to_string(),
        form_name: form_name.to_string(),
    })
}

/// Extracts hidden input fields from the login form in `html`.
///
/// Prefers a `<form name="...">` match; falls back to the first form that
/// contains a password input. Returns `None` when neither exists.
pub fn extract_login_fields(html: &str, form_name: &str) -> Option<HashMap<String, String>> {
    let document = Html::parse_document(html);
    let form_selector = Selector::parse("form").expect("valid selector");
    let password_selector = Selector::parse("input[type=password]").expect("valid selector");

    let named = document
        .select(&form_selector)
        .find(|form| form.value().attr("name") == Some(form_name));

    let form = named.or_else(|| {
        document
            .select(&form_selector)
            .find(|form| form.select(&password_selector).next().is_some())
    })?;

    Some(hidden_fields(&form))
}

fn hidden_fields(form: &ElementRef) -> HashMap<String, String> {
    let hidden_selector = Selector::parse("input[type=hidden]").expect("valid selector");

    form.select(&hidden_selector)
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or("");
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
