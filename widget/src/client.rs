//! HTTP client for the options service.
//!
//! Thin wrapper over `reqwest`: the reducer never performs IO, so drivers
//! call this when executing [`crate::Effect::FetchOptions`] and when
//! submitting the final selection. A failed fetch is reported as an error
//! here; the reducer turns it into an empty render pass.

use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::options::OptionItem;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct OptionsClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct SubmitBody<'a> {
    #[serde(rename = "selectedOptions")]
    selected_options: &'a [String],
}

impl OptionsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// `GET /options?search=<query>`. Non-2xx statuses are errors.
    pub async fn fetch_options(&self, query: &str) -> Result<Vec<OptionItem>, ClientError> {
        let response = self
            .http
            .get(format!("{}/options", self.base_url))
            .query(&[("search", query)])
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| error!("Error fetching options: {e}"))?;

        Ok(response.json().await?)
    }

    /// `POST /submit` with the selected values; returns the service's
    /// acknowledgment body.
    pub async fn submit(&self, selected: &[String]) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/submit", self.base_url))
            .json(&SubmitBody {
                selected_options: selected,
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path, query_param},
    };

    use super::*;

    #[tokio::test]
    async fn fetch_options_decodes_the_service_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/options"))
            .and(query_param("search", "hi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "label": "hiii", "value": "hi_breaking_newsletter", "tags": ["newsletter"] }
            ])))
            .mount(&server)
            .await;

        let client = OptionsClient::new(server.uri());
        let options = client.fetch_options("hi").await.unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "hiii");
        assert_eq!(options[0].tags, vec!["newsletter"]);
    }

    #[tokio::test]
    async fn missing_tags_field_defaults_to_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/options"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "label": "alert1", "value": "News_Alerts1" }
            ])))
            .mount(&server)
            .await;

        let client = OptionsClient::new(server.uri());
        let options = client.fetch_options("").await.unwrap();

        assert!(options[0].tags.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/options"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let client = OptionsClient::new(server.uri());
        assert!(client.fetch_options("hi").await.is_err());
    }

    #[tokio::test]
    async fn submit_posts_the_expected_body_shape() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(body_json(serde_json::json!({
                "selectedOptions": ["News_Alerts1"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("options received"))
            .mount(&server)
            .await;

        let client = OptionsClient::new(server.uri());
        let ack = client.submit(&["News_Alerts1".to_string()]).await.unwrap();

        assert_eq!(ack, "options received");
    }
}
