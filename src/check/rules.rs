//! Built-in availability rules

use crate::check::AvailabilityRule;
use crate::error::{HandleScoutError, Result};
use async_trait::async_trait;
use reqwest::Response;

/// Available iff the response status equals the configured code.
///
/// Never fails and never touches the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeRule {
    code: u16,
}

impl StatusCodeRule {
    pub fn new(code: u16) -> Self {
        Self { code }
    }
}

#[async_trait]
impl AvailabilityRule for StatusCodeRule {
    async fn evaluate(&self, response: Response) -> Result<bool> {
        Ok(response.status().as_u16() == self.code)
    }
}

/// Available iff the full decoded response body equals the configured text
/// exactly: case sensitive, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyEqualsRule {
    expected: String,
}

impl BodyEqualsRule {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

#[async_trait]
impl AvailabilityRule for BodyEqualsRule {
    async fn evaluate(&self, response: Response) -> Result<bool> {
        let body = response
            .text()
            .await
            .map_err(|e| HandleScoutError::body_read(e.to_string()))?;
        Ok(body == self.expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    async fn fetch(url: &str) -> Response {
        reqwest::Client::new().get(url).send().await.unwrap()
    }

    #[tokio::test]
    async fn test_status_rule_matches() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/probe");
                then.status(204);
            })
            .await;

        let response = fetch(&format!("{}/probe", server.base_url())).await;
        assert!(StatusCodeRule::new(204).evaluate(response).await.unwrap());
    }

    #[tokio::test]
    async fn test_status_rule_mismatch() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/probe");
                then.status(200);
            })
            .await;

        let response = fetch(&format!("{}/probe", server.base_url())).await;
        assert!(!StatusCodeRule::new(404).evaluate(response).await.unwrap());
    }

    #[tokio::test]
    async fn test_body_rule_exact_match() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/probe");
                then.status(200).body("true");
            })
            .await;

        let response = fetch(&format!("{}/probe", server.base_url())).await;
        assert!(BodyEqualsRule::new("true").evaluate(response).await.unwrap());
    }

    #[tokio::test]
    async fn test_body_rule_is_case_sensitive() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/probe");
                then.status(200).body("True");
            })
            .await;

        let response = fetch(&format!("{}/probe", server.base_url())).await;
        assert!(!BodyEqualsRule::new("true").evaluate(response).await.unwrap());
    }

    #[tokio::test]
    async fn test_body_rule_does_not_trim() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/probe");
                then.status(200).body("true\n");
            })
            .await;

        let response = fetch(&format!("{}/probe", server.base_url())).await;
        assert!(!BodyEqualsRule::new("true").evaluate(response).await.unwrap());
    }

    #[tokio::test]
    async fn test_body_rule_ignores_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/probe");
                then.status(500).body("true");
            })
            .await;

        let response = fetch(&format!("{}/probe", server.base_url())).await;
        assert!(BodyEqualsRule::new("true").evaluate(response).await.unwrap());
    }
}
