//! Blocking HTTP access to the render endpoint and the stylesheet sources.

use crate::error::{Md2HtmlError, Result};
use reqwest::blocking::Client;
use serde::Serialize;

/// JSON payload accepted by the render endpoint.
#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
    mode: &'static str,
}

/// Thin wrapper around a `reqwest` blocking client.
///
/// No timeout is configured and nothing is retried: a failed request ends the run.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    render_url: String,
}

impl ApiClient {
    pub fn new(render_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            render_url: render_url.into(),
        })
    }

    /// Sends Markdown to the render endpoint and returns the HTML fragment verbatim.
    pub fn render_markdown(&self, text: &str) -> Result<String> {
        log::debug!("POST {} ({} bytes of markdown)", self.render_url, text.len());

        let response = self
            .client
            .post(&self.render_url)
            .json(&RenderRequest {
                text,
                mode: "markdown",
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Md2HtmlError::RenderFailed {
                url: self.render_url.clone(),
                status,
            });
        }

        Ok(response.text()?)
    }

    /// Fetches a plain-text resource.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Md2HtmlError::FetchFailed {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, Method::POST, MockServer};
    use serde_json::json;

    #[test]
    fn render_posts_markdown_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/markdown")
                .json_body(json!({ "text": "# Hello\n", "mode": "markdown" }));
            then.status(200).body("<h1>Hello</h1>\n");
        });

        let client = ApiClient::new(server.url("/markdown"), "md2html-test").unwrap();
        let html = client.render_markdown("# Hello\n").unwrap();

        assert_eq!(html, "<h1>Hello</h1>\n");
        mock.assert();
    }

    #[test]
    fn render_rejects_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/markdown");
            then.status(403).body("rate limited");
        });

        let client = ApiClient::new(server.url("/markdown"), "md2html-test").unwrap();
        let err = client.render_markdown("text").unwrap_err();

        match err {
            Md2HtmlError::RenderFailed { status, .. } => assert_eq!(status.as_u16(), 403),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fetch_text_returns_body_and_reports_failures() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/style.css");
            then.status(200).body("body { color: black; }");
        });
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let client = ApiClient::new(server.url("/markdown"), "md2html-test").unwrap();

        assert_eq!(
            client.fetch_text(&server.url("/style.css")).unwrap(),
            "body { color: black; }"
        );
        assert!(matches!(
            client.fetch_text(&server.url("/missing")),
            Err(Md2HtmlError::FetchFailed { .. })
        ));
    }
}
