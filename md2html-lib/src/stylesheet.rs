//! Provisioning of the minimal and themed stylesheets.

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Result;

/// Name of the sibling stylesheet written when not embedding.
pub const STYLESHEET_FILE_NAME: &str = "style.css";

/// The two stylesheet variants a run can emit.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheets {
    /// Bundled fallback, always placed in the page.
    pub minimum: String,
    /// Fetched stylesheet, prefixed with its license as a comment.
    pub themed: String,
}

impl Stylesheets {
    /// Fetches the themed stylesheet and its license. Either fetch failing
    /// aborts the run; only the minimal stylesheet is available offline.
    pub fn provision(client: &ApiClient, config: &Config, minimal: &str) -> Result<Self> {
        let body = client.fetch_text(&config.stylesheet_url)?;
        let license = client.fetch_text(&config.license_url)?;
        log::info!(
            "Fetched themed stylesheet ({} bytes) from {}",
            body.len(),
            config.stylesheet_url
        );

        Ok(Self {
            minimum: minimal.to_string(),
            themed: with_license_header(&license, &body),
        })
    }

    /// The minimal stylesheet followed by the themed one.
    pub fn embedded(&self) -> String {
        let mut css = self.minimum.clone();
        if !css.is_empty() && !css.ends_with('\n') {
            css.push('\n');
        }
        css.push_str(&self.themed);
        css
    }

    /// The text that fills the page's CSS placeholder.
    ///
    /// Without embedding, the minimal stylesheet is preceded by an `@import`
    /// of the sibling file, so an embedded page never references it.
    pub fn for_page(&self, embed: bool) -> String {
        if embed {
            self.embedded()
        } else {
            format!("@import url(\"{STYLESHEET_FILE_NAME}\");\n{}", self.minimum)
        }
    }
}

/// Wraps `license` in a CSS comment placed above `css`.
pub fn with_license_header(license: &str, css: &str) -> String {
    // A stray terminator would end the comment early.
    let license = license.trim_end().replace("*/", "* /");
    format!("/*\n{license}\n*/\n\n{css}")
}
