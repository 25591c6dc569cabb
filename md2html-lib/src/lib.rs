//! `md2html-lib` converts a Markdown file into a styled HTML page.
//!
//! Rendering is delegated to a remote Markdown API (GitHub's `/markdown`
//! endpoint by default). The returned fragment is dropped into an HTML
//! template, and the page is styled either inline or through a sibling
//! `style.css`.
//!
//! # Example
//!
//! ```no_run
//! use md2html_lib::config::Config;
//! use md2html_lib::prompt::{OverwritePolicy, TerminalPrompt};
//! use md2html_lib::{run, ConversionRequest, Outcome};
//!
//! # fn demo() -> Result<(), md2html_lib::error::Md2HtmlError> {
//! let mut request = ConversionRequest::new("notes.md");
//! request.overwrite = OverwritePolicy::Always;
//! request.embed_css = true;
//!
//! let outcome = run(
//!     &request,
//!     &Config::default(),
//!     &mut TerminalPrompt::stdio(),
//!     &mut std::io::stdout(),
//! )?;
//! assert!(matches!(outcome, Outcome::Written(_)));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod prompt;
pub mod stylesheet;
pub mod template;
pub mod writer;

pub use crate::convert::{ConversionRequest, RenderedPage};
pub use crate::writer::Written;

use crate::client::ApiClient;
use crate::config::{Assets, Config};
use crate::convert::convert;
use crate::error::Result;
use crate::prompt::Confirm;
use crate::stylesheet::Stylesheets;
use crate::writer::write_page;
use std::io::Write;

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The page (and possibly `style.css`) was written.
    Written(Written),
    /// The page already existed and overwriting was refused.
    Skipped,
}

/// Runs one conversion: fetch stylesheets, render, write.
///
/// Stylesheets are provisioned before anything else so that an unreachable
/// stylesheet source ends the run before the user is asked any question.
pub fn run(
    request: &ConversionRequest,
    config: &Config,
    confirm: &mut dyn Confirm,
    status: &mut dyn Write,
) -> Result<Outcome> {
    let assets = Assets::load(config)?;
    let client = ApiClient::new(config.render_url.as_str(), &config.user_agent)?;
    let stylesheets = Stylesheets::provision(&client, config, &assets.minimal_stylesheet)?;

    let Some(page) = convert(request, &client, &config.anchor_prefix, confirm)? else {
        return Ok(Outcome::Skipped);
    };

    let written = write_page(&page, &assets.template, &stylesheets, request, confirm, status)?;
    log::info!("Converted {} into {}", request.source.display(), written.html.display());
    Ok(Outcome::Written(written))
}
