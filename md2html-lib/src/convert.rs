//! Renders one Markdown file through the remote endpoint.

use crate::client::ApiClient;
use crate::error::{Md2HtmlError, Result};
use crate::prompt::{Confirm, OverwritePolicy};
use crate::stylesheet::STYLESHEET_FILE_NAME;
use crate::template::strip_anchor_prefix;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a run needs to know about its input and output.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// The Markdown file to convert.
    pub source: PathBuf,
    /// Directory receiving the page and, unless embedding, `style.css`.
    pub output_dir: PathBuf,
    pub overwrite: OverwritePolicy,
    /// Inline all CSS instead of writing a sibling stylesheet.
    pub embed_css: bool,
    /// Report each written file on the status writer.
    pub verbose: bool,
}

impl ConversionRequest {
    /// A request writing next to `source`, asking before overwriting.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let output_dir = default_output_dir(&source);
        Self {
            source,
            output_dir,
            overwrite: OverwritePolicy::Ask,
            embed_css: false,
            verbose: false,
        }
    }

    /// Where the page for this request is written.
    pub fn html_path(&self) -> PathBuf {
        output_path_for(&self.source, &self.output_dir)
    }

    /// Where the sibling stylesheet is written when not embedding.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.output_dir.join(STYLESHEET_FILE_NAME)
    }
}

/// The rendered parts of a page, kept apart until the writer fills the template.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub title: String,
    /// The endpoint's HTML fragment with anchor prefixes removed.
    pub content: String,
}

/// The parent of `source`, or `.` for a bare file name.
pub fn default_output_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `<output_dir>/<source stem>.html`.
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let mut file_name = document_stem(source).to_os_string();
    file_name.push(".html");
    output_dir.join(file_name)
}

/// The page title: the source file name without its extension.
pub fn document_title(source: &Path) -> String {
    document_stem(source).to_string_lossy().into_owned()
}

fn document_stem(source: &Path) -> &OsStr {
    source.file_stem().unwrap_or(source.as_os_str())
}

/// Renders `request.source` through the remote endpoint.
///
/// Returns `Ok(None)` when the page already exists and overwriting was not
/// permitted. That skip is a normal outcome, not an error.
pub fn convert(
    request: &ConversionRequest,
    client: &ApiClient,
    anchor_prefix: &str,
    confirm: &mut dyn Confirm,
) -> Result<Option<RenderedPage>> {
    let path = request.html_path();

    let permitted = request
        .overwrite
        .permits(&path, confirm)
        .map_err(|err| Md2HtmlError::io(&path, err))?;
    if !permitted {
        log::info!("Keeping existing {}", path.display());
        return Ok(None);
    }

    let markdown =
        fs::read_to_string(&request.source).map_err(|err| Md2HtmlError::io(&request.source, err))?;
    let fragment = client.render_markdown(&markdown)?;

    Ok(Some(RenderedPage {
        path,
        title: document_title(&request.source),
        content: strip_anchor_prefix(&fragment, anchor_prefix),
    }))
}
