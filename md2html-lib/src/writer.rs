//! Persists the finished page and, unless embedding, the sibling stylesheet.

use crate::convert::{ConversionRequest, RenderedPage};
use crate::error::{Md2HtmlError, Result};
use crate::prompt::Confirm;
use crate::stylesheet::Stylesheets;
use crate::template::render_page;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder as TempFileBuilder;

/// Files produced by [`write_page`].
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub html: PathBuf,
    /// `None` when embedding or when the user kept an existing `style.css`.
    pub stylesheet: Option<PathBuf>,
}

/// Fills the template and writes the page, then `style.css` when not embedding.
///
/// The page itself is written without asking again: conversion already
/// cleared its overwrite. `style.css` gets its own check.
pub fn write_page(
    page: &RenderedPage,
    template: &str,
    stylesheets: &Stylesheets,
    request: &ConversionRequest,
    confirm: &mut dyn Confirm,
    status: &mut dyn Write,
) -> Result<Written> {
    let html = render_page(
        template,
        &page.title,
        &page.content,
        &stylesheets.for_page(request.embed_css),
    );
    write_atomic(&page.path, &html)?;
    if request.verbose {
        report(status, &format!("saved html '{}'", page.path.display()))?;
    }

    if request.embed_css {
        return Ok(Written {
            html: page.path.clone(),
            stylesheet: None,
        });
    }

    let css_path = request.stylesheet_path();
    let permitted = request
        .overwrite
        .permits(&css_path, confirm)
        .map_err(|err| Md2HtmlError::io(&css_path, err))?;
    if !permitted {
        log::info!("Keeping existing {}", css_path.display());
        return Ok(Written {
            html: page.path.clone(),
            stylesheet: None,
        });
    }

    write_atomic(&css_path, &stylesheets.themed)?;
    if request.verbose {
        report(status, &format!("saved css '{}'", css_path.display()))?;
    }

    Ok(Written {
        html: page.path.clone(),
        stylesheet: Some(css_path),
    })
}

/// Writes through a temporary file in the destination directory so an
/// interrupted run never leaves a truncated target behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".md2html-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .map_err(|err| Md2HtmlError::io(parent_dir, err))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|err| Md2HtmlError::io(temp_file.path(), err))?;

    temp_file
        .persist(path)
        .map_err(|source| Md2HtmlError::Persist {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn report(status: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(status, "{line}").map_err(Md2HtmlError::Status)
}
