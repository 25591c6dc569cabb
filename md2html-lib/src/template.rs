//! Literal token substitution into the page template.

/// Replaced by the document title.
pub const TITLE_TOKEN: &str = "__title__";
/// Replaced by the rendered HTML fragment.
pub const CONTENT_TOKEN: &str = "__content__";
/// Replaced by the stylesheet text.
pub const CSS_TOKEN: &str = "/* __css__ */";

/// Produces the final page text from its four inputs.
///
/// The template is scanned once and each token is replaced where it stands
/// in the template. Inserted values are never scanned again, so a title,
/// fragment or stylesheet containing a token text is emitted verbatim.
pub fn render_page(template: &str, title: &str, content: &str, css: &str) -> String {
    let substitutions = [
        (TITLE_TOKEN, title),
        (CONTENT_TOKEN, content),
        (CSS_TOKEN, css),
    ];

    let mut page = String::with_capacity(template.len() + content.len() + css.len());
    let mut rest = template;

    while let Some((index, token, value)) = substitutions
        .iter()
        .filter_map(|&(token, value)| rest.find(token).map(|index| (index, token, value)))
        .min_by_key(|&(index, _, _)| index)
    {
        page.push_str(&rest[..index]);
        page.push_str(value);
        rest = &rest[index + token.len()..];
    }

    page.push_str(rest);
    page
}

/// Removes the render endpoint's heading-anchor prefix from `html`.
pub fn strip_anchor_prefix(html: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return html.to_string();
    }
    html.replace(prefix, "")
}
