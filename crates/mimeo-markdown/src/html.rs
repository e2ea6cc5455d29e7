//! HTML fragments written by the article renderer.
//!
//! Literals are written verbatim. Article authors are trusted, so neither
//! text nor attribute values are escaped.

use std::fmt::Write;

/// Opening `<a>` tag.
pub(crate) fn link_start(url: &str, title: Option<&str>, out: &mut String) {
    write!(out, r#"<a href="{url}""#).unwrap();
    if let Some(title) = title {
        write!(out, r#" title="{title}""#).unwrap();
    }
    out.push('>');
}

/// `<img>` tag up to and including the opening quote of `alt`.
///
/// The image's children are rendered into the open attribute; [`image_end`]
/// closes it.
pub(crate) fn image_start(class: &str, src: &str, title: Option<&str>, out: &mut String) {
    write!(out, r#"<img class="{class}" src="{src}""#).unwrap();
    if let Some(title) = title {
        write!(out, r#" title="{title}""#).unwrap();
    }
    out.push_str(r#" alt=""#);
}

/// Closes the `alt` attribute opened by [`image_start`] and the tag itself.
pub(crate) fn image_end(out: &mut String) {
    out.push_str(r#"" />"#);
}

pub(crate) fn code_block(literal: &str, out: &mut String) {
    writeln!(out, "<pre><code>{literal}</code></pre>").unwrap();
}

pub(crate) fn inline_code(literal: &str, out: &mut String) {
    writeln!(out, "<code>{literal}</code>").unwrap();
}

pub(crate) fn hard_break(out: &mut String) {
    out.push_str("<br />\n");
}
