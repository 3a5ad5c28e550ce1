//! Server-rendered HTML pages.
//!
//! Pages are assembled from plain strings. Every value that comes from the
//! database or a form goes through [`escape`] before it is written out.

pub mod keyword;
pub mod project;

use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;

use crate::flash::Flash;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an optional value, rendering `None` as an empty string.
pub fn escape_opt(raw: Option<&str>) -> String {
    raw.map(escape).unwrap_or_default()
}

/// Wrap page content in the shared layout (navigation + flash message).
pub fn layout(title: &str, flash: Option<&Flash>, content: &str) -> Html<String> {
    let mut page = String::new();
    let _ = write!(
        page,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} · Ventureboard</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Projects</a> | <a href=\"/new\">New project</a> | \
         <a href=\"/keywords\">Keywords</a></nav>\n",
        title = escape(title),
    );
    if let Some(flash) = flash {
        let _ = writeln!(
            page,
            "<div class=\"flash flash-{}\">{}</div>",
            flash.level.as_str(),
            escape(&flash.message)
        );
    }
    page.push_str("<main>\n");
    page.push_str(content);
    page.push_str("</main>\n</body>\n</html>\n");
    Html(page)
}

/// Whether a stored URL may be rendered as a link: only `http` and `https`.
pub fn is_web_url(url: &str) -> bool {
    let url = url.trim();
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// `<option>` list for a `<select>`, marking `selected` if it matches.
pub fn options(choices: &[(&str, &str)], selected: Option<&str>) -> String {
    let mut out = String::new();
    for (value, label) in choices {
        let mark = if Some(*value) == selected { " selected" } else { "" };
        let _ = writeln!(
            out,
            "<option value=\"{}\"{mark}>{}</option>",
            escape(value),
            escape(label)
        );
    }
    out
}

/// Page shown for error statuses (404, 500).
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to projects</a></p>\n",
        status.as_u16(),
        escape(title),
        escape(message)
    );
    layout(title, None, &content)
}
