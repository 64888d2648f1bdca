//! Server-Rendered Pages
//!
//! Leptos components rendered to HTML strings on the server (`ssr`).
//!
//! - [`landing`]: marketing page with services, stylists, contacts and the booking dialog
//! - [`analytics_page`]: dashboard with summary cards, charts and stylist load
//! - [`components`]: nav, toast, cards, loading spinner
//! - [`chart`]: inline SVG line and bar charts

use leptos::*;

pub mod analytics_page;
pub mod chart;
pub mod components;
pub mod landing;

/// Render `body` inside the HTML document shell
pub fn render_document<F, N>(title: &'static str, body_class: &'static str, body: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let html = leptos::ssr::render_to_string(move || {
        view! {
            <html lang="ru">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                    <script src="https://cdn.tailwindcss.com"></script>
                </head>
                <body class=body_class>{body()}</body>
            </html>
        }
    });

    format!("<!DOCTYPE html>\n{html}")
}

/// Helpers for asserting on rendered markup
#[cfg(test)]
pub(crate) mod testing {
    /// Drop hydration comments and `data-hk` keys so assertions see plain markup
    pub fn plain(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(start) = rest.find("<!") {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if tail.starts_with("<!DOCTYPE") || tail.starts_with("<!doctype") {
                out.push_str("<!");
                rest = &tail[2..];
            } else if let Some(end) = tail.strip_prefix("<!--").and_then(|t| t.find("-->")) {
                rest = &tail[4 + end + 3..];
            } else if let Some(end) = tail.find('>') {
                rest = &tail[end + 1..];
            } else {
                rest = "";
            }
        }
        out.push_str(rest);

        let mut cleaned = String::with_capacity(out.len());
        let mut rest = out.as_str();
        while let Some(start) = rest.find(" data-hk=\"") {
            cleaned.push_str(&rest[..start]);
            let after = &rest[start + " data-hk=\"".len()..];
            rest = after.find('"').map(|end| &after[end + 1..]).unwrap_or("");
        }
        cleaned.push_str(rest);
        cleaned
    }

    /// The opening tag around the first occurrence of `needle`
    pub fn tag_with<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
        let at = html.find(needle)?;
        let start = html[..at].rfind('<')?;
        let end = at + html[at..].find('>')?;
        Some(&html[start..=end])
    }

    /// Whether a boolean attribute such as `selected` is set on the tag
    pub fn has_flag(tag: &str, flag: &str) -> bool {
        tag.trim_start_matches('<')
            .trim_end_matches('>')
            .trim_end_matches('/')
            .split_whitespace()
            .any(|part| part == flag || part.starts_with(&format!("{flag}=")))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{has_flag, plain, tag_with};
    use super::*;

    #[test]
    fn test_document_shell() {
        let html = plain(&render_document("Барбершоп", "bg-background", || {
            view! { <p>"hi"</p> }
        }));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Барбершоп</title>"));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.contains("cdn.tailwindcss.com"));
    }

    #[test]
    fn test_text_is_escaped() {
        let hostile = "<script>alert('x')</script>".to_string();
        let html = render_document("t", "", move || view! { <p>{hostile}</p> });

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_plain_strips_markers() {
        let raw = r#"<!DOCTYPE html><div data-hk="0-0-1" class="a"><!--hk=0-0-2|leptos-x-start-->x<!--hk=0-0-2|leptos-x-end--></div>"#;

        assert_eq!(plain(raw), r#"<!DOCTYPE html><div class="a">x</div>"#);
    }

    #[test]
    fn test_tag_helpers() {
        let html = r#"<select><option value="a" selected>A</option><option value="b">B</option></select>"#;

        let a = tag_with(html, r#"value="a""#).unwrap();
        assert_eq!(a, r#"<option value="a" selected>"#);
        assert!(has_flag(a, "selected"));
        assert!(!has_flag(tag_with(html, r#"value="b""#).unwrap(), "selected"));
    }
}
