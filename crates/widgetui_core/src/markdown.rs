//! Minimal markdown-to-HTML rendering for short, trusted-layout copy.
//!
//! Supported: `#`, `##` and `###` headings, `**bold**`, `*italic*`, `[text](href)` links and
//! line breaks. Input is HTML-escaped before any rule runs, so the output only ever contains the
//! tags produced here.

use std::sync::OnceLock;

use regex::Regex;

const LINK_CLASSES: &str = "text-primary-600 hover:underline";

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Literal patterns; compilation cannot fail.
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern"))
}

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"))
}

fn italic_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("italic pattern"))
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Whether `href` may be emitted as a link target: http(s), mailto, fragment, or a relative path.
pub fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() {
        return false;
    }
    let lower = href.to_ascii_lowercase();
    if ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        return true;
    }
    let head_end = href.find(&['/', '?', '#'][..]).unwrap_or(href.len());
    !href[..head_end].contains(':')
}

fn render_emphasis(text: &str) -> String {
    let bold = bold_pattern().replace_all(text, "<strong>$1</strong>");
    italic_pattern()
        .replace_all(&bold, "<em>$1</em>")
        .into_owned()
}

/// Emphasis applies to plain runs and link text only; hrefs are emitted untouched.
fn render_inline(line: &str) -> String {
    let mut rendered = String::with_capacity(line.len());
    let mut rest_start = 0;
    for caps in link_pattern().captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        rendered.push_str(&render_emphasis(&line[rest_start..whole.start()]));
        let text = render_emphasis(&caps[1]);
        let href = &caps[2];
        if is_safe_href(href) {
            rendered.push_str(&format!(r#"<a href="{href}" class="{LINK_CLASSES}">{text}</a>"#));
        } else {
            rendered.push_str(&text);
        }
        rest_start = whole.end();
    }
    rendered.push_str(&render_emphasis(&line[rest_start..]));
    rendered
}

fn render_line(line: &str) -> String {
    for (marker, tag) in [("### ", "h3"), ("## ", "h2"), ("# ", "h1")] {
        if let Some(rest) = line.strip_prefix(marker) {
            return format!("<{tag}>{}</{tag}>", render_inline(rest));
        }
    }
    render_inline(line)
}

/// Renders `source` to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    escape_html(source)
        .split('\n')
        .map(|line| render_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect::<Vec<_>>()
        .join("<br />")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn headings_and_emphasis() {
        assert_eq!(
            render_markdown("# Title\n## Sub\nSome **bold** and *soft* text"),
            "<h1>Title</h1><br /><h2>Sub</h2><br />Some <strong>bold</strong> and <em>soft</em> text"
        );
    }

    #[test]
    fn raw_html_is_escaped() {
        assert_eq!(
            render_markdown("<script>alert('x')</script> & more"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"
        );
    }

    #[test]
    fn links_render_with_classes() {
        assert_eq!(
            render_markdown("see [docs](https://example.com/a?b=1&c=2)"),
            r#"see <a href="https://example.com/a?b=1&amp;c=2" class="text-primary-600 hover:underline">docs</a>"#
        );
        assert_eq!(
            render_markdown("[home](/index)"),
            r#"<a href="/index" class="text-primary-600 hover:underline">home</a>"#
        );
    }

    #[test]
    fn emphasis_never_reaches_link_targets() {
        assert_eq!(
            render_markdown("[a](https://x.com/*foo*)"),
            r#"<a href="https://x.com/*foo*" class="text-primary-600 hover:underline">a</a>"#
        );
        assert_eq!(
            render_markdown("*see* [**docs**](/a_*b*) now"),
            r#"<em>see</em> <a href="/a_*b*" class="text-primary-600 hover:underline"><strong>docs</strong></a> now"#
        );
    }

    #[test]
    fn unsafe_link_targets_keep_only_text() {
        assert_eq!(render_markdown("[click](javascript:alert(1))"), "click)");
        assert_eq!(render_markdown("[x](data:text/html,hi)"), "x");
    }

    #[test]
    fn href_classification() {
        assert!(is_safe_href("#section"));
        assert!(is_safe_href("mailto:team@example.com"));
        assert!(is_safe_href("docs/page:1"));
        assert!(!is_safe_href("JavaScript:void(0)"));
        assert!(!is_safe_href(""));
    }
}
