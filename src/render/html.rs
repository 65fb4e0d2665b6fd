// src/render/html.rs
//! Small HTML building helpers shared by the block renderers.

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Joins the non-empty class names, dropping repeats.
pub fn class_list(classes: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(classes.len());
    for class in classes.iter().flat_map(|c| c.split_whitespace()) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// ` class="..."`, or nothing when `classes` is empty.
pub fn class_attr(classes: &[&str]) -> String {
    let joined = class_list(classes);
    if joined.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape_html(&joined))
    }
}

/// Whether `url` may be emitted as an `href`: http(s), mailto, or a
/// relative reference.
pub fn is_safe_href(url: &str) -> bool {
    let url = url.trim();
    match url.find(':') {
        None => true,
        Some(colon) => {
            // A colon after the first '/', '?' or '#' is not a scheme separator.
            if url[..colon].contains(['/', '?', '#']) {
                return true;
            }
            let scheme = url[..colon].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
    }
}

/// Anchor id for a heading: lowercase ASCII words joined by dashes.
pub fn anchor_id(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
