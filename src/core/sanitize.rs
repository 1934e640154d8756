// src/core/sanitize.rs

/// Decode the handful of entities the wiki actually emits in the text we
/// keep. Not a general entity decoder.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Text content of an HTML fragment: entities decoded, tags stripped,
/// whitespace collapsed.
pub fn clean_text(fragment: &str) -> String {
    super::html::strip_tags(normalize_entities(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_and_ws() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_entities("Fischl&#39;s &quot;Oz&quot;"), "Fischl's \"Oz\"");
    }

    #[test]
    fn clean_text_full_pass() {
        assert_eq!(
            clean_text("<i>A&nbsp;sword</i>\n of <b>legend</b>"),
            "A sword of legend"
        );
    }
}
