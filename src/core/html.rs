// src/core/html.rs

// Case-insensitive, allocation-light HTML slicing. The wiki markup is
// machine-generated but not tidy; everything here tolerates attribute
// noise, odd casing and missing whitespace rather than parsing properly.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next opening tag starting with `pat` (e.g. `"<td"`) at or after
/// `from`. Returns the span of the opener including the closing `>`.
pub fn next_open_tag_ci(s: &str, pat: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let pl = to_lower(pat);
    let start = lc.get(from..)?.find(&pl)? + from;
    let end = s[start..].find('>')? + start + 1;
    Some((start, end))
}

/// Find the next `o…c` block (e.g. `"<tr"` / `"</tr>"`) at or after `from`.
/// Returns the span including the closing pattern.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Inner HTML of a block returned by `next_tag_block_ci` (between the
/// opener's `>` and the closing tag's `<`).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of attribute `name` inside a tag opener. Quote-tolerant; skips
/// lookalikes such as `data-href` when asked for `href`.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let pat = join!(to_lower(name), "=");
    let mut from = 0usize;
    loop {
        let at = lc.get(from..)?.find(&pat)? + from;
        let boundary = at == 0 || {
            let prev = lc.as_bytes()[at - 1];
            !(prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_')
        };
        if !boundary {
            from = at + pat.len();
            continue;
        }
        let val = opener[at + pat.len()..].trim_start();
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            _ => ('\0', 0),
        };
        let end = if quote != '\0' {
            val[start_off..].find(quote).map(|e| start_off + e)
        } else {
            val.find(|c: char| c.is_ascii_whitespace() || c == '>')
        }
        .unwrap_or(val.len());
        return Some(&val[start_off..end]);
    }
}

/// True when `opener` (as returned by `next_open_tag_ci`) opens exactly
/// `tag`, not a longer name sharing the prefix (`<a` vs `<abbr`, `<th` vs
/// `<thead`).
pub fn opens_tag_ci(opener: &str, tag: &str) -> bool {
    let rest = &opener[1..];
    if rest.len() < tag.len() || !rest[..tag.len()].eq_ignore_ascii_case(tag) {
        return false;
    }
    matches!(
        rest.as_bytes().get(tag.len()),
        None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')
    )
}

/// Does the opener's `class` attribute carry `class_name` as one of its
/// space-separated classes?
pub fn has_class(opener: &str, class_name: &str) -> bool {
    match attr_value(opener, "class") {
        Some(v) => v
            .split_ascii_whitespace()
            .any(|c| c.eq_ignore_ascii_case(class_name)),
        None => false,
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_spans_opener_only() {
        let doc = r#"x <img src="a.png" alt="5 Stars"> y"#;
        let (s, e) = next_open_tag_ci(doc, "<img", 0).unwrap();
        assert_eq!(&doc[s..e], r#"<img src="a.png" alt="5 Stars">"#);
    }

    #[test]
    fn attr_value_quote_styles() {
        assert_eq!(attr_value(r#"<a href="/wiki/Amber">"#, "href"), Some("/wiki/Amber"));
        assert_eq!(attr_value(r#"<a href='/wiki/Amber'>"#, "href"), Some("/wiki/Amber"));
        assert_eq!(attr_value(r#"<a href=/wiki/Amber>"#, "href"), Some("/wiki/Amber"));
        assert_eq!(attr_value(r#"<a title="Wish">"#, "href"), None);
    }

    #[test]
    fn attr_value_skips_prefixed_lookalikes() {
        let opener = r#"<a data-href="/nope" href="/yes">"#;
        assert_eq!(attr_value(opener, "href"), Some("/yes"));
    }

    #[test]
    fn opens_tag_rejects_prefix_cousins() {
        assert!(opens_tag_ci("<a href=\"x\">", "a"));
        assert!(opens_tag_ci("<TH id=\"Hello\">", "th"));
        assert!(!opens_tag_ci("<abbr title=\"x\">", "a"));
        assert!(!opens_tag_ci("<thead>", "th"));
    }

    #[test]
    fn has_class_among_many() {
        let opener = r#"<table class="article-table sortable alternating-colors-table">"#;
        assert!(has_class(opener, "article-table"));
        assert!(!has_class(opener, "wikitable"));
    }

    #[test]
    fn strip_tags_collapses_markup() {
        assert_eq!(strip_tags("<b>Amber</b>\n <i>Outrider</i>"), "Amber Outrider");
    }
}
