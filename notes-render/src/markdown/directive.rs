//! `<div class="...">` directive tags inside raw HTML.
//!
//! Only div open/close tags matter; every other piece of HTML is skipped.

/// A div tag found in raw HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivTag<'a> {
    /// Opening tag with its class attribute (empty when absent).
    Open(&'a str),
    Close,
}

/// Iterate over the div tags of an HTML fragment, in order.
pub fn div_tags(html: &str) -> DivTags<'_> {
    DivTags {
        html,
        pos: 0,
        pending_close: false,
    }
}

pub struct DivTags<'a> {
    html: &'a str,
    pos: usize,
    /// Set after a self-closing `<div ... />`.
    pending_close: bool,
}

impl<'a> Iterator for DivTags<'a> {
    type Item = DivTag<'a>;

    fn next(&mut self) -> Option<DivTag<'a>> {
        if std::mem::take(&mut self.pending_close) {
            return Some(DivTag::Close);
        }

        while let Some(offset) = self.html[self.pos..].find('<') {
            let start = self.pos + offset;
            let rest = &self.html[start..];
            let tag_end = rest.find('>').map(|i| start + i + 1).unwrap_or(self.html.len());

            if tag_named(rest, "</div") {
                self.pos = tag_end;
                return Some(DivTag::Close);
            }
            if tag_named(rest, "<div") {
                self.pos = tag_end;
                let inner = &self.html[start + "<div".len()..tag_end];
                let inner = inner.strip_suffix('>').unwrap_or(inner);
                if let Some(attrs) = inner.trim_end().strip_suffix('/') {
                    self.pending_close = true;
                    return Some(DivTag::Open(class_attr(attrs)));
                }
                return Some(DivTag::Open(class_attr(inner)));
            }
            self.pos = start + 1;
        }

        self.pos = self.html.len();
        None
    }
}

/// True when `rest` starts with `name` (ASCII case-insensitive) followed by
/// the end of the tag name.
fn tag_named(rest: &str, name: &str) -> bool {
    let Some(head) = rest.get(..name.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(name) {
        return false;
    }
    match rest[name.len()..].chars().next() {
        None => true,
        Some(c) => c == '>' || c == '/' || c.is_ascii_whitespace(),
    }
}

/// Value of the `class` attribute in a tag's attribute text.
fn class_attr(attrs: &str) -> &str {
    let mut search = attrs;
    while let Some(idx) = find_ignore_case(search, "class") {
        let preceded_by_space = search[..idx]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_ascii_whitespace());
        let after = search[idx + "class".len()..].trim_start();
        search = &search[idx + "class".len()..];

        if !preceded_by_space {
            continue;
        }
        let Some(value) = after.strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        return match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &value[1..];
                body.find(quote).map(|end| &body[..end]).unwrap_or(body).trim()
            }
            _ => value
                .split(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
                .next()
                .unwrap_or(""),
        };
    }
    ""
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| haystack.get(i..i + needle.len()).is_some_and(|s| s.eq_ignore_ascii_case(needle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(html: &str) -> Vec<DivTag<'_>> {
        div_tags(html).collect()
    }

    #[test]
    fn test_open_with_quoted_class() {
        assert_eq!(tags("<div class=\"red\">\n"), vec![DivTag::Open("red")]);
        assert_eq!(tags("<div class='highlight'>"), vec![DivTag::Open("highlight")]);
        assert_eq!(tags("<DIV CLASS=\"red\">"), vec![DivTag::Open("red")]);
    }

    #[test]
    fn test_unquoted_and_missing_class() {
        assert_eq!(tags("<div class=tiny>"), vec![DivTag::Open("tiny")]);
        assert_eq!(tags("<div>"), vec![DivTag::Open("")]);
        assert_eq!(tags("<div id=\"x\" data-class=\"no\">"), vec![DivTag::Open("")]);
    }

    #[test]
    fn test_close_and_sequences() {
        assert_eq!(tags("</div>\n"), vec![DivTag::Close]);
        assert_eq!(
            tags("<div class=\"small\"><span>x</span></div>"),
            vec![DivTag::Open("small"), DivTag::Close]
        );
    }

    #[test]
    fn test_self_closing_div_opens_and_closes() {
        assert_eq!(tags("<div class=\"red\"/>"), vec![DivTag::Open("red"), DivTag::Close]);
    }

    #[test]
    fn test_other_tags_ignored() {
        assert!(tags("<divider>").is_empty());
        assert!(tags("<span class=\"red\">").is_empty());
        assert!(tags("<!-- comment -->").is_empty());
        assert!(tags("plain text").is_empty());
    }
}
