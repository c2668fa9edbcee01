//! Ordered-alternative selector tables.
//!
//! Third-party markup shifts under us constantly, so no single selector is
//! trusted: each field is located by walking an ordered list of candidate
//! CSS selectors and short-circuiting on the first match. Sites declare
//! their tables as `&[&str]` constants next to their scrapers.

use scraper::{ElementRef, Html, Selector};

/// Select card elements: the first selector in `alternatives` that matches
/// anything wins the whole result set.
pub fn select_cards<'a>(document: &'a Html, alternatives: &[&str]) -> Vec<ElementRef<'a>> {
    for sel in alternatives {
        let selector = match Selector::parse(sel) {
            Ok(s) => s,
            Err(_) => continue,
        };
        let cards: Vec<ElementRef<'a>> = document.select(&selector).collect();
        if !cards.is_empty() {
            return cards;
        }
    }
    Vec::new()
}

/// First element under `scope` matching any selector, in table order.
pub fn first_match<'a>(scope: ElementRef<'a>, alternatives: &[&str]) -> Option<ElementRef<'a>> {
    for sel in alternatives {
        if let Ok(selector) = Selector::parse(sel) {
            if let Some(element) = scope.select(&selector).next() {
                return Some(element);
            }
        }
    }
    None
}

/// Trimmed text of the first matching element, if non-empty.
pub fn first_text(scope: ElementRef<'_>, alternatives: &[&str]) -> Option<String> {
    first_match(scope, alternatives)
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// `href` of the first matching element that carries one.
pub fn first_href(scope: ElementRef<'_>, alternatives: &[&str]) -> Option<String> {
    for sel in alternatives {
        if let Ok(selector) = Selector::parse(sel) {
            for element in scope.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    return Some(href.to_string());
                }
            }
        }
    }
    None
}

/// Concatenated, whitespace-normalized text of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a path to a full URL, handling both absolute and relative paths.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
        <div class="card">
          <h3 class="new-title">First</h3>
          <a class="apply" href="/jobs/1">Apply</a>
          <p class="snippet">  A   spaced   description  </p>
        </div>
    "#;

    fn with_card<R>(f: impl FnOnce(ElementRef<'_>) -> R) -> R {
        let doc = Html::parse_document(HTML);
        let selector = Selector::parse("div.card").unwrap();
        f(doc.select(&selector).next().unwrap())
    }

    #[test]
    fn test_first_text_walks_alternatives_in_order() {
        with_card(|card| {
            let text = first_text(card, &["h3.old-title", "h3.new-title"]);
            assert_eq!(text.as_deref(), Some("First"));
        });
    }

    #[test]
    fn test_first_text_none_when_no_alternative_matches() {
        with_card(|card| {
            assert_eq!(first_text(card, &["h3.gone", "h2.also-gone"]), None);
        });
    }

    #[test]
    fn test_first_href() {
        with_card(|card| {
            let href = first_href(card, &["a.missing", "a.apply"]);
            assert_eq!(href.as_deref(), Some("/jobs/1"));
        });
    }

    #[test]
    fn test_element_text_normalizes_whitespace() {
        with_card(|card| {
            let text = first_text(card, &["p.snippet"]);
            assert_eq!(text.as_deref(), Some("A spaced description"));
        });
    }

    #[test]
    fn test_select_cards_first_nonempty_set_wins() {
        let doc = Html::parse_document(HTML);
        let cards = select_cards(&doc, &["div.missing", "div.card"]);
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let doc = Html::parse_document(HTML);
        let cards = select_cards(&doc, &["][bad", "div.card"]);
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("https://example.com", "/path"),
            "https://example.com/path"
        );
        assert_eq!(
            resolve_url("https://example.com", "https://other.org/x"),
            "https://other.org/x"
        );
    }
}
