//! Contact page helpers.

use std::borrow::Cow;

/// A scheduling link (e.g. a Calendly event URL) that can be prefilled
/// with the visitor's name and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLink {
    base_url: String,
}

impl BookingLink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the `name` / `email` query parameters on the base URL.
    ///
    /// An existing parameter with the same key is replaced in place; other
    /// parameters keep their order and encoding. `None` and empty strings
    /// leave the key untouched. Whitespace is a value and is sent as-is.
    /// A fragment on the base URL stays at the end.
    pub fn prefill_url(&self, name: Option<&str>, email: Option<&str>) -> String {
        let updates: Vec<(&str, &str)> = [("name", name), ("email", email)]
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .collect();

        if updates.is_empty() {
            return self.base_url.clone();
        }

        let (head, fragment) = match self.base_url.split_once('#') {
            Some((head, fragment)) => (head, Some(fragment)),
            None => (self.base_url.as_str(), None),
        };
        let (path, query) = head.split_once('?').unwrap_or((head, ""));

        let mut pairs: Vec<String> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(str::to_string)
            .collect();

        for (key, value) in updates {
            let encoded = format!("{key}={}", urlencoding::encode(value));
            let mut replaced = false;
            pairs.retain_mut(|pair| {
                if param_key(pair) != key {
                    return true;
                }
                if replaced {
                    return false;
                }
                pair.clone_from(&encoded);
                replaced = true;
                true
            });
            if !replaced {
                pairs.push(encoded);
            }
        }

        let mut url = format!("{path}?{}", pairs.join("&"));
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

/// Decoded key of a raw `key=value` query pair.
fn param_key(pair: &str) -> Cow<'_, str> {
    let raw = pair.split_once('=').map_or(pair, |(key, _)| key);
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://calendly.com/studio/15-min-intro-call";

    #[test]
    fn test_prefill_without_values_returns_base() {
        let link = BookingLink::new(BASE);
        assert_eq!(link.prefill_url(None, None), BASE);
        assert_eq!(link.prefill_url(Some(""), Some("")), BASE);
    }

    #[test]
    fn test_prefill_encodes_values() {
        let link = BookingLink::new(BASE);
        assert_eq!(
            link.prefill_url(Some("Ada Lovelace"), Some("ada@example.com")),
            format!("{BASE}?name=Ada%20Lovelace&email=ada%40example.com")
        );
    }

    #[test]
    fn test_prefill_respects_existing_query_and_fragment() {
        let link = BookingLink::new("https://example.com/book?month=2025-09#top");
        assert_eq!(
            link.prefill_url(None, Some("a@b.c")),
            "https://example.com/book?month=2025-09&email=a%40b.c#top"
        );
    }

    #[test]
    fn test_prefill_keeps_whitespace_values() {
        let link = BookingLink::new(BASE);
        assert_eq!(link.prefill_url(Some(" "), None), format!("{BASE}?name=%20"));
    }

    #[test]
    fn test_prefill_replaces_existing_parameter() {
        let link = BookingLink::new("https://calendly.com/x/15?name=Old&month=2025-09");
        let url = link.prefill_url(Some("Ada Lovelace"), None);

        assert_eq!(url, "https://calendly.com/x/15?name=Ada%20Lovelace&month=2025-09");
        assert_eq!(url.matches("name=").count(), 1);
    }

    #[test]
    fn test_prefill_collapses_repeated_parameter() {
        let link = BookingLink::new("https://calendly.com/x/15?email=a%40b.c&email=c%40d.e");
        assert_eq!(
            link.prefill_url(None, Some("ada@example.com")),
            "https://calendly.com/x/15?email=ada%40example.com"
        );
    }

    #[test]
    fn test_prefill_after_bare_question_mark() {
        let link = BookingLink::new("https://calendly.com/x/15?");
        assert_eq!(
            link.prefill_url(None, Some("a@b.c")),
            "https://calendly.com/x/15?email=a%40b.c"
        );
    }
}
