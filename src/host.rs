// src/host.rs

use url::Url;

use crate::codec::FRAGMENT_DELIMITER;

/// Schemes whose links cannot be opened by a second party.
pub const NON_SHAREABLE_SCHEMES: &[&str] = &["blob", "file", "about", "data"];

/// The address the form was opened from, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAddress {
    base: String,
    fragment: String,
    scheme: Option<String>,
}

impl HostAddress {
    pub fn parse(address: &str) -> Self {
        let address = address.trim();
        let (base, fragment) = match address.split_once(FRAGMENT_DELIMITER) {
            Some((base, fragment)) => (base, fragment),
            None => (address, ""),
        };

        let scheme = match Url::parse(base) {
            Ok(url) => Some(url.scheme().to_ascii_lowercase()),
            Err(e) => {
                if !base.is_empty() {
                    tracing::debug!(error = %e, address = base, "host address is not a url");
                }
                None
            }
        };

        Self {
            base: base.to_string(),
            fragment: fragment.to_string(),
            scheme,
        }
    }

    /// Address without the fragment; this is also the blank-form link.
    pub fn base_address(&self) -> &str {
        &self.base
    }

    /// Fragment without the leading delimiter.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn is_shareable(&self) -> bool {
        match self.scheme() {
            Some(s) => !NON_SHAREABLE_SCHEMES.contains(&s),
            None => false,
        }
    }

    pub fn link_with_token(&self, token: &str) -> String {
        format!("{}{}{}", self.base, FRAGMENT_DELIMITER, token)
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_base_and_fragment() {
        let h = HostAddress::parse("https://avant.example.org/form/#eyJhIjoiYiJ9");
        assert_eq!(h.base_address(), "https://avant.example.org/form/");
        assert_eq!(h.fragment(), "eyJhIjoiYiJ9");
        assert_eq!(h.scheme(), Some("https"));
        assert!(h.is_shareable());
    }

    #[test]
    fn only_first_delimiter_splits() {
        let h = HostAddress::parse("https://x.org/#abc#def");
        assert_eq!(h.base_address(), "https://x.org/");
        assert_eq!(h.fragment(), "abc#def");
    }

    #[test]
    fn no_fragment_is_empty() {
        let h = HostAddress::parse("https://x.org/form");
        assert_eq!(h.fragment(), "");
        assert_eq!(h.link_with_token("T0tFTg=="), "https://x.org/form#T0tFTg==");
    }

    #[test]
    fn preview_schemes_are_not_shareable() {
        for addr in [
            "blob:https://preview.example/0b1c-22",
            "file:///home/ana/avant/index.html",
            "about:blank",
            "",
            "not an address",
        ] {
            assert!(!HostAddress::parse(addr).is_shareable(), "{addr}");
        }
    }
}
