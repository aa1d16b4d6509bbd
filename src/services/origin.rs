//! Origin admission for the exchange-rate endpoint.
//!
//! Note:
//! - Matching is exact-string for configured origins. No wildcard or suffix
//!   matching anywhere.
//! - `localhost` origins are allowed on any port and any scheme. This is a
//!   deliberate relaxation for local development and must stay.

use tracing::warn;
use url::Url;

/// Outcome of testing an Origin header value against the localhost rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalhostCheck {
    /// Parsed as a URL and the hostname is exactly `localhost`.
    Matches,
    /// Parsed as a URL but the hostname is something else.
    NoMatch,
    /// Not a parseable URL.
    Malformed,
}

pub fn localhost_check(origin: &str) -> LocalhostCheck {
    match Url::parse(origin) {
        Ok(url) if url.host_str() == Some("localhost") => LocalhostCheck::Matches,
        Ok(_) => LocalhostCheck::NoMatch,
        Err(_) => LocalhostCheck::Malformed,
    }
}

/// Read-only set of origins permitted to receive the proxied feed.
/// Built once at startup from Config and shared across all requests.
#[derive(Debug, Clone)]
pub struct Allowlist {
    origins: Vec<String>,
}

impl Allowlist {
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    /// Exact allowlist membership, or hostname == `localhost` on any port.
    ///
    /// A malformed origin is logged and treated as a plain non-match; the
    /// parse failure never reaches the caller.
    pub fn permits(&self, origin: &str) -> bool {
        if self.origins.iter().any(|o| o == origin) {
            return true;
        }
        match localhost_check(origin) {
            LocalhostCheck::Matches => true,
            LocalhostCheck::NoMatch => false,
            LocalhostCheck::Malformed => {
                warn!(origin, "received invalid origin");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Allowlist, LocalhostCheck, localhost_check};

    fn allowlist() -> Allowlist {
        Allowlist::new(vec![
            "https://numbat.dev".to_string(),
            "https://bsidhom.github.io".to_string(),
        ])
    }

    #[test]
    fn exact_member_is_permitted() {
        assert!(allowlist().permits("https://numbat.dev"));
        assert!(allowlist().permits("https://bsidhom.github.io"));
    }

    #[test]
    fn near_miss_is_rejected() {
        let list = allowlist();
        assert!(!list.permits("https://numbat.dev/"));
        assert!(!list.permits("http://numbat.dev"));
        assert!(!list.permits("https://sub.numbat.dev"));
    }

    #[test]
    fn localhost_is_permitted_on_any_port_and_scheme() {
        let list = allowlist();
        assert!(list.permits("http://localhost"));
        assert!(list.permits("http://localhost:9999"));
        assert!(list.permits("https://localhost:3000"));
    }

    #[test]
    fn localhost_lookalikes_do_not_count() {
        let list = allowlist();
        assert!(!list.permits("http://sub.localhost:3000"));
        assert!(!list.permits("http://localhost.evil.example"));
    }

    #[test]
    fn well_formed_foreign_origin_is_a_no_match() {
        assert_eq!(
            localhost_check("https://evil.example.com"),
            LocalhostCheck::NoMatch
        );
        assert!(!allowlist().permits("https://evil.example.com"));
    }

    #[test]
    fn malformed_origin_is_a_non_match_not_an_error() {
        assert_eq!(localhost_check("not-a-valid-url"), LocalhostCheck::Malformed);
        assert!(!allowlist().permits("not-a-valid-url"));
    }
}
