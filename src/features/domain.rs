//! Domain Resolver - registered-domain extraction
//!
//! Splits a URL host into registered domain (eTLD+1) and subdomain using the
//! Public Suffix List, so multi-label suffixes like "co.uk" are handled
//! correctly. Naive last-two-labels splitting is wrong for those and is not
//! used anywhere.

use url::{Host, Url};

/// Registered-domain info derived from a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainInfo {
    /// Domain one level below the public suffix, e.g. "example.co.uk".
    /// Empty when the URL has no resolvable domain host.
    pub registered_domain: String,
    /// True iff the host has at least one label left of the registered domain.
    pub has_subdomain: bool,
}

/// Resolve a raw URL to its [`DomainInfo`].
///
/// Total: any parse failure (no scheme, unparsable or missing host,
/// IP-literal host, suffix-only host) yields the default info. Malformed
/// input is attacker-controlled here, so it degrades instead of erroring.
pub fn resolve(raw: &str) -> DomainInfo {
    let Ok(parsed) = Url::parse(raw) else {
        return DomainInfo::default();
    };

    let Some(Host::Domain(host)) = parsed.host() else {
        return DomainInfo::default();
    };

    match addr::parse_domain_name(host) {
        Ok(name) => match name.root() {
            Some(root) => DomainInfo {
                registered_domain: root.to_string(),
                has_subdomain: name.prefix().is_some(),
            },
            None => DomainInfo::default(),
        },
        Err(_) => DomainInfo::default(),
    }
}
