//! Feature Extraction - raw URL to feature vector
//!
//! Pure, total mapping from one URL string (plus resolved domain info) to
//! the fixed-order vector defined in `layout`. O(len(url)), no I/O, never
//! fails: individual features degrade to their documented defaults when the
//! URL does not parse.
//!
//! Substring and character counts operate on the RAW url text, not the
//! decoded path. That is the trained contract: the counts are lightweight
//! lexical heuristics, not semantic URL properties.

use md5::{Digest, Md5};
use url::{Host, Url};

use super::domain::DomainInfo;
use super::vector::FeatureVector;

/// Modulus applied to the domain digest.
const DOMAIN_HASH_MODULUS: u128 = 100_000_000;

/// Deterministic content hash of a registered domain, reduced mod 1e8.
///
/// MD5 of the domain bytes, the full 128-bit digest taken mod 1e8. Fixed
/// and seed-independent: the offline trainer computes the identical value,
/// so artifacts and serving stay bit-consistent across processes and hosts.
/// An empty domain (URL had no resolvable host) degrades to 0.
pub fn root_domain_hash(registered_domain: &str) -> u64 {
    if registered_domain.is_empty() {
        return 0;
    }
    let digest = Md5::digest(registered_domain.as_bytes());
    let value = u128::from_be_bytes(digest.into());
    (value % DOMAIN_HASH_MODULUS) as u64
}

/// Number of '&'-delimited tokens in the query string.
///
/// An absent or empty query yields 1, never 0: the trained model's input
/// contract counts the degenerate single empty token. Deliberate quirk,
/// reproduced exactly.
fn count_params(parsed: Option<&Url>) -> usize {
    let query = parsed.and_then(|u| u.query()).unwrap_or("");
    query.split('&').count()
}

fn scheme_is(parsed: Option<&Url>, scheme: &str) -> bool {
    parsed.map(|u| u.scheme() == scheme).unwrap_or(false)
}

/// True iff the parsed host is a literal IPv4 or IPv6 address.
fn has_ip_literal_host(parsed: Option<&Url>) -> bool {
    matches!(
        parsed.and_then(|u| u.host()),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_))
    )
}

fn count_char(raw: &str, c: char) -> usize {
    raw.chars().filter(|&ch| ch == c).count()
}

/// Extract the full feature vector for one URL.
///
/// The array literal below is in FEATURE_LAYOUT order; layout.rs is the
/// authority, this must follow it index for index.
pub fn extract(raw: &str, domain: &DomainInfo) -> FeatureVector {
    let parsed = Url::parse(raw).ok();
    let parsed = parsed.as_ref();

    FeatureVector::from_values([
        // Domain
        root_domain_hash(&domain.registered_domain) as f64, // root_domain_hash
        domain.has_subdomain as u8 as f64,                  // has_subdomain
        // Raw URL text
        count_char(raw, '.') as f64,  // count_dots
        count_char(raw, '-') as f64,  // count_dashes
        count_char(raw, '_') as f64,  // count_underscores
        count_char(raw, '/') as f64,  // count_slashes
        count_char(raw, '?') as f64,  // count_question_marks
        raw.chars().filter(|c| !c.is_alphanumeric()).count() as f64, // count_non_alphanumeric
        raw.chars().filter(|c| c.is_numeric()).count() as f64, // count_digits
        raw.chars().filter(|c| c.is_alphabetic()).count() as f64, // count_letters
        // Query
        count_params(parsed) as f64, // count_params
        // Substring flags
        raw.contains("php") as u8 as f64,  // has_php
        raw.contains("html") as u8 as f64, // has_html
        raw.contains('@') as u8 as f64,    // has_at_symbol
        // Scheme / host
        scheme_is(parsed, "http") as u8 as f64,      // has_http
        has_ip_literal_host(parsed) as u8 as f64,    // has_ip_literal
        scheme_is(parsed, "https") as u8 as f64,     // has_https
    ])
}
