//! URL validation applied before a mapping is ever stored.
//!
//! Checks run in a fixed order and short-circuit on the first failure, so
//! every rejection carries exactly one reason. The order is: empty input,
//! parse failure, scheme, missing host, private host, injection patterns,
//! reserved domain suffix.

use url::Url;

/// Hostname prefixes that resolve to private, loopback, or link-local
/// addresses.
const PRIVATE_HOST_PREFIXES: &[&str] = &[
    "10.", "172.16.", "172.17.", "172.18.", "172.19.", "172.20.", "172.21.", "172.22.", "172.23.",
    "172.24.", "172.25.", "172.26.", "172.27.", "172.28.", "172.29.", "172.30.", "172.31.",
    "192.168.", "127.", "0.", "169.254.", "localhost", "::1",
];

/// Substrings associated with script injection, matched case-insensitively
/// against both the raw input and the serialized URL.
const MALICIOUS_PATTERNS: &[&str] = &[
    "javascript:",
    "data:",
    "vbscript:",
    "alert(",
    "eval(",
    "document.cookie",
    "window.location",
    "<script>",
    "%3cscript%3e",
];

/// Reserved and special-use domain suffixes (RFC 2606 / RFC 6761).
const RESERVED_SUFFIXES: &[&str] = &[".test", ".example", ".invalid", ".localhost"];

/// Reasons a URL is rejected, one per validation category.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("invalid URL format")]
    Malformed,

    #[error("only http and https URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL cannot point to private or local addresses")]
    PrivateHost,

    #[error("URL contains potentially malicious patterns")]
    MaliciousPattern,

    #[error("URL uses a reserved or special-use domain")]
    ReservedDomain,
}

/// Validates a raw URL string, returning the first failing check.
pub fn validate_url(raw_url: &str) -> Result<(), ValidationError> {
    if raw_url.is_empty() {
        return Err(ValidationError::Empty);
    }

    let parsed = Url::parse(raw_url).map_err(|_| ValidationError::Malformed)?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(ValidationError::UnsupportedScheme),
    }

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(ValidationError::MissingHost)?
        .to_ascii_lowercase();

    // `::1` parses into bracketed form, so strip brackets before matching.
    let bare_host = host.trim_start_matches('[').trim_end_matches(']');
    if PRIVATE_HOST_PREFIXES
        .iter()
        .any(|prefix| bare_host.starts_with(prefix))
    {
        return Err(ValidationError::PrivateHost);
    }

    if has_malicious_pattern(raw_url, &parsed) {
        return Err(ValidationError::MaliciousPattern);
    }

    if RESERVED_SUFFIXES
        .iter()
        .any(|suffix| bare_host.ends_with(suffix))
    {
        return Err(ValidationError::ReservedDomain);
    }

    Ok(())
}

/// The parser percent-encodes characters like `<`, so patterns are matched
/// against the raw input as well as the serialized form.
fn has_malicious_pattern(raw_url: &str, parsed: &Url) -> bool {
    let raw_lower = raw_url.to_ascii_lowercase();
    let serialized_lower = parsed.as_str().to_ascii_lowercase();

    MALICIOUS_PATTERNS
        .iter()
        .any(|pattern| raw_lower.contains(pattern) || serialized_lower.contains(pattern))
}
