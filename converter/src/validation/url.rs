//! Syntactic URL validation.

use ::url::{Host, Url};

/// Whether `candidate` is an absolute URL with a scheme and a host.
///
/// The host may be a domain name or an IPv4/IPv6 literal. Purely
/// syntactic: nothing is resolved or fetched.
pub fn is_valid_url(candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate.trim()) else {
        return false;
    };

    match url.host() {
        Some(Host::Domain(domain)) => !domain.is_empty(),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
