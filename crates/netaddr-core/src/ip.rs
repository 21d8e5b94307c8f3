//! IP literal and port validation.
//!
//! Validation is delegated to the `std::net` address parsers; inputs are
//! never normalized first, so surrounding whitespace or brackets fail.

use std::net::{Ipv4Addr, Ipv6Addr};

/// True for a dotted-quad IPv4 literal (`42.42.42.42`).
pub fn is_valid_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// True for an RFC 4291 IPv6 literal, including `::` compression and an
/// embedded IPv4 tail. Zone IDs (`fe80::1%eth0`) are rejected.
pub fn is_valid_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// True if `s` is either a valid IPv4 or IPv6 literal.
pub fn is_valid_ip(s: &str) -> bool {
    is_valid_ipv4(s) || is_valid_ipv6(s)
}

/// True for a decimal port number in 0..=65535 with no sign or whitespace.
pub fn is_valid_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.parse::<u16>().is_ok()
}
