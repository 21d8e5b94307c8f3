//! `host:port` authority parsing.
//!
//! Accepts the bracketed IPv6 form (`[::1]:80`), plain `host:port`, and bare
//! hosts. A bare IPv6 literal (two or more colons, no brackets) is taken as a
//! host with no port.

use std::fmt;

/// Host and optional port split out of an authority string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    /// Host without IPv6 brackets.
    pub host: String,
    pub port: Option<u16>,
}

impl HostPort {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for HostPort {
    /// Formats as `host[:port]`, re-bracketing IPv6 hosts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape_ipv6(&self.host))?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Splits an authority into host and port.
///
/// Never fails: a missing or unparsable port falls back to `default_port`,
/// and the returned host never contains `[` or `]`.
///
/// # Examples
///
/// - `parse_host_port("[::1]:80", None)` → `("::1", Some(80))`
/// - `parse_host_port("server01", Some(1234))` → `("server01", Some(1234))`
/// - `parse_host_port("2001:db8::1", None)` → `("2001:db8::1", None)`
pub fn parse_host_port(authority: &str, default_port: Option<u16>) -> HostPort {
    if let Some(rest) = authority.strip_prefix('[') {
        let (inside, after) = match rest.split_once(']') {
            Some((inside, after)) => (inside, after),
            None => (rest, ""),
        };
        // Innermost bracket pair wins for inputs like "[[::1]]".
        let host = match inside.rfind('[') {
            Some(i) => &inside[i + 1..],
            None => inside,
        };
        let port = after
            .trim_start_matches(']')
            .strip_prefix(':')
            .and_then(parse_port)
            .or(default_port);
        return HostPort::new(strip_brackets(host), port);
    }

    if authority.matches(':').count() == 1 {
        if let Some((host, port)) = authority.split_once(':') {
            return HostPort::new(strip_brackets(host), parse_port(port).or(default_port));
        }
    }

    // No colon, or an unbracketed IPv6 literal.
    HostPort::new(strip_brackets(authority), default_port)
}

/// Wraps an IPv6 literal in brackets so it can be followed by `:port`.
///
/// Anything without a colon, or already bracketed, is returned unchanged.
pub fn escape_ipv6(host: &str) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]", host)
    } else {
        host.to_string()
    }
}

fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn strip_brackets(host: &str) -> String {
    host.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}
