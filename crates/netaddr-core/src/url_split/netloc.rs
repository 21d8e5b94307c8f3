//! Netloc decomposition: `[user[:password]@]host[:port]`.

use crate::host_port::parse_host_port;

/// Splits at the last `@` into (userinfo, hostinfo).
fn split_userinfo(netloc: &str) -> (Option<&str>, &str) {
    match netloc.rsplit_once('@') {
        Some((userinfo, hostinfo)) => (Some(userinfo), hostinfo),
        None => (None, netloc),
    }
}

pub(super) fn hostname(netloc: &str) -> Option<String> {
    let (_, hostinfo) = split_userinfo(netloc);
    let host = parse_host_port(hostinfo, None).host;
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

pub(super) fn port(netloc: &str) -> Option<u16> {
    let (_, hostinfo) = split_userinfo(netloc);
    parse_host_port(hostinfo, None).port
}

pub(super) fn username(netloc: &str) -> Option<String> {
    let (userinfo, _) = split_userinfo(netloc);
    userinfo.map(|u| match u.split_once(':') {
        Some((user, _)) => user.to_string(),
        None => u.to_string(),
    })
}

pub(super) fn password(netloc: &str) -> Option<String> {
    let (userinfo, _) = split_userinfo(netloc);
    userinfo
        .and_then(|u| u.split_once(':'))
        .map(|(_, pass)| pass.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_password_host_port() {
        let n = "user:pass@myhost:8080";
        assert_eq!(username(n).as_deref(), Some("user"));
        assert_eq!(password(n).as_deref(), Some("pass"));
        assert_eq!(hostname(n).as_deref(), Some("myhost"));
        assert_eq!(port(n), Some(8080));
    }

    #[test]
    fn no_userinfo() {
        assert_eq!(username("myhost"), None);
        assert_eq!(password("myhost"), None);
        assert_eq!(hostname("myhost").as_deref(), Some("myhost"));
        assert_eq!(port("myhost"), None);
    }

    #[test]
    fn user_without_password() {
        assert_eq!(username("alice@h").as_deref(), Some("alice"));
        assert_eq!(password("alice@h"), None);
        assert_eq!(password("alice:@h").as_deref(), Some(""));
    }

    #[test]
    fn last_at_separates_host() {
        let n = "user:p@ss@[::1]:443";
        assert_eq!(username(n).as_deref(), Some("user"));
        assert_eq!(password(n).as_deref(), Some("p@ss"));
        assert_eq!(hostname(n).as_deref(), Some("::1"));
        assert_eq!(port(n), Some(443));
    }

    #[test]
    fn empty_host_is_none() {
        assert_eq!(hostname(""), None);
        assert_eq!(hostname("user@"), None);
        assert_eq!(hostname(":80"), None);
        assert_eq!(port(":80"), Some(80));
    }
}
