//! TCP keepalive configuration.
//!
//! `SO_KEEPALIVE` exists everywhere; the TCP-level tuning options
//! (`TCP_KEEPIDLE`, `TCP_KEEPINTVL`, `TCP_KEEPCNT`) only on some targets.
//! Options the build target lacks are skipped without error, so the same
//! call works across Unix flavours.

use libc::c_int;
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// A socket that accepts integer `setsockopt` calls.
pub trait SetSockOpt {
    fn set_sock_opt(&self, level: c_int, name: c_int, value: c_int) -> io::Result<()>;
}

fn setsockopt_raw(fd: RawFd, level: c_int, name: c_int, value: c_int) -> io::Result<()> {
    let r = unsafe {
        libc::setsockopt(
            fd,
            level,
            name,
            &value as *const c_int as *const libc::c_void,
            std::mem::size_of::<c_int>() as libc::socklen_t,
        )
    };
    if r == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

macro_rules! impl_set_sock_opt {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SetSockOpt for $ty {
                fn set_sock_opt(&self, level: c_int, name: c_int, value: c_int) -> io::Result<()> {
                    setsockopt_raw(self.as_raw_fd(), level, name, value)
                }
            }
        )*
    };
}

impl_set_sock_opt!(
    std::net::TcpStream,
    std::net::TcpListener,
    tokio::net::TcpStream,
    tokio::net::TcpListener,
);

/// Keepalive-related socket options, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepaliveOption {
    /// `SOL_SOCKET` / `SO_KEEPALIVE`.
    Enable,
    /// Seconds idle before the first probe.
    Idle,
    /// Seconds between probes.
    Interval,
    /// Unanswered probes before the connection is dropped.
    Count,
}

impl KeepaliveOption {
    pub const ALL: [KeepaliveOption; 4] = [
        KeepaliveOption::Enable,
        KeepaliveOption::Idle,
        KeepaliveOption::Interval,
        KeepaliveOption::Count,
    ];

    /// `(level, name)` for this option, or `None` when the target has no
    /// such constant.
    pub fn sockopt(self) -> Option<(c_int, c_int)> {
        match self {
            KeepaliveOption::Enable => Some((libc::SOL_SOCKET, libc::SO_KEEPALIVE)),
            KeepaliveOption::Idle => tcp_keepidle().map(|n| (libc::IPPROTO_TCP, n)),
            KeepaliveOption::Interval => tcp_keepintvl().map(|n| (libc::IPPROTO_TCP, n)),
            KeepaliveOption::Count => tcp_keepcnt().map(|n| (libc::IPPROTO_TCP, n)),
        }
    }

    pub fn is_supported(self) -> bool {
        self.sockopt().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            KeepaliveOption::Enable => "SO_KEEPALIVE",
            KeepaliveOption::Idle => "TCP_KEEPIDLE",
            KeepaliveOption::Interval => "TCP_KEEPINTVL",
            KeepaliveOption::Count => "TCP_KEEPCNT",
        }
    }
}

// Targets where libc exports TCP_KEEPIDLE. Apple platforms name it
// TCP_KEEPALIVE and are left out.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "hurd",
    target_os = "aix",
    target_os = "cygwin",
    target_os = "redox"
))]
fn tcp_keepidle() -> Option<c_int> {
    Some(libc::TCP_KEEPIDLE)
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "hurd",
    target_os = "aix",
    target_os = "cygwin",
    target_os = "redox"
)))]
fn tcp_keepidle() -> Option<c_int> {
    None
}

// Targets where libc exports both TCP_KEEPINTVL and TCP_KEEPCNT.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "hurd",
    target_os = "aix",
    target_os = "cygwin",
    target_os = "redox",
    target_vendor = "apple"
))]
mod tuning_consts {
    use libc::c_int;

    pub(super) fn tcp_keepintvl() -> Option<c_int> {
        Some(libc::TCP_KEEPINTVL)
    }

    pub(super) fn tcp_keepcnt() -> Option<c_int> {
        Some(libc::TCP_KEEPCNT)
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "hurd",
    target_os = "aix",
    target_os = "cygwin",
    target_os = "redox",
    target_vendor = "apple"
)))]
mod tuning_consts {
    use libc::c_int;

    pub(super) fn tcp_keepintvl() -> Option<c_int> {
        None
    }

    pub(super) fn tcp_keepcnt() -> Option<c_int> {
        None
    }
}

use tuning_consts::{tcp_keepcnt, tcp_keepintvl};

/// Turns keepalive on or off for `sock` and, when on, applies whichever of
/// `idle`, `interval` and `count` are given and supported by the target.
///
/// `SO_KEEPALIVE` is always set first. With `enabled == false` that is the
/// only call made. The first OS error is returned unchanged.
pub fn set_tcp_keepalive<S: SetSockOpt + ?Sized>(
    sock: &S,
    enabled: bool,
    idle: Option<c_int>,
    interval: Option<c_int>,
    count: Option<c_int>,
) -> io::Result<()> {
    set_tcp_keepalive_with(sock, enabled, idle, interval, count, KeepaliveOption::sockopt)
}

/// Same as [`set_tcp_keepalive`], with option availability decided by
/// `resolve` instead of the build target.
pub(crate) fn set_tcp_keepalive_with<S, F>(
    sock: &S,
    enabled: bool,
    idle: Option<c_int>,
    interval: Option<c_int>,
    count: Option<c_int>,
    resolve: F,
) -> io::Result<()>
where
    S: SetSockOpt + ?Sized,
    F: Fn(KeepaliveOption) -> Option<(c_int, c_int)>,
{
    apply(sock, &resolve, KeepaliveOption::Enable, c_int::from(enabled))?;
    if !enabled {
        return Ok(());
    }

    let tuning = [
        (KeepaliveOption::Idle, idle),
        (KeepaliveOption::Interval, interval),
        (KeepaliveOption::Count, count),
    ];
    for (option, value) in tuning {
        if let Some(value) = value {
            apply(sock, &resolve, option, value)?;
        }
    }
    Ok(())
}

fn apply<S, F>(sock: &S, resolve: &F, option: KeepaliveOption, value: c_int) -> io::Result<()>
where
    S: SetSockOpt + ?Sized,
    F: Fn(KeepaliveOption) -> Option<(c_int, c_int)>,
{
    let Some((level, name)) = resolve(option) else {
        tracing::debug!(option = option.name(), "socket option not available on this platform, skipping");
        return Ok(());
    };
    sock.set_sock_opt(level, name, value)?;
    tracing::debug!(option = option.name(), value, "socket option set");
    Ok(())
}
