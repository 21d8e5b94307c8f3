//! Keepalive-support command: list settable keepalive options.

use anyhow::Result;

#[cfg(unix)]
pub fn run_keepalive_support() -> Result<i32> {
    use netaddr_core::KeepaliveOption;

    for option in KeepaliveOption::ALL {
        let status = if option.is_supported() {
            "supported"
        } else {
            "skipped"
        };
        println!("{:<14} {}", option.name(), status);
    }
    Ok(0)
}

#[cfg(not(unix))]
pub fn run_keepalive_support() -> Result<i32> {
    anyhow::bail!("TCP keepalive configuration is only available on Unix targets")
}
