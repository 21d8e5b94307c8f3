//! CLI command handlers, one per file.

mod check_ip;
mod host_port;
mod keepalive;
mod split;

pub use check_ip::run_check_ip;
pub use host_port::run_host_port;
pub use keepalive::run_keepalive_support;
pub use split::run_split;
