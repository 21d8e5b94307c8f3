pub mod config;
pub mod logging;

pub mod host_port;
pub mod ip;
#[cfg(unix)]
pub mod keepalive;
pub mod url_split;

pub use host_port::{escape_ipv6, parse_host_port, HostPort};
pub use ip::{is_valid_ip, is_valid_ipv4, is_valid_ipv6, is_valid_port};
#[cfg(unix)]
pub use keepalive::{set_tcp_keepalive, KeepaliveOption, SetSockOpt};
pub use url_split::{urlsplit, ParamValue, Params, SplitUrl};
