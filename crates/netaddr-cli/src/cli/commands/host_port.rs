//! Host-port command: split an authority into host and port.

use anyhow::Result;
use netaddr_core::{is_valid_ip, parse_host_port};

pub fn run_host_port(authority: &str, default_port: Option<u16>) -> Result<i32> {
    let hp = parse_host_port(authority, default_port);
    println!("host: {}", hp.host);
    match hp.port {
        Some(port) => println!("port: {}", port),
        None => println!("port: (none)"),
    }
    println!("ip literal: {}", is_valid_ip(&hp.host));
    println!("normalized: {}", hp);
    Ok(0)
}
