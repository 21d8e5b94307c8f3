//! Check-ip command: report IPv4/IPv6 validity; non-zero exit when neither.

use netaddr_core::{is_valid_ipv4, is_valid_ipv6};

pub fn run_check_ip(literal: &str) -> i32 {
    let v4 = is_valid_ipv4(literal);
    let v6 = is_valid_ipv6(literal);
    println!("ipv4: {}", v4);
    println!("ipv6: {}", v6);
    if v4 || v6 {
        0
    } else {
        1
    }
}
