//! Split command: print the components of a URL.

use anyhow::Result;
use netaddr_core::{urlsplit, ParamValue};

pub fn run_split(url: &str, allow_fragments: bool, collapse: bool) -> Result<i32> {
    let parts = urlsplit(url, allow_fragments);
    println!("scheme:   {}", parts.scheme);
    println!("netloc:   {}", parts.netloc);
    println!("path:     {}", parts.path);
    println!("query:    {}", parts.query);
    println!("fragment: {}", parts.fragment);
    println!("hostname: {}", parts.hostname().unwrap_or_default());
    println!("port:     {}", display_opt(parts.port()));
    println!("username: {}", parts.username().unwrap_or_default());

    for (key, value) in parts.params(collapse).iter() {
        match value {
            ParamValue::Single(v) => println!("param:    {} = {}", key, v),
            ParamValue::Many(vs) => println!("param:    {} = [{}]", key, vs.join(", ")),
        }
    }
    Ok(0)
}

fn display_opt(port: Option<u16>) -> String {
    port.map(|p| p.to_string()).unwrap_or_default()
}
