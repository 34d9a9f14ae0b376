//! # Demo Server Utilities
//!
//! File: cli/src/commands/srv/utils.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Helpers for the startup banner of `floodalert srv`: detecting the
//! machine's LAN address so the page can be opened from a phone on the same
//! network, and building the URL shown for it.
//!
use std::net::IpAddr;
use tracing::{debug, warn};

/// # Get Local IP Address (`get_local_ip`)
///
/// Asks the platform's network tools for the first non-loopback IPv4
/// address. Falls back to `"localhost"` when nothing usable is found.
pub fn get_local_ip() -> String {
    let commands = [
        "ipconfig getifaddr en0",
        "ipconfig getifaddr en1",
        "ip addr show | grep 'inet ' | grep -v '127.0.0.1' | head -n 1 | awk '{print $2}' | cut -d/ -f1",
        "ifconfig | grep 'inet ' | grep -v '127.0.0.1' | head -n 1 | awk '{print $2}'",
    ];

    for cmd_str in commands {
        match std::process::Command::new("sh").arg("-c").arg(cmd_str).output() {
            Ok(output) if output.status.success() => {
                let ip = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !ip.is_empty() && ip != "localhost" {
                    debug!("Found local IP: {}", ip);
                    return ip;
                }
            }
            Ok(output) => {
                debug!(
                    "Command '{}' returned nothing usable (status={:?})",
                    cmd_str,
                    output.status.code()
                );
            }
            Err(e) => debug!("Error executing command '{}': {}", cmd_str, e),
        }
    }

    warn!("Could not detect local network IP, falling back to 'localhost'");
    "localhost".to_string()
}

/// Returns the LAN URL for the banner, or `None` when the server is bound to
/// a loopback address and is unreachable from other machines anyway.
pub fn network_url(host: IpAddr, port: u16) -> Option<String> {
    if host.is_loopback() {
        return None;
    }
    let ip = if host.is_unspecified() {
        get_local_ip()
    } else {
        host.to_string()
    };
    Some(format!("http://{}:{}", ip, port))
}
