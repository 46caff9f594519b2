//! Input validation for outgoing CQ messages

use std::net::IpAddr;

/// Longest callsign the node's contact encoding can carry (one length byte)
pub const MAX_CALLSIGN_LEN: usize = 255;

/// Validates a station callsign
pub fn validate_callsign(callsign: &str) -> Result<(), String> {
    if callsign.trim().is_empty() {
        return Err("Callsign cannot be empty".to_string());
    }

    if callsign.len() > MAX_CALLSIGN_LEN {
        return Err(format!(
            "Callsign too long (max {} bytes)",
            MAX_CALLSIGN_LEN
        ));
    }

    if callsign.contains(|c: char| c.is_control()) {
        return Err("Callsign contains invalid characters".to_string());
    }

    Ok(())
}

/// Validates a contact address (IPv4 or IPv6 literal)
pub fn validate_ip(ip: &str) -> Result<(), String> {
    if ip.is_empty() {
        return Err("IP address cannot be empty".to_string());
    }

    ip.parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| format!("Invalid IP address '{}'", ip))
}
