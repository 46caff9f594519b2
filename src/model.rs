//! Message Model
//!
//! Wire shapes shared with the HamGO node REST API (`/api/cache`,
//! `/api/spread/cq`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of station behind a contact
///
/// Encoded as a plain integer on the wire. Unknown kinds are preserved so a
/// newer node does not break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ContactType {
    /// Operator station (wire value 0)
    #[default]
    User,
    /// Fixed station (wire value 1)
    Fixed,
    /// Any other value sent by the node
    Other(u8),
}

impl From<u8> for ContactType {
    fn from(value: u8) -> Self {
        match value {
            0 => ContactType::User,
            1 => ContactType::Fixed,
            other => ContactType::Other(other),
        }
    }
}

impl From<ContactType> for u8 {
    fn from(value: ContactType) -> Self {
        match value {
            ContactType::User => 0,
            ContactType::Fixed => 1,
            ContactType::Other(v) => v,
        }
    }
}

/// Source of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "type", default)]
    pub kind: ContactType,
    #[serde(default)]
    pub ips: Vec<String>,
    pub callsign: String,
}

impl Contact {
    /// A user station reachable at a single address
    pub fn station(callsign: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            kind: ContactType::User,
            ips: vec![ip.into()],
            callsign: callsign.into(),
        }
    }
}

/// A CQ message, either received from the node cache or about to be spread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sequence: u64,
    pub contact: Contact,
    pub message: String,
    /// Set by the node; never sent by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack: Option<bool>,
}

impl Message {
    /// Build an outgoing message (no ack)
    pub fn outgoing(sequence: u64, contact: Contact, message: impl Into<String>) -> Self {
        Self {
            sequence,
            contact,
            message: message.into(),
            ack: None,
        }
    }

    pub fn is_acked(&self) -> bool {
        self.ack.unwrap_or(false)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {}{}",
            self.sequence,
            self.contact.callsign,
            self.contact.ips.join(", "),
            self.message,
            if self.is_acked() { " (ack)" } else { "" }
        )
    }
}
