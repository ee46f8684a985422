//! Messages exchanged with the embedded 3D dice widget.
//!
//! The widget runs in its own frame; host and widget talk through JSON objects
//! tagged by `type`:
//!
//! - host → widget: `{"type": "dice:roll", "sides": N}`
//! - widget → host: `{"type": "dice:ready"}` once loaded
//! - widget → host: `{"type": "dice:result", "result": N}` after a roll

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DiceMessage {
    /// Ask the widget to roll one die with `sides` faces.
    #[serde(rename = "dice:roll")]
    Roll { sides: u32 },

    /// The widget finished loading and accepts rolls.
    #[serde(rename = "dice:ready")]
    Ready,

    /// Outcome of the last roll.
    #[serde(rename = "dice:result")]
    Result { result: i64 },

    /// Any other message type, ignored by the host.
    #[serde(other)]
    Unknown,
}

impl DiceMessage {
    /// Decode an incoming message.
    ///
    /// Returns `None` for anything that is not a JSON object with a known shape,
    /// matching the host's "ignore what you don't understand" contract.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<serde_json::Value>(raw).ok()? {
            value @ serde_json::Value::Object(_) => match serde_json::from_value(value) {
                Ok(DiceMessage::Unknown) | Err(_) => None,
                Ok(message) => Some(message),
            },
            _ => None,
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing a tagged enum of plain integers cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
