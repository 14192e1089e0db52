//! Position-adjustment kinds.
//!
//! A position adjustment names how overlapping elements within a layer are
//! arranged by the downstream pipeline. Only the kind is carried; it is
//! emitted as a bare string under the layer's `position` key.

use serde::{Deserialize, Serialize};

/// Closed set of position-adjustment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Identity,
    Stack,
    Dodge,
    Fill,
    Jitter,
    Nudge,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Position::Identity => "identity",
            Position::Stack => "stack",
            Position::Dodge => "dodge",
            Position::Fill => "fill",
            Position::Jitter => "jitter",
            Position::Nudge => "nudge",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::Identity.to_string(), "identity");
        assert_eq!(Position::Stack.to_string(), "stack");
        assert_eq!(Position::Nudge.to_string(), "nudge");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Position::Dodge).unwrap(), "\"dodge\"");
        let position: Position = serde_json::from_str("\"jitter\"").unwrap();
        assert_eq!(position, Position::Jitter);
    }
}
