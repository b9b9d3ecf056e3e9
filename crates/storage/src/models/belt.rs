use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Karate rank, ordered from white to black.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Belt {
    #[serde(rename = "Blanco")]
    White,
    #[serde(rename = "Amarillo")]
    Yellow,
    #[serde(rename = "Naranja")]
    Orange,
    #[serde(rename = "Verde")]
    Green,
    #[serde(rename = "Azul")]
    Blue,
    #[serde(rename = "Púrpura")]
    Purple,
    #[serde(rename = "Marrón")]
    Brown,
    #[serde(rename = "Negro")]
    Black,
}

impl Belt {
    pub const ALL: [Belt; 8] = [
        Belt::White,
        Belt::Yellow,
        Belt::Orange,
        Belt::Green,
        Belt::Blue,
        Belt::Purple,
        Belt::Brown,
        Belt::Black,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::White => "Blanco",
            Self::Yellow => "Amarillo",
            Self::Orange => "Naranja",
            Self::Green => "Verde",
            Self::Blue => "Azul",
            Self::Purple => "Púrpura",
            Self::Brown => "Marrón",
            Self::Black => "Negro",
        }
    }
}

impl fmt::Display for Belt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belts_are_ordered_white_to_black() {
        assert!(Belt::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Belt::ALL.first(), Some(&Belt::White));
        assert_eq!(Belt::ALL.last(), Some(&Belt::Black));
    }

    #[test]
    fn test_serializes_with_spanish_label() {
        let json = serde_json::to_string(&Belt::Purple).unwrap();
        assert_eq!(json, "\"Púrpura\"");

        let belt: Belt = serde_json::from_str("\"Marrón\"").unwrap();
        assert_eq!(belt, Belt::Brown);
        assert_eq!(belt.to_string(), "Marrón");
    }
}
