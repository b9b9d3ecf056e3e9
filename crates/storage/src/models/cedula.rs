use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Nationality letter that prefixes a Venezuelan identity document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DocumentType {
    #[default]
    V,
    E,
    P,
    T,
}

impl DocumentType {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'V' => Some(Self::V),
            'E' => Some(Self::E),
            'P' => Some(Self::P),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::V => 'V',
            Self::E => 'E',
            Self::P => 'P',
            Self::T => 'T',
        }
    }
}

/// A cédula split into its document-type prefix and its number.
///
/// The prefix is optional in the input and defaults to `V`. A dash after the
/// prefix and thousands separators in the number are dropped.
///
/// # Examples
///
/// ```
/// use storage::models::{CedulaParts, DocumentType};
///
/// let parts = CedulaParts::parse("e-12.345.678");
/// assert_eq!(parts.prefix, DocumentType::E);
/// assert_eq!(parts.number, "12345678");
///
/// let bare = CedulaParts::parse("20100001");
/// assert_eq!(bare.prefix, DocumentType::V);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CedulaParts {
    pub prefix: DocumentType,
    pub number: String,
}

impl CedulaParts {
    pub fn parse(cedula: &str) -> Self {
        let trimmed = cedula.trim();
        let mut chars = trimmed.chars();

        let (prefix, rest) = match chars.next().and_then(DocumentType::from_char) {
            Some(prefix) => {
                let rest = chars.as_str();
                (prefix, rest.strip_prefix('-').unwrap_or(rest))
            }
            None => (DocumentType::default(), trimmed),
        };

        Self {
            prefix,
            number: rest.replace('.', ""),
        }
    }
}

impl fmt::Display for CedulaParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix.as_char(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_dash_prefix() {
        let parts = CedulaParts::parse("V-20100001");
        assert_eq!(parts.prefix, DocumentType::V);
        assert_eq!(parts.number, "20100001");
    }

    #[test]
    fn test_parse_lowercase_prefix_without_dash() {
        let parts = CedulaParts::parse("p1234567");
        assert_eq!(parts.prefix, DocumentType::P);
        assert_eq!(parts.number, "1234567");
    }

    #[test]
    fn test_parse_strips_dots() {
        let parts = CedulaParts::parse("T-9.876.543");
        assert_eq!(parts.prefix, DocumentType::T);
        assert_eq!(parts.number, "9876543");
    }

    #[test]
    fn test_parse_defaults_to_v() {
        let parts = CedulaParts::parse("27100012");
        assert_eq!(parts.prefix, DocumentType::V);
        assert_eq!(parts.number, "27100012");
    }

    #[test]
    fn test_parse_empty() {
        let parts = CedulaParts::parse("");
        assert_eq!(parts.prefix, DocumentType::V);
        assert!(parts.number.is_empty());
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        let parts = CedulaParts::parse("e.12.345");
        assert_eq!(parts.to_string(), "E-12345");
        assert_eq!(CedulaParts::parse(&parts.to_string()), parts);
    }
}
