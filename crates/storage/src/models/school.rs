use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct School {
    /// Slug identifying the school.
    pub value: String,
    /// Display name. Athletes reference their school by this label.
    pub label: String,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub master_id: Option<String>,
}

/// Builds a URL-safe slug out of a display name, folding Spanish accents.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        let folded = match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        };

        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(folded);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Goju-Ryu Mérida"), "goju-ryu-merida");
        assert_eq!(slugify("Isshin-Ryu San Cristóbal"), "isshin-ryu-san-cristobal");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Dojo   Okinawa!! "), "dojo-okinawa");
        assert_eq!(slugify("Peña & Núñez"), "pena-nunez");
    }
}
