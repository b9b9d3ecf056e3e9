use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Age bracket an athlete competes in. Never stored, always derived from the age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Hasta 5 años (mixto)")]
    UpToFive,
    #[serde(rename = "Infantil A")]
    InfantilA,
    #[serde(rename = "Infantil B")]
    InfantilB,
    #[serde(rename = "Infantil C")]
    InfantilC,
    #[serde(rename = "Cadete")]
    Cadete,
    #[serde(rename = "Junior")]
    Junior,
    #[serde(rename = "Sub-21")]
    Sub21,
    #[serde(rename = "Adulto")]
    Adulto,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::UpToFive,
        Category::InfantilA,
        Category::InfantilB,
        Category::InfantilC,
        Category::Cadete,
        Category::Junior,
        Category::Sub21,
        Category::Adulto,
    ];

    /// Maps an age onto its bracket. Upper bounds are inclusive and anything past 17
    /// lands in `Adulto`.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=5 => Self::UpToFive,
            6..=7 => Self::InfantilA,
            8..=9 => Self::InfantilB,
            10..=11 => Self::InfantilC,
            12..=13 => Self::Cadete,
            14..=15 => Self::Junior,
            16..=17 => Self::Sub21,
            _ => Self::Adulto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpToFive => "Hasta 5 años (mixto)",
            Self::InfantilA => "Infantil A",
            Self::InfantilB => "Infantil B",
            Self::InfantilC => "Infantil C",
            Self::Cadete => "Cadete",
            Self::Junior => "Junior",
            Self::Sub21 => "Sub-21",
            Self::Adulto => "Adulto",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries_are_inclusive() {
        assert_eq!(Category::from_age(0), Category::UpToFive);
        assert_eq!(Category::from_age(5), Category::UpToFive);
        assert_eq!(Category::from_age(6), Category::InfantilA);
        assert_eq!(Category::from_age(7), Category::InfantilA);
        assert_eq!(Category::from_age(8), Category::InfantilB);
        assert_eq!(Category::from_age(11), Category::InfantilC);
        assert_eq!(Category::from_age(13), Category::Cadete);
        assert_eq!(Category::from_age(15), Category::Junior);
        assert_eq!(Category::from_age(17), Category::Sub21);
        assert_eq!(Category::from_age(18), Category::Adulto);
    }

    #[test]
    fn test_every_age_maps_to_a_known_label() {
        for age in 0..=120 {
            let category = Category::from_age(age);
            assert!(Category::ALL.contains(&category));
        }
        assert_eq!(Category::from_age(u32::MAX), Category::Adulto);
    }

    #[test]
    fn test_labels() {
        assert!(Category::from_age(5).label().starts_with("Hasta 5 años"));
        assert_eq!(Category::from_age(6).label(), "Infantil A");
        assert_eq!(Category::from_age(17).label(), "Sub-21");
        assert_eq!(Category::from_age(18).label(), "Adulto");
    }

    #[test]
    fn test_brackets_increase_with_age() {
        let mut previous = Category::from_age(0);
        for age in 1..=40 {
            let current = Category::from_age(age);
            assert!(current >= previous);
            previous = current;
        }
    }
}
