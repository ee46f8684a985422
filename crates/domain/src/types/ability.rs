//! The six ability scores and their fixed tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// One of the six ability scores.
///
/// Serializes as its saving-throw code (`FORCA`, `DESTREZA`, ...), which is the
/// token stored in a ficha's save-proficiency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    #[serde(rename = "FORCA")]
    Strength,
    #[serde(rename = "DESTREZA")]
    Dexterity,
    #[serde(rename = "CONSTITUICAO")]
    Constitution,
    #[serde(rename = "INTELIGENCIA")]
    Intelligence,
    #[serde(rename = "SABEDORIA")]
    Wisdom,
    #[serde(rename = "CARISMA")]
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Attribute key used inside the `attributes` object of the payload.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Three-letter label shown next to the score.
    pub fn short(&self) -> &'static str {
        match self {
            Self::Strength => "FOR",
            Self::Dexterity => "DES",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "SAB",
            Self::Charisma => "CAR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Força",
            Self::Dexterity => "Destreza",
            Self::Constitution => "Constituição",
            Self::Intelligence => "Inteligência",
            Self::Wisdom => "Sabedoria",
            Self::Charisma => "Carisma",
        }
    }

    /// Token stored in the save-proficiency set.
    pub fn save_code(&self) -> &'static str {
        match self {
            Self::Strength => "FORCA",
            Self::Dexterity => "DESTREZA",
            Self::Constitution => "CONSTITUICAO",
            Self::Intelligence => "INTELIGENCIA",
            Self::Wisdom => "SABEDORIA",
            Self::Charisma => "CARISMA",
        }
    }

    pub fn from_save_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.save_code() == code)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.save_code())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_save_code(s)
            .ok_or_else(|| DomainError::parse(format!("Unknown save code: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_codes_round_trip_through_from_str() {
        for ability in Ability::ALL {
            assert_eq!(ability.save_code().parse::<Ability>().unwrap(), ability);
        }
    }

    #[test]
    fn serde_uses_save_code() {
        let json = serde_json::to_string(&Ability::Constitution).unwrap();
        assert_eq!(json, "\"CONSTITUICAO\"");
        let back: Ability = serde_json::from_str("\"SABEDORIA\"").unwrap();
        assert_eq!(back, Ability::Wisdom);
    }

    #[test]
    fn unknown_code_is_parse_error() {
        assert!(matches!(
            "STRENGTH".parse::<Ability>(),
            Err(DomainError::Parse(_))
        ));
    }
}
