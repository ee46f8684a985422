//! The fixed skill vocabulary and its governing abilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Ability;
use crate::DomainError;

/// One of the nine skills tracked on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Skill {
    Acrobacia,
    Arcanismo,
    Atletismo,
    Furtividade,
    Historia,
    Intimidacao,
    Percepcao,
    Persuasao,
    Sobrevivencia,
}

impl Skill {
    /// All skills in sheet order.
    pub const ALL: [Skill; 9] = [
        Skill::Acrobacia,
        Skill::Arcanismo,
        Skill::Atletismo,
        Skill::Furtividade,
        Skill::Historia,
        Skill::Intimidacao,
        Skill::Percepcao,
        Skill::Persuasao,
        Skill::Sobrevivencia,
    ];

    /// Token stored in the skill-proficiency set.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Acrobacia => "ACROBACIA",
            Self::Arcanismo => "ARCANISMO",
            Self::Atletismo => "ATLETISMO",
            Self::Furtividade => "FURTIVIDADE",
            Self::Historia => "HISTORIA",
            Self::Intimidacao => "INTIMIDACAO",
            Self::Percepcao => "PERCEPCAO",
            Self::Persuasao => "PERSUASAO",
            Self::Sobrevivencia => "SOBREVIVENCIA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Acrobacia => "Acrobacia",
            Self::Arcanismo => "Arcanismo",
            Self::Atletismo => "Atletismo",
            Self::Furtividade => "Furtividade",
            Self::Historia => "História",
            Self::Intimidacao => "Intimidação",
            Self::Percepcao => "Percepção",
            Self::Persuasao => "Persuasão",
            Self::Sobrevivencia => "Sobrevivência",
        }
    }

    /// The ability whose modifier the skill adds.
    pub fn ability(&self) -> Ability {
        match self {
            Self::Acrobacia => Ability::Dexterity,
            Self::Arcanismo => Ability::Intelligence,
            Self::Atletismo => Ability::Strength,
            Self::Furtividade => Ability::Dexterity,
            Self::Historia => Ability::Intelligence,
            Self::Intimidacao => Ability::Charisma,
            Self::Percepcao => Ability::Wisdom,
            Self::Persuasao => Ability::Charisma,
            Self::Sobrevivencia => Ability::Wisdom,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn governing_ability_table() {
        let table: Vec<(&str, Ability)> =
            Skill::ALL.iter().map(|s| (s.key(), s.ability())).collect();
        assert_eq!(
            table,
            vec![
                ("ACROBACIA", Ability::Dexterity),
                ("ARCANISMO", Ability::Intelligence),
                ("ATLETISMO", Ability::Strength),
                ("FURTIVIDADE", Ability::Dexterity),
                ("HISTORIA", Ability::Intelligence),
                ("INTIMIDACAO", Ability::Charisma),
                ("PERCEPCAO", Ability::Wisdom),
                ("PERSUASAO", Ability::Charisma),
                ("SOBREVIVENCIA", Ability::Wisdom),
            ]
        );
    }

    #[test]
    fn serde_matches_key() {
        for skill in Skill::ALL {
            let json = serde_json::to_string(&skill).unwrap();
            assert_eq!(json, format!("\"{}\"", skill.key()));
        }
    }

    #[test]
    fn from_str_rejects_lowercase() {
        assert!("atletismo".parse::<Skill>().is_err());
        assert_eq!("ATLETISMO".parse::<Skill>().unwrap(), Skill::Atletismo);
    }
}
