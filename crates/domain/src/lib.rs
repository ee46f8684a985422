//! RPG Ficha domain layer.
//!
//! Pure rules and vocabulary for the character sheet: ability and skill tables,
//! the parse-with-zero-fallback numeric contract, proficiency sets, dice formulas
//! and the derived-stat calculator. Nothing in here performs I/O.

pub mod character_sheet;
pub mod error;
pub mod ids;
pub mod rules;
pub mod types;
pub mod value_objects;

pub use error::DomainError;

pub use character_sheet::{
    AbilityRow, ActionRow, AttackLine, DerivedSheet, HpSummary, SavingThrowRow, SheetInputs,
    SkillRow, EMPTY_CELL, UNNAMED_ACTION,
};

pub use ids::{EntryId, FichaId};

pub use rules::{
    ability_modifier, action_description, applied_proficiency_bonus, format_modifier,
    saving_throw_total, skill_total, DEFAULT_PROFICIENCY_BONUS, MAX_APPLIED_PROFICIENCY_BONUS,
};

pub use types::{
    is_known_option, Ability, Skill, ANCESTRY_OPTIONS, DAMAGE_TYPE_OPTIONS, RACE_OPTIONS,
    SUB_RACE_OPTIONS,
};

pub use value_objects::{
    format_signed, parse_numeric, AttributeBlock, DiceFormula, DiceParseError, DiceSides,
    ProficiencySet, Signed,
};
