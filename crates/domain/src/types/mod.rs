//! Fixed vocabularies of the ficha.

mod ability;
mod options;
mod skill;

pub use ability::Ability;
pub use options::{
    is_known_option, ANCESTRY_OPTIONS, DAMAGE_TYPE_OPTIONS, RACE_OPTIONS, SUB_RACE_OPTIONS,
};
pub use skill::Skill;
