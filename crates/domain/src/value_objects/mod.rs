//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod dice;
mod numeric;
mod proficiency;

pub use attributes::AttributeBlock;
pub use dice::{DiceFormula, DiceParseError, DiceSides};
pub use numeric::{format_signed, parse_numeric, Signed};
pub use proficiency::ProficiencySet;
