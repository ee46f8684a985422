//! RPG Ficha Shared - wire types for the ficha API and the dice widget
//!
//! # Design Principles
//!
//! 1. **No business logic** - data types, (de)serialization and endpoint paths only
//! 2. **Lenient input** - responses from the API may omit or null any field;
//!    decoding fills in the empty value instead of failing
//! 3. **Strict vocabulary** - proficiency tokens outside the fixed lists are
//!    dropped on decode so they never reach the calculator

pub mod dice;
pub mod ficha;
pub mod paths;

pub use dice::DiceMessage;
pub use ficha::{AttackPayload, EquipmentPayload, FichaPayload, FichaRecord, SpellPayload};
pub use paths::{ficha_collection_path, ficha_path, FICHA_RESOURCE};
