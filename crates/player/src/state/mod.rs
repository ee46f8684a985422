//! Form state: editable character data plus the transient editing state,
//! advanced only through [`reduce`].

pub mod entries;
pub mod form;
pub mod reducer;

pub use entries::{EntryEditor, FormEntry};
pub use form::{
    AttackField, AttackForm, AttributeInputs, EquipmentField, EquipmentForm, FichaForm,
    SpellField, SpellForm,
};
pub use reducer::{reduce, EntryAction, FormAction, FormState, HpField, IdentityField, TabKey};
