//! Form reducer.
//!
//! [`reduce`] is the only way the form state changes. It is a pure function:
//! no I/O, no clocks, and the editing indices are normalized after every action.

use rpgficha_domain::{parse_numeric, Ability, Skill};

use super::entries::{remove_entry, update_entry, EntryEditor, FormEntry};
use super::form::{AttackForm, EquipmentForm, FichaForm, SpellForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabKey {
    #[default]
    Actions,
    Spells,
    Equipment,
    Features,
}

impl TabKey {
    pub const ALL: [TabKey; 4] = [
        TabKey::Actions,
        TabKey::Spells,
        TabKey::Equipment,
        TabKey::Features,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Spells => "spells",
            Self::Equipment => "equipment",
            Self::Features => "features",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Actions => "Ações",
            Self::Spells => "Magias",
            Self::Equipment => "Equipamento",
            Self::Features => "Características",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    CharacterName,
    Race,
    SubRace,
    Ancestry,
    Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpField {
    Max,
    Current,
    Temp,
}

/// Actions on one entry collection.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryAction<T: FormEntry> {
    BeginAdd,
    UpdatePending(T::Field),
    CancelPending,
    Confirm,
    Select(usize),
    Expand,
    Update(usize, T::Field),
    Remove(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetIdentity(IdentityField, String),
    SetAttribute(Ability, String),
    SetInspiration(String),
    SetProficiencyBonus(String),
    SetNotes(String),
    SetHp(HpField, String),
    SetHpDice(String),
    AdjustHp(i32),
    ToggleSkill(Skill),
    ToggleSave(Ability),
    Attack(EntryAction<AttackForm>),
    Spell(EntryAction<SpellForm>),
    Equipment(EntryAction<EquipmentForm>),
    SelectTab(TabKey),
    MarkSaved(Option<TabKey>),
    /// Replace the whole form, e.g. when re-entering edit mode.
    Load(FichaForm),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub form: FichaForm,
    pub active_tab: TabKey,
    pub last_saved_section: Option<TabKey>,
    pub attacks: EntryEditor<AttackForm>,
    pub spells: EntryEditor<SpellForm>,
    pub equipment: EntryEditor<EquipmentForm>,
}

impl FormState {
    pub fn new(form: FichaForm) -> Self {
        let mut state = Self {
            form,
            ..Default::default()
        };
        state.normalize();
        state
    }

    #[must_use]
    pub fn apply(self, action: FormAction) -> Self {
        reduce(self, action)
    }

    fn normalize(&mut self) {
        self.attacks.normalize(self.form.attacks.len());
        self.spells.normalize(self.form.spells.len());
        self.equipment.normalize(self.form.equipment.len());
    }
}

pub fn reduce(mut state: FormState, action: FormAction) -> FormState {
    let form = &mut state.form;
    match action {
        FormAction::SetIdentity(field, value) => {
            let slot = match field {
                IdentityField::CharacterName => &mut form.character_name,
                IdentityField::Race => &mut form.race,
                IdentityField::SubRace => &mut form.sub_race,
                IdentityField::Ancestry => &mut form.ancestry,
                IdentityField::Alignment => &mut form.alignment,
            };
            *slot = value;
        }
        FormAction::SetAttribute(ability, raw) => form.attributes.set(ability, raw),
        FormAction::SetInspiration(raw) => form.inspiration_points = raw,
        FormAction::SetProficiencyBonus(raw) => form.proficiency_bonus = raw,
        FormAction::SetNotes(notes) => form.notes = notes,
        FormAction::SetHp(field, raw) => {
            let slot = match field {
                HpField::Max => &mut form.max_hp,
                HpField::Current => &mut form.current_hp,
                HpField::Temp => &mut form.temp_hp,
            };
            *slot = raw;
        }
        FormAction::SetHpDice(dice) => form.hp_dice = dice,
        FormAction::AdjustHp(delta) => {
            let next = adjusted_hp(
                parse_numeric(&form.current_hp),
                parse_numeric(&form.max_hp),
                delta,
            );
            form.current_hp = next.to_string();
        }
        FormAction::ToggleSkill(skill) => form.skill_proficiencies.toggle(skill),
        FormAction::ToggleSave(ability) => form.save_proficiencies.toggle(ability),
        FormAction::Attack(action) => {
            if reduce_entries(&mut state.attacks, &mut form.attacks, action) {
                state.last_saved_section = Some(TabKey::Actions);
            }
        }
        FormAction::Spell(action) => {
            if reduce_entries(&mut state.spells, &mut form.spells, action) {
                state.last_saved_section = Some(TabKey::Spells);
            }
        }
        FormAction::Equipment(action) => {
            if reduce_entries(&mut state.equipment, &mut form.equipment, action) {
                state.last_saved_section = Some(TabKey::Equipment);
            }
        }
        FormAction::SelectTab(tab) => state.active_tab = tab,
        FormAction::MarkSaved(section) => state.last_saved_section = section,
        FormAction::Load(next) => *form = next,
    }
    state.normalize();
    state
}

/// `max(0, min(cap, hp + delta))`, where a max of 0 leaves the value uncapped.
fn adjusted_hp(current: i32, max: i32, delta: i32) -> i32 {
    let raw = current.saturating_add(delta);
    let cap = if max != 0 { max } else { raw };
    raw.min(cap).max(0)
}

/// Returns whether the collection was confirmed.
fn reduce_entries<T: FormEntry>(
    editor: &mut EntryEditor<T>,
    entries: &mut Vec<T>,
    action: EntryAction<T>,
) -> bool {
    match action {
        EntryAction::BeginAdd => editor.begin_add(),
        EntryAction::UpdatePending(field) => editor.update_pending(field),
        EntryAction::CancelPending => editor.cancel_pending(),
        EntryAction::Confirm => {
            editor.confirm(entries);
            return true;
        }
        EntryAction::Select(index) => editor.select(index),
        EntryAction::Expand => editor.expand(),
        EntryAction::Update(index, field) => {
            if let Err(e) = update_entry(entries, index, field) {
                tracing::debug!(error = %e, "Ignoring update of missing entry");
            }
        }
        EntryAction::Remove(index) => {
            if let Err(e) = remove_entry(entries, index) {
                tracing::debug!(error = %e, "Ignoring removal of missing entry");
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::{AttackField, EquipmentField, SpellField};

    fn with_hp(current: &str, max: &str) -> FormState {
        FormState::default()
            .apply(FormAction::SetHp(HpField::Current, current.into()))
            .apply(FormAction::SetHp(HpField::Max, max.into()))
    }

    #[test]
    fn toggling_a_skill_twice_restores_the_set() {
        let start = FormState::default().apply(FormAction::ToggleSkill(Skill::Percepcao));
        let original = start.form.skill_proficiencies.clone();

        let once = start.clone().apply(FormAction::ToggleSkill(Skill::Atletismo));
        assert!(once.form.skill_proficiencies.contains(Skill::Atletismo));
        assert_eq!(once.form.skill_proficiencies.len(), 2);

        let twice = once.apply(FormAction::ToggleSkill(Skill::Atletismo));
        assert_eq!(twice.form.skill_proficiencies, original);
    }

    #[test]
    fn toggling_saves() {
        let state = FormState::default()
            .apply(FormAction::ToggleSave(Ability::Wisdom))
            .apply(FormAction::ToggleSave(Ability::Charisma))
            .apply(FormAction::ToggleSave(Ability::Wisdom));
        let saves: Vec<Ability> = state.form.save_proficiencies.iter().collect();
        assert_eq!(saves, vec![Ability::Charisma]);
    }

    #[test]
    fn setters_keep_raw_text() {
        let state = FormState::default()
            .apply(FormAction::SetIdentity(IdentityField::CharacterName, "Thorin".into()))
            .apply(FormAction::SetIdentity(IdentityField::SubRace, "Anão da Montanha".into()))
            .apply(FormAction::SetAttribute(Ability::Strength, "1".into()))
            .apply(FormAction::SetAttribute(Ability::Strength, "16".into()))
            .apply(FormAction::SetProficiencyBonus("-".into()))
            .apply(FormAction::SetInspiration("".into()))
            .apply(FormAction::SetHpDice("3d10".into()));

        assert_eq!(state.form.character_name, "Thorin");
        assert_eq!(state.form.sub_race, "Anão da Montanha");
        assert_eq!(state.form.attributes.strength, "16");
        assert_eq!(state.form.proficiency_bonus, "-");
        assert_eq!(state.form.hp_dice, "3d10");
        assert_eq!(state.form.to_payload().proficiency_bonus, 0);
    }

    #[test]
    fn adjust_hp_clamps_to_max_and_zero() {
        let state = with_hp("10", "12").apply(FormAction::AdjustHp(5));
        assert_eq!(state.form.current_hp, "12");

        let state = state.apply(FormAction::AdjustHp(-20));
        assert_eq!(state.form.current_hp, "0");

        let state = with_hp("10", "").apply(FormAction::AdjustHp(25));
        assert_eq!(state.form.current_hp, "35");

        let state = with_hp("abc", "8").apply(FormAction::AdjustHp(1));
        assert_eq!(state.form.current_hp, "1");
    }

    #[test]
    fn confirming_an_attack_appends_and_collapses() {
        let state = FormState::default()
            .apply(FormAction::Attack(EntryAction::BeginAdd))
            .apply(FormAction::Attack(EntryAction::UpdatePending(AttackField::Name(
                "Sword".into(),
            ))))
            .apply(FormAction::Attack(EntryAction::UpdatePending(
                AttackField::AttackBonus("5".into()),
            )));

        assert!(state.form.attacks.is_empty());
        assert!(state.attacks.pending.as_ref().unwrap().melee);
        assert_eq!(state.attacks.editing_index, None);

        let state = state.apply(FormAction::Attack(EntryAction::Confirm));
        assert_eq!(state.form.attacks.len(), 1);
        assert_eq!(state.form.attacks[0].name, "Sword");
        assert!(state.attacks.pending.is_none());
        assert!(state.attacks.collapsed);
        assert_eq!(state.last_saved_section, Some(TabKey::Actions));
        // normalization opens the first entry once nothing is pending
        assert_eq!(state.attacks.editing_index, Some(0));
    }

    #[test]
    fn cancelling_a_pending_spell_leaves_the_collection() {
        let state = FormState::default()
            .apply(FormAction::Spell(EntryAction::BeginAdd))
            .apply(FormAction::Spell(EntryAction::UpdatePending(SpellField::Name(
                "Luz".into(),
            ))))
            .apply(FormAction::Spell(EntryAction::CancelPending))
            .apply(FormAction::Spell(EntryAction::Confirm));

        assert!(state.form.spells.is_empty());
        assert_eq!(state.spells.editing_index, None);
        assert_eq!(state.last_saved_section, Some(TabKey::Spells));
    }

    #[test]
    fn positional_equipment_edits() {
        let mut state = FormState::default();
        for name in ["Corda", "Tocha", "Mochila"] {
            state = state
                .apply(FormAction::Equipment(EntryAction::BeginAdd))
                .apply(FormAction::Equipment(EntryAction::UpdatePending(
                    EquipmentField::Name(name.into()),
                )))
                .apply(FormAction::Equipment(EntryAction::Confirm));
        }
        assert_eq!(state.form.equipment.len(), 3);

        let state = state
            .apply(FormAction::Equipment(EntryAction::Update(
                1,
                EquipmentField::Quantity("5".into()),
            )))
            .apply(FormAction::Equipment(EntryAction::Select(2)))
            .apply(FormAction::Equipment(EntryAction::Remove(0)));

        let names: Vec<&str> = state.form.equipment.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Tocha", "Mochila"]);
        assert_eq!(state.form.equipment[0].quantity, "5");
        assert!(!state.equipment.collapsed);
        // index 2 no longer exists
        assert_eq!(state.equipment.editing_index, Some(1));
    }

    #[test]
    fn out_of_range_edits_are_no_ops() {
        let state = FormState::default()
            .apply(FormAction::Attack(EntryAction::Update(
                3,
                AttackField::Name("x".into()),
            )))
            .apply(FormAction::Attack(EntryAction::Remove(0)));
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn removing_the_last_entry_clears_the_index() {
        let state = FormState::new(FichaForm {
            attacks: vec![AttackForm::default()],
            ..Default::default()
        });
        assert_eq!(state.attacks.editing_index, Some(0));

        let state = state.apply(FormAction::Attack(EntryAction::Remove(0)));
        assert_eq!(state.attacks.editing_index, None);
    }

    #[test]
    fn load_replaces_form_and_tabs_are_tracked() {
        let state = FormState::default()
            .apply(FormAction::SelectTab(TabKey::Features))
            .apply(FormAction::Load(FichaForm {
                character_name: "Lia".into(),
                ..Default::default()
            }))
            .apply(FormAction::MarkSaved(None));

        assert_eq!(state.active_tab, TabKey::Features);
        assert_eq!(state.form.character_name, "Lia");
        assert_eq!(state.last_saved_section, None);
        assert_eq!(TabKey::Spells.key(), "spells");
    }
}
