//! The editable ficha.
//!
//! Numeric fields hold the text as typed; conversion to the wire payload runs
//! every one of them through [`parse_numeric`].

use rpgficha_domain::{
    is_known_option, parse_numeric, Ability, AttackLine, AttributeBlock, DerivedSheet, EntryId,
    ProficiencySet, SheetInputs, Skill, ANCESTRY_OPTIONS, DAMAGE_TYPE_OPTIONS, RACE_OPTIONS,
    SUB_RACE_OPTIONS,
};
use rpgficha_shared::{AttackPayload, EquipmentPayload, FichaPayload, FichaRecord, SpellPayload};

use super::entries::FormEntry;

fn number_text(value: i32) -> String {
    value.to_string()
}

/// Raw text of the six ability scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeInputs {
    pub strength: String,
    pub dexterity: String,
    pub constitution: String,
    pub intelligence: String,
    pub wisdom: String,
    pub charisma: String,
}

impl AttributeInputs {
    pub fn get(&self, ability: Ability) -> &str {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, raw: String) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = raw;
    }

    pub fn parsed(&self) -> AttributeBlock {
        let mut block = AttributeBlock::default();
        for ability in Ability::ALL {
            block.set(ability, parse_numeric(self.get(ability)));
        }
        block
    }

    pub fn from_block(block: &AttributeBlock) -> Self {
        let mut inputs = Self::default();
        for ability in Ability::ALL {
            inputs.set(ability, number_text(block.get(ability)));
        }
        inputs
    }
}

// =============================================================================
// Attacks
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackForm {
    /// Server id of an entry that came from a saved record.
    pub id: Option<EntryId>,
    pub name: String,
    pub melee: bool,
    pub range_normal: String,
    pub range_long: String,
    pub attack_bonus: String,
    pub damage_dice: String,
    pub damage_bonus: String,
    pub damage_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackField {
    Name(String),
    Melee(bool),
    RangeNormal(String),
    RangeLong(String),
    AttackBonus(String),
    DamageDice(String),
    DamageBonus(String),
    DamageType(String),
}

impl FormEntry for AttackForm {
    type Field = AttackField;
    const COLLECTION: &'static str = "attacks";

    fn blank() -> Self {
        Self {
            melee: true,
            ..Default::default()
        }
    }

    fn apply(&mut self, field: AttackField) {
        match field {
            AttackField::Name(v) => self.name = v,
            AttackField::Melee(v) => self.melee = v,
            AttackField::RangeNormal(v) => self.range_normal = v,
            AttackField::RangeLong(v) => self.range_long = v,
            AttackField::AttackBonus(v) => self.attack_bonus = v,
            AttackField::DamageDice(v) => self.damage_dice = v,
            AttackField::DamageBonus(v) => self.damage_bonus = v,
            AttackField::DamageType(v) => self.damage_type = v,
        }
    }
}

impl AttackForm {
    pub fn to_payload(&self) -> AttackPayload {
        AttackPayload {
            id: self.id,
            name: self.name.clone(),
            melee: self.melee,
            range_normal: parse_numeric(&self.range_normal),
            range_long: parse_numeric(&self.range_long),
            attack_bonus: parse_numeric(&self.attack_bonus),
            damage_dice: self.damage_dice.clone(),
            damage_bonus: parse_numeric(&self.damage_bonus),
            damage_type: self.damage_type.clone(),
        }
    }

    pub fn from_payload(payload: &AttackPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.clone(),
            melee: payload.melee,
            range_normal: number_text(payload.range_normal),
            range_long: number_text(payload.range_long),
            attack_bonus: number_text(payload.attack_bonus),
            damage_dice: payload.damage_dice.clone(),
            damage_bonus: number_text(payload.damage_bonus),
            damage_type: payload.damage_type.clone(),
        }
    }

    pub fn line(&self) -> AttackLine<'_> {
        AttackLine {
            name: &self.name,
            melee: self.melee,
            range_normal: parse_numeric(&self.range_normal),
            range_long: parse_numeric(&self.range_long),
            attack_bonus: parse_numeric(&self.attack_bonus),
            damage_dice: &self.damage_dice,
            damage_bonus: parse_numeric(&self.damage_bonus),
            damage_type: &self.damage_type,
        }
    }
}

// =============================================================================
// Spells
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellForm {
    pub id: Option<EntryId>,
    pub name: String,
    pub level: String,
    pub school: String,
    pub damage_dice: String,
    pub damage_bonus: String,
    pub damage_type: String,
    pub prepared: bool,
    pub casting_time: String,
    pub range_text: String,
    pub components: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellField {
    Name(String),
    Level(String),
    School(String),
    DamageDice(String),
    DamageBonus(String),
    DamageType(String),
    Prepared(bool),
    CastingTime(String),
    RangeText(String),
    Components(String),
    Duration(String),
    Description(String),
}

impl FormEntry for SpellForm {
    type Field = SpellField;
    const COLLECTION: &'static str = "spells";

    fn blank() -> Self {
        Self::default()
    }

    fn apply(&mut self, field: SpellField) {
        match field {
            SpellField::Name(v) => self.name = v,
            SpellField::Level(v) => self.level = v,
            SpellField::School(v) => self.school = v,
            SpellField::DamageDice(v) => self.damage_dice = v,
            SpellField::DamageBonus(v) => self.damage_bonus = v,
            SpellField::DamageType(v) => self.damage_type = v,
            SpellField::Prepared(v) => self.prepared = v,
            SpellField::CastingTime(v) => self.casting_time = v,
            SpellField::RangeText(v) => self.range_text = v,
            SpellField::Components(v) => self.components = v,
            SpellField::Duration(v) => self.duration = v,
            SpellField::Description(v) => self.description = v,
        }
    }
}

impl SpellForm {
    pub fn to_payload(&self) -> SpellPayload {
        SpellPayload {
            id: self.id,
            name: self.name.clone(),
            level: parse_numeric(&self.level),
            school: self.school.clone(),
            damage_dice: self.damage_dice.clone(),
            damage_bonus: parse_numeric(&self.damage_bonus),
            damage_type: self.damage_type.clone(),
            prepared: self.prepared,
            casting_time: self.casting_time.clone(),
            range_text: self.range_text.clone(),
            components: self.components.clone(),
            duration: self.duration.clone(),
            description: self.description.clone(),
        }
    }

    pub fn from_payload(payload: &SpellPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.clone(),
            level: number_text(payload.level),
            school: payload.school.clone(),
            damage_dice: payload.damage_dice.clone(),
            damage_bonus: number_text(payload.damage_bonus),
            damage_type: payload.damage_type.clone(),
            prepared: payload.prepared,
            casting_time: payload.casting_time.clone(),
            range_text: payload.range_text.clone(),
            components: payload.components.clone(),
            duration: payload.duration.clone(),
            description: payload.description.clone(),
        }
    }
}

// =============================================================================
// Equipment
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentForm {
    pub id: Option<EntryId>,
    pub name: String,
    pub quantity: String,
    pub weight: String,
    pub value_gold: String,
    pub equipped: bool,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentField {
    Name(String),
    Quantity(String),
    Weight(String),
    ValueGold(String),
    Equipped(bool),
    Notes(String),
}

impl FormEntry for EquipmentForm {
    type Field = EquipmentField;
    const COLLECTION: &'static str = "equipment";

    fn blank() -> Self {
        Self::default()
    }

    fn apply(&mut self, field: EquipmentField) {
        match field {
            EquipmentField::Name(v) => self.name = v,
            EquipmentField::Quantity(v) => self.quantity = v,
            EquipmentField::Weight(v) => self.weight = v,
            EquipmentField::ValueGold(v) => self.value_gold = v,
            EquipmentField::Equipped(v) => self.equipped = v,
            EquipmentField::Notes(v) => self.notes = v,
        }
    }
}

impl EquipmentForm {
    pub fn to_payload(&self) -> EquipmentPayload {
        EquipmentPayload {
            id: self.id,
            name: self.name.clone(),
            quantity: parse_numeric(&self.quantity),
            weight: parse_numeric(&self.weight),
            value_gold: parse_numeric(&self.value_gold),
            equipped: self.equipped,
            notes: self.notes.clone(),
        }
    }

    pub fn from_payload(payload: &EquipmentPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.clone(),
            quantity: number_text(payload.quantity),
            weight: number_text(payload.weight),
            value_gold: number_text(payload.value_gold),
            equipped: payload.equipped,
            notes: payload.notes.clone(),
        }
    }
}

// =============================================================================
// Ficha
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FichaForm {
    pub character_name: String,
    pub race: String,
    pub sub_race: String,
    pub ancestry: String,
    pub alignment: String,
    pub attributes: AttributeInputs,
    pub inspiration_points: String,
    pub proficiency_bonus: String,
    pub skill_proficiencies: ProficiencySet<Skill>,
    pub save_proficiencies: ProficiencySet<Ability>,
    pub notes: String,
    pub max_hp: String,
    pub current_hp: String,
    pub temp_hp: String,
    pub hp_dice: String,
    pub attacks: Vec<AttackForm>,
    pub spells: Vec<SpellForm>,
    pub equipment: Vec<EquipmentForm>,
}

impl FichaForm {
    /// The form for a saved record, or the empty form when there is none.
    pub fn from_record(record: Option<&FichaRecord>) -> Self {
        record
            .map(|record| Self::from_payload(&record.payload))
            .unwrap_or_default()
    }

    pub fn from_payload(payload: &FichaPayload) -> Self {
        Self {
            character_name: payload.character_name.clone(),
            race: payload.race.clone(),
            sub_race: payload.sub_race.clone(),
            ancestry: payload.ancestry.clone(),
            alignment: payload.alignment.clone(),
            attributes: AttributeInputs::from_block(&payload.attributes),
            inspiration_points: number_text(payload.inspiration_points),
            proficiency_bonus: number_text(payload.proficiency_bonus),
            skill_proficiencies: payload.skill_proficiencies.clone(),
            save_proficiencies: payload.save_proficiencies.clone(),
            notes: payload.notes.clone(),
            max_hp: number_text(payload.max_hp),
            current_hp: number_text(payload.current_hp),
            temp_hp: number_text(payload.temp_hp),
            hp_dice: payload.hp_dice.clone(),
            attacks: payload.attacks.iter().map(AttackForm::from_payload).collect(),
            spells: payload.spells.iter().map(SpellForm::from_payload).collect(),
            equipment: payload
                .equipment
                .iter()
                .map(EquipmentForm::from_payload)
                .collect(),
        }
    }

    pub fn to_payload(&self) -> FichaPayload {
        FichaPayload {
            character_name: self.character_name.clone(),
            race: self.race.clone(),
            sub_race: self.sub_race.clone(),
            ancestry: self.ancestry.clone(),
            alignment: self.alignment.clone(),
            attributes: self.attributes.parsed(),
            inspiration_points: parse_numeric(&self.inspiration_points),
            proficiency_bonus: parse_numeric(&self.proficiency_bonus),
            skill_proficiencies: self.skill_proficiencies.clone(),
            save_proficiencies: self.save_proficiencies.clone(),
            notes: self.notes.clone(),
            max_hp: parse_numeric(&self.max_hp),
            current_hp: parse_numeric(&self.current_hp),
            temp_hp: parse_numeric(&self.temp_hp),
            hp_dice: self.hp_dice.clone(),
            attacks: self.attacks.iter().map(AttackForm::to_payload).collect(),
            spells: self.spells.iter().map(SpellForm::to_payload).collect(),
            equipment: self.equipment.iter().map(EquipmentForm::to_payload).collect(),
        }
    }

    /// Selection fields whose value is not one of the offered options, as
    /// `(field, value)`. Such values are still saved as typed.
    pub fn unlisted_options(&self) -> Vec<(&'static str, &str)> {
        let selections = [
            ("race", self.race.as_str(), RACE_OPTIONS),
            ("subRace", self.sub_race.as_str(), SUB_RACE_OPTIONS),
            ("ancestry", self.ancestry.as_str(), ANCESTRY_OPTIONS),
        ]
        .into_iter()
        .chain(
            self.attacks
                .iter()
                .map(|a| ("attacks.damageType", a.damage_type.as_str(), DAMAGE_TYPE_OPTIONS)),
        )
        .chain(
            self.spells
                .iter()
                .map(|s| ("spells.damageType", s.damage_type.as_str(), DAMAGE_TYPE_OPTIONS)),
        );

        selections
            .filter(|(_, value, options)| !is_known_option(options, value))
            .map(|(field, value, _)| (field, value))
            .collect()
    }

    /// Derived values as the form currently reads.
    pub fn derived_sheet(&self) -> DerivedSheet {
        let attributes = self.attributes.parsed();
        let inputs = SheetInputs {
            attributes: &attributes,
            proficiency_bonus: parse_numeric(&self.proficiency_bonus),
            skill_proficiencies: &self.skill_proficiencies,
            save_proficiencies: &self.save_proficiencies,
            max_hp: parse_numeric(&self.max_hp),
            current_hp: parse_numeric(&self.current_hp),
            temp_hp: parse_numeric(&self.temp_hp),
        };
        DerivedSheet::derive(&inputs, self.attacks.iter().map(AttackForm::line))
    }
}
