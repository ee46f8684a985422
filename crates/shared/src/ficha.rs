//! Ficha wire types.
//!
//! `FichaPayload` is what the client sends on create and update; `FichaRecord`
//! is what the API returns: the same shape plus server-assigned identifiers.
//! Attack, spell and equipment entries carry an optional id of their own.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use rpgficha_domain::{
    parse_numeric, Ability, AttackLine, AttributeBlock, DerivedSheet, EntryId, FichaId,
    ProficiencySet, SheetInputs, Skill,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttackPayload {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub melee: bool,
    #[serde(deserialize_with = "lenient_int")]
    pub range_normal: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub range_long: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub attack_bonus: i32,
    #[serde(deserialize_with = "nullable")]
    pub damage_dice: String,
    #[serde(deserialize_with = "lenient_int")]
    pub damage_bonus: i32,
    #[serde(deserialize_with = "nullable")]
    pub damage_type: String,
}

impl AttackPayload {
    pub fn line(&self) -> AttackLine<'_> {
        AttackLine {
            name: &self.name,
            melee: self.melee,
            range_normal: self.range_normal,
            range_long: self.range_long,
            attack_bonus: self.attack_bonus,
            damage_dice: &self.damage_dice,
            damage_bonus: self.damage_bonus,
            damage_type: &self.damage_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellPayload {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "lenient_int")]
    pub level: i32,
    #[serde(deserialize_with = "nullable")]
    pub school: String,
    #[serde(deserialize_with = "nullable")]
    pub damage_dice: String,
    #[serde(deserialize_with = "lenient_int")]
    pub damage_bonus: i32,
    #[serde(deserialize_with = "nullable")]
    pub damage_type: String,
    #[serde(deserialize_with = "nullable")]
    pub prepared: bool,
    #[serde(deserialize_with = "nullable")]
    pub casting_time: String,
    #[serde(deserialize_with = "nullable")]
    pub range_text: String,
    #[serde(deserialize_with = "nullable")]
    pub components: String,
    #[serde(deserialize_with = "nullable")]
    pub duration: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentPayload {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "lenient_int")]
    pub quantity: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub weight: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub value_gold: i32,
    #[serde(deserialize_with = "nullable")]
    pub equipped: bool,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
}

/// Full character record as sent to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FichaPayload {
    #[serde(deserialize_with = "nullable")]
    pub character_name: String,
    #[serde(deserialize_with = "nullable")]
    pub race: String,
    #[serde(deserialize_with = "nullable")]
    pub sub_race: String,
    #[serde(deserialize_with = "nullable")]
    pub ancestry: String,
    #[serde(deserialize_with = "nullable")]
    pub alignment: String,
    #[serde(deserialize_with = "lenient_attributes")]
    pub attributes: AttributeBlock,
    #[serde(deserialize_with = "lenient_int")]
    pub inspiration_points: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub proficiency_bonus: i32,
    #[serde(deserialize_with = "known_tokens")]
    pub skill_proficiencies: ProficiencySet<Skill>,
    #[serde(deserialize_with = "known_tokens")]
    pub save_proficiencies: ProficiencySet<Ability>,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
    #[serde(deserialize_with = "lenient_int")]
    pub max_hp: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub current_hp: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub temp_hp: i32,
    #[serde(deserialize_with = "nullable")]
    pub hp_dice: String,
    #[serde(deserialize_with = "nullable")]
    pub attacks: Vec<AttackPayload>,
    #[serde(deserialize_with = "nullable")]
    pub spells: Vec<SpellPayload>,
    #[serde(deserialize_with = "nullable")]
    pub equipment: Vec<EquipmentPayload>,
}

impl FichaPayload {
    pub fn sheet_inputs(&self) -> SheetInputs<'_> {
        SheetInputs {
            attributes: &self.attributes,
            proficiency_bonus: self.proficiency_bonus,
            skill_proficiencies: &self.skill_proficiencies,
            save_proficiencies: &self.save_proficiencies,
            max_hp: self.max_hp,
            current_hp: self.current_hp,
            temp_hp: self.temp_hp,
        }
    }

    pub fn derived_sheet(&self) -> DerivedSheet {
        DerivedSheet::derive(
            &self.sheet_inputs(),
            self.attacks.iter().map(AttackPayload::line),
        )
    }
}

/// A ficha as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FichaRecord {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<FichaId>,
    #[serde(flatten)]
    pub payload: FichaPayload,
}

impl FichaRecord {
    /// A record the server has not (yet) identified.
    pub fn from_payload(payload: FichaPayload) -> Self {
        Self { id: None, payload }
    }

    pub fn derived_sheet(&self) -> DerivedSheet {
        self.payload.derived_sheet()
    }
}

// =============================================================================
// Lenient decoding helpers
// =============================================================================

/// `null` decodes as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON value decodes to an integer, following the form's numeric rule:
/// numbers are truncated, numeric strings are parsed, everything else is `0`.
fn lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(int_from_value(&Value::deserialize(deserializer)?))
}

fn int_from_value(value: &Value) -> i32 {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            None => n.as_f64().map(|f| f.trunc() as i32).unwrap_or(0),
        },
        Value::String(s) => parse_numeric(s),
        _ => 0,
    }
}

fn lenient_attributes<'de, D>(deserializer: D) -> Result<AttributeBlock, D::Error>
where
    D: Deserializer<'de>,
{
    let mut block = AttributeBlock::default();
    if let Value::Object(map) = Value::deserialize(deserializer)? {
        for ability in Ability::ALL {
            if let Some(value) = map.get(ability.key()) {
                block.set(ability, int_from_value(value));
            }
        }
    }
    Ok(block)
}

/// Identifiers that fail to parse are dropped rather than failing the record.
fn lenient_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let text = match raw {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Ok(None),
    };
    match text.parse::<T>() {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            tracing::warn!(id = %text, error = %e, "Ignoring unparseable identifier");
            Ok(None)
        }
    }
}

/// Keep only tokens from the fixed vocabulary, dropping (and logging) the rest.
fn known_tokens<'de, D, T>(deserializer: D) -> Result<ProficiencySet<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + PartialEq + Copy,
    T::Err: Display,
{
    let tokens = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(tokens
        .into_iter()
        .filter_map(|value| {
            let token = match value {
                Value::String(token) => token,
                other => {
                    tracing::warn!(token = %other, "Dropping non-string proficiency token");
                    return None;
                }
            };
            match token.parse::<T>() {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!(%token, error = %e, "Dropping unknown proficiency token");
                    None
                }
            }
        })
        .collect())
}
