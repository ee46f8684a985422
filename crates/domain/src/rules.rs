//! Derived-stat arithmetic.
//!
//! All functions are pure and total: they take already-parsed integers and never
//! fail.

use crate::types::{Ability, Skill};
use crate::value_objects::{AttributeBlock, ProficiencySet, Signed};

/// Bonus applied when the stored proficiency bonus is zero or negative.
pub const DEFAULT_PROFICIENCY_BONUS: i32 = 2;

/// Ceiling on the proficiency bonus added to saves and skills.
pub const MAX_APPLIED_PROFICIENCY_BONUS: i32 = 2;

/// `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    // div_euclid by a positive divisor is floor division, unlike `/`
    score.saturating_sub(10).div_euclid(2)
}

/// Signed modifier text for a score: `16 -> "+3"`, `7 -> "-2"`, `10 -> "+0"`.
pub fn format_modifier(score: i32) -> String {
    Signed(ability_modifier(score)).to_string()
}

/// The proficiency bonus actually added to proficient saves and skills.
///
/// Non-positive raw values fall back to [`DEFAULT_PROFICIENCY_BONUS`]; positive
/// values are capped at [`MAX_APPLIED_PROFICIENCY_BONUS`].
pub fn applied_proficiency_bonus(raw: i32) -> i32 {
    if raw <= 0 {
        DEFAULT_PROFICIENCY_BONUS
    } else {
        raw.min(MAX_APPLIED_PROFICIENCY_BONUS)
    }
}

pub fn saving_throw_total(
    attributes: &AttributeBlock,
    ability: Ability,
    save_proficiencies: &ProficiencySet<Ability>,
    raw_proficiency_bonus: i32,
) -> i32 {
    let modifier = ability_modifier(attributes.get(ability));
    if save_proficiencies.contains(ability) {
        modifier.saturating_add(applied_proficiency_bonus(raw_proficiency_bonus))
    } else {
        modifier
    }
}

pub fn skill_total(
    attributes: &AttributeBlock,
    skill: Skill,
    skill_proficiencies: &ProficiencySet<Skill>,
    raw_proficiency_bonus: i32,
) -> i32 {
    let modifier = ability_modifier(attributes.get(skill.ability()));
    if skill_proficiencies.contains(skill) {
        modifier.saturating_add(applied_proficiency_bonus(raw_proficiency_bonus))
    } else {
        modifier
    }
}

pub const MELEE_ACTION_LABEL: &str = "Marcial • Corpo a Corpo";
pub const RANGED_FALLBACK_LABEL: &str = "Marcial • À Distância";

/// Short description of an attack's reach.
pub fn action_description(melee: bool, range_normal: i32, range_long: i32) -> String {
    if melee {
        return MELEE_ACTION_LABEL.to_string();
    }
    if range_normal != 0 || range_long != 0 {
        format!("Marcial • {}/{}", range_normal, range_long)
    } else {
        RANGED_FALLBACK_LABEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_is_floor_division() {
        for score in -20..=40 {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {}", score);
        }
    }

    #[test]
    fn modifier_text() {
        assert_eq!(format_modifier(16), "+3");
        assert_eq!(format_modifier(7), "-2");
        assert_eq!(format_modifier(10), "+0");
        assert_eq!(format_modifier(11), "+0");
        assert_eq!(format_modifier(9), "-1");
        assert_eq!(format_modifier(0), "-5");
    }

    #[test]
    fn proficiency_bonus_is_capped_and_defaulted() {
        assert_eq!(applied_proficiency_bonus(5), 2);
        assert_eq!(applied_proficiency_bonus(2), 2);
        assert_eq!(applied_proficiency_bonus(1), 1);
        assert_eq!(applied_proficiency_bonus(0), 2);
        assert_eq!(applied_proficiency_bonus(-3), 2);
    }

    #[test]
    fn athletics_with_proficiency() {
        let attributes = AttributeBlock::default().with(Ability::Strength, 16);
        let skills: ProficiencySet<Skill> = [Skill::Atletismo].into_iter().collect();
        let total = skill_total(&attributes, Skill::Atletismo, &skills, 4);
        assert_eq!(Signed(total).to_string(), "+5");
    }

    #[test]
    fn skill_without_proficiency_is_bare_modifier() {
        let attributes = AttributeBlock::default().with(Ability::Dexterity, 8);
        let skills = ProficiencySet::new();
        assert_eq!(skill_total(&attributes, Skill::Furtividade, &skills, 3), -1);
    }

    #[test]
    fn saving_throw_uses_save_set() {
        let attributes = AttributeBlock::default().with(Ability::Wisdom, 14);
        let saves: ProficiencySet<Ability> = [Ability::Wisdom].into_iter().collect();
        assert_eq!(saving_throw_total(&attributes, Ability::Wisdom, &saves, 1), 3);
        assert_eq!(saving_throw_total(&attributes, Ability::Wisdom, &saves, 0), 4);
        assert_eq!(
            saving_throw_total(&attributes, Ability::Charisma, &saves, 0),
            -5
        );
    }

    #[test]
    fn action_descriptions() {
        assert_eq!(action_description(true, 30, 120), "Marcial • Corpo a Corpo");
        assert_eq!(action_description(false, 80, 320), "Marcial • 80/320");
        assert_eq!(action_description(false, 0, 60), "Marcial • 0/60");
        assert_eq!(action_description(false, 0, 0), "Marcial • À Distância");
    }
}
