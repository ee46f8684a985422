//! Derived sheet: the display model computed from a character's raw numbers.
//!
//! Both the editable form (after numeric parsing) and a saved record feed the
//! same [`DerivedSheet::derive`], so edit and view mode can never disagree.

use crate::rules::{
    ability_modifier, action_description, applied_proficiency_bonus, saving_throw_total,
    skill_total,
};
use crate::types::{Ability, Skill};
use crate::value_objects::{AttributeBlock, ProficiencySet, Signed};

/// Placeholder shown for empty damage and damage-type cells.
pub const EMPTY_CELL: &str = "—";

/// Name shown for an attack without one.
pub const UNNAMED_ACTION: &str = "Sem nome";

/// Parsed character numbers the calculator works from.
#[derive(Debug, Clone, Copy)]
pub struct SheetInputs<'a> {
    pub attributes: &'a AttributeBlock,
    pub proficiency_bonus: i32,
    pub skill_proficiencies: &'a ProficiencySet<Skill>,
    pub save_proficiencies: &'a ProficiencySet<Ability>,
    pub max_hp: i32,
    pub current_hp: i32,
    pub temp_hp: i32,
}

/// Parsed view of one attack.
#[derive(Debug, Clone, Copy)]
pub struct AttackLine<'a> {
    pub name: &'a str,
    pub melee: bool,
    pub range_normal: i32,
    pub range_long: i32,
    pub attack_bonus: i32,
    pub damage_dice: &'a str,
    pub damage_bonus: i32,
    pub damage_type: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub ability: Ability,
    pub score: i32,
    pub modifier: Signed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingThrowRow {
    pub ability: Ability,
    pub proficient: bool,
    pub total: Signed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub skill: Skill,
    pub proficient: bool,
    pub total: Signed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub name: String,
    pub description: String,
    pub bonus: Signed,
    pub damage: String,
    pub damage_type: String,
}

impl ActionRow {
    pub fn from_attack(attack: &AttackLine<'_>) -> Self {
        let name = if attack.name.is_empty() {
            UNNAMED_ACTION.to_string()
        } else {
            attack.name.to_string()
        };

        let damage = if attack.damage_bonus != 0 {
            format!("{} {}", attack.damage_dice, Signed(attack.damage_bonus))
        } else {
            attack.damage_dice.to_string()
        };
        let damage = damage.trim();

        Self {
            name,
            description: action_description(attack.melee, attack.range_normal, attack.range_long),
            bonus: Signed(attack.attack_bonus),
            damage: if damage.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                damage.to_string()
            },
            damage_type: if attack.damage_type.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                attack.damage_type.to_string()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpSummary {
    pub max: i32,
    pub current: i32,
    pub temp: i32,
}

/// Everything the sheet displays that is computed rather than typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSheet {
    pub abilities: Vec<AbilityRow>,
    pub saving_throws: Vec<SavingThrowRow>,
    pub skills: Vec<SkillRow>,
    pub actions: Vec<ActionRow>,
    /// Bonus after the default/cap rule, as added to proficient rows.
    pub proficiency_bonus: Signed,
    pub hp: HpSummary,
}

impl DerivedSheet {
    pub fn derive<'a>(
        inputs: &SheetInputs<'_>,
        attacks: impl IntoIterator<Item = AttackLine<'a>>,
    ) -> Self {
        let abilities = Ability::ALL
            .into_iter()
            .map(|ability| {
                let score = inputs.attributes.get(ability);
                AbilityRow {
                    ability,
                    score,
                    modifier: Signed(ability_modifier(score)),
                }
            })
            .collect();

        let saving_throws = Ability::ALL
            .into_iter()
            .map(|ability| SavingThrowRow {
                ability,
                proficient: inputs.save_proficiencies.contains(ability),
                total: Signed(saving_throw_total(
                    inputs.attributes,
                    ability,
                    inputs.save_proficiencies,
                    inputs.proficiency_bonus,
                )),
            })
            .collect();

        let skills = Skill::ALL
            .into_iter()
            .map(|skill| SkillRow {
                skill,
                proficient: inputs.skill_proficiencies.contains(skill),
                total: Signed(skill_total(
                    inputs.attributes,
                    skill,
                    inputs.skill_proficiencies,
                    inputs.proficiency_bonus,
                )),
            })
            .collect();

        let actions = attacks
            .into_iter()
            .map(|attack| ActionRow::from_attack(&attack))
            .collect();

        Self {
            abilities,
            saving_throws,
            skills,
            actions,
            proficiency_bonus: Signed(applied_proficiency_bonus(inputs.proficiency_bonus)),
            hp: HpSummary {
                max: inputs.max_hp,
                current: inputs.current_hp,
                temp: inputs.temp_hp,
            },
        }
    }

    pub fn skill(&self, skill: Skill) -> Option<&SkillRow> {
        self.skills.iter().find(|row| row.skill == skill)
    }

    pub fn saving_throw(&self, ability: Ability) -> Option<&SavingThrowRow> {
        self.saving_throws.iter().find(|row| row.ability == ability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword<'a>() -> AttackLine<'a> {
        AttackLine {
            name: "Espada Longa",
            melee: true,
            range_normal: 0,
            range_long: 0,
            attack_bonus: 5,
            damage_dice: "1d8",
            damage_bonus: 3,
            damage_type: "CORTANTE",
        }
    }

    #[test]
    fn derives_all_rows() {
        let attributes = AttributeBlock {
            strength: 16,
            dexterity: 12,
            constitution: 14,
            intelligence: 8,
            wisdom: 10,
            charisma: 7,
        };
        let skills: ProficiencySet<Skill> = [Skill::Atletismo].into_iter().collect();
        let saves: ProficiencySet<Ability> = [Ability::Strength].into_iter().collect();
        let inputs = SheetInputs {
            attributes: &attributes,
            proficiency_bonus: 4,
            skill_proficiencies: &skills,
            save_proficiencies: &saves,
            max_hp: 20,
            current_hp: 18,
            temp_hp: 0,
        };

        let sheet = DerivedSheet::derive(&inputs, [sword()]);

        assert_eq!(sheet.abilities.len(), 6);
        assert_eq!(sheet.abilities[0].modifier.to_string(), "+3");
        assert_eq!(sheet.abilities[5].modifier.to_string(), "-2");
        assert_eq!(sheet.proficiency_bonus.to_string(), "+2");

        let athletics = sheet.skill(Skill::Atletismo).unwrap();
        assert!(athletics.proficient);
        assert_eq!(athletics.total.to_string(), "+5");

        let arcana = sheet.skill(Skill::Arcanismo).unwrap();
        assert!(!arcana.proficient);
        assert_eq!(arcana.total.to_string(), "-1");

        assert_eq!(
            sheet.saving_throw(Ability::Strength).unwrap().total.to_string(),
            "+5"
        );
        assert_eq!(
            sheet.saving_throw(Ability::Wisdom).unwrap().total.to_string(),
            "+0"
        );

        assert_eq!(sheet.hp.current, 18);
    }

    #[test]
    fn action_row_formats_damage() {
        let row = ActionRow::from_attack(&sword());
        assert_eq!(row.name, "Espada Longa");
        assert_eq!(row.description, "Marcial • Corpo a Corpo");
        assert_eq!(row.bonus.to_string(), "+5");
        assert_eq!(row.damage, "1d8 +3");
        assert_eq!(row.damage_type, "CORTANTE");
    }

    #[test]
    fn action_row_placeholders() {
        let blank = AttackLine {
            name: "",
            melee: false,
            range_normal: 0,
            range_long: 0,
            attack_bonus: 0,
            damage_dice: "",
            damage_bonus: 0,
            damage_type: "",
        };
        let row = ActionRow::from_attack(&blank);
        assert_eq!(row.name, "Sem nome");
        assert_eq!(row.description, "Marcial • À Distância");
        assert_eq!(row.bonus.to_string(), "+0");
        assert_eq!(row.damage, "—");
        assert_eq!(row.damage_type, "—");
    }

    #[test]
    fn bonus_without_dice_is_trimmed() {
        let row = ActionRow::from_attack(&AttackLine {
            damage_dice: "",
            damage_bonus: -1,
            ..sword()
        });
        assert_eq!(row.damage, "-1");
    }

    #[test]
    fn extreme_scores_saturate() {
        use crate::value_objects::parse_numeric;

        let low = parse_numeric("-99999999999");
        let attributes = AttributeBlock {
            strength: low,
            dexterity: i32::MAX,
            ..AttributeBlock::default()
        };
        let skills: ProficiencySet<Skill> =
            [Skill::Atletismo, Skill::Acrobacia].into_iter().collect();
        let saves: ProficiencySet<Ability> = [Ability::Strength].into_iter().collect();
        let inputs = SheetInputs {
            attributes: &attributes,
            proficiency_bonus: i32::MIN,
            skill_proficiencies: &skills,
            save_proficiencies: &saves,
            max_hp: 0,
            current_hp: 0,
            temp_hp: 0,
        };

        let sheet = DerivedSheet::derive(&inputs, []);

        assert_eq!(sheet.abilities[0].modifier.value(), i32::MIN / 2);
        assert_eq!(
            sheet.saving_throw(Ability::Strength).unwrap().total.value(),
            i32::MIN / 2 + 2
        );
        assert_eq!(
            sheet.skill(Skill::Acrobacia).unwrap().total.value(),
            (i32::MAX - 10) / 2 + 2
        );
    }
}
