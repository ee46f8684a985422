//! Plain-text character sheet.

use std::fmt;

use rpgficha_domain::{DerivedSheet, DiceFormula, EMPTY_CELL};
use rpgficha_shared::FichaRecord;

/// Displays a saved ficha with its derived values.
pub struct SheetText<'a> {
    record: &'a FichaRecord,
    sheet: DerivedSheet,
}

impl<'a> SheetText<'a> {
    pub fn new(record: &'a FichaRecord) -> Self {
        Self {
            sheet: record.derived_sheet(),
            record,
        }
    }
}

fn or_empty(text: &str) -> &str {
    if text.trim().is_empty() {
        EMPTY_CELL
    } else {
        text
    }
}

impl fmt::Display for SheetText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = &self.record.payload;
        let sheet = &self.sheet;

        writeln!(f, "{}", or_empty(&payload.character_name))?;
        if let Some(id) = self.record.id {
            writeln!(f, "id: {}", id)?;
        }
        writeln!(
            f,
            "{} / {} / {} / {}",
            or_empty(&payload.race),
            or_empty(&payload.sub_race),
            or_empty(&payload.ancestry),
            or_empty(&payload.alignment)
        )?;
        writeln!(
            f,
            "PV {}/{} (temp {})  Dados de vida: {}",
            sheet.hp.current,
            sheet.hp.max,
            sheet.hp.temp,
            or_empty(&payload.hp_dice)
        )?;
        writeln!(
            f,
            "Proficiência {}  Inspiração {}",
            sheet.proficiency_bonus, payload.inspiration_points
        )?;

        writeln!(f)?;
        for row in &sheet.abilities {
            writeln!(f, "{:<4}{:>3} ({})", row.ability.short(), row.score, row.modifier)?;
        }

        writeln!(f, "\nTestes de resistência")?;
        for row in &sheet.saving_throws {
            let mark = if row.proficient { '*' } else { ' ' };
            writeln!(f, " {} {:<14}{}", mark, row.ability.label(), row.total)?;
        }

        writeln!(f, "\nPerícias")?;
        for row in &sheet.skills {
            let mark = if row.proficient { '*' } else { ' ' };
            writeln!(
                f,
                " {} {:<14}{} ({})",
                mark,
                row.skill.label(),
                row.total,
                row.skill.ability().short()
            )?;
        }

        if !sheet.actions.is_empty() {
            writeln!(f, "\nAções")?;
            for (action, attack) in sheet.actions.iter().zip(&payload.attacks) {
                write!(
                    f,
                    " {} | {} | {} | {} {}",
                    action.name, action.description, action.bonus, action.damage, action.damage_type
                )?;
                // damage range, only for dice text that parses
                if let Ok(formula) = DiceFormula::parse(&attack.damage_dice) {
                    let bonus = attack.damage_bonus;
                    write!(
                        f,
                        " [{}-{}]",
                        formula.min_roll().saturating_add(bonus),
                        formula.max_roll().saturating_add(bonus)
                    )?;
                }
                writeln!(f)?;
            }
        }

        if !payload.spells.is_empty() {
            writeln!(f, "\nMagias")?;
            for spell in &payload.spells {
                let prepared = if spell.prepared { " (preparada)" } else { "" };
                writeln!(f, " [{}] {}{}", spell.level, or_empty(&spell.name), prepared)?;
            }
        }

        if !payload.equipment.is_empty() {
            writeln!(f, "\nEquipamento")?;
            for item in &payload.equipment {
                let equipped = if item.equipped { " (equipado)" } else { "" };
                writeln!(f, " {}x {}{}", item.quantity, or_empty(&item.name), equipped)?;
            }
        }

        if !payload.notes.trim().is_empty() {
            writeln!(f, "\nNotas\n{}", payload.notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpgficha_domain::Skill;
    use rpgficha_shared::{AttackPayload, FichaPayload};

    #[test]
    fn renders_derived_values() {
        let mut payload = FichaPayload {
            character_name: "Thorin".into(),
            proficiency_bonus: 4,
            max_hp: 20,
            current_hp: 18,
            attacks: vec![AttackPayload {
                name: "Machado".into(),
                melee: true,
                attack_bonus: 5,
                damage_dice: "1d12".into(),
                damage_bonus: 3,
                damage_type: "CORTANTE".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        payload.attributes.strength = 16;
        payload.skill_proficiencies.insert(Skill::Atletismo);
        let record = FichaRecord::from_payload(payload);

        let text = SheetText::new(&record).to_string();
        assert!(text.starts_with("Thorin\n"));
        assert!(text.contains("PV 18/20"));
        assert!(text.contains("FOR  16 (+3)"));
        assert!(text.contains(" * Atletismo     +5 (FOR)"));
        assert!(text.contains("Machado | Marcial • Corpo a Corpo | +5 | 1d12 +3 CORTANTE [4-15]\n"));
        assert!(!text.contains("Magias"));
    }

    #[test]
    fn huge_damage_bonus_saturates_the_range() {
        let payload = FichaPayload {
            attacks: vec![AttackPayload {
                name: "Maça".into(),
                damage_dice: "1d8".into(),
                damage_bonus: i32::MAX,
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = SheetText::new(&FichaRecord::from_payload(payload)).to_string();
        assert!(text.contains(&format!("[{}-{}]", i32::MAX, i32::MAX)));
    }

    #[test]
    fn blank_identity_uses_placeholders() {
        let text = SheetText::new(&FichaRecord::default()).to_string();
        assert!(text.starts_with("—\n— / — / — / —\n"));
    }
}
