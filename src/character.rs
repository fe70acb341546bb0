//! The product both builder variants assemble.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbilityScores {
    pub strength: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub charisma: i32,
}

impl AbilityScores {
    /// Scores in sheet order, paired with their short labels.
    pub fn labeled(&self) -> [(&'static str, i32); 6] {
        [
            ("STR", self.strength),
            ("INT", self.intelligence),
            ("WIS", self.wisdom),
            ("DEX", self.dexterity),
            ("CON", self.constitution),
            ("CHA", self.charisma),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub health: i32,
    pub armor: String,
    pub weapon: String,
    pub magic: String,
    pub abilities: AbilityScores,
}

impl Character {
    /// The character sheet as printed by the examples.
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NPC {}:", self.name)?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Armor: {}", self.armor)?;
        writeln!(f, "Weapon: {}", self.weapon)?;
        writeln!(f, "Magic: {}", self.magic)?;
        for (label, score) in self.abilities.labeled() {
            writeln!(f, "{label}: {score}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_lists_every_field() {
        let character = Character {
            name: "Link".to_string(),
            health: 3,
            armor: "Green Tunic".to_string(),
            weapon: "Fighter Sword".to_string(),
            magic: "Lantern".to_string(),
            abilities: AbilityScores {
                strength: 15,
                intelligence: 11,
                wisdom: 10,
                dexterity: 14,
                constitution: 13,
                charisma: 9,
            },
        };

        let sheet = character.info();
        let lines: Vec<&str> = sheet.lines().collect();
        assert_eq!(lines[0], "NPC Link:");
        assert_eq!(lines[1], "Health: 3");
        assert_eq!(lines[2], "Armor: Green Tunic");
        assert_eq!(lines[5], "STR: 15");
        assert_eq!(lines[10], "CHA: 9");
        assert_eq!(lines.len(), 11);
    }
}
