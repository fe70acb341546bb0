//! Builder with one setter per field, driven by a director.

use rand::Rng;
use tracing::debug;

use crate::character::Character;
use crate::dice::{Dice, DiceRoller};

pub trait NpcBuilder {
    fn set_name(&mut self, name: &str);
    fn set_health(&mut self, health: i32);
    fn set_armor(&mut self, armor: &str);
    fn set_weapon(&mut self, weapon: &str);
    fn set_magic(&mut self, magic: &str);
    fn set_strength(&mut self, strength: i32);
    fn set_intelligence(&mut self, intelligence: i32);
    fn set_wisdom(&mut self, wisdom: i32);
    fn set_dexterity(&mut self, dexterity: i32);
    fn set_constitution(&mut self, constitution: i32);
    fn set_charisma(&mut self, charisma: i32);

    /// Hands the finished NPC over; the builder starts again from a blank one.
    fn get_npc(&mut self) -> Box<Character>;
}

#[derive(Default)]
pub struct HeroBuilder {
    npc: Box<Character>,
}

impl HeroBuilder {
    pub fn new() -> Self {
        HeroBuilder::default()
    }
}

impl NpcBuilder for HeroBuilder {
    fn set_name(&mut self, name: &str) {
        self.npc.name = name.to_string();
    }

    fn set_health(&mut self, health: i32) {
        self.npc.health = health;
    }

    fn set_armor(&mut self, armor: &str) {
        self.npc.armor = armor.to_string();
    }

    fn set_weapon(&mut self, weapon: &str) {
        self.npc.weapon = weapon.to_string();
    }

    fn set_magic(&mut self, magic: &str) {
        self.npc.magic = magic.to_string();
    }

    fn set_strength(&mut self, strength: i32) {
        self.npc.abilities.strength = strength;
    }

    fn set_intelligence(&mut self, intelligence: i32) {
        self.npc.abilities.intelligence = intelligence;
    }

    fn set_wisdom(&mut self, wisdom: i32) {
        self.npc.abilities.wisdom = wisdom;
    }

    fn set_dexterity(&mut self, dexterity: i32) {
        self.npc.abilities.dexterity = dexterity;
    }

    fn set_constitution(&mut self, constitution: i32) {
        self.npc.abilities.constitution = constitution;
    }

    fn set_charisma(&mut self, charisma: i32) {
        self.npc.abilities.charisma = charisma;
    }

    fn get_npc(&mut self) -> Box<Character> {
        std::mem::take(&mut self.npc)
    }
}

/// Dice the hero recipe rolls for each ability, in sheet order.
pub const HERO_STRENGTH: Dice = Dice::fixed(9, 2);
pub const HERO_INTELLIGENCE: Dice = Dice::fixed(6, 3);
pub const HERO_WISDOM: Dice = Dice::fixed(3, 6);
pub const HERO_DEXTERITY: Dice = Dice::fixed(9, 2);
pub const HERO_CONSTITUTION: Dice = Dice::fixed(9, 2);
pub const HERO_CHARISMA: Dice = Dice::fixed(3, 6);

pub struct NpcDirector;

impl NpcDirector {
    pub fn create_hero<R: Rng>(&self, builder: &mut dyn NpcBuilder, roller: &mut DiceRoller<R>) {
        builder.set_name("Link");
        builder.set_health(3);
        builder.set_armor("Green Tunic");
        builder.set_weapon("Fighter Sword");
        builder.set_magic("Lantern");
        builder.set_strength(roller.roll(HERO_STRENGTH) as i32);
        builder.set_intelligence(roller.roll(HERO_INTELLIGENCE) as i32);
        builder.set_wisdom(roller.roll(HERO_WISDOM) as i32);
        builder.set_dexterity(roller.roll(HERO_DEXTERITY) as i32);
        builder.set_constitution(roller.roll(HERO_CONSTITUTION) as i32);
        builder.set_charisma(roller.roll(HERO_CHARISMA) as i32);
        debug!("hero recipe applied");
    }
}
