//! Builder whose ability scores are rolled in one step, plus a director that
//! knows the hero, monster and NPC recipes.

use std::rc::Rc;

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::character::{AbilityScores, Character};
use crate::config::RecipeBook;
use crate::dice::{AbilityRoll, DiceRoller};
use crate::error::CreationError;

// =============================================================================
// Recipes
// =============================================================================

/// How each ability score is rolled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbilityProfile {
    pub strength: AbilityRoll,
    pub intelligence: AbilityRoll,
    pub wisdom: AbilityRoll,
    pub dexterity: AbilityRoll,
    pub constitution: AbilityRoll,
    pub charisma: AbilityRoll,
}

impl AbilityProfile {
    pub fn roll<R: Rng>(&self, roller: &mut DiceRoller<R>) -> AbilityScores {
        AbilityScores {
            strength: roller.roll_ability(&self.strength),
            intelligence: roller.roll_ability(&self.intelligence),
            wisdom: roller.roll_ability(&self.wisdom),
            dexterity: roller.roll_ability(&self.dexterity),
            constitution: roller.roll_ability(&self.constitution),
            charisma: roller.roll_ability(&self.charisma),
        }
    }

    /// True when every score could have come from this profile.
    pub fn admits(&self, scores: &AbilityScores) -> bool {
        self.strength.range().contains(&scores.strength)
            && self.intelligence.range().contains(&scores.intelligence)
            && self.wisdom.range().contains(&scores.wisdom)
            && self.dexterity.range().contains(&scores.dexterity)
            && self.constitution.range().contains(&scores.constitution)
            && self.charisma.range().contains(&scores.charisma)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub name: String,
    pub health: i32,
    pub armor: String,
    pub weapon: String,
    pub magic: String,
    pub abilities: AbilityProfile,
}

// =============================================================================
// Builder
// =============================================================================

pub trait CharacterBuilder {
    /// Start over with a blank character.
    fn reset(&mut self);
    fn set_name(&mut self, name: &str);
    fn set_health(&mut self, health: i32);
    fn set_equipment(&mut self, armor: &str, weapon: &str, magic: &str);
    fn set_abilities(&mut self, abilities: AbilityScores);

    /// Roll every ability score from `profile` and store the results.
    fn build_character_attributes<R: Rng>(&mut self, profile: &AbilityProfile, roller: &mut DiceRoller<R>)
    where
        Self: Sized,
    {
        self.set_abilities(profile.roll(roller));
    }

    fn character(&self) -> Rc<Character>;
}

/// Keeps the character behind an `Rc`; edits after a hand-out copy first,
/// so characters already returned never change.
#[derive(Default)]
pub struct StandardCharacterBuilder {
    character: Rc<Character>,
}

impl StandardCharacterBuilder {
    pub fn new() -> Self {
        StandardCharacterBuilder::default()
    }

    fn edit(&mut self) -> &mut Character {
        Rc::make_mut(&mut self.character)
    }
}

impl CharacterBuilder for StandardCharacterBuilder {
    fn reset(&mut self) {
        self.character = Rc::new(Character::default());
    }

    fn set_name(&mut self, name: &str) {
        self.edit().name = name.to_string();
    }

    fn set_health(&mut self, health: i32) {
        self.edit().health = health;
    }

    fn set_equipment(&mut self, armor: &str, weapon: &str, magic: &str) {
        let character = self.edit();
        character.armor = armor.to_string();
        character.weapon = weapon.to_string();
        character.magic = magic.to_string();
    }

    fn set_abilities(&mut self, abilities: AbilityScores) {
        self.edit().abilities = abilities;
    }

    fn character(&self) -> Rc<Character> {
        Rc::clone(&self.character)
    }
}

// =============================================================================
// Director
// =============================================================================

pub const HERO: &str = "hero";
pub const MONSTER: &str = "monster";
pub const NPC: &str = "npc";

/// Runs recipes against a builder. Holds recipe data only, never a product.
pub struct Director {
    recipes: RecipeBook,
}

impl Default for Director {
    fn default() -> Self {
        Director::new(RecipeBook::builtin())
    }
}

impl Director {
    pub fn new(recipes: RecipeBook) -> Self {
        Director { recipes }
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn create_hero<B, R>(&self, builder: &mut B, roller: &mut DiceRoller<R>) -> Result<(), CreationError>
    where
        B: CharacterBuilder,
        R: Rng,
    {
        self.create(HERO, builder, roller)
    }

    pub fn create_monster<B, R>(&self, builder: &mut B, roller: &mut DiceRoller<R>) -> Result<(), CreationError>
    where
        B: CharacterBuilder,
        R: Rng,
    {
        self.create(MONSTER, builder, roller)
    }

    pub fn create_npc<B, R>(&self, builder: &mut B, roller: &mut DiceRoller<R>) -> Result<(), CreationError>
    where
        B: CharacterBuilder,
        R: Rng,
    {
        self.create(NPC, builder, roller)
    }

    /// Drive `builder` through the named recipe.
    pub fn create<B, R>(&self, recipe: &str, builder: &mut B, roller: &mut DiceRoller<R>) -> Result<(), CreationError>
    where
        B: CharacterBuilder,
        R: Rng,
    {
        let recipe_data = self
            .recipes
            .get(recipe)
            .ok_or_else(|| CreationError::UnknownRecipe(recipe.to_string()))?;

        Self::apply(recipe_data, builder, roller);
        debug!(recipe, name = %recipe_data.name, "recipe applied");
        Ok(())
    }

    pub fn apply<B, R>(recipe: &Recipe, builder: &mut B, roller: &mut DiceRoller<R>)
    where
        B: CharacterBuilder,
        R: Rng,
    {
        builder.reset();
        builder.set_name(&recipe.name);
        builder.set_health(recipe.health);
        builder.set_equipment(&recipe.armor, &recipe.weapon, &recipe.magic);
        builder.build_character_attributes(&recipe.abilities, roller);
    }
}

// =============================================================================
// Tests
// =============================================================================
