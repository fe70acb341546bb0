//! Pattern 3: Builder + Director
//!
//! Two takes on the same character builder:
//! - [`npc`]: one setter per field, the director calls each in turn.
//! - [`character`]: identity and equipment setters plus a single
//!   `build_character_attributes` step that rolls every ability score.

pub mod character;
pub mod npc;

pub use character::{AbilityProfile, CharacterBuilder, Director, Recipe, StandardCharacterBuilder};
pub use npc::{HeroBuilder, NpcBuilder, NpcDirector};
