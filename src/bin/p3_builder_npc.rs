//! Pattern 3: Builder + Director
//! Example: NPC builder with one setter per field
//!
//! Run with: cargo run --bin p3_builder_npc

use colored::Colorize;
use creational_patterns::builder::{HeroBuilder, NpcBuilder, NpcDirector};
use creational_patterns::dice::DiceRoller;

fn main() {
    creational_patterns::init_logging();

    println!("{}", "=== Builder: per-field setters ===".cyan());
    let mut roller = DiceRoller::from_entropy();
    let director = NpcDirector;
    let mut builder = HeroBuilder::new();

    director.create_hero(&mut builder, &mut roller);
    let hero = builder.get_npc();

    print!("{}", hero.info());
}
