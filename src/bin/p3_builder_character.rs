//! Pattern 3: Builder + Director
//! Example: Character builder with a single attribute-rolling step
//!
//! Run with: cargo run --bin p3_builder_character

use std::rc::Rc;

use colored::Colorize;
use creational_patterns::builder::{CharacterBuilder, Director, StandardCharacterBuilder};
use creational_patterns::character::Character;
use creational_patterns::dice::DiceRoller;

fn main() -> anyhow::Result<()> {
    creational_patterns::init_logging();

    let mut roller = DiceRoller::from_entropy();
    let director = Director::default();
    let mut builder = StandardCharacterBuilder::new();

    println!("{}", "=== Director: hero ===".cyan());
    director.create_hero(&mut builder, &mut roller)?;
    let hero: Rc<Character> = builder.character();
    print!("{}", hero.info());

    println!("\n{}", "=== Director: monster ===".cyan());
    director.create_monster(&mut builder, &mut roller)?;
    let monster = builder.character();
    print!("{}", monster.info());

    println!("\n{}", "=== Director: NPC ===".cyan());
    director.create_npc(&mut builder, &mut roller)?;
    print!("{}", builder.character().info());

    println!("\n{}", "=== Products stay as they were handed out ===".cyan());
    println!("hero is still {} after building {}", hero.name.bold(), monster.name.bold());

    println!("\n{}", "=== Unknown recipe ===".cyan());
    match director.create("dragon", &mut builder, &mut roller) {
        Ok(()) => println!("Unexpected success"),
        Err(err) => println!("{} {}", "Expected error:".red(), err),
    }

    Ok(())
}
