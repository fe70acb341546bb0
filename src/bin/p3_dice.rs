//! Pattern 3 support: dice rolls
//! Example: Dice notation and a seeded roller
//!
//! Run with: cargo run --bin p3_dice

use colored::Colorize;
use creational_patterns::dice::{AbilityRoll, Dice, DiceRoller};

fn main() -> anyhow::Result<()> {
    creational_patterns::init_logging();

    println!("{}", "=== Dice notation ===".cyan());
    for notation in ["1d6", "3d6", "9d2", "d20"] {
        let dice: Dice = notation.parse()?;
        println!(
            "{notation:>5} -> {} dice of {} sides, totals {:?}",
            dice.quantity(),
            dice.sides(),
            dice.range()
        );
    }

    println!("\n{}", "=== Seeded rolls repeat ===".cyan());
    let dice: Dice = "3d6".parse()?;
    let mut first = DiceRoller::seeded(42);
    let mut second = DiceRoller::seeded(42);
    let a: Vec<u32> = (0..5).map(|_| first.roll(dice)).collect();
    let b: Vec<u32> = (0..5).map(|_| second.roll(dice)).collect();
    println!("seed 42: {a:?}");
    println!("seed 42: {b:?}");

    println!("\n{}", "=== Ability rolls ===".cyan());
    let mut roller = DiceRoller::from_entropy();
    for notation in ["12+1d6", "8+2d4", "10", "8-1d4"] {
        let ability: AbilityRoll = notation.parse()?;
        println!(
            "{notation:>7} in {:?}: rolled {}",
            ability.range(),
            roller.roll_ability(&ability)
        );
    }

    println!("\n{}", "=== Invalid dice ===".cyan());
    for notation in ["2d0", "12+1d4294967295"] {
        match notation.parse::<AbilityRoll>() {
            Ok(_) => println!("Unexpected success"),
            Err(err) => println!("{} {}", "Expected error:".red(), err),
        }
    }

    Ok(())
}
