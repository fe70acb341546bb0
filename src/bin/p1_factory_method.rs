//! Pattern 1: Factory Method
//! Example: 2D game objects with a sprite and a collider
//!
//! Run with: cargo run --bin p1_factory_method

use colored::Colorize;
use creational_patterns::factory_method::{GameObject, GameObjectFactory, ObjectType};
use tracing::warn;

fn show(object: &dyn GameObject) {
    println!("{}", object.kind().to_string().bold());
    println!("  {}", object.draw());
    println!("  {}", object.collide());
    println!("  area: {:.2}, perimeter: {:.2}", object.area(), object.perimeter());
}

fn main() -> anyhow::Result<()> {
    creational_patterns::init_logging();

    println!("{}", "=== Factory Method ===".cyan());
    let circle = GameObjectFactory::create_object(ObjectType::Circle, 5.0)?;
    let square = GameObjectFactory::create_object(ObjectType::Square, 5.0)?;
    let triangle = GameObjectFactory::create_object(ObjectType::Triangle, 5.0)?;
    let rectangle = GameObjectFactory::create_object(ObjectType::Rectangle, (10.0, 2.0))?;

    // The only creation that is allowed to fail in this example.
    let obround = match GameObjectFactory::create_object(ObjectType::Obround, (9.0, 2.0)) {
        Ok(object) => Some(object),
        Err(err) => {
            warn!("Failed to create obround: {err}");
            None
        }
    };

    for object in [&circle, &triangle, &square, &rectangle] {
        show(object.as_ref());
    }
    if let Some(obround) = &obround {
        show(obround.as_ref());
    }

    println!("\n{}", "=== Invalid Obround (length < height) ===".cyan());
    match GameObjectFactory::create_object(ObjectType::Obround, (2.0, 9.0)) {
        Ok(_) => println!("Unexpected success"),
        Err(err) => println!("{} {}", "Expected error:".red(), err),
    }

    println!("\n{}", "=== Unsupported Size Combination ===".cyan());
    // A rectangle needs two sizes; the factory says so instead of returning nothing.
    match GameObjectFactory::create_object(ObjectType::Rectangle, 3.0) {
        Ok(_) => println!("Unexpected success"),
        Err(err) => println!("{} {}", "Expected error:".red(), err),
    }

    Ok(())
}
