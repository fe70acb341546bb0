//! Pattern 2: Abstract Factory
//! Example: Cross-platform GUI widgets
//!
//! The widget family is fixed when the example is built:
//!
//!   cargo run --bin p2_abstract_factory_gui                     # MacOS
//!   cargo run --bin p2_abstract_factory_gui --features windows
//!   cargo run --bin p2_abstract_factory_gui --features linux

use colored::Colorize;
use creational_patterns::gui::{self, Platform, Widgets};

fn main() {
    creational_patterns::init_logging();

    let platform = Platform::configured();
    println!("{}", format!("=== Abstract Factory: {platform} widgets ===").cyan());

    // The client only ever talks to the factory trait.
    let factory = gui::factory_for(platform);
    let button = factory.create_button();
    let menu = factory.create_menu();
    let dialog = factory.create_dialog();

    println!("{}", button.draw());
    println!("{}", menu.draw());
    println!("{}", dialog.draw());

    println!("\n{}", "=== Every family, side by side ===".cyan());
    for platform in Platform::ALL {
        let widgets = Widgets::from_factory(gui::factory_for(platform).as_ref());
        println!("{:>8}: {}", platform.to_string().bold(), widgets.draw_all().join(", "));
    }
}
