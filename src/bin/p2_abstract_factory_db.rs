//! Pattern 2: Abstract Factory
//! Example: Database connection and command families
//!
//!   cargo run --bin p2_abstract_factory_db                      # MySQL
//!   cargo run --bin p2_abstract_factory_db --features postgres
//!   cargo run --bin p2_abstract_factory_db --features oracle

use colored::Colorize;
use creational_patterns::database::{self, Backend};

fn main() {
    creational_patterns::init_logging();

    let backend = Backend::configured();
    println!("{}", format!("=== Abstract Factory: {backend} ===").cyan());

    // Products are boxed and dropped at the end of main; nothing to free by hand.
    let factory = database::factory_for(backend);
    let mut connection = factory.create_connection();
    let command = factory.create_command();

    connection.connect();
    println!("connected: {}", connection.is_connected());
    println!("{}", command.execute("SELECT * FROM some_table"));
}
