//! # Creational Design Patterns
//!
//! This crate contains runnable examples demonstrating the classical creational
//! patterns in Rust, each through a small toy domain.
//!
//! ## Patterns Covered
//!
//! 1. **Factory Method** - 2D game objects built from a shape discriminator
//! 2. **Abstract Factory** - GUI widget families and database connector families
//! 3. **Builder + Director** - NPC and character generation with dice rolls
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Factory Method
//! cargo run --bin p1_factory_method
//!
//! # Pattern 2: Abstract Factory (family picked at build time)
//! cargo run --bin p2_abstract_factory_gui
//! cargo run --bin p2_abstract_factory_gui --features windows
//! cargo run --bin p2_abstract_factory_db --features postgres
//!
//! # Pattern 3: Builder + Director
//! cargo run --bin p3_builder_npc
//! cargo run --bin p3_builder_character
//! cargo run --bin p3_dice
//! ```
//!
//! Set `RUST_LOG=debug` to see every product as it is created.

pub mod builder;
pub mod character;
pub mod config;
pub mod database;
pub mod dice;
pub mod error;
pub mod factory_method;
pub mod gui;

pub use error::CreationError;

use tracing_subscriber::EnvFilter;

/// Install the stderr log writer used by every example binary.
///
/// `RUST_LOG` wins when set; otherwise `info` and above are shown.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        tracing::debug!("logging still works after a second init");
    }
}
