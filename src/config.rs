//! Recipe book configuration.
//!
//! The built-in recipes ship inside the binary (`recipes.toml`); a different
//! book can be loaded from a TOML file with the same layout.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::builder::character::{Recipe, HERO, MONSTER, NPC};
use crate::error::CreationError;

const BUILTIN_RECIPES: &str = include_str!("../recipes.toml");

/// Recipes every book must provide.
pub const REQUIRED_RECIPES: [&str; 3] = [HERO, MONSTER, NPC];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    pub fn builtin() -> Self {
        // Covered by test_builtin_book_loads.
        Self::from_toml_str(BUILTIN_RECIPES).expect("built-in recipes.toml is valid")
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CreationError> {
        let recipes: BTreeMap<String, Recipe> = toml::from_str(content)?;

        if let Some(missing) = REQUIRED_RECIPES
            .iter()
            .find(|name| !recipes.contains_key(**name))
        {
            return Err(CreationError::Config(format!(
                "missing required recipe [{missing}]"
            )));
        }

        debug!(count = recipes.len(), "loaded recipe book");
        Ok(RecipeBook { recipes })
    }

    pub fn from_path(path: &Path) -> Result<Self, CreationError> {
        let content = fs::read_to_string(path).map_err(|err| {
            CreationError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_book_loads() {
        let book = RecipeBook::from_toml_str(BUILTIN_RECIPES).unwrap();
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["hero", "monster", "npc"]);

        let hero = book.get("hero").unwrap();
        assert_eq!(hero.name, "Link");
        assert_eq!(hero.abilities.strength.range(), 13..=18);
    }

    #[test]
    fn test_missing_required_recipe() {
        let content = r#"
            [hero]
            name = "Link"
            health = 3
            armor = "Green Tunic"
            weapon = "Fighter Sword"
            magic = "Lantern"

            [hero.abilities]
            strength = "12+1d6"
            intelligence = "3d6"
            wisdom = "3d6"
            dexterity = "3d6"
            constitution = "3d6"
            charisma = "3d6"
        "#;

        let err = RecipeBook::from_toml_str(content).unwrap_err();
        assert_eq!(
            err,
            CreationError::Config("missing required recipe [monster]".to_string())
        );
    }

    #[test]
    fn test_bad_dice_notation_is_a_config_error() {
        let content = BUILTIN_RECIPES.replace("\"12+1d6\"", "\"12+1d0\"");
        let err = RecipeBook::from_toml_str(&content).unwrap_err();
        match err {
            CreationError::Config(message) => assert!(message.contains("1d0"), "{message}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_dice_is_a_config_error() {
        for notation in ["12+1d4294967295", "2147483647+1d6", "100000d100000"] {
            let content = BUILTIN_RECIPES.replace("\"3d6\"", &format!("\"{notation}\""));
            let err = RecipeBook::from_toml_str(&content).unwrap_err();
            assert!(
                matches!(&err, CreationError::Config(message) if message.contains("Invalid dice")),
                "{notation}: {err}"
            );
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        let content = BUILTIN_RECIPES.replace("\"Impa\"", "\"Rauru\"");
        file.write_all(content.as_bytes()).unwrap();

        let book = RecipeBook::from_path(file.path()).unwrap();
        assert_eq!(book.get("npc").unwrap().name, "Rauru");
    }

    #[test]
    fn test_from_missing_path() {
        let err = RecipeBook::from_path(Path::new("/nonexistent/recipes.toml")).unwrap_err();
        assert!(matches!(err, CreationError::Config(message) if message.contains("failed to read")));
    }
}
