use thiserror::Error;

/// Everything that can go wrong while a creator builds a product.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreationError {
    #[error("Invalid argument for {shape}: {reason}")]
    InvalidArgument { shape: String, reason: String },

    #[error("No {kind} can be created from {arity} size parameter(s)")]
    UnsupportedShape { kind: String, arity: usize },

    #[error("Unknown shape: '{0}'")]
    UnknownShape(String),

    #[error("Invalid dice '{notation}': {reason}")]
    InvalidDice { notation: String, reason: String },

    #[error("Unknown platform: '{0}' (expected windows, linux or macos)")]
    UnknownPlatform(String),

    #[error("Unknown database backend: '{0}' (expected mysql, postgresql or oracle)")]
    UnknownBackend(String),

    #[error("No recipe named '{0}'")]
    UnknownRecipe(String),

    #[error("Recipe configuration error: {0}")]
    Config(String),
}

impl CreationError {
    pub fn invalid_argument(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            shape: shape.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_dice(notation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDice {
            notation: notation.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CreationError {
    fn from(err: toml::de::Error) -> Self {
        CreationError::Config(err.message().to_string())
    }
}
