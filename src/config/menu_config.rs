use crate::domain::model::{BaseSpec, ModifierSpec};
use crate::utils::error::{KioskError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_non_negative_amount, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Menu definition: one base item and the modifiers applied to it, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub base: BaseSpec,
    #[serde(default)]
    pub modifiers: Vec<ModifierSpec>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            base: BaseSpec {
                description: "Basic Drink".to_string(),
                cost: 5.0,
            },
            modifiers: vec![
                ModifierSpec {
                    suffix: "Extra Sugar".to_string(),
                    delta: 0.5,
                },
                ModifierSpec {
                    suffix: "Extra Topping".to_string(),
                    delta: 1.0,
                },
            ],
        }
    }
}

impl MenuConfig {
    /// Loads a menu from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| KioskError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| KioskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| KioskError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("base.description", &self.base.description)?;
        validate_non_negative_amount("base.cost", self.base.cost)?;

        for (index, modifier) in self.modifiers.iter().enumerate() {
            validate_non_empty_string(&format!("modifiers[{}].suffix", index), &modifier.suffix)?;
            validate_finite(&format!("modifiers[{}].delta", index), modifier.delta)?;
        }

        Ok(())
    }
}
