//! Material science records.

use serde::{Deserialize, Serialize};

/// A fabric technology shown in the sticky material panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub chemical_formula: Option<String>,
    #[serde(default)]
    pub properties: Vec<String>,
    pub image: String,
}

impl MaterialSpec {
    /// Formula label for the image overlay, empty when none is known.
    pub fn formula_label(&self) -> &str {
        self.chemical_formula.as_deref().unwrap_or("")
    }
}
