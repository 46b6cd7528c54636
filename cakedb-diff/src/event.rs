//! Change events produced by the differ

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "ADDED",
            ChangeKind::Removed => "REMOVED",
            ChangeKind::Changed => "CHANGED",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One difference between an old and a new database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// Recipe only present in the new database
    RecipeAdded { recipe: String },
    /// Recipe only present in the old database
    RecipeRemoved { recipe: String },
    /// Cooking time differs
    RecipeTimeChanged {
        recipe: String,
        old: String,
        new: String,
    },
    IngredientAdded { recipe: String, ingredient: String },
    IngredientRemoved { recipe: String, ingredient: String },
    IngredientCountChanged {
        recipe: String,
        ingredient: String,
        old: String,
        new: String,
    },
    IngredientUnitChanged {
        recipe: String,
        ingredient: String,
        old: String,
        new: String,
    },
}

impl ChangeEvent {
    /// Name of the affected recipe
    pub fn recipe(&self) -> &str {
        match self {
            ChangeEvent::RecipeAdded { recipe }
            | ChangeEvent::RecipeRemoved { recipe }
            | ChangeEvent::RecipeTimeChanged { recipe, .. }
            | ChangeEvent::IngredientAdded { recipe, .. }
            | ChangeEvent::IngredientRemoved { recipe, .. }
            | ChangeEvent::IngredientCountChanged { recipe, .. }
            | ChangeEvent::IngredientUnitChanged { recipe, .. } => recipe,
        }
    }

    /// Name of the affected ingredient, for ingredient-level events
    pub fn ingredient(&self) -> Option<&str> {
        match self {
            ChangeEvent::IngredientAdded { ingredient, .. }
            | ChangeEvent::IngredientRemoved { ingredient, .. }
            | ChangeEvent::IngredientCountChanged { ingredient, .. }
            | ChangeEvent::IngredientUnitChanged { ingredient, .. } => Some(ingredient.as_str()),
            _ => None,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeEvent::RecipeAdded { .. } | ChangeEvent::IngredientAdded { .. } => {
                ChangeKind::Added
            }
            ChangeEvent::RecipeRemoved { .. } | ChangeEvent::IngredientRemoved { .. } => {
                ChangeKind::Removed
            }
            ChangeEvent::RecipeTimeChanged { .. }
            | ChangeEvent::IngredientCountChanged { .. }
            | ChangeEvent::IngredientUnitChanged { .. } => ChangeKind::Changed,
        }
    }

    /// The line without its leading verb
    pub fn detail(&self) -> String {
        match self {
            ChangeEvent::RecipeAdded { recipe } | ChangeEvent::RecipeRemoved { recipe } => {
                format!("cake \"{}\"", recipe)
            }
            ChangeEvent::RecipeTimeChanged { recipe, old, new } => format!(
                "cooking time for cake \"{}\" - \"{}\" instead of \"{}\"",
                recipe, new, old
            ),
            ChangeEvent::IngredientAdded { recipe, ingredient }
            | ChangeEvent::IngredientRemoved { recipe, ingredient } => {
                format!("ingredient \"{}\" for cake \"{}\"", ingredient, recipe)
            }
            ChangeEvent::IngredientCountChanged {
                recipe,
                ingredient,
                old,
                new,
            } => format!(
                "unit count for ingredient \"{}\" for cake \"{}\" - \"{}\" instead of \"{}\"",
                ingredient, recipe, new, old
            ),
            ChangeEvent::IngredientUnitChanged {
                recipe,
                ingredient,
                old,
                new,
            } => format!(
                "unit for ingredient \"{}\" for cake \"{}\" - \"{}\" instead of \"{}\"",
                ingredient, recipe, new, old
            ),
        }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.detail())
    }
}
