//! Rendering of change events for the console

use colored::Colorize;
use serde::Serialize;

use crate::event::{ChangeEvent, ChangeKind};
use crate::Result;

/// Render one line per event. With `color` the leading verb is highlighted.
pub fn render_text(events: &[ChangeEvent], color: bool) -> String {
    let mut out = String::new();
    for event in events {
        if color {
            let verb = match event.kind() {
                ChangeKind::Added => event.kind().as_str().green(),
                ChangeKind::Removed => event.kind().as_str().red(),
                ChangeKind::Changed => event.kind().as_str().yellow(),
            };
            out.push_str(&format!("{} {}\n", verb, event.detail()));
        } else {
            out.push_str(&format!("{}\n", event));
        }
    }
    out
}

/// Render events as a pretty JSON array
pub fn render_json(events: &[ChangeEvent]) -> Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    changes: &'a [ChangeEvent],
    summary: DiffSummary,
}

/// Render events and their summary as a pretty JSON object
/// (`{"changes": [...], "summary": {...}}`)
pub fn render_json_with_summary(events: &[ChangeEvent]) -> Result<String> {
    let report = JsonReport {
        changes: events,
        summary: DiffSummary::from_events(events),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Counts of changes by level and kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub recipes_added: usize,
    pub recipes_removed: usize,
    pub recipes_changed: usize,
    pub ingredients_added: usize,
    pub ingredients_removed: usize,
    pub ingredients_changed: usize,
}

impl DiffSummary {
    pub fn from_events(events: &[ChangeEvent]) -> Self {
        let mut summary = Self::default();
        // Recipes touched by any time or ingredient event
        let mut changed_recipes = std::collections::BTreeSet::new();

        for event in events {
            match event {
                ChangeEvent::RecipeAdded { .. } => summary.recipes_added += 1,
                ChangeEvent::RecipeRemoved { .. } => summary.recipes_removed += 1,
                ChangeEvent::RecipeTimeChanged { recipe, .. } => {
                    changed_recipes.insert(recipe.as_str());
                }
                ChangeEvent::IngredientAdded { recipe, .. } => {
                    summary.ingredients_added += 1;
                    changed_recipes.insert(recipe.as_str());
                }
                ChangeEvent::IngredientRemoved { recipe, .. } => {
                    summary.ingredients_removed += 1;
                    changed_recipes.insert(recipe.as_str());
                }
                ChangeEvent::IngredientCountChanged { recipe, .. }
                | ChangeEvent::IngredientUnitChanged { recipe, .. } => {
                    summary.ingredients_changed += 1;
                    changed_recipes.insert(recipe.as_str());
                }
            }
        }

        summary.recipes_changed = changed_recipes.len();
        summary
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Recipes:     +{} -{} ~{}",
            self.recipes_added, self.recipes_removed, self.recipes_changed
        )?;
        write!(
            f,
            "Ingredients: +{} -{} ~{}",
            self.ingredients_added, self.ingredients_removed, self.ingredients_changed
        )
    }
}
