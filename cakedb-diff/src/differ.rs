//! Two-level diff of recipe databases
//!
//! Recipes are reconciled by name; every recipe present on both sides has
//! its cooking time compared and its ingredients reconciled by name in
//! turn. Events come out in a fixed order:
//!
//! 1. added and changed recipes, by ascending name
//! 2. removed recipes, by ascending name
//!
//! Within a changed recipe the time change comes first, then added and
//! changed ingredients by name, then removed ingredients by name.

use std::collections::BTreeSet;

use cakedb::Recipe;
use tracing::{debug, warn};

use crate::event::ChangeEvent;
use crate::reconcile::{reconcile, Pairing};

/// Stateless differ over two recipe collections
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseDiffer;

impl DatabaseDiffer {
    pub fn new() -> Self {
        Self
    }

    /// Compare `old` against `new`. Neither input is modified.
    pub fn diff(&self, old: &[Recipe], new: &[Recipe]) -> Vec<ChangeEvent> {
        debug!("Diffing {} old recipes against {} new", old.len(), new.len());
        warn_shadowed("old", old);
        warn_shadowed("new", new);

        let mut events = Vec::new();

        for pairing in reconcile(old, new, |r| r.name.as_str()) {
            match pairing {
                Pairing::Added { key, .. } => events.push(ChangeEvent::RecipeAdded {
                    recipe: key.to_string(),
                }),
                Pairing::Matched { old, new, .. } => compare_recipes(old, new, &mut events),
                Pairing::Removed { key, .. } => events.push(ChangeEvent::RecipeRemoved {
                    recipe: key.to_string(),
                }),
            }
        }

        debug!("Found {} changes", events.len());
        events
    }
}

/// Diff two recipe collections with the default differ
pub fn diff(old: &[Recipe], new: &[Recipe]) -> Vec<ChangeEvent> {
    DatabaseDiffer::new().diff(old, new)
}

fn compare_recipes(old: &Recipe, new: &Recipe, events: &mut Vec<ChangeEvent>) {
    if old.stove_time != new.stove_time {
        events.push(ChangeEvent::RecipeTimeChanged {
            recipe: new.name.clone(),
            old: old.stove_time.clone(),
            new: new.stove_time.clone(),
        });
    }

    compare_ingredients(old, new, events);
}

fn compare_ingredients(old: &Recipe, new: &Recipe, events: &mut Vec<ChangeEvent>) {
    let pairings = reconcile(&old.ingredients, &new.ingredients, |i| {
        i.name.as_str()
    });

    for pairing in pairings {
        match pairing {
            Pairing::Added { key, .. } => events.push(ChangeEvent::IngredientAdded {
                recipe: new.name.clone(),
                ingredient: key.to_string(),
            }),
            Pairing::Matched {
                key,
                old: old_item,
                new: new_item,
            } => {
                if old_item.count != new_item.count {
                    events.push(ChangeEvent::IngredientCountChanged {
                        recipe: new.name.clone(),
                        ingredient: key.to_string(),
                        old: old_item.count.clone(),
                        new: new_item.count.clone(),
                    });
                }
                if old_item.unit != new_item.unit {
                    events.push(ChangeEvent::IngredientUnitChanged {
                        recipe: new.name.clone(),
                        ingredient: key.to_string(),
                        old: old_item.unit.clone(),
                        new: new_item.unit.clone(),
                    });
                }
            }
            Pairing::Removed { key, .. } => events.push(ChangeEvent::IngredientRemoved {
                recipe: old.name.clone(),
                ingredient: key.to_string(),
            }),
        }
    }
}

fn warn_shadowed(side: &str, recipes: &[Recipe]) {
    let mut seen = BTreeSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.name.as_str()) {
            warn!(
                "Duplicate recipe {:?} in {} database, the later entry wins",
                recipe.name, side
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cakedb::Ingredient;

    fn cake(name: &str, time: &str, ingredients: &[(&str, &str, &str)]) -> Recipe {
        ingredients
            .iter()
            .fold(Recipe::new(name, time), |recipe, (n, c, u)| {
                recipe.with_ingredient(Ingredient::new(*n, *c, *u))
            })
    }

    fn added(recipe: &str) -> ChangeEvent {
        ChangeEvent::RecipeAdded {
            recipe: recipe.into(),
        }
    }

    fn removed(recipe: &str) -> ChangeEvent {
        ChangeEvent::RecipeRemoved {
            recipe: recipe.into(),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            cake(
                "Red Velvet Strawberry Cake",
                "40 min",
                &[
                    ("Flour", "3", "cups"),
                    ("Vanilla extract", "1.5", "tablespoons"),
                    ("Strawberries", "7", ""),
                ],
            ),
            cake(
                "Blueberry Muffin Cake",
                "30 min",
                &[("Baking powder", "3", "teaspoons"), ("Brown sugar", "0.5", "cup")],
            ),
        ]
    }

    #[test]
    fn test_identity() {
        let db = sample();
        assert!(diff(&db, &db).is_empty());
        assert!(diff(&[], &[]).is_empty());
    }

    #[test]
    fn test_time_count_and_added_ingredient() {
        let old = vec![cake("Cake", "30m", &[("flour", "200", "g")])];
        let new = vec![cake(
            "Cake",
            "35m",
            &[("flour", "250", "g"), ("sugar", "100", "g")],
        )];

        assert_eq!(
            diff(&old, &new),
            vec![
                ChangeEvent::RecipeTimeChanged {
                    recipe: "Cake".into(),
                    old: "30m".into(),
                    new: "35m".into(),
                },
                ChangeEvent::IngredientCountChanged {
                    recipe: "Cake".into(),
                    ingredient: "flour".into(),
                    old: "200".into(),
                    new: "250".into(),
                },
                ChangeEvent::IngredientAdded {
                    recipe: "Cake".into(),
                    ingredient: "sugar".into(),
                },
            ]
        );
    }

    #[test]
    fn test_removed_recipe_has_no_ingredient_events() {
        let old = vec![
            cake("Cake", "30m", &[("flour", "200", "g")]),
            cake("Pie", "50m", &[("apple", "3", ""), ("butter", "100", "g")]),
        ];
        let new = vec![cake("Cake", "30m", &[("flour", "200", "g")])];

        assert_eq!(diff(&old, &new), vec![removed("Pie")]);
    }

    #[test]
    fn test_added_and_removed_cover_symmetric_difference() {
        let old = vec![
            cake("A", "1", &[]),
            cake("B", "1", &[]),
            cake("C", "1", &[]),
        ];
        let new = vec![
            cake("D", "1", &[]),
            cake("B", "1", &[]),
            cake("E", "1", &[]),
        ];

        assert_eq!(
            diff(&old, &new),
            vec![added("D"), added("E"), removed("A"), removed("C")]
        );
    }

    #[test]
    fn test_ingredients_scoped_per_recipe() {
        let old = vec![
            cake("A", "10", &[]),
            cake("B", "10", &[("flour", "1", "kg")]),
        ];
        let new = vec![
            cake("A", "10", &[("flour", "1", "kg")]),
            cake("B", "10", &[]),
        ];

        assert_eq!(
            diff(&old, &new),
            vec![
                ChangeEvent::IngredientAdded {
                    recipe: "A".into(),
                    ingredient: "flour".into(),
                },
                ChangeEvent::IngredientRemoved {
                    recipe: "B".into(),
                    ingredient: "flour".into(),
                },
            ]
        );
    }

    #[test]
    fn test_count_precedes_unit_and_removed_ingredients_last() {
        let old = vec![cake(
            "Cake",
            "30m",
            &[("eggs", "2", ""), ("butter", "100", "g"), ("milk", "1", "cup")],
        )];
        let new = vec![cake(
            "Cake",
            "30m",
            &[("milk", "250", "ml"), ("cocoa", "2", "tbsp")],
        )];

        let events: Vec<String> = diff(&old, &new).iter().map(|e| e.to_string()).collect();
        assert_eq!(
            events,
            vec![
                r#"ADDED ingredient "cocoa" for cake "Cake""#,
                r#"CHANGED unit count for ingredient "milk" for cake "Cake" - "250" instead of "1""#,
                r#"CHANGED unit for ingredient "milk" for cake "Cake" - "ml" instead of "cup""#,
                r#"REMOVED ingredient "butter" for cake "Cake""#,
                r#"REMOVED ingredient "eggs" for cake "Cake""#,
            ]
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let old = sample();
        let mut new = sample();
        new.reverse();
        new[0].ingredients.reverse();
        new[1].stove_time = "45 min".into();
        new.push(cake("Moonshine Muffin", "15 min", &[]));

        let mut shuffled = new.clone();
        shuffled.rotate_left(1);

        let events = diff(&old, &new);
        assert_eq!(events, diff(&old, &shuffled));
        assert_eq!(
            events,
            vec![
                added("Moonshine Muffin"),
                ChangeEvent::RecipeTimeChanged {
                    recipe: "Red Velvet Strawberry Cake".into(),
                    old: "40 min".into(),
                    new: "45 min".into(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_last_write_wins() {
        let old = vec![cake("Cake", "30m", &[]), cake("Cake", "40m", &[])];
        let new = vec![cake(
            "Cake",
            "40m",
            &[("flour", "1", "g"), ("flour", "2", "g")],
        )];

        assert_eq!(
            diff(&old, &new),
            vec![ChangeEvent::IngredientAdded {
                recipe: "Cake".into(),
                ingredient: "flour".into(),
            }]
        );
    }

    #[test]
    fn test_empty_names_are_valid_keys() {
        let old = vec![cake("", "1", &[("", "1", "")])];
        let new = vec![cake("", "1", &[("", "2", "")])];

        assert_eq!(
            diff(&old, &new),
            vec![ChangeEvent::IngredientCountChanged {
                recipe: String::new(),
                ingredient: String::new(),
                old: "1".into(),
                new: "2".into(),
            }]
        );
    }

    #[test]
    fn test_inputs_untouched() {
        let old = sample();
        let new = vec![cake("Other", "1", &[])];
        let (old_copy, new_copy) = (old.clone(), new.clone());

        let _ = DatabaseDiffer::new().diff(&old, &new);
        assert_eq!(old, old_copy);
        assert_eq!(new, new_copy);
    }
}
