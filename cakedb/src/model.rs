//! Format-independent recipe model

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ingredient {
    /// Unique within the parent recipe
    pub name: String,
    /// Quantity, kept verbatim
    pub count: String,
    /// Measurement unit, empty when unspecified
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, count: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: count.into(),
            unit: unit.into(),
        }
    }
}

/// A recipe ("cake") as stored in a database file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe {
    /// Unique within a database
    pub name: String,
    /// Cooking time, an opaque duration string such as "40 min"
    pub stove_time: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, stove_time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stove_time: stove_time.into(),
            ingredients: Vec::new(),
        }
    }

    /// Builder-style helper to append an ingredient
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_ingredient_keeps_order() {
        let recipe = Recipe::new("Cake", "30m")
            .with_ingredient(Ingredient::new("flour", "200", "g"))
            .with_ingredient(Ingredient::new("eggs", "2", ""));

        assert_eq!(recipe.stove_time, "30m");
        assert_eq!(recipe.ingredients[0].name, "flour");
        assert_eq!(recipe.ingredients[1], Ingredient::new("eggs", "2", ""));
    }
}
