//! JSON database schema
//!
//! `{"cake": [{"name", "time", "ingredients": [{"ingredient_name",
//! "ingredient_count", "ingredient_unit"?}]}]}`

use serde::{Deserialize, Serialize};

use crate::model::{Ingredient, Recipe};
use crate::Result;

#[derive(Debug, Default, Deserialize, Serialize)]
struct JsonDatabase {
    #[serde(rename = "cake", default)]
    cakes: Vec<JsonCake>,
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonCake {
    #[serde(default)]
    name: String,
    #[serde(rename = "time", default)]
    stove_time: String,
    #[serde(default)]
    ingredients: Vec<JsonIngredient>,
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonIngredient {
    #[serde(rename = "ingredient_name", default)]
    name: String,
    #[serde(rename = "ingredient_count", default)]
    count: String,
    #[serde(
        rename = "ingredient_unit",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    unit: String,
}

impl From<JsonCake> for Recipe {
    fn from(cake: JsonCake) -> Self {
        cake.ingredients
            .into_iter()
            .fold(Recipe::new(cake.name, cake.stove_time), |recipe, i| {
                recipe.with_ingredient(Ingredient::new(i.name, i.count, i.unit))
            })
    }
}

impl From<&Recipe> for JsonCake {
    fn from(recipe: &Recipe) -> Self {
        JsonCake {
            name: recipe.name.clone(),
            stove_time: recipe.stove_time.clone(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| JsonIngredient {
                    name: i.name.clone(),
                    count: i.count.clone(),
                    unit: i.unit.clone(),
                })
                .collect(),
        }
    }
}

pub(crate) fn parse(content: &str) -> Result<Vec<Recipe>> {
    let db: JsonDatabase = serde_json::from_str(content)?;
    Ok(db.cakes.into_iter().map(Recipe::from).collect())
}

pub(crate) fn render(recipes: &[Recipe]) -> Result<String> {
    let db = JsonDatabase {
        cakes: recipes.iter().map(JsonCake::from).collect(),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    db.serialize(&mut ser)?;

    Ok(String::from_utf8(buf)?)
}
