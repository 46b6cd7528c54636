//! XML database schema
//!
//! `<recipes><cake><name/><stovetime/><ingredients><item><itemname/>
//! <itemcount/><itemunit/></item></ingredients></cake></recipes>`

use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::model::{Ingredient, Recipe};
use crate::Result;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const ROOT_TAG: &str = "recipes";

#[derive(Debug, Default, Deserialize, Serialize)]
struct XmlDatabase {
    #[serde(rename = "cake", default)]
    cakes: Vec<XmlCake>,
}

#[derive(Debug, Deserialize, Serialize)]
struct XmlCake {
    #[serde(default)]
    name: String,
    #[serde(rename = "stovetime", default)]
    stove_time: String,
    #[serde(default)]
    ingredients: XmlIngredients,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct XmlIngredients {
    #[serde(rename = "item", default)]
    items: Vec<XmlItem>,
}

#[derive(Debug, Deserialize, Serialize)]
struct XmlItem {
    #[serde(rename = "itemname", default)]
    name: String,
    #[serde(rename = "itemcount", default)]
    count: String,
    #[serde(rename = "itemunit", default)]
    unit: String,
}

impl From<XmlCake> for Recipe {
    fn from(cake: XmlCake) -> Self {
        cake.ingredients
            .items
            .into_iter()
            .fold(Recipe::new(cake.name, cake.stove_time), |recipe, i| {
                recipe.with_ingredient(Ingredient::new(i.name, i.count, i.unit))
            })
    }
}

impl From<&Recipe> for XmlCake {
    fn from(recipe: &Recipe) -> Self {
        XmlCake {
            name: recipe.name.clone(),
            stove_time: recipe.stove_time.clone(),
            ingredients: XmlIngredients {
                items: recipe
                    .ingredients
                    .iter()
                    .map(|i| XmlItem {
                        name: i.name.clone(),
                        count: i.count.clone(),
                        unit: i.unit.clone(),
                    })
                    .collect(),
            },
        }
    }
}

pub(crate) fn parse(content: &str) -> Result<Vec<Recipe>> {
    let db: XmlDatabase = quick_xml::de::from_str(content)?;
    Ok(db.cakes.into_iter().map(Recipe::from).collect())
}

pub(crate) fn render(recipes: &[Recipe]) -> Result<String> {
    let db = XmlDatabase {
        cakes: recipes.iter().map(XmlCake::from).collect(),
    };

    let mut body = String::new();
    let mut ser = Serializer::with_root(&mut body, Some(ROOT_TAG))?;
    ser.indent(' ', 4);
    db.serialize(ser)?;

    Ok(format!("{}\n{}", XML_HEADER, body))
}
