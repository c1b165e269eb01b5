//! Ingredient models
//!
//! Ingredients are a tagged union over kind; each variant carries only
//! the fields its formula contribution reads. Payloads deserialize from
//! `{"type": "grain", ...}` shapes.

use serde::{Deserialize, Serialize};

/// A recipe ingredient, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ingredient {
    Grain(Grain),
    Hop(Hop),
    Yeast(Yeast),
    Other(Other),
}

impl Ingredient {
    /// Catalog id of the underlying ingredient
    pub fn ingredient_id(&self) -> i64 {
        match self {
            Ingredient::Grain(g) => g.ingredient_id,
            Ingredient::Hop(h) => h.ingredient_id,
            Ingredient::Yeast(y) => y.ingredient_id,
            Ingredient::Other(o) => o.ingredient_id,
        }
    }
}

/// A fermentable grain or malt addition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grain {
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: String,
    /// Extract potential in gravity points per pound per gallon
    pub potential: Option<f64>,
    /// Color in degrees Lovibond
    pub color: Option<f64>,
}

/// A hop addition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hop {
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: String,
    /// Alpha acid content, percent
    pub alpha_acid: Option<f64>,
    /// How the hop is used; only boil additions contribute bitterness
    #[serde(rename = "use", default)]
    pub usage: HopUse,
    /// Boil time in minutes
    pub time: Option<f64>,
}

/// Where in the process a hop is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopUse {
    #[default]
    Boil,
    Whirlpool,
    DryHop,
}

/// A yeast addition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Yeast {
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: String,
    /// Manufacturer-specified attenuation, percent
    pub attenuation: Option<f64>,
}

/// Anything that contributes to no formula (water agents, finings, spices)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Other {
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: String,
}
