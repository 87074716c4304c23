//! Extraction of a structured macro-nutrient record from the free text the
//! AI collaborator returns.
//!
//! The labels matched here are the exact ones the nutrition prompt asks the
//! model to use (see `insights::nutrition_prompt`); if the prompt wording
//! changes, extraction silently degrades to defaults. Parsing never fails: a
//! field that does not match yields its documented default instead.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DEFAULT_FOOD_NAME: &str = "Your Food";
pub const DEFAULT_VITAMINS: &str = "None";

// Compiled once; a pattern that fails to compile behaves as a universal
// parse miss rather than aborting the process.
static CALORIES_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*\*Calories\*\*:\s*(\d+)\s*kcal").ok());
static PROTEIN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*\*Protein\*\*:\s*(\d+)\s*g").ok());
static CARBS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*\*Carbs\*\*:\s*(\d+)\s*g").ok());
static FATS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*\*Fats\*\*:\s*(\d+)\s*g").ok());
static VITAMINS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*\*Notable Vitamins/Minerals\*\*:\s*([a-zA-Z, ]+)").ok());
static FOOD_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*\*Food Name\*\*:\s*([^\n]+)").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroRecord {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl MacroRecord {
    /// True when at least one of protein, carbs or fats is non-zero.
    /// An all-zero record is charted as "no data" rather than as a chart.
    pub fn has_macro_data(&self) -> bool {
        self.protein != 0 || self.carbs != 0 || self.fats != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodIdentity {
    pub name: String,
    pub vitamins: String,
}

impl Default for FoodIdentity {
    fn default() -> Self {
        FoodIdentity {
            name: DEFAULT_FOOD_NAME.to_string(),
            vitamins: DEFAULT_VITAMINS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub macros: MacroRecord,
    pub identity: FoodIdentity,
}

fn capture_u32(re: &LazyLock<Option<Regex>>, text: &str) -> Option<u32> {
    let captures = re.as_ref()?.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

fn capture_str(re: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let captures = re.as_ref()?.captures(text)?;
    Some(captures.get(1)?.as_str().to_string())
}

/// Extract macros, food name and vitamins from the collaborator's reply.
/// Case-sensitive, first occurrence wins, each field independent; an
/// unparseable integer counts as a miss and yields 0.
pub fn parse_nutrition_text(response_text: &str) -> NutritionFacts {
    let macros = MacroRecord {
        calories: capture_u32(&CALORIES_RE, response_text).unwrap_or(0),
        protein: capture_u32(&PROTEIN_RE, response_text).unwrap_or(0),
        carbs: capture_u32(&CARBS_RE, response_text).unwrap_or(0),
        fats: capture_u32(&FATS_RE, response_text).unwrap_or(0),
    };
    let vitamins =
        capture_str(&VITAMINS_RE, response_text).unwrap_or_else(|| DEFAULT_VITAMINS.to_string());
    let name = capture_str(&FOOD_NAME_RE, response_text)
        .map(|raw| raw.trim().to_string())
        .unwrap_or_else(|| DEFAULT_FOOD_NAME.to_string());

    if !macros.has_macro_data() {
        log::warn!("no macro-nutrient fields matched in collaborator response");
    }

    NutritionFacts {
        macros,
        identity: FoodIdentity { name, vitamins },
    }
}
