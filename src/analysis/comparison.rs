//! Chart-ready comparison of the analyzed food against the reference catalog.
//!
//! The user's record is prepended to the catalog entries in their declared
//! order; nothing is sorted, deduplicated or normalized. How the rows are
//! drawn (bars, lines, a plain table) is the caller's choice.

use super::catalog::REFERENCE_CATALOG;
use super::response_parser::MacroRecord;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroRow {
    pub name: String,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalorieRow {
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTables {
    pub macro_rows: Vec<MacroRow>,
    pub calorie_rows: Vec<CalorieRow>,
}

/// Build the comparison rows, user entry first. Returns None when the record
/// has no macro data at all, so callers warn instead of charting zeros.
pub fn build_comparison(food_name: &str, macros: &MacroRecord) -> Option<ComparisonTables> {
    if !macros.has_macro_data() {
        return None;
    }

    let mut macro_rows = Vec::with_capacity(1 + REFERENCE_CATALOG.len());
    let mut calorie_rows = Vec::with_capacity(1 + REFERENCE_CATALOG.len());

    macro_rows.push(MacroRow {
        name: food_name.to_string(),
        protein: macros.protein,
        carbs: macros.carbs,
        fats: macros.fats,
    });
    calorie_rows.push(CalorieRow {
        name: food_name.to_string(),
        calories: macros.calories,
    });

    for entry in &REFERENCE_CATALOG {
        macro_rows.push(MacroRow {
            name: entry.name.to_string(),
            protein: entry.protein,
            carbs: entry.carbs,
            fats: entry.fats,
        });
        calorie_rows.push(CalorieRow {
            name: entry.name.to_string(),
            calories: entry.calories,
        });
    }

    Some(ComparisonTables {
        macro_rows,
        calorie_rows,
    })
}

pub fn render_macro_table(rows: &[MacroRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<22} {:>10} {:>8} {:>6}",
        "Food", "Protein(g)", "Carbs(g)", "Fats(g)"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<22} {:>10} {:>8} {:>6}",
            row.name, row.protein, row.carbs, row.fats
        );
    }
    out
}

pub fn render_calorie_table(rows: &[CalorieRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<22} {:>14}", "Food", "Calories(kcal)");
    for row in rows {
        let _ = writeln!(out, "{:<22} {:>14}", row.name, row.calories);
    }
    out
}
