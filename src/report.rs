//! Daily-intake percentages, the suggestion rule table and assembly of the
//! downloadable nutrition report.

use chrono::Local;

use crate::analysis::response_parser::MacroRecord;
use crate::api_connection::connection::ApiConnectionError;
use crate::insights::InsightClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTargets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// Fixed reference intake, used only as percentage denominators.
pub const DAILY_TARGETS: DailyTargets = DailyTargets {
    calories: 2000,
    protein: 50,
    carbs: 275,
    fats: 70,
};

pub const BALANCED_MEAL_NOTE: &str = "✅ This meal looks balanced for your goals!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroPercentages {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

pub fn daily_percentages(macros: &MacroRecord, targets: &DailyTargets) -> MacroPercentages {
    MacroPercentages {
        calories: f64::from(macros.calories) / f64::from(targets.calories) * 100.0,
        protein: f64::from(macros.protein) / f64::from(targets.protein) * 100.0,
        carbs: f64::from(macros.carbs) / f64::from(targets.carbs) * 100.0,
        fats: f64::from(macros.fats) / f64::from(targets.fats) * 100.0,
    }
}

/// The suggestion rule table. Rules are evaluated independently, in this
/// order, against the unrounded percentages; any subset can fire.
pub fn suggestion_lines(pct: &MacroPercentages) -> Vec<&'static str> {
    let mut suggestions = Vec::new();
    if pct.fats > 70.0 {
        suggestions.push("🔁 Try reducing the oil or butter used during cooking.");
    }
    if pct.carbs > 80.0 {
        suggestions.push("🥗 Consider pairing with a low-carb side like salad or sautéed greens.");
    }
    if pct.calories > 60.0 {
        suggestions.push("🔥 Opt for grilling or steaming instead of frying.");
    }
    if pct.protein < 40.0 {
        suggestions.push("💪 Add a boiled egg, lentils, or a protein shake to boost protein intake.");
    }
    suggestions
}

pub fn suggestions_text(pct: &MacroPercentages) -> String {
    let suggestions = suggestion_lines(pct);
    if suggestions.is_empty() {
        BALANCED_MEAL_NOTE.to_string()
    } else {
        suggestions.join("\n")
    }
}

/// Assemble the report document from already-fetched alternatives text.
/// Section order is fixed: header, breakdown, suggestions, alternatives.
pub fn assemble_report(name: &str, macros: &MacroRecord, alternatives_text: &str) -> String {
    let pct = daily_percentages(macros, &DAILY_TARGETS);
    format!(
        "\
# Nutrition Report — {name}
Date: {date}

## Nutritional Breakdown
- Calories: {calories} kcal ({cal_pct:.1}% of daily need)
- Protein: {protein} g ({protein_pct:.1}%)
- Carbs: {carbs} g ({carbs_pct:.1}%)
- Fats: {fats} g ({fats_pct:.1}%)

## Healthier Suggestions
{suggestions}

### 🍽 Healthier Alternative Suggestions:
{alternatives_text}
",
        date = Local::now().format("%Y-%m-%d %H:%M"),
        calories = macros.calories,
        cal_pct = pct.calories,
        protein = macros.protein,
        protein_pct = pct.protein,
        carbs = macros.carbs,
        carbs_pct = pct.carbs,
        fats = macros.fats,
        fats_pct = pct.fats,
        suggestions = suggestions_text(&pct),
    )
}

/// Fetch the healthier alternatives from the collaborator and assemble the
/// full report. Synchronous with respect to the session; collaborator
/// failures propagate to the caller.
pub async fn generate_report(
    name: &str,
    macros: &MacroRecord,
    client: &InsightClient,
) -> Result<String, ApiConnectionError> {
    let alternatives_text = client.healthier_alternatives(macros).await?;
    Ok(assemble_report(name, macros, &alternatives_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_use_the_fixed_targets() {
        let macros = MacroRecord {
            calories: 1000,
            protein: 25,
            carbs: 55,
            fats: 35,
        };
        let pct = daily_percentages(&macros, &DAILY_TARGETS);
        assert!((pct.calories - 50.0).abs() < 1e-9);
        assert!((pct.protein - 50.0).abs() < 1e-9);
        assert!((pct.carbs - 20.0).abs() < 1e-9);
        assert!((pct.fats - 50.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_are_monotonic_in_the_macro_value() {
        let single = MacroRecord {
            protein: 20,
            ..MacroRecord::default()
        };
        let double = MacroRecord {
            protein: 40,
            ..MacroRecord::default()
        };
        let single_pct = daily_percentages(&single, &DAILY_TARGETS);
        let double_pct = daily_percentages(&double, &DAILY_TARGETS);
        assert!((double_pct.protein - 2.0 * single_pct.protein).abs() < 1e-9);
    }

    #[test]
    fn two_rules_fire_in_declared_order() {
        // calories 65% > 60 and protein 30% < 40; fats and carbs stay under
        // their thresholds.
        let macros = MacroRecord {
            calories: 1300,
            protein: 15,
            carbs: 100,
            fats: 40,
        };
        let pct = daily_percentages(&macros, &DAILY_TARGETS);
        let suggestions = suggestion_lines(&pct);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("grilling or steaming"));
        assert!(suggestions[1].contains("boost protein intake"));
    }

    #[test]
    fn all_four_rules_can_fire_together() {
        let macros = MacroRecord {
            calories: 1900,
            protein: 10,
            carbs: 260,
            fats: 65,
        };
        let pct = daily_percentages(&macros, &DAILY_TARGETS);
        let suggestions = suggestion_lines(&pct);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].contains("oil or butter"));
        assert!(suggestions[1].contains("low-carb side"));
    }

    #[test]
    fn balanced_record_yields_the_single_affirmation() {
        let macros = MacroRecord {
            calories: 800,
            protein: 30,
            carbs: 80,
            fats: 20,
        };
        let pct = daily_percentages(&macros, &DAILY_TARGETS);
        assert!(suggestion_lines(&pct).is_empty());
        assert_eq!(suggestions_text(&pct), BALANCED_MEAL_NOTE);
    }

    #[test]
    fn report_sections_appear_in_fixed_order() {
        let macros = MacroRecord {
            calories: 350,
            protein: 15,
            carbs: 45,
            fats: 12,
        };
        let report = assemble_report("Chicken Biryani", &macros, "- Grilled Salmon ...");
        let title = report.find("# Nutrition Report — Chicken Biryani").unwrap();
        let breakdown = report.find("## Nutritional Breakdown").unwrap();
        let suggestions = report.find("## Healthier Suggestions").unwrap();
        let alternatives = report
            .find("### 🍽 Healthier Alternative Suggestions:")
            .unwrap();
        assert!(title < breakdown && breakdown < suggestions && suggestions < alternatives);
        assert!(report.contains("- Calories: 350 kcal (17.5% of daily need)"));
        assert!(report.contains("- Protein: 15 g (30.0%)"));
        assert!(report.contains("- Grilled Salmon ..."));
    }
}
