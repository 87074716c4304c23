//! End-to-end pipeline checks that stop short of the network: collaborator
//! reply -> parse -> comparison -> report document -> file export.

use food_analyzer::analysis::comparison::build_comparison;
use food_analyzer::analysis::response_parser::parse_nutrition_text;
use food_analyzer::report::assemble_report;
use food_analyzer::session::{AnalysisRecord, Session, SessionPhase};
use std::path::PathBuf;

const SAMPLE_REPLY: &str = "\
Here is my estimate for your meal:
- **Calories**: 550 kcal
- **Protein**: 25 g
- **Carbs**: 40 g
- **Fats**: 30 g
- **Notable Vitamins/Minerals**: Iron, Calcium, Vitamin B
**Food Name**: Cheeseburger
";

#[test]
fn parsed_reply_flows_into_comparison_and_report() {
    let facts = parse_nutrition_text(SAMPLE_REPLY);
    assert_eq!(facts.identity.name, "Cheeseburger");

    let tables = build_comparison(&facts.identity.name, &facts.macros)
        .expect("non-zero macros must produce comparison rows");
    assert_eq!(tables.macro_rows.len(), 10);
    assert_eq!(tables.macro_rows[0].name, "Cheeseburger");

    let report = assemble_report(
        &facts.identity.name,
        &facts.macros,
        "- Grilled Salmon: lower fats\n",
    );
    // 550/2000 kcal and 30/70 g fats against the fixed daily targets.
    assert!(report.contains("- Calories: 550 kcal (27.5% of daily need)"));
    assert!(report.contains("- Fats: 30 g (42.9%)"));
    assert!(report.contains("- Grilled Salmon: lower fats"));
}

#[test]
fn unusable_reply_degrades_to_defaults_and_no_chart() {
    let facts = parse_nutrition_text("I cannot identify this image.");
    assert_eq!(facts.identity.name, "Your Food");
    assert_eq!(facts.identity.vitamins, "None");
    assert!(build_comparison(&facts.identity.name, &facts.macros).is_none());

    // A defaulted parse is still a successful analysis.
    let mut session = Session::new();
    session.submit();
    session
        .complete(AnalysisRecord {
            identity: facts.identity,
            macros: facts.macros,
            raw_response: "I cannot identify this image.".to_string(),
            image_path: PathBuf::from("meal.jpg"),
        })
        .unwrap();
    assert_eq!(session.phase(), SessionPhase::Analyzed);
}

#[tokio::test]
async fn report_document_round_trips_through_the_filesystem() {
    let facts = parse_nutrition_text(SAMPLE_REPLY);
    let report = assemble_report(&facts.identity.name, &facts.macros, "- alternatives here");

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(format!("nutrition_report_{}.txt", facts.identity.name));
    tokio::fs::write(&path, &report).await.unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(written, report);
    assert!(written.starts_with("# Nutrition Report — Cheeseburger"));
}
