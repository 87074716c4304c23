use anyhow::{Context, Result};
use food_analyzer::analysis::comparison::{
    build_comparison, render_calorie_table, render_macro_table,
};
use food_analyzer::analysis::response_parser::parse_nutrition_text;
use food_analyzer::cli::parse_args;
use food_analyzer::image_intake::load_image;
use food_analyzer::insights::InsightClient;
use food_analyzer::report::{self, daily_percentages, DAILY_TARGETS};
use food_analyzer::session::{AnalysisRecord, Session};
use std::path::Path;
use tokio::fs;

// Define the environment variable name for the API key
const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for API keys
    env_logger::init();

    let cli_args = parse_args();
    let mut session = Session::new();

    println!("Attempting to read food image: {}", cli_args.image_file);
    let image = load_image(Path::new(&cli_args.image_file))
        .await
        .with_context(|| format!("Failed to load food image '{}'", cli_args.image_file))?;

    let portion = cli_args.portion().to_string();
    let client = InsightClient::new(API_KEY_ENV_VAR);

    session.submit();
    println!("\nAnalyzing your food image (portion: {})...", portion);

    // The nutrition estimate and the health tips run concurrently; both are
    // required before the pipeline continues.
    let analysis = tokio::try_join!(
        client.nutrition_estimate(&image, &portion),
        client.health_tips(&portion)
    );
    let (nutrition_text, health_tips) = match analysis {
        Ok(results) => results,
        Err(e) => {
            session.fail()?;
            eprintln!("\nError analyzing food image: {}", e);
            return Err(anyhow::anyhow!("Food analysis failed: {}", e));
        }
    };

    let facts = parse_nutrition_text(&nutrition_text);
    let food_name = facts.identity.name.clone();
    let vitamins = facts.identity.vitamins.clone();
    let macros = facts.macros;

    session.complete(AnalysisRecord {
        identity: facts.identity,
        macros,
        raw_response: nutrition_text,
        image_path: image.path.clone(),
    })?;
    println!("Analysis complete.");

    // Nutritional breakdown against the fixed daily targets.
    let pct = daily_percentages(&macros, &DAILY_TARGETS);
    println!("\nNutritional Breakdown: {}", food_name);
    println!(
        "- Calories: {} kcal ({:.1}% of daily intake)",
        macros.calories, pct.calories
    );
    println!(
        "- Protein: {} g ({:.1}% of daily need)",
        macros.protein, pct.protein
    );
    println!(
        "- Carbs: {} g ({:.1}% of daily need)",
        macros.carbs, pct.carbs
    );
    println!("- Fats: {} g ({:.1}% of daily need)", macros.fats, pct.fats);
    println!("- Notable Vitamins/Minerals: {}", vitamins);

    if !macros.has_macro_data() {
        println!(
            "\n⚠️ No valid nutrition data detected. Please check the image quality or the food item."
        );
    }

    println!("\nNutritional Comparisons");
    match build_comparison(&food_name, &macros) {
        Some(tables) => {
            println!("\n{}", render_macro_table(&tables.macro_rows));
            println!("{}", render_calorie_table(&tables.calorie_rows));
        }
        None => println!("⚠️ No valid macronutrient data to compare."),
    }

    println!("\nHealth Tips\n{}", health_tips);

    println!("\nFinding healthier options...");
    let alternatives = client
        .healthier_alternatives(&macros)
        .await
        .context("Failed to fetch healthier alternatives")?;
    println!("\nHealthier Alternatives\n{}", alternatives);

    println!("\nGenerating detailed food analysis...");
    let details = client
        .food_details(&food_name, &macros, &vitamins)
        .await
        .context("Failed to fetch food details")?;
    println!("\nDetailed Food Analysis: {}\n{}", food_name, details);

    println!("\nGenerating recipe ideas...");
    let recipes = client
        .recipe_suggestions(&food_name)
        .await
        .context("Failed to fetch recipe suggestions")?;
    println!("\nRecipe Suggestions for {}\n{}", food_name, recipes);

    // The alternatives reply is memoized, so report assembly reuses it
    // instead of asking the collaborator again.
    let report_text = report::generate_report(&food_name, &macros, &client)
        .await
        .context("Failed to generate nutrition report")?;
    let report_path = cli_args
        .report_file
        .unwrap_or_else(|| format!("nutrition_report_{}.txt", food_name));
    fs::write(&report_path, &report_text)
        .await
        .with_context(|| format!("Failed to write nutrition report to '{}'", report_path))?;
    println!("\nFull nutrition report written to {}", report_path);

    Ok(())
}
