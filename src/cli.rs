use clap::Parser;
use std::fmt;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the food image file (jpg, jpeg or png)
    #[arg(short, long)]
    pub image_file: String,

    /// Portion weight in grams
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=10000), conflicts_with = "servings")]
    pub weight: Option<u32>,

    /// Number of servings
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub servings: Option<u32>,

    /// Where to write the nutrition report (defaults to nutrition_report_<food name>.txt)
    #[arg(long)]
    pub report_file: Option<String>,
}

pub const DEFAULT_WEIGHT_GRAMS: u32 = 100;

/// User-supplied quantity context passed to the AI collaborator to scale
/// its estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portion {
    Weight(u32),
    Servings(u32),
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Portion::Weight(grams) => write!(f, "{} grams", grams),
            Portion::Servings(count) => write!(f, "{} serving(s)", count),
        }
    }
}

impl Cli {
    pub fn portion(&self) -> Portion {
        match (self.weight, self.servings) {
            (_, Some(count)) => Portion::Servings(count),
            (Some(grams), None) => Portion::Weight(grams),
            (None, None) => Portion::Weight(DEFAULT_WEIGHT_GRAMS),
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
