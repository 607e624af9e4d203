use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Goal, Sex};

/// nutri-coach: portion parsing, food substitution and daily diet plans.
#[derive(Parser, Debug)]
#[command(name = "nutri-coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the local food catalog (JSON or CSV).
    #[arg(short, long, global = true, default_value = "foods.json")]
    pub catalog: PathBuf,

    /// Optional external catalog merged under the local one.
    #[arg(short, long, global = true)]
    pub external: Option<PathBuf>,

    /// TOML file overriding the engine tunables.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a consumed quantity into reference portions.
    Resolve {
        /// Free-text quantity, e.g. "200g" or "2 x".
        quantity: String,

        /// Reference portion of the food.
        #[arg(short, long, default_value = "100g")]
        portion: String,
    },

    /// Render a portion factor as a human-readable quantity.
    Format {
        factor: f64,

        /// Reference portion of the food.
        #[arg(short, long, default_value = "100g")]
        portion: String,
    },

    /// Find how much of a replacement food matches an original one.
    Substitute {
        /// Name of the food being replaced.
        #[arg(short, long)]
        original: String,

        /// How much of the original was planned, e.g. "150g".
        #[arg(short, long, default_value = "1")]
        quantity: String,

        /// Name of the replacement food.
        #[arg(short, long)]
        replacement: String,

        /// Explicit target calories. Given together with the three macros,
        /// the targets replace the quantity.
        #[arg(long, requires = "protein")]
        calories: Option<f64>,

        #[arg(long, requires = "carbs")]
        protein: Option<f64>,

        #[arg(long, requires = "fat")]
        carbs: Option<f64>,

        #[arg(long, requires = "calories")]
        fat: Option<f64>,
    },

    /// Generate a daily meal plan for a person.
    Generate {
        /// Body weight in kg.
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm.
        #[arg(long)]
        height: Option<f64>,

        /// Age in years.
        #[arg(long)]
        age: Option<f64>,

        #[arg(long, value_enum)]
        sex: Option<Sex>,

        #[arg(long, value_enum)]
        activity: Option<ActivityLevel>,

        #[arg(long, value_enum)]
        goal: Option<Goal>,

        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Also export the plan as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also export the plan as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}
