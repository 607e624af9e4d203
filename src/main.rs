use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use nutri_coach_rs::catalog::{load_catalog, merge_catalogs, FoodCatalog};
use nutri_coach_rs::cli::{Cli, Command};
use nutri_coach_rs::config::EngineConfig;
use nutri_coach_rs::error::{NutriError, Result};
use nutri_coach_rs::interface::{
    collect_profile, display_meal_plan, display_substitution, prompt_food_choice, prompt_yes_no,
    write_plan_csv, write_plan_json, PartialProfile,
};
use nutri_coach_rs::models::Macros;
use nutri_coach_rs::planner::generate_diet_plan_with_rng;
use nutri_coach_rs::quantity::{
    format_quantity_from_factor, parse_portion, resolve_quantity, ConsumedQuantity,
    QuantityFactor,
};
use nutri_coach_rs::substitution::{match_substitution, OriginalItem};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Resolve { quantity, portion } => cmd_resolve(&quantity, &portion),
        Command::Format { factor, portion } => cmd_format(factor, &portion),
        Command::Substitute {
            original,
            quantity,
            replacement,
            calories,
            protein,
            carbs,
            fat,
        } => {
            let catalog = open_catalog(&cli.catalog, cli.external.as_deref())?;
            let target = match (calories, protein, carbs, fat) {
                (Some(c), Some(p), Some(cb), Some(f)) => Some(Macros::new(c, p, cb, f)),
                _ => None,
            };
            cmd_substitute(&catalog, &config, &original, &quantity, &replacement, target)
        }
        Command::Generate {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
            seed,
            csv,
            json,
        } => {
            let catalog = open_catalog(&cli.catalog, cli.external.as_deref())?;
            let partial = PartialProfile {
                weight_kg: weight,
                height_cm: height,
                age_years: age,
                sex,
                activity_level: activity,
                goal,
            };
            cmd_generate(&catalog, &config, partial, seed, csv, json)
        }
    }
}

/// Load the local catalog and merge the external one under it.
fn open_catalog(path: &Path, external: Option<&Path>) -> Result<FoodCatalog> {
    if !path.exists() {
        return Err(NutriError::InvalidInput(format!(
            "Food catalog not found: {}",
            path.display()
        )));
    }
    let local = load_catalog(path)?;

    let foods = match external {
        Some(path) => merge_catalogs(local, load_catalog(path)?),
        None => local,
    };

    let catalog = FoodCatalog::new(foods);
    tracing::info!(foods = catalog.len(), "catalog ready");
    Ok(catalog)
}

/// Print the portion factor for a consumed quantity.
fn cmd_resolve(quantity: &str, portion: &str) -> Result<()> {
    let reference = parse_portion(portion);
    match resolve_quantity(quantity, &reference) {
        QuantityFactor::Resolved(factor) => {
            println!("{}", factor);
            println!(
                "= {} of {}",
                format_quantity_from_factor(factor, portion),
                reference.text
            );
        }
        QuantityFactor::Unresolved => println!("unresolved"),
    }
    Ok(())
}

/// Print a factor as a quantity of the reference portion.
fn cmd_format(factor: f64, portion: &str) -> Result<()> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "Factor must be a non-negative number, got {}",
            factor
        )));
    }
    println!("{}", format_quantity_from_factor(factor, portion));
    Ok(())
}

/// Match a replacement food to an original one.
fn cmd_substitute(
    catalog: &FoodCatalog,
    config: &EngineConfig,
    original: &str,
    quantity: &str,
    replacement: &str,
    target: Option<Macros>,
) -> Result<()> {
    let original_food = prompt_food_choice(catalog, original)?;
    let replacement_food = prompt_food_choice(catalog, replacement)?;

    let mut item = OriginalItem::new(original_food, ConsumedQuantity::Text(quantity.to_string()));
    if let Some(t) = target {
        item = item.with_target(t);
    }

    let result = match_substitution(&item, replacement_food, &config.matcher)?;
    display_substitution(original_food, replacement_food, &result);
    Ok(())
}

/// Generate, display and optionally export a daily plan.
fn cmd_generate(
    catalog: &FoodCatalog,
    config: &EngineConfig,
    partial: PartialProfile,
    seed: Option<u64>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    if catalog.is_empty() {
        println!("The catalog is empty; meals will have no foods.");
    }

    let profile = collect_profile(partial)?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let plan = generate_diet_plan_with_rng(&profile, catalog.foods(), &config.generator, &mut rng);

    display_meal_plan(&plan);

    if let Some(path) = csv {
        if !path.exists() || prompt_yes_no(&format!("Overwrite {}?", path.display()), false)? {
            write_plan_csv(&plan, &path)?;
            println!("Plan written to {}", path.display());
        }
    }

    if let Some(path) = json {
        if !path.exists() || prompt_yes_no(&format!("Overwrite {}?", path.display()), false)? {
            write_plan_json(&plan, &path)?;
            println!("Plan written to {}", path.display());
        }
    }

    Ok(())
}
