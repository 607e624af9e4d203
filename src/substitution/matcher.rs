use crate::config::MatcherConfig;
use crate::error::{NutriError, Result};
use crate::models::{FoodNutrition, Macros, SubstitutionMatch};
use crate::quantity::{format_quantity, parse_portion, ConsumedQuantity, QuantityFactor};
use crate::substitution::constants::{MAX_FACTOR, MIN_FACTOR};

/// Picks a replacement factor for a set of target totals.
///
/// Implementations must return a finite factor; the default is
/// [`WeightedDeviation`]. Whatever they return is clamped to [`bounds`].
///
/// [`bounds`]: MatchStrategy::bounds
pub trait MatchStrategy {
    fn best_factor(&self, target: &Macros, per_portion: &Macros) -> f64;

    /// Inclusive `(min, max)` range for the factor.
    fn bounds(&self) -> (f64, f64) {
        (MIN_FACTOR, MAX_FACTOR)
    }
}

/// A scored replacement factor.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    factor: f64,
    score: f64,
}

/// `|actual - target| / max(|target|, floor)`.
#[inline]
pub fn relative_deviation(actual: f64, target: f64, floor: f64) -> f64 {
    (actual - target).abs() / target.abs().max(floor)
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Candidate-generation + weighted relative-deviation scoring.
///
/// Candidates, in order: the factor matching each macro alone (only for
/// macros the replacement actually has), their mean, then the baseline.
/// Lowest score wins; on ties the earlier candidate is kept.
#[derive(Debug, Clone, Default)]
pub struct WeightedDeviation {
    config: MatcherConfig,
}

impl WeightedDeviation {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Unclamped candidate factors in evaluation order.
    pub fn candidate_factors(&self, target: &Macros, per_portion: &Macros) -> Vec<f64> {
        let mut factors: Vec<f64> = target
            .as_array()
            .into_iter()
            .zip(per_portion.as_array())
            .filter(|(_, per)| *per > 0.0)
            .map(|(t, per)| t / per)
            .filter(|f| f.is_finite())
            .collect();

        if !factors.is_empty() {
            let mean = factors.iter().sum::<f64>() / factors.len() as f64;
            factors.push(mean);
        }
        factors.push(self.config.baseline_factor);
        factors
    }

    /// Weighted deviation of `totals` from `target`. Lower is better.
    pub fn score(&self, totals: &Macros, target: &Macros) -> f64 {
        let weights = self.config.weights();
        let floors = self.config.floors();
        totals
            .as_array()
            .into_iter()
            .zip(target.as_array())
            .zip(weights.into_iter().zip(floors))
            .map(|((actual, t), (w, floor))| w * relative_deviation(actual, t, floor))
            .sum()
    }

    fn clamp(&self, factor: f64) -> f64 {
        factor.max(self.config.min_factor).min(self.config.max_factor)
    }
}

impl MatchStrategy for WeightedDeviation {
    fn best_factor(&self, target: &Macros, per_portion: &Macros) -> f64 {
        let mut best: Option<Candidate> = None;

        for raw in self.candidate_factors(target, per_portion) {
            let factor = self.clamp(raw);
            let totals = per_portion.scale(factor);
            let score = self.score(&totals, target);

            tracing::trace!(factor, score, "substitution candidate");

            match best {
                Some(b) if score >= b.score => {}
                _ => best = Some(Candidate { factor, score }),
            }
        }

        let factor = best.map_or(self.config.baseline_factor, |c| c.factor);
        self.clamp(round2(factor))
    }

    fn bounds(&self) -> (f64, f64) {
        (self.config.min_factor, self.config.max_factor)
    }
}

/// The food being replaced and how much of it the totals should match.
#[derive(Debug, Clone)]
pub struct OriginalItem<'a> {
    pub food: &'a FoodNutrition,
    pub quantity: ConsumedQuantity,
    /// Explicit totals to match; takes precedence over `quantity`.
    pub target: Option<Macros>,
}

impl<'a> OriginalItem<'a> {
    pub fn new(food: &'a FoodNutrition, quantity: ConsumedQuantity) -> Self {
        Self {
            food,
            quantity,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Macros) -> Self {
        self.target = Some(target);
        self
    }

    /// Totals the replacement should reproduce. Always finite and
    /// non-negative.
    pub fn target_totals(&self) -> Result<Macros> {
        let raw = match self.target {
            Some(target) => target,
            None => {
                let portion = parse_portion(&self.food.portion);
                match self.quantity.resolve(&portion) {
                    QuantityFactor::Resolved(f) => self.food.macros().scale(f),
                    QuantityFactor::Unresolved => {
                        return Err(NutriError::UnparseableQuantity(format!(
                            "{:?} for {} ({})",
                            self.quantity, self.food.name, self.food.portion
                        )));
                    }
                }
            }
        };

        let clean = raw.sanitized();
        Ok(Macros::new(
            clean.calories.max(0.0),
            clean.protein.max(0.0),
            clean.carbs.max(0.0),
            clean.fat.max(0.0),
        ))
    }
}

/// Match `replacement` against `original` using a custom strategy.
pub fn match_substitution_with<S: MatchStrategy + ?Sized>(
    strategy: &S,
    original: &OriginalItem<'_>,
    replacement: &FoodNutrition,
) -> Result<SubstitutionMatch> {
    if !replacement.has_usable_calories() {
        return Err(NutriError::InvalidReplacementFood(format!(
            "{} has {} kcal per portion",
            replacement.name, replacement.calories
        )));
    }

    let target = original.target_totals()?;
    let per_portion = replacement.macros().sanitized();

    let raw = strategy.best_factor(&target, &per_portion);
    if !raw.is_finite() || raw <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "strategy produced factor {} for {}",
            raw, replacement.name
        )));
    }

    let (min, max) = strategy.bounds();
    let factor = raw.max(min).min(max);
    if factor != raw {
        tracing::warn!(raw, factor, "strategy factor outside bounds, clamped");
    }

    let matched = per_portion.scale(factor).sanitized();
    let deltas = (matched - target).sanitized();
    let quantity = format_quantity(factor, &parse_portion(&replacement.portion));

    tracing::debug!(
        original = %original.food.name,
        replacement = %replacement.name,
        factor,
        quantity = %quantity,
        "substitution matched"
    );

    Ok(SubstitutionMatch {
        factor,
        matched,
        target,
        quantity,
        deltas,
    })
}

/// Match `replacement` against `original` with the default weighted scoring.
pub fn match_substitution(
    original: &OriginalItem<'_>,
    replacement: &FoodNutrition,
    config: &MatcherConfig,
) -> Result<SubstitutionMatch> {
    config.validate()?;
    let strategy = WeightedDeviation::new(config.clone());
    match_substitution_with(&strategy, original, replacement)
}
