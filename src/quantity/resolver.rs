use serde::{Deserialize, Serialize};

use crate::quantity::grammar::{parse_quantity, QuantityExpr, UnitKind};
use crate::quantity::portion::{parse_portion, ReferencePortion};

/// Reference portions at or above this base amount are large masses or
/// volumes, so a bare number next to an unknown word is read as an amount.
pub const LARGE_BASE_THRESHOLD: f64 = 20.0;

/// Result of resolving consumed-quantity text against a reference portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum QuantityFactor {
    /// Number of reference portions, always positive and finite.
    Resolved(f64),
    Unresolved,
}

impl QuantityFactor {
    fn from_value(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            QuantityFactor::Resolved(value)
        } else {
            QuantityFactor::Unresolved
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            QuantityFactor::Resolved(f) => Some(*f),
            QuantityFactor::Unresolved => None,
        }
    }

    /// Legacy numeric form: the factor, or 0 when unresolved.
    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, QuantityFactor::Resolved(_))
    }
}

/// How much of a food was (or will be) consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsumedQuantity {
    Factor(f64),
    Text(String),
}

impl ConsumedQuantity {
    pub fn resolve(&self, portion: &ReferencePortion) -> QuantityFactor {
        match self {
            ConsumedQuantity::Factor(f) => QuantityFactor::from_value(*f),
            ConsumedQuantity::Text(text) => resolve_quantity(text, portion),
        }
    }
}

fn pure_number(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    normalized.parse::<f64>().ok()
}

/// Resolve consumed-quantity text into a number of reference portions.
///
/// Rules, first match wins:
/// 1. a pure number is the factor itself (non-positive is unresolved);
/// 2. a multiplier marker ("2x") is the literal multiplier;
/// 3. mass/volume is divided by the portion's base amount;
/// 4. discrete units (slices, spoons, units...) are a literal count;
/// 5. anything else divides by the base amount only when that base is a
///    large mass (>= 20), otherwise it is a literal count.
pub fn resolve_quantity(text: &str, portion: &ReferencePortion) -> QuantityFactor {
    if let Some(n) = pure_number(text) {
        return QuantityFactor::from_value(n);
    }

    let factor = match parse_quantity(text) {
        QuantityExpr::Bare(n) | QuantityExpr::Multiplier(n) => QuantityFactor::from_value(n),
        QuantityExpr::Measure { amount, unit } => match unit {
            UnitKind::Mass(scale) | UnitKind::Volume(scale) => {
                QuantityFactor::from_value(amount * scale / portion.canonical_base())
            }
            UnitKind::Discrete => QuantityFactor::from_value(amount),
            UnitKind::Other => {
                let base = portion.canonical_base();
                if base >= LARGE_BASE_THRESHOLD {
                    QuantityFactor::from_value(amount / base)
                } else {
                    QuantityFactor::from_value(amount)
                }
            }
        },
        QuantityExpr::Empty => QuantityFactor::Unresolved,
    };

    if factor == QuantityFactor::Unresolved {
        tracing::debug!(quantity = text, portion = %portion.text, "quantity left unresolved");
    }

    factor
}

/// String-in, number-out form of [`resolve_quantity`]: 0 means unresolved.
pub fn resolve_quantity_factor(quantity_text: &str, portion_text: &str) -> f64 {
    resolve_quantity(quantity_text, &parse_portion(portion_text)).or_zero()
}
