use serde::Serialize;

use crate::quantity::grammar::{classify_unit, scan_number, tokenize, Token, UnitKind};
use crate::text::fold_accents;

/// Portion text assumed when a food carries none.
pub const DEFAULT_PORTION: &str = "100g";

/// Generic unit label used when a portion has no numeric base.
pub const GENERIC_UNIT: &str = "unidade";

/// Parsed reference portion of a food.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferencePortion {
    /// Original portion text.
    pub text: String,
    pub base_amount: f64,
    pub unit: String,
    /// False when no number could be read; the food then scales only in
    /// whole multiples of its portion.
    pub has_numeric_base: bool,
}

impl ReferencePortion {
    fn generic(text: &str) -> Self {
        Self {
            text: text.to_string(),
            base_amount: 1.0,
            unit: GENERIC_UNIT.to_string(),
            has_numeric_base: false,
        }
    }

    pub fn unit_kind(&self) -> UnitKind {
        classify_unit(&fold_accents(&self.unit).to_lowercase())
    }

    /// Base amount in grams/millilitres for mass and volume units, the raw
    /// base amount otherwise.
    pub fn canonical_base(&self) -> f64 {
        match self.unit_kind().canonical_scale() {
            Some(scale) => self.base_amount * scale,
            None => self.base_amount,
        }
    }
}

/// `(50g)` / `(200 ml)` anywhere in the text.
fn parenthesized_measure(text: &str) -> Option<(f64, String)> {
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let close = after.find(')')?;
        let inner = &after[..close];

        if let [Token::Number(n), Token::Word(w), ..] = tokenize(inner).as_slice() {
            if (w == "g" || w == "ml") && *n > 0.0 {
                return Some((*n, w.clone()));
            }
        }
        rest = &after[close + 1..];
    }
    None
}

/// Parse a reference-portion string into a [`ReferencePortion`].
///
/// Never fails: text without a readable number yields the generic
/// `1 unidade` portion with `has_numeric_base = false`.
pub fn parse_portion(text: &str) -> ReferencePortion {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return parse_portion(DEFAULT_PORTION);
    }

    if let Some((amount, unit)) = parenthesized_measure(trimmed) {
        return ReferencePortion {
            text: trimmed.to_string(),
            base_amount: amount,
            unit,
            has_numeric_base: true,
        };
    }

    let chars: Vec<char> = trimmed.chars().collect();
    if let Some((amount, end)) = scan_number(&chars, 0) {
        if amount > 0.0 {
            let remainder: String = chars[end..].iter().collect();
            let unit = remainder.trim();
            return ReferencePortion {
                text: trimmed.to_string(),
                base_amount: amount,
                unit: if unit.is_empty() { "g" } else { unit }.to_string(),
                has_numeric_base: true,
            };
        }
    }

    ReferencePortion::generic(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mass() {
        let p = parse_portion("100g");
        assert_eq!(p.base_amount, 100.0);
        assert_eq!(p.unit, "g");
        assert!(p.has_numeric_base);
    }

    #[test]
    fn test_parenthesized_mass_wins() {
        let p = parse_portion("1 unidade (50g)");
        assert_eq!(p.base_amount, 50.0);
        assert_eq!(p.unit, "g");
        assert!(p.has_numeric_base);

        let p = parse_portion("1 copo (200 ml)");
        assert_eq!(p.base_amount, 200.0);
        assert_eq!(p.unit, "ml");
    }

    #[test]
    fn test_leading_number_with_unit_text() {
        let p = parse_portion("2 colheres de sopa");
        assert_eq!(p.base_amount, 2.0);
        assert_eq!(p.unit, "colheres de sopa");

        let p = parse_portion("1,5 xícara");
        assert_eq!(p.base_amount, 1.5);
        assert_eq!(p.unit, "xícara");
    }

    #[test]
    fn test_non_numeric_is_generic_unit() {
        let p = parse_portion("a gosto");
        assert_eq!(p.base_amount, 1.0);
        assert_eq!(p.unit, GENERIC_UNIT);
        assert!(!p.has_numeric_base);
        assert_eq!(p.text, "a gosto");
    }

    #[test]
    fn test_empty_defaults_to_100g() {
        let p = parse_portion("   ");
        assert_eq!(p.base_amount, 100.0);
        assert_eq!(p.unit, "g");
    }

    #[test]
    fn test_canonical_base_converts_kg() {
        assert_eq!(parse_portion("1kg").canonical_base(), 1000.0);
        assert_eq!(parse_portion("100g").canonical_base(), 100.0);
        assert_eq!(parse_portion("2 fatias").canonical_base(), 2.0);
    }
}
