use crate::quantity::grammar::UnitKind;
use crate::quantity::portion::{parse_portion, ReferencePortion};
use crate::text::fold_accents;

/// Smallest factor ever rendered.
pub const MIN_DISPLAY_FACTOR: f64 = 0.1;

/// Round to one decimal; integers render without a trailing ".0".
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if (rounded - rounded.round()).abs() < 1e-9 {
        format!("{}", rounded.round() as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Singular/plural form for the unit labels that get pluralized.
fn pluralize(unit: &str, total: f64) -> String {
    let folded = fold_accents(unit).to_lowercase();
    let singular = (total - 1.0).abs() < 0.05;
    match folded.as_str() {
        "unidade" | "unidades" => if singular { "unidade" } else { "unidades" }.to_string(),
        "fatia" | "fatias" => if singular { "fatia" } else { "fatias" }.to_string(),
        _ => unit.to_string(),
    }
}

/// Render a scale factor as human-readable quantity text.
///
/// Portions without a numeric base render as `"{factor}x {portion}"`;
/// everything else renders the total amount in the portion's unit.
pub fn format_quantity(factor: f64, portion: &ReferencePortion) -> String {
    let factor = if factor.is_finite() {
        factor.max(MIN_DISPLAY_FACTOR)
    } else {
        MIN_DISPLAY_FACTOR
    };

    if !portion.has_numeric_base {
        return format!("{}x {}", format_number(factor), portion.text);
    }

    let total = factor * portion.base_amount;
    match portion.unit_kind() {
        UnitKind::Mass(_) | UnitKind::Volume(_) => {
            format!("{}{}", format_number(total), portion.unit)
        }
        _ => format!(
            "{} {}",
            format_number(total),
            pluralize(&portion.unit, total)
        ),
    }
}

/// String-in form of [`format_quantity`].
pub fn format_quantity_from_factor(factor: f64, portion_text: &str) -> String {
    format_quantity(factor, &parse_portion(portion_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(1.25), "1.3");
        assert_eq!(format_number(149.96), "150");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_mass_portion() {
        assert_eq!(format_quantity_from_factor(2.0, "100g"), "200g");
        assert_eq!(format_quantity_from_factor(1.5, "1 unidade (50g)"), "75g");
        assert_eq!(format_quantity_from_factor(0.5, "200ml"), "100ml");
    }

    #[test]
    fn test_pluralization() {
        assert_eq!(format_quantity_from_factor(1.0, "1 unidade"), "1 unidade");
        assert_eq!(format_quantity_from_factor(2.0, "1 unidade"), "2 unidades");
        assert_eq!(format_quantity_from_factor(0.5, "2 fatias"), "1 fatia");
        assert_eq!(format_quantity_from_factor(3.0, "1 fatia"), "3 fatias");
        assert_eq!(format_quantity_from_factor(2.0, "1 colher"), "2 colher");
    }

    #[test]
    fn test_non_numeric_portion() {
        assert_eq!(format_quantity_from_factor(2.0, "a gosto"), "2x a gosto");
    }

    #[test]
    fn test_clamps_tiny_and_invalid_factors() {
        assert_eq!(format_quantity_from_factor(0.0, "100g"), "10g");
        assert_eq!(format_quantity_from_factor(f64::NAN, "100g"), "10g");
    }
}
