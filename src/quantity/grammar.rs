//! Tokenizer and grammar for free-text quantities.
//!
//! Coach-authored quantity text ("200g", "2x", "1 unidade (50g)",
//! "meia xícara", "2 100g") is lexed into [`Token`]s and reduced to a single
//! [`QuantityExpr`]. The grammar never fails: text without a usable number
//! becomes [`QuantityExpr::Empty`].

use crate::text::fold_accents;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// Multiplier marker: `x`, `×` or `*` attached to a number.
    Times,
    /// Lowercased, accent-folded word.
    Word(String),
}

/// Classification of a unit word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitKind {
    /// Mass, with the number of grams in one unit.
    Mass(f64),
    /// Volume, with the number of millilitres in one unit.
    Volume(f64),
    /// Countable household unit (slice, spoon, cup...). Already a portion.
    Discrete,
    Other,
}

impl UnitKind {
    /// Scale to grams/millilitres for mass and volume units.
    pub fn canonical_scale(&self) -> Option<f64> {
        match self {
            UnitKind::Mass(s) | UnitKind::Volume(s) => Some(*s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuantityExpr {
    /// A lone number with nothing else around it.
    Bare(f64),
    /// "2x", "2 x 1 unidade".
    Multiplier(f64),
    /// A number (or product of adjacent numbers) followed by a unit word or
    /// by nothing usable.
    Measure { amount: f64, unit: UnitKind },
    /// No number found.
    Empty,
}

const DISCRETE_UNITS: &[&str] = &[
    "unidade", "unidades", "un", "und", "unid", "fatia", "fatias", "colher", "colheres",
    "colherada", "colheradas", "scoop", "scoops", "medida", "medidas", "xicara", "xicaras",
    "copo", "copos", "porcao", "porcoes", "pote", "potes", "pedaco", "pedacos", "concha",
    "conchas", "lata", "latas", "unit", "units", "slice", "slices", "spoon", "spoons", "tbsp",
    "tsp", "cup", "cups", "piece", "pieces", "serving", "servings", "portion", "portions",
];

/// Classify a folded, lowercased unit word.
pub fn classify_unit(word: &str) -> UnitKind {
    match word {
        "g" | "gr" | "grs" | "grama" | "gramas" | "gram" | "grams" => UnitKind::Mass(1.0),
        "kg" | "quilo" | "quilos" | "kilo" | "kilos" => UnitKind::Mass(1000.0),
        "mg" => UnitKind::Mass(0.001),
        "ml" | "mililitro" | "mililitros" => UnitKind::Volume(1.0),
        "l" | "litro" | "litros" | "liter" | "liters" => UnitKind::Volume(1000.0),
        w if DISCRETE_UNITS.contains(&w) => UnitKind::Discrete,
        _ => UnitKind::Other,
    }
}

fn number_word(word: &str) -> Option<f64> {
    match word {
        "meia" | "meio" | "half" => Some(0.5),
        "um" | "uma" | "one" => Some(1.0),
        _ => None,
    }
}

/// Scan a number starting at `start`: digits, an optional `.`/`,` decimal
/// part and an optional `/denominator`.
///
/// Returns the value and the index just past it.
pub fn scan_number(chars: &[char], start: usize) -> Option<(f64, usize)> {
    let digits_end = |from: usize| {
        let mut i = from;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_end(start);
    if int_end == start {
        return None;
    }

    let mut end = int_end;
    let mut literal: String = chars[start..int_end].iter().collect();

    if end + 1 < chars.len() && (chars[end] == '.' || chars[end] == ',') {
        let frac_end = digits_end(end + 1);
        if frac_end > end + 1 {
            literal.push('.');
            literal.extend(&chars[end + 1..frac_end]);
            end = frac_end;
        }
    }

    let mut value: f64 = literal.parse().ok()?;

    if end + 1 < chars.len() && chars[end] == '/' {
        let denom_end = digits_end(end + 1);
        if denom_end > end + 1 {
            let denom: f64 = chars[end + 1..denom_end]
                .iter()
                .collect::<String>()
                .parse()
                .ok()?;
            if denom > 0.0 {
                value /= denom;
                end = denom_end;
            }
        }
    }

    Some((value, end))
}

/// Whether `chars[start..end]` is a proper fraction such as `1/2`.
fn is_proper_fraction(chars: &[char], start: usize, end: usize, value: f64) -> bool {
    chars[start..end].contains(&'/') && value < 1.0
}

/// Lex quantity text into tokens.
///
/// A `-` directly before a number (and not after a digit, as in `1-2`)
/// makes it negative. An integer followed by a proper fraction ("1 1/2")
/// becomes one mixed number.
pub fn tokenize(text: &str) -> Vec<Token> {
    let folded = fold_accents(text).to_lowercase();
    let chars: Vec<char> = folded.chars().collect();
    let mut tokens = Vec::new();
    // End index of the last number token, for mixed numbers.
    let mut last_number_end: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        let negative = c == '-'
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit())
            && (i == 0 || !chars[i - 1].is_ascii_digit());
        let start = if negative { i + 1 } else { i };

        if negative || c.is_ascii_digit() {
            if let Some((value, end)) = scan_number(&chars, start) {
                let mixed_with = match (tokens.last(), last_number_end) {
                    (Some(Token::Number(whole)), Some(prev_end))
                        if !negative
                            && whole.fract() == 0.0
                            && prev_end < start
                            && chars[prev_end..start].iter().all(|c| c.is_whitespace())
                            && is_proper_fraction(&chars, start, end, value) =>
                    {
                        Some(*whole)
                    }
                    _ => None,
                };

                match mixed_with {
                    Some(whole) => {
                        let sign = if whole < 0.0 { -1.0 } else { 1.0 };
                        tokens.pop();
                        tokens.push(Token::Number(whole + sign * value));
                    }
                    None => tokens.push(Token::Number(if negative { -value } else { value })),
                }

                i = end;
                last_number_end = Some(end);
                // "2x" but not "2xicaras"
                if i < chars.len()
                    && chars[i] == 'x'
                    && chars.get(i + 1).is_none_or(|n| !n.is_alphabetic())
                {
                    tokens.push(Token::Times);
                    i += 1;
                    last_number_end = None;
                }
                continue;
            }
        }

        if c == '×' || c == '*' {
            tokens.push(Token::Times);
            i += 1;
            last_number_end = None;
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            if word == "x" && matches!(tokens.last(), Some(Token::Number(_))) {
                tokens.push(Token::Times);
            } else if let Some(value) = number_word(&word) {
                tokens.push(Token::Number(value));
            } else {
                tokens.push(Token::Word(word));
            }
            last_number_end = None;
            continue;
        }

        // Whitespace, parentheses, punctuation: separators.
        i += 1;
    }

    tokens
}

/// Product of the run of numbers ending just before `idx`.
fn number_run_before(tokens: &[Token], idx: usize) -> f64 {
    tokens[..idx]
        .iter()
        .rev()
        .map_while(|t| match t {
            Token::Number(n) => Some(*n),
            _ => None,
        })
        .product()
}

/// Reduce a token stream to a quantity expression.
///
/// Priority: a multiplier marker, then any number followed by a mass or
/// volume unit ("1 unidade (50g)" is 50 g), then the first number run and
/// the word after it.
pub fn parse_tokens(tokens: &[Token]) -> QuantityExpr {
    let Some(first_num) = tokens.iter().position(|t| matches!(t, Token::Number(_))) else {
        return QuantityExpr::Empty;
    };

    for pair in tokens.windows(2) {
        if let [Token::Number(n), Token::Times] = pair {
            return QuantityExpr::Multiplier(*n);
        }
    }

    let measured = tokens.windows(2).position(|pair| {
        matches!(pair, [Token::Number(_), Token::Word(w)]
            if matches!(classify_unit(w), UnitKind::Mass(_) | UnitKind::Volume(_)))
    });
    if let Some(pos) = measured {
        let unit_idx = pos + 1;
        if let Token::Word(w) = &tokens[unit_idx] {
            return QuantityExpr::Measure {
                amount: number_run_before(tokens, unit_idx),
                unit: classify_unit(w),
            };
        }
    }

    // Adjacent numbers before the unit are multiplied ("2 100g" -> 200g).
    let mut amount = 1.0;
    let mut count = 0;
    let mut idx = first_num;
    while let Some(Token::Number(n)) = tokens.get(idx) {
        amount *= n;
        count += 1;
        idx += 1;
    }

    match tokens.get(idx) {
        Some(Token::Word(w)) => QuantityExpr::Measure {
            amount,
            unit: classify_unit(w),
        },
        None if count == 1 && tokens.len() == 1 => QuantityExpr::Bare(amount),
        _ => QuantityExpr::Measure {
            amount,
            unit: UnitKind::Other,
        },
    }
}

/// Tokenize and parse in one step.
pub fn parse_quantity(text: &str) -> QuantityExpr {
    parse_tokens(&tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mass() {
        assert_eq!(
            tokenize("200g"),
            vec![Token::Number(200.0), Token::Word("g".to_string())]
        );
    }

    #[test]
    fn test_tokenize_decimal_comma_and_fraction() {
        assert_eq!(tokenize("1,5"), vec![Token::Number(1.5)]);
        assert_eq!(tokenize("1/2"), vec![Token::Number(0.5)]);
    }

    #[test]
    fn test_tokenize_multiplier_not_word() {
        assert_eq!(tokenize("2x"), vec![Token::Number(2.0), Token::Times]);
        assert_eq!(
            tokenize("2xicaras"),
            vec![Token::Number(2.0), Token::Word("xicaras".to_string())]
        );
        assert_eq!(
            tokenize("3 x 1 unidade"),
            vec![
                Token::Number(3.0),
                Token::Times,
                Token::Number(1.0),
                Token::Word("unidade".to_string())
            ]
        );
    }

    #[test]
    fn test_tokenize_number_words_and_accents() {
        assert_eq!(
            tokenize("Meia Xícara"),
            vec![Token::Number(0.5), Token::Word("xicara".to_string())]
        );
    }

    #[test]
    fn test_parse_double_number() {
        assert_eq!(
            parse_quantity("2 100g"),
            QuantityExpr::Measure {
                amount: 200.0,
                unit: UnitKind::Mass(1.0)
            }
        );
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(parse_quantity("150"), QuantityExpr::Bare(150.0));
        assert_eq!(parse_quantity("2x"), QuantityExpr::Multiplier(2.0));
        assert_eq!(parse_quantity("a gosto"), QuantityExpr::Empty);
        assert_eq!(parse_quantity(""), QuantityExpr::Empty);
        assert_eq!(
            parse_quantity("2 fatias"),
            QuantityExpr::Measure {
                amount: 2.0,
                unit: UnitKind::Discrete
            }
        );
        assert_eq!(
            parse_quantity("1 kg"),
            QuantityExpr::Measure {
                amount: 1.0,
                unit: UnitKind::Mass(1000.0)
            }
        );
    }

    #[test]
    fn test_tokenize_negative_and_range() {
        assert_eq!(
            tokenize("-200g"),
            vec![Token::Number(-200.0), Token::Word("g".to_string())]
        );
        assert_eq!(tokenize("1-2"), vec![Token::Number(1.0), Token::Number(2.0)]);
    }

    #[test]
    fn test_tokenize_mixed_number() {
        assert_eq!(
            tokenize("1 1/2 xícara"),
            vec![Token::Number(1.5), Token::Word("xicara".to_string())]
        );
        // Improper fractions stay separate numbers.
        assert_eq!(tokenize("2 3/2"), vec![Token::Number(2.0), Token::Number(1.5)]);
    }

    #[test]
    fn test_parse_mass_wins_over_discrete() {
        assert_eq!(
            parse_quantity("1 unidade (50g)"),
            QuantityExpr::Measure {
                amount: 50.0,
                unit: UnitKind::Mass(1.0)
            }
        );
        assert_eq!(
            parse_quantity("2 fatias (60g)"),
            QuantityExpr::Measure {
                amount: 60.0,
                unit: UnitKind::Mass(1.0)
            }
        );
    }

    #[test]
    fn test_classify_unit() {
        assert_eq!(classify_unit("ml"), UnitKind::Volume(1.0));
        assert_eq!(classify_unit("colheres"), UnitKind::Discrete);
        assert_eq!(classify_unit("bife"), UnitKind::Other);
    }
}
