/// Replace Latin accented letters with their unaccented base letter.
///
/// Covers the Portuguese/Spanish/French letters that show up in food names
/// and unit labels ("xícara", "porção", "feijão"). Other characters pass
/// through untouched.
pub fn fold_accents(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

/// Canonical key for catalog lookups: accent-stripped, lowercased, trimmed,
/// inner whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    fold_accents(name)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("Feijão"), "Feijao");
        assert_eq!(fold_accents("xícara"), "xicara");
        assert_eq!(fold_accents("porção"), "porcao");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Pão  Francês "), "pao frances");
        assert_eq!(normalize_name("FRANGO grelhado"), "frango grelhado");
    }
}
