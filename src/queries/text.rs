//! Text normalization and Spanish calendar names.

/// Normalize a title or person name for comparison: lowercase, accented
/// vowels stripped, spaces turned into `-` (the API's path-parameter form).
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            ' ' => '-',
            other => other,
        })
        .collect()
}

/// Month number (1-12) for a Spanish month name, accents optional.
pub fn month_number(name: &str) -> Option<u32> {
    let number = match normalize(name).as_str() {
        "enero" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" => 8,
        "septiembre" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,
        _ => return None,
    };
    Some(number)
}

/// Weekday number (1 = lunes .. 7 = domingo) for a Spanish weekday name,
/// accents optional.
pub fn weekday_number(name: &str) -> Option<u32> {
    let number = match normalize(name).as_str() {
        "lunes" => 1,
        "martes" => 2,
        "miercoles" => 3,
        "jueves" => 4,
        "viernes" => 5,
        "sabado" => 6,
        "domingo" => 7,
        _ => return None,
    };
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::{month_number, normalize, weekday_number};

    #[test]
    fn normalize_lowercases_strips_accents_and_dashes_spaces() {
        assert_eq!(normalize("Relatos Salvajes"), "relatos-salvajes");
        assert_eq!(normalize("León"), "leon");
        assert_eq!(normalize("MIÉRCOLES"), "miercoles");
    }

    #[test]
    fn month_names_resolve_with_or_without_accents() {
        assert_eq!(month_number("enero"), Some(1));
        assert_eq!(month_number("Diciembre"), Some(12));
        assert_eq!(month_number("january"), None);
    }

    #[test]
    fn weekday_names_resolve_with_or_without_accents() {
        assert_eq!(weekday_number("lunes"), Some(1));
        assert_eq!(weekday_number("Miércoles"), Some(3));
        assert_eq!(weekday_number("Sábado"), Some(6));
        assert_eq!(weekday_number("monday"), None);
    }
}
