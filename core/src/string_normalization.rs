use unidecode::unidecode;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Catalog key for a piece name: `Flying-Ox`, `flying_ox` and `FLYING OX`
/// all map to `flying ox`.
pub fn piece_key(input: &str) -> String {
    clean_str(&input.replace(['-', '_'], " "))
}
