use unidecode::unidecode;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Splits free text into normalized alphanumeric tokens ("Café-Bar!" -> ["cafe", "bar"]).
pub fn tokenize(input: &str) -> Vec<String> {
    clean_str(input)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// A token matches a keyword exactly, or by prefix once the keyword is long
/// enough that prefixes stop being ambiguous ("coffeehouse" matches "coffee",
/// "barbearia" does not match "bar").
pub fn token_matches(token: &str, keyword: &str) -> bool {
    token == keyword || (keyword.len() >= 4 && token.starts_with(keyword))
}
