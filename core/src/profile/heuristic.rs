use super::lexicon::{GENERIC_SEGMENT, POPULAR_KEYWORDS, PREMIUM_KEYWORDS, SEGMENTS, SegmentEntry};
use super::{BrandInput, BrandProfile, ProfileSource};
use crate::string_normalization::{token_matches, tokenize};

fn brand_tokens(input: &BrandInput) -> Vec<String> {
    let mut tokens = tokenize(&input.name);
    for text in [&input.sector, &input.description].into_iter().flatten() {
        tokens.extend(tokenize(text));
    }
    tokens
}

fn any_match(tokens: &[String], keywords: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| keywords.iter().any(|keyword| token_matches(token, keyword)))
}

pub fn find_segment(tokens: &[String]) -> Option<&'static SegmentEntry> {
    SEGMENTS
        .iter()
        .find(|entry| any_match(tokens, entry.keywords))
}

fn positioning_tier(tokens: &[String]) -> Option<&'static str> {
    if any_match(tokens, PREMIUM_KEYWORDS) {
        Some("Premium")
    } else if any_match(tokens, POPULAR_KEYWORDS) {
        Some("Popular")
    } else {
        None
    }
}

/// Rule-based classification of a brand into a sound profile.
///
/// Never fails: brands that match no segment get the generic "Varejo" profile.
pub fn classify_brand(input: &BrandInput) -> BrandProfile {
    let tokens = brand_tokens(input);
    let positioning = positioning_tier(&tokens);

    match find_segment(&tokens) {
        Some(entry) => entry.to_profile(positioning, ProfileSource::Heuristic),
        None => GENERIC_SEGMENT.to_profile(positioning, ProfileSource::Heuristic),
    }
}
