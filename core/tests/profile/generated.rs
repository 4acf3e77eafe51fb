use vibecurate_core::profile::build_prompt;
use vibecurate_core::{BrandInput, Period, ProfileParseError, ProfileSource, parse_generated_profile};

const PROFILE_JSON: &str = r#"{
  "segment": "Cafeteria",
  "positioning": "Premium",
  "tone": "Acolhedor",
  "vibe": "cozy",
  "genres": ["Jazz", "Acoustic"],
  "bpm_ranges": {
    "morning": { "min": 80, "max": 110, "genres": ["Acoustic", "Jazz"] },
    "afternoon": { "min": 85, "max": 115, "genres": ["Indie Pop", "Jazz"] },
    "evening": { "min": 70, "max": 100, "genres": ["Lounge", "Soul"] },
    "night": { "min": 60, "max": 90, "genres": ["Ambient"] }
  },
  "voice": { "gender": "Feminina", "age_range": "25-35", "style": "Calorosa" },
  "playlist_suggestions": [
    { "name": "Primeiro Café", "period": "morning", "description": "Acústico suave" }
  ]
}"#;

#[test]
fn test_parse_plain_json() {
    let profile = parse_generated_profile(PROFILE_JSON).unwrap();

    assert_eq!(profile.segment, "Cafeteria");
    assert_eq!(profile.source, ProfileSource::Generative);
    assert_eq!(profile.bpm_ranges.morning.min, 80);
    assert_eq!(profile.bpm_ranges.evening.genres, vec!["Lounge", "Soul"]);
    assert_eq!(profile.playlist_suggestions[0].period, Period::Morning);
    assert_eq!(profile.voice.gender, "Feminina");
}

#[test]
fn test_parse_fenced_json() {
    let raw = format!("```json\n{}\n```", PROFILE_JSON);
    let profile = parse_generated_profile(&raw).unwrap();

    assert_eq!(profile.tone, "Acolhedor");
}

#[test]
fn test_parse_json_surrounded_by_prose() {
    let raw = format!("Aqui está o perfil:\n{}\nEspero que ajude!", PROFILE_JSON);
    let profile = parse_generated_profile(&raw).unwrap();

    assert_eq!(profile.positioning, "Premium");
}

#[test]
fn test_missing_optional_fields_are_filled() {
    let raw = r#"{
      "segment": "Bar",
      "tone": "Descontraído",
      "bpm_ranges": {
        "morning": { "min": 90, "max": 110, "genres": ["Funk"] },
        "afternoon": { "min": 95, "max": 115, "genres": ["Soul", "funk"] },
        "evening": { "min": 100, "max": 125, "genres": ["Rock"] },
        "night": { "min": 100, "max": 128, "genres": ["Dance"] }
      }
    }"#;
    let profile = parse_generated_profile(raw).unwrap();

    assert_eq!(profile.genres, vec!["Funk", "Soul", "Rock", "Dance"]);
    assert_eq!(profile.vibe, "descontraído");
    assert_eq!(profile.positioning, "Intermediário");
    assert!(profile.playlist_suggestions.is_empty());
    assert_eq!(profile.audience.age_range, "25-45");
    assert_eq!(profile.audience.social_class, "Classe B/C");
    assert_eq!(profile.audience.preferred_genres, vec!["Funk", "Soul", "Rock"]);
    assert_eq!(profile.atmosphere, "Descontraído");
    assert!(profile.identity.essence.is_empty());
}

#[test]
fn test_audience_defaults_follow_voice_and_positioning() {
    let profile = parse_generated_profile(PROFILE_JSON).unwrap();

    assert_eq!(profile.audience.age_range, "25-35");
    assert_eq!(profile.audience.social_class, "Classe A/B");
    assert_eq!(profile.audience.preferred_genres, vec!["Jazz", "Acoustic"]);
}

#[test]
fn test_parse_audience_and_identity() {
    let raw = PROFILE_JSON.replace(
        r#""playlist_suggestions""#,
        r#""audience": {
        "age_range": "30-50",
        "social_class": "Classe A",
        "lifestyle": ["gastronomia", "viagens"],
        "preferred_genres": ["Bossa Nova"]
      },
      "identity": {
        "essence": ["aconchego", "origem"],
        "values": ["qualidade"],
        "sound_palette": { "organic": ["violão", "piano"] }
      },
      "atmosphere": "Intimista e calorosa",
      "playlist_suggestions""#,
    );
    let profile = parse_generated_profile(&raw).unwrap();

    assert_eq!(profile.audience.age_range, "30-50");
    assert_eq!(profile.audience.social_class, "Classe A");
    assert_eq!(profile.audience.lifestyle, vec!["gastronomia", "viagens"]);
    assert_eq!(profile.audience.preferred_genres, vec!["Bossa Nova"]);
    assert_eq!(profile.identity.essence, vec!["aconchego", "origem"]);
    assert_eq!(profile.identity.sound_palette.organic, vec!["violão", "piano"]);
    assert!(profile.identity.sound_palette.electronic.is_empty());
    assert_eq!(profile.atmosphere, "Intimista e calorosa");
}

#[test]
fn test_malformed_audience_age_range_is_rejected() {
    for age_range in ["jovens", "50-30", "25-"] {
        let raw = PROFILE_JSON.replace(
            r#""playlist_suggestions""#,
            &format!(r#""audience": {{ "age_range": "{}" }}, "playlist_suggestions""#, age_range),
        );
        let result = parse_generated_profile(&raw);

        assert!(
            matches!(result, Err(ProfileParseError::Invalid(_))),
            "{} should be rejected",
            age_range
        );
    }
}

#[test]
fn test_inverted_bpm_range_is_rejected() {
    let raw = PROFILE_JSON.replace(
        r#""min": 80, "max": 110"#,
        r#""min": 120, "max": 110"#,
    );
    let result = parse_generated_profile(&raw);

    assert!(matches!(result, Err(ProfileParseError::Invalid(_))));
}

#[test]
fn test_empty_period_genres_are_rejected() {
    let raw = PROFILE_JSON.replace(r#"["Ambient"]"#, "[]");
    let result = parse_generated_profile(&raw);

    assert!(matches!(result, Err(ProfileParseError::Invalid(_))));
}

#[test]
fn test_text_without_json_is_rejected() {
    let result = parse_generated_profile("Desculpe, não consigo ajudar com isso.");
    assert!(matches!(result, Err(ProfileParseError::NoJsonObject)));
}

#[test]
fn test_malformed_json_is_rejected() {
    let result = parse_generated_profile(r#"{ "segment": "Bar", "tone": }"#);
    assert!(matches!(result, Err(ProfileParseError::Json(_))));
}

#[test]
fn test_prompt_mentions_brand_details() {
    let input = BrandInput::new("Coffee Corner")
        .with_sector("Alimentação")
        .with_description("Cafeteria de bairro");
    let prompt = build_prompt(&input);

    assert!(prompt.contains("Coffee Corner"));
    assert!(prompt.contains("Alimentação"));
    assert!(prompt.contains("Cafeteria de bairro"));
    assert!(prompt.contains("\"bpm_ranges\""));
    assert!(prompt.contains("\"audience\""));
    assert!(prompt.contains("\"sound_palette\""));
}
