use super::{
    BrandInput, BrandProfile, DEFAULT_AGE_RANGE, ProfileSource, is_age_range, social_class_for,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileParseError {
    #[error("response contains no JSON object")]
    NoJsonObject,

    #[error("malformed profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid profile: {0}")]
    Invalid(String),
}

/// Prompt asking a generative model for a profile in the exact JSON shape of [`BrandProfile`].
pub fn build_prompt(input: &BrandInput) -> String {
    let sector = input.sector.as_deref().unwrap_or("não informado");
    let description = input.description.as_deref().unwrap_or("não informada");

    format!(
        r#"Você é um curador musical especialista em identidade sonora de marcas.
Analise a marca "{name}" (setor: {sector}; descrição: {description}) e crie o perfil musical
para ambientação das lojas ao longo do dia.

Responda SOMENTE com um objeto JSON, sem comentários e sem markdown, exatamente neste formato:
{{
  "segment": "segmento de negócio, ex.: Cafeteria",
  "positioning": "Popular | Intermediário | Premium",
  "tone": "tom emocional em uma palavra, ex.: Acolhedor",
  "vibe": "vibe em inglês, uma palavra, ex.: cozy",
  "genres": ["gêneros principais"],
  "bpm_ranges": {{
    "morning": {{ "min": 80, "max": 110, "genres": ["Acoustic", "Jazz"] }},
    "afternoon": {{ "min": 85, "max": 115, "genres": ["..."] }},
    "evening": {{ "min": 70, "max": 100, "genres": ["..."] }},
    "night": {{ "min": 60, "max": 90, "genres": ["..."] }}
  }},
  "voice": {{ "gender": "Feminina | Masculina | Neutra", "age_range": "25-35", "style": "..." }},
  "audience": {{
    "age_range": "25-40",
    "social_class": "Classe A/B | Classe B/C | Classe C/D",
    "lifestyle": ["estilo de vida 1", "estilo de vida 2", "estilo de vida 3"],
    "preferred_genres": ["gênero 1", "gênero 2", "gênero 3"]
  }},
  "identity": {{
    "essence": ["palavra1", "palavra2", "palavra3"],
    "values": ["valor1", "valor2", "valor3"],
    "sound_palette": {{
      "electronic": ["instrumento"],
      "organic": ["instrumento"],
      "rhythmic": ["elemento"],
      "vocal": ["estilo"]
    }}
  }},
  "atmosphere": "atmosfera da loja em uma frase",
  "playlist_suggestions": [
    {{ "name": "...", "period": "morning | afternoon | evening | night", "description": "..." }}
  ]
}}

Regras: BPM inteiros entre 40 e 200 com min <= max; faixas etárias no formato MIN-MAX;
gêneros em inglês, um ou dois termos,
como aparecem em tags de catálogos de música (Jamendo); de 3 a 5 gêneros por período."#,
        name = input.name,
        sector = sector,
        description = description,
    )
}

/// Removes a surrounding markdown code fence (```json ... ```), if any.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parses and validates a generative-model response into a profile.
pub fn parse_generated_profile(raw: &str) -> Result<BrandProfile, ProfileParseError> {
    let body = strip_code_fences(raw);

    let start = body.find('{').ok_or(ProfileParseError::NoJsonObject)?;
    let end = body.rfind('}').ok_or(ProfileParseError::NoJsonObject)?;
    if end < start {
        return Err(ProfileParseError::NoJsonObject);
    }

    let mut profile: BrandProfile = serde_json::from_str(&body[start..=end])?;
    profile.source = ProfileSource::Generative;

    if profile.genres.is_empty() {
        profile.genres = profile.bpm_ranges.all_genres();
    }
    if profile.vibe.trim().is_empty() {
        profile.vibe = profile.tone.to_lowercase();
    }
    if profile.positioning.trim().is_empty() {
        profile.positioning = "Intermediário".to_string();
    }

    let audience = &mut profile.audience;
    if audience.age_range.trim().is_empty() {
        audience.age_range = if is_age_range(&profile.voice.age_range) {
            profile.voice.age_range.clone()
        } else {
            DEFAULT_AGE_RANGE.to_string()
        };
    }
    if audience.social_class.trim().is_empty() {
        audience.social_class = social_class_for(&profile.positioning).to_string();
    }
    if audience.preferred_genres.is_empty() {
        audience.preferred_genres = profile.genres.iter().take(3).cloned().collect();
    }
    if profile.atmosphere.trim().is_empty() {
        profile.atmosphere = profile.tone.clone();
    }

    profile.validate()?;
    Ok(profile)
}
