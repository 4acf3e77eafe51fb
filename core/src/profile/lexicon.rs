use super::{
    BpmRange, BpmRanges, BrandIdentity, BrandProfile, PlaylistSuggestion, ProfileSource,
    SoundPalette, TargetAudience, VoiceGuidance, social_class_for,
};
use crate::period::Period;

pub struct PeriodEntry {
    pub min: u32,
    pub max: u32,
    pub genres: &'static [&'static str],
}

pub struct SegmentEntry {
    pub segment: &'static str,
    pub keywords: &'static [&'static str],
    pub vibe: &'static str,
    pub tone: &'static str,
    pub positioning: &'static str,
    /// (gender, age range, style)
    pub voice: (&'static str, &'static str, &'static str),
    pub audience_age: &'static str,
    pub lifestyle: &'static [&'static str],
    pub atmosphere: &'static str,
    pub essence: &'static [&'static str],
    pub values: &'static [&'static str],
    /// electronic, organic, rhythmic, vocal
    pub palette: [&'static [&'static str]; 4],
    /// morning, afternoon, evening, night
    pub periods: [PeriodEntry; 4],
    pub suggestions: [(&'static str, Period, &'static str); 3],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl SegmentEntry {
    pub fn to_profile(&self, positioning: Option<&str>, source: ProfileSource) -> BrandProfile {
        let range = |entry: &PeriodEntry| BpmRange::new(entry.min, entry.max, entry.genres);
        let [morning, afternoon, evening, night] = &self.periods;

        let bpm_ranges = BpmRanges {
            morning: range(morning),
            afternoon: range(afternoon),
            evening: range(evening),
            night: range(night),
        };

        let positioning = positioning.unwrap_or(self.positioning);
        let [electronic, organic, rhythmic, vocal] = self.palette;
        let genres = bpm_ranges.all_genres();

        BrandProfile {
            segment: self.segment.to_string(),
            positioning: positioning.to_string(),
            tone: self.tone.to_string(),
            vibe: self.vibe.to_string(),
            audience: TargetAudience {
                age_range: self.audience_age.to_string(),
                social_class: social_class_for(positioning).to_string(),
                lifestyle: owned(self.lifestyle),
                preferred_genres: genres.iter().take(3).cloned().collect(),
            },
            identity: BrandIdentity {
                essence: owned(self.essence),
                values: owned(self.values),
                sound_palette: SoundPalette {
                    electronic: owned(electronic),
                    organic: owned(organic),
                    rhythmic: owned(rhythmic),
                    vocal: owned(vocal),
                },
            },
            atmosphere: self.atmosphere.to_string(),
            genres,
            bpm_ranges,
            voice: VoiceGuidance {
                gender: self.voice.0.to_string(),
                age_range: self.voice.1.to_string(),
                style: self.voice.2.to_string(),
            },
            playlist_suggestions: self
                .suggestions
                .iter()
                .map(|(name, period, description)| PlaylistSuggestion {
                    name: name.to_string(),
                    period: *period,
                    description: description.to_string(),
                })
                .collect(),
            source,
        }
    }
}

pub const PREMIUM_KEYWORDS: &[&str] = &[
    "premium", "luxury", "luxo", "gourmet", "boutique", "prime", "exclusive", "exclusivo",
    "select",
];

pub const POPULAR_KEYWORDS: &[&str] = &[
    "express", "outlet", "popular", "economico", "atacado", "barato", "discount",
];

/// Checked in order; the first segment with a matching keyword wins.
pub const SEGMENTS: &[SegmentEntry] = &[
    SegmentEntry {
        segment: "Cafeteria",
        keywords: &[
            "cafe", "cafeteria", "coffee", "espresso", "bean", "barista", "padaria", "bakery",
            "confeitaria",
        ],
        vibe: "cozy",
        tone: "Acolhedor",
        positioning: "Casual",
        voice: ("Feminina", "25-35", "Calorosa e próxima"),
        audience_age: "25-40",
        lifestyle: &["urbano", "trabalho remoto", "pausas sociais"],
        atmosphere: "Aconchegante e intimista, com aroma de café e conversa baixa",
        essence: &["aconchego", "artesanal", "pausa"],
        values: &["qualidade", "hospitalidade", "proximidade"],
        palette: [
            &["pads suaves"],
            &["violão", "piano", "contrabaixo acústico"],
            &["escovinhas", "percussão leve"],
            &["vocal sussurrado", "harmonias suaves"],
        ],
        periods: [
            PeriodEntry { min: 80, max: 110, genres: &["Acoustic", "Jazz", "Bossa Nova", "Indie Folk"] },
            PeriodEntry { min: 85, max: 115, genres: &["Jazz", "Soul", "Indie Pop", "Acoustic"] },
            PeriodEntry { min: 70, max: 100, genres: &["Bossa Nova", "Jazz", "Lounge", "Chillout"] },
            PeriodEntry { min: 60, max: 90, genres: &["Lo-Fi", "Ambient", "Jazz"] },
        ],
        suggestions: [
            ("Primeiro Café", Period::Morning, "Violões e bossa para abrir as portas"),
            ("Pausa da Tarde", Period::Afternoon, "Jazz leve e soul para conversas"),
            ("Fim de Expediente", Period::Evening, "Lounge suave para desacelerar"),
        ],
    },
    SegmentEntry {
        segment: "Restaurante",
        keywords: &[
            "restaurant", "restaurante", "bistro", "kitchen", "cozinha", "food", "grill",
            "trattoria", "pizzaria", "pizza", "sushi", "churrascaria", "cantina",
        ],
        vibe: "sophisticated",
        tone: "Sofisticado",
        positioning: "Intermediário",
        voice: ("Masculina", "35-50", "Elegante e pausada"),
        audience_age: "30-55",
        lifestyle: &["gastronomia", "encontros em família", "experiências"],
        atmosphere: "Elegante e convidativo, em volume de conversa",
        essence: &["sabor", "tradição", "encontro"],
        values: &["excelência", "hospitalidade", "autenticidade"],
        palette: [
            &["pads discretos"],
            &["piano", "cordas", "saxofone"],
            &["escovinhas", "contrabaixo"],
            &["crooner", "vocal jazzístico"],
        ],
        periods: [
            PeriodEntry { min: 75, max: 100, genres: &["Classical", "Acoustic", "Jazz"] },
            PeriodEntry { min: 85, max: 110, genres: &["Jazz", "Bossa Nova", "Soul"] },
            PeriodEntry { min: 70, max: 100, genres: &["Jazz", "Lounge", "Classical"] },
            PeriodEntry { min: 65, max: 95, genres: &["Jazz", "Blues", "Ambient"] },
        ],
        suggestions: [
            ("Mise en Place", Period::Morning, "Clássicos leves para a preparação"),
            ("Almoço Executivo", Period::Afternoon, "Jazz e bossa em volume de conversa"),
            ("Jantar à Luz de Velas", Period::Evening, "Lounge e jazz para noites longas"),
        ],
    },
    SegmentEntry {
        segment: "Bar",
        keywords: &[
            "bar", "pub", "lounge", "beer", "cervejaria", "boteco", "drinks", "taverna",
        ],
        vibe: "lively",
        tone: "Descontraído",
        positioning: "Casual",
        voice: ("Masculina", "25-40", "Descontraída e enérgica"),
        audience_age: "21-40",
        lifestyle: &["vida noturna", "happy hour", "música ao vivo"],
        atmosphere: "Animado e descontraído, com energia crescente ao longo da noite",
        essence: &["diversão", "encontro", "liberdade"],
        values: &["autenticidade", "convivência", "energia"],
        palette: [
            &["sintetizadores", "baixo eletrônico"],
            &["guitarra", "metais"],
            &["bateria", "groove funk"],
            &["vocal rasgado", "coros"],
        ],
        periods: [
            PeriodEntry { min: 90, max: 115, genres: &["Indie Pop", "Funk", "Soul"] },
            PeriodEntry { min: 100, max: 120, genres: &["Rock", "Indie Rock", "Funk"] },
            PeriodEntry { min: 110, max: 128, genres: &["Rock", "Electronic", "Disco"] },
            PeriodEntry { min: 115, max: 130, genres: &["Electronic", "House", "Disco"] },
        ],
        suggestions: [
            ("Abrindo a Casa", Period::Morning, "Soul e funk para esquentar o salão"),
            ("Happy Hour", Period::Afternoon, "Rock e indie para o primeiro brinde"),
            ("Saideira", Period::Evening, "Disco e eletrônico até fechar"),
        ],
    },
    SegmentEntry {
        segment: "Moda",
        keywords: &[
            "store", "shop", "loja", "boutique", "fashion", "moda", "outlet", "wear",
            "vestuario", "calcados",
        ],
        vibe: "energetic",
        tone: "Energético",
        positioning: "Intermediário",
        voice: ("Feminina", "20-30", "Moderna e confiante"),
        audience_age: "18-35",
        lifestyle: &["tendências", "redes sociais", "compras"],
        atmosphere: "Vibrante e contemporâneo, acompanhando o ritmo da vitrine",
        essence: &["estilo", "atitude", "novidade"],
        values: &["autoexpressão", "criatividade", "confiança"],
        palette: [
            &["sintetizadores", "arpejos"],
            &["guitarra limpa"],
            &["batida four-on-the-floor", "palmas"],
            &["vocal pop", "refrões marcantes"],
        ],
        periods: [
            PeriodEntry { min: 95, max: 115, genres: &["Pop", "Indie Pop", "Electronic"] },
            PeriodEntry { min: 110, max: 125, genres: &["Pop", "Dance", "Electronic"] },
            PeriodEntry { min: 115, max: 128, genres: &["Dance", "House", "Pop"] },
            PeriodEntry { min: 100, max: 120, genres: &["Electronic", "Chillout", "Pop"] },
        ],
        suggestions: [
            ("Vitrine", Period::Morning, "Pop fresco para a abertura da loja"),
            ("Provador", Period::Afternoon, "Dance e pop para o pico de movimento"),
            ("Última Coleção", Period::Evening, "House para o fim do dia"),
        ],
    },
    SegmentEntry {
        segment: "Academia",
        keywords: &[
            "gym", "fitness", "crossfit", "academia", "treino", "box", "sport", "esporte",
        ],
        vibe: "intense",
        tone: "Motivador",
        positioning: "Intermediário",
        voice: ("Masculina", "25-35", "Vibrante e motivadora"),
        audience_age: "18-40",
        lifestyle: &["saúde", "performance", "rotina de treinos"],
        atmosphere: "Intenso e motivador, com batidas que puxam o ritmo do treino",
        essence: &["superação", "energia", "disciplina"],
        values: &["saúde", "foco", "resultado"],
        palette: [
            &["sintetizadores agressivos", "sub grave"],
            &["guitarra distorcida"],
            &["bateria eletrônica", "drops"],
            &["vocal de incentivo", "rap"],
        ],
        periods: [
            PeriodEntry { min: 120, max: 135, genres: &["Electronic", "Hip Hop", "Rock"] },
            PeriodEntry { min: 125, max: 140, genres: &["Electronic", "Dance", "Hip Hop"] },
            PeriodEntry { min: 128, max: 145, genres: &["Electronic", "Drum and Bass", "Rock"] },
            PeriodEntry { min: 110, max: 128, genres: &["House", "Electronic", "Pop"] },
        ],
        suggestions: [
            ("Aquecimento", Period::Morning, "Batidas firmes para começar o treino"),
            ("Série Pesada", Period::Afternoon, "Eletrônico acelerado para o pico"),
            ("Última Repetição", Period::Evening, "Drum and bass e rock para fechar forte"),
        ],
    },
    SegmentEntry {
        segment: "Bem-estar",
        keywords: &[
            "spa", "wellness", "yoga", "pilates", "zen", "massagem", "massage", "terapia",
            "estetica", "beauty", "beleza",
        ],
        vibe: "relaxing",
        tone: "Sereno",
        positioning: "Premium",
        voice: ("Feminina", "30-45", "Suave e tranquila"),
        audience_age: "28-55",
        lifestyle: &["autocuidado", "equilíbrio", "vida saudável"],
        atmosphere: "Sereno e acolhedor, com silêncio entre as camadas",
        essence: &["calma", "equilíbrio", "cuidado"],
        values: &["bem-estar", "respeito", "harmonia"],
        palette: [
            &["drones", "texturas ambientes"],
            &["piano", "harpa", "flauta"],
            &["sinos", "tigelas tibetanas"],
            &["vocalises", "mantras"],
        ],
        periods: [
            PeriodEntry { min: 60, max: 80, genres: &["Ambient", "New Age", "Piano"] },
            PeriodEntry { min: 65, max: 85, genres: &["Ambient", "Classical", "Piano"] },
            PeriodEntry { min: 55, max: 75, genres: &["Ambient", "New Age", "Meditation"] },
            PeriodEntry { min: 50, max: 70, genres: &["Ambient", "Meditation", "Piano"] },
        ],
        suggestions: [
            ("Respiração", Period::Morning, "Pianos e texturas para despertar devagar"),
            ("Equilíbrio", Period::Afternoon, "Ambient e clássicos em camadas leves"),
            ("Descanso", Period::Evening, "New age para relaxamento profundo"),
        ],
    },
    SegmentEntry {
        segment: "Hotelaria",
        keywords: &[
            "hotel", "inn", "resort", "lodge", "pousada", "hostel", "suites",
        ],
        vibe: "elegant",
        tone: "Elegante",
        positioning: "Premium",
        voice: ("Feminina", "30-45", "Sofisticada e acolhedora"),
        audience_age: "30-60",
        lifestyle: &["viagens", "negócios", "lazer"],
        atmosphere: "Sofisticado e tranquilo, com elegância discreta",
        essence: &["hospitalidade", "conforto", "requinte"],
        values: &["excelência", "discrição", "acolhimento"],
        palette: [
            &["pads sutis"],
            &["piano", "cordas", "violão"],
            &["contrabaixo", "escovinhas"],
            &["vocal suave", "bossa"],
        ],
        periods: [
            PeriodEntry { min: 75, max: 100, genres: &["Classical", "Piano", "Acoustic"] },
            PeriodEntry { min: 80, max: 105, genres: &["Jazz", "Bossa Nova", "Lounge"] },
            PeriodEntry { min: 70, max: 100, genres: &["Jazz", "Lounge", "Classical"] },
            PeriodEntry { min: 60, max: 85, genres: &["Piano", "Ambient", "Jazz"] },
        ],
        suggestions: [
            ("Café da Manhã no Lobby", Period::Morning, "Piano e clássicos para o check-out"),
            ("Tarde na Piscina", Period::Afternoon, "Bossa e lounge ao sol"),
            ("Bar do Hotel", Period::Evening, "Jazz para a recepção noturna"),
        ],
    },
    SegmentEntry {
        segment: "Tecnologia",
        keywords: &[
            "tech", "digital", "software", "app", "labs", "data", "cloud", "sistemas", "ai",
        ],
        vibe: "modern",
        tone: "Inovador",
        positioning: "Intermediário",
        voice: ("Neutra", "25-40", "Clara e objetiva"),
        audience_age: "22-40",
        lifestyle: &["conectado", "early adopter", "inovação"],
        atmosphere: "Moderno e focado, com texturas eletrônicas limpas",
        essence: &["inovação", "clareza", "futuro"],
        values: &["transparência", "colaboração", "agilidade"],
        palette: [
            &["sintetizadores", "pads digitais", "arpejadores"],
            &["piano elétrico"],
            &["bateria eletrônica", "glitches"],
            &["vocais processados"],
        ],
        periods: [
            PeriodEntry { min: 90, max: 110, genres: &["Electronic", "Ambient", "Synthwave"] },
            PeriodEntry { min: 100, max: 120, genres: &["Electronic", "Indie Electronic", "Chillwave"] },
            PeriodEntry { min: 95, max: 115, genres: &["Synthwave", "Downtempo", "Electronic"] },
            PeriodEntry { min: 80, max: 100, genres: &["Ambient", "Downtempo", "Lo-Fi"] },
        ],
        suggestions: [
            ("Deploy Matinal", Period::Morning, "Eletrônico limpo para foco"),
            ("Sprint", Period::Afternoon, "Synths e chillwave para o ritmo da equipe"),
            ("Code Review", Period::Evening, "Downtempo para encerrar o dia"),
        ],
    },
    SegmentEntry {
        segment: "Corporativo",
        keywords: &[
            "office", "corporate", "business", "consult", "consultoria", "escritorio",
            "advocacia", "contabil", "bank", "banco", "finance", "financeira", "seguros",
        ],
        vibe: "professional",
        tone: "Profissional",
        positioning: "Premium",
        voice: ("Masculina", "35-50", "Sóbria e confiável"),
        audience_age: "30-60",
        lifestyle: &["executivo", "negócios", "networking"],
        atmosphere: "Profissional e confiável, discreto no fundo",
        essence: &["confiança", "solidez", "precisão"],
        values: &["ética", "excelência", "compromisso"],
        palette: [
            &["pads discretos"],
            &["piano", "cordas"],
            &["percussão mínima"],
            &["sem vocal", "coros leves"],
        ],
        periods: [
            PeriodEntry { min: 80, max: 100, genres: &["Corporate", "Classical", "Piano"] },
            PeriodEntry { min: 85, max: 105, genres: &["Ambient", "Corporate", "Acoustic"] },
            PeriodEntry { min: 75, max: 95, genres: &["Classical", "Jazz", "Ambient"] },
            PeriodEntry { min: 65, max: 85, genres: &["Ambient", "Piano", "Classical"] },
        ],
        suggestions: [
            ("Recepção", Period::Morning, "Piano e clássicos para a chegada de clientes"),
            ("Foco Total", Period::Afternoon, "Ambient discreto para reuniões"),
            ("Fechamento", Period::Evening, "Jazz suave para o fim do expediente"),
        ],
    },
];

/// Profile used when nothing more specific can be derived.
pub const GENERIC_SEGMENT: SegmentEntry = SegmentEntry {
    segment: "Varejo",
    keywords: &[],
    vibe: "neutral",
    tone: "Neutro",
    positioning: "Intermediário",
    voice: ("Neutra", "25-45", "Amigável e clara"),
    audience_age: "25-45",
    lifestyle: &["urbano", "prático", "conectado"],
    atmosphere: "Acolhedor e envolvente, sem chamar atenção",
    essence: &["praticidade", "confiança", "proximidade"],
    values: &["qualidade", "atendimento", "acessibilidade"],
    palette: [
        &["sintetizadores leves"],
        &["violão", "piano"],
        &["bateria pop"],
        &["vocal limpo", "harmonias"],
    ],
    periods: [
        PeriodEntry { min: 90, max: 110, genres: &["Pop", "Acoustic", "Indie"] },
        PeriodEntry { min: 100, max: 120, genres: &["Pop", "Indie Pop", "Electronic"] },
        PeriodEntry { min: 90, max: 110, genres: &["Indie", "Acoustic", "Chillout"] },
        PeriodEntry { min: 70, max: 95, genres: &["Chillout", "Lo-Fi", "Ambient"] },
    ],
    suggestions: [
        ("Abertura", Period::Morning, "Pop e acústico para começar o dia"),
        ("Movimento", Period::Afternoon, "Indie pop para o horário de pico"),
        ("Encerramento", Period::Evening, "Chillout para as últimas horas"),
    ],
};

/// The fixed generic profile: segment "Varejo", tone "Neutro".
pub fn fallback_profile() -> BrandProfile {
    GENERIC_SEGMENT.to_profile(None, ProfileSource::Fallback)
}
