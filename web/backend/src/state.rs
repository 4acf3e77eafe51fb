use crate::config::{Config, ConfigError};
use crate::curation::Curator;
use crate::gemini::GeminiClient;
use crate::jamendo::{CatalogError, JamendoClient};
use crate::store::Store;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{info, warn};
use vibecurate_core::AssemblyConfig;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to build catalog client: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct AppState {
    pub store: Store,
    /// `None` when no Jamendo client id is configured
    pub catalog: Option<JamendoClient>,
    pub curator: Curator,
    pub assembly: AssemblyConfig,
    pub seed: Option<u64>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self, StartupError> {
        let store = Store::connect(&config.database_url).await?;

        let catalog = match &config.jamendo {
            Some(jamendo) => Some(JamendoClient::new(&jamendo.client_id, &jamendo.base_url)?),
            None => {
                warn!("JAMENDO_CLIENT_ID not set, playlist generation is disabled");
                None
            }
        };

        let gemini = config
            .gemini
            .as_ref()
            .map(|gemini| GeminiClient::new(&gemini.api_key, &gemini.model, &gemini.base_url));

        info!(
            strategy = %config.profile_strategy,
            model = gemini.as_ref().map(|g| g.model()).unwrap_or("-"),
            catalog = catalog.is_some(),
            "Application state ready"
        );

        Ok(Self {
            store,
            catalog,
            curator: Curator::new(config.profile_strategy, gemini),
            assembly: AssemblyConfig::default(),
            seed: config.seed,
        })
    }

    /// Fresh random source for one request.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
