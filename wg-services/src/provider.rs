//! Word providers: where puzzle word lists come from.
//!
//! Two sources exist: the built-in themed packs bundled with the app, and
//! the generative word service. The API-backed provider falls back to the
//! built-in packs on any network failure so puzzle play never blocks on
//! connectivity.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use wg_api::ApiClient;
use wg_core::constants::{themes, MAX_WORD_LEN, MAX_WORDS_PER_PUZZLE};
use wg_core::error::{WgError, WgResult};

use crate::event_bus::{AppEvent, EventBus};

/// Where a word list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    /// Bundled themed pack.
    Builtin,
    /// The generative word service.
    Api,
}

impl WordSource {
    pub fn label(&self) -> &'static str {
        match self {
            WordSource::Builtin => "builtin",
            WordSource::Api => "api",
        }
    }
}

/// A themed word list ready for normalization and placement.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Theme the words belong to.
    pub theme: String,
    /// Raw words; `wg_puzzle::normalize_words` runs before placement.
    pub words: Vec<String>,
    /// Which provider produced the list.
    pub source: WordSource,
}

/// A source of themed word lists.
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Provider name for logging and events.
    fn name(&self) -> &'static str;

    /// Fetch up to `count` words for a theme.
    async fn fetch_words(&self, theme: &str, count: usize) -> WgResult<WordList>;
}

// Built-in packs. Every word is uppercase A-Z and fits the largest grid.

const ANIMALS: &[&str] = &[
    "ELEPHANT", "GIRAFFE", "PENGUIN", "DOLPHIN", "LEOPARD", "RACCOON",
    "OSTRICH", "BUFFALO", "GORILLA", "PANTHER", "BADGER", "WEASEL",
];

const FOOD: &[&str] = &[
    "AVOCADO", "BROCCOLI", "PANCAKE", "LASAGNA", "PRETZEL", "OATMEAL",
    "CUCUMBER", "MUSTARD", "APRICOT", "GRANOLA", "NOODLES", "PAPRIKA",
];

const SPORTS: &[&str] = &[
    "CRICKET", "CYCLING", "ARCHERY", "BOWLING", "CURLING", "FENCING",
    "HURDLES", "JAVELIN", "ROWING", "SAILING", "SKATING", "SURFING",
];

const NATURE: &[&str] = &[
    "GLACIER", "MEADOW", "THICKET", "CASCADE", "ESTUARY", "PRAIRIE",
    "CANYON", "LAGOON", "TUNDRA", "VOLCANO", "RAVINE", "GEYSER",
];

const TRAVEL: &[&str] = &[
    "PASSPORT", "LUGGAGE", "AIRPORT", "VOYAGE", "COMPASS", "JOURNEY",
    "HARBOR", "TICKET", "CRUISE", "SAFARI", "HOSTEL", "TERMINAL",
];

const FAITH: &[&str] = &[
    "BLESSING", "DEVOTION", "GRATITUDE", "PSALM", "PRAYER", "WORSHIP",
    "SCRIPTURE", "PARABLE", "COVENANT", "SHEPHERD", "TEMPLE", "JUBILEE",
];

/// Provider serving the bundled themed word packs.
#[derive(Debug, Clone, Default)]
pub struct BuiltinProvider;

impl BuiltinProvider {
    pub fn new() -> Self {
        Self
    }

    /// All themes this provider can serve.
    pub fn themes() -> &'static [&'static str] {
        themes::ALL
    }

    /// The full pack for a theme.
    pub fn pack(theme: &str) -> WgResult<&'static [&'static str]> {
        match theme {
            themes::ANIMALS => Ok(ANIMALS),
            themes::FOOD => Ok(FOOD),
            themes::SPORTS => Ok(SPORTS),
            themes::NATURE => Ok(NATURE),
            themes::TRAVEL => Ok(TRAVEL),
            themes::FAITH => Ok(FAITH),
            other => Err(WgError::UnknownTheme(other.to_string())),
        }
    }
}

#[async_trait]
impl WordProvider for BuiltinProvider {
    fn name(&self) -> &'static str {
        "builtin"
    }

    async fn fetch_words(&self, theme: &str, count: usize) -> WgResult<WordList> {
        let pack = Self::pack(theme)?;
        let count = count.clamp(1, MAX_WORDS_PER_PUZZLE).min(pack.len());

        // Random sample for variety between rounds
        let mut rng = rand::thread_rng();
        let words: Vec<String> = pack
            .choose_multiple(&mut rng, count)
            .map(|w| w.to_string())
            .collect();

        debug!("builtin pack '{theme}' served {} words", words.len());
        Ok(WordList {
            theme: theme.to_string(),
            words,
            source: WordSource::Builtin,
        })
    }
}

/// Provider backed by the generative word service, with builtin fallback.
pub struct ApiProvider {
    client: ApiClient,
    fallback: BuiltinProvider,
    event_bus: EventBus,
}

impl ApiProvider {
    pub fn new(client: ApiClient, event_bus: EventBus) -> Self {
        Self {
            client,
            fallback: BuiltinProvider::new(),
            event_bus,
        }
    }
}

#[async_trait]
impl WordProvider for ApiProvider {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn fetch_words(&self, theme: &str, count: usize) -> WgResult<WordList> {
        let count = count.clamp(1, MAX_WORDS_PER_PUZZLE);

        match self.client.generate_words(theme, count, MAX_WORD_LEN).await {
            Ok(list) => Ok(WordList {
                theme: list.theme,
                words: list.words,
                source: WordSource::Api,
            }),
            Err(e) => {
                warn!("word service failed for theme '{theme}', using builtin pack: {e}");
                self.event_bus.emit(AppEvent::ProviderFellBack {
                    theme: theme.to_string(),
                    error: e.to_string(),
                });
                self.fallback.fetch_words(theme, count).await
            }
        }
    }
}
