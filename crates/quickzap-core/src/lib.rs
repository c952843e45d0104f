pub mod catalog;
pub mod composer;
pub mod config;
pub mod country;
pub mod directory;
pub mod error;
pub mod fallback;
pub mod link;
pub mod logging;
pub mod opener;
pub mod preferences;
pub mod search;
pub mod state;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use composer::Composer;
pub use config::Config;
pub use country::Country;
pub use directory::{load_catalog, load_from_directory, CatalogSource, DirectoryClient};
pub use error::{Error, Result};
pub use opener::{LinkOpener, RecordingOpener, SystemOpener};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, DEFAULT_COUNTRY_KEY};
pub use search::CountrySearch;
pub use state::PickerState;
