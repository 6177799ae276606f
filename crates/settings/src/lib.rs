//! # Settings Crate
//!
//! Turns the user's stored settings into the `FilterConfig` the engine runs
//! on. This is the only place config values are validated or normalised.
//!
//! ## Components
//!
//! - **stored**: The stored settings object, strict parsing, config building,
//!   and block list edits
//! - **input**: Parsing of the settings page's multi-line text boxes
//! - **error**: Error types for loading settings
//!
//! ## Example Usage
//!
//! ```ignore
//! use settings::Settings;
//!
//! let settings = Settings::load(Path::new("settings.json"))?;
//! let config = settings.to_filter_config();
//! if config.enabled {
//!     let verdicts = engine::classify(&items, &records, &config);
//! }
//! ```

// Public modules
pub mod error;
pub mod input;
pub mod stored;

// Re-export commonly used types
pub use error::{Result, SettingsError};
pub use input::{parse_list_input, Case};
pub use stored::{Settings, SuppressionStyle, DEFAULT_RATINGS, REQUIRED_FIELDS};
