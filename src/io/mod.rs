/// Command-line arguments and the route runner
pub mod cli;
/// Tunable constants for search, parsing and output
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG previews of found routes
pub mod image;
/// Minimal INI reader for cliff catalogs
pub mod ini;
/// Log subscriber setup
pub mod logging;
/// Progress bars for concurrent searches
pub mod progress;
