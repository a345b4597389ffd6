//! Search constants and runtime configuration defaults

// Cost model
/// Weight applied to accumulated path cost in the f-score
///
/// Below 1.0 the search favours heading for the destination over keeping the
/// chain short, so found paths are not guaranteed to be the shortest.
pub const G_SCORE_WEIGHT: f64 = 0.8;

/// Connection mask accepting every approach direction, used by the start node
pub const OMNIDIRECTIONAL_MASK: u8 = 0xFF;

// Default values for configurable parameters
/// Default distance from the destination at which a chain counts as arrived
pub const DEFAULT_ACCEPTANCE_RADIUS: f64 = 1.0;

/// Default number of node expansions before a search gives up
pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000;

/// Fixed seed for reproducible tile variant selection
pub const DEFAULT_SEED: u64 = 42;

/// Theater assumed when none is given
pub const DEFAULT_THEATER: &str = "TEMPERATE";

/// Largest absolute cell coordinate accepted for routes, connectors,
/// foundations and placements
///
/// Sums of two bounded coordinates stay far inside `i32`.
pub const MAX_CELL_COORDINATE: i32 = 1 << 20;

// Catalog layout
/// Section listing every cliff type section name
pub const CLIFF_TYPES_SECTION: &str = "CliffTypes";

/// Number of characters in an authored connection mask
pub const CONNECTION_MASK_LENGTH: usize = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Expansions between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 64;

// Output settings
/// Suffix added to preview filenames
pub const PREVIEW_SUFFIX: &str = "_route";
/// Edge length of one map cell in preview images
pub const PREVIEW_CELL_PIXELS: u32 = 8;
/// Longest raster edge, in cells, a preview is drawn for
pub const MAX_PREVIEW_EDGE_CELLS: usize = 2048;
