// =============================================================================
// PERSISTENCE
// =============================================================================

/// Directory holding the item store, logs and crash reports
pub const STORE_DIR: &str = "./.bookbrain";

/// Item store file name
pub const ITEMS_FILE: &str = "items.yaml";

/// Entity name recorded in the store header
pub const ITEM_SCHEMA: &str = "Item";

/// Store file layout version. Files with any other version are rejected.
pub const SCHEMA_VERSION: u32 = 1;

/// Logs subdirectory
pub const LOGS_DIR: &str = "logs";

/// Log file name
pub const LOG_FILE: &str = "bookbrain.log";

/// Crash reports subdirectory
pub const ERRORS_DIR: &str = "errors";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides STORE_DIR
pub const ENV_STORE_DIR: &str = "BOOKBRAIN_STORE_DIR";

/// `desktop`, `touch` or `auto`
pub const ENV_FORM_FACTOR: &str = "BOOKBRAIN_FORM_FACTOR";

/// tracing EnvFilter directive
pub const ENV_LOG: &str = "BOOKBRAIN_LOG";

/// Filter used when ENV_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "bookbrain=info,bb_base=info";

// =============================================================================
// UI LAYOUT
// =============================================================================

/// Minimum width of the sidebar in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 24;

/// Minimum width of the detail pane in columns
pub const DETAIL_MIN_WIDTH: u16 = 24;

/// Number of static sidebar rows
pub const SIDEBAR_PAGE_COUNT: u8 = 4;

/// Height of one bordered sidebar row
pub const SIDEBAR_ROW_HEIGHT: u16 = 3;

/// Touch-class detail pane takes 1/N of the available width
pub const TOUCH_DETAIL_DIVISOR: u16 = 3;

/// Terminals narrower than this are treated as touch-class under `auto`
pub const TOUCH_MAX_COLUMNS: u16 = 100;

/// Desktop split: share of the split container given to the main pane (percent)
pub const SPLIT_RATIO_DEFAULT: u16 = 65;
pub const SPLIT_RATIO_MIN: u16 = 30;
pub const SPLIT_RATIO_MAX: u16 = 85;
pub const SPLIT_RATIO_STEP: u16 = 5;

// =============================================================================
// EVENT LOOP
// =============================================================================

/// Poll interval for events in milliseconds
pub const EVENT_POLL_MS: u64 = 8;

/// Minimum time between animation frames (ms)
pub const RENDER_THROTTLE_MS: u64 = 16;

/// Duration of the detail pane show/hide transition
pub const DETAIL_ANIMATION_MS: u64 = 250;
