//! Fixed strings and limits shared by the controller and the share codec.
//!
//! The canonical catalog has 101 entries with the first one locked, so the
//! expected score range is 0-100 — but the core treats catalog size as a
//! parameter and only these presentation-level constants are fixed.

use std::time::Duration;

/// Query parameter carrying a shared score (`?score=70`).
pub const SCORE_PARAM: &str = "score";

/// Status message after a successful clipboard write.
pub const STATUS_COPIED: &str = "Link copied!";

/// Status message when no clipboard capability is present.
pub const STATUS_NO_CLIPBOARD: &str = "Clipboard not available";

/// Delay before a transient copy-status message clears itself.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(1500);

/// Share-link base when the embedder supplies none.
pub const DEFAULT_BASE_URL: &str = "https://purity.example/test";
