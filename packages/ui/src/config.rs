//! Client-side configuration for the views.

use std::time::Duration;

/// How long a collection fetch may take before it counts as failed.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// How long an un-pick may stay pending before the tile is restored.
pub const UNPICK_TIMEOUT: Duration = Duration::from_secs(10);

/// Message shown in place of a section that failed to load.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load. Please try again later.";
