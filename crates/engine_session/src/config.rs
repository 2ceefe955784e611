//! Engine session configuration

use serde::{Deserialize, Serialize};

/// Options applied to an engine session.
///
/// Defaults describe a full-strength session: maximum skill, depth 20,
/// no per-move time bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Skill level, 0-20. Applied before the handshake completes, so
    /// changing it requires a fresh channel. Out-of-range values are
    /// forwarded as-is; clamping them is the engine's business.
    pub skill_level: u8,
    /// Search depth passed to `go depth <n>`
    pub search_depth: u8,
    /// Time limit per search in milliseconds (0 = depth-limited only)
    pub move_time_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            skill_level: 20,
            search_depth: 20,
            move_time_ms: 0,
        }
    }
}
