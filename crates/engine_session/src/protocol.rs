//! UCI protocol subset
//!
//! Only the commands the session controller needs: identity handshake,
//! option configuration, position loading, search initiation, best-move
//! retrieval, and session reset. Every other line the engine emits is
//! informational telemetry and never touches session state.

/// Identity handshake: ask the engine to announce itself and accept options.
pub const UCI: &str = "uci";
/// Readiness probe; the engine acknowledges with `readyok`.
pub const IS_READY: &str = "isready";
/// Reset engine-side game state.
pub const NEW_GAME: &str = "ucinewgame";

/// Marker token prefixing the line that reports the engine's chosen move.
pub const BEST_MOVE_MARKER: &str = "bestmove";
/// Sentinel reported when the engine has no move (mate or stalemate).
pub const NO_MOVE: &str = "(none)";

/// A classified inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineReply {
    /// Terminal search result carrying a move coordinate ("e2e4", "e7e8q")
    BestMove(String),
    /// Terminal search result without a usable move: the `(none)`
    /// sentinel, or a malformed marker line with no second token
    NoMove,
    /// Identity strings, readiness acknowledgments, search telemetry
    Info,
}

/// Classify one line the engine emitted.
///
/// Best-move lines are split on whitespace and the second token is the
/// move; trailing tokens (`ponder ...`) are ignored.
pub fn parse_reply(line: &str) -> EngineReply {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(BEST_MOVE_MARKER) {
        return EngineReply::Info;
    }
    match tokens.next() {
        Some(mv) if mv != NO_MOVE => EngineReply::BestMove(mv.to_string()),
        _ => EngineReply::NoMove,
    }
}

/// `setoption name <name> value <value>`
pub fn set_option(name: &str, value: &str) -> String {
    format!("setoption name {name} value {value}")
}

/// `position fen <encoding>`
pub fn position(fen: &str) -> String {
    format!("position fen {fen}")
}

/// `go depth <n>`, with a movetime bound only when one is configured.
pub fn go(depth: u8, move_time_ms: u64) -> String {
    if move_time_ms > 0 {
        format!("go depth {depth} movetime {move_time_ms}")
    } else {
        format!("go depth {depth}")
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
