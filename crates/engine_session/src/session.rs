//! Session controller: engine lifecycle, handshake, and search state
//!
//! Owns one logical analysis session over a [`Channel`]. Callers never
//! see raw protocol text; they hand in a position encoding and observe
//! `best_move` / `is_searching` transitions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::error::SessionError;
use crate::protocol::{self, EngineReply};
use crate::transport::{Channel, Endpoint};

/// Settle time between the identity/skill commands and the rest of the
/// handshake. The engine does not apply options sent right after `uci`
/// synchronously, so the handshake pauses before enabling NNUE and
/// probing readiness.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Caller-visible search state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatus {
    /// Is a search in flight?
    pub searching: bool,
    /// Most recent terminal search result ("e2e4"), if any
    pub best_move: Option<String>,
}

/// Drives one analysis session against an engine endpoint.
///
/// State machine: `Idle -> Searching` on [`evaluate_position`],
/// `Searching -> Idle` on a terminal best-move reply or [`reset_game`].
/// Calling [`evaluate_position`] while already searching supersedes the
/// previous request rather than queueing; searches carry no identity
/// tag, so when replies to overlapping requests arrive the last
/// best-move line received wins.
///
/// There is no fatal runtime path: a missing reply, a malformed line,
/// or a channel closed mid-search all degrade to "no result arrives",
/// observable as `is_searching` staying true.
///
/// [`evaluate_position`]: SessionController::evaluate_position
/// [`reset_game`]: SessionController::reset_game
pub struct SessionController {
    endpoint: Box<dyn Endpoint>,
    channel: Channel,
    config: EngineConfig,
    status: Arc<watch::Sender<SearchStatus>>,
    reader: JoinHandle<()>,
    closed: bool,
}

impl SessionController {
    /// Open a channel to the endpoint and run the handshake: `uci`,
    /// skill level, settle delay, NNUE on, readiness probe.
    pub async fn start(
        endpoint: Box<dyn Endpoint>,
        config: EngineConfig,
    ) -> Result<Self, SessionError> {
        let status = Arc::new(watch::Sender::new(SearchStatus::default()));
        let (channel, reader) = open_session(endpoint.as_ref(), &config, &status).await?;
        Ok(Self {
            endpoint,
            channel,
            config,
            status,
            reader,
            closed: false,
        })
    }

    /// Ask the engine for the best move in the given position.
    ///
    /// The encoding is opaque to the controller and is not validated
    /// beyond being non-empty; chess legality belongs to the rules
    /// layer. Returns immediately — the result surfaces through
    /// [`best_move`](Self::best_move) and the searching flag.
    pub fn evaluate_position(&mut self, fen: &str) -> Result<(), SessionError> {
        let fen = fen.trim();
        if fen.is_empty() {
            return Err(SessionError::EmptyPosition);
        }

        // State flips before any command goes out, so callers never
        // observe a stale best move alongside a live search.
        self.status.send_modify(|s| {
            s.searching = true;
            s.best_move = None;
        });

        self.channel.send(&protocol::position(fen));
        self.channel
            .send(&protocol::go(self.config.search_depth, self.config.move_time_ms));
        Ok(())
    }

    /// Re-synchronize engine-side game state. Reuses the channel.
    pub fn reset_game(&mut self) {
        self.channel.send(protocol::NEW_GAME);
        self.channel.send(protocol::IS_READY);
        self.status.send_modify(|s| {
            s.searching = false;
            s.best_move = None;
        });
    }

    /// Change the skill level.
    ///
    /// Skill only takes effect before the handshake completes, so this
    /// tears the channel down and opens a fresh session against the
    /// same endpoint. The old channel is fully closed first; the
    /// endpoint admits one live channel per controller.
    pub async fn set_skill_level(&mut self, level: u8) -> Result<(), SessionError> {
        self.config.skill_level = level;
        self.close();

        let (channel, reader) = open_session(self.endpoint.as_ref(), &self.config, &self.status).await?;
        self.channel = channel;
        self.reader = reader;
        self.closed = false;
        Ok(())
    }

    /// Most recent move the engine reported, if any.
    pub fn best_move(&self) -> Option<String> {
        self.status.borrow().best_move.clone()
    }

    /// Is a search in flight?
    pub fn is_searching(&self) -> bool {
        self.status.borrow().searching
    }

    /// Subscribe to search status transitions. The receiver stays
    /// valid across [`set_skill_level`](Self::set_skill_level) restarts.
    pub fn watch(&self) -> watch::Receiver<SearchStatus> {
        self.status.subscribe()
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tear the session down. Idempotent; the channel is never read or
    /// written afterwards. The engine may keep computing — teardown
    /// only stops the session from observing its output.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.channel.close();
        self.reader.abort();
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open a channel, spawn the reply pump, and run the handshake.
async fn open_session(
    endpoint: &dyn Endpoint,
    config: &EngineConfig,
    status: &Arc<watch::Sender<SearchStatus>>,
) -> Result<(Channel, JoinHandle<()>), SessionError> {
    let mut channel = endpoint.open()?;
    let inbound = channel
        .take_inbound()
        .ok_or_else(|| std::io::Error::other("endpoint returned a channel with no inbound stream"))?;

    status.send_replace(SearchStatus::default());
    let reader = tokio::spawn(read_replies(inbound, Arc::clone(status)));

    channel.send(protocol::UCI);
    channel.send(&protocol::set_option(
        "Skill Level",
        &config.skill_level.to_string(),
    ));

    // Options issued right after `uci` are applied asynchronously on
    // the engine side; give them a moment before finishing the
    // handshake. The readiness acknowledgment itself is only logged.
    tokio::time::sleep(SETTLE_DELAY).await;

    channel.send(&protocol::set_option("Use NNUE", "true"));
    channel.send(protocol::IS_READY);

    Ok((channel, reader))
}

/// Reply pump: classify each inbound line and apply it to the status.
///
/// Ends when the channel's inbound side closes. Informational lines
/// (identity, `readyok`, `info` telemetry) never touch state.
async fn read_replies(
    mut inbound: mpsc::UnboundedReceiver<String>,
    status: Arc<watch::Sender<SearchStatus>>,
) {
    while let Some(line) = inbound.recv().await {
        match protocol::parse_reply(&line) {
            EngineReply::BestMove(mv) => {
                log::debug!("<- {line}");
                status.send_modify(|s| {
                    s.best_move = Some(mv);
                    s.searching = false;
                });
            }
            EngineReply::NoMove => {
                log::debug!("search ended without a move: {line}");
                status.send_modify(|s| s.searching = false);
            }
            EngineReply::Info => {
                log::debug!("<- {line}");
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
