//! Engine Session Controller
//!
//! This crate lets an interactive application delegate chess position
//! analysis to an external UCI engine running off the main thread:
//! - Opening a line-oriented channel to an engine endpoint
//! - Handshake and option configuration (skill level, NNUE)
//! - Driving searches and tracking `best_move` / `is_searching` state
//!
//! The engine itself is a black box consumed strictly through its text
//! protocol; chess rules, move legality, and board rendering live in
//! other layers. Callers hand the controller an opaque position
//! encoding (a FEN string) and observe parsed move coordinates coming
//! back ("e2e4", "e7e8q").
//!
//! # Usage
//!
//! ```no_run
//! use engine_session::{EngineConfig, ProcessEndpoint, SessionController};
//!
//! # async fn run() -> Result<(), engine_session::SessionError> {
//! let endpoint = ProcessEndpoint::new("/usr/local/bin/stockfish");
//! let mut session = SessionController::start(Box::new(endpoint), EngineConfig::default()).await?;
//!
//! session.evaluate_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
//!
//! let mut status = session.watch();
//! while status.borrow().searching {
//!     status.changed().await.ok();
//! }
//! println!("engine plays {:?}", session.best_move());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod process;
pub mod protocol;
pub mod session;
pub mod transport;

pub use config::EngineConfig;
pub use error::SessionError;
pub use process::ProcessEndpoint;
pub use session::{SearchStatus, SessionController};
pub use transport::{Channel, ChannelPeer, Endpoint};
