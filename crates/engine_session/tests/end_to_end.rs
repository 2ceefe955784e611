//! End-to-end session scenario against a scripted engine endpoint

use std::sync::{Arc, Mutex};

use engine_session::{Channel, ChannelPeer, Endpoint, EngineConfig, SessionController, SessionError};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Default)]
struct ScriptedEndpoint {
    peers: Arc<Mutex<Vec<ChannelPeer>>>,
}

impl Endpoint for ScriptedEndpoint {
    fn open(&self) -> Result<Channel, SessionError> {
        let (channel, peer) = Channel::pair();
        self.peers.lock().unwrap().push(peer);
        Ok(channel)
    }
}

#[tokio::test(start_paused = true)]
async fn full_session_yields_the_engine_move() {
    let endpoint = ScriptedEndpoint::default();
    let peers = endpoint.peers.clone();

    let config = EngineConfig {
        skill_level: 20,
        ..EngineConfig::default()
    };
    let mut session = SessionController::start(Box::new(endpoint), config)
        .await
        .unwrap();
    let mut peer = peers.lock().unwrap().remove(0);

    // The engine side of the handshake: identity, then skill, then the
    // post-settle configuration and readiness probe.
    assert_eq!(peer.sent.recv().await.as_deref(), Some("uci"));
    assert_eq!(
        peer.sent.recv().await.as_deref(),
        Some("setoption name Skill Level value 20")
    );
    peer.inject.send("id name Stockfish 17".to_string()).unwrap();
    peer.inject.send("uciok".to_string()).unwrap();
    assert_eq!(
        peer.sent.recv().await.as_deref(),
        Some("setoption name Use NNUE value true")
    );
    assert_eq!(peer.sent.recv().await.as_deref(), Some("isready"));
    peer.inject.send("readyok".to_string()).unwrap();

    session.evaluate_position(START_FEN).unwrap();
    assert!(session.is_searching());
    assert_eq!(
        peer.sent.recv().await.unwrap(),
        format!("position fen {START_FEN}")
    );
    assert_eq!(peer.sent.recv().await.as_deref(), Some("go depth 20"));

    peer.inject
        .send("info depth 20 score cp 35 pv e2e4 e7e5".to_string())
        .unwrap();
    peer.inject
        .send("bestmove e2e4 ponder e7e5".to_string())
        .unwrap();

    let mut status = session.watch();
    let status = status.wait_for(|s| !s.searching).await.unwrap();
    assert_eq!(status.best_move.as_deref(), Some("e2e4"));
    assert_eq!(session.best_move().as_deref(), Some("e2e4"));
    assert!(!session.is_searching());
}
