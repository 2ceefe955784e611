use super::*;

#[tokio::test]
async fn pair_delivers_commands_in_send_order() {
    let (channel, mut peer) = Channel::pair();

    channel.send("uci");
    channel.send("isready");

    assert_eq!(peer.sent.recv().await.as_deref(), Some("uci"));
    assert_eq!(peer.sent.recv().await.as_deref(), Some("isready"));
}

#[tokio::test]
async fn pair_delivers_replies_in_receipt_order() {
    let (mut channel, peer) = Channel::pair();
    let mut inbound = channel.take_inbound().unwrap();

    peer.inject.send("uciok".to_string()).unwrap();
    peer.inject.send("readyok".to_string()).unwrap();

    assert_eq!(inbound.recv().await.as_deref(), Some("uciok"));
    assert_eq!(inbound.recv().await.as_deref(), Some("readyok"));
}

#[tokio::test]
async fn inbound_stream_can_only_be_taken_once() {
    let (mut channel, _peer) = Channel::pair();

    assert!(channel.take_inbound().is_some());
    assert!(channel.take_inbound().is_none());
}

#[tokio::test]
async fn send_after_close_is_a_silent_noop() {
    let (mut channel, mut peer) = Channel::pair();

    channel.send("uci");
    channel.close();
    channel.send("isready");

    assert_eq!(peer.sent.recv().await.as_deref(), Some("uci"));
    // Sender side is gone, so the stream ends instead of yielding
    // the post-close command.
    assert_eq!(peer.sent.recv().await, None);
}

#[tokio::test]
async fn close_is_idempotent() {
    let (mut channel, _peer) = Channel::pair();

    channel.close();
    channel.close();

    assert!(channel.is_closed());
}

#[tokio::test]
async fn send_survives_a_dropped_peer() {
    let (channel, peer) = Channel::pair();
    drop(peer);

    // Nothing to assert beyond "does not panic": delivery to a dead
    // endpoint is a no-op by contract.
    channel.send("go depth 20");
}
