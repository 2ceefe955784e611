//! Line-oriented transport channel to an engine endpoint
//!
//! One message = one line of UTF-8 text, no further framing. Sends are
//! fire-and-forget; inbound lines arrive in the order the engine
//! emitted them. There is no retry and no backpressure: the engine is
//! co-located, and a lost reply simply means no result ever arrives.

use tokio::sync::mpsc;

use crate::error::SessionError;

/// Opens transport channels to an engine endpoint.
///
/// The session controller keeps its endpoint so it can recreate the
/// channel when options that must be set before the handshake change
/// (skill level). An endpoint admits one live channel per controller;
/// the old channel is always closed before a new one is opened.
pub trait Endpoint: Send + Sync {
    fn open(&self) -> Result<Channel, SessionError>;
}

/// A bidirectional, ordered, asynchronous line pipe to an engine.
pub struct Channel {
    outbound: Option<mpsc::UnboundedSender<String>>,
    inbound: Option<mpsc::UnboundedReceiver<String>>,
}

impl Channel {
    /// Build a channel from its raw halves. Endpoint implementations
    /// wire `outbound` to command delivery and feed received lines
    /// into the sender side of `inbound`.
    pub fn new(
        outbound: mpsc::UnboundedSender<String>,
        inbound: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        Self {
            outbound: Some(outbound),
            inbound: Some(inbound),
        }
    }

    /// Loopback channel plus its peer half, for tests and in-process
    /// engine stubs.
    pub fn pair() -> (Channel, ChannelPeer) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        (
            Channel::new(command_tx, reply_rx),
            ChannelPeer {
                sent: command_rx,
                inject: reply_tx,
            },
        )
    }

    /// Queue one command line for delivery.
    ///
    /// Ordering is preserved relative to other sends on this channel.
    /// After [`close`](Channel::close), or once the endpoint is gone,
    /// this is a silent no-op: teardown paths must never see an error.
    pub fn send(&self, line: &str) {
        if let Some(tx) = &self.outbound {
            if tx.send(line.to_string()).is_ok() {
                log::debug!("-> {line}");
            } else {
                log::debug!("endpoint gone, dropped command: {line}");
            }
        }
    }

    /// Take the inbound line stream. Yields `None` once taken.
    pub fn take_inbound(&mut self) -> Option<mpsc::UnboundedReceiver<String>> {
        self.inbound.take()
    }

    /// Release the transport. Idempotent; later sends are no-ops.
    pub fn close(&mut self) {
        self.outbound = None;
        self.inbound = None;
    }

    pub fn is_closed(&self) -> bool {
        self.outbound.is_none()
    }
}

/// Peer half of a loopback channel: observe the command lines the
/// controller sent and inject engine reply lines.
pub struct ChannelPeer {
    /// Command lines, in send order
    pub sent: mpsc::UnboundedReceiver<String>,
    /// Feed one engine reply line per send
    pub inject: mpsc::UnboundedSender<String>,
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod transport_tests;
