//! Engine endpoint backed by a child process
//!
//! Spawns the engine binary and bridges its stdin/stdout to a line
//! channel: a writer task drains queued command lines into stdin, a
//! reader task forwards each stdout line in emit order. Closing the
//! channel drops the engine's stdin; a UCI engine exits on EOF.
//! Teardown does not interrupt a search already in progress — it only
//! stops the session from observing further output.

use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::error::SessionError;
use crate::transport::{Channel, Endpoint};

/// Spawns a UCI engine binary and speaks to it over stdin/stdout.
#[derive(Debug, Clone)]
pub struct ProcessEndpoint {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessEndpoint {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add a command-line argument for the engine binary.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Endpoint for ProcessEndpoint {
    /// Spawn the engine and wire up the channel.
    ///
    /// Must be called from within a Tokio runtime: the I/O pumps run as
    /// spawned tasks.
    fn open(&self) -> Result<Channel, SessionError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("engine stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("engine stdout not captured"))?;

        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<String>();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        // Writer: one newline-terminated command per queued line. Ends
        // when the channel closes, which closes the engine's stdin.
        tokio::spawn(async move {
            while let Some(line) = command_rx.recv().await {
                if stdin.write_all(line.as_bytes()).await.is_err() {
                    break;
                }
                if stdin.write_all(b"\n").await.is_err() {
                    break;
                }
            }
        });

        // Reader: one inbound event per stdout line, in emit order.
        // Owns the child handle so the process gets reaped on exit.
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if reply_tx.send(line).is_err() {
                    break;
                }
            }
            let _ = child.wait().await;
        });

        Ok(Channel::new(command_tx, reply_rx))
    }
}
