//! A long-lived connection to the Twitter streaming API.
//!
//! The `StreamClient` owns at most one open connection at a time.  Every connection it
//! opens feeds the same `Records` channels, so the dispatch loop keeps one receiver for the
//! life of the process no matter how often the subscription changes.  Reconnecting is
//! never automatic: when a connection ends, the client just reports it on `Records::done`.
mod connector;
mod err;

pub use connector::{ByteStream, Connector, HttpConnector};
pub use err::StreamErr;

use crate::event::Id;

use bytes::BytesMut;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The receiving ends of a `StreamClient`.
#[derive(Debug)]
pub struct Records {
    /// One stream record per item, in the order received.
    pub lines: mpsc::UnboundedReceiver<Vec<u8>>,
    /// Fires each time a connection's read loop ends, whatever the reason.
    pub done: mpsc::UnboundedReceiver<()>,
}

pub struct StreamClient<C = HttpConnector> {
    connector: C,
    lines_tx: mpsc::UnboundedSender<Vec<u8>>,
    done_tx: mpsc::UnboundedSender<()>,
    reader: Option<JoinHandle<()>>,
}

impl<C: Connector> StreamClient<C> {
    pub fn new(connector: C) -> (Self, Records) {
        let (lines_tx, lines) = mpsc::unbounded_channel();
        let (done_tx, done) = mpsc::unbounded_channel();
        let client = Self {
            connector,
            lines_tx,
            done_tx,
            reader: None,
        };
        (client, Records { lines, done })
    }

    /// Drop the current connection and open one filtered to `ids`.
    ///
    /// The old connection is fully released before the new one is requested.  An empty
    /// `ids` leaves the client disconnected.
    pub async fn reconnect(&mut self, ids: &[Id]) -> Result<(), StreamErr> {
        self.close().await;
        if ids.is_empty() {
            log::warn!("Not following anyone; leaving the stream closed");
            return Ok(());
        }

        let body = self.connector.connect(ids).await?;
        log::info!("Connected to the stream for {} users", ids.len());
        let done = DoneGuard(self.done_tx.clone());
        self.reader = Some(tokio::spawn(read_lines(body, self.lines_tx.clone(), done)));
        Ok(())
    }

    /// Close the current connection, if any.  Calling this when already closed is a no-op.
    pub async fn close(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
            // join so the connection is dropped before we return
            let _ = reader.await;
        }
    }

    pub fn is_connected(&self) -> bool {
        self.reader
            .as_ref()
            .map_or(false, |reader| !reader.is_finished())
    }
}

impl<C> Drop for StreamClient<C> {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }
}

struct DoneGuard(mpsc::UnboundedSender<()>);

impl Drop for DoneGuard {
    fn drop(&mut self) {
        // the receiver is gone only while the process is shutting down
        let _ = self.0.send(());
    }
}

/// Longest record kept while waiting for its line break.  Anything longer is dropped up to
/// the next line break.
pub const MAX_RECORD_LEN: usize = 1024 * 1024;

async fn read_lines(mut body: ByteStream, lines: mpsc::UnboundedSender<Vec<u8>>, _done: DoneGuard) {
    let mut buffer = BytesMut::new();
    // bytes of `buffer` already known to hold no line break
    let mut scanned = 0;
    let mut oversized = false;
    loop {
        match body.next().await {
            Some(Ok(chunk)) => {
                buffer.extend_from_slice(&chunk);
                while let Some(offset) = buffer[scanned..].iter().position(|&b| b == b'\n') {
                    let newline = scanned + offset;
                    let line = buffer.split_to(newline + 1);
                    scanned = 0;
                    if std::mem::take(&mut oversized) {
                        continue;
                    }
                    if !forward(&line[..newline], &lines) {
                        return;
                    }
                }
                scanned = buffer.len();
                if buffer.len() > MAX_RECORD_LEN {
                    log::warn!("Dropping a stream record longer than {} bytes", MAX_RECORD_LEN);
                    buffer.clear();
                    scanned = 0;
                    oversized = true;
                }
            }
            Some(Err(e)) => break log::error!("{}", e),
            None => break log::info!("Twitter closed the stream"),
        }
    }
    // a final record without a trailing newline
    if !oversized {
        forward(&buffer, &lines);
    }
}

/// Send one record, skipping keep-alive blank lines.  Returns `false` once nobody is
/// listening.
fn forward(line: &[u8], lines: &mpsc::UnboundedSender<Vec<u8>>) -> bool {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.iter().all(u8::is_ascii_whitespace) {
        return true;
    }
    lines.send(line.to_vec()).is_ok()
}
