//! Tell Stream Spigot that a followed user posted an update.
//!
//! Pings are best effort: each one runs as its own task, nobody waits for it, and a
//! failed ping is logged and forgotten.  There is no retry and no limit on how many pings
//! may be in flight; `Notifier::in_flight` makes that number observable.
mod err;
pub use err::PingErr;

use crate::event::Id;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use url::Url;

#[derive(Debug, Clone)]
pub struct Notifier {
    client: Client,
    ping_url: Url,
    secret: Arc<str>,
    in_flight: Arc<AtomicUsize>,
}

#[derive(Serialize, Debug)]
struct PingForm<'a> {
    update_twitter_id: Id,
    update_status_id: Id,
    secret: &'a str,
}

impl Notifier {
    pub fn new(client: Client, ping_url: Url, secret: &str) -> Self {
        Self {
            client,
            ping_url,
            secret: Arc::from(secret),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Ping in the background.  The returned handle may be dropped; the ping still runs.
    pub fn notify(&self, author: Id, status: Id) -> JoinHandle<()> {
        let notifier = self.clone();
        let in_flight = InFlight::enter(&self.in_flight);
        tokio::spawn(async move {
            let _in_flight = in_flight;
            if let Err(e) = notifier.send(author, status).await {
                log::warn!("   ...{}", e);
            }
        })
    }

    /// POST a single ping and wait for the reply.
    pub async fn send(&self, author: Id, status: Id) -> Result<(), PingErr> {
        log::info!("Pinging for update {} by user {}...", status, author);
        let form = PingForm {
            update_twitter_id: author,
            update_status_id: status,
            secret: &self.secret,
        };
        let response = self
            .client
            .post(self.ping_url.clone())
            .form(&form)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(log::info!("   ...success")),
            other => Err(PingErr::Status(other.as_u16())),
        }
    }

    /// Number of pings that have been started but not yet finished.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter.clone())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
