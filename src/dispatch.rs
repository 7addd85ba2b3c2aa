//! The dispatch loop: the single owner of the following list and the stream connection.
//!
//! # Data flow
//! * **Refresh tick → Following list → Stream**:
//! Once per `REFRESH_INTERVAL` the loop fetches the following list from Stream Spigot,
//! replaces its `FollowingSet` wholesale, and reconnects the stream filtered to the new
//! list.  The loop does nothing else while this runs.
//!
//! * **Stream → Classifier → Filter**:
//! Each record from the stream is classified.  Tweets are checked against the current
//! `FollowingSet`; anything else is dropped.
//!
//! * **Filter → Notifier**:
//! A qualifying tweet is handed to the `Notifier`, which pings Stream Spigot from its own
//! task.  The loop never waits for a ping.
mod filter;

pub use filter::{verdict, Verdict};

use crate::err::FatalErr;
use crate::event::Event;
use crate::following::{self, FollowingErr, FollowingSet};
use crate::ping::Notifier;
use crate::stream::{Connector, HttpConnector, Records, StreamClient};

use reqwest::Client;
use std::convert::TryFrom;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use url::Url;

/// How often the following list is refetched and the stream reconnected.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub struct Dispatcher<C = HttpConnector> {
    client: Client,
    following_url: Url,
    following: FollowingSet,
    stream: StreamClient<C>,
    records: Records,
    notifier: Notifier,
    refresh_interval: Duration,
}

impl<C: Connector> Dispatcher<C> {
    pub fn new(client: Client, following_url: Url, connector: C, notifier: Notifier) -> Self {
        let (stream, records) = StreamClient::new(connector);
        Self {
            client,
            following_url,
            following: FollowingSet::empty(),
            stream,
            records,
            notifier,
            refresh_interval: REFRESH_INTERVAL,
        }
    }

    #[doc(hidden)]
    pub fn with_refresh_interval(self, refresh_interval: Duration) -> Self {
        Self {
            refresh_interval,
            ..self
        }
    }

    /// Refresh once, then dispatch forever.
    ///
    /// Returns only if the following list cannot be fetched or decoded.
    pub async fn run(mut self) -> Result<(), FatalErr> {
        self.refresh().await?;

        let start = Instant::now() + self.refresh_interval;
        let mut refresh = time::interval_at(start, self.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = refresh.tick() => self.refresh().await?,
                Some(()) = self.records.done.recv() => log::info!("Client says it's done"),
                Some(record) = self.records.lines.recv() => {
                    self.handle_record(&record);
                }
            }
        }
    }

    /// Replace the following list and reconnect the stream to match it.
    ///
    /// A failed reconnect is logged and left alone until the next refresh.
    pub async fn refresh(&mut self) -> Result<(), FollowingErr> {
        self.following = following::fetch(&self.client, &self.following_url).await?;
        log::info!("Tracking updates for {} users...", self.following.len());

        if let Err(e) = self.stream.reconnect(self.following.ids()).await {
            log::error!("{}", e);
        }
        Ok(())
    }

    /// Classify one stream record and, if it is a tweet worth pinging about, start the
    /// ping.  Returns the handle of the ping task, if one was started.
    pub fn handle_record(&self, record: &[u8]) -> Option<JoinHandle<()>> {
        match Event::try_from(record) {
            Ok(Event::Tweet(tweet)) => {
                log::info!("{}: {}", tweet.user.screen_name, tweet.text);
                match verdict(&tweet, &self.following) {
                    Verdict::Notify => Some(self.notifier.notify(tweet.author(), tweet.id)),
                    skip => {
                        log::debug!("Skipping update {}: {}", tweet.id, skip);
                        None
                    }
                }
            }
            Ok(other) => {
                log::debug!("Ignoring {}", other.kind());
                None
            }
            Err(e) => {
                log::warn!("No tweet? {}", e);
                None
            }
        }
    }

    pub fn following(&self) -> &FollowingSet {
        &self.following
    }
}
