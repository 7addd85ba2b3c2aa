//! Pings Stream Spigot when someone it follows tweets.
//!
//! Stream Spigot keeps a list of Twitter users that its readers follow.  This crate keeps a
//! Twitter streaming connection filtered to those users and, for every relevant status
//! update, sends Stream Spigot a ping naming the author and the status.
//!
//! # Notes on data flow
//! * **Stream Spigot → Dispatcher**:
//! The `Dispatcher` fetches the following list at startup and once an hour after that.
//! It is the only code that ever replaces the `FollowingSet` or touches the stream
//! connection.
//!
//! * **Twitter → StreamClient → Dispatcher**:
//! The `StreamClient` holds one long-lived connection and forwards each newline-delimited
//! record over a channel that outlives any single connection.
//!
//! * **Dispatcher → Notifier → Stream Spigot**:
//! Records are classified into `Event`s; tweets from followed users (and not replying to
//! someone unfollowed) are handed to the `Notifier`, which pings from a separate task.
//! Pings are best effort and never retried.

pub mod config;
pub mod dispatch;
pub mod err;
pub mod event;
pub mod following;
pub mod ping;
pub mod stream;

pub use dispatch::Dispatcher;
pub use err::FatalErr;
