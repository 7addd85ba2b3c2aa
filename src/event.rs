//! Classify raw records from the Twitter stream.
//!
//! The stream delivers newline-delimited JSON objects in three shapes:
//!
//! ```text
//! {"event":"favorite","source":{...},"target":{...}}   control message
//! {"friends":[1497,783214,...]}                        friend-list snapshot
//! {"id":1234,"text":"...","user":{"id":10,...},...}     status update
//! ```
//!
//! A top-level `event` key marks a control message and a top-level `friends` key marks a
//! friend list; anything else is read as a status.  Once a marker is seen the record is
//! never read as a status, even if the marked shape fails to decode.  Control messages and
//! friend lists are recognised but carry no action yet; only tweets reach the dispatch
//! engine.
mod err;
mod id;
mod tweet;

pub use err::EventErr;
pub use id::Id;
pub use tweet::{Tweet, TwitterUser};

use serde::de::IgnoredAny;
use serde::Deserialize;
use std::convert::{TryFrom, TryInto};
use tweet::RawTweet;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Control(ControlEvent),
    Friends(FriendList),
    Tweet(Tweet),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ControlEvent {
    pub event: String,
    pub source: Option<UserSummary>,
    pub target: Option<UserSummary>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: Option<Id>,
    pub screen_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FriendList {
    pub friends: Vec<Id>,
}

/// Which top-level marker keys a record carries.
#[derive(Deserialize)]
struct Markers {
    event: Option<IgnoredAny>,
    friends: Option<IgnoredAny>,
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Control(_) => "control event",
            Event::Friends(_) => "friend list",
            Event::Tweet(_) => "tweet",
        }
    }
}

impl TryFrom<&[u8]> for Event {
    type Error = EventErr;

    fn try_from(record: &[u8]) -> Result<Event, Self::Error> {
        let markers: Markers = serde_json::from_slice(record)?;
        Ok(match markers {
            Markers { event: Some(_), .. } => Event::Control(serde_json::from_slice(record)?),
            Markers { friends: Some(_), .. } => Event::Friends(serde_json::from_slice(record)?),
            Markers { .. } => {
                let raw: RawTweet = serde_json::from_slice(record)?;
                Event::Tweet(raw.try_into()?)
            }
        })
    }
}

impl TryFrom<&str> for Event {
    type Error = EventErr;

    fn try_from(record: &str) -> Result<Event, Self::Error> {
        Event::try_from(record.as_bytes())
    }
}

#[cfg(test)]
mod test;
