use super::{EventErr, Id};

use serde::Deserialize;
use std::convert::TryFrom;

/// A status update from the stream, reduced to the fields the pinger acts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    pub id: Id,
    pub text: String,
    pub user: TwitterUser,
    pub in_reply_to_user_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TwitterUser {
    pub id: Id,
    pub screen_name: String,
}

impl Tweet {
    pub fn author(&self) -> Id {
        self.user.id
    }

    /// The user this tweet replies to.  A zero ID means the same as no ID.
    pub fn reply_target(&self) -> Option<Id> {
        self.in_reply_to_user_id.filter(Id::is_set)
    }
}

// Every field is optional here so that a record missing its author still decodes and
// can be reported as "not a tweet" rather than as a parse failure.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(super) struct RawTweet {
    id: Option<Id>,
    text: Option<String>,
    user: Option<RawUser>,
    in_reply_to_user_id: Option<Id>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
struct RawUser {
    id: Option<Id>,
    screen_name: Option<String>,
}

impl TryFrom<RawTweet> for Tweet {
    type Error = EventErr;

    fn try_from(raw: RawTweet) -> Result<Self, Self::Error> {
        let user = raw.user.ok_or(EventErr::NotATweet)?;
        Ok(Tweet {
            id: raw.id.ok_or(EventErr::NotATweet)?,
            text: raw.text.unwrap_or_default(),
            user: TwitterUser {
                id: user.id.ok_or(EventErr::NotATweet)?,
                screen_name: user.screen_name.unwrap_or_default(),
            },
            in_reply_to_user_id: raw.in_reply_to_user_id,
        })
    }
}
