use crate::event::Tweet;
use crate::following::FollowingSet;

use strum_macros::Display;

/// What to do with a tweet, given who is being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[strum(serialize = "notify")]
    Notify,
    #[strum(serialize = "author is not followed")]
    AuthorNotFollowed,
    #[strum(serialize = "replies to a user who is not followed")]
    ReplyTargetNotFollowed,
}

/// Decide whether `tweet` should be pinged.
///
/// The stream also delivers tweets *about* followed users (retweets of them, replies to
/// them), so the author must be followed.  Replies additionally need a followed target.
///
/// Following is the union across every Stream Spigot user, so this over-notifies: if A
/// follows X and B follows X and Z, a reply from X to Z pings both even though A will
/// never see it.
pub fn verdict(tweet: &Tweet, following: &FollowingSet) -> Verdict {
    use Verdict::*;
    if !following.contains(tweet.author()) {
        return AuthorNotFollowed;
    }
    match tweet.reply_target() {
        Some(target) if !following.contains(target) => ReplyTargetNotFollowed,
        Some(_) | None => Notify,
    }
}
