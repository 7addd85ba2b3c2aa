use std::fmt;

/// Failures that leave the pinger without a trustworthy following list.  All of them are
/// fatal; a non-200 reply is not an error and yields an empty list instead.
#[derive(Debug)]
pub enum FollowingErr {
    Network(reqwest::Error),
    Read(reqwest::Error),
    Json(serde_json::Error),
}

impl std::error::Error for FollowingErr {}

impl fmt::Display for FollowingErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FollowingErr::*;
        match self {
            Network(e) => write!(f, "Got error {} when trying to fetch following list", e),
            Read(e) => write!(f, "Got error {} when trying to read following list", e),
            Json(e) => write!(f, "Got error {} when trying to decode following list JSON", e),
        }
    }
}

impl From<serde_json::Error> for FollowingErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
