use std::fmt;

#[derive(Debug)]
pub enum EventErr {
    SerdeParse(serde_json::Error),
    NotATweet,
}

impl std::error::Error for EventErr {}

impl fmt::Display for EventErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use EventErr::*;
        match self {
            SerdeParse(inner) => write!(f, "could not decode stream record: {}", inner),
            NotATweet => write!(f, "stream record has no author; it is not a tweet"),
        }?;
        Ok(())
    }
}

impl From<serde_json::Error> for EventErr {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeParse(error)
    }
}
