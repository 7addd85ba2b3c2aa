use std::fmt;

#[derive(Debug)]
pub enum PingErr {
    Http(reqwest::Error),
    Status(u16),
}

impl std::error::Error for PingErr {}

impl fmt::Display for PingErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use PingErr::*;
        match self {
            Http(e) => write!(f, "got error {} when trying to POST ping", e),
            Status(code) => write!(f, "got HTTP status {} when trying to POST ping", code),
        }
    }
}

impl From<reqwest::Error> for PingErr {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
