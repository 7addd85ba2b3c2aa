use std::fmt;

#[derive(Debug)]
pub enum StreamErr {
    Http(reqwest::Error),
    Status(u16),
}

impl std::error::Error for StreamErr {}

impl fmt::Display for StreamErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use StreamErr::*;
        match self {
            Http(e) => write!(f, "Twitter stream connection failed: {}", e),
            Status(code) => write!(f, "Twitter stream replied with HTTP status {}", code),
        }
    }
}

impl From<reqwest::Error> for StreamErr {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
