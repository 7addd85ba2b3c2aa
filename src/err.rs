use crate::config::USAGE;
use crate::following::FollowingErr;
use crate::stream::StreamErr;
use std::fmt;

/// Errors that stop the process.
pub enum FatalErr {
    Usage(Vec<&'static str>),
    ConfigErr(String),
    Dotenv(dotenv::Error),
    Logger(log::SetLoggerError),
    UrlParse(url::ParseError),
    HttpClient(reqwest::Error),
    Stream(StreamErr),
    Following(FollowingErr),
}

impl FatalErr {
    pub fn config(var: impl fmt::Display, value: impl fmt::Display, allowed_vals: impl fmt::Display) -> Self {
        Self::ConfigErr(format!(
            "{0} is set to `{1}`, which is invalid.\n{3:7}{0} must be {2}.",
            var, value, allowed_vals, ""
        ))
    }
}

impl std::error::Error for FatalErr {}
impl fmt::Debug for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl fmt::Display for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FatalErr::*;
        match self {
            Usage(missing) => write!(f, "missing {}\n\n{}", missing.join(", "), USAGE),
            ConfigErr(e) => write!(f, "{}", e),
            Dotenv(e) => write!(f, "could not read the .env file.\n{:7}{}", "", e),
            Logger(e) => write!(f, "{}", e),
            UrlParse(e) => write!(f, "could not build a Stream Spigot URL.\n{:7}{}", "", e),
            HttpClient(e) => write!(f, "could not set up the HTTP client.\n{:7}{}", "", e),
            Stream(e) => write!(f, "{}", e),
            Following(e) => write!(f, "{}", e),
        }
    }
}

impl From<dotenv::Error> for FatalErr {
    fn from(e: dotenv::Error) -> Self {
        Self::Dotenv(e)
    }
}
impl From<log::SetLoggerError> for FatalErr {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
impl From<url::ParseError> for FatalErr {
    fn from(e: url::ParseError) -> Self {
        Self::UrlParse(e)
    }
}
impl From<reqwest::Error> for FatalErr {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpClient(e)
    }
}
impl From<StreamErr> for FatalErr {
    fn from(e: StreamErr) -> Self {
        Self::Stream(e)
    }
}
impl From<FollowingErr> for FatalErr {
    fn from(e: FollowingErr) -> Self {
        Self::Following(e)
    }
}
