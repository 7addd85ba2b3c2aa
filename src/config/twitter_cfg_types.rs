use super::Secret;
use crate::from_env_var;
use url::Url;

pub(crate) const DEFAULT_STREAM_URL: &str = "https://stream.twitter.com/1.1/statuses/filter.json";

from_env_var!(
    /// Twitter account username to use to connect to the Streaming API
    let name = TwitterUsername;
    let default: String = String::new();
    let (env_var, allowed_values) = ("TWITTER_USERNAME", "any string".to_string());
    let from_str = |s| Some(s.to_string());
);

from_env_var!(
    /// Password for the Twitter account
    let name = TwitterPassword;
    let default: Secret = Secret::default();
    let (env_var, allowed_values) = ("TWITTER_PASSWORD", "any string".to_string());
    let from_str = |s| Some(Secret::new(s));
);

from_env_var!(
    /// The filter endpoint of the Streaming API
    let name = StreamUrl;
    let default: Url = Url::parse(DEFAULT_STREAM_URL).expect("hardcoded");
    let (env_var, allowed_values) = ("TWITTER_STREAM_URL", "an absolute http(s) URL".to_string());
    let from_str = |s| Url::parse(s).ok().filter(|url| url.scheme().starts_with("http"));
);
