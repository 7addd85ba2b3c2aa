//! Configuration comes from environmental variables, optionally set in a `.env` file
//! (`.env.production` when `ENV=production`).
mod environmental_variables;
mod secret;
mod spigot_cfg;
mod spigot_cfg_types;
mod twitter_cfg;
mod twitter_cfg_types;

pub use secret::Secret;
pub use spigot_cfg::SpigotConfig;
pub use spigot_cfg_types::{SpigotHostname, SpigotSecret};
pub use twitter_cfg::TwitterConfig;
pub use twitter_cfg_types::{StreamUrl, TwitterPassword, TwitterUsername};

pub(crate) use environmental_variables::EnvVar;

use crate::err::FatalErr;
use hashbrown::HashMap;
use std::env;
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

pub const USAGE: &str = "\
Usage: birdpinger

Watches the Twitter stream for updates by the users Stream Spigot follows and pings
Stream Spigot about each one.  Settings are read from the environment (or a .env file):

    TWITTER_USERNAME        Twitter account username to use to connect to the Streaming API
    TWITTER_PASSWORD        Password for the Twitter account
    STREAM_SPIGOT_HOSTNAME  Host where Stream Spigot is running
    STREAM_SPIGOT_SECRET    Secret key that must be passed in all Stream Spigot HTTP requests
    TWITTER_STREAM_URL      (optional) Streaming API filter endpoint
    RUST_LOG                (optional) Log level: error, warn, info, debug or trace";

#[derive(EnumString, EnumVariantNames, Debug, PartialEq)]
#[strum(serialize_all = "snake_case")]
enum Env {
    Production,
    Development,
}

pub fn merge_dotenv() -> Result<(), FatalErr> {
    let env_file = match env::var("ENV").ok() {
        None => ".env",
        Some(value) => match Env::from_str(&value) {
            Ok(Env::Production) => ".env.production",
            Ok(Env::Development) => ".env",
            Err(_) => Err(FatalErr::config(
                "ENV",
                value,
                format!("one of: {:?}", Env::VARIANTS),
            ))?,
        },
    };

    match dotenv::from_filename(env_file) {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(log::debug!("No {} file; using the environment only", env_file)),
        Err(e) => Err(e.into()),
    }
}

/// Read both configurations, failing with the usage text if any required variable is
/// unset or empty.
pub fn from_env(env_vars: HashMap<String, String>) -> Result<(TwitterConfig, SpigotConfig), FatalErr> {
    let env_vars = EnvVar::new(env_vars);
    log::info!("Environmental variables birdpinger received: {}", &env_vars);

    let twitter = TwitterConfig::from_env(&env_vars)?;
    let spigot = SpigotConfig::from_env(&env_vars)?;

    let missing: Vec<_> = twitter.missing().into_iter().chain(spigot.missing()).collect();
    if !missing.is_empty() {
        return Err(FatalErr::Usage(missing));
    }
    Ok((twitter, spigot))
}

#[cfg(test)]
mod test {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete() -> HashMap<String, String> {
        vars(&[
            ("TWITTER_USERNAME", "bird"),
            ("TWITTER_PASSWORD", "hunter2"),
            ("STREAM_SPIGOT_HOSTNAME", "spigot.example.com:8080"),
            ("STREAM_SPIGOT_SECRET", "a b&c"),
        ])
    }

    #[test]
    fn reads_all_required_vars() -> Result<(), FatalErr> {
        let (twitter, spigot) = from_env(complete())?;
        assert_eq!(&*twitter.username, "bird");
        assert_eq!(twitter.password.expose(), "hunter2");
        assert_eq!(twitter.stream_url.as_str(), twitter_cfg_types::DEFAULT_STREAM_URL);
        assert_eq!(&*spigot.hostname, "spigot.example.com:8080");
        Ok(())
    }

    #[test]
    fn builds_spigot_urls() -> Result<(), FatalErr> {
        let (_, spigot) = from_env(complete())?;
        assert_eq!(
            spigot.following_url()?.as_str(),
            "http://spigot.example.com:8080/bird-feeder/pinger/following?secret=a%20b%26c"
        );
        assert_eq!(
            spigot.ping_url()?.as_str(),
            "http://spigot.example.com:8080/bird-feeder/pinger/ping"
        );
        Ok(())
    }

    #[test]
    fn missing_vars_are_a_usage_error() {
        let mut env_vars = complete();
        env_vars.remove("TWITTER_PASSWORD");
        env_vars.insert("STREAM_SPIGOT_SECRET".to_string(), String::new());

        match from_env(env_vars) {
            Err(FatalErr::Usage(missing)) => {
                assert_eq!(missing, vec!["TWITTER_PASSWORD", "STREAM_SPIGOT_SECRET"])
            }
            other => panic!("expected a usage error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_stream_url_is_a_config_error() {
        let mut env_vars = complete();
        env_vars.insert("TWITTER_STREAM_URL".to_string(), "ftp://nope".to_string());
        assert!(matches!(from_env(env_vars), Err(FatalErr::ConfigErr(_))));
    }

    #[test]
    fn secrets_stay_out_of_logs() -> Result<(), FatalErr> {
        let (twitter, spigot) = from_env(complete())?;
        let logged = format!("{:?}{:?}{}", twitter, spigot, EnvVar::new(complete()));
        assert!(!logged.contains("hunter2"));
        assert!(!logged.contains("a b&c"));
        assert!(logged.contains("bird"));
        Ok(())
    }
}
