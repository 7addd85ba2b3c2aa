use super::twitter_cfg_types::*;
use super::EnvVar;
use crate::err::FatalErr;

#[derive(Debug, Default, Clone)]
pub struct TwitterConfig {
    pub username: TwitterUsername,
    pub password: TwitterPassword,
    pub stream_url: StreamUrl,
}

impl TwitterConfig {
    pub(crate) fn from_env(env: &EnvVar) -> Result<Self, FatalErr> {
        let cfg = TwitterConfig {
            username: TwitterUsername::default().maybe_update(env.get(TwitterUsername::ENV_VAR))?,
            password: TwitterPassword::default().maybe_update(env.get(TwitterPassword::ENV_VAR))?,
            stream_url: StreamUrl::default().maybe_update(env.get(StreamUrl::ENV_VAR))?,
        };
        log::info!("Twitter configuration:\n{:#?}", &cfg);
        Ok(cfg)
    }

    pub(crate) fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.is_empty() {
            missing.push(TwitterUsername::ENV_VAR);
        }
        if self.password.is_empty() {
            missing.push(TwitterPassword::ENV_VAR);
        }
        missing
    }
}
