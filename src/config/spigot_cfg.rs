use super::spigot_cfg_types::*;
use super::EnvVar;
use crate::err::FatalErr;

use url::Url;

#[derive(Debug, Default, Clone)]
pub struct SpigotConfig {
    pub hostname: SpigotHostname,
    pub secret: SpigotSecret,
}

impl SpigotConfig {
    pub(crate) fn from_env(env: &EnvVar) -> Result<Self, FatalErr> {
        let cfg = SpigotConfig {
            hostname: SpigotHostname::default().maybe_update(env.get(SpigotHostname::ENV_VAR))?,
            secret: SpigotSecret::default().maybe_update(env.get(SpigotSecret::ENV_VAR))?,
        };
        log::info!("Stream Spigot configuration:\n{:#?}", &cfg);
        Ok(cfg)
    }

    pub(crate) fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.hostname.is_empty() {
            missing.push(SpigotHostname::ENV_VAR);
        }
        if self.secret.is_empty() {
            missing.push(SpigotSecret::ENV_VAR);
        }
        missing
    }

    /// `http://<hostname>/bird-feeder/pinger/`
    pub fn base_url(&self) -> Result<Url, FatalErr> {
        Ok(Url::parse(&format!(
            "http://{}/bird-feeder/pinger/",
            &*self.hostname
        ))?)
    }

    pub fn following_url(&self) -> Result<Url, FatalErr> {
        let secret = urlencoding::encode(self.secret.expose());
        Ok(self.base_url()?.join(&format!("following?secret={}", secret))?)
    }

    pub fn ping_url(&self) -> Result<Url, FatalErr> {
        Ok(self.base_url()?.join("ping")?)
    }
}
