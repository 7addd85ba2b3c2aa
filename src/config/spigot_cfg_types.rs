use super::Secret;
use crate::from_env_var;

from_env_var!(
    /// Host where Stream Spigot is running
    let name = SpigotHostname;
    let default: String = String::new();
    let (env_var, allowed_values) = ("STREAM_SPIGOT_HOSTNAME", "a host name, optionally with a port".to_string());
    let from_str = |s| match s.contains('/') {
        true => None,
        false => Some(s.to_string()),
    };
);

from_env_var!(
    /// Secret key that must be passed in all Stream Spigot HTTP requests
    let name = SpigotSecret;
    let default: Secret = Secret::default();
    let (env_var, allowed_values) = ("STREAM_SPIGOT_SECRET", "any string".to_string());
    let from_str = |s| Some(Secret::new(s));
);
