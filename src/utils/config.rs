/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, returning `default` when the
/// variable is missing or does not parse
///
/// A value that is present but unparseable is logged, a missing one is not.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse {env_var}={raw:?}: {e:?}, using default");
            default
        }
    }
}

/// Reads and parses an environment variable, `None` when missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok()?.trim().parse::<T>().ok()
}
