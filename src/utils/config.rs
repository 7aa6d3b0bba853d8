/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Collects the variables `<prefix><KEY>` for each key, keyed by the lower-cased key
///
/// Variables that are not set are left out of the result, so the caller's own
/// validation decides what is missing.
///
/// # Example
/// ```ignore
/// // TIMESOLV_CLIENT_ID=abc  =>  [("client_id", "abc")]
/// let pairs = collect_prefixed_env("TIMESOLV_", &["client_id"]);
/// ```
pub fn collect_prefixed_env(prefix: &str, keys: &[&str]) -> Vec<(String, String)> {
    keys.iter()
        .filter_map(|key| {
            let var = format!("{prefix}{}", key.to_uppercase());
            get_env_or_none::<String>(&var).map(|value| (key.to_lowercase(), value))
        })
        .collect()
}
