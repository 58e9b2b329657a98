use std::collections::HashMap;

/// Set by the platform inside every app it schedules.
pub const APP_STATE_URL_ENV: &str = "LIGHTNING_APP_STATE_URL";

/// Returns true when the process runs inside a Lightning AI cloud app.
pub fn is_running_in_cloud() -> bool {
    std::env::var_os(APP_STATE_URL_ENV).is_some()
}

/// Same check against an explicit environment mapping. Only presence counts, not the value.
pub fn is_running_in_cloud_from<S: std::hash::BuildHasher>(
    env: &HashMap<String, String, S>,
) -> bool {
    env.contains_key(APP_STATE_URL_ENV)
}
