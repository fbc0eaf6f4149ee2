use web_sys::window;

/// Reads `window.ENV_CONFIG[key]`, the runtime configuration injected by `index.html`.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if value.is_undefined() || value.is_null() {
        log::debug!("Environment variable '{}' is undefined", key);
        return None;
    }

    // Numbers and booleans are accepted as well as strings.
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .or_else(|| value.as_bool().map(|b| b.to_string()))
}

/// Values baked in at compile time, e.g. `BACKEND_URL=/api trunk build`.
pub fn get_build_var(key: &str) -> Option<String> {
    let value = match key {
        "BACKEND_URL" => option_env!("BACKEND_URL"),
        "APP_NAME" => option_env!("APP_NAME"),
        "DEBUG_MODE" => option_env!("DEBUG_MODE"),
        "REQUEST_TIMEOUT_MS" => option_env!("REQUEST_TIMEOUT_MS"),
        "MAX_RESULTS" => option_env!("MAX_RESULTS"),
        _ => None,
    };
    value.map(str::to_string)
}
