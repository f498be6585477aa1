//! Build-time configuration for logging and legal links with an optional
//! runtime override. The runtime config is read from `window.NXVET_CONFIG`
//! (if present) so static deployments can change values without rebuilding.
//! Configuration values are public; do not store secrets here.

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TERMS_URL: &str = "#";
const DEFAULT_PRIVACY_URL: &str = "#";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub terms_url: String,
    pub privacy_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            terms_url: DEFAULT_TERMS_URL.to_string(),
            privacy_url: DEFAULT_PRIVACY_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self {
            log_level: build_value(option_env!("NXVET_LOG_LEVEL"), DEFAULT_LOG_LEVEL),
            terms_url: build_value(option_env!("NXVET_TERMS_URL"), DEFAULT_TERMS_URL),
            privacy_url: build_value(option_env!("NXVET_PRIVACY_URL"), DEFAULT_PRIVACY_URL),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

/// A build-time variable that is set but blank falls back to `default`.
fn build_value(value: Option<&str>, default: &str) -> String {
    value
        .and_then(normalize_runtime_value)
        .unwrap_or_else(|| default.to_string())
}

#[derive(Default)]
struct RuntimeConfig {
    log_level: Option<String>,
    terms_url: Option<String>,
    privacy_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
    if let Some(value) = runtime.terms_url {
        config.terms_url = value;
    }
    if let Some(value) = runtime.privacy_url {
        config.privacy_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("NXVET_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        log_level: read_runtime_value(&object, "log_level"),
        terms_url: read_runtime_value(&object, "terms_url"),
        privacy_url: read_runtime_value(&object, "privacy_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, build_value, normalize_runtime_value, AppConfig, RuntimeConfig,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            log_level: "warn".to_string(),
            terms_url: "https://nxvet.com/terms".to_string(),
            privacy_url: "https://nxvet.com/privacy".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  debug "),
            Some("debug".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            log_level: normalize_runtime_value(""),
            terms_url: normalize_runtime_value("  "),
            privacy_url: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            log_level: normalize_runtime_value("trace"),
            terms_url: normalize_runtime_value("https://legal.example/terms"),
            privacy_url: normalize_runtime_value("https://legal.example/privacy"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.log_level, "trace");
        assert_eq!(config.terms_url, "https://legal.example/terms");
        assert_eq!(config.privacy_url, "https://legal.example/privacy");
    }

    #[test]
    fn blank_build_value_uses_default() {
        assert_eq!(build_value(Some(""), "info"), "info");
        assert_eq!(build_value(Some("  "), "info"), "info");
        assert_eq!(build_value(None, "#"), "#");
        assert_eq!(build_value(Some(" debug "), "info"), "debug");
    }

    #[test]
    fn load_without_runtime_config_is_never_empty() {
        let config = AppConfig::load();
        assert!(!config.log_level.is_empty());
        assert!(!config.terms_url.is_empty());
    }
}
