// Start of file: /src/config/environment.rs

// * Environment configuration with a singleton pattern.
// * The listening port comes from PORT, then the deploy-time APP_PORT
// * placeholder, then DEFAULT_PORT.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{anyhow, bail, Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Rewritten by the deployment template. Left untouched, the port falls back to DEFAULT_PORT.
pub const APP_PORT: &str = "{{APP_PORT}}";

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ENABLED: bool = true;

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    // * false serves the plain /ping handler without CORS handling
    pub cors_enabled: bool,
    // * None means no per-request timeout layer is installed
    pub request_timeout_seconds: Option<u64>,
}

/// Returns true while `value` still has the shape of an unsubstituted `{{TOKEN}}`.
///
/// The check is on shape rather than equality with [`APP_PORT`], so a
/// template engine that rewrites every occurrence of the token cannot turn
/// the comparison itself into a match.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed: &str = value.trim();
    trimmed.starts_with("{{") && trimmed.ends_with("}}")
}

/// Resolves the listening port: runtime `PORT` first, then the substituted
/// placeholder, then [`DEFAULT_PORT`].
pub fn resolve_port(runtime: Option<&str>, placeholder: &str) -> Result<u16> {
    if let Some(raw) = runtime.map(str::trim).filter(|s| !s.is_empty()) {
        return parse_port("PORT", raw);
    }

    let substituted: &str = placeholder.trim();
    if substituted.is_empty() || is_placeholder(substituted) {
        return Ok(DEFAULT_PORT);
    }

    parse_port("APP_PORT", substituted)
}

// Port 0 would bind an ephemeral port, so it is rejected like any other out-of-range value
fn parse_port(key: &str, raw: &str) -> Result<u16> {
    let port: u16 = raw
        .parse()
        .with_context(|| format!("Invalid {key} value '{raw}'"))?;

    if port == 0 {
        bail!("Invalid {key} value '{raw}': port must be between 1 and 65535");
    }

    Ok(port)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("Invalid {key} value '{other}'"),
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process and, outside
    // * production, from a .env file.
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit variable map, providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: resolve_port(get_var("PORT"), APP_PORT)?,

            cors_enabled: get_var("CORS_ENABLED")
                .map(|s| parse_flag("CORS_ENABLED", s))
                .transpose()?
                .unwrap_or(DEFAULT_CORS_ENABLED),

            request_timeout_seconds: get_var("REQUEST_TIMEOUT_SECONDS")
                .map(|s| s.trim().parse::<u64>().context("Invalid REQUEST_TIMEOUT_SECONDS"))
                .transpose()?
                .filter(|secs| *secs > 0),
        })
    }

    // * Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> Result<&'static Self> {
        static INSTANCE: Lazy<Result<EnvironmentVariables, anyhow::Error>> = Lazy::new(|| {
            let config: EnvironmentVariables = EnvironmentVariables::load()?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        INSTANCE
            .as_ref()
            .map_err(|err| anyhow!("Failed to load environment configuration: {err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unsubstituted_placeholder_falls_back_to_default_port() {
        assert_eq!(resolve_port(None, "{{APP_PORT}}").unwrap(), 8080);
        assert_eq!(resolve_port(None, "").unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn substituted_placeholder_is_used() {
        assert_eq!(resolve_port(None, "9090").unwrap(), 9090);
        assert_eq!(resolve_port(None, " 3000 ").unwrap(), 3000);
    }

    #[test]
    fn runtime_port_wins_over_placeholder() {
        assert_eq!(resolve_port(Some("7000"), "9090").unwrap(), 7000);
        assert_eq!(resolve_port(Some("   "), "9090").unwrap(), 9090);
    }

    #[test]
    fn invalid_ports_are_rejected() {
        assert!(resolve_port(Some("http"), APP_PORT).is_err());
        assert!(resolve_port(None, "70000").is_err());
    }

    #[test]
    fn port_zero_is_rejected_with_the_variable_name() {
        let err = resolve_port(Some("0"), APP_PORT).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = resolve_port(None, "0").unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));

        let err = EnvironmentVariables::from_vars(&vars(&[("PORT", "0")])).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value"));
    }

    #[test]
    fn placeholder_detection_is_by_shape() {
        assert!(is_placeholder("{{APP_PORT}}"));
        assert!(is_placeholder("{{ANYTHING_ELSE}}"));
        assert!(!is_placeholder("8080"));
        assert!(!is_placeholder("{APP_PORT}"));
    }

    #[test]
    fn empty_map_yields_defaults() {
        let env = EnvironmentVariables::from_vars(&HashMap::new()).unwrap();

        assert_eq!(env.environment, "development");
        assert_eq!(env.host, "0.0.0.0");
        assert_eq!(env.port, DEFAULT_PORT);
        assert!(env.cors_enabled);
        assert_eq!(env.request_timeout_seconds, None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let env = EnvironmentVariables::from_vars(&vars(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "5050"),
            ("CORS_ENABLED", "off"),
            ("REQUEST_TIMEOUT_SECONDS", "4"),
        ]))
        .unwrap();

        assert_eq!(env.environment, "production");
        assert_eq!(env.host, "127.0.0.1");
        assert_eq!(env.port, 5050);
        assert!(!env.cors_enabled);
        assert_eq!(env.request_timeout_seconds, Some(4));
    }

    #[test]
    fn zero_timeout_disables_the_layer() {
        let env = EnvironmentVariables::from_vars(&vars(&[("REQUEST_TIMEOUT_SECONDS", "0")])).unwrap();
        assert_eq!(env.request_timeout_seconds, None);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = EnvironmentVariables::from_vars(&vars(&[("CORS_ENABLED", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("CORS_ENABLED"));

        let err = EnvironmentVariables::from_vars(&vars(&[("REQUEST_TIMEOUT_SECONDS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECONDS"));
    }
}

// End of file: /src/config/environment.rs
