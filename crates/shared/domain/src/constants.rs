/// Environment prefix for configuration overrides (`UNI__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "UNI";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Binary name, also the log file prefix.
pub const APP_NAME: &str = "campus";
