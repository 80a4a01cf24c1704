/// Configuration file location
pub mod path {
    /// Default path to the CLI configuration file (home-expanded)
    pub const DEFAULT: &str = "~/.bao";

    /// Environment variable overriding the configuration file location
    pub const ENV_VAR: &str = "BAO_CONFIG_PATH";

    /// Pre-rename variable, consulted only when `ENV_VAR` is unset or empty
    pub const LEGACY_ENV_VAR: &str = "VAULT_CONFIG_PATH";
}

/// Top-level keys accepted in the configuration file
pub mod keys {
    pub const TOKEN_HELPER: &str = "token_helper";
    pub const CURRENT_CONTEXT: &str = "current_context";
    pub const CONTEXTS: &str = "contexts";

    /// Allow-list checked before decoding
    pub const VALID: &[&str] = &[TOKEN_HELPER, CURRENT_CONTEXT, CONTEXTS];

    /// Fields decoded from each context block
    pub const SERVER: &str = "server";
    pub const NAMESPACE: &str = "namespace";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable selecting the output format
    pub const FORMAT_ENV_VAR: &str = "BAO_FORMAT";
}

/// Process exit codes
pub mod exit {
    pub const SUCCESS: u8 = 0;
    /// Bad flags or arguments
    pub const USAGE: u8 = 1;
    /// Config could not be loaded, or nothing to list
    pub const ERROR: u8 = 2;
}
