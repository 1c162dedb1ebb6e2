/// Configuration constants for the Kestra API
pub mod api {
    /// Base path for the Kestra REST API v1
    pub const BASE_PATH: &str = "/api/v1";

    /// Flows endpoint
    pub const FLOWS: &str = "flows";

    /// Executions endpoint
    pub const EXECUTIONS: &str = "executions";

    /// Namespace search endpoint
    pub const NAMESPACES_SEARCH: &str = "namespaces/search";

    /// First page number for paged searches
    pub const DEFAULT_PAGE: u32 = 1;

    /// Default page size for paged searches
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for the context config file
pub mod context {
    /// Directory under $HOME holding the config file
    pub const DIR_NAME: &str = ".kestractl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active context
    pub const ENV_VAR: &str = "KESTRACTL_CONTEXT";
}

/// Environment variables read by the global connection flags
pub mod env_vars {
    /// Server URL
    pub const HOST: &str = "KESTRA_HOST";

    /// Tenant identifier
    pub const TENANT: &str = "KESTRA_TENANT";

    /// API token
    pub const TOKEN: &str = "KESTRA_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Tenant used when neither a flag nor the active context provides one
    pub const TENANT: &str = "main";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
