//! Shared constants and invariants

pub const DEFAULT_PTOKEN_PATH: &str = "/etc/xensource/ptoken";
pub const DEFAULT_LOOPBACK_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// Supported handler names
pub const HANDLER_ACCESS_TOKEN: &str = "accesstoken";
pub const HANDLER_PTOKEN: &str = "ptoken";
pub const HANDLER_XAPI_TOKEN: &str = "xapitoken";

// Header names, emitted exactly as written
pub const HEADER_ACCESS_TOKEN: &str = "X-Access-Token";
pub const HEADER_REFERER: &str = "Referer";
pub const HEADER_COOKIE: &str = "cookie";

// Cookie keys
pub const COOKIE_POOL_SECRET: &str = "pool_secret";
pub const COOKIE_SESSION_ID: &str = "session_id";

// Required JSON fields
pub const FIELD_TOKEN: &str = "token";
pub const FIELD_TOKEN_ID: &str = "token_id";
pub const FIELD_XAPI_TOKEN: &str = "xapitoken";
