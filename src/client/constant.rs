pub const SITE_NAME: &str = "Inventory Panel";

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "cn_token";

/// Storage key for the cached user profile.
pub const USER_KEY: &str = "cn_user";

pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// `allowed_ips` value meaning "no IP restriction".
pub const UNRESTRICTED_IP: &str = "0.0.0.0/0";

/// How long a notice stays up before closing itself.
pub const NOTICE_TIMEOUT_MS: u64 = 5000;
