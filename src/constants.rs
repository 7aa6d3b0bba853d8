/// Default base URL for the TimeSolv REST API (OAuth2 v2 services)
pub const DEFAULT_BASE_URL: &str = "https://apps.timesolv.com/Services/rest/oauth2v2/";
/// Number of records requested per page on every search endpoint
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Default timeout in seconds applied to every HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the TimeSolv API
pub const USER_AGENT: &str = "timesolv-client/0.1.0";
/// Path of the OAuth2 token endpoint, relative to the base URL
pub const TOKEN_ENDPOINT: &str = "Token";
/// Grant type used when exchanging an authorization code for an access token
pub const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

/// Canonical credential key for the OAuth2 client identifier
pub const CLIENT_ID_KEY: &str = "client_id";
/// Canonical credential key for the OAuth2 client secret
pub const CLIENT_SECRET_KEY: &str = "client_secret";
/// Canonical credential key for the authorization code
pub const AUTHORIZATION_CODE_KEY: &str = "authorization_code";
/// Canonical credential key for the redirect URI registered with the application
pub const REDIRECT_URI_KEY: &str = "redirect_uri";
/// Optional key overriding the default base URL
pub const BASE_URL_KEY: &str = "base_url";
/// Optional key overriding the default request timeout (seconds)
pub const TIMEOUT_KEY: &str = "timeout";

/// Credential keys that must be present before a token can be requested
pub const REQUIRED_CREDENTIAL_KEYS: [&str; 4] = [
    CLIENT_ID_KEY,
    CLIENT_SECRET_KEY,
    AUTHORIZATION_CODE_KEY,
    REDIRECT_URI_KEY,
];

/// Prefix of the environment variables read by `Config::from_env`
pub const ENV_PREFIX: &str = "TIMESOLV_";
