/// Base address of the admin API
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/admin/api";
/// Upper bound for a single request in milliseconds (12 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 1000 * 12;
/// Default `Content-Type` for POST bodies
pub const FORM_URLENCODED_UTF8: &str = "application/x-www-form-urlencoded;charset=UTF-8";
/// User agent string sent with every request
pub const USER_AGENT: &str = "admin-http/0.1.0";
/// Route of the login page
pub const LOGIN_PATH: &str = "/login";
/// Query parameter carrying the path to return to after login
pub const REDIRECT_QUERY_KEY: &str = "redirect";
/// Local storage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "token";
/// How long a notification stays on screen, in milliseconds
pub const NOTIFICATION_DURATION_MS: u64 = 1000;
/// Delay between the session-expired notification and the login redirect, in milliseconds
pub const LOGIN_REDIRECT_DELAY_MS: u64 = 1000;
/// Shown when the server reports the session as expired (403)
pub const SESSION_EXPIRED_MESSAGE: &str = "session expired, please log in again";
/// Shown when the server reports a missing resource (404)
pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "requested resource does not exist";
/// Length of the correlation id attached to each request
pub const REQUEST_ID_LENGTH: usize = 12;
