//! Configuration for the frontend application.

use coursehub_shared::ApiConfig;

/// Base URL for static assets
/// - For local development: "/"
/// - For the static mock build: "/coursehub/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/coursehub/";

// API base URL - 编译时从环境变量读取，默认本地开发地址
#[cfg(not(feature = "mock"))]
const API_BASE: &str = match option_env!("COURSEHUB_API_BASE") {
    Some(url) => url,
    None => "http://localhost:4000/api/v1",
};

#[cfg(feature = "mock")]
const API_BASE: &str = "mock://coursehub";

/// localStorage key the login flow stores the session token under.
const TOKEN_STORAGE_KEY: &str = "token";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

fn stored_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
}

/// Backend location and credentials, resolved once at startup.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(API_BASE).with_token(stored_token())
}
