//! Per-platform handles: the key-value store and the API origin.

use api::ApiClient;

/// Storage backing the session, history and theme.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

/// Storage backing the session, history and theme. Outside the browser nothing
/// is persisted, so server-side rendering always sees a signed-out visitor.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub fn make_store() -> PlatformStore {
    PlatformStore::new()
}

/// Origin the REST API is served from. The SPA and the API share a host.
pub fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    "http://127.0.0.1:8080".to_string()
}

pub fn make_client(token: Option<String>) -> ApiClient {
    ApiClient::new(api_base_url()).with_token(token)
}
