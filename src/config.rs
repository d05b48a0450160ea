//! Client Configuration
//!
//! API base URL, durable-storage key names, and the prediction-image
//! URL template. The base URL can be overridden at runtime through
//! local storage.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://medscan-api-backend.onrender.com";

/// Local storage keys for the durable client state
pub mod storage_keys {
    /// Bearer access token issued by the backend
    pub const ACCESS_TOKEN: &str = "medscan_access_token";
    /// Token type ("bearer" unless the backend says otherwise)
    pub const TOKEN_TYPE: &str = "medscan_token_type";
    /// Email of the signed-in user
    pub const USER_EMAIL: &str = "medscan_user_email";
    /// Display name of the signed-in user
    pub const USER_NAME: &str = "medscan_user_name";
    /// Reserved for a client-side prediction cache (not read yet)
    pub const PREDICTION_HISTORY: &str = "medscan_prediction_history";
    /// Runtime override for the API base URL
    pub const API_URL: &str = "medscan_api_url";
}

/// Get the API base URL from local storage or use the default
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(storage_keys::API_URL) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Strip a trailing slash so endpoint paths can be appended directly
pub fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// URL of the stored image for a past prediction.
///
/// The backend exposes the uploaded X-ray for a prediction id; history
/// items without an explicit `image_url` fall back to this.
pub fn prediction_image_url(prediction_id: &str) -> String {
    format!("{}/predictions/{}/image", api_base(), prediction_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base("http://localhost:8000"), "http://localhost:8000");
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys = [
            storage_keys::ACCESS_TOKEN,
            storage_keys::TOKEN_TYPE,
            storage_keys::USER_EMAIL,
            storage_keys::USER_NAME,
            storage_keys::PREDICTION_HISTORY,
            storage_keys::API_URL,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
