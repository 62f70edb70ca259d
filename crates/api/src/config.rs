//! Build-time environment configuration
//!
//! Base URLs are injected at compile time so the same bundle can be built
//! against staging or production backends without runtime configuration.

/// Base URL of the REST backend (`ESP_API_URL` at build time)
pub fn api_base_url() -> &'static str {
    option_env!("ESP_API_URL").unwrap_or("http://localhost:5000/api")
}

/// Base URL for profile pictures and other images (`ESP_IMAGE_URL`)
pub fn image_base_url() -> &'static str {
    option_env!("ESP_IMAGE_URL").unwrap_or("http://localhost:5000")
}

/// Join the API base with an endpoint path, tolerating either side
/// carrying the slash.
pub fn api_url(path: &str) -> String {
    let base = api_base_url().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Absolute URL for a backend-hosted image. The backend stores paths
/// relative to the image host; already-absolute URLs pass through.
pub fn image_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = image_base_url().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_url_joins_slashes() {
        let url = api_url("/country");
        assert!(url.ends_with("/country"));
        assert!(!url.contains("//country"));

        // Some endpoint constants omit the leading slash.
        assert_eq!(api_url("city"), api_url("/city"));
    }

    #[test]
    fn test_image_url_prefixes_relative_paths_only() {
        let url = image_url("/uploads/pic.jpg");
        assert!(url.starts_with("http"));
        assert!(url.ends_with("/uploads/pic.jpg"));
        assert!(!url.contains("//uploads"));

        let absolute = "https://cdn.example.com/pic.jpg";
        assert_eq!(image_url(absolute), absolute);
    }
}
