//! Build-time configuration for the frontend application.

/// Backend API base URL, read at compile time from `TOF_API_BASE`.
pub const API_BASE: &str = match option_env!("TOF_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

pub const SITE_NAME: &str = "Times of Fashion";
pub const CONTACT_EMAIL: &str = "hello@timesoffashion.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: [&str; 2] = ["123 Fashion Avenue", "New York, NY 10001"];

/// Helper function to construct asset paths under `/assets/`.
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_prefix("assets/").unwrap_or(path);
    format!("/assets/{path}")
}

#[cfg(test)]
mod tests {
    use super::asset_path;

    #[test]
    fn asset_paths_are_rooted_once() {
        assert_eq!(asset_path("hero1.jpg"), "/assets/hero1.jpg");
        assert_eq!(asset_path("/assets/contact.png"), "/assets/contact.png");
        assert_eq!(asset_path("assets/logo.jpg"), "/assets/logo.jpg");
    }
}
