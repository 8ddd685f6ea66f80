//! Asset path resolution for uploaded and bundled images

use shared::CONFIG;

/// Resolve an uploaded asset path, falling back to the placeholder image
pub fn storage_url(path: Option<&str>) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return CONFIG.assets.placeholder.to_string();
    };

    if is_rooted(path) {
        return path.to_string();
    }

    let relative = path.trim_start_matches("./");
    format!("{}/{}", CONFIG.assets.storage_root, relative)
}

/// Path of a bundled static image
pub fn image_url(name: &str) -> String {
    format!("{}/{}", CONFIG.assets.images_root, name.trim_start_matches('/'))
}

fn is_rooted(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_icon_uses_placeholder() {
        assert_eq!(storage_url(None), "/assets/images/placeholder.svg");
        assert_eq!(storage_url(Some("")), "/assets/images/placeholder.svg");
        assert_eq!(storage_url(Some("   ")), "/assets/images/placeholder.svg");
    }

    #[test]
    fn test_relative_path_under_storage() {
        assert_eq!(storage_url(Some("tools/figma.png")), "/storage/tools/figma.png");
        assert_eq!(storage_url(Some("./tools/vscode.svg")), "/storage/tools/vscode.svg");
    }

    #[test]
    fn test_rooted_and_absolute_unchanged() {
        assert_eq!(storage_url(Some("/storage/tools/git.png")), "/storage/tools/git.png");
        assert_eq!(storage_url(Some("https://cdn.example.com/a.png")), "https://cdn.example.com/a.png");
        assert_eq!(storage_url(Some("//cdn.example.com/a.png")), "//cdn.example.com/a.png");
    }

    #[test]
    fn test_image_url() {
        assert_eq!(image_url("about.webp"), "/assets/images/about.webp");
        assert_eq!(image_url("/cta.webp"), "/assets/images/cta.webp");
    }
}
