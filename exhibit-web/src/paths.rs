//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/exhibit` for GitHub Pages),
/// generated URLs are prefixed accordingly. Absolute URLs pass through untouched.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    if relative.starts_with("http://") || relative.starts_with("https://") {
        return relative.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_anchored_without_base() {
        assert_eq!(
            asset_path_with_base("images/a.jpg", ""),
            "/images/a.jpg"
        );
    }

    #[test]
    fn prefixes_base_once() {
        assert_eq!(
            asset_path_with_base("/images/a.jpg", "/exhibit/"),
            "/exhibit/images/a.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            asset_path_with_base("https://cdn.example/a.jpg", "/exhibit"),
            "https://cdn.example/a.jpg"
        );
    }
}
