//! Image resolution variants.
//!
//! Upstream hands out one image URL with a resolution marker baked into the
//! file name (`...-150x150.jpg`). The CDN serves the other sizes under the
//! same name with the marker swapped.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ImageSource;

/// Canonical resolutions, smallest first.
pub const RESOLUTIONS: [&str; 3] = ["50x50", "150x150", "500x500"];

static RESOLUTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"150x150|500x500|50x50").expect("Failed to init resolution marker RegEx")
});

/// Expand a base image URL into its three resolution variants.
///
/// An empty URL yields no variants.
pub fn image_variants(url: &str) -> Vec<ImageSource> {
    let url = url.trim();
    if url.is_empty() {
        return Vec::new();
    }

    RESOLUTIONS
        .iter()
        .map(|resolution| {
            let resized = RESOLUTION_MARKER.replace(url, *resolution);
            ImageSource::new(*resolution, secure(&resized))
        })
        .collect()
}

fn secure(url: &str) -> String {
    match url.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http://") => format!("https://{}", &url[7..]),
        _ => url.to_string(),
    }
}
