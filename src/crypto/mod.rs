//! Media URL decryption.
//!
//! JioSaavn ships stream URLs as base64 DES-ECB ciphertext under a fixed,
//! publicly known key. Decrypting gives a URL template for the 96 kbps
//! stream, from which every other bitrate is derived by swapping the marker.
//!
//! Nothing here returns an error: a missing or broken `encrypted_media_url`
//! is common in preview payloads and simply yields no download links.

use base64::prelude::*;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, KeyInit};
use tracing::{debug, warn};

use crate::models::DownloadLink;

/// DES key used by the upstream web player.
const MEDIA_KEY: &[u8; 8] = b"38346591";

/// Marker of the bitrate present in every decrypted template.
const DEFAULT_BITRATE_MARKER: &str = "_96";

/// Canonical bitrates as (marker, label), lowest first.
pub const BITRATES: [(&str, &str); 5] = [
    ("_12", "12kbps"),
    ("_48", "48kbps"),
    ("_96", "96kbps"),
    ("_160", "160kbps"),
    ("_320", "320kbps"),
];

type DesEcbDec = ecb::Decryptor<des::Des>;

/// Decrypt an `encrypted_media_url` into its URL template.
///
/// Returns `None` on empty input, invalid base64, bad padding or non-UTF-8
/// plaintext.
pub fn decrypt_media_url(encrypted: &str) -> Option<String> {
    let encrypted = encrypted.trim();
    if encrypted.is_empty() {
        return None;
    }

    let ciphertext = match BASE64_STANDARD.decode(encrypted) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Media URL is not valid base64: {}", e);
            return None;
        }
    };

    let decryptor = DesEcbDec::new_from_slice(MEDIA_KEY).ok()?;
    let plaintext = match decryptor.decrypt_padded_vec_mut::<Pkcs7>(&ciphertext) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Media URL decryption failed: {:?}", e);
            return None;
        }
    };

    String::from_utf8(plaintext).ok()
}

/// Derive the five bitrate download links from an encrypted media URL.
///
/// Returns exactly five links on success and an empty list otherwise.
pub fn download_links(encrypted: &str) -> Vec<DownloadLink> {
    let Some(template) = decrypt_media_url(encrypted) else {
        return Vec::new();
    };

    debug!("Decrypted media template: {}", template);

    BITRATES
        .iter()
        .map(|(marker, label)| {
            DownloadLink::new(*label, template.replacen(DEFAULT_BITRATE_MARKER, marker, 1))
        })
        .collect()
}
