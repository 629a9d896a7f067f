//! Text-embeddable image encoding
//!
//! Produces `data:` URLs so an encoded image can be placed directly into
//! an HTML `<img src=...>` attribute.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Prefix of every PNG data URL produced by [`encode_data_url`].
pub const DATA_URL_PNG_PREFIX: &str = "data:image/png;base64,";

/// Base64-encode bytes with the standard alphabet and padding.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Encode an image as a PNG `data:` URL.
///
/// # Example
///
/// ```
/// use pixlab_core::Pix;
/// use pixlab_io::{DATA_URL_PNG_PREFIX, encode_data_url};
///
/// let pix = Pix::from_raw(1, 1, 1, vec![0]).unwrap();
/// let url = encode_data_url(&pix).unwrap();
/// assert!(url.starts_with(DATA_URL_PNG_PREFIX));
/// ```
#[cfg(feature = "png-format")]
pub fn encode_data_url(pix: &pixlab_core::Pix) -> crate::IoResult<String> {
    let png = crate::write_png_mem(pix)?;
    let mut url = String::with_capacity(DATA_URL_PNG_PREFIX.len() + png.len().div_ceil(3) * 4);
    url.push_str(DATA_URL_PNG_PREFIX);
    STANDARD.encode_string(&png, &mut url);
    Ok(url)
}
