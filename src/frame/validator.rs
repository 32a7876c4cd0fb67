//! Frame decoding, validation, and dimension normalization.
//!
//! Every inbound frame passes through [`FrameValidator::validate`] before it
//! may be relayed. The pipeline is a pure gate: it proves the payload decodes
//! to a well-formed image that can be normalized to the target resolution,
//! while the bytes forwarded to viewers remain the sender's original encoded
//! payload, never re-encoded.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::imageops::FilterType;

use crate::domain::Resolution;
use crate::error::FrameError;

/// Stateless per-frame validator.
///
/// Validation is pure and holds no shared state, so one validator instance
/// serves every connection concurrently.
#[derive(Debug, Clone, Copy)]
pub struct FrameValidator {
    target: Resolution,
}

/// A frame that passed validation.
///
/// Carries the original encoded payload (forwarded verbatim, data-URI prefix
/// included) together with the normalized dimensions, which always equal the
/// configured target resolution.
#[derive(Debug)]
pub struct NormalizedFrame<'a> {
    payload: &'a str,
    resolution: Resolution,
    resized: bool,
}

impl<'a> NormalizedFrame<'a> {
    /// The original encoded payload, unchanged from what the sender sent.
    #[must_use]
    pub const fn payload(&self) -> &'a str {
        self.payload
    }

    /// Dimensions after normalization. Always equals the target resolution.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Whether interpolation was applied to reach the target resolution.
    #[must_use]
    pub const fn resized(&self) -> bool {
        self.resized
    }
}

impl FrameValidator {
    /// Creates a validator for the given target resolution.
    #[must_use]
    pub const fn new(target: Resolution) -> Self {
        Self { target }
    }

    /// Returns the configured target resolution.
    #[must_use]
    pub const fn target(&self) -> Resolution {
        self.target
    }

    /// Validates an encoded frame payload.
    ///
    /// Steps, each mapping to one rejection reason:
    /// 1. an empty payload is rejected outright;
    /// 2. a `data:` URI prefix is stripped at the first `,`;
    /// 3. the remainder is base64-decoded;
    /// 4. the raw bytes are decoded as an image, format sniffed from the
    ///    bytes themselves;
    /// 5. an image whose dimensions differ from the target is resized to
    ///    match.
    ///
    /// # Errors
    ///
    /// Returns a [`FrameError`] naming the first step that failed. The
    /// caller logs it and drops the frame; nothing is relayed.
    pub fn validate<'a>(&self, payload: &'a str) -> Result<NormalizedFrame<'a>, FrameError> {
        if payload.is_empty() {
            return Err(FrameError::EmptyPayload);
        }

        let encoded = strip_data_uri(payload);
        let raw = BASE64.decode(encoded)?;
        let decoded = image::load_from_memory(&raw)?;

        let source = Resolution::new(decoded.width(), decoded.height());
        let mut resized = false;
        let resolution = if source == self.target {
            source
        } else {
            let scaled = decoded.resize_exact(
                self.target.width,
                self.target.height,
                FilterType::Triangle,
            );
            let got = Resolution::new(scaled.width(), scaled.height());
            if got != self.target {
                return Err(FrameError::Resize {
                    got,
                    want: self.target,
                });
            }
            resized = true;
            got
        };

        Ok(NormalizedFrame {
            payload,
            resolution,
            resized,
        })
    }
}

/// Strips a `data:` URI prefix, keeping everything after the first `,`.
///
/// A `data:` payload with no delimiter is returned unchanged and will fail
/// base64 decoding instead.
fn strip_data_uri(payload: &str) -> &str {
    if payload.starts_with("data:") {
        payload.split_once(',').map_or(payload, |(_, rest)| rest)
    } else {
        payload
    }
}
