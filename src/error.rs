//! Frame rejection taxonomy.
//!
//! [`FrameError`] is the central error type for the frame ingestion path.
//! Every variant is terminal for exactly one frame: the error is logged with
//! the sender's display name and the frame is dropped, with no signal back
//! to the sender and no effect on any other connection.

use crate::domain::Resolution;

/// Reason a frame was rejected before reaching any viewer.
///
/// A disconnect or unregister for an unknown connection is not represented
/// here — that case is a no-op, surfaced as `None` from
/// [`crate::domain::SessionRegistry::unregister`].
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload was empty or absent.
    #[error("empty frame payload")]
    EmptyPayload,

    /// The transport encoding could not be decoded as base64.
    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid image (corrupt, truncated, or an
    /// unsupported format).
    #[error("payload is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),

    /// Dimension normalization produced something other than the target
    /// resolution.
    #[error("resize produced {got} instead of {want}")]
    Resize {
        /// Dimensions the resize actually produced.
        got: Resolution,
        /// Configured target resolution.
        want: Resolution,
    },
}

impl FrameError {
    /// Returns the stable snake_case reason string for this variant.
    ///
    /// Used as a structured log field so rejections can be counted and
    /// asserted on without string-matching display output.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::EmptyPayload => "empty_payload",
            Self::Encoding(_) => "encoding_error",
            Self::Decode(_) => "decode_error",
            Self::Resize { .. } => "resize_error",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_stable() {
        assert_eq!(FrameError::EmptyPayload.reason(), "empty_payload");
        let resize = FrameError::Resize {
            got: Resolution::new(640, 480),
            want: Resolution::new(1280, 720),
        };
        assert_eq!(resize.reason(), "resize_error");
    }

    #[test]
    fn encoding_error_wraps_base64_source() {
        use base64::Engine as _;
        let result = base64::engine::general_purpose::STANDARD.decode("not base64!!");
        let Err(err) = result else {
            panic!("expected a decode failure");
        };
        let frame_err = FrameError::from(err);
        assert_eq!(frame_err.reason(), "encoding_error");
    }

    #[test]
    fn resize_display_names_both_resolutions() {
        let err = FrameError::Resize {
            got: Resolution::new(640, 480),
            want: Resolution::new(1280, 720),
        };
        let text = err.to_string();
        assert!(text.contains("640x480"));
        assert!(text.contains("1280x720"));
    }
}
