// SPDX-License-Identifier: MPL-2.0
use image_rs::ImageError;

/// Crate-wide error type.
///
/// Payloads are plain strings so the error stays `Clone` and can travel
/// inside iced messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("SVG Error: {0}")]
    Svg(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Render Error: {0}")]
    Render(String),
    #[error("Encode Error: {0}")]
    Encode(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            ImageError::Encoding(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let image_error = ImageError::IoError(std::io::Error::other("decode failed"));
        let err: Error = image_error.into();
        assert!(matches!(err, Error::Io(message) if message.contains("decode failed")));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
