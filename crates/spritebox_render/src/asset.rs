//! Image asset loading
//!
//! Decodes image files from disk into tightly packed RGBA8 pixels. The GPU
//! upload happens separately in [`crate::texture`].

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (permission denied, read failure, etc.)
    Io(io::Error),
    /// The file exists but could not be decoded as an image
    Decode(image::ImageError),
    /// No file at the given path
    NotFound(PathBuf),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(err) => write!(f, "Asset IO error: {}", err),
            AssetError::Decode(err) => write!(f, "Asset decode error: {}", err),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::Decode(err) => Some(err),
            AssetError::NotFound(_) => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<image::ImageError> for AssetError {
    fn from(err: image::ImageError) -> Self {
        AssetError::Decode(err)
    }
}

/// A decoded image in RGBA8 layout, row-major, no row padding
#[derive(Clone, Debug)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Read and decode an image file
    ///
    /// The format is guessed from the file contents, so any format enabled
    /// in the `image` crate works (png and jpeg by default).
    ///
    /// # Errors
    ///
    /// [`AssetError::NotFound`] if nothing exists at `path`,
    /// [`AssetError::Io`] if it cannot be read, and
    /// [`AssetError::Decode`] if it is not a readable image.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)?;
        Self::load_from_memory(&bytes)
    }

    /// Decode an image held in memory
    pub fn load_from_memory(bytes: &[u8]) -> Result<Self, AssetError> {
        let rgba = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// Bytes per row of pixel data
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spritebox_asset_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_png() {
        let path = temp_path("ball.png");
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([10, 20, 30, 40]));
        img.save(&path).unwrap();

        let data = ImageData::load_from_file(&path).unwrap();
        assert_eq!(data.width, 3);
        assert_eq!(data.height, 2);
        assert_eq!(data.pixels.len(), 3 * 2 * 4);
        assert_eq!(data.bytes_per_row(), 12);
        // Last pixel is (2, 1)
        assert_eq!(&data.pixels[20..24], &[10, 20, 30, 40]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_rgb_jpeg_is_expanded_to_rgba() {
        let path = temp_path("brick.jpg");
        image::RgbImage::from_pixel(4, 4, image::Rgb([200, 100, 50]))
            .save(&path)
            .unwrap();

        let data = ImageData::load_from_file(&path).unwrap();
        assert_eq!(data.pixels.len(), 4 * 4 * 4);
        assert!(data.pixels.chunks(4).all(|p| p[3] == 255));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = ImageData::load_from_file("Assets/does_not_exist.png").unwrap_err();
        match err {
            AssetError::NotFound(path) => assert!(path.ends_with("does_not_exist.png")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = ImageData::load_from_memory(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AssetError::NotFound(PathBuf::from("Assets/ball.png"));
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("Assets/ball.png"));

        let io_err = AssetError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(format!("{}", io_err).contains("IO error"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io_err = AssetError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(io_err.source().is_some());
        assert!(AssetError::NotFound(PathBuf::new()).source().is_none());
    }
}
