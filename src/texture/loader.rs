use std::path::Path;

use crate::error::SceneError;

/// Decoded RGB8 pixels, bottom row first as GL expects.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn from_rgb8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyTexture { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Read the raw file bytes
fn load_from_file(path: &Path) -> Result<Vec<u8>, SceneError> {
    let data = std::fs::read(path)?;
    Ok(data)
}

/// Decode any format `image` understands, drop alpha, and flip vertically.
pub fn decode_image(data: &[u8]) -> Result<TextureImage, SceneError> {
    let img = image::load_from_memory(data)?;
    let rgb = img.flipv().to_rgb8();
    let (width, height) = rgb.dimensions();
    TextureImage::from_rgb8(width, height, rgb.into_raw())
}

pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureImage, SceneError> {
    let data = load_from_file(path.as_ref())?;
    decode_image(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_texture(dir.path().join("sugar.jpg")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, SceneError::Image(_)));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = TextureImage::from_rgb8(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SceneError::EmptyTexture {
                width: 0,
                height: 4
            }
        ));
    }

    #[test]
    fn loads_and_flips_rows() {
        let mut img = RgbImage::new(2, 2);
        // red on the top row, blue on the bottom row
        for x in 0..2 {
            img.put_pixel(x, 0, Rgb([255, 0, 0]));
            img.put_pixel(x, 1, Rgb([0, 0, 255]));
        }

        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        img.save_with_format(file.path(), ImageFormat::Png).unwrap();

        let texture = load_texture(file.path()).unwrap();
        assert_eq!((texture.width, texture.height), (2, 2));
        assert_eq!(texture.pixels.len(), 2 * 2 * 3);
        assert_eq!(&texture.pixels[..3], &[0, 0, 255]);
        assert_eq!(&texture.pixels[6..9], &[255, 0, 0]);
    }
}
