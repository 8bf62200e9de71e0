use std::io::Cursor;

use image::{DynamicImage, ImageFormat, imageops::FilterType};

use crate::domain::common::entities::app_errors::CoreError;

/// Image re-encoded at the classifier's input size.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes a JPEG or PNG upload, converts it to RGB and resizes it to a
/// `size`x`size` PNG.
pub fn prepare_image(data: &[u8], size: u32) -> Result<PreparedImage, CoreError> {
    let format = image::guess_format(data)
        .map_err(|e| CoreError::UnsupportedImage(format!("unrecognised image data: {}", e)))?;

    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(CoreError::UnsupportedImage(format!(
            "{:?} images are not accepted",
            format
        )));
    }

    let decoded = image::load_from_memory_with_format(data, format)
        .map_err(|e| CoreError::UnsupportedImage(format!("failed to decode image: {}", e)))?;

    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    let resized = rgb.resize_exact(size, size, FilterType::CatmullRom);

    let mut buffer = Cursor::new(Vec::new());
    resized
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CoreError::InternalServerError(format!("failed to encode image: {}", e)))?;

    Ok(PreparedImage {
        png: buffer.into_inner(),
        width: size,
        height: size,
    })
}

#[cfg(test)]
pub(crate) fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 150, 120, 255]));
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_resizes_to_square_input() {
        let prepared = prepare_image(&sample_png(40, 12), 256).unwrap();
        assert_eq!((prepared.width, prepared.height), (256, 256));

        let decoded = image::load_from_memory(&prepared.png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (256, 256));
        assert!(matches!(decoded, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn test_rejects_non_image_bytes() {
        let err = prepare_image(b"definitely not an image", 256).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedImage(_)));
    }
}
