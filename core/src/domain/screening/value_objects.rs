use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

pub const ACCEPTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Number of predictions surfaced per image.
pub const TOP_PREDICTIONS: usize = 3;

/// An image as received from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    /// Checks the file extension against [`ACCEPTED_IMAGE_EXTENSIONS`].
    pub fn ensure_supported(&self) -> Result<(), CoreError> {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !ACCEPTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(CoreError::UnsupportedImage(format!(
                "{} (accepted types: {})",
                self.file_name,
                ACCEPTED_IMAGE_EXTENSIONS.join(", ")
            )));
        }

        if self.data.is_empty() {
            return Err(CoreError::UnsupportedImage(format!(
                "{} is empty",
                self.file_name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_extensions_case_insensitively() {
        for name in ["face.jpg", "face.JPEG", "scan.Png"] {
            let image = UploadedImage::new(name, Bytes::from_static(b"data"));
            assert!(image.ensure_supported().is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejects_other_extensions_and_empty_files() {
        let gif = UploadedImage::new("face.gif", Bytes::from_static(b"data"));
        assert!(matches!(
            gif.ensure_supported(),
            Err(CoreError::UnsupportedImage(_))
        ));

        let no_ext = UploadedImage::new("face", Bytes::from_static(b"data"));
        assert!(no_ext.ensure_supported().is_err());

        let empty = UploadedImage::new("face.png", Bytes::new());
        assert!(empty.ensure_supported().is_err());
    }
}
