//! Image File
//!
//! An image picked by the user, held in memory until it is uploaded.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// File chosen through the picker or a drop, with its contents already read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    /// MIME type; guessed from `name` when the browser reports none
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// The reported MIME type, or a guess from the file name when it is blank
pub fn resolve_mime_type(name: &str, reported: &str) -> String {
    if reported.trim().is_empty() {
        mime_guess::from_path(name)
            .first_or_octet_stream()
            .essence_str()
            .to_owned()
    } else {
        reported.to_owned()
    }
}

/// Only the `image/` prefix is checked; the size hint in the UI is not enforced
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = resolve_mime_type(&name, &mime_type.into());
        Self {
            name,
            mime_type,
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:` URL suitable for an `<img src>` preview
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_mime_wins() {
        let file = ImageFile::new("scan.bin", "image/png", vec![1, 2, 3]);
        assert_eq!(file.mime_type, "image/png");
        assert!(file.is_image());
    }

    #[test]
    fn test_guesses_mime_from_name() {
        assert_eq!(ImageFile::new("photo.jpg", "", vec![]).mime_type, "image/jpeg");
        assert_eq!(ImageFile::new("notes.pdf", " ", vec![]).mime_type, "application/pdf");
        assert_eq!(
            ImageFile::new("mystery", "", vec![]).mime_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_resolve_before_reading() {
        assert_eq!(resolve_mime_type("cat.webp", ""), "image/webp");
        assert_eq!(resolve_mime_type("cat.webp", "image/png"), "image/png");
        assert!(is_image_mime(&resolve_mime_type("IMG_0001.JPG", "")));
        assert!(!is_image_mime(&resolve_mime_type("receipt.pdf", "")));
    }

    #[test]
    fn test_pdf_is_not_an_image() {
        assert!(!ImageFile::new("doc.pdf", "application/pdf", vec![0]).is_image());
    }

    #[test]
    fn test_data_url() {
        let file = ImageFile::new("a.png", "image/png", b"hi".to_vec());
        assert_eq!(file.data_url(), "data:image/png;base64,aGk=");
        assert_eq!(file.len(), 2);
    }
}
