use crate::intake::IntakeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Text,
}

impl ResumeFormat {
    /// Dispatches on the file extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, IntakeError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(ResumeFormat::Pdf),
            "txt" => Ok(ResumeFormat::Text),
            _ => Err(IntakeError::UnsupportedFormat(ext)),
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

/// Pulls plain text out of an uploaded resume. CPU-bound for PDFs; call it
/// from `spawn_blocking`.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, IntakeError> {
    let text = match ResumeFormat::from_filename(filename)? {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| IntakeError::Pdf(e.to_string()))?,
        ResumeFormat::Text => String::from_utf8(bytes.to_vec())?,
    };

    if text.trim().is_empty() {
        return Err(IntakeError::EmptyDocument);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dispatch() {
        assert_eq!(
            ResumeFormat::from_filename("cv.PDF").unwrap(),
            ResumeFormat::Pdf
        );
        assert_eq!(
            ResumeFormat::from_filename("notes.v2.txt").unwrap(),
            ResumeFormat::Text
        );
        assert!(matches!(
            ResumeFormat::from_filename("cv.docx"),
            Err(IntakeError::UnsupportedFormat(ext)) if ext == "docx"
        ));
        assert!(matches!(
            ResumeFormat::from_filename("resume"),
            Err(IntakeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_extract_plain_text() {
        let text = extract_text("Asha Rao\nasha@example.com".as_bytes(), "asha.txt").unwrap();
        assert!(text.contains("asha@example.com"));
    }

    #[test]
    fn test_rejects_blank_and_invalid_text() {
        assert!(matches!(
            extract_text(b"  \n ", "blank.txt"),
            Err(IntakeError::EmptyDocument)
        ));
        assert!(matches!(
            extract_text(&[0xff, 0xfe, 0x00], "bad.txt"),
            Err(IntakeError::Encoding(_))
        ));
    }

    #[test]
    fn test_rejects_garbage_pdf() {
        assert!(matches!(
            extract_text(b"not a pdf", "cv.pdf"),
            Err(IntakeError::Pdf(_))
        ));
    }
}
