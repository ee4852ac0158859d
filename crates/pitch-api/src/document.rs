/// Flat text decoding for uploaded documents.
///
/// Decoding never fails from the caller's point of view: unreadable, corrupt or
/// encrypted documents yield an empty string.
use tracing::{debug, warn};

/// Characters of decoded text echoed back to the client.
pub const PREVIEW_CHARS: usize = 2000;

/// Decode PDF bytes to plain text on a blocking thread.
pub async fn decode_pdf_text(bytes: Vec<u8>) -> String {
    let size = bytes.len();
    match tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await {
        Ok(Ok(text)) => {
            debug!(bytes = size, chars = text.chars().count(), "pdf decoded");
            text
        }
        Ok(Err(e)) => {
            warn!(bytes = size, error = %e, "pdf decode failed, using empty text");
            String::new()
        }
        // the decoder panicked on malformed input
        Err(e) => {
            warn!(bytes = size, error = %e, "pdf decoder aborted, using empty text");
            String::new()
        }
    }
}

/// First `PREVIEW_CHARS` characters of the text.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PITCH_PDF: &[u8] = include_bytes!("../fixtures/pitch.pdf");

    #[tokio::test]
    async fn test_decodes_document_text() {
        let text = decode_pdf_text(PITCH_PDF.to_vec()).await;
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(flat.contains("Acme pitch deck"), "got {text:?}");
        assert!(flat.contains("Market size 85"), "got {text:?}");
    }

    #[tokio::test]
    async fn test_garbage_decodes_to_empty() {
        assert_eq!(decode_pdf_text(b"definitely not a pdf".to_vec()).await, "");
        assert_eq!(decode_pdf_text(Vec::new()).await, "");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let text = "é".repeat(PREVIEW_CHARS + 10);
        assert_eq!(preview(&text).chars().count(), PREVIEW_CHARS);
        assert_eq!(preview("short"), "short");
    }
}
