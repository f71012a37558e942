//! Document digester
//!
//! Turns uploaded PDF/TXT/MD files into one plain-text digest string shared
//! by every pipeline stage. Unreadable files or pages are skipped with a
//! warning; they never abort the request.

use crate::domain::models::{DocumentText, UploadedDocument};

pub const TRUNCATION_MARKER: &str = "\n\n...[truncated]...";
pub const EMPTY_DIGEST: &str = "No additional supporting documents were provided.";

/// Extraction output: per-file text plus any skip warnings
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub documents: Vec<DocumentText>,
    pub warnings: Vec<String>,
}

/// Extract plain text from every uploaded document.
///
/// Type is inferred from the file extension. Files that produce no text
/// (empty, unreadable, unsupported) are skipped with a warning.
pub fn extract_documents(uploads: &[UploadedDocument]) -> ExtractionOutcome {
    let mut outcome = ExtractionOutcome::default();

    for upload in uploads {
        if upload.bytes.is_empty() {
            outcome
                .warnings
                .push(format!("{} is empty, skipped", upload.name));
            continue;
        }

        let lower = upload.name.to_lowercase();
        let text = if lower.ends_with(".pdf") {
            match extract_pdf_text(&upload.bytes) {
                Ok(text) => text,
                Err(message) => {
                    log::warn!("Could not read {}: {}", upload.name, message);
                    outcome
                        .warnings
                        .push(format!("Could not read {}: {}", upload.name, message));
                    continue;
                }
            }
        } else if lower.ends_with(".txt") || lower.ends_with(".md") {
            String::from_utf8_lossy(&upload.bytes).into_owned()
        } else {
            outcome
                .warnings
                .push(format!("{} has an unsupported type, skipped", upload.name));
            continue;
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            outcome
                .warnings
                .push(format!("{} contained no extractable text", upload.name));
            continue;
        }

        outcome.documents.push(DocumentText {
            name: upload.name.clone(),
            text,
        });
    }

    outcome
}

/// Page-by-page PDF text extraction.
///
/// Pages that fail to decode are replaced with an inline marker so one bad
/// page does not lose the rest of the document.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, String> {
    let document = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
    let pages = document.get_pages();
    if pages.is_empty() {
        return Err("no pages found".to_string());
    }

    let mut sections = Vec::with_capacity(pages.len());
    for (&page_number, _) in pages.iter() {
        match document.extract_text(&[page_number]) {
            Ok(text) => sections.push(text),
            Err(e) => {
                log::warn!("Skipping unreadable PDF page {}: {}", page_number, e);
                sections.push(format!("[page {} unreadable]", page_number));
            }
        }
    }
    Ok(sections.join("\n\n"))
}

/// Truncate to a character budget, appending an explicit marker
pub fn truncate_text(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Concatenate extracted documents into the digest string fed to prompts
pub fn build_digest(documents: &[DocumentText], max_chars: usize) -> String {
    if documents.is_empty() {
        return EMPTY_DIGEST.to_string();
    }
    documents
        .iter()
        .map(|doc| {
            format!(
                "Document: {}\nContent Preview:\n{}",
                doc.name,
                truncate_text(&doc.text, max_chars)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
