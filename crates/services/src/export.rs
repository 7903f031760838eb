//! Fixed-layout PDF export of a completed interview transcript.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use interview_core::model::InterviewSession;

use crate::error::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_STEP_MM: f32 = 6.0;
const BLOCK_GAP_MM: f32 = 4.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;
// Helvetica at body size averages roughly 1.9 mm per glyph; the budget keeps
// wrapped lines inside the printable width.
const MAX_LINE_CHARS: usize = 88;
const TITLE_CHAR_WIDTH_MM: f32 = 3.1;

const TITLE: &str = "Interview Session Summary";

/// Writes `{name}_interview_summary.pdf` documents into a fixed directory.
#[derive(Debug, Clone)]
pub struct SummaryPdf {
    out_dir: PathBuf,
}

impl SummaryPdf {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// File name for a candidate. An empty name drops the prefix.
    #[must_use]
    pub fn file_name(name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            "interview_summary.pdf".to_string()
        } else {
            format!("{name}_interview_summary.pdf")
        }
    }

    /// Serialize the completed session's transcript into a paginated PDF.
    ///
    /// Layout: centered title, then per question the question text, the
    /// answer, the feedback, and blank spacing. Lines wrap on a character
    /// budget; content past the bottom margin continues on a new page.
    /// Exporting twice rewrites the same file.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Incomplete` when the session has unanswered
    /// questions, and I/O or writer errors otherwise.
    pub fn export(
        &self,
        session: &InterviewSession,
        name: &str,
    ) -> Result<PathBuf, ExportError> {
        if !session.is_complete() {
            return Err(ExportError::Incomplete);
        }

        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(Self::file_name(name));

        let (doc, page, layer) =
            PdfDocument::new(TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut cursor = TextCursor {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        let title_x =
            ((PAGE_WIDTH_MM - TITLE.len() as f32 * TITLE_CHAR_WIDTH_MM) / 2.0).max(MARGIN_MM);
        cursor
            .layer
            .use_text(TITLE, TITLE_SIZE, Mm(title_x), Mm(cursor.y), &bold);
        cursor.y -= LINE_STEP_MM + BLOCK_GAP_MM;

        for (i, entry) in session.transcript().iter().enumerate() {
            cursor.write_block(&format!("Q{}: {}", i + 1, entry.question), &font);
            cursor.write_block(&format!("Answer: {}", entry.answer), &font);
            cursor.write_block(&format!("Feedback: {}", entry.feedback), &font);
            cursor.y -= BLOCK_GAP_MM;
        }

        doc.save(&mut BufWriter::new(File::create(&path)?))?;
        tracing::debug!(path = %path.display(), "summary exported");
        Ok(path)
    }
}

/// Tracks the write position and inserts pages at the bottom margin.
struct TextCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl TextCursor<'_> {
    fn write_block(&mut self, text: &str, font: &IndirectFontRef) {
        for line in wrap_lines(text, MAX_LINE_CHARS) {
            if self.y < MARGIN_MM {
                let (page, layer) =
                    self.doc
                        .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                self.layer = self.doc.get_page(page).get_layer(layer);
                self.y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            self.layer
                .use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(self.y), font);
            self.y -= LINE_STEP_MM;
        }
    }
}

/// Greedy word wrap onto a character budget.
///
/// Embedded newlines are respected; words longer than the budget are split
/// at char boundaries.
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in raw.split_whitespace() {
            let word_len = word.chars().count();
            if current_len > 0 && current_len + 1 + word_len > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if word_len > max_chars {
                for chunk in char_chunks(word, max_chars) {
                    if current_len > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    current = chunk;
                    current_len = current.chars().count();
                    if current_len == max_chars {
                        lines.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                }
                continue;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn char_chunks(word: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
