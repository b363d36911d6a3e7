use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use super::views::EligibilityReport;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TITLE_Y_MM: f32 = 277.0;
const BODY_START_Y_MM: f32 = 262.0;
const LINE_HEIGHT_MM: f32 = 8.0;
const FOOTER_Y_MM: f32 = 12.0;
const BODY_FLOOR_MM: f32 = 24.0;
const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 11.0;
const FOOTER_SIZE: f32 = 9.0;
const LAYER_NAME: &str = "report";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to render report: {0}")]
    Render(String),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Collaborator turning a report payload into a downloadable document.
pub trait ReportRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn render(&self, report: &EligibilityReport) -> Result<Vec<u8>, ReportError>;
}

/// Document bytes ready to be written to disk or streamed to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Single-column A4 layout using the built-in Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportRenderer;

impl ReportRenderer for PdfReportRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, report: &EligibilityReport) -> Result<Vec<u8>, ReportError> {
        let (doc, page, layer) = PdfDocument::new(
            report.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;

        let mut cursor = PageCursor {
            layer: doc.get_page(page).get_layer(layer),
            y: BODY_START_Y_MM,
        };
        cursor.layer.use_text(
            win_ansi(report.title),
            TITLE_SIZE,
            Mm(MARGIN_MM),
            Mm(TITLE_Y_MM),
            &bold,
        );

        for field in &report.fields {
            cursor.write(&doc, &format!("{}: {}", field.label, field.value), BODY_SIZE, &regular);
        }
        cursor.write(&doc, &report.status_line(), HEADING_SIZE, &bold);

        if !report.criteria.is_empty() {
            cursor.write(&doc, "Criteria:", HEADING_SIZE, &bold);
            for line in &report.criteria {
                let marker = if line.satisfied { "[PASS]" } else { "[FAIL]" };
                cursor.write(&doc, &format!("{marker} {}", line.description), BODY_SIZE, &regular);
            }
        }

        if !report.institutions.is_empty() {
            cursor.write(&doc, "Recommended Institutions:", HEADING_SIZE, &bold);
            for line in &report.institutions {
                let text = match &line.website_url {
                    Some(url) => format!("- {} ({})", line.name, url),
                    None => format!("- {}", line.name),
                };
                cursor.write(&doc, &text, BODY_SIZE, &regular);
            }
        }

        cursor.layer.use_text(
            win_ansi(&report.footer()),
            FOOTER_SIZE,
            Mm(MARGIN_MM),
            Mm(FOOTER_Y_MM),
            &regular,
        );

        doc.save_to_bytes().map_err(render_error)
    }
}

struct PageCursor {
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor {
    fn write(&mut self, doc: &PdfDocumentReference, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < BODY_FLOOR_MM {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = TITLE_Y_MM;
        }
        self.layer
            .use_text(win_ansi(text), size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM;
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Render(err.to_string())
}

/// Built-in PDF fonts only cover Latin-1, so symbols are spelled out.
fn win_ansi(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '≥' => encoded.push_str(">="),
            '✓' => encoded.push('+'),
            '✗' => encoded.push('x'),
            c if c.is_ascii() => encoded.push(c),
            _ => encoded.push('?'),
        }
    }
    encoded
}
