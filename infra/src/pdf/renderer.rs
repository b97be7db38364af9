//! A4 PDF rendering with `printpdf`

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use pf_core::errors::{DomainError, DomainResult};
use pf_core::services::document::{DocumentContent, PdfRenderer};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TITLE_PT: f32 = 18.0;
const BODY_PT: f32 = 11.0;
const FOOTER_PT: f32 = 9.0;
const LINE_HEIGHT_MM: f32 = 6.0;
/// Body column width in characters at `BODY_PT` Helvetica
const WRAP_COLS: usize = 90;

/// Renders documents as A4 PDFs with a title, a rule, a wrapped body,
/// and numbered footers
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfRenderer;

impl PdfRenderer for PrintPdfRenderer {
    fn render(&self, content: &DocumentContent) -> DomainResult<Vec<u8>> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            &content.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "content",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;

        let mut page_number = 1;
        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        // Title block with a rule underneath, first page only
        layer.use_text(&content.title, TITLE_PT, Mm(MARGIN_MM), Mm(y), &bold);
        y -= 4.0;
        draw_rule(&layer, y);
        y -= LINE_HEIGHT_MM * 1.5;
        draw_footer(&layer, &regular, page_number);

        for line in wrap_text(&content.body, WRAP_COLS) {
            if y < MARGIN_MM + LINE_HEIGHT_MM {
                let (page, layer_idx) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                layer = doc.get_page(page).get_layer(layer_idx);
                page_number += 1;
                y = PAGE_HEIGHT_MM - MARGIN_MM;
                draw_footer(&layer, &regular, page_number);
            }
            if !line.is_empty() {
                layer.use_text(&line, BODY_PT, Mm(MARGIN_MM), Mm(y), &regular);
            }
            y -= LINE_HEIGHT_MM;
        }

        doc.save_to_bytes().map_err(pdf_err)
    }
}

fn draw_rule(layer: &PdfLayerReference, y: f32) {
    let rule = Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(rule);
}

fn draw_footer(layer: &PdfLayerReference, font: &IndirectFontRef, page_number: u32) {
    let generated = chrono::Utc::now().format("%Y-%m-%d");
    layer.use_text(
        format!("PDFolio \u{b7} {generated}"),
        FOOTER_PT,
        Mm(MARGIN_MM),
        Mm(MARGIN_MM / 2.0),
        font,
    );
    layer.use_text(
        format!("Page {page_number}"),
        FOOTER_PT,
        Mm(PAGE_WIDTH_MM - MARGIN_MM - 15.0),
        Mm(MARGIN_MM / 2.0),
        font,
    );
}

/// Greedy word wrap preserving paragraph breaks; words longer than
/// the column are hard-split
fn wrap_text(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > cols {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(cols)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                let (head, tail) = word.split_at(split_at);
                lines.push(head.to_string());
                word = tail;
            }

            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= cols {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn pdf_err(err: printpdf::Error) -> DomainError {
    DomainError::Internal {
        message: format!("pdf rendering failed: {err}"),
    }
}
