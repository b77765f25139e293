//! PDF exporter.
//!
//! Paints the worksheet as a two-page document: page 1 carries the blanks,
//! page 2 the answer key, both with the same column/font/line geometry.
//! Questions fill column-major (down each column, then right). Lines wider
//! than their column wrap via the font metrics, and continuation lines take
//! 60% of the normal line height so they do not collide with the next
//! question. On the answer page the answer substring is painted in the
//! accent color while the rest of the line stays in the default color.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb,
};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::print::{
    PrintLayout, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TITLE_BLOCK_MM, USABLE_WIDTH_MM,
};
use crate::layout::{get_metrics, FontFace, FontMetricTable};
use crate::session::WorksheetSession;

/// Millimeters to PostScript points; printpdf takes font sizes in pt.
const MM_TO_PT: f32 = 72.0 / 25.4;
/// Continuation lines of a wrapped question advance by this fraction of the
/// normal line height.
const WRAP_LINE_RATIO: f32 = 0.6;
/// Horizontal gap kept clear between adjacent columns.
const COLUMN_GUTTER_MM: f32 = 4.0;

const TITLE_FONT_PT: f32 = 18.0;
const SUBTITLE_FONT_PT: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Default export filename, stamped with the current ISO calendar date.
pub fn default_output_name() -> String {
    format!("worksheet-{}.pdf", Local::now().format("%Y-%m-%d"))
}

/// Exports the worksheet to `path`.
pub fn export_pdf(
    session: &WorksheetSession,
    plan: &PrintLayout,
    path: &Path,
) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    export_pdf_to_writer(session, plan, &mut writer)
}

/// Writes the two-page document to any buffered sink (tests use a `Vec<u8>`).
pub fn export_pdf_to_writer<W: Write>(
    session: &WorksheetSession,
    plan: &PrintLayout,
    writer: &mut BufWriter<W>,
) -> Result<(), AppError> {
    let (doc, page1, layer1) = PdfDocument::new(
        "Times Tables Worksheet",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "questions",
    );

    let font_regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let blanks = doc.get_page(page1).get_layer(layer1);
    draw_title_block(&blanks, &font_bold, &font_regular, "Times Tables Practice", true);
    draw_questions(&blanks, &font_regular, session, plan, false);

    let (page2, layer2) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "answers");
    let answers = doc.get_page(page2).get_layer(layer2);
    draw_title_block(&answers, &font_bold, &font_regular, "Answer Key", false);
    draw_questions(&answers, &font_regular, session, plan, true);

    debug!(
        questions = session.questions.len(),
        columns = plan.columns,
        "worksheet painted"
    );

    doc.save(writer).map_err(|e| AppError::Pdf(e.to_string()))?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Page painting
// ────────────────────────────────────────────────────────────────────────────

fn default_color() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn answer_color() -> Color {
    Color::Rgb(Rgb::new(0.80, 0.10, 0.10, None))
}

fn draw_title_block(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    title: &str,
    with_name_line: bool,
) {
    let top = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text(title, TITLE_FONT_PT, Mm(MARGIN_MM), Mm(top - 7.0), bold);

    let date_line = Local::now().format("%-d %B %Y").to_string();
    layer.use_text(
        &date_line,
        SUBTITLE_FONT_PT,
        Mm(MARGIN_MM),
        Mm(top - 14.0),
        regular,
    );

    if with_name_line {
        // Right-aligned against the content edge.
        let name_line = "Name: ____________________";
        let width = get_metrics(FontFace::Helvetica)
            .width_mm(name_line, SUBTITLE_FONT_PT / MM_TO_PT);
        layer.use_text(
            name_line,
            SUBTITLE_FONT_PT,
            Mm(PAGE_WIDTH_MM - MARGIN_MM - width),
            Mm(top - 14.0),
            regular,
        );
    }
}

/// Column-major slot: questions fill each column top to bottom before moving
/// right.
fn slot_for(index: usize, questions_per_column: u8) -> (usize, usize) {
    let rows = questions_per_column.max(1) as usize;
    (index / rows, index % rows)
}

fn draw_questions(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    session: &WorksheetSession,
    plan: &PrintLayout,
    with_answers: bool,
) {
    let metrics = get_metrics(FontFace::Helvetica);
    let col_width = USABLE_WIDTH_MM / plan.columns as f32;
    let wrap_width_mm = col_width - COLUMN_GUTTER_MM;
    let content_top = PAGE_HEIGHT_MM - MARGIN_MM - TITLE_BLOCK_MM;
    let font_pt = plan.font_size_mm * MM_TO_PT;

    layer.set_fill_color(default_color());

    for (i, question) in session.questions.iter().enumerate() {
        let (column, row) = slot_for(i, plan.questions_per_column);
        let x = MARGIN_MM + column as f32 * col_width;
        // Baseline of the question's first line.
        let y = content_top - row as f32 * plan.line_height_mm - plan.font_size_mm;

        if with_answers {
            let (line_y, line_width) = draw_wrapped(
                layer,
                font,
                metrics,
                question.prompt(),
                x,
                y,
                font_pt,
                plan,
                wrap_width_mm,
            );
            let answer_x = x + line_width + metrics.width_mm(" ", plan.font_size_mm);
            layer.set_fill_color(answer_color());
            layer.use_text(
                &question.answer_text(),
                font_pt,
                Mm(answer_x),
                Mm(line_y),
                font,
            );
            layer.set_fill_color(default_color());
        } else {
            draw_wrapped(
                layer,
                font,
                metrics,
                &question.display_text,
                x,
                y,
                font_pt,
                plan,
                wrap_width_mm,
            );
        }
    }
}

/// Paints `text` wrapped to the column width. Returns the baseline y and the
/// painted width (mm) of the last line, so a caller can append to it.
#[allow(clippy::too_many_arguments)]
fn draw_wrapped(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    metrics: &FontMetricTable,
    text: &str,
    x: f32,
    y: f32,
    font_pt: f32,
    plan: &PrintLayout,
    wrap_width_mm: f32,
) -> (f32, f32) {
    let max_em = wrap_width_mm / plan.font_size_mm;
    let lines = metrics.wrap_to_width(text, max_em);

    let mut line_y = y;
    let mut last_width = 0.0_f32;
    for (j, line) in lines.iter().enumerate() {
        if j > 0 {
            line_y -= plan.line_height_mm * WRAP_LINE_RATIO;
        }
        layer.use_text(line, font_pt, Mm(x), Mm(line_y), font);
        last_width = metrics.width_mm(line, plan.font_size_mm);
    }
    (line_y, last_width)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
