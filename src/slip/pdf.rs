//! PDF rendering of salary slips.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::SlipRenderer;
use super::layout::{PAY_GRID_HEADER, SIGNATORY_CAPTION, SalarySlip};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LEFT: f32 = 15.0;
const RIGHT: f32 = 195.0;
const ROW_HEIGHT: f32 = 8.0;

/// x offsets of the four table columns.
const COLUMN_X: [f32; 4] = [LEFT + 2.0, 62.0, 107.0, 152.0];

/// Renders slips as single-page A4 PDFs using the built-in Helvetica fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSlipRenderer;

impl PdfSlipRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn render_error(e: impl std::fmt::Display) -> PayrollError {
    PayrollError::Render {
        message: e.to_string(),
    }
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, value: &str, size: f32, x: f32, y: f32) {
    if !value.is_empty() {
        layer.use_text(value, size, Mm(x), Mm(y), font);
    }
}

fn rule(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Draws one four-cell table row with a rule underneath and returns the
/// y position of the next row.
fn table_row(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    cells: [&str; 4],
    bold_columns: [bool; 4],
    y: f32,
) -> f32 {
    for ((cell, x), bold) in cells.iter().zip(COLUMN_X).zip(bold_columns) {
        let font = if bold { &fonts.bold } else { &fonts.regular };
        text(layer, font, cell, 10.0, x, y);
    }
    rule(layer, LEFT, RIGHT, y - 2.5);
    y - ROW_HEIGHT
}

impl SlipRenderer for PdfSlipRenderer {
    fn render(&self, slip: &SalarySlip) -> PayrollResult<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            slip.subtitle.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(render_error)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(render_error)?,
        };

        let mut y: f32 = 280.0;

        // Header
        text(&layer, &fonts.bold, &slip.institution, 18.0, LEFT, y);
        y -= 9.0;
        text(&layer, &fonts.regular, &slip.subtitle, 13.0, LEFT, y);
        y -= 12.0;

        // Identity block
        rule(&layer, LEFT, RIGHT, y + 5.5);
        for row in &slip.identity {
            let cells = [
                row.left.0.as_str(),
                row.left.1.as_str(),
                row.right.0.as_str(),
                row.right.1.as_str(),
            ];
            y = table_row(&layer, &fonts, cells, [true, false, true, false], y);
        }
        y -= 6.0;

        // Earnings and deductions
        rule(&layer, LEFT, RIGHT, y + 5.5);
        y = table_row(&layer, &fonts, PAY_GRID_HEADER, [true; 4], y);
        for row in &slip.pay_rows {
            let cells = [
                row.earning.as_str(),
                row.earning_amount.as_str(),
                row.deduction.as_str(),
                row.deduction_amount.as_str(),
            ];
            y = table_row(&layer, &fonts, cells, [false; 4], y);
        }
        y = table_row(
            &layer,
            &fonts,
            [
                "Total Earnings",
                slip.total_earnings.as_str(),
                "Total Deductions",
                slip.total_deductions.as_str(),
            ],
            [true; 4],
            y,
        );
        y -= 4.0;

        text(&layer, &fonts.bold, "Net Salary", 12.0, COLUMN_X[0], y);
        text(&layer, &fonts.bold, &slip.net_salary, 12.0, COLUMN_X[1], y);
        y -= 16.0;

        // Footer
        text(&layer, &fonts.regular, &slip.generated_on, 9.0, LEFT, y);
        y -= 24.0;
        rule(&layer, 140.0, RIGHT, y + 5.0);
        text(&layer, &fonts.regular, SIGNATORY_CAPTION, 10.0, 145.0, y);

        let mut writer = BufWriter::new(Vec::<u8>::new());
        doc.save(&mut writer).map_err(render_error)?;
        let bytes = writer.into_inner().map_err(render_error)?;

        debug!(
            employee_code = %slip.employee_code,
            bytes = bytes.len(),
            "Rendered salary slip PDF"
        );

        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}
