//! Salary slip generation.
//!
//! [`SalarySlip`] lays out the content of a slip for one record and a
//! [`SlipRenderer`] turns it into a downloadable document.

mod layout;
mod pdf;

pub use layout::{
    GENERATED_ON_FORMAT, IdentityRow, PAY_GRID_HEADER, PayGridRow, SIGNATORY_CAPTION, SalarySlip,
};
pub use pdf::PdfSlipRenderer;

use crate::error::PayrollResult;

/// Turns a laid-out slip into document bytes.
pub trait SlipRenderer {
    /// Renders `slip`, failing with [`crate::error::PayrollError::Render`].
    fn render(&self, slip: &SalarySlip) -> PayrollResult<Vec<u8>>;

    /// MIME type of the rendered document.
    fn content_type(&self) -> &'static str;
}
