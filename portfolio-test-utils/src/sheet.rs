//! Workbook builder for upload tests.
//!
//! Writes xlsx files in the two upload layouts: two header rows followed by one data row per
//! `with_row` call, columns addressed by zero-based position.

use rust_xlsxwriter::Workbook;

use crate::error::TestError;

const FUNCTIONAL_VIEW_HEADERS: [&str; 18] = [
    "Organizational Unit",
    "OU Employee ID",
    "OU Employee Name",
    "Line of Business",
    "LOB Employee ID",
    "LOB Employee Name",
    "Business Function",
    "Function Type",
    "BF Employee ID",
    "BF Employee Name",
    "Capability",
    "Business Process",
    "Start Date",
    "Expected End Date",
    "End Date",
    "Process Status",
    "Activity",
    "Resources Required",
];

const APP_PORTFOLIO_HEADERS: [&str; 25] = [
    "Organizational Unit",
    "OU Employee ID",
    "OU Employee Name",
    "Line of Business",
    "LOB Employee ID",
    "LOB Employee Name",
    "Application",
    "Description",
    "Application Type",
    "Status",
    "Implementation Date",
    "Technology Stack",
    "Version",
    "Stack Type",
    "Technology Spend",
    "Unit",
    "Expenditure Description",
    "Expenditure Type",
    "Start Date",
    "End Date",
    "Expenditure Spend",
    "Unit",
    "Budget Year",
    "Budget",
    "Unit",
];

/// A single cell value written to the sheet
#[derive(Clone, Debug)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(value as f64)
    }
}

/// Builder for upload workbooks.
///
/// ```ignore
/// let bytes = SheetBuilder::app_portfolio()
///     .with_row([(0, "People".into()), (3, "HR".into()), (6, "Payroll".into())])
///     .build()?;
/// ```
pub struct SheetBuilder {
    headers: &'static [&'static str],
    rows: Vec<Vec<(u16, Cell)>>,
}

impl SheetBuilder {
    /// Start a workbook with the functional view header rows
    pub fn functional_view() -> Self {
        Self {
            headers: &FUNCTIONAL_VIEW_HEADERS,
            rows: Vec::new(),
        }
    }

    /// Start a workbook with the application portfolio header rows
    pub fn app_portfolio() -> Self {
        Self {
            headers: &APP_PORTFOLIO_HEADERS,
            rows: Vec::new(),
        }
    }

    /// Append a data row; columns not given stay empty
    pub fn with_row(mut self, cells: impl IntoIterator<Item = (u16, Cell)>) -> Self {
        self.rows.push(cells.into_iter().collect());
        self
    }

    /// Append an empty row between data rows
    pub fn with_blank_row(mut self) -> Self {
        self.rows.push(Vec::new());
        self
    }

    /// Serialize the workbook to xlsx bytes.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The xlsx file contents
    /// - `Err(TestError::XlsxError)` - Writing the workbook failed
    pub fn build(self) -> Result<Vec<u8>, TestError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "Upload")?;
        for (column, header) in self.headers.iter().enumerate() {
            worksheet.write_string(1, column as u16, *header)?;
        }

        for (offset, cells) in self.rows.iter().enumerate() {
            let row = offset as u32 + 2;
            for (column, cell) in cells {
                match cell {
                    Cell::Text(value) => worksheet.write_string(row, *column, value)?,
                    Cell::Number(value) => worksheet.write_number(row, *column, *value)?,
                };
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
