//! Typed access to the cells of an uploaded worksheet.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::{Duration, NaiveDate};
use entity::sea_orm_active_enums::CurrencySuccessor;
use sea_orm::{ActiveEnum, Iterable};

use crate::server::error::upload::UploadError;

/// Rows at the top of every worksheet that hold column titles
pub const HEADER_ROWS: u32 = 2;

/// First worksheet of an uploaded workbook
pub struct Sheet {
    range: Range<Data>,
}

impl Sheet {
    /// Open an xlsx, xls or ods workbook from its raw bytes
    pub fn open(bytes: Vec<u8>) -> Result<Self, UploadError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(UploadError::MissingWorksheet)??;

        Ok(Self::from_range(range))
    }

    pub fn from_range(range: Range<Data>) -> Self {
        Self { range }
    }

    /// Rows below the header, fully empty rows excluded
    pub fn data_rows(&self) -> impl Iterator<Item = SheetRow<'_>> {
        // Ranges start at the first non-empty cell, not at A1.
        let (start_row, start_column) = self.range.start().unwrap_or((0, 0));

        self.range
            .rows()
            .enumerate()
            .map(move |(offset, cells)| SheetRow {
                row: start_row + offset as u32,
                start_column,
                cells,
            })
            .filter(|row| row.row >= HEADER_ROWS && !row.is_blank())
    }
}

/// One worksheet row, columns are addressed by their absolute 0-based position
pub struct SheetRow<'a> {
    row: u32,
    start_column: u32,
    cells: &'a [Data],
}

impl<'a> SheetRow<'a> {
    /// Absolute 0-based row position in the worksheet
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(is_blank)
    }

    fn cell(&self, column: u32) -> &'a Data {
        const EMPTY: &Data = &Data::Empty;

        column
            .checked_sub(self.start_column)
            .and_then(|index| self.cells.get(index as usize))
            .unwrap_or(EMPTY)
    }

    fn invalid(&self, column: u32, expected: &'static str) -> UploadError {
        UploadError::InvalidCell {
            row: self.row,
            column,
            expected,
            found: describe(self.cell(column)),
        }
    }

    fn missing(&self, column: u32, field: &'static str) -> UploadError {
        UploadError::MissingCell {
            row: self.row,
            column,
            field,
        }
    }

    /// Trimmed text of a string cell, `None` when blank
    pub fn optional_string(&self, column: u32) -> Result<Option<String>, UploadError> {
        match self.cell(column) {
            cell if is_blank(cell) => Ok(None),
            Data::String(value) => Ok(Some(value.trim().to_string())),
            _ => Err(self.invalid(column, "text")),
        }
    }

    pub fn string(&self, column: u32, field: &'static str) -> Result<String, UploadError> {
        self.optional_string(column)?
            .ok_or_else(|| self.missing(column, field))
    }

    /// Numeric cell, numeric text is accepted as well
    pub fn optional_number(&self, column: u32) -> Result<Option<f64>, UploadError> {
        match self.cell(column) {
            cell if is_blank(cell) => Ok(None),
            Data::Float(value) => self.finite(column, *value).map(Some),
            Data::Int(value) => Ok(Some(*value as f64)),
            Data::String(value) => match value.trim().parse::<f64>() {
                Ok(value) => self.finite(column, value).map(Some),
                Err(_) => Err(self.invalid(column, "number")),
            },
            _ => Err(self.invalid(column, "number")),
        }
    }

    /// `NaN` and the infinities never compare equal to a stored amount
    fn finite(&self, column: u32, value: f64) -> Result<f64, UploadError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.invalid(column, "number"))
        }
    }

    /// Numeric cell where blank reads as zero
    pub fn number_or_zero(&self, column: u32) -> Result<f64, UploadError> {
        Ok(self.optional_number(column)?.unwrap_or(0.0))
    }

    /// Whole-number cell such as a year
    pub fn optional_integer(&self, column: u32) -> Result<Option<i32>, UploadError> {
        match self.optional_number(column)? {
            None => Ok(None),
            Some(value) if value.fract() == 0.0 && value.abs() <= i32::MAX as f64 => {
                Ok(Some(value as i32))
            }
            Some(_) => Err(self.invalid(column, "whole number")),
        }
    }

    /// Date cell, Excel serial numbers and `YYYY-MM-DD` text are accepted as well
    pub fn optional_date(&self, column: u32) -> Result<Option<NaiveDate>, UploadError> {
        let date = match self.cell(column) {
            cell if is_blank(cell) => return Ok(None),
            Data::DateTime(value) => from_excel_serial(value.as_f64()),
            Data::Float(value) => from_excel_serial(*value),
            Data::Int(value) => from_excel_serial(*value as f64),
            Data::DateTimeIso(value) | Data::String(value) => {
                let value = value.trim();
                NaiveDate::parse_from_str(value.get(..10).unwrap_or(value), "%Y-%m-%d").ok()
            }
            _ => None,
        };

        date.map(Some).ok_or_else(|| self.invalid(column, "date"))
    }

    /// Enum literal matched case-insensitively against the stored values of `E`
    pub fn optional_enum<E>(&self, column: u32, kind: &'static str) -> Result<Option<E>, UploadError>
    where
        E: ActiveEnum<Value = String> + Iterable,
    {
        let Some(value) = self.optional_string(column)? else {
            return Ok(None);
        };

        E::iter()
            .find(|variant| variant.to_value().eq_ignore_ascii_case(&value))
            .map(Some)
            .ok_or(UploadError::InvalidEnum {
                row: self.row,
                column,
                kind,
                value,
            })
    }

    pub fn required_enum<E>(&self, column: u32, kind: &'static str) -> Result<E, UploadError>
    where
        E: ActiveEnum<Value = String> + Iterable,
    {
        self.optional_enum(column, kind)?
            .ok_or_else(|| self.missing(column, kind))
    }

    /// Currency unit cell where blank means [`CurrencySuccessor::Raw`]
    pub fn successor(&self, column: u32) -> Result<CurrencySuccessor, UploadError> {
        Ok(self
            .optional_enum(column, "currency unit")?
            .unwrap_or(CurrencySuccessor::Raw))
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(value) => value.trim().is_empty(),
        _ => false,
    }
}

fn describe(cell: &Data) -> String {
    match cell {
        Data::Empty => "empty cell".to_string(),
        Data::String(value) => format!("text {:?}", value),
        Data::Float(value) => format!("number {}", value),
        Data::Int(value) => format!("number {}", value),
        Data::Bool(value) => format!("boolean {}", value),
        Data::DateTime(value) => format!("date serial {}", value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => format!("text {:?}", value),
        Data::Error(value) => format!("error {:?}", value),
    }
}

/// Serial of 9999-12-31, the last day Excel can represent
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Convert an Excel serial day number (1900 date system) to a date
fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    // Serial 0 is 1899-12-30 once Excel's phantom 1900-02-29 is accounted for.
    NaiveDate::from_ymd_opt(1899, 12, 30)?
        .checked_add_signed(Duration::try_days(serial.floor() as i64)?)
}
