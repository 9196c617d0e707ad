/// Counts reported after a spreadsheet upload finished
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadSummary {
    /// Data rows applied, header and blank rows excluded
    pub rows_processed: usize,
    /// Records inserted across all tables
    pub created: usize,
    /// Existing records whose employee, amount or unit changed
    pub updated: usize,
}

impl UploadSummary {
    pub(crate) fn record(&mut self, created: usize, updated: usize) {
        self.rows_processed += 1;
        self.created += created;
        self.updated += updated;
    }
}
