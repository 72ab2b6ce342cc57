//! Lab value review table.
//!
//! The processing pipeline hands the user an editable table of extracted
//! lab values to correct before interpretation. Cells are addressed by row
//! index and column; an edit on a row that no longer exists is dropped.
//! Status cells parse through `LabStatus`, so a bad status value is an
//! error instead of stored text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::enums::LabStatus;
use crate::models::ModelError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single extracted lab value row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabValue {
    pub parameter: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: LabStatus,
}

impl LabValue {
    fn new(parameter: &str, value: &str, unit: &str, reference_range: &str) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
            unit: unit.into(),
            reference_range: reference_range.into(),
            status: LabStatus::Normal,
        }
    }
}

/// Column addressed by a cell edit on the review screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum LabColumn {
    Parameter,
    Value,
    Unit,
    ReferenceRange,
    Status,
}

/// The editable table of extracted lab values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabTable {
    pub rows: Vec<LabValue>,
}

// ---------------------------------------------------------------------------
// Table operations
// ---------------------------------------------------------------------------

impl LabTable {
    /// The five-row CBC table the mock extraction step produces.
    pub fn default_cbc() -> Self {
        Self {
            rows: vec![
                LabValue::new("Hemoglobin", "12.5", "g/dL", "12.0-15.5"),
                LabValue::new("Red Blood Cells", "4.2", "million/μL", "3.8-5.1"),
                LabValue::new("White Blood Cells", "8.5", "thousand/μL", "4.0-11.0"),
                LabValue::new("Platelets", "350", "thousand/μL", "150-450"),
                LabValue::new("Hematocrit", "38.5", "%", "36-46"),
            ],
        }
    }

    /// Overwrite one cell. An out-of-range row index is a silent no-op;
    /// a status value that does not parse is an error and leaves the
    /// table untouched.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: LabColumn,
        value: &str,
    ) -> Result<(), ModelError> {
        let entry = match self.rows.get_mut(row) {
            Some(entry) => entry,
            None => return Ok(()),
        };
        match column {
            LabColumn::Parameter => entry.parameter = value.to_string(),
            LabColumn::Value => entry.value = value.to_string(),
            LabColumn::Unit => entry.unit = value.to_string(),
            LabColumn::ReferenceRange => entry.reference_range = value.to_string(),
            LabColumn::Status => entry.status = LabStatus::from_str(value)?,
        }
        Ok(())
    }

    /// Append the blank placeholder row for manual entry.
    pub fn add_row(&mut self) {
        self.rows.push(LabValue::new("New Parameter", "", "", ""));
    }

    /// Remove the row at `index`. Out of range is a silent no-op.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    pub fn normal_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.status == LabStatus::Normal)
            .count()
    }

    /// Rows whose status is anything other than normal.
    pub fn abnormal_count(&self) -> usize {
        self.rows.len() - self.normal_count()
    }

    /// Render the approved table as LaTeX, the form it is stored in on
    /// the report. Each row is preceded by `\hline` and terminated by
    /// `\\`; row extraction downstream matches on that pair.
    pub fn to_latex(&self) -> String {
        let mut latex =
            String::from("\\begin{table}[h]\n\\centering\n\\begin{tabular}{|l|l|l|l|l|}\n");
        latex.push_str("\\hline\nParameter & Value & Unit & Reference Range & Status \\\\\n");
        for row in &self.rows {
            latex.push_str(&format!(
                "\\hline\n{} & {} & {} & {} & {} \\\\\n",
                row.parameter, row.value, row.unit, row.reference_range, row.status.as_str()
            ));
        }
        latex.push_str("\\hline\n\\end{tabular}\n\\end{table}");
        latex
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::{ReportChanges, WorkspaceStore};

    // --- default_cbc ---

    #[test]
    fn default_cbc_seeds_five_normal_rows() {
        let table = LabTable::default_cbc();
        assert_eq!(table.rows.len(), 5);
        assert!(table.rows.iter().all(|row| row.status == LabStatus::Normal));

        assert_eq!(table.rows[0].parameter, "Hemoglobin");
        assert_eq!(table.rows[0].value, "12.5");
        assert_eq!(table.rows[0].unit, "g/dL");
        assert_eq!(table.rows[0].reference_range, "12.0-15.5");
        assert_eq!(table.rows[4].parameter, "Hematocrit");
        assert_eq!(table.rows[4].unit, "%");
    }

    // --- set_cell ---

    #[test]
    fn set_cell_overwrites_a_single_field() {
        let mut table = LabTable::default_cbc();
        table.set_cell(0, LabColumn::Value, "11.2").unwrap();

        assert_eq!(table.rows[0].value, "11.2");
        // The rest of the row survives the edit
        assert_eq!(table.rows[0].parameter, "Hemoglobin");
        assert_eq!(table.rows[0].unit, "g/dL");
    }

    #[test]
    fn set_cell_parses_status_values() {
        let mut table = LabTable::default_cbc();
        table.set_cell(0, LabColumn::Status, "low").unwrap();
        assert_eq!(table.rows[0].status, LabStatus::Low);
    }

    #[test]
    fn set_cell_rejects_an_unknown_status() {
        let mut table = LabTable::default_cbc();
        assert!(table.set_cell(0, LabColumn::Status, "elevated").is_err());
        assert_eq!(table.rows[0].status, LabStatus::Normal);
    }

    #[test]
    fn set_cell_out_of_range_row_is_a_noop() {
        let mut table = LabTable::default_cbc();
        table.set_cell(99, LabColumn::Parameter, "Ghost").unwrap();
        assert_eq!(table, LabTable::default_cbc());
    }

    // --- add_row / remove_row ---

    #[test]
    fn add_row_appends_the_blank_placeholder() {
        let mut table = LabTable::default_cbc();
        table.add_row();

        assert_eq!(table.rows.len(), 6);
        let added = &table.rows[5];
        assert_eq!(added.parameter, "New Parameter");
        assert!(added.value.is_empty());
        assert!(added.unit.is_empty());
        assert!(added.reference_range.is_empty());
        assert_eq!(added.status, LabStatus::Normal);
    }

    #[test]
    fn remove_row_drops_only_the_indexed_row() {
        let mut table = LabTable::default_cbc();
        table.remove_row(1);

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0].parameter, "Hemoglobin");
        assert_eq!(table.rows[1].parameter, "White Blood Cells");
    }

    #[test]
    fn remove_row_out_of_range_is_a_noop() {
        let mut table = LabTable::default_cbc();
        table.remove_row(99);
        assert_eq!(table.rows.len(), 5);
    }

    // --- counts ---

    #[test]
    fn counts_split_normal_and_abnormal() {
        let mut table = LabTable::default_cbc();
        table.set_cell(0, LabColumn::Status, "high").unwrap();
        table.set_cell(3, LabColumn::Status, "low").unwrap();

        assert_eq!(table.total_count(), 5);
        assert_eq!(table.normal_count(), 3);
        assert_eq!(table.abnormal_count(), 2);
    }

    #[test]
    fn empty_table_counts_are_zero() {
        let table = LabTable::default();
        assert_eq!(table.total_count(), 0);
        assert_eq!(table.normal_count(), 0);
        assert_eq!(table.abnormal_count(), 0);
    }

    // --- to_latex ---

    #[test]
    fn to_latex_renders_header_and_all_rows() {
        let latex = LabTable::default_cbc().to_latex();

        assert!(latex.starts_with("\\begin{table}[h]\n\\centering\n\\begin{tabular}{|l|l|l|l|l|}"));
        assert!(latex.ends_with("\\end{tabular}\n\\end{table}"));
        assert!(latex.contains("Parameter & Value & Unit & Reference Range & Status \\\\"));
        assert!(latex.contains("Hemoglobin & 12.5 & g/dL & 12.0-15.5 & normal \\\\"));
        assert!(latex.contains("Hematocrit & 38.5 & % & 36-46 & normal \\\\"));
        // Header, five data rows, bottom border
        assert_eq!(latex.matches("\\hline").count(), 7);
    }

    #[test]
    fn to_latex_reflects_edits() {
        let mut table = LabTable::default_cbc();
        table.set_cell(0, LabColumn::Status, "high").unwrap();
        let latex = table.to_latex();
        assert!(latex.contains("Hemoglobin & 12.5 & g/dL & 12.0-15.5 & high \\\\"));
    }

    // --- review flow wiring ---

    #[test]
    fn approved_table_lands_on_the_report() {
        let store = WorkspaceStore::demo();
        let table = LabTable::default_cbc();
        store
            .update_report(
                "1",
                ReportChanges {
                    latex_table: Some(table.to_latex()),
                    ..Default::default()
                },
            )
            .unwrap();

        let report = store.report("1").unwrap().unwrap();
        let latex = report.latex_table.unwrap();
        assert!(latex.starts_with("\\begin{table}"));
    }
}
