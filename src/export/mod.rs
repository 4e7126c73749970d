//! CSV export
//!
//! Serializes single-log and merged multi-performer tables into the
//! comma-separated byte format the downstream choreography tools read.

pub mod choreography;
pub mod csv;

pub use choreography::{
    create_full_choreography, ChoreographyMapping, MappingEntry, MERGED_CSV_NAME,
};
pub use csv::{build_log_table, csv_bytes, csv_file_name, Cell, CsvTable};
