// Table module: Contains the ASCII table format shared by all filters
// This module parses, queries, extends and writes whitespace-delimited tables with an optional header-line count

// ======================== MODULE DECLARATIONS ========================
pub mod ascii_table;
pub mod table_io;

// Test modules
mod _tests_ascii_table;

// ======================== TABLE STRUCTURE ========================
pub use ascii_table::AsciiTable; // struct - comment lines, column labels and rows of text fields
// AsciiTable impl methods:
//   new(comments: Vec<String>, labels: Vec<String>, rows: Vec<Vec<String>>) -> Self - assembles a table
//   parse(text: &str) -> Result<Self>                        - reads "N header" tables or bare label tables
//   column_index(&self, label: &str, shape: ColumnShape) -> Option<usize> - first column of a label group
//   column_values(&self, label: &str, shape: ColumnShape) -> Result<Vec<Vec<f64>>> - numeric values of a label group
//   add_comment(&mut self, comment: String)                  - appends a header comment line
//   append_columns(&mut self, labels: Vec<String>, values: Vec<Vec<String>>) -> Result<()> - appends columns
//   render(&self) -> String                                  - writes the table with a header-line count

pub use ascii_table::{
    header_count,     // fn(line: &str) -> Option<usize> - header line count announced by "N header"
    normalize_labels, // fn(labels: Vec<String>) -> Vec<String> - strips the "1_" prefix of scalar labels
};

// ======================== INPUT / OUTPUT ========================
pub use table_io::{
    execution_stamp, // fn(script: &str, args: &[String]) -> String - comment recording the invocation
    read_input,      // fn(path: Option<&Path>) -> Result<String> - reads a file or stdin
    write_output,    // fn(sink: &Sink, text: &str) -> Result<()> - writes stdout or replaces a file
};
