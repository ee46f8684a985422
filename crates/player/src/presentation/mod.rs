//! Presentation - text rendering for the command line

pub mod sheet_text;

pub use sheet_text::SheetText;
