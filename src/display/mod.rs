//! Output formatting utilities.
//!
//! Turns decoded values and raw byte buffers into the text written to
//! stdout or to an output file.

pub mod json_printer;
