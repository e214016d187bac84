//! Command Line Interface (CLI) layer for barcode-creator.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! the usage presenter (`usage`) and the orchestration logic (`runner`):
//! parse, validate, dispatch, and map failures to exit codes.
//!
//! If you are embedding barcode-creator into another application, prefer
//! the `barcode_creator::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;
pub mod usage;

pub use runner::{report, run};
