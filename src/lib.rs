// Library root
// -----------
// This crate collects data about an artwork and its creator, assembles
// it into a Certificate of Authority record and dumps that record. The
// binary (`main.rs`) only parses arguments and wires these modules up.
//
// Module responsibilities:
// - `model`: the certificate record, its primary-setters and the email check.
// - `address`: postal addresses, line normalisation and validation rules.
// - `api`: HTTP client for the address metadata service.
// - `builder`: the shared path from collected input to a finished record.
// - `ui` / `questions`: the interactive wizard and its prompt wording.
// - `cli` / `commands`: argument definitions and subcommand handlers.
// - `output`: the final dump.
pub mod address;
pub mod api;
pub mod builder;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod output;
pub mod questions;
pub mod ui;

pub use error::{CoaError, Result};
