pub mod enums;
pub mod prescription;

pub use enums::ActionKind;
pub use prescription::ParsedPrescription;

use thiserror::Error;

/// Errors produced when rehydrating model types from stored strings.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
