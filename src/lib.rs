//! Rule-based structured extraction for free-text clinical prescription
//! notes in Brazilian Portuguese. No external NLP service: ordered keyword
//! groups classify the clinical action, independent pattern extractors pull
//! concentration, dosage, duration, quantity and note spans from the
//! original text, and the medication name is inferred from whatever
//! residual text remains after subtracting them.

pub mod config;
pub mod intake;
pub mod models;
pub mod parsing;

pub use intake::{sanitize_note, SanitizedNote};
pub use models::enums::ActionKind;
pub use models::prescription::ParsedPrescription;
pub use models::ModelError;
pub use parsing::intent::has_prescription_intent;
pub use parsing::parser::{parse_dictation, parse_prescription_input};
