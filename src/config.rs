/// Engine-level constants
pub const ENGINE_NAME: &str = "receituario";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum dictation note length in characters; longer input is truncated
/// at a word boundary during intake.
pub const MAX_NOTE_LENGTH: usize = 2_000;

/// Minimum residual length, in characters, for the residual text to be
/// accepted as a medication name.
pub const MIN_NAME_LENGTH: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_name_is_receituario() {
        assert_eq!(ENGINE_NAME, "receituario");
    }

    #[test]
    fn engine_version_matches_cargo() {
        assert_eq!(ENGINE_VERSION, "0.3.0");
    }

    #[test]
    fn name_floor_below_note_limit() {
        assert!(MIN_NAME_LENGTH < MAX_NOTE_LENGTH);
    }
}
