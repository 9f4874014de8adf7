/// Error type for primitive decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    #[error("Invalid hex char '{0}'")]
    InvalidHexCharacter(char),

    #[error("invalid hex length: {0} characters")]
    InvalidHexLength(usize),
}
