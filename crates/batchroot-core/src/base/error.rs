use thiserror::Error;

/// Errors raised while parsing the textual form of a primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not 40 hex digits.
    #[error("Invalid address `{0}`: expected 20 bytes of hex")]
    InvalidAddress(String),

    /// Not 64 hex digits.
    #[error("Invalid hash `{0}`: expected 32 bytes of hex")]
    InvalidNode(String),

    /// Neither a decimal nor a `0x`-prefixed hex integer.
    #[error("Invalid integer `{0}`")]
    InvalidInteger(String),

    /// The integer does not fit in 256 bits.
    #[error("Integer `{0}` exceeds 256 bits")]
    IntegerOverflow(String),
}
