use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunaSignError {
    #[error("Invalid dimension: expected {expected}, got {got}")]
    InvalidDimension { expected: usize, got: usize },

    #[error("Invalid modulus: {modulus}")]
    InvalidModulus { modulus: i64 },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("No inverse for {value} modulo {modulus}")]
    NoIntegerInverse { value: i64, modulus: i64 },

    #[error("Division by zero polynomial")]
    DivisionByZeroPolynomial,

    #[error("Polynomial not invertible modulo x^n + 1")]
    NotInvertible,

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Key generation failed after {attempts} attempts")]
    KeyGenerationFailed { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, LunaSignError>;
