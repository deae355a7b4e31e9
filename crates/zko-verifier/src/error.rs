// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for verification key handling and proof checking.

use zko_types::ArithmeticError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifierError {
    /// Structurally invalid data: wrong arity, bad encoding, off-curve point.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("verification key already loaded")]
    AlreadyInitialized,

    #[error("verification key not loaded")]
    Uninitialized,
}

impl From<ArithmeticError> for VerifierError {
    fn from(err: ArithmeticError) -> Self {
        VerifierError::MalformedInput(err.to_string())
    }
}

pub type VerifierResult<T> = Result<T, VerifierError>;
