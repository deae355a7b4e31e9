// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for field and curve arithmetic.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("field element is not canonically reduced")]
    NonCanonical,

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("point is not on the curve or not in the prime-order subgroup")]
    InvalidPoint,
}

pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
