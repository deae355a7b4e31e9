// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for ledger transactions.
//!
//! Every variant aborts the whole transaction: no state changes and no
//! events are emitted.

use zko_verifier::VerifierError;

use crate::status::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("order {0} not found")]
    NotFound(u64),

    #[error("caller is not the customer of order {order_id}")]
    Unauthorized { order_id: u64 },

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("content pointer already set for order {0}")]
    AlreadySet(u64),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Verification key store failures (`AlreadyInitialized`, `Uninitialized`).
    #[error(transparent)]
    Keys(VerifierError),
}

impl From<VerifierError> for LedgerError {
    fn from(err: VerifierError) -> Self {
        match err {
            VerifierError::MalformedInput(msg) => LedgerError::MalformedInput(msg),
            other => LedgerError::Keys(other),
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
