// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zko-contract: order ledger with a Groth16 verification gate on Soroban

#![no_std]

mod contract;
mod error;
mod types;
mod verifier;

pub use contract::*;
pub use error::*;
pub use types::*;
pub use verifier::*;
