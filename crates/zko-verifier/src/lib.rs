// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zko-verifier: native Groth16 verification over BLS12-381.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`pairing`] | Single and batched (multi-Miller-loop) pairings |
//! | [`keys`] | `VerificationKey`, `Proof`, write-once `VerificationKeyStore` |
//! | [`verifier`] | The Groth16 equation |
//! | [`encoding`] | Hex wire format shared with the CLI and the contract |

pub mod encoding;
pub mod error;
pub mod keys;
pub mod pairing;
pub mod verifier;

pub use encoding::{scalar_to_hex, scalars_to_hex, ProofHex, VerificationKeyHex};
pub use error::{VerifierError, VerifierResult};
pub use keys::{Proof, VerificationKey, VerificationKeyStore};
pub use pairing::{multi_pairing_check, pairing, TargetElement};
pub use verifier::{prepare_inputs, verify_groth16};
