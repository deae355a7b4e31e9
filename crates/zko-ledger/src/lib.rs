// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zko-ledger: customer orders whose verification is gated by a Groth16
//! proof over the order's public inputs.
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use zko_ledger::{OrderLedger, OrderRequest, OrderStatus, Principal};
//! use zko_types::Scalar;
//!
//! # fn example(vk: zko_verifier::VerificationKey, proof: zko_verifier::Proof) -> Result<(), zko_ledger::LedgerError> {
//! let mut ledger = OrderLedger::new();
//! ledger.load_verification_key(vk)?;
//!
//! let customer = Principal::new("customer");
//! let id = ledger
//!     .create_order(&customer, OrderRequest {
//!         product: "Test Product".into(),
//!         quantity: 1,
//!         total_cost: 100,
//!         customer_name: "John Doe".into(),
//!         public_inputs: [1, 1, 1, 21].map(Scalar::from_u64).to_vec(),
//!     })?
//!     .value;
//! ledger.attach_content_pointer(id, "bafy...")?;
//!
//! let receipt = ledger.verify_order(&customer, id, &proof)?;
//! if receipt.value {
//!     ledger.update_status(&customer, id, OrderStatus::Completed)?;
//! }
//! # Ok(())
//! # }
//! ```

mod binding;
pub mod error;
pub mod events;
pub mod ledger;
pub mod order;
pub mod status;

pub use error::{LedgerError, LedgerResult};
pub use events::{LedgerEvent, Receipt};
pub use ledger::{LedgerState, OrderLedger};
pub use order::{Order, OrderRequest, Principal};
pub use status::{OrderStatus, UnknownStatus};
