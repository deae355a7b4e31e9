// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zko-types: field and curve arithmetic shared by the verifier and the
//! order ledger.
//!
//! Thin, validating wrappers over arkworks BLS12-381. Public inputs are
//! [`Scalar`]s; proofs and verification keys are built from [`G1Point`]
//! and [`G2Point`].

pub mod curve;
pub mod error;
pub mod field;

pub use curve::CurvePoint;
pub use error::{ArithmeticError, ArithmeticResult};
pub use field::FieldElement;

pub use ark_bls12_381::{Bls12_381, Fq, Fq2, Fr};

/// Element of the scalar field; the public-input type.
pub type Scalar = FieldElement<Fr>;

/// Element of the base field G1 coordinates live in.
pub type BaseElement = FieldElement<Fq>;

pub type G1Point = CurvePoint<ark_bls12_381::g1::Config>;

pub type G2Point = CurvePoint<ark_bls12_381::g2::Config>;
