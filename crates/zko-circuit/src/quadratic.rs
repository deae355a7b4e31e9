// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bls12_381::Fr;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// "I know `x` such that `a·x² + b·x + c == out`"
///
/// Public inputs, in order: `a`, `b`, `c`, `out`. The root `x` stays private.
#[derive(Clone)]
pub struct QuadraticCircuit {
    pub a: Option<Fr>,
    pub b: Option<Fr>,
    pub c: Option<Fr>,
    // Private witness
    pub root: Option<Fr>,
}

impl QuadraticCircuit {
    /// Create a circuit with None witnesses (for setup)
    pub fn empty() -> Self {
        Self { a: None, b: None, c: None, root: None }
    }

    /// Evaluate the polynomial natively; `None` if any assignment is missing.
    pub fn output(&self) -> Option<Fr> {
        let (a, b, c, x) = (self.a?, self.b?, self.c?, self.root?);
        Some(a * x * x + b * x + c)
    }
}

impl ConstraintSynthesizer<Fr> for QuadraticCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Public inputs (4 Fr elements) ===
        let a_pub = FpVar::new_input(cs.clone(), || self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b_pub = FpVar::new_input(cs.clone(), || self.b.ok_or(SynthesisError::AssignmentMissing))?;
        let c_pub = FpVar::new_input(cs.clone(), || self.c.ok_or(SynthesisError::AssignmentMissing))?;
        let out_pub = FpVar::new_input(cs.clone(), || {
            self.output().ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Private witness ===
        let x = FpVar::new_witness(cs, || self.root.ok_or(SynthesisError::AssignmentMissing))?;

        // a·x² + b·x + c == out
        let x_sq = &x * &x;
        let lhs = &a_pub * &x_sq + &b_pub * &x + &c_pub;
        lhs.enforce_equal(&out_pub)?;

        Ok(())
    }
}
