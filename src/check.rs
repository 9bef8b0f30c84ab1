//! Cross-check against the circuit witness checker.
//!
//! The real checker is a compiled circuit: it takes the preimage pair,
//! generates a witness, verifies its constraint system, and reports the
//! circuit's output signal. That collaborator lives outside this crate;
//! [`WitnessChecker`] is the seam it plugs into.
//!
//! [`ReferenceChecker`] is an in-crate stand-in that recomputes the digest
//! through `BigUint::modpow`, a code path independent of the engine's own
//! square-and-multiply, so a disagreement localizes a bug to one side.

use crate::error::EngineResult;
use crate::field::{modulus, FieldElement};
use crate::hash::{self, MIX_MULTIPLIER, SBOX_EXPONENT};
use num_bigint::BigUint;

/// Report from a witness checker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether the checker's constraint system was satisfied.
    pub constraints_satisfied: bool,
    /// The checker's computed output value as a decimal string.
    pub output: String,
}

/// A collaborator that computes its own notion of the digest.
pub trait WitnessChecker {
    /// Run the checker on a preimage pair.
    fn check(&self, preimage1: &str, preimage2: &str) -> EngineResult<CheckReport>;
}

/// Result of comparing the engine digest against a checker's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Engine and checker agree.
    Match {
        /// The agreed digest value.
        value: String,
    },
    /// Engine and checker disagree, or the constraint system failed.
    Mismatch {
        /// Engine digest.
        engine: String,
        /// Checker output.
        checker: String,
        /// What went wrong.
        detail: String,
    },
}

impl CheckOutcome {
    /// True when engine and checker agree.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Compare the engine digest for a preimage pair against a checker.
pub fn cross_check(
    checker: &impl WitnessChecker,
    preimage1: &str,
    preimage2: &str,
) -> EngineResult<CheckOutcome> {
    let engine = hash::digest(preimage1, preimage2)?;
    let report = checker.check(preimage1, preimage2)?;

    if !report.constraints_satisfied {
        return Ok(CheckOutcome::Mismatch {
            engine,
            checker: report.output,
            detail: "constraint system not satisfied".to_string(),
        });
    }

    if engine == report.output {
        Ok(CheckOutcome::Match { value: engine })
    } else {
        Ok(CheckOutcome::Mismatch {
            engine,
            checker: report.output,
            detail: "digest values differ".to_string(),
        })
    }
}

/// Independent recomputation of the digest via `BigUint::modpow`.
pub struct ReferenceChecker;

impl WitnessChecker for ReferenceChecker {
    fn check(&self, preimage1: &str, preimage2: &str) -> EngineResult<CheckReport> {
        let a = FieldElement::from_decimal(preimage1)?;
        let b = FieldElement::from_decimal(preimage2)?;

        let p = modulus();
        let combined = (a.value() + b.value() * BigUint::from(MIX_MULTIPLIER)) % p;
        let output = combined.modpow(&BigUint::from(SBOX_EXPONENT), p);

        Ok(CheckReport {
            constraints_satisfied: true,
            output: output.to_str_radix(10),
        })
    }
}
