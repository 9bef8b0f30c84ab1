//! The fixture digest construction.
//!
//! Computes `((a + b * 31) mod p)^5 mod p`, the arithmetic the poseidon2
//! fixture circuit implements. This is a single-round, single-branch
//! permutation: it is **not** Poseidon and **not** a secure hash. It
//! exists solely as a deterministic reference value to compare a circuit's
//! witness output against.
//!
//! The exponent 5 is coprime to p-1, so x -> x^5 permutes the field; the
//! multiplier 31 mixes the second preimage into the first before the
//! power map is applied.

use crate::error::EngineResult;
use crate::field::FieldElement;

/// Multiplier applied to the second preimage before mixing.
pub const MIX_MULTIPLIER: u64 = 31;

/// Fixed S-box exponent of the power map.
pub const SBOX_EXPONENT: u32 = 5;

/// Combine two field elements into a single digest element.
///
/// `combine(a, b) = (a + b * 31)^5 mod p`. Deterministic and total; both
/// inputs are already canonical so no reduction can fail.
pub fn combine(a: &FieldElement, b: &FieldElement) -> FieldElement {
    let multiplier = FieldElement::from_u64(MIX_MULTIPLIER);
    let mixed = a + &(b * &multiplier);
    mixed.pow5()
}

/// Compute the digest of two preimages supplied as decimal literals.
///
/// Each preimage is parsed as an arbitrary-precision signed integer and
/// reduced into the field before combination. The result is serialized as
/// a decimal string. Fails with `ParseError` when either literal is not a
/// valid base-10 integer; a failure aborts the whole computation.
pub fn digest(preimage1: &str, preimage2: &str) -> EngineResult<String> {
    let a = FieldElement::from_decimal(preimage1)?;
    let b = FieldElement::from_decimal(preimage2)?;
    let combined = combine(&a, &b).checked()?;
    Ok(combined.to_decimal())
}
