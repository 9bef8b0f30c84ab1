//! BN254 scalar field arithmetic.
//!
//! Provides [`FieldElement`], an arbitrary-precision integer normalized
//! into `[0, p)` where `p` is the BN254/BN128 scalar field order. All
//! arithmetic reduces eagerly, so every observable value is canonical.

mod element;

pub use element::{modulus, FieldElement};

/// BN254/BN128 scalar field modulus as a decimal string.
pub const MODULUS_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";
