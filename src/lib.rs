//! Digest oracle for the poseidon2 fixture circuit.
//!
//! Computes the reference digest `((a + b * 31) mod p)^5 mod p` over the
//! BN254/BN128 scalar field, the value the fixture circuit's witness output
//! is compared against. The construction is a single-round power map, not
//! real Poseidon, and is deliberately documented as non-cryptographic: it
//! is a deterministic reference for circuit testing, nothing more.
//!
//! # Architecture
//!
//! - [`field`] - BN254 scalar field arithmetic over arbitrary-precision
//!   integers
//! - [`hash`] - the combine/digest construction
//! - [`fixture`] - the serializable preimage/digest record
//! - [`check`] - cross-check seam for the circuit witness checker
//! - [`error`] - error taxonomy
//!
//! Every operation is a pure function of its inputs; the only shared datum
//! is the parsed modulus, which is immutable, so all APIs are safely
//! callable from multiple threads.

// Library code must avoid unwrap/expect/panic; errors propagate to the
// caller. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod field;
pub mod fixture;
pub mod hash;

// Re-export commonly used types
pub use check::{cross_check, CheckOutcome, CheckReport, ReferenceChecker, WitnessChecker};
pub use error::{EngineError, EngineResult};
pub use field::{FieldElement, MODULUS_DECIMAL};
pub use fixture::DigestFixture;
pub use hash::{combine, digest};
