//! Fixture record produced for the circuit cross-check.
//!
//! Mirrors the JSON shape the circuit test harness consumes: the two
//! original preimage strings, unreduced, plus the reference digest. The
//! record is only built when the digest computation succeeds, so a failed
//! computation can never be persisted by a caller. Writing the record to
//! disk is the caller's responsibility, not this crate's.

use crate::error::EngineResult;
use crate::hash;
use serde::{Deserialize, Serialize};

/// A digest fixture: preimage pair and its reference digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestFixture {
    /// The two input literals, exactly as supplied (unreduced).
    pub preimage: [String; 2],
    /// Decimal-string digest of the reduced preimages.
    pub digest: String,
}

impl DigestFixture {
    /// Compute the digest of the preimage pair and build the record.
    ///
    /// Propagates any engine error; no record exists on failure.
    pub fn compute(preimage1: &str, preimage2: &str) -> EngineResult<DigestFixture> {
        let digest = hash::digest(preimage1, preimage2)?;
        Ok(DigestFixture {
            preimage: [preimage1.to_string(), preimage2.to_string()],
            digest,
        })
    }

    /// Encode as pretty-printed JSON, the shape the circuit harness reads.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_keeps_preimage_unreduced() {
        // Input beyond the modulus stays verbatim in the record even
        // though the digest is computed over its reduced value.
        let big = "21888242871839275222246405745257275088548364400416034343698204186575808495622";
        let fixture = DigestFixture::compute(big, "0").unwrap();
        assert_eq!(fixture.preimage[0], big);
        assert_eq!(fixture.digest, hash::digest("5", "0").unwrap());
    }

    #[test]
    fn test_compute_fails_without_record() {
        assert!(DigestFixture::compute("12x", "0").is_err());
    }

    #[test]
    fn test_json_shape() {
        let fixture = DigestFixture::compute("1", "1").unwrap();
        let json = fixture.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["preimage"][0], "1");
        assert_eq!(value["preimage"][1], "1");
        assert_eq!(value["digest"], "33554432");
    }

    #[test]
    fn test_json_roundtrip() {
        let fixture = DigestFixture::compute("123456789", "987654321").unwrap();
        let json = fixture.to_json().unwrap();
        let back: DigestFixture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixture);
    }
}
