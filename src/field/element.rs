//! Field element representation and modular arithmetic.
//!
//! Backed by `num_bigint::BigUint` because the modulus exceeds 2^253 and
//! intermediate products in exponentiation exceed 2^506 before reduction,
//! which rules out fixed-width integer arithmetic.

use crate::error::{EngineError, EngineResult};
use crate::field::MODULUS_DECIMAL;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::OnceLock;

/// The field modulus, parsed once per process.
pub fn modulus() -> &'static BigUint {
    static MODULUS: OnceLock<BigUint> = OnceLock::new();
    MODULUS.get_or_init(|| {
        BigUint::parse_bytes(MODULUS_DECIMAL.as_bytes(), 10).unwrap_or_default()
    })
}

/// Signed view of the modulus, used when reducing signed inputs.
fn modulus_signed() -> &'static BigInt {
    static MODULUS: OnceLock<BigInt> = OnceLock::new();
    MODULUS.get_or_init(|| BigInt::from_biguint(Sign::Plus, modulus().clone()))
}

/// A BN254 scalar field element.
///
/// Newtype wrapper around `BigUint` that keeps the value in canonical
/// range `[0, p)` across every construction and operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// The additive identity (zero).
    pub fn zero() -> FieldElement {
        FieldElement(BigUint::zero())
    }

    /// The multiplicative identity (one).
    pub fn one() -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Create a field element from a u64 value.
    pub fn from_u64(val: u64) -> FieldElement {
        // u64 < p, no reduction needed
        FieldElement(BigUint::from(val))
    }

    /// Reduce an arbitrary signed integer into `[0, p)`.
    ///
    /// Total over the integers: `mod_floor` yields a non-negative
    /// representative even for negative inputs, matching
    /// `((n mod p) + p) mod p`.
    pub fn reduce(n: &BigInt) -> FieldElement {
        let reduced = n.mod_floor(modulus_signed());
        FieldElement(reduced.to_biguint().unwrap_or_default())
    }

    /// Parse a signed base-10 integer literal and reduce it.
    ///
    /// Accepts arbitrary-precision literals, including values at or beyond
    /// the modulus and negative values. Anything that is not a valid
    /// decimal integer is a `ParseError`.
    pub fn from_decimal(s: &str) -> EngineResult<FieldElement> {
        let n = s
            .parse::<BigInt>()
            .map_err(|_| EngineError::ParseError(s.to_string()))?;
        Ok(Self::reduce(&n))
    }

    /// Modular exponentiation by square-and-multiply.
    ///
    /// Runs in O(log exponent) multiplications. Exponent 0 yields 1 for
    /// every base, including 0, per the standard convention. A negative
    /// exponent is rejected with `InvalidArgument`.
    pub fn pow(&self, exponent: &BigInt) -> EngineResult<FieldElement> {
        if exponent.sign() == Sign::Minus {
            return Err(EngineError::InvalidArgument(format!(
                "negative exponent: {}",
                exponent
            )));
        }

        let p = modulus();
        let mut result = BigUint::one();
        let mut base = self.0.clone();
        let mut exp = exponent.magnitude().clone();

        while !exp.is_zero() {
            if exp.is_odd() {
                result = &result * &base % p;
            }
            base = &base * &base % p;
            exp >>= 1;
        }

        Ok(FieldElement(result))
    }

    /// Compute x^5 (the fixed S-box exponent) in three multiplications.
    pub fn pow5(&self) -> FieldElement {
        let p = modulus();
        let x2 = &self.0 * &self.0 % p;
        let x4 = &x2 * &x2 % p;
        FieldElement(x4 * &self.0 % p)
    }

    /// Get the underlying integer value.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Convert to the canonical decimal string representation.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Range-invariant guard: confirm the value lies in `[0, p)`.
    ///
    /// Unreachable through the public constructors; a violation means the
    /// reduction path has a bug, not that the caller misused the API.
    pub fn checked(self) -> EngineResult<FieldElement> {
        if self.0 < *modulus() {
            Ok(self)
        } else {
            Err(EngineError::RangeInvariantViolation(self.to_decimal()))
        }
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for FieldElement {
    fn from(val: u64) -> Self {
        FieldElement::from_u64(val)
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % modulus())
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &FieldElement) -> FieldElement {
        let p = modulus();
        FieldElement((p + &self.0 - &rhs.0) % p)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(&self.0 * &rhs.0 % modulus())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        let p = modulus();
        FieldElement((p - &self.0) % p)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
