use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::Error;

/// Highest degree a [`Polynomial`] can carry.
pub const MAX_DEGREE: u32 = u128::BITS - 1;

/// Polynomial over GF(2), stored as a bit vector where bit `d` is the coefficient of `x^d`.
///
/// Zero coefficients are simply unset bits, so every value is already in canonical form and
/// equality is plain integer equality.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Polynomial(u128);

impl Polynomial {
    pub const ZERO: Self = Polynomial(0);
    pub const ONE: Self = Polynomial(1);
    pub const X: Self = Polynomial(0b10);

    pub const fn from_bits(bits: u128) -> Self {
        Polynomial(bits)
    }

    pub const fn bits(self) -> u128 {
        self.0
    }

    /// `x^degree`. Panics if `degree > MAX_DEGREE`.
    pub const fn monomial(degree: u32) -> Self {
        assert!(degree <= MAX_DEGREE, "monomial degree out of range");
        Polynomial(1 << degree)
    }

    /// Builds a polynomial from sparse `(degree, coefficient)` pairs.
    ///
    /// Coefficients must be 0 or 1. A degree listed twice contributes twice, i.e. the
    /// coefficients are summed in GF(2).
    pub fn from_terms<I>(terms: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut bits = 0u128;
        for (degree, coefficient) in terms {
            if degree > MAX_DEGREE {
                return Err(Error::DegreeOutOfRange { degree });
            }
            match coefficient {
                0 => {}
                1 => bits ^= 1 << degree,
                _ => return Err(Error::InvalidCoefficient { degree, coefficient }),
            }
        }
        Ok(Polynomial(bits))
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn coefficient(self, degree: u32) -> u32 {
        if degree > MAX_DEGREE {
            0
        } else {
            ((self.0 >> degree) & 1) as u32
        }
    }

    /// Highest degree with a nonzero coefficient. The zero polynomial reports 0, the same as
    /// the constant 1, so callers that care must check [`Polynomial::is_zero`] first.
    pub const fn max_degree(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            MAX_DEGREE - self.0.leading_zeros()
        }
    }

    /// Degrees with a nonzero coefficient, lowest first.
    pub fn degrees(self) -> impl DoubleEndedIterator<Item = u32> {
        (0..=MAX_DEGREE).filter(move |&degree| self.coefficient(degree) == 1)
    }

    /// Sum over GF(2) of the terms of degree `0..=max_degree`.
    ///
    /// Terms above `max_degree` are not considered, in either operand. Every polynomial
    /// reduced modulo a degree-`m` modulus satisfies this with `max_degree = m`; this is not a
    /// general purpose adder.
    pub const fn add_bounded(self, rhs: Self, max_degree: u32) -> Self {
        let mask = if max_degree >= MAX_DEGREE {
            u128::MAX
        } else {
            (1u128 << (max_degree + 1)) - 1
        };
        Polynomial((self.0 ^ rhs.0) & mask)
    }

    /// Remainder of binary long division by `divisor`, or `None` if `divisor` is zero.
    pub const fn checked_rem(self, divisor: Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }

        let divisor_degree = divisor.max_degree();
        let mut remainder = self.0;
        while remainder != 0 {
            let remainder_degree = MAX_DEGREE - remainder.leading_zeros();
            if remainder_degree < divisor_degree {
                break;
            }
            // Subtraction is XOR in characteristic 2; this clears the leading term
            remainder ^= divisor.0 << (remainder_degree - divisor_degree);
        }
        Some(Polynomial(remainder))
    }
}

impl Mul for Polynomial {
    type Output = Self;

    /// Carry-less product. The degrees of the operands must sum to at most [`MAX_DEGREE`];
    /// higher terms are dropped.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = 0u128;
        let mut multiplier = rhs.0;
        let mut shifted = self.0;
        while multiplier != 0 {
            if multiplier & 1 == 1 {
                product ^= shifted;
            }
            multiplier >>= 1;
            shifted <<= 1;
        }
        Polynomial(product)
    }
}

impl MulAssign for Polynomial {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for degree in self.degrees().rev() {
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match degree {
                0 => f.write_str("1")?,
                1 => f.write_str("x")?,
                _ => write!(f, "x^{degree}")?,
            }
        }
        Ok(())
    }
}

#[test]
fn test_from_terms() {
    let p = Polynomial::from_terms([(0, 1), (1, 1), (3, 1)]).unwrap();
    assert_eq!(p, Polynomial::from_bits(0b1011));

    let with_zero_terms = Polynomial::from_terms([(0, 1), (2, 0), (3, 1)]).unwrap();
    assert_eq!(with_zero_terms, Polynomial::from_bits(0b1001));
    assert_eq!(with_zero_terms.coefficient(2), 0);

    let cancelled = Polynomial::from_terms([(2, 1), (2, 1)]).unwrap();
    assert!(cancelled.is_zero());

    assert_eq!(
        Polynomial::from_terms([(1, 2)]),
        Err(Error::InvalidCoefficient { degree: 1, coefficient: 2 })
    );
    assert_eq!(
        Polynomial::from_terms([(128, 1)]),
        Err(Error::DegreeOutOfRange { degree: 128 })
    );
}

#[test]
fn test_max_degree() {
    assert_eq!(Polynomial::ZERO.max_degree(), 0);
    assert_eq!(Polynomial::ONE.max_degree(), 0);
    assert_eq!(Polynomial::from_bits(0b1010).max_degree(), 3);
    assert_eq!(Polynomial::monomial(MAX_DEGREE).max_degree(), MAX_DEGREE);
}

#[test]
fn test_mul() {
    let x_plus_one = Polynomial::from_bits(0b11);
    assert_eq!(x_plus_one * x_plus_one, Polynomial::from_bits(0b101));
    assert_eq!(Polynomial::monomial(3) * Polynomial::X, Polynomial::monomial(4));
    assert_eq!(x_plus_one * Polynomial::ZERO, Polynomial::ZERO);
    assert_eq!(x_plus_one * Polynomial::ONE, x_plus_one);

    let mut p = Polynomial::from_bits(0b111);
    p *= Polynomial::X;
    assert_eq!(p, Polynomial::from_bits(0b1110));
}

#[test]
fn test_add_bounded() {
    let a = Polynomial::from_bits(0b110);
    let b = Polynomial::from_bits(0b011);
    assert_eq!(a.add_bounded(b, 3), Polynomial::from_bits(0b101));
    assert_eq!(a.add_bounded(b, 3), b.add_bounded(a, 3));
    assert!(a.add_bounded(a, 3).is_zero());

    // Terms above the bound are outside the field representation and are not considered
    assert_eq!(Polynomial::monomial(5).add_bounded(Polynomial::ONE, 3), Polynomial::ONE);
    assert_eq!(
        Polynomial::monomial(MAX_DEGREE).add_bounded(Polynomial::ONE, MAX_DEGREE),
        Polynomial::from_bits((1 << MAX_DEGREE) | 1)
    );
}

#[test]
fn test_checked_rem() {
    let modulus = Polynomial::from_bits(0b1011); // x^3 + x + 1
    assert_eq!(Polynomial::monomial(3).checked_rem(modulus), Some(Polynomial::from_bits(0b011)));
    assert_eq!(Polynomial::monomial(4).checked_rem(modulus), Some(Polynomial::from_bits(0b110)));
    assert_eq!(Polynomial::monomial(6).checked_rem(modulus), Some(Polynomial::from_bits(0b101)));
    assert_eq!(modulus.checked_rem(modulus), Some(Polynomial::ZERO));

    let small = Polynomial::from_bits(0b101);
    assert_eq!(small.checked_rem(modulus), Some(small));
    assert_eq!(Polynomial::ZERO.checked_rem(modulus), Some(Polynomial::ZERO));
    assert_eq!(small.checked_rem(Polynomial::ZERO), None);
}

#[test]
fn test_display() {
    assert_eq!(Polynomial::from_bits(0b1011).to_string(), "x^3 + x + 1");
    assert_eq!(Polynomial::from_bits(0x11D).to_string(), "x^8 + x^4 + x^3 + x^2 + 1");
    assert_eq!(Polynomial::ZERO.to_string(), "0");
    assert_eq!(Polynomial::ONE.to_string(), "1");
    assert_eq!(Polynomial::X.to_string(), "x");
}
