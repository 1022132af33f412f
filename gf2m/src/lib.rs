//! Addition tables for GF(2^m) in exponent form.
//!
//! Every nonzero element of GF(2^m) is a power `a^e` of a primitive element `a`. A
//! [`GaloisField`] precomputes, for every pair of exponents `(i, j)`, the exponent `k` with
//! `a^i + a^j = a^k`, so that addition in exponent form is a single table lookup.
//!
//! ```
//! use gf2m::{GaloisField, Polynomial};
//!
//! // GF(8) generated by x^3 + x + 1
//! let primitive = Polynomial::from_terms([(0, 1), (1, 1), (3, 1)]).unwrap();
//! let field = GaloisField::new(3, primitive).unwrap();
//! assert_eq!(field.sum(0, 1), Some(3));
//! assert_eq!(field.sum(4, 4), None);
//! ```

mod addition;
mod exponent;
pub mod polynomial;

pub use addition::AdditionTable;
pub use exponent::ExponentTable;
pub use polynomial::Polynomial;

/// Integer encoding of a zero sum, for consumers of [`GaloisField::sum_or_sentinel`].
pub const ZERO_SENTINEL: isize = -1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("field size 2^{degree} is not supported; the degree must be at least 1 and the (2^{degree} - 1)^2 addition table must be addressable")]
    InvalidFieldSize { degree: u32 },
    #[error("sum {polynomial} matches no power of the primitive element; the polynomial is not primitive for this degree")]
    PolynomialNotFound { polynomial: Polynomial },
    #[error("the primitive polynomial must not be zero")]
    ZeroModulus,
    #[error("coefficient {coefficient} of x^{degree} is not 0 or 1")]
    InvalidCoefficient { degree: u32, coefficient: u32 },
    #[error("degree {degree} exceeds the largest supported degree {}", polynomial::MAX_DEGREE)]
    DegreeOutOfRange { degree: u32 },
}

/// 2^`degree`, if it is representable and leaves at least one nonzero element.
pub fn field_size(degree: u32) -> Result<usize, Error> {
    match degree {
        0 => Err(Error::InvalidFieldSize { degree }),
        _ => 1usize.checked_shl(degree).ok_or(Error::InvalidFieldSize { degree }),
    }
}

/// GF(2^m) with its addition table. Immutable once built.
#[derive(Clone, Debug)]
pub struct GaloisField {
    degree: u32,
    primitive_polynomial: Polynomial,
    field_size: usize,
    exponents: ExponentTable,
    addition: AdditionTable,
}

impl GaloisField {
    /// Builds GF(2^`degree`) generated by a root of `primitive_polynomial`.
    ///
    /// The polynomial is expected to be primitive and of degree `degree`. This is not checked
    /// up front; a polynomial that is not primitive surfaces as
    /// [`Error::PolynomialNotFound`] while the addition table is filled.
    pub fn new(degree: u32, primitive_polynomial: Polynomial) -> Result<Self, Error> {
        let field_size = field_size(degree)?;
        // The addition table holds (field_size - 1)^2 cells
        (field_size - 1)
            .checked_mul(field_size - 1)
            .ok_or(Error::InvalidFieldSize { degree })?;
        tracing::debug!(degree, field_size, %primitive_polynomial, "Constructing Galois field");

        let exponents = ExponentTable::build(degree, field_size, primitive_polynomial)?;
        let addition = AdditionTable::build(&exponents, degree)?;

        Ok(Self {
            degree,
            primitive_polynomial,
            field_size,
            exponents,
            addition,
        })
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn primitive_polynomial(&self) -> Polynomial {
        self.primitive_polynomial
    }

    /// 2^m.
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Number of exponents, `field_size - 1`.
    pub fn nonzero_elements(&self) -> usize {
        self.field_size - 1
    }

    /// Exponent of `a^i + a^j`, or `None` if the sum is zero.
    ///
    /// Panics if `i` or `j` is not below [`GaloisField::nonzero_elements`].
    #[inline]
    pub fn sum(&self, i: usize, j: usize) -> Option<usize> {
        self.addition[(i, j)]
    }

    /// Like [`GaloisField::sum`], but `None` for out of range exponents.
    #[inline]
    pub fn checked_sum(&self, i: usize, j: usize) -> Option<Option<usize>> {
        self.addition.get(i, j)
    }

    /// Like [`GaloisField::sum`], with a zero sum encoded as [`ZERO_SENTINEL`].
    #[inline]
    pub fn sum_or_sentinel(&self, i: usize, j: usize) -> isize {
        self.sum(i, j).map_or(ZERO_SENTINEL, |k| k as isize)
    }

    /// Polynomial representative of `a^exponent`.
    pub fn element(&self, exponent: usize) -> Option<Polynomial> {
        self.exponents.polynomial(exponent)
    }

    /// Exponent `e` with `a^e == polynomial`.
    pub fn exponent_of(&self, polynomial: Polynomial) -> Result<usize, Error> {
        self.exponents.find_exponent(polynomial)
    }

    pub fn addition_table(&self) -> &AdditionTable {
        &self.addition
    }
}

#[cfg(test)]
const PRIMITIVE_POLYNOMIALS: [(u32, u128); 8] = [
    (1, 0b11),
    (2, 0b111),
    (3, 0b1011),
    (4, 0b10011),
    (5, 0b100101),
    (6, 0b1000011),
    (7, 0b10000011),
    (8, 0x11D),
];

#[test]
fn test_gf8() {
    let primitive = Polynomial::from_terms([(0, 1), (1, 1), (3, 1)]).unwrap();
    let field = GaloisField::new(3, primitive).unwrap();
    assert_eq!(field.degree(), 3);
    assert_eq!(field.field_size(), 8);
    assert_eq!(field.addition_table().dimension(), 7);
    assert_eq!(field.primitive_polynomial(), primitive);
    for i in 0..7 {
        assert_eq!(field.sum(i, i), None);
        assert_eq!(field.sum_or_sentinel(i, i), ZERO_SENTINEL);
    }
    assert_eq!(field.sum(0, 1), Some(3));
    assert_eq!(field.sum(1, 2), Some(4));
    assert_eq!(field.sum_or_sentinel(1, 2), 4);
    assert_eq!(field.checked_sum(1, 2), Some(Some(4)));
    assert_eq!(field.checked_sum(1, 7), None);
}

#[test]
fn test_table_properties() {
    for (degree, bits) in PRIMITIVE_POLYNOMIALS {
        let field = GaloisField::new(degree, Polynomial::from_bits(bits)).unwrap();
        let n = field.nonzero_elements();
        assert_eq!(field.field_size(), 1 << degree);
        assert_eq!(field.addition_table().dimension(), n);

        for i in 0..n {
            assert_eq!(field.sum(i, i), None);
            let lhs = field.element(i).unwrap();
            assert_eq!(field.exponent_of(lhs), Ok(i));

            for j in (0..n).filter(|&j| j != i) {
                let k = field.sum(i, j).unwrap();
                assert!(k < n);
                assert_eq!(field.sum(j, i), Some(k));
                let rhs = field.element(j).unwrap();
                assert_eq!(field.element(k), Some(Polynomial::from_bits(lhs.bits() ^ rhs.bits())));
            }
        }
    }
}

#[test]
fn test_gf2() {
    let field = GaloisField::new(1, Polynomial::from_bits(0b11)).unwrap();
    assert_eq!(field.field_size(), 2);
    assert_eq!(field.addition_table().dimension(), 1);
    assert_eq!(field.sum(0, 0), None);
}

#[test]
fn test_invalid_field_size() {
    let primitive = Polynomial::from_bits(0b1011);
    assert_eq!(
        GaloisField::new(usize::BITS, primitive).unwrap_err(),
        Error::InvalidFieldSize { degree: usize::BITS }
    );
    assert_eq!(
        GaloisField::new(0, primitive).unwrap_err(),
        Error::InvalidFieldSize { degree: 0 }
    );
    assert_eq!(field_size(usize::BITS - 1), Ok(1 << (usize::BITS - 1)));
}

#[test]
fn test_addition_table_too_large() {
    // 2^m fits usize but (2^m - 1)^2 cells do not; rejected before anything is allocated
    let degree = usize::BITS / 2 + 1;
    let primitive = Polynomial::from_terms([(0, 1), (1, 1), (degree, 1)]).unwrap();
    assert_eq!(
        GaloisField::new(degree, primitive).unwrap_err(),
        Error::InvalidFieldSize { degree }
    );
    assert_eq!(
        GaloisField::new(usize::BITS - 4, primitive).unwrap_err(),
        Error::InvalidFieldSize { degree: usize::BITS - 4 }
    );
}

#[test]
fn test_reducible_polynomial() {
    // x^3 + x^2 + x + 1 = (x + 1)^3
    let reducible = Polynomial::from_terms([(0, 1), (1, 1), (2, 1), (3, 1)]).unwrap();
    let err = GaloisField::new(3, reducible).unwrap_err();
    assert!(matches!(err, Error::PolynomialNotFound { .. }));
    assert!(err.to_string().contains("not primitive"));
}

#[test]
fn test_zero_modulus() {
    assert_eq!(GaloisField::new(1, Polynomial::ZERO).unwrap_err(), Error::ZeroModulus);
}

#[test]
fn test_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GaloisField>();

    let field = std::sync::Arc::new(GaloisField::new(4, Polynomial::from_bits(0b10011)).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let field = field.clone();
            std::thread::spawn(move || field.sum(i, i + 1))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_some());
    }
}
