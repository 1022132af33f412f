use std::collections::HashMap;

use crate::{Error, Polynomial};

/// Powers of the primitive element `a`, as polynomials reduced modulo the primitive polynomial.
///
/// Entry `e` is the representative of `a^e`, for `e` in `0..field_size - 1`. An inverse index
/// maps each representative back to its exponent.
#[derive(Clone, Debug)]
pub struct ExponentTable {
    polynomials: Vec<Polynomial>,
    exponents: HashMap<Polynomial, usize>,
}

impl ExponentTable {
    /// Builds the table for GF(2^`degree`), where `field_size == 2^degree`.
    ///
    /// The first `degree` entries are the monomials `x^0..x^(degree-1)`; each later entry is
    /// the previous one multiplied by `x` and reduced modulo `primitive_polynomial`.
    pub fn build(degree: u32, field_size: usize, primitive_polynomial: Polynomial) -> Result<Self, Error> {
        if primitive_polynomial.is_zero() {
            return Err(Error::ZeroModulus);
        }

        let len = field_size.saturating_sub(1);
        let mut polynomials: Vec<Polynomial> = Vec::new();
        let mut exponents: HashMap<Polynomial, usize> = HashMap::new();
        polynomials
            .try_reserve_exact(len)
            .map_err(|_| Error::InvalidFieldSize { degree })?;
        exponents
            .try_reserve(len)
            .map_err(|_| Error::InvalidFieldSize { degree })?;

        for exponent in 0..len {
            let polynomial = match polynomials.last() {
                Some(&previous) if exponent >= degree as usize => (previous * Polynomial::X)
                    .checked_rem(primitive_polynomial)
                    .ok_or(Error::ZeroModulus)?,
                _ => Polynomial::monomial(exponent as u32),
            };
            polynomials.push(polynomial);
            // A non-primitive modulus repeats representatives; the lowest exponent wins
            exponents.entry(polynomial).or_insert(exponent);
        }

        tracing::debug!(
            degree,
            entries = polynomials.len(),
            distinct = exponents.len(),
            "Exponent table built"
        );

        Ok(Self { polynomials, exponents })
    }

    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Representative of `a^exponent`, if `exponent` is in range.
    pub fn polynomial(&self, exponent: usize) -> Option<Polynomial> {
        self.polynomials.get(exponent).copied()
    }

    /// The lowest exponent whose representative equals `polynomial`.
    pub fn find_exponent(&self, polynomial: Polynomial) -> Result<usize, Error> {
        self.exponents
            .get(&polynomial)
            .copied()
            .ok_or(Error::PolynomialNotFound { polynomial })
    }

    pub fn iter(&self) -> impl Iterator<Item = Polynomial> + '_ {
        self.polynomials.iter().copied()
    }
}

#[test]
fn test_gf8_powers() {
    let table = ExponentTable::build(3, 8, Polynomial::from_bits(0b1011)).unwrap();
    let powers: Vec<u128> = table.iter().map(Polynomial::bits).collect();
    // 1, x, x^2, x + 1, x^2 + x, x^2 + x + 1, x^2 + 1
    assert_eq!(powers, vec![0b001, 0b010, 0b100, 0b011, 0b110, 0b111, 0b101]);
    assert_eq!(table.len(), 7);
    assert_eq!(table.polynomial(7), None);
}

#[test]
fn test_round_trip() {
    let table = ExponentTable::build(8, 256, Polynomial::from_bits(0x11D)).unwrap();
    assert_eq!(table.len(), 255);
    for exponent in 0..table.len() {
        let polynomial = table.polynomial(exponent).unwrap();
        assert_eq!(table.find_exponent(polynomial), Ok(exponent));
    }
}

#[test]
fn test_zero_is_not_a_power() {
    let table = ExponentTable::build(3, 8, Polynomial::from_bits(0b1011)).unwrap();
    assert_eq!(
        table.find_exponent(Polynomial::ZERO),
        Err(Error::PolynomialNotFound {
            polynomial: Polynomial::ZERO
        })
    );
}

#[test]
fn test_non_primitive_repeats() {
    // (x + 1)^3 generates a cycle of length 4 instead of 7
    let table = ExponentTable::build(3, 8, Polynomial::from_bits(0b1111)).unwrap();
    assert_eq!(table.polynomial(4), Some(Polynomial::ONE));
    assert_eq!(table.find_exponent(Polynomial::ONE), Ok(0));
}

#[test]
fn test_unallocatable_table() {
    let primitive = Polynomial::from_terms([(0, 1), (1, 1), (60, 1)]).unwrap();
    assert!(matches!(
        ExponentTable::build(60, usize::MAX, primitive),
        Err(Error::InvalidFieldSize { degree: 60 })
    ));
}

#[test]
fn test_zero_modulus() {
    assert!(matches!(
        ExponentTable::build(1, 2, Polynomial::ZERO),
        Err(Error::ZeroModulus)
    ));
}
