use std::ops::Index;

use crate::{Error, ExponentTable};

/// Square table of `a^i + a^j` in exponent form, `None` where the sum is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdditionTable {
    dimension: usize,
    entries: Vec<Option<usize>>,
}

impl AdditionTable {
    /// Fills the table from `exponents`, whose representatives have degree at most `degree`.
    ///
    /// Fails on the first sum that has no exponent; no partial table is returned.
    pub fn build(exponents: &ExponentTable, degree: u32) -> Result<Self, Error> {
        let dimension = exponents.len();
        let cells = dimension.checked_mul(dimension).ok_or(Error::InvalidFieldSize { degree })?;
        let mut entries = vec![None; cells];

        for (i, lhs) in exponents.iter().enumerate() {
            // Diagonal stays None: a + a = 0 in characteristic 2
            for (j, rhs) in exponents.iter().enumerate().skip(i + 1) {
                let sum = lhs.add_bounded(rhs, degree);
                let exponent = exponents.find_exponent(sum).inspect_err(|e| {
                    tracing::warn!(i, j, error = %e, "Addition table construction aborted");
                })?;
                entries[i * dimension + j] = Some(exponent);
                entries[j * dimension + i] = Some(exponent);
            }
        }

        tracing::debug!(dimension, "Addition table built");
        Ok(Self { dimension, entries })
    }

    /// Number of rows (and columns), i.e. `field_size - 1`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// `Some(entry)` if both indices are in range.
    pub fn get(&self, i: usize, j: usize) -> Option<Option<usize>> {
        if i < self.dimension && j < self.dimension {
            Some(self.entries[i * self.dimension + j])
        } else {
            None
        }
    }

    /// Row `i`, or `None` if `i` is out of range.
    pub fn row(&self, i: usize) -> Option<&[Option<usize>]> {
        if i < self.dimension {
            Some(&self.entries[i * self.dimension..(i + 1) * self.dimension])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        // chunks_exact panics on a zero chunk size
        self.entries.chunks_exact(self.dimension.max(1))
    }
}

impl Index<(usize, usize)> for AdditionTable {
    type Output = Option<usize>;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            i < self.dimension && j < self.dimension,
            "exponent pair ({i}, {j}) out of range for dimension {}",
            self.dimension
        );
        &self.entries[i * self.dimension + j]
    }
}

#[cfg(test)]
fn gf8() -> AdditionTable {
    let exponents = ExponentTable::build(3, 8, crate::Polynomial::from_bits(0b1011)).unwrap();
    AdditionTable::build(&exponents, 3).unwrap()
}

#[test]
fn test_gf8_table() {
    let table = gf8();
    assert_eq!(table.dimension(), 7);
    assert_eq!(table[(0, 1)], Some(3));
    assert_eq!(table[(1, 2)], Some(4));
    assert_eq!(table[(0, 3)], Some(1));
    assert_eq!(table[(5, 6)], Some(1));
    assert_eq!(table[(0, 6)], Some(2));
    for i in 0..7 {
        assert_eq!(table[(i, i)], None);
    }
}

#[test]
fn test_get_out_of_range() {
    let table = gf8();
    assert_eq!(table.get(0, 1), Some(Some(3)));
    assert_eq!(table.get(2, 2), Some(None));
    assert_eq!(table.get(7, 0), None);
    assert_eq!(table.get(0, 7), None);
}

#[test]
#[should_panic]
fn test_index_out_of_range() {
    let table = gf8();
    // Would alias entry (1, 0) with unchecked flat indexing
    let _entry = table[(0, 7)];
}

#[test]
fn test_rows() {
    let table = gf8();
    let rows: Vec<&[Option<usize>]> = table.rows().collect();
    assert_eq!(rows.len(), 7);
    assert_eq!(Some(rows[1]), table.row(1));
    assert_eq!(table.row(7), None);
    assert_eq!(rows[0], &[None, Some(3), Some(6), Some(1), Some(5), Some(4), Some(2)]);
}

#[test]
fn test_non_primitive_fails() {
    let exponents = ExponentTable::build(3, 8, crate::Polynomial::from_bits(0b1111)).unwrap();
    assert_eq!(
        AdditionTable::build(&exponents, 3),
        Err(Error::PolynomialNotFound {
            polynomial: crate::Polynomial::from_bits(0b011)
        })
    );
}
