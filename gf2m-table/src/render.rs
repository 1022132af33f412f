use std::fmt;

/// Tab separated dump of a field's addition table, `-1` marking a zero sum.
pub struct AdditionTableDisplay<'a>(pub &'a gf2m::GaloisField);

impl fmt::Display for AdditionTableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.0;
        let n = field.nonzero_elements();

        write!(f, "i\\j\t|")?;
        for j in 0..n {
            write!(f, "{j}\t")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "--------".repeat(field.field_size()))?;

        for i in 0..n {
            write!(f, "{i}\t|")?;
            for j in 0..n {
                write!(f, "{}\t", field.sum_or_sentinel(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[test]
fn test_gf4() {
    let field = gf2m::GaloisField::new(2, gf2m::Polynomial::from_bits(0b111)).unwrap();
    let expected = format!(
        "i\\j\t|0\t1\t2\t\n{}\n0\t|-1\t2\t1\t\n1\t|2\t-1\t0\t\n2\t|1\t0\t-1\t\n",
        "-".repeat(32)
    );
    assert_eq!(AdditionTableDisplay(&field).to_string(), expected);
}

#[test]
fn test_gf8_rows() {
    let field = gf2m::GaloisField::new(3, gf2m::Polynomial::from_bits(0b1011)).unwrap();
    let rendered = AdditionTableDisplay(&field).to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2 + 7);
    assert_eq!(lines[2], "0\t|-1\t3\t6\t1\t5\t4\t2\t");
}
