use std::sync::LazyLock;

static TERM: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?:(?P<one>1)|x(?:\^(?P<degree>\d+))?)$").expect("polynomial term pattern is valid")
});

/// Parses the text form of a GF(2) polynomial, e.g. `x^3 + x + 1`.
///
/// Terms are `1`, `x` or `x^N` separated by `+`; whitespace is ignored and a repeated term
/// cancels. `0` on its own is the zero polynomial.
pub fn parse_polynomial(text: &str) -> Result<gf2m::Polynomial, crate::Error> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact == "0" {
        return Ok(gf2m::Polynomial::ZERO);
    }

    let mut terms = Vec::new();
    for term in compact.split('+') {
        let captures = TERM
            .captures(term)
            .ok_or_else(|| crate::Error::InvalidTerm(term.to_owned()))?;
        let degree = match captures.name("degree") {
            Some(degree) => degree
                .as_str()
                .parse::<u32>()
                .map_err(|_| crate::Error::InvalidTerm(term.to_owned()))?,
            None if captures.name("one").is_some() => 0,
            None => 1,
        };
        terms.push((degree, 1));
    }

    Ok(gf2m::Polynomial::from_terms(terms)?)
}

pub(crate) fn serialize_polynomial<S>(polynomial: &gf2m::Polynomial, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(polynomial)
}

pub(crate) fn deserialize_polynomial<'de, D>(deserializer: D) -> Result<gf2m::Polynomial, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let string = String::deserialize(deserializer)?;
    parse_polynomial(&string)
        .map_err(|e| serde::de::Error::custom(format!("Invalid polynomial '{string}' - {e}")))
}

#[test]
fn test_parse_polynomial() {
    assert_eq!(parse_polynomial("x^3 + x + 1").unwrap().bits(), 0b1011);
    assert_eq!(parse_polynomial("1+x+x^3").unwrap().bits(), 0b1011);
    assert_eq!(parse_polynomial(" x ^ 8 + x^4 + x^3 + x^2 + 1 ").unwrap().bits(), 0x11D);
    assert_eq!(parse_polynomial("x").unwrap(), gf2m::Polynomial::X);
    assert_eq!(parse_polynomial("x^0").unwrap(), gf2m::Polynomial::ONE);
    assert_eq!(parse_polynomial("0").unwrap(), gf2m::Polynomial::ZERO);
    assert_eq!(parse_polynomial("x^2 + x^2 + 1").unwrap(), gf2m::Polynomial::ONE);
}

#[test]
fn test_parse_polynomial_errors() {
    assert!(matches!(parse_polynomial("x^3 + 2x"), Err(crate::Error::InvalidTerm(t)) if t == "2x"));
    assert!(matches!(parse_polynomial("x^3 +"), Err(crate::Error::InvalidTerm(t)) if t.is_empty()));
    assert!(matches!(parse_polynomial("y^2"), Err(crate::Error::InvalidTerm(t)) if t == "y^2"));
    assert!(matches!(
        parse_polynomial("x^99999999999"),
        Err(crate::Error::InvalidTerm(t)) if t == "x^99999999999"
    ));
    assert!(matches!(
        parse_polynomial("x^200 + 1"),
        Err(crate::Error::Polynomial(gf2m::Error::DegreeOutOfRange { degree: 200 }))
    ));
}

#[test]
fn test_display_parses_back() {
    let polynomial = gf2m::Polynomial::from_bits(0b1000011);
    assert_eq!(parse_polynomial(&polynomial.to_string()).unwrap(), polynomial);
}
