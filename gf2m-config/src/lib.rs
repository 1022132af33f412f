use std::collections::BTreeMap;
use std::path::Path;

mod serdes;

pub use serdes::parse_polynomial;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid polynomial term '{0}': expected 1, x or x^N")]
    InvalidTerm(String),
    #[error("Invalid polynomial: {0}")]
    Polynomial(#[from] gf2m::Error),
    #[error("Unable to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("No field named '{0}' in the configuration")]
    UnknownField(String),
}

/// Named field definitions, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gf2mConfig {
    pub fields: BTreeMap<String, FieldConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldConfig {
    // m in GF(2^m)
    pub degree: u32,
    // Must be primitive and of degree m; written as e.g. "x^3 + x + 1"
    #[serde(
        serialize_with = "serdes::serialize_polynomial",
        deserialize_with = "serdes::deserialize_polynomial"
    )]
    pub primitive_polynomial: gf2m::Polynomial,
}

impl Gf2mConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_toml_str(std::fs::read_to_string(path)?.as_str())
    }

    pub fn field(&self, name: &str) -> Result<&FieldConfig, Error> {
        self.fields.get(name).ok_or_else(|| Error::UnknownField(name.to_owned()))
    }

    /// Standard primitive polynomials for GF(4) up to GF(256).
    pub fn example() -> Self {
        const STANDARD: [(&str, u32, u128); 7] = [
            ("gf4", 2, 0b111),
            ("gf8", 3, 0b1011),
            ("gf16", 4, 0b10011),
            ("gf32", 5, 0b100101),
            ("gf64", 6, 0b1000011),
            ("gf128", 7, 0b10001001),
            ("gf256", 8, 0x11D),
        ];

        let fields = STANDARD
            .iter()
            .map(|&(name, degree, bits)| {
                let field = FieldConfig {
                    degree,
                    primitive_polynomial: gf2m::Polynomial::from_bits(bits),
                };
                (name.to_owned(), field)
            })
            .collect();
        Self { fields }
    }
}

impl FieldConfig {
    pub fn build(&self) -> Result<gf2m::GaloisField, gf2m::Error> {
        gf2m::GaloisField::new(self.degree, self.primitive_polynomial)
    }
}

#[test]
fn test_from_toml_str() {
    let config = Gf2mConfig::from_toml_str(
        r#"
        [fields.gf8]
        degree = 3
        primitive_polynomial = "x^3 + x + 1"

        [fields.broken]
        degree = 3
        primitive_polynomial = "x^3 + x^2 + x + 1"
        "#,
    )
    .unwrap();

    let gf8 = config.field("gf8").unwrap();
    assert_eq!(gf8.degree, 3);
    assert_eq!(gf8.primitive_polynomial.bits(), 0b1011);
    assert_eq!(gf8.build().unwrap().sum(0, 1), Some(3));

    assert!(matches!(
        config.field("broken").unwrap().build(),
        Err(gf2m::Error::PolynomialNotFound { .. })
    ));
    assert!(matches!(config.field("gf16"), Err(Error::UnknownField(name)) if name == "gf16"));
}

#[test]
fn test_invalid_polynomial_in_toml() {
    let err = Gf2mConfig::from_toml_str(
        r#"
        [fields.gf8]
        degree = 3
        primitive_polynomial = "x^3 + 3x + 1"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
    assert!(err.to_string().contains("3x"));
}

#[test]
fn test_example_round_trip() {
    let example = Gf2mConfig::example();
    let text = toml::to_string(&example).unwrap();
    assert!(text.contains(r#"primitive_polynomial = "x^3 + x + 1""#));
    assert_eq!(Gf2mConfig::from_toml_str(&text).unwrap(), example);
}

#[test]
fn test_example_fields_build() {
    for (name, field) in Gf2mConfig::example().fields {
        let gf = field.build().unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(gf.field_size(), 1 << field.degree);
    }
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        Gf2mConfig::load("/nonexistent/gf2m.toml"),
        Err(Error::Io(_))
    ));
}
