use std::fmt;
use std::io::Write;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    String(String),
    Int(i64),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    Bool(bool),
}

// JSON has no literal for non-finite numbers; spell them as strings rather than `null`.
fn serialize_float<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if x.is_nan() {
        serializer.serialize_str("NaN")
    } else if x.is_infinite() {
        serializer.serialize_str(if x.is_sign_positive() { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

pub fn print_value(
    value: &Value,
    format: OutputFormat,
    mut stdout: impl Write,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(&mut stdout, "{}", value),
        OutputFormat::Json => {
            serde_json::to_writer(&mut stdout, value)?;
            writeln!(&mut stdout)
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::string(Value::String("àäæ\tbbb".into()), "àäæ\tbbb\n")]
    #[case::empty_string(Value::String(String::new()), "\n")]
    #[case::int(Value::Int(-42), "-42\n")]
    #[case::float(Value::Float(11111111.22222222), "11111111.22222222\n")]
    #[case::whole_float(Value::Float(1.0), "1\n")]
    #[case::bool(Value::Bool(false), "false\n")]
    fn test_print_value_plain(#[case] value: Value, #[case] expected: &str) {
        let mut out = Vec::new();
        print_value(&value, OutputFormat::Plain, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[rstest]
    #[case::string(Value::String("a \"b\"".into()), r#"{"type":"string","value":"a \"b\""}"#)]
    #[case::int(Value::Int(42), r#"{"type":"int","value":42}"#)]
    #[case::float(Value::Float(1.5), r#"{"type":"float","value":1.5}"#)]
    #[case::infinity(Value::Float(f64::INFINITY), r#"{"type":"float","value":"inf"}"#)]
    #[case::negative_infinity(
        Value::Float(f64::NEG_INFINITY),
        r#"{"type":"float","value":"-inf"}"#
    )]
    #[case::nan(Value::Float(f64::NAN), r#"{"type":"float","value":"NaN"}"#)]
    #[case::bool(Value::Bool(true), r#"{"type":"bool","value":true}"#)]
    fn test_print_value_json(#[case] value: Value, #[case] expected: &str) {
        let mut out = Vec::new();
        print_value(&value, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected));
    }
}
