//! Canonical serialization, the only equality primitive of the engine.
//!
//! Two values are equal iff their canonical texts are byte-identical. The
//! text is compact JSON:
//!
//! * sequences are written in element order;
//! * mappings are written in their own iteration (insertion) order, so a
//!   nested mapping's equality depends on its attribute order;
//! * mapping keys are stringified like JSON object keys;
//! * integral reals print without a fraction, so `1` and `1.0` are equal;
//! * reals never use an exponent: `1e300` prints all of its digits;
//! * non-finite reals print `null`;
//! * absent values print `null`, except as mapping attributes where they
//!   are omitted.

use std::collections::HashMap;

use yaml_rust2::Yaml;

use crate::error::{Error, Result};

/// Returns the canonical text of `value`.
pub fn serialize(value: &Yaml) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

/// Returns the canonical text of a mapping attribute, `[<key>,<value>]`.
pub fn serialize_attribute(key: &Yaml, value: &Yaml) -> Result<String> {
    let mut out = String::from("[");
    write_string(&mut out, &key_text(key)?);
    out.push(',');
    write_value(&mut out, value)?;
    out.push(']');
    Ok(out)
}

/// Value equality by canonical text.
pub fn equals(a: &Yaml, b: &Yaml) -> Result<bool> {
    Ok(serialize(a)? == serialize(b)?)
}

fn write_value(out: &mut String, value: &Yaml) -> Result<()> {
    match value {
        Yaml::Null | Yaml::BadValue => out.push_str("null"),
        Yaml::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Yaml::Integer(i) => out.push_str(&i.to_string()),
        Yaml::Real(text) => out.push_str(&real_text(text)?),
        Yaml::String(s) => write_string(out, s),
        Yaml::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Yaml::Hash(hash) => {
            out.push('{');
            let mut first = true;
            for (key, item) in hash {
                if item.is_badvalue() {
                    continue;
                }
                if !first {
                    out.push(',');
                }
                first = false;
                write_string(out, &key_text(key)?);
                out.push(':');
                write_value(out, item)?;
            }
            out.push('}');
        }
        Yaml::Alias(id) => {
            return Err(Error::Serialization(format!(
                "unresolved alias #{} has no value",
                id
            )))
        }
    }
    Ok(())
}

fn real_text(text: &str) -> Result<String> {
    let value = Yaml::Real(text.to_string())
        .as_f64()
        .ok_or_else(|| Error::Serialization(format!("malformed real `{}`", text)))?;
    if !value.is_finite() {
        Ok("null".to_string())
    } else if value == 0.0 {
        Ok("0".to_string())
    } else {
        Ok(format!("{}", value))
    }
}

/// Object keys are always strings in the canonical text.
pub(crate) fn key_text(key: &Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(text) => real_text(text),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(Error::Serialization(format!(
            "mapping key {:?} is not a scalar",
            other
        ))),
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Working multiset over canonical texts. Built fresh for every call so the
/// caller's values are never touched.
#[derive(Debug, Default)]
pub struct Multiset {
    counts: HashMap<String, usize>,
}

impl Multiset {
    pub fn from_values<'a, I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Yaml>,
    {
        let mut multiset = Multiset::default();
        for value in values {
            multiset.insert(serialize(value)?);
        }
        Ok(multiset)
    }

    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a Yaml, &'a Yaml)>,
    {
        let mut multiset = Multiset::default();
        for (key, value) in attributes {
            multiset.insert(serialize_attribute(key, value)?);
        }
        Ok(multiset)
    }

    fn insert(&mut self, text: String) {
        *self.counts.entry(text).or_insert(0) += 1;
    }

    /// Consumes one occurrence of `text`. Returns false if none is left.
    pub fn take(&mut self, text: &str) -> bool {
        match self.counts.get_mut(text) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
