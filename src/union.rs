use std::slice;

use indexmap::IndexMap;
use log::debug;
use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

use crate::canonical::{key_text, serialize};
use crate::error::Result;
use crate::shape::{classify, Attribute, Operands};

/// Returns the multiset union of `left` and `right`.
///
/// Every equivalence class appears `max(left, right)` times, in first-seen
/// order with the left side first. Mappings are merged per key, with keys
/// compared by their canonical text so `1` and `"1"` are one key: two
/// sequence values are unioned element-wise; otherwise the values are
/// unioned as atoms, collapsing to a bare scalar when they agree. A key
/// present on one side only passes its value through.
pub fn union(left: &Yaml, right: &Yaml) -> Result<Yaml> {
    match classify(left, right) {
        Operands::Sequences(left, right) => {
            debug!("union of sequences ({} ⋃ {})", left.len(), right.len());
            Ok(Yaml::Array(union_of_sequences(left, right)?))
        }
        Operands::Mappings(left, right) => {
            debug!("union of mappings ({} ⋃ {})", left.len(), right.len());
            Ok(Yaml::Hash(union_of_attributes(&left, &right)?))
        }
        Operands::Scalars(left, right) => {
            debug!("union of scalars");
            Ok(collapse(union_of_sequences(left, right)?))
        }
    }
}

/// Occurrences of one equivalence class on each side.
struct Tally<'a> {
    value: &'a Yaml,
    left: usize,
    right: usize,
}

fn union_of_sequences(left: &[Yaml], right: &[Yaml]) -> Result<Vec<Yaml>> {
    let mut tallies: IndexMap<String, Tally> = IndexMap::new();
    for item in left {
        tallies
            .entry(serialize(item)?)
            .or_insert(Tally { value: item, left: 0, right: 0 })
            .left += 1;
    }
    for item in right {
        tallies
            .entry(serialize(item)?)
            .or_insert(Tally { value: item, left: 0, right: 0 })
            .right += 1;
    }

    let mut result = Vec::new();
    for tally in tallies.values() {
        let copies = tally.left.max(tally.right);
        result.extend(std::iter::repeat(tally.value).take(copies).cloned());
    }
    Ok(result)
}

/// Attributes indexed by canonical key text, keeping the first original key.
fn keyed<'a>(attributes: &[Attribute<'a>]) -> Result<IndexMap<String, Attribute<'a>>> {
    let mut keyed = IndexMap::new();
    for &(key, value) in attributes {
        keyed.entry(key_text(key)?).or_insert((key, value));
    }
    Ok(keyed)
}

fn union_of_attributes(left: &[Attribute], right: &[Attribute]) -> Result<Hash> {
    let left = keyed(left)?;
    let right = keyed(right)?;

    let mut result = Hash::new();
    for (text, &(key, value)) in &left {
        let merged = match right.get(text) {
            Some(&(_, other)) => merge_values(value, other)?,
            None => value.clone(),
        };
        result.insert(key.clone(), merged);
    }
    for (text, &(key, value)) in &right {
        if !left.contains_key(text) {
            result.insert(key.clone(), value.clone());
        }
    }
    Ok(result)
}

/// Merges the two values one key holds on each side. Once either side holds
/// a sequence the merged value stays a sequence.
fn merge_values(left: &Yaml, right: &Yaml) -> Result<Yaml> {
    match (left, right) {
        (Yaml::Array(left), Yaml::Array(right)) => Ok(Yaml::Array(union_of_sequences(left, right)?)),
        (Yaml::Array(_), _) | (_, Yaml::Array(_)) => Ok(Yaml::Array(union_of_sequences(
            slice::from_ref(left),
            slice::from_ref(right),
        )?)),
        _ => Ok(collapse(union_of_sequences(
            slice::from_ref(left),
            slice::from_ref(right),
        )?)),
    }
}

fn collapse(mut values: Vec<Yaml>) -> Yaml {
    if values.len() == 1 {
        values.swap_remove(0)
    } else {
        Yaml::Array(values)
    }
}
