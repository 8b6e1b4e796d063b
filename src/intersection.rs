use log::debug;
use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

use crate::canonical::{serialize, serialize_attribute, Multiset};
use crate::error::Result;
use crate::shape::{classify, Attribute, Operands};

/// Returns the multiset intersection of `left` and `right`, in `left`'s order.
///
/// A value seen `k` times on the left and `m` times on the right appears
/// `min(k, m)` times. Two equal scalars give that scalar back, unwrapped.
pub fn intersection(left: &Yaml, right: &Yaml) -> Result<Yaml> {
    match classify(left, right) {
        Operands::Sequences(left, right) => {
            debug!("intersection of sequences ({} ⋂ {})", left.len(), right.len());
            Ok(Yaml::Array(intersection_of_sequences(left, right)?))
        }
        Operands::Mappings(left, right) => {
            debug!("intersection of mappings ({} ⋂ {})", left.len(), right.len());
            Ok(Yaml::Hash(intersection_of_attributes(&left, &right)?))
        }
        Operands::Scalars(left, right) => {
            debug!("intersection of scalars");
            let mut common = intersection_of_sequences(left, right)?;
            if common.len() == 1 {
                Ok(common.swap_remove(0))
            } else {
                Ok(Yaml::Array(common))
            }
        }
    }
}

fn intersection_of_sequences(left: &[Yaml], right: &[Yaml]) -> Result<Vec<Yaml>> {
    let mut remaining = Multiset::from_values(right)?;
    let mut result = Vec::new();
    for item in left {
        if remaining.take(&serialize(item)?) {
            result.push(item.clone());
        }
    }
    Ok(result)
}

fn intersection_of_attributes(left: &[Attribute], right: &[Attribute]) -> Result<Hash> {
    let mut remaining = Multiset::from_attributes(right.iter().copied())?;
    let mut result = Hash::new();
    for &(key, value) in left {
        if remaining.take(&serialize_attribute(key, value)?) {
            result.insert(key.clone(), value.clone());
        }
    }
    Ok(result)
}
