use log::debug;
use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

use crate::canonical::{serialize, serialize_attribute, Multiset};
use crate::error::Result;
use crate::shape::{classify, Attribute, Operands};

/// Returns what `desired` holds that has no equivalent, not yet consumed
/// counterpart in `owned`.
///
/// Sequences give a sequence, mappings a mapping, and anything else a
/// sequence of zero or one element. Mapping attributes are matched as whole
/// `(key, value)` pairs; a key whose value differs keeps its full desired
/// value.
pub fn complement(desired: &Yaml, owned: &Yaml) -> Result<Yaml> {
    match classify(desired, owned) {
        Operands::Sequences(desired, owned) => {
            debug!("complement of sequences ({} - {})", desired.len(), owned.len());
            Ok(Yaml::Array(complement_of_sequences(desired, owned)?))
        }
        Operands::Mappings(desired, owned) => {
            debug!("complement of mappings ({} - {})", desired.len(), owned.len());
            Ok(Yaml::Hash(complement_of_attributes(&desired, &owned)?))
        }
        Operands::Scalars(desired, owned) => {
            debug!("complement of scalars");
            Ok(Yaml::Array(complement_of_sequences(desired, owned)?))
        }
    }
}

/// Single left-to-right multiset subtraction.
fn complement_of_sequences(desired: &[Yaml], owned: &[Yaml]) -> Result<Vec<Yaml>> {
    let mut remaining = Multiset::from_values(owned)?;
    let mut result = Vec::new();
    for item in desired {
        if !remaining.take(&serialize(item)?) {
            result.push(item.clone());
        }
    }
    Ok(result)
}

fn complement_of_attributes(desired: &[Attribute], owned: &[Attribute]) -> Result<Hash> {
    let mut remaining = Multiset::from_attributes(owned.iter().copied())?;
    let mut result = Hash::new();
    for &(key, value) in desired {
        if !remaining.take(&serialize_attribute(key, value)?) {
            result.insert(key.clone(), value.clone());
        }
    }
    Ok(result)
}
