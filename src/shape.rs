//! Classifies an operand pair and picks the algorithm variant.

use std::slice;

use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

/// A mapping attribute seen as a `(key, value)` pair.
pub type Attribute<'a> = (&'a Yaml, &'a Yaml);

#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Sequence(&'a [Yaml]),
    Mapping(&'a Hash),
    Scalar(&'a Yaml),
    Absent,
}

pub fn shape_of(value: &Yaml) -> Shape<'_> {
    match value {
        Yaml::Array(items) => Shape::Sequence(items),
        Yaml::Hash(hash) => Shape::Mapping(hash),
        Yaml::BadValue => Shape::Absent,
        other => Shape::Scalar(other),
    }
}

/// The variant an operation runs, with both operands in the form it needs.
#[derive(Debug)]
pub enum Operands<'a> {
    Sequences(&'a [Yaml], &'a [Yaml]),
    Mappings(Vec<Attribute<'a>>, Vec<Attribute<'a>>),
    /// Each side wrapped as a sequence of zero (absent) or one element.
    Scalars(&'a [Yaml], &'a [Yaml]),
}

/// Classifies `a` and `b` once. Mismatched shapes never fail: both whole
/// values are compared as atoms. An absent side takes the empty form of
/// the other side's shape.
pub fn classify<'a>(a: &'a Yaml, b: &'a Yaml) -> Operands<'a> {
    match (shape_of(a), shape_of(b)) {
        (Shape::Sequence(a), Shape::Sequence(b)) => Operands::Sequences(a, b),
        (Shape::Sequence(a), Shape::Absent) => Operands::Sequences(a, &[]),
        (Shape::Absent, Shape::Sequence(b)) => Operands::Sequences(&[], b),
        (Shape::Absent, Shape::Absent) => Operands::Sequences(&[], &[]),
        (Shape::Mapping(a), Shape::Mapping(b)) => Operands::Mappings(attributes(a), attributes(b)),
        (Shape::Mapping(a), Shape::Absent) => Operands::Mappings(attributes(a), Vec::new()),
        (Shape::Absent, Shape::Mapping(b)) => Operands::Mappings(Vec::new(), attributes(b)),
        (Shape::Absent, _) => Operands::Scalars(&[], slice::from_ref(b)),
        (_, Shape::Absent) => Operands::Scalars(slice::from_ref(a), &[]),
        _ => Operands::Scalars(slice::from_ref(a), slice::from_ref(b)),
    }
}

fn attributes(hash: &Hash) -> Vec<Attribute<'_>> {
    hash.iter().collect()
}
