use std::fmt;
use std::str::FromStr;

use yaml_rust2::Yaml;

use crate::error::{Error, Result};
use crate::{complement, intersection, union};

/// The function selector a host passes alongside the two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `-`
    Complement,
    /// `⋂`
    Intersection,
    /// `⋃`
    Union,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Complement => "-",
            Operator::Intersection => "⋂",
            Operator::Union => "⋃",
        }
    }

    pub fn apply(self, left: &Yaml, right: &Yaml) -> Result<Yaml> {
        match self {
            Operator::Complement => complement(left, right),
            Operator::Intersection => intersection(left, right),
            Operator::Union => union(left, right),
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-" => Ok(Operator::Complement),
            "⋂" => Ok(Operator::Intersection),
            "⋃" => Ok(Operator::Union),
            other => Err(Error::Configuration(format!(
                "unsupported function `{}`, expected one of `-`, `⋂`, `⋃`",
                other
            ))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
