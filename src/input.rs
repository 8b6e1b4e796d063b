//! Loading operands and rendering results for the command line.

use std::fs;
use std::io::{self, Read};

use log::{info, warn};
use yaml_rust2::{Yaml, YamlEmitter, YamlLoader};

use crate::canonical::serialize;
use crate::error::{Error, Result};

/// Reads the first YAML (or JSON) document of `path`; `-` reads stdin.
/// A file without documents yields an absent value.
pub fn load_document(path: &str) -> Result<Yaml> {
    info!("Reading input file: {}", path);
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|source| Error::Io {
            path: path.to_string(),
            source,
        })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_string(),
            source,
        })?
    };
    parse_document(path, &content)
}

pub fn parse_document(path: &str, content: &str) -> Result<Yaml> {
    let docs = YamlLoader::load_from_str(content).map_err(|source| Error::Parse {
        path: path.to_string(),
        source,
    })?;
    match docs.into_iter().next() {
        Some(doc) => Ok(doc),
        None => {
            warn!("No YAML documents in {}", path);
            Ok(Yaml::BadValue)
        }
    }
}

/// Evaluates a dotted property name such as `payload` or `items.0.name`.
/// Missing properties are absent; an empty name selects the whole document.
pub fn resolve_property<'a>(doc: &'a Yaml, property: &str) -> &'a Yaml {
    if property.is_empty() {
        return doc;
    }
    property.split('.').fold(doc, |value, segment| match value {
        Yaml::Array(_) => match segment.parse::<usize>() {
            Ok(index) => &value[index],
            Err(_) => &value[segment],
        },
        _ => &value[segment],
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

/// Renders a result as YAML or as its canonical JSON text.
pub fn render(value: &Yaml, format: Format) -> Result<String> {
    let mut out_str = match format {
        Format::Json => serialize(value)?,
        Format::Yaml => {
            let mut out_str = String::new();
            {
                let mut emitter = YamlEmitter::new(&mut out_str);
                emitter
                    .dump(value)
                    .map_err(|e| Error::Serialization(format!("{:?}", e)))?;
            }
            out_str.trim_start_matches("---\n").to_string()
        }
    };
    out_str.push('\n');
    Ok(out_str)
}
