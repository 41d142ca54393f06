// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML type graph loader.
//!
//! ```yaml
//! types:
//!   - name: T
//!     attrs:
//!       x: 7                       # scalar shorthand
//!       __enter__: { method: "entered" }
//!   - name: U
//!     bases: [T]
//!     attrs:
//!       x: { int: 9 }
//!       broken: { failing_property: "boom" }
//! ```
//!
//! Types must come after their bases. Base names may also refer to builtins
//! (`object`, `int`, `str`, ...).

use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use typewalk::builtins::builtins;
use typewalk::object::TypeBuilder;
use typewalk::value::Property;
use typewalk::{Error, TypeRef, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub types: Vec<TypeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, serde_yaml::Value>,
}

/// Types built from a graph file, by name.
#[derive(Debug, Default)]
pub struct TypeGraph {
    types: HashMap<String, TypeRef>,
    order: Vec<String>,
}

impl TypeGraph {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("loading {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let file: GraphFile = serde_yaml::from_str(yaml)?;
        let mut graph = Self::default();
        for spec in &file.types {
            graph.add(spec)?;
        }
        log::debug!("[graph] loaded {} types", graph.order.len());
        Ok(graph)
    }

    fn add(&mut self, spec: &TypeSpec) -> anyhow::Result<()> {
        if self.types.contains_key(&spec.name) {
            bail!("type '{}' defined twice", spec.name);
        }

        let mut builder = TypeBuilder::new(spec.name.as_str());
        for base in &spec.bases {
            let base = self
                .resolve(base)
                .with_context(|| format!("bases of '{}'", spec.name))?;
            builder = builder.base(&base);
        }
        for (name, raw) in &spec.attrs {
            let value = attr_value(name, raw)
                .with_context(|| format!("attribute '{}.{}'", spec.name, name))?;
            builder = builder.attr(name.as_str(), value);
        }

        let ty = builder.build()?;
        self.types.insert(spec.name.clone(), ty);
        self.order.push(spec.name.clone());
        Ok(())
    }

    /// Look a type up by name: graph types first, then builtins.
    pub fn resolve(&self, name: &str) -> anyhow::Result<TypeRef> {
        if let Some(ty) = self.types.get(name) {
            return Ok(Arc::clone(ty));
        }
        builtin_type(name).ok_or_else(|| anyhow!("unknown type '{}'", name))
    }

    /// Type names in definition order.
    pub fn names(&self) -> &[String] {
        &self.order
    }
}

fn builtin_type(name: &str) -> Option<TypeRef> {
    let b = builtins();
    let ty = match name {
        "object" => &b.object,
        "type" => &b.type_type,
        "bool" => &b.bool_type,
        "int" => &b.int_type,
        "float" => &b.float_type,
        "str" => &b.str_type,
        _ => return typewalk::builtins::published_type(name),
    };
    Some(Arc::clone(ty))
}

/// Convert an attribute spec into a value stored on the type.
fn attr_value(name: &str, raw: &serde_yaml::Value) -> anyhow::Result<Value> {
    use serde_yaml::Value as Yaml;

    let mapping = match raw {
        Yaml::Mapping(m) => m,
        scalar => return scalar_value(scalar),
    };
    if mapping.len() != 1 {
        bail!("expected exactly one key, got {}", mapping.len());
    }
    let Some((Yaml::String(kind), arg)) = mapping.iter().next() else {
        bail!("attribute kind must be a string");
    };

    let value = match kind.as_str() {
        "int" | "float" | "str" | "bool" => scalar_value(arg)?,
        "none" => Value::None,
        "method" => {
            let text = text_arg(arg)?;
            Value::function(name, move |_| Ok(Value::str(&text)))
        }
        "property" => {
            let text = text_arg(arg)?;
            let fget = Value::function(name, move |_| Ok(Value::str(&text)));
            Value::Property(Arc::new(Property::new(name, fget)))
        }
        "failing_property" => {
            let message = text_arg(arg)?;
            let fget = Value::function(name, move |_| Err(Error::raise("RuntimeError", &message)));
            Value::Property(Arc::new(Property::new(name, fget)))
        }
        "staticmethod" => {
            let text = text_arg(arg)?;
            let func = Value::function(name, move |_| Ok(Value::str(&text)));
            Value::StaticMethod(Arc::new(typewalk::value::StaticMethod::new(func)))
        }
        "classmethod" => {
            let text = text_arg(arg)?;
            let func = Value::function(name, move |args| {
                let owner = args.first().map(Value::to_string).unwrap_or_default();
                Ok(Value::str(format!("{} from {}", text, owner)))
            });
            Value::ClassMethod(Arc::new(typewalk::value::ClassMethod::new(func)))
        }
        other => bail!("unknown attribute kind '{}'", other),
    };
    Ok(value)
}

fn scalar_value(raw: &serde_yaml::Value) -> anyhow::Result<Value> {
    use serde_yaml::Value as Yaml;

    match raw {
        Yaml::Null => Ok(Value::None),
        Yaml::Bool(b) => Ok(Value::Bool(*b)),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| anyhow!("unsupported number {}", n))
            }
        }
        Yaml::String(s) => Ok(Value::str(s)),
        other => bail!("unsupported value {:?}", other),
    }
}

fn text_arg(raw: &serde_yaml::Value) -> anyhow::Result<String> {
    match raw {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Null => Ok(String::new()),
        other => bail!("expected text, got {:?}", other),
    }
}

/// Parse a `--set` value: int, float, `True`/`False`, `None`, else a string.
pub fn parse_scalar(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }
    match text {
        "True" | "true" => Value::Bool(true),
        "False" | "false" => Value::Bool(false),
        "None" => Value::None,
        _ => Value::str(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
types:
  - name: T
    attrs:
      x: 7
      label: { str: "t" }
      __enter__: { method: "entered" }
      broken: { failing_property: "boom" }
  - name: U
    bases: [T]
    attrs:
      x: { int: 9 }
      nothing: { none: null }
      make: { staticmethod: "made" }
      kind: { classmethod: "kind" }
"#;

    #[test]
    fn test_load_sample() {
        let graph = TypeGraph::from_yaml(SAMPLE).unwrap();
        assert_eq!(graph.names(), ["T", "U"]);

        let u = graph.resolve("U").unwrap();
        let order: Vec<&str> = u.search_order().map(|t| t.name()).collect();
        assert_eq!(order, ["U", "T", "object"]);
        assert!(u.attributes().contains("make"));
        assert!(graph.resolve("object").unwrap().is_root());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("graph.yaml");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(SAMPLE.as_bytes()).expect("write");

        let graph = TypeGraph::load(&path).unwrap();
        assert!(graph.resolve("T").is_ok());
    }

    #[test]
    fn test_unknown_base_rejected() {
        let err = TypeGraph::from_yaml("types: [{ name: A, bases: [Missing] }]").unwrap_err();
        assert!(format!("{:#}", err).contains("unknown type 'Missing'"));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = TypeGraph::from_yaml("types: [{ name: A }, { name: A }]").unwrap_err();
        assert!(err.to_string().contains("defined twice"));
    }

    #[test]
    fn test_unknown_attr_kind_rejected() {
        let yaml = "types: [{ name: A, attrs: { x: { lambda: 1 } } }]";
        let err = TypeGraph::from_yaml(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown attribute kind 'lambda'"));
    }

    #[test]
    fn test_builtin_base() {
        let graph = TypeGraph::from_yaml("types: [{ name: MyInt, bases: [int] }]").unwrap();
        let my_int = graph.resolve("MyInt").unwrap();
        let order: Vec<&str> = my_int.search_order().map(|t| t.name()).collect();
        assert_eq!(order, ["MyInt", "int", "object"]);
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar("42"), Value::Int(42));
        assert_eq!(parse_scalar("1.5"), Value::Float(1.5));
        assert_eq!(parse_scalar("True"), Value::Bool(true));
        assert!(parse_scalar("None").is_none());
        assert_eq!(parse_scalar("hello"), Value::str("hello"));
    }
}
