// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversion of host configuration values into configuration documents.
//!
//! Every recognised host value kind maps onto exactly one document variant.
//! Anything else (byte strings, opaque host objects, non-string mapping keys,
//! NaN/infinite floats, tagged YAML nodes) fails the conversion instead of being
//! coerced.

use serde_json::{Map, Number, Value};

use crate::errors::MarshalError;
use crate::modules::ConfigDocument;

/// Structured configuration value as a scripting host hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    None,
    Bool(bool),
    Int(i64),
    /// Unsigned integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<HostValue>),
    /// Key/value pairs in host iteration order. Keys must be strings.
    Dict(Vec<(HostValue, HostValue)>),
    Bytes(Vec<u8>),
    /// Any other host object, identified by its host type name.
    Opaque(String),
}

impl HostValue {
    pub fn kind(&self) -> &str {
        match self {
            HostValue::None => "none",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::UInt(_) => "uint",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "str",
            HostValue::List(_) => "list",
            HostValue::Dict(_) => "dict",
            HostValue::Bytes(_) => "bytes",
            HostValue::Opaque(type_name) => type_name,
        }
    }

    /// Converts a document back into host form.
    ///
    /// Integers that fit `i64` come back as `Int`, larger ones as `UInt`. Only
    /// numbers that were floats in the document come back as `Float`.
    pub fn from_document(document: &ConfigDocument) -> HostValue {
        match document {
            Value::Null => HostValue::None,
            Value::Bool(b) => HostValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    HostValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    HostValue::UInt(u)
                } else {
                    HostValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => HostValue::Str(s.clone()),
            Value::Array(items) => HostValue::List(items.iter().map(HostValue::from_document).collect()),
            Value::Object(map) => HostValue::Dict(
                map.iter()
                    .map(|(k, v)| (HostValue::Str(k.clone()), HostValue::from_document(v)))
                    .collect(),
            ),
        }
    }

    /// Looks up a string key in a `Dict`.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            HostValue::Dict(entries) => entries.iter().find_map(|(k, v)| match k {
                HostValue::Str(s) if s == key => Some(v),
                _ => None,
            }),
            _ => None,
        }
    }
}

/// A host configuration type the bridge knows how to marshal.
pub trait HostConfig {
    fn to_document(&self) -> Result<ConfigDocument, MarshalError>;
}

impl HostConfig for HostValue {
    fn to_document(&self) -> Result<ConfigDocument, MarshalError> {
        host_to_document(self, "")
    }
}

impl HostConfig for serde_yaml::Value {
    fn to_document(&self) -> Result<ConfigDocument, MarshalError> {
        yaml_to_document(self, "")
    }
}

impl HostConfig for ConfigDocument {
    fn to_document(&self) -> Result<ConfigDocument, MarshalError> {
        Ok(self.clone())
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

fn float_to_document(value: f64, path: &str) -> Result<ConfigDocument, MarshalError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| MarshalError::NonFiniteNumber {
            path: display_path(path),
        })
}

fn host_to_document(value: &HostValue, path: &str) -> Result<ConfigDocument, MarshalError> {
    match value {
        HostValue::None => Ok(Value::Null),
        HostValue::Bool(b) => Ok(Value::Bool(*b)),
        HostValue::Int(i) => Ok(Value::from(*i)),
        HostValue::UInt(u) => Ok(Value::from(*u)),
        HostValue::Float(f) => float_to_document(*f, path),
        HostValue::Str(s) => Ok(Value::String(s.clone())),
        HostValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| host_to_document(item, &format!("{}/{}", path, index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        HostValue::Dict(entries) => {
            let mut map = Map::new();
            for (key, item) in entries {
                let HostValue::Str(key) = key else {
                    return Err(MarshalError::NonStringKey {
                        path: display_path(path),
                    });
                };
                let item = host_to_document(item, &format!("{}/{}", path, key))?;
                map.insert(key.clone(), item);
            }
            Ok(Value::Object(map))
        }
        HostValue::Bytes(_) | HostValue::Opaque(_) => Err(MarshalError::UnsupportedKind {
            path: display_path(path),
            kind: value.kind().to_string(),
        }),
    }
}

fn yaml_to_document(value: &serde_yaml::Value, path: &str) -> Result<ConfigDocument, MarshalError> {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Ok(Value::Null),
        Yaml::Bool(b) => Ok(Value::Bool(*b)),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else {
                float_to_document(n.as_f64().unwrap_or(f64::NAN), path)
            }
        }
        Yaml::String(s) => Ok(Value::String(s.clone())),
        Yaml::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| yaml_to_document(item, &format!("{}/{}", path, index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, item) in mapping {
                let Yaml::String(key) = key else {
                    return Err(MarshalError::NonStringKey {
                        path: display_path(path),
                    });
                };
                let item = yaml_to_document(item, &format!("{}/{}", path, key))?;
                map.insert(key.clone(), item);
            }
            Ok(Value::Object(map))
        }
        Yaml::Tagged(tagged) => Err(MarshalError::UnsupportedKind {
            path: display_path(path),
            kind: format!("tagged {}", tagged.tag),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(entries: Vec<(&str, HostValue)>) -> HostValue {
        HostValue::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (HostValue::Str(k.to_string()), v))
                .collect(),
        )
    }

    #[test]
    fn test_host_value_to_document() {
        let host = dict(vec![
            ("enabled", HostValue::Bool(true)),
            ("retries", HostValue::Int(-3)),
            ("ratio", HostValue::Float(0.25)),
            ("label", HostValue::Str("stage".to_string())),
            ("missing", HostValue::None),
            (
                "stages",
                HostValue::List(vec![
                    dict(vec![("name", HostValue::Str("a".to_string()))]),
                    HostValue::List(vec![HostValue::Int(1), HostValue::Int(2)]),
                ]),
            ),
        ]);

        let document = host.to_document().unwrap();

        assert_eq!(
            document,
            json!({
                "enabled": true,
                "retries": -3,
                "ratio": 0.25,
                "label": "stage",
                "missing": null,
                "stages": [{"name": "a"}, [1, 2]],
            })
        );
    }

    #[test]
    fn test_host_value_survives_document_round_trip() {
        // Documents keep keys sorted, so the host dict is written in key order.
        let host = dict(vec![
            ("big", HostValue::Int(i64::MIN)),
            ("flag", HostValue::Bool(false)),
            ("nested", dict(vec![("list", HostValue::List(vec![HostValue::None]))])),
            ("pi", HostValue::Float(3.5)),
        ]);

        let back = HostValue::from_document(&host.to_document().unwrap());

        assert_eq!(back, host);
    }

    #[test]
    fn test_integers_keep_their_range() {
        struct TestCase {
            name: &'static str,
            value: HostValue,
            document: ConfigDocument,
            back: HostValue,
        }

        let test_cases = vec![
            TestCase {
                name: "largest unsigned",
                value: HostValue::UInt(u64::MAX),
                document: json!(18446744073709551615u64),
                back: HostValue::UInt(u64::MAX),
            },
            TestCase {
                name: "just above signed range",
                value: HostValue::UInt(i64::MAX as u64 + 1),
                document: json!(9223372036854775808u64),
                back: HostValue::UInt(i64::MAX as u64 + 1),
            },
            TestCase {
                name: "unsigned within signed range",
                value: HostValue::UInt(42),
                document: json!(42),
                back: HostValue::Int(42),
            },
            TestCase {
                name: "smallest signed",
                value: HostValue::Int(i64::MIN),
                document: json!(i64::MIN),
                back: HostValue::Int(i64::MIN),
            },
        ];

        for test_case in test_cases {
            let document = test_case.value.to_document().unwrap();
            assert_eq!(document, test_case.document, "Test case '{}'", test_case.name);
            assert_eq!(
                HostValue::from_document(&document),
                test_case.back,
                "Test case '{}'",
                test_case.name
            );
        }

        let yaml: serde_yaml::Value = serde_yaml::from_str("seed: 18446744073709551615").unwrap();
        let host = HostValue::from_document(&yaml.to_document().unwrap());
        assert_eq!(host.get("seed"), Some(&HostValue::UInt(u64::MAX)));
    }

    #[test]
    fn test_rejected_host_values() {
        struct TestCase {
            name: &'static str,
            value: HostValue,
            expected: MarshalError,
        }

        let test_cases = vec![
            TestCase {
                name: "bytes at root",
                value: HostValue::Bytes(vec![1, 2]),
                expected: MarshalError::UnsupportedKind {
                    path: "/".to_string(),
                    kind: "bytes".to_string(),
                },
            },
            TestCase {
                name: "opaque object nested in a list",
                value: dict(vec![(
                    "handlers",
                    HostValue::List(vec![HostValue::Int(1), HostValue::Opaque("function".to_string())]),
                )]),
                expected: MarshalError::UnsupportedKind {
                    path: "/handlers/1".to_string(),
                    kind: "function".to_string(),
                },
            },
            TestCase {
                name: "integer dict key",
                value: dict(vec![(
                    "outer",
                    HostValue::Dict(vec![(HostValue::Int(1), HostValue::None)]),
                )]),
                expected: MarshalError::NonStringKey {
                    path: "/outer".to_string(),
                },
            },
            TestCase {
                name: "nan",
                value: dict(vec![("ratio", HostValue::Float(f64::NAN))]),
                expected: MarshalError::NonFiniteNumber {
                    path: "/ratio".to_string(),
                },
            },
        ];

        for test_case in test_cases {
            let result = test_case.value.to_document();
            assert_eq!(result, Err(test_case.expected), "Test case '{}'", test_case.name);
        }
    }

    #[test]
    fn test_yaml_to_document() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(
            r#"
count: 3
ratio: 1.5
name: source
tags: [a, b]
nested:
  deep: ~
"#,
        )
        .unwrap();

        assert_eq!(
            yaml.to_document().unwrap(),
            json!({
                "count": 3,
                "ratio": 1.5,
                "name": "source",
                "tags": ["a", "b"],
                "nested": {"deep": null},
            })
        );
    }

    #[test]
    fn test_rejected_yaml_values() {
        let tagged: serde_yaml::Value = serde_yaml::from_str("value: !custom 3").unwrap();
        assert!(matches!(
            tagged.to_document(),
            Err(MarshalError::UnsupportedKind { ref path, .. }) if path == "/value"
        ));

        let numeric_key: serde_yaml::Value = serde_yaml::from_str("1: one").unwrap();
        assert_eq!(
            numeric_key.to_document(),
            Err(MarshalError::NonStringKey {
                path: "/".to_string()
            })
        );
    }

    #[test]
    fn test_dict_get() {
        let host = dict(vec![("config_key_1", HostValue::Bool(true))]);
        assert_eq!(host.get("config_key_1"), Some(&HostValue::Bool(true)));
        assert_eq!(host.get("other"), None);
        assert_eq!(HostValue::Int(1).get("x"), None);
    }
}
