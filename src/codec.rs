//! Polymorphic document codec
//!
//! Encoding writes every node as a JSON object whose first key is the
//! reserved `objectType` tag, followed by the node's declared fields in
//! declaration order. Nested shots, layers and renders are arrays of such
//! objects.
//!
//! Decoding runs the same steps at every depth:
//! 1. read the tag and resolve it through the [`TypeRegistry`]
//! 2. construct a default instance of the resolved type
//! 3. overwrite each declared field present in the document
//! 4. recurse into nested node arrays
//!
//! Unknown keys are ignored and absent keys keep their default, so files
//! written by older or newer builds still load. An unknown tag is an error.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::error::{RenderboyError, Result};
use crate::model::{Node, NodeKind};
use crate::registry::TypeRegistry;

/// Reserved key holding the node type tag.
pub const OBJECT_TYPE_KEY: &str = "objectType";

/// Indentation of saved documents.
pub const INDENT: &[u8] = b"    ";

/// Location of the document root in decode errors.
const ROOT: &str = "$";

/// Encode a node and everything below it.
pub fn encode<T: Node>(node: &T) -> Value {
    let mut doc = Map::new();
    doc.insert(OBJECT_TYPE_KEY.to_string(), Value::from(T::OBJECT_TYPE));
    node.encode_fields(&mut doc);
    Value::Object(doc)
}

/// Encode a node of any kind.
pub fn encode_kind(node: &NodeKind) -> Value {
    let mut doc = Map::new();
    doc.insert(OBJECT_TYPE_KEY.to_string(), Value::from(node.object_type()));
    node.encode_fields(&mut doc);
    Value::Object(doc)
}

/// Encode a sequence of nodes as an array of tagged documents.
pub fn encode_all<T: Node>(nodes: &[T]) -> Value {
    Value::Array(nodes.iter().map(encode).collect())
}

/// Render a document the way it is stored on disk: 4-space indentation and
/// a trailing newline.
pub fn to_pretty_vec(doc: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Parse document text and decode it with `registry`.
pub fn decode_str(text: &str, registry: &TypeRegistry) -> Result<NodeKind> {
    let doc: Value = serde_json::from_str(text)?;
    Decoder::new(registry).decode(&doc)
}

/// Rebuilds typed nodes from documents.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Decode a document into whatever node type its tag names.
    pub fn decode(&self, doc: &Value) -> Result<NodeKind> {
        self.decode_at(doc, ROOT)
    }

    /// Decode a document that must be a `T`.
    pub fn decode_as<T: Node>(&self, doc: &Value) -> Result<T> {
        self.decode_typed_at(doc, ROOT)
    }

    fn decode_at(&self, doc: &Value, at: &str) -> Result<NodeKind> {
        let fields = doc.as_object().ok_or_else(|| RenderboyError::Decode {
            at: at.to_string(),
            reason: format!("expected an object, found {}", kind_of(doc)),
        })?;

        let tag = fields
            .get(OBJECT_TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| RenderboyError::MissingObjectType { at: at.to_string() })?;

        let construct = self.registry.resolve(tag)?;
        let mut node = construct();

        for (key, value) in fields {
            if key == OBJECT_TYPE_KEY {
                continue;
            }
            node.merge_field(&Field {
                key: key.as_str(),
                value,
                at,
                decoder: *self,
            })?;
        }

        log::trace!("Decoded {} at {}", node.object_type(), at);
        Ok(node)
    }

    fn decode_typed_at<T: Node>(&self, doc: &Value, at: &str) -> Result<T> {
        let node = self.decode_at(doc, at)?;
        <T as TryFrom<NodeKind>>::try_from(node).map_err(|other| {
            RenderboyError::UnexpectedObjectType {
                at: at.to_string(),
                expected: T::OBJECT_TYPE,
                found: other.object_type(),
            }
        })
    }
}

/// One key/value pair of a node document, handed to [`Node::merge_field`].
pub struct Field<'a> {
    key: &'a str,
    value: &'a Value,
    at: &'a str,
    decoder: Decoder<'a>,
}

impl<'a> Field<'a> {
    pub fn key(&self) -> &str {
        self.key
    }

    pub fn as_string(&self) -> Result<String> {
        self.value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch("a string"))
    }

    pub fn as_integer(&self) -> Result<i64> {
        self.value
            .as_i64()
            .ok_or_else(|| self.mismatch("an integer"))
    }

    pub fn as_strings(&self) -> Result<Vec<String>> {
        let items = self
            .value
            .as_array()
            .ok_or_else(|| self.mismatch("an array of strings"))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mismatch("an array of strings"))
            })
            .collect()
    }

    /// Decode an array of nested nodes, each through its own tag.
    pub fn as_nodes<T: Node>(&self) -> Result<Vec<T>> {
        let items = self
            .value
            .as_array()
            .ok_or_else(|| self.mismatch("an array of nodes"))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let at = format!("{}.{}[{}]", self.at, self.key, index);
                self.decoder.decode_typed_at(item, &at)
            })
            .collect()
    }

    fn mismatch(&self, expected: &str) -> RenderboyError {
        RenderboyError::Decode {
            at: format!("{}.{}", self.at, self.key),
            reason: format!("expected {}, found {}", expected, kind_of(self.value)),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
