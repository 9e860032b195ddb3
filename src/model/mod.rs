//! Project Graph
//!
//! The four node kinds of a RenderBoy project:
//! - Project: root, owns shots
//! - Shot: owns layers and renders
//! - Layer: leaf, object lists for a render pass
//! - Render: leaf, metadata about one render
//!
//! Ownership is strictly top-down. No node knows its parent.

pub mod layer;
pub mod project;
pub mod render;
pub mod shot;

use serde_json::{Map, Value};

use crate::codec::Field;
use crate::error::Result;

pub use layer::Layer;
pub use project::Project;
pub use render::Render;
pub use shot::Shot;

/// A node type that can be written to and rebuilt from a tagged document.
///
/// The type tag is a constant of the type rather than a stored field, so a
/// node can never claim to be something it is not.
pub trait Node: Default + Into<NodeKind> + TryFrom<NodeKind, Error = NodeKind> {
    /// Tag written under `objectType`.
    const OBJECT_TYPE: &'static str;

    /// Append every declared field to `doc`, in declaration order.
    fn encode_fields(&self, doc: &mut Map<String, Value>);

    /// Overwrite the field named by `field.key()` if this type declares it.
    ///
    /// Keys the type does not declare are ignored.
    fn merge_field(&mut self, field: &Field<'_>) -> Result<()>;
}

/// Any node, as produced by the type registry and the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Project(Project),
    Shot(Shot),
    Layer(Layer),
    Render(Render),
}

impl NodeKind {
    /// The tag of the wrapped node.
    pub fn object_type(&self) -> &'static str {
        match self {
            NodeKind::Project(_) => Project::OBJECT_TYPE,
            NodeKind::Shot(_) => Shot::OBJECT_TYPE,
            NodeKind::Layer(_) => Layer::OBJECT_TYPE,
            NodeKind::Render(_) => Render::OBJECT_TYPE,
        }
    }

    pub(crate) fn encode_fields(&self, doc: &mut Map<String, Value>) {
        match self {
            NodeKind::Project(n) => n.encode_fields(doc),
            NodeKind::Shot(n) => n.encode_fields(doc),
            NodeKind::Layer(n) => n.encode_fields(doc),
            NodeKind::Render(n) => n.encode_fields(doc),
        }
    }

    pub(crate) fn merge_field(&mut self, field: &Field<'_>) -> Result<()> {
        match self {
            NodeKind::Project(n) => n.merge_field(field),
            NodeKind::Shot(n) => n.merge_field(field),
            NodeKind::Layer(n) => n.merge_field(field),
            NodeKind::Render(n) => n.merge_field(field),
        }
    }
}

macro_rules! node_kind_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for NodeKind {
                fn from(node: $variant) -> Self {
                    NodeKind::$variant(node)
                }
            }

            impl TryFrom<NodeKind> for $variant {
                type Error = NodeKind;

                fn try_from(node: NodeKind) -> std::result::Result<Self, NodeKind> {
                    match node {
                        NodeKind::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

node_kind_conversions!(Project, Shot, Layer, Render);
