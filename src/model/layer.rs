//! Layer: one render pass of a shot.

use serde_json::{Map, Value};

use super::Node;
use crate::codec::Field;
use crate::error::Result;

/// A render layer and the object lists that shape it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layer {
    /// Layer name, unique within its shot by convention only.
    pub name: String,

    /// Free-form notes.
    pub notes: String,

    /// Objects left out of this layer.
    pub exclude: Vec<String>,

    /// Objects rendered as holdout mattes.
    pub matte: Vec<String>,

    /// Objects hidden from camera but still casting shadows and reflections.
    pub phantom: Vec<String>,
}

impl Layer {
    /// Create an empty layer with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rename the layer in place. Sibling names are not checked.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }
}

impl Node for Layer {
    const OBJECT_TYPE: &'static str = "Layer";

    fn encode_fields(&self, doc: &mut Map<String, Value>) {
        doc.insert("name".into(), Value::from(self.name.as_str()));
        doc.insert("notes".into(), Value::from(self.notes.as_str()));
        doc.insert("exclude".into(), Value::from(self.exclude.clone()));
        doc.insert("matte".into(), Value::from(self.matte.clone()));
        doc.insert("phantom".into(), Value::from(self.phantom.clone()));
    }

    fn merge_field(&mut self, field: &Field<'_>) -> Result<()> {
        match field.key() {
            "name" => self.name = field.as_string()?,
            "notes" => self.notes = field.as_string()?,
            "exclude" => self.exclude = field.as_strings()?,
            "matte" => self.matte = field.as_strings()?,
            "phantom" => self.phantom = field.as_strings()?,
            _ => {}
        }
        Ok(())
    }
}
