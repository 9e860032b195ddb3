//! Render: metadata about one render of a shot.

use serde_json::{Map, Value};

use super::Node;
use crate::codec::Field;
use crate::error::Result;

/// A render record. Nothing here executes a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Render {
    pub name: String,
    pub author: String,
    pub notes: String,
    pub frame_start: i64,
    pub frame_end: i64,
    /// Output resolution as entered, e.g. "1920x1080".
    pub resolution: String,
}

impl Render {
    /// Create an empty render with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Inclusive number of frames, 0 for an inverted range.
    pub fn frame_count(&self) -> i64 {
        super::shot::inclusive_frame_count(self.frame_start, self.frame_end)
    }
}

impl Node for Render {
    const OBJECT_TYPE: &'static str = "Render";

    fn encode_fields(&self, doc: &mut Map<String, Value>) {
        doc.insert("name".into(), Value::from(self.name.as_str()));
        doc.insert("author".into(), Value::from(self.author.as_str()));
        doc.insert("notes".into(), Value::from(self.notes.as_str()));
        doc.insert("frameStart".into(), Value::from(self.frame_start));
        doc.insert("frameEnd".into(), Value::from(self.frame_end));
        doc.insert("resolution".into(), Value::from(self.resolution.as_str()));
    }

    fn merge_field(&mut self, field: &Field<'_>) -> Result<()> {
        match field.key() {
            "name" => self.name = field.as_string()?,
            "author" => self.author = field.as_string()?,
            "notes" => self.notes = field.as_string()?,
            "frameStart" => self.frame_start = field.as_integer()?,
            "frameEnd" => self.frame_end = field.as_integer()?,
            "resolution" => self.resolution = field.as_string()?,
            _ => {}
        }
        Ok(())
    }
}
