//! Shot: a frame range with its layers and renders.

use log::warn;
use serde_json::{Map, Value};

use super::{Layer, Node, Render};
use crate::codec::{encode_all, Field};
use crate::error::Result;

/// Prefix for auto-generated layer names ("Layer 1", "Layer 2", ...).
pub const LAYER_NAME_PREFIX: &str = "Layer ";

/// A shot in the project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shot {
    /// Shot name, unique within the project by convention only.
    pub name: String,

    /// Free-form notes.
    pub notes: String,

    /// Layers in insertion order.
    pub layers: Vec<Layer>,

    /// Renders in insertion order.
    pub renders: Vec<Render>,

    /// First frame of the shot.
    pub frame_start: i64,

    /// Last frame of the shot (inclusive).
    pub frame_end: i64,
}

impl Shot {
    /// Create an empty shot with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a layer named after the current layer count and return it.
    ///
    /// If layers were renamed, the generated name may collide with an
    /// existing one; this is not guarded against.
    pub fn add_layer(&mut self) -> &mut Layer {
        let index = self.layers.len();
        self.layers
            .push(Layer::new(format!("{}{}", LAYER_NAME_PREFIX, index + 1)));
        &mut self.layers[index]
    }

    /// Remove the first layer named `name`. Returns whether one was removed.
    pub fn remove_layer(&mut self, name: &str) -> bool {
        match self.layers.iter().position(|layer| layer.name == name) {
            Some(index) => {
                self.layers.remove(index);
                true
            }
            None => {
                warn!("Layer '{}' not found in shot '{}'", name, self.name);
                false
            }
        }
    }

    /// Find the first layer named `name`.
    pub fn find_layer(&self, name: &str) -> Option<&Layer> {
        let found = self.layers.iter().find(|layer| layer.name == name);
        if found.is_none() {
            warn!("Layer '{}' not found in shot '{}'", name, self.name);
        }
        found
    }

    /// Find the first layer named `name` for editing.
    pub fn find_layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        let shot_name = &self.name;
        let found = self.layers.iter_mut().find(|layer| layer.name == name);
        if found.is_none() {
            warn!("Layer '{}' not found in shot '{}'", name, shot_name);
        }
        found
    }

    /// Append a render record and return it.
    pub fn add_render(&mut self, render: Render) -> &mut Render {
        let index = self.renders.len();
        self.renders.push(render);
        &mut self.renders[index]
    }

    /// Remove the first render named `name`. Returns whether one was removed.
    pub fn remove_render(&mut self, name: &str) -> bool {
        match self.renders.iter().position(|render| render.name == name) {
            Some(index) => {
                self.renders.remove(index);
                true
            }
            None => {
                warn!("Render '{}' not found in shot '{}'", name, self.name);
                false
            }
        }
    }

    /// Find the first render named `name`.
    pub fn find_render(&self, name: &str) -> Option<&Render> {
        let found = self.renders.iter().find(|render| render.name == name);
        if found.is_none() {
            warn!("Render '{}' not found in shot '{}'", name, self.name);
        }
        found
    }

    /// Inclusive number of frames, 0 for an inverted range.
    pub fn frame_count(&self) -> i64 {
        inclusive_frame_count(self.frame_start, self.frame_end)
    }
}

/// Saturates at `i64::MAX` for ranges wider than an `i64` can count.
pub(crate) fn inclusive_frame_count(start: i64, end: i64) -> i64 {
    if end < start {
        0
    } else {
        end.saturating_sub(start).saturating_add(1)
    }
}

impl Node for Shot {
    const OBJECT_TYPE: &'static str = "Shot";

    fn encode_fields(&self, doc: &mut Map<String, Value>) {
        doc.insert("name".into(), Value::from(self.name.as_str()));
        doc.insert("notes".into(), Value::from(self.notes.as_str()));
        doc.insert("layers".into(), encode_all(&self.layers));
        doc.insert("renders".into(), encode_all(&self.renders));
        doc.insert("frameStart".into(), Value::from(self.frame_start));
        doc.insert("frameEnd".into(), Value::from(self.frame_end));
    }

    fn merge_field(&mut self, field: &Field<'_>) -> Result<()> {
        match field.key() {
            "name" => self.name = field.as_string()?,
            "notes" => self.notes = field.as_string()?,
            "layers" => self.layers = field.as_nodes()?,
            "renders" => self.renders = field.as_nodes()?,
            "frameStart" => self.frame_start = field.as_integer()?,
            "frameEnd" => self.frame_end = field.as_integer()?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layer_names(shot: &Shot) -> Vec<&str> {
        shot.layers.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_add_layer_numbers_from_count() {
        let mut shot = Shot::new("sh010");
        shot.add_layer();
        shot.add_layer();
        assert_eq!(layer_names(&shot), vec!["Layer 1", "Layer 2"]);
    }

    #[test]
    fn test_add_layer_returns_appended_layer() {
        let mut shot = Shot::new("sh010");
        shot.add_layer().exclude.push("set".to_string());
        assert_eq!(shot.layers[0].exclude, vec!["set".to_string()]);
    }

    #[test]
    fn test_add_layer_after_removal_can_collide() {
        let mut shot = Shot::new("sh010");
        shot.add_layer();
        shot.add_layer();
        assert!(shot.remove_layer("Layer 1"));

        shot.add_layer();
        assert_eq!(layer_names(&shot), vec!["Layer 2", "Layer 2"]);
    }

    #[test]
    fn test_remove_missing_layer_leaves_shot_unchanged() {
        let mut shot = Shot::new("sh010");
        shot.add_layer();
        shot.add_layer();
        shot.remove_layer("Layer 1");
        let before = shot.clone();

        assert!(!shot.remove_layer("Layer 1"));
        assert_eq!(shot, before);
    }

    #[test]
    fn test_remove_layer_takes_first_match_only() {
        let mut shot = Shot::new("sh010");
        shot.add_layer().notes = "first".to_string();
        shot.add_layer().rename("Layer 1");

        assert!(shot.remove_layer("Layer 1"));
        assert_eq!(shot.layers.len(), 1);
        assert_eq!(shot.layers[0].notes, "");
    }

    #[test]
    fn test_find_layer() {
        let mut shot = Shot::new("sh010");
        shot.add_layer();
        assert!(shot.find_layer("Layer 1").is_some());
        assert!(shot.find_layer("Layer 9").is_none());

        shot.find_layer_mut("Layer 1").unwrap().rename("beauty");
        assert!(shot.find_layer("beauty").is_some());
    }

    #[test]
    fn test_render_operations() {
        let mut shot = Shot::new("sh010");
        let render = shot.add_render(Render::new("v001"));
        render.author = "jdoe".to_string();

        assert_eq!(shot.find_render("v001").unwrap().author, "jdoe");
        assert!(!shot.remove_render("v002"));
        assert!(shot.remove_render("v001"));
        assert!(shot.renders.is_empty());
    }

    #[test]
    fn test_frame_count() {
        let mut shot = Shot::new("sh010");
        shot.frame_start = 1001;
        shot.frame_end = 1100;
        assert_eq!(shot.frame_count(), 100);

        shot.frame_end = 1000;
        assert_eq!(shot.frame_count(), 0);

        shot.frame_start = -1;
        shot.frame_end = i64::MAX;
        assert_eq!(shot.frame_count(), i64::MAX);

        shot.frame_start = i64::MIN;
        shot.frame_end = i64::MIN;
        assert_eq!(shot.frame_count(), 1);
    }
}
