//! Project: the root of the graph.

use log::warn;
use serde_json::{Map, Value};

use super::{Node, Shot};
use crate::codec::{encode_all, Field};
use crate::error::Result;

/// A project. Owns every shot, and through them every layer and render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Project name.
    pub name: String,

    /// Free-form notes.
    pub notes: String,

    /// Shots, sorted by name after a load.
    pub shots: Vec<Shot>,
}

impl Project {
    /// Create an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Find the first shot named `name`.
    pub fn find_shot(&self, name: &str) -> Option<&Shot> {
        let found = self.shots.iter().find(|shot| shot.name == name);
        if found.is_none() {
            warn!("Shot '{}' not found", name);
        }
        found
    }

    /// Find the first shot named `name` for editing.
    pub fn find_shot_mut(&mut self, name: &str) -> Option<&mut Shot> {
        let found = self.shots.iter_mut().find(|shot| shot.name == name);
        if found.is_none() {
            warn!("Shot '{}' not found", name);
        }
        found
    }

    /// Append an empty shot and return it. Duplicate names are allowed;
    /// lookups return the first.
    pub fn add_shot(&mut self, name: impl Into<String>) -> &mut Shot {
        let index = self.shots.len();
        self.shots.push(Shot::new(name));
        &mut self.shots[index]
    }

    /// Remove the first shot named `name`. Returns whether one was removed.
    pub fn remove_shot(&mut self, name: &str) -> bool {
        match self.shots.iter().position(|shot| shot.name == name) {
            Some(index) => {
                self.shots.remove(index);
                true
            }
            None => {
                warn!("Shot '{}' not found", name);
                false
            }
        }
    }

    /// Sort shots by name. Stable, so same-named shots keep their order.
    pub fn sort_shots(&mut self) {
        self.shots.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Shots whose name contains `query`, in current order.
    /// An empty query matches every shot.
    pub fn search_shots(&self, query: &str) -> Vec<&Shot> {
        self.shots
            .iter()
            .filter(|shot| shot.name.contains(query))
            .collect()
    }
}

impl Node for Project {
    const OBJECT_TYPE: &'static str = "Project";

    fn encode_fields(&self, doc: &mut Map<String, Value>) {
        doc.insert("name".into(), Value::from(self.name.as_str()));
        doc.insert("notes".into(), Value::from(self.notes.as_str()));
        doc.insert("shots".into(), encode_all(&self.shots));
    }

    fn merge_field(&mut self, field: &Field<'_>) -> Result<()> {
        match field.key() {
            "name" => self.name = field.as_string()?,
            "notes" => self.notes = field.as_string()?,
            "shots" => self.shots = field.as_nodes()?,
            _ => {}
        }
        Ok(())
    }
}
