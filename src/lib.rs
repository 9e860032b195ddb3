//! RenderBoy - shot, layer and render bookkeeping for visual production
//!
//! A project is a tree: Project → Shots → Layers and Renders. The tree can
//! be built from a directory of shot folders, saved to a JSON project file
//! and loaded back with every node's type intact.
//!
//! # Architecture
//!
//! - `model`: the four node types and their find/add/remove operations
//! - `registry`: `objectType` tag → constructor table
//! - `codec`: tagged encode and registry-driven decode
//! - `store`: directory scan, load and atomic save
//! - `cli`: command-line front end over the above

pub mod cli;
pub mod codec;
pub mod error;
pub mod model;
pub mod registry;
pub mod store;

pub use codec::{Decoder, OBJECT_TYPE_KEY};
pub use error::{RenderboyError, Result};
pub use model::{Layer, Node, NodeKind, Project, Render, Shot};
pub use registry::TypeRegistry;
pub use store::{load_project_from_file, new_project_from_directory, save_project_to_file};
