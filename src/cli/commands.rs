//! CLI Command Implementations
//!
//! Each editing command loads the project file, applies one change and
//! saves it back. If the named shot or layer does not exist, the file is
//! left untouched.

use std::fmt::Write as _;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::model::Project;
use crate::store::{
    load_project_from_file, new_project_from_directory, save_project_to_file,
    DEFAULT_PROJECT_FILE,
};

/// Scan a shot directory and write a new project file.
pub fn scan(dir: &Path, output: Option<&Path>) -> Result<()> {
    info!("Scanning shots in: {}", dir.display());

    let project = new_project_from_directory(dir)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(DEFAULT_PROJECT_FILE));
    save_project_to_file(&project, &output)?;

    println!(
        "Project created with {} shot(s): {}",
        project.shots.len(),
        output.display()
    );
    Ok(())
}

/// Print the project tree.
pub fn show(file: &Path) -> Result<()> {
    let project = load_project_from_file(file)?;
    print!("{}", render_tree(&project));
    Ok(())
}

/// List shot names, optionally filtered.
pub fn list_shots(file: &Path, query: Option<&str>) -> Result<()> {
    let project = load_project_from_file(file)?;
    for shot in project.search_shots(query.unwrap_or("")) {
        println!("{}", shot.name);
    }
    Ok(())
}

/// Add an empty shot.
pub fn add_shot(file: &Path, name: &str) -> Result<()> {
    edit_project(file, |project| {
        project.add_shot(name);
        println!("Added shot: {}", name);
        true
    })
}

/// Remove a shot.
pub fn remove_shot(file: &Path, name: &str) -> Result<()> {
    edit_project(file, |project| {
        let removed = project.remove_shot(name);
        if removed {
            println!("Removed shot: {}", name);
        }
        removed
    })
}

/// Add an auto-named layer to a shot.
pub fn add_layer(file: &Path, shot: &str) -> Result<()> {
    edit_project(file, |project| match project.find_shot_mut(shot) {
        Some(shot) => {
            let layer = shot.add_layer();
            println!("Added layer: {}", layer.name);
            true
        }
        None => false,
    })
}

/// Remove a layer from a shot.
pub fn remove_layer(file: &Path, shot: &str, layer: &str) -> Result<()> {
    edit_project(file, |project| {
        let removed = project
            .find_shot_mut(shot)
            .is_some_and(|shot| shot.remove_layer(layer));
        if removed {
            println!("Removed layer: {}", layer);
        }
        removed
    })
}

/// Rename a layer.
pub fn rename_layer(file: &Path, shot: &str, layer: &str, new_name: &str) -> Result<()> {
    edit_project(file, |project| {
        match project
            .find_shot_mut(shot)
            .and_then(|shot| shot.find_layer_mut(layer))
        {
            Some(found) => {
                found.rename(new_name);
                println!("Renamed layer: {} -> {}", layer, new_name);
                true
            }
            None => false,
        }
    })
}

fn edit_project(file: &Path, edit: impl FnOnce(&mut Project) -> bool) -> Result<()> {
    let mut project = load_project_from_file(file)?;
    if edit(&mut project) {
        save_project_to_file(&project, file)?;
    } else {
        println!("Nothing changed.");
    }
    Ok(())
}

/// Indented text outline of a project.
pub fn render_tree(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project: {}", project.name);
    if !project.notes.is_empty() {
        let _ = writeln!(out, "  notes: {}", project.notes);
    }

    for shot in &project.shots {
        let _ = writeln!(
            out,
            "  Shot: {} [{}-{}]",
            shot.name, shot.frame_start, shot.frame_end
        );
        for layer in &shot.layers {
            let _ = writeln!(
                out,
                "    Layer: {} (exclude {}, matte {}, phantom {})",
                layer.name,
                layer.exclude.len(),
                layer.matte.len(),
                layer.phantom.len()
            );
        }
        for render in &shot.renders {
            let _ = writeln!(
                out,
                "    Render: {} by {} [{}-{}] {}",
                render.name, render.author, render.frame_start, render.frame_end, render.resolution
            );
        }
    }
    out
}
