//! File layout, import path resolution, and writing.
//!
//! Every class is placed at `<output>/<kebab(model)>/<kebab(class)>.ts`. Relation
//! imports are registered by the derivation engine against placeholder modules; once
//! every file location is known the placeholders, embedded types and projection
//! targets are resolved to relative paths.

use crate::error::{EmitError, EmitResult};
use crate::render::render_class;
use classforge_core::derive::parse_relation_placeholder;
use classforge_core::{ClassDescriptor, ImportRecord};
use convert_case::{Case, Casing};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

/// Extension of generated files.
pub const FILE_EXTENSION: &str = "ts";

/// One class placed in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The class this file holds.
    pub class: ClassDescriptor,
    /// Folder name, derived from the model name.
    pub folder: String,
    /// File name including the extension.
    pub filename: String,
}

impl SourceFile {
    /// Place a class in the output tree.
    pub fn new(class: ClassDescriptor) -> Self {
        let folder = class.model.to_case(Case::Kebab);
        let filename = format!("{}.{}", class.name.to_case(Case::Kebab), FILE_EXTENSION);
        Self {
            class,
            folder,
            filename,
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.folder).join(&self.filename)
    }
}

/// A file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Absolute (or output-rooted) destination path.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

/// Lays out, renders and writes class files.
#[derive(Debug, Clone)]
pub struct Emitter {
    output: PathBuf,
    dry_run: bool,
}

impl Emitter {
    /// Create an emitter writing under `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            dry_run: false,
        }
    }

    /// Only log the paths that would be written.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Output directory.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Place and render every class, resolving relation imports between them.
    pub fn render(&self, classes: Vec<ClassDescriptor>) -> Vec<RenderedFile> {
        let files: Vec<SourceFile> = classes.into_iter().map(SourceFile::new).collect();
        let locations: BTreeMap<&str, PathBuf> = files
            .iter()
            .map(|f| (f.class.name.as_str(), f.relative_path()))
            .collect();

        files
            .iter()
            .map(|file| {
                let imports = resolve_import_paths(file, &locations);
                RenderedFile {
                    path: self.output.join(file.relative_path()),
                    content: render_class(&file.class, &imports),
                }
            })
            .collect()
    }

    /// Render and write every class. Returns the paths written (or that would be).
    pub fn emit(&self, classes: Vec<ClassDescriptor>) -> EmitResult<Vec<PathBuf>> {
        let rendered = self.render(classes);
        let mut written = Vec::with_capacity(rendered.len());
        for file in rendered {
            self.write(&file)?;
            written.push(file.path);
        }
        info!(
            output = %self.output.display(),
            files = written.len(),
            dry_run = self.dry_run,
            "emitted classes"
        );
        Ok(written)
    }

    fn write(&self, file: &RenderedFile) -> EmitResult<()> {
        if self.dry_run {
            info!(path = %file.path.display(), "dry run, skipping write");
            return Ok(());
        }
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).map_err(|e| EmitError::io(parent, e))?;
        }
        fs::write(&file.path, &file.content).map_err(|e| EmitError::io(&file.path, e))?;
        info!(path = %file.path.display(), bytes = file.content.len(), "wrote file");
        Ok(())
    }
}

/// Resolve a file's imports against the generated file locations.
///
/// Relation placeholders and embedded types are swapped for relative module paths,
/// and an aggregate root's projection target is imported from its sibling file.
/// References to classes that were not generated are kept as they are.
pub fn resolve_import_paths(file: &SourceFile, locations: &BTreeMap<&str, PathBuf>) -> ImportRecord {
    let class = &file.class;
    let from = file.relative_path();
    let mut resolved = ImportRecord::new();

    for entry in class.imports.entries() {
        let placeholder = parse_relation_placeholder(&entry.from);
        for item in &entry.items {
            let module = match placeholder {
                Some(target) => match locations.get(target) {
                    Some(to) => relative_module(&from, to),
                    None => {
                        warn!(
                            class = %class.name,
                            related = %target,
                            "no generated class for relation import"
                        );
                        entry.from.clone()
                    }
                },
                None if class.embedded_types.contains(item) => locations
                    .get(item.as_str())
                    .map(|to| relative_module(&from, to))
                    .unwrap_or_else(|| entry.from.clone()),
                None => entry.from.clone(),
            };
            resolved.register(item, module);
        }
    }

    if let Some(projection) = class.projection.as_ref().filter(|p| p.target != class.name) {
        match locations.get(projection.target.as_str()) {
            Some(to) => resolved.register(&projection.target, relative_module(&from, to)),
            None => warn!(
                class = %class.name,
                sibling = %projection.target,
                "no generated class for projection target"
            ),
        }
    }

    resolved
}

/// Module specifier for `to` as seen from the file at `from`.
///
/// Both paths are relative to the same root. The extension is dropped, separators
/// are forward slashes, and same-or-child directories get a `./` prefix.
pub fn relative_module(from: &Path, to: &Path) -> String {
    let from_dir: Vec<Component<'_>> = from
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    let target = to.with_extension("");
    let to_parts: Vec<Component<'_>> = target.components().collect();

    let common = from_dir
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = std::iter::repeat("..".to_string())
        .take(from_dir.len() - common)
        .collect();
    segments.extend(
        to_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let joined = segments.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}
