//! Classforge Emit - class source rendering and file output.
//!
//! Takes the class descriptors derived by `classforge-core`, lays them out one file
//! per class, resolves relation imports into relative module paths, and writes the
//! rendered sources.
//!
//! ```no_run
//! use classforge_core::{derive_classes, GeneratorConfig, Schema};
//! use classforge_emit::Emitter;
//!
//! let schema = Schema::from_json(r#"{"models": []}"#).unwrap();
//! let classes = derive_classes(&schema, &GeneratorConfig::new()).unwrap();
//! let written = Emitter::new("./generated").emit(classes).unwrap();
//! ```

pub mod error;
pub mod file;
pub mod render;

pub use error::{EmitError, EmitResult};
pub use file::{relative_module, resolve_import_paths, Emitter, RenderedFile, SourceFile};
pub use render::{render_class, render_decoration, render_field, render_imports};
