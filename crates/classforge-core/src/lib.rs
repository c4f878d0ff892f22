//! Classforge Core - schema model, configuration, and class derivation.
//!
//! This crate turns an introspected database schema into class descriptors: plain
//! value records describing the fields, decorators, base class, members and imports
//! of every class the generator should emit. Rendering descriptors into source text
//! lives in `classforge-emit`.
//!
//! ```
//! use classforge_core::{derive_classes, FieldDef, GeneratorConfig, ModelDef, Schema};
//!
//! let schema = Schema::new().with_model(
//!     ModelDef::new("User").with_field(FieldDef::scalar("id", "Int").id()),
//! );
//! let classes = derive_classes(&schema, &GeneratorConfig::new()).unwrap();
//! assert_eq!(classes[0].name, "User");
//! ```

pub mod config;
pub mod derive;
pub mod descriptor;
pub mod error;
pub mod schema;

pub use config::{ClassMetadata, ClassProfile, GeneratorConfig, DEFAULT_CLIENT_IMPORT_PATH};
pub use derive::{ClassPlanner, DeriveContext, SchemaWalker};
pub use descriptor::{
    ClassDescriptor, Decoration, DecoratorArg, DecoratorOption, FieldDescriptor, ImportEntry,
    ImportRecord, Projection,
};
pub use error::{DeriveError, DeriveResult};
pub use schema::{
    DefaultValue, EnumDef, EnumValue, FieldDef, FieldKind, ModelDef, ScalarValue, Schema,
};

/// Derive every class the configuration implies for a schema.
pub fn derive_classes(schema: &Schema, config: &GeneratorConfig) -> DeriveResult<Vec<ClassDescriptor>> {
    let ctx = DeriveContext::new(schema, config);
    SchemaWalker::new(&ctx).walk()
}
