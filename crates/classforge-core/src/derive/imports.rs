//! Import resolution for class descriptors.

use super::decoration::{GRAPHQL_JSON_MODULE, GRAPHQL_MODULE};
use crate::config::GeneratorConfig;
use crate::descriptor::{ClassDescriptor, ImportRecord, AGGREGATE_ROOT};

/// Prefix of the placeholder module relation imports are registered against.
pub const RELATION_PLACEHOLDER_PREFIX: &str = "__TEMPORARY_CLASS_PATH__";

/// Module the aggregate-root base type is imported from.
pub const CQRS_MODULE: &str = "@nestjs/cqrs";

/// Placeholder module for a related class; replaced once file locations are known.
pub fn relation_placeholder(class_name: &str) -> String {
    format!("{}{}", RELATION_PLACEHOLDER_PREFIX, class_name)
}

/// Extract the class name from a placeholder module, if it is one.
pub fn parse_relation_placeholder(module: &str) -> Option<&str> {
    module.strip_prefix(RELATION_PLACEHOLDER_PREFIX)
}

/// Module an embedded type is imported from (sibling file, lowercased name).
pub fn embedded_module(type_name: &str) -> String {
    format!("./{}", type_name.to_lowercase())
}

/// Computes the import record of a finished class.
#[derive(Debug, Clone, Copy)]
pub struct ImportResolver<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ImportResolver<'a> {
    /// Create a resolver for the given configuration.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Resolve the imports a class depends on.
    pub fn resolve(&self, class: &ClassDescriptor) -> ImportRecord {
        let mut imports = ImportRecord::new();

        if self.config.use_graphql {
            imports.register("ID", GRAPHQL_MODULE);
            imports.register("Int", GRAPHQL_MODULE);
            imports.register("registerEnumType", GRAPHQL_MODULE);
            imports.register("GraphQLJSON", GRAPHQL_JSON_MODULE);
        }

        if class.is_aggregate_root() {
            imports.register(AGGREGATE_ROOT, CQRS_MODULE);
        }

        let field_decorators = class.fields.iter().flat_map(|f| f.decorators.iter());
        for decoration in class.decorators.iter().chain(field_decorators) {
            imports.register(&decoration.name, &decoration.import_from);
        }

        for enum_type in &class.enum_types {
            imports.register(enum_type, &self.config.client_import_path);
        }

        for relation in &class.relation_types {
            imports.register(relation, relation_placeholder(relation));
        }

        for embedded in &class.embedded_types {
            imports.register(embedded, embedded_module(embedded));
        }

        imports
    }
}
