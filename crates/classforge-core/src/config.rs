//! Generator configuration and per-pass class profiles.

use crate::error::DeriveResult;
use serde::{Deserialize, Serialize};

/// Default module that enum types are imported from.
pub const DEFAULT_CLIENT_IMPORT_PATH: &str = "@prisma/client";

/// Global generator configuration.
///
/// Every option is independently togglable and defaults to off. No cross-flag
/// validation is performed; conflicting switches are applied independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Attach documentation decorators to fields.
    pub use_swagger: bool,
    /// Attach query-exposure decorators to classes and fields.
    #[serde(rename = "useGraphQL")]
    pub use_graphql: bool,
    /// Restrict query-exposure decorators to these models (empty = all models).
    pub models_for_graphql: Vec<String>,
    /// Generate the aggregate-root class family.
    pub create_aggregate_root: bool,
    /// Add the plain-projection method to aggregate roots.
    pub add_to_object_method_to_aggregate_root: bool,
    /// Add a literal model-name accessor to aggregate roots.
    pub add_model_name_getter: bool,
    /// Split relation and non-relation fields into separate classes.
    pub separate_relation_fields: bool,
    /// Generate the deep-relation class family.
    pub enable_deep_relations: bool,
    /// Emit `= undefined` for nullable fields without a default.
    pub use_undefined_default: bool,
    /// Emit non-null assertions on required fields.
    pub use_non_nullable_assertions: bool,
    /// Keep the optional marker on nullable fields that carry a default.
    pub preserve_default_nullable: bool,
    /// Module enum types are imported from.
    pub client_import_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            use_swagger: false,
            use_graphql: false,
            models_for_graphql: Vec::new(),
            create_aggregate_root: false,
            add_to_object_method_to_aggregate_root: false,
            add_model_name_getter: false,
            separate_relation_fields: false,
            enable_deep_relations: false,
            use_undefined_default: false,
            use_non_nullable_assertions: false,
            preserve_default_nullable: false,
            client_import_path: DEFAULT_CLIENT_IMPORT_PATH.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with every option off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> DeriveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enable or disable documentation decorators.
    pub fn with_swagger(mut self, enabled: bool) -> Self {
        self.use_swagger = enabled;
        self
    }

    /// Enable or disable query-exposure decorators.
    pub fn with_graphql(mut self, enabled: bool) -> Self {
        self.use_graphql = enabled;
        self
    }

    /// Restrict query-exposure decorators to the given models.
    pub fn with_models_for_graphql<S: Into<String>>(
        mut self,
        models: impl IntoIterator<Item = S>,
    ) -> Self {
        self.models_for_graphql = models.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the aggregate-root family.
    pub fn with_aggregate_root(mut self, enabled: bool) -> Self {
        self.create_aggregate_root = enabled;
        self
    }

    /// Enable or disable the projection method on aggregate roots.
    pub fn with_to_object_method(mut self, enabled: bool) -> Self {
        self.add_to_object_method_to_aggregate_root = enabled;
        self
    }

    /// Enable or disable the model-name accessor.
    pub fn with_model_name_getter(mut self, enabled: bool) -> Self {
        self.add_model_name_getter = enabled;
        self
    }

    /// Enable or disable relation separation.
    pub fn with_separate_relation_fields(mut self, enabled: bool) -> Self {
        self.separate_relation_fields = enabled;
        self
    }

    /// Enable or disable the deep-relation family.
    pub fn with_deep_relations(mut self, enabled: bool) -> Self {
        self.enable_deep_relations = enabled;
        self
    }

    /// Enable or disable `= undefined` defaults.
    pub fn with_undefined_default(mut self, enabled: bool) -> Self {
        self.use_undefined_default = enabled;
        self
    }

    /// Enable or disable non-null assertions.
    pub fn with_non_nullable_assertions(mut self, enabled: bool) -> Self {
        self.use_non_nullable_assertions = enabled;
        self
    }

    /// Enable or disable preserving the optional marker next to defaults.
    pub fn with_preserve_default_nullable(mut self, enabled: bool) -> Self {
        self.preserve_default_nullable = enabled;
        self
    }

    /// Set the module enum types are imported from.
    pub fn with_client_import_path(mut self, path: impl Into<String>) -> Self {
        self.client_import_path = path.into();
        self
    }

    /// Check if a model passes the query-exposure allowlist.
    pub fn is_graphql_model(&self, model: &str) -> bool {
        self.models_for_graphql.is_empty() || self.models_for_graphql.iter().any(|m| m == model)
    }
}

/// Metadata attached to a class variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetadata {
    /// Plain-data class the aggregate root projects into.
    pub sibling_class: String,
}

impl ClassMetadata {
    /// Create metadata naming the sibling class.
    pub fn sibling(class: impl Into<String>) -> Self {
        Self {
            sibling_class: class.into(),
        }
    }
}

/// Switches for a single derivation pass over one model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassProfile {
    /// `Some(true)` keeps only relation fields, `Some(false)` drops them, `None` keeps all.
    pub extract_relation_fields: Option<bool>,
    /// Appended to the model name to form the class name.
    pub postfix: Option<String>,
    /// Emit the class-level query-exposure decorator.
    pub use_graphql: bool,
    /// Wrap the class in the aggregate-root base type.
    pub create_aggregate_root: bool,
    /// Add the plain-projection method.
    pub add_to_object_method_to_aggregate_root: bool,
    /// Relation classes are generated separately, so self relations are imported.
    pub separate_relation_fields: bool,
    /// Import self relations even in plain variants.
    pub import_self_relations: bool,
    /// Variant metadata.
    pub metadata: Option<ClassMetadata>,
    /// Add the model-name accessor.
    pub add_model_name_getter: bool,
    /// Deep-type relation fields to their postfixed variants.
    pub enable_deep_relations: bool,
}

impl ClassProfile {
    /// Create a profile with every switch off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name postfix.
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    /// Keep only relation fields.
    pub fn relations_only(mut self) -> Self {
        self.extract_relation_fields = Some(true);
        self
    }

    /// Drop relation fields.
    pub fn without_relations(mut self) -> Self {
        self.extract_relation_fields = Some(false);
        self
    }

    /// Set the class-level query-exposure switch.
    pub fn with_graphql(mut self, enabled: bool) -> Self {
        self.use_graphql = enabled;
        self
    }

    /// Set the aggregate-root switches.
    pub fn with_aggregate_root(mut self, enabled: bool, to_object_method: bool) -> Self {
        self.create_aggregate_root = enabled;
        self.add_to_object_method_to_aggregate_root = to_object_method;
        self
    }

    /// Set the relation-separation switch.
    pub fn with_separate_relation_fields(mut self, enabled: bool) -> Self {
        self.separate_relation_fields = enabled;
        self
    }

    /// Set the self-relation import switch.
    pub fn with_import_self_relations(mut self, enabled: bool) -> Self {
        self.import_self_relations = enabled;
        self
    }

    /// Attach variant metadata.
    pub fn with_metadata(mut self, metadata: ClassMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the model-name accessor switch.
    pub fn with_model_name_getter(mut self, enabled: bool) -> Self {
        self.add_model_name_getter = enabled;
        self
    }

    /// Set the deep-relation switch.
    pub fn with_deep_relations(mut self, enabled: bool) -> Self {
        self.enable_deep_relations = enabled;
        self
    }

    /// The postfix, or an empty string.
    pub fn postfix(&self) -> &str {
        self.postfix.as_deref().unwrap_or("")
    }
}
