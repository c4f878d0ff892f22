//! Schema bundle - the full introspected data model.

use super::ModelDef;
use crate::error::DeriveResult;
use serde::{Deserialize, Serialize};

/// A single value of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Database-level name, when it differs.
    #[serde(default)]
    pub db_name: Option<String>,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Declared values, in order.
    pub values: Vec<EnumValue>,
}

/// The full schema: models, embedded types and enums in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Model definitions.
    pub models: Vec<ModelDef>,
    /// Enum declarations.
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    /// Embedded (composite) type declarations.
    #[serde(default)]
    pub types: Vec<ModelDef>,
}

/// A full introspection document wrapping the data model.
#[derive(Deserialize)]
struct WrappedDocument {
    datamodel: Schema,
}

/// Key under which a full document carries the data model.
const DATAMODEL_KEY: &str = "datamodel";

impl EnumDef {
    /// Create an enum declaration from value names.
    pub fn new<V: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|v| EnumValue {
                    name: v.into(),
                    db_name: None,
                })
                .collect(),
        }
    }
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model.
    pub fn with_model(mut self, model: ModelDef) -> Self {
        self.models.push(model);
        self
    }

    /// Add an embedded type.
    pub fn with_type(mut self, embedded: ModelDef) -> Self {
        self.types.push(embedded);
        self
    }

    /// Add an enum declaration.
    pub fn with_enum(mut self, declaration: EnumDef) -> Self {
        self.enums.push(declaration);
        self
    }

    /// Get a model by name.
    pub fn get_model(&self, name: &str) -> Option<&ModelDef> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Get an enum declaration by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// List all model names in input order.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    /// Parse a schema from JSON.
    ///
    /// Both the bare data model (`{"models": [...]}`) and a document that
    /// wraps it under a `datamodel` key are accepted.
    ///
    /// The shape is chosen up front so that errors point at the offending value
    /// with its line and column.
    pub fn from_json(json: &str) -> DeriveResult<Self> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        if document.get(DATAMODEL_KEY).is_some() {
            let wrapped: WrappedDocument = serde_json::from_str(json)?;
            Ok(wrapped.datamodel)
        } else {
            Ok(serde_json::from_str(json)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeriveError;
    use crate::schema::FieldDef;

    const BLOG_JSON: &str = r#"{
        "enums": [{ "name": "Role", "values": [{ "name": "USER" }, { "name": "ADMIN" }] }],
        "models": [
            {
                "name": "User",
                "fields": [
                    { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true, "isList": false },
                    { "name": "role", "kind": "enum", "type": "Role", "isRequired": true, "isList": false, "default": "USER" }
                ]
            }
        ],
        "types": []
    }"#;

    #[test]
    fn test_schema_builder() {
        let schema = Schema::new()
            .with_model(ModelDef::new("User").with_field(FieldDef::scalar("id", "Int")))
            .with_model(ModelDef::new("Post").with_field(FieldDef::scalar("id", "Int")))
            .with_enum(EnumDef::new("Role", ["USER", "ADMIN"]));

        assert_eq!(schema.model_names(), vec!["User", "Post"]);
        assert!(schema.get_model("Post").is_some());
        assert!(schema.get_model("NonExistent").is_none());
        assert_eq!(schema.get_enum("Role").map(|e| e.values.len()), Some(2));
    }

    #[test]
    fn test_from_json_bare() {
        let schema = Schema::from_json(BLOG_JSON).unwrap();

        assert_eq!(schema.models.len(), 1);
        assert_eq!(schema.enums.len(), 1);
        assert!(schema.types.is_empty());
        let role = schema.models[0].get_field("role").unwrap();
        assert!(role.is_enum());
    }

    #[test]
    fn test_from_json_wrapped() {
        let wrapped = format!(r#"{{ "datamodel": {} }}"#, BLOG_JSON);
        let schema = Schema::from_json(&wrapped).unwrap();

        assert_eq!(schema.model_names(), vec!["User"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Schema::from_json("{ not json"),
            Err(DeriveError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_reports_bad_value() {
        let wrapped = r#"{ "datamodel": { "models": [
            { "name": "User", "fields": [{ "name": "id", "kind": "scalr", "type": "Int" }] }
        ] } }"#;

        let message = Schema::from_json(wrapped).unwrap_err().to_string();
        assert!(message.contains("scalr"), "{}", message);
        assert!(message.contains("line 2"), "{}", message);

        let bare = r#"{ "models": [{ "name": "User", "fields": [{ "name": "id", "kind": "scalr", "type": "Int" }] }] }"#;
        let message = Schema::from_json(bare).unwrap_err().to_string();
        assert!(message.contains("unknown variant"), "{}", message);
    }
}
