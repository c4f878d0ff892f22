//! Decoration synthesis.
//!
//! Two independent families are produced: documentation decorators (one per field)
//! and query-exposure decorators (per field and per class). Gating on configuration
//! happens in the callers; the rules here only decide the decorator shape.

use super::primitive::{capitalize_first, map_primitive};
use crate::descriptor::{Decoration, DecoratorArg};
use crate::schema::FieldDef;

/// Module documentation decorators are imported from.
pub const SWAGGER_MODULE: &str = "@nestjs/swagger";
/// Module query-exposure decorators are imported from.
pub const GRAPHQL_MODULE: &str = "@nestjs/graphql";
/// Module the JSON scalar is imported from.
pub const GRAPHQL_JSON_MODULE: &str = "graphql-type-json";

/// Documentation decorator for a required field.
pub const API_PROPERTY: &str = "ApiProperty";
/// Documentation decorator for an optional field.
pub const API_PROPERTY_OPTIONAL: &str = "ApiPropertyOptional";
/// Query-exposure field decorator.
pub const FIELD: &str = "Field";
/// Query-exposure class decorator.
pub const OBJECT_TYPE: &str = "ObjectType";

/// Build the documentation decorator for a field.
///
/// Always yields exactly one decorator carrying one options record.
pub fn doc_decoration(field: &FieldDef) -> Decoration {
    let name = if field.is_required {
        API_PROPERTY
    } else {
        API_PROPERTY_OPTIONAL
    };
    let mut options = Vec::new();

    if field.is_list {
        options.push(("isArray", DecoratorArg::literal("true")));
    }

    if let Some(primitive) = map_primitive(field) {
        options.push(("type", DecoratorArg::literal(capitalize_first(primitive))));
    } else if field.is_relation() {
        options.push(("type", DecoratorArg::forward(&field.type_name)));
    } else if field.is_enum() {
        options.push(("enum", DecoratorArg::literal(&field.type_name)));
        options.push(("enumName", DecoratorArg::quoted(&field.type_name)));
    }

    Decoration::new(name, SWAGGER_MODULE).with_arg(DecoratorArg::options(options))
}

/// Build the query-exposure decorator for a field.
pub fn query_decoration(field: &FieldDef) -> Decoration {
    let mut decoration = Decoration::new(FIELD, GRAPHQL_MODULE);

    if field.is_id {
        return decoration.with_arg(DecoratorArg::forward("ID"));
    }

    let is_json = field.type_name == "Json";
    if is_json {
        decoration = decoration.with_arg(DecoratorArg::forward("GraphQLJSON"));
    }

    if let Some(primitive) = map_primitive(field).filter(|_| !is_json) {
        let mut graphql_type = capitalize_first(primitive);
        if graphql_type == "Number" {
            graphql_type = "Int".to_string();
        }
        decoration = decoration.with_arg(DecoratorArg::forward(list_wrap(field, graphql_type)));
    }

    if field.is_relation() || field.is_enum() {
        decoration = decoration.with_arg(DecoratorArg::forward(list_wrap(
            field,
            field.type_name.clone(),
        )));
    }

    if !field.is_required {
        decoration = decoration.with_arg(DecoratorArg::options([(
            "nullable",
            DecoratorArg::literal("true"),
        )]));
    }

    decoration
}

/// Build the class-level query-exposure decorator.
pub fn object_type_decoration() -> Decoration {
    Decoration::new(OBJECT_TYPE, GRAPHQL_MODULE)
}

/// Build the enum-registration block for the given enum types.
///
/// Returns `None` when there is nothing to register.
pub fn enum_registrations(enum_types: &[String]) -> Option<String> {
    if enum_types.is_empty() {
        return None;
    }
    let statements: Vec<String> = enum_types
        .iter()
        .map(|enum_type| {
            format!(
                "registerEnumType({}, {{\n\tname: \"{}\"\n}})",
                enum_type, enum_type
            )
        })
        .collect();
    Some(statements.join("\n\n"))
}

fn list_wrap(field: &FieldDef, type_name: String) -> String {
    if field.is_list {
        format!("[{}]", type_name)
    } else {
        type_name
    }
}
