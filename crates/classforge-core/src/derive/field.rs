//! Field descriptor builder.

use super::decoration::{doc_decoration, query_decoration};
use super::primitive::{arrayify, map_primitive};
use super::DeriveContext;
use crate::descriptor::FieldDescriptor;
use crate::schema::{DefaultValue, FieldDef, ScalarValue};

/// Per-field switches supplied by the planner.
#[derive(Debug, Clone, Copy)]
pub struct FieldOptions<'a> {
    /// Name of the model owning the field (checked against the query allowlist).
    pub model_name: &'a str,
    /// Suppress the documentation decorator.
    pub skip_doc_decorator: bool,
    /// Suppress the query-exposure decorator.
    pub skip_query_decorator: bool,
}

impl<'a> FieldOptions<'a> {
    /// Options for a field of `model_name` with every decorator allowed.
    pub fn new(model_name: &'a str) -> Self {
        Self {
            model_name,
            skip_doc_decorator: false,
            skip_query_decorator: false,
        }
    }

    /// Suppress both decorator families.
    pub fn skip_decorators(mut self, skip: bool) -> Self {
        self.skip_doc_decorator = skip;
        self.skip_query_decorator = skip;
        self
    }
}

/// Build the descriptor for one schema field.
pub fn build_field(
    ctx: &DeriveContext<'_>,
    field: &FieldDef,
    options: &FieldOptions<'_>,
) -> FieldDescriptor {
    let config = ctx.config;
    let mut decorators = Vec::new();

    if config.use_swagger && !options.skip_doc_decorator {
        decorators.push(doc_decoration(field));
    }

    if config.use_graphql
        && config.is_graphql_model(options.model_name)
        && !options.skip_query_decorator
    {
        decorators.push(query_decoration(field));
    }

    let base_type = map_primitive(field).unwrap_or(field.type_name.as_str());
    let type_name = if field.is_list {
        arrayify(base_type)
    } else {
        base_type.to_string()
    };

    FieldDescriptor {
        name: field.name.clone(),
        type_name,
        nullable: !field.is_required,
        default: format_default(field),
        decorators,
        use_undefined_default: config.use_undefined_default,
        non_nullable_assertion: config.use_non_nullable_assertions,
        preserve_default_nullable: config.preserve_default_nullable,
    }
}

/// Format a field's default value as a target-language expression.
///
/// Generator-function defaults have no target-side expression and yield `None`.
pub fn format_default(field: &FieldDef) -> Option<String> {
    match field.default.as_ref()? {
        DefaultValue::Scalar(value) => Some(format_scalar_default(field, value)),
        DefaultValue::List(values) => {
            let quote = field.type_name == "String";
            let items: Vec<String> = values
                .iter()
                .map(|v| {
                    if quote {
                        format!("'{}'", v)
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            Some(format!("[{}]", items.join(",")))
        }
        DefaultValue::Function(_) => None,
    }
}

fn format_scalar_default(field: &FieldDef, value: &ScalarValue) -> String {
    if field.is_enum() {
        format!("{}.{}", field.type_name, value)
    } else if field.type_name == "BigInt" {
        format!("BigInt({})", value)
    } else if field.type_name == "String" {
        format!("'{}'", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::derive::decoration::{API_PROPERTY_OPTIONAL, FIELD};
    use crate::schema::Schema;

    fn build(config: &GeneratorConfig, field: &FieldDef) -> FieldDescriptor {
        let schema = Schema::new();
        let ctx = DeriveContext::new(&schema, config);
        build_field(&ctx, field, &FieldOptions::new("User"))
    }

    #[test]
    fn test_primitive_mapping_and_nullability() {
        let config = GeneratorConfig::new();
        let field = build(&config, &FieldDef::scalar("createdAt", "DateTime").optional());

        assert_eq!(field.name, "createdAt");
        assert_eq!(field.type_name, "Date");
        assert!(field.nullable);
        assert!(field.decorators.is_empty());
    }

    #[test]
    fn test_list_wraps_once() {
        let config = GeneratorConfig::new();

        let tags = build(&config, &FieldDef::scalar("tags", "String").list());
        assert_eq!(tags.type_name, "string[]");

        let posts = build(&config, &FieldDef::relation("posts", "Post", "UserPosts").list());
        assert_eq!(posts.type_name, "Post[]");
    }

    #[test]
    fn test_passthrough_types() {
        let config = GeneratorConfig::new();

        assert_eq!(build(&config, &FieldDef::enumeration("role", "Role")).type_name, "Role");
        assert_eq!(build(&config, &FieldDef::scalar("g", "Geometry")).type_name, "Geometry");
        assert_eq!(build(&config, &FieldDef::embedded("a", "Address")).type_name, "Address");
    }

    #[test]
    fn test_default_formatting() {
        let role = FieldDef::enumeration("role", "Role").with_default(DefaultValue::scalar("ADMIN"));
        assert_eq!(format_default(&role).as_deref(), Some("Role.ADMIN"));

        let big = FieldDef::scalar("big", "BigInt").with_default(DefaultValue::scalar(5i64));
        assert_eq!(format_default(&big).as_deref(), Some("BigInt(5)"));

        let text = FieldDef::scalar("text", "String").with_default(DefaultValue::scalar("hi"));
        assert_eq!(format_default(&text).as_deref(), Some("'hi'"));

        let flag = FieldDef::scalar("flag", "Boolean").with_default(DefaultValue::scalar(false));
        assert_eq!(format_default(&flag).as_deref(), Some("false"));

        let plain = FieldDef::scalar("n", "Int");
        assert_eq!(format_default(&plain), None);
    }

    #[test]
    fn test_list_and_function_defaults() {
        let names = FieldDef::scalar("names", "String")
            .list()
            .with_default(DefaultValue::list(["a", "b"]));
        assert_eq!(format_default(&names).as_deref(), Some("['a','b']"));

        let numbers = FieldDef::scalar("numbers", "Int")
            .list()
            .with_default(DefaultValue::list([1i64, 2]));
        assert_eq!(format_default(&numbers).as_deref(), Some("[1,2]"));

        let id = FieldDef::scalar("id", "Int").with_default(DefaultValue::function("autoincrement"));
        assert_eq!(format_default(&id), None);
    }

    #[test]
    fn test_decorator_order_and_gating() {
        let config = GeneratorConfig::new().with_swagger(true).with_graphql(true);
        let field = build(&config, &FieldDef::scalar("bio", "String").optional());

        let names: Vec<&str> = field.decorators.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec![API_PROPERTY_OPTIONAL, FIELD]);

        let restricted = config.clone().with_models_for_graphql(["Post"]);
        let field = build(&restricted, &FieldDef::scalar("bio", "String"));
        assert!(!field.has_decorator(FIELD));
    }

    #[test]
    fn test_skip_overrides() {
        let config = GeneratorConfig::new().with_swagger(true).with_graphql(true);
        let schema = Schema::new();
        let ctx = DeriveContext::new(&schema, &config);
        let options = FieldOptions::new("User").skip_decorators(true);

        let field = build_field(&ctx, &FieldDef::scalar("name", "String"), &options);
        assert!(field.decorators.is_empty());
    }

    #[test]
    fn test_policy_flags_copied() {
        let config = GeneratorConfig::new()
            .with_undefined_default(true)
            .with_non_nullable_assertions(true)
            .with_preserve_default_nullable(true);
        let field = build(&config, &FieldDef::scalar("name", "String"));

        assert!(field.use_undefined_default);
        assert!(field.non_nullable_assertion);
        assert!(field.preserve_default_nullable);
    }
}
