//! Integration tests for class derivation over a blog schema.

use classforge_core::derive::decoration::{
    API_PROPERTY, API_PROPERTY_OPTIONAL, FIELD, GRAPHQL_MODULE, OBJECT_TYPE, SWAGGER_MODULE,
};
use classforge_core::derive::relation_placeholder;
use classforge_core::{
    derive_classes, ClassDescriptor, DecoratorArg, FieldDef, GeneratorConfig, ModelDef, Schema,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const BLOG: &str = include_str!("fixtures/blog.json");

fn blog() -> Schema {
    Schema::from_json(BLOG).unwrap()
}

fn find<'a>(classes: &'a [ClassDescriptor], name: &str) -> &'a ClassDescriptor {
    classes
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("class {} not derived", name))
}

fn import_lines(class: &ClassDescriptor) -> Vec<(String, Vec<String>)> {
    class
        .imports
        .entries()
        .iter()
        .map(|e| (e.from.clone(), e.items.clone()))
        .collect()
}

#[test]
fn test_fixture_loads() {
    let schema = blog();

    assert_eq!(schema.model_names(), vec!["User", "Post", "Comment"]);
    assert_eq!(schema.types.len(), 1);
    assert!(schema.get_enum("Role").is_some());
}

#[test]
fn test_plain_classes() {
    let classes = derive_classes(&blog(), &GeneratorConfig::new()).unwrap();
    let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["User", "Post", "Comment", "Address"]);

    let user = find(&classes, "User");
    let types: Vec<(&str, &str)> = user
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.type_name.as_str()))
        .collect();
    assert_eq!(
        types,
        vec![
            ("id", "number"),
            ("email", "string"),
            ("name", "string"),
            ("role", "Role"),
            ("posts", "Post[]"),
            ("address", "Address"),
        ]
    );
    assert_eq!(user.get_field("id").unwrap().default, None);
    assert_eq!(user.get_field("role").unwrap().default.as_deref(), Some("Role.USER"));
    assert!(user.get_field("name").unwrap().nullable);

    assert_eq!(
        import_lines(user),
        vec![
            ("@prisma/client".to_string(), vec!["Role".to_string()]),
            (relation_placeholder("Post"), vec!["Post".to_string()]),
            ("./address".to_string(), vec!["Address".to_string()]),
        ]
    );
}

#[test]
fn test_falsy_defaults_are_kept() {
    let classes = derive_classes(&blog(), &GeneratorConfig::new()).unwrap();
    let post = find(&classes, "Post");

    assert_eq!(post.get_field("published").unwrap().default.as_deref(), Some("false"));
    assert_eq!(post.get_field("views").unwrap().default.as_deref(), Some("BigInt(0)"));
    assert_eq!(post.get_field("views").unwrap().type_name, "BigInt");
    assert_eq!(post.get_field("status").unwrap().default.as_deref(), Some("Status.DRAFT"));
}

#[test]
fn test_decorated_post() {
    let config = GeneratorConfig::new().with_swagger(true).with_graphql(true);
    let classes = derive_classes(&blog(), &config).unwrap();
    let post = find(&classes, "Post");

    assert!(post.has_decorator(OBJECT_TYPE));
    assert_eq!(
        post.extra.as_deref(),
        Some("registerEnumType(Status, {\n\tname: \"Status\"\n})")
    );

    let metadata = post.get_field("metadata").unwrap();
    assert_eq!(
        metadata.decorator(FIELD).unwrap().args[0],
        DecoratorArg::forward("GraphQLJSON")
    );
    assert!(metadata.has_decorator(API_PROPERTY_OPTIONAL));

    let comments = post.get_field("comments").unwrap();
    let doc = comments.decorator(API_PROPERTY).unwrap();
    assert_eq!(doc.args[0].option("type"), Some(&DecoratorArg::forward("Comment")));
    assert_eq!(doc.args[0].option("isArray"), Some(&DecoratorArg::literal("true")));

    assert_eq!(
        import_lines(post),
        vec![
            (
                GRAPHQL_MODULE.to_string(),
                vec![
                    "ID".to_string(),
                    "Int".to_string(),
                    "registerEnumType".to_string(),
                    OBJECT_TYPE.to_string(),
                    FIELD.to_string(),
                ]
            ),
            ("graphql-type-json".to_string(), vec!["GraphQLJSON".to_string()]),
            (
                SWAGGER_MODULE.to_string(),
                vec![API_PROPERTY.to_string(), API_PROPERTY_OPTIONAL.to_string()]
            ),
            ("@prisma/client".to_string(), vec!["Status".to_string()]),
            (relation_placeholder("User"), vec!["User".to_string()]),
            (relation_placeholder("Comment"), vec!["Comment".to_string()]),
        ]
    );
}

#[test]
fn test_graphql_allowlist() {
    let config = GeneratorConfig::new()
        .with_graphql(true)
        .with_models_for_graphql(["User"]);
    let classes = derive_classes(&blog(), &config).unwrap();

    let post = find(&classes, "Post");
    assert!(!post.has_decorator(OBJECT_TYPE));
    assert!(post.fields.iter().all(|f| !f.has_decorator(FIELD)));

    let user = find(&classes, "User");
    assert!(user.has_decorator(OBJECT_TYPE));
    assert!(user.fields.iter().all(|f| f.has_decorator(FIELD)));
}

#[test]
fn test_self_relation_handling() {
    let classes = derive_classes(&blog(), &GeneratorConfig::new()).unwrap();
    assert_eq!(find(&classes, "Comment").relation_types, vec!["Post".to_string()]);

    let config = GeneratorConfig::new().with_separate_relation_fields(true);
    let classes = derive_classes(&blog(), &config).unwrap();
    let relations = find(&classes, "CommentRelations");
    assert_eq!(relations.field_names(), vec!["post", "parent", "replies"]);
    assert_eq!(
        relations.relation_types,
        vec!["Post".to_string(), "Comment".to_string()]
    );
    assert!(find(&classes, "Comment").relation_types.is_empty());
}

#[test]
fn test_aggregate_root_family() {
    let config = GeneratorConfig::new()
        .with_swagger(true)
        .with_aggregate_root(true)
        .with_to_object_method(true)
        .with_model_name_getter(true);
    let classes = derive_classes(&blog(), &config).unwrap();

    let root = find(&classes, "UserAggregateRoot");
    let projection = root.projection.as_ref().unwrap();
    assert_eq!(projection.target, "User");
    assert_eq!(projection.fields, vec!["id", "email", "name", "role", "address"]);
    assert_eq!(root.model_name_getter.as_deref(), Some("User"));
    assert!(root.fields.iter().all(|f| f.decorators.is_empty()));
    assert_eq!(root.imports.entries()[0].from, "@nestjs/cqrs");

    let relations = find(&classes, "CommentRelationsAggregateRoot");
    assert_eq!(relations.projection.as_ref().unwrap().target, "CommentRelations");
    assert!(relations.relation_types.contains(&"Comment".to_string()));

    let combined = find(&classes, "PostWithRelationsAggregateRoot");
    assert_eq!(combined.fields.len(), 9);
    assert_eq!(combined.projection.as_ref().unwrap().target, "PostWithRelations");
}

#[test]
fn test_deep_relations() {
    let config = GeneratorConfig::new().with_deep_relations(true);
    let classes = derive_classes(&blog(), &config).unwrap();
    let post = find(&classes, "PostWithDeepRelations");

    assert_eq!(post.get_field("author").unwrap().type_name, "UserWithDeepRelations");
    assert_eq!(
        post.get_field("comments").unwrap().type_name,
        "CommentWithDeepRelations[]"
    );
    assert_eq!(
        post.relation_types,
        vec![
            "UserWithDeepRelations".to_string(),
            "CommentWithDeepRelations".to_string()
        ]
    );
}

#[test]
fn test_custom_client_import_path() {
    let config = GeneratorConfig::new().with_client_import_path("../prisma/client");
    let classes = derive_classes(&blog(), &config).unwrap();

    assert!(find(&classes, "User").imports.contains("Role", "../prisma/client"));
}

#[test]
fn test_deterministic_output() {
    let config = GeneratorConfig::new()
        .with_swagger(true)
        .with_graphql(true)
        .with_separate_relation_fields(true)
        .with_aggregate_root(true)
        .with_to_object_method(true)
        .with_deep_relations(true);

    let first = derive_classes(&blog(), &config).unwrap();
    let second = derive_classes(&blog(), &config).unwrap();
    assert_eq!(first, second);
}

fn field_strategy() -> impl Strategy<Value = (u8, String, bool, bool)> {
    (
        0u8..4,
        prop::sample::select(vec!["Int", "String", "DateTime", "Json", "Geometry"])
            .prop_map(str::to_string),
        any::<bool>(),
        any::<bool>(),
    )
}

fn model_strategy() -> impl Strategy<Value = ModelDef> {
    prop::collection::vec(field_strategy(), 1..12).prop_map(|specs| {
        let fields = specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, scalar, is_list, is_required))| {
                let name = format!("field{}", i);
                let mut field = match kind {
                    0 => FieldDef::scalar(name, scalar),
                    1 => FieldDef::enumeration(name, "Role"),
                    2 => FieldDef::relation(name, "Model", "SelfLink"),
                    _ => FieldDef::relation(name, "Other", "OtherLink"),
                };
                field.is_list = is_list;
                field.is_required = is_required;
                field
            });
        ModelDef::new("Model").with_fields(fields)
    })
}

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    prop::collection::vec(any::<bool>(), 7).prop_map(|flags| {
        GeneratorConfig::new()
            .with_swagger(flags[0])
            .with_graphql(flags[1])
            .with_separate_relation_fields(flags[2])
            .with_aggregate_root(flags[3])
            .with_to_object_method(flags[4])
            .with_deep_relations(flags[5])
            .with_model_name_getter(flags[6])
    })
}

proptest! {
    #[test]
    fn prop_field_names_unique(model in model_strategy(), config in config_strategy()) {
        let schema = Schema::new().with_model(model);
        for class in derive_classes(&schema, &config).unwrap() {
            let mut names = class.field_names();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn prop_optional_fields_are_nullable(model in model_strategy(), config in config_strategy()) {
        let schema = Schema::new().with_model(model.clone());
        for class in derive_classes(&schema, &config).unwrap() {
            for field in &class.fields {
                let source = model.get_field(&field.name).unwrap();
                prop_assert_eq!(field.nullable, !source.is_required);
            }
        }
    }

    #[test]
    fn prop_lists_wrapped_once(model in model_strategy(), config in config_strategy()) {
        let schema = Schema::new().with_model(model.clone());
        for class in derive_classes(&schema, &config).unwrap() {
            for field in &class.fields {
                let source = model.get_field(&field.name).unwrap();
                prop_assert_eq!(field.type_name.ends_with("[]"), source.is_list);
                prop_assert!(!field.type_name.ends_with("[][]"));
            }
        }
    }

    #[test]
    fn prop_derivation_is_deterministic(model in model_strategy(), config in config_strategy()) {
        let schema = Schema::new().with_model(model);
        let first = derive_classes(&schema, &config).unwrap();
        let second = derive_classes(&schema, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
