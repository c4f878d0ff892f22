//! Class variant planner.
//!
//! The planner turns one (model, profile) pair into one class descriptor. It decides
//! which fields the variant keeps, how relation, embedded and enum references are
//! captured, and which class-level decorations and members the variant carries.
//! Every switch is applied independently; conflicting profiles are not rejected.

use super::decoration::{enum_registrations, object_type_decoration};
use super::field::{build_field, FieldOptions};
use super::imports::ImportResolver;
use super::DeriveContext;
use crate::config::ClassProfile;
use crate::descriptor::{ClassDescriptor, ImportRecord, Projection, AGGREGATE_ROOT};
use crate::error::{DeriveError, DeriveResult};
use crate::schema::{FieldDef, FieldKind, ModelDef};
use tracing::debug;

/// Plans class variants for models under a derivation context.
#[derive(Debug, Clone, Copy)]
pub struct ClassPlanner<'a> {
    ctx: &'a DeriveContext<'a>,
}

impl<'a> ClassPlanner<'a> {
    /// Create a planner for the given context.
    pub fn new(ctx: &'a DeriveContext<'a>) -> Self {
        Self { ctx }
    }

    /// Plan one class variant of `model` under `profile`.
    pub fn plan(&self, model: &ModelDef, profile: &ClassProfile) -> DeriveResult<ClassDescriptor> {
        check_model(model)?;

        let postfix = profile.postfix();
        let name = format!("{}{}", model.name, postfix);

        let relation_types = if profile.extract_relation_fields == Some(false) {
            Vec::new()
        } else {
            related_classes(model, profile)
        };

        let embedded_types = unique(
            model
                .fields
                .iter()
                .filter(|f| f.is_embedded() && !model.is_self_reference(f))
                .map(|f| f.type_name.clone()),
        );

        let enum_types = if profile.extract_relation_fields == Some(true) {
            Vec::new()
        } else {
            unique(
                model
                    .fields
                    .iter()
                    .filter(|f| f.is_enum())
                    .map(|f| f.type_name.clone()),
            )
        };

        let skip_decorators = profile.create_aggregate_root || profile.enable_deep_relations;
        let field_options = FieldOptions::new(&model.name).skip_decorators(skip_decorators);
        let fields: Vec<_> = model
            .fields
            .iter()
            .filter(|f| match profile.extract_relation_fields {
                Some(true) => f.is_relation(),
                Some(false) => !f.is_relation(),
                None => true,
            })
            .map(|f| {
                let resolved = deep_typed(f, profile);
                build_field(self.ctx, &resolved, &field_options)
            })
            .collect();

        let mut decorators = Vec::new();
        let mut extra = None;
        if profile.use_graphql
            && self.ctx.config.is_graphql_model(&model.name)
            && !profile.create_aggregate_root
        {
            decorators.push(object_type_decoration());
            extra = enum_registrations(&enum_types);
        }

        let (extends, projection) = if profile.create_aggregate_root {
            let projection = profile.add_to_object_method_to_aggregate_root.then(|| Projection {
                target: profile
                    .metadata
                    .as_ref()
                    .map(|m| m.sibling_class.clone())
                    .unwrap_or_else(|| name.clone()),
                fields: fields.iter().map(|f| f.name.clone()).collect(),
            });
            (Some(AGGREGATE_ROOT.to_string()), projection)
        } else {
            (None, None)
        };

        let model_name_getter = profile.add_model_name_getter.then(|| model.name.clone());

        let class = ClassDescriptor {
            name,
            model: model.name.clone(),
            fields,
            decorators,
            extends,
            extra,
            relation_types,
            embedded_types,
            enum_types,
            metadata: profile.metadata.clone(),
            projection,
            model_name_getter,
            imports: ImportRecord::new(),
        };
        let imports = ImportResolver::new(self.ctx.config).resolve(&class);

        debug!(
            class = %class.name,
            model = %class.model,
            fields = class.fields.len(),
            relations = class.relation_types.len(),
            imports = imports.len(),
            "planned class variant"
        );

        Ok(ClassDescriptor { imports, ..class })
    }
}

/// Fail on models the engine cannot derive from.
fn check_model(model: &ModelDef) -> DeriveResult<()> {
    if model.fields.is_empty() {
        return Err(DeriveError::EmptyModel {
            model: model.name.clone(),
        });
    }
    if let Some(position) = model.fields.iter().position(|f| f.name.is_empty()) {
        return Err(DeriveError::UnnamedField {
            model: model.name.clone(),
            position,
        });
    }
    Ok(())
}

/// Related classes a variant references.
///
/// Self relations are left out of plain variants, where the class would import
/// itself; relation-separated and aggregate variants keep them.
fn related_classes(model: &ModelDef, profile: &ClassProfile) -> Vec<String> {
    let keep_self = profile.separate_relation_fields || profile.import_self_relations;
    let suffix = if profile.enable_deep_relations {
        profile.postfix()
    } else {
        ""
    };
    unique(
        model
            .relation_fields()
            .filter(|f| keep_self || !model.is_self_reference(f))
            .map(|f| format!("{}{}", f.type_name, suffix)),
    )
}

/// The field as seen by a deep-relation variant: object types carry the postfix.
fn deep_typed(field: &FieldDef, profile: &ClassProfile) -> FieldDef {
    let mut resolved = field.clone();
    if profile.enable_deep_relations && field.kind == FieldKind::Object {
        resolved.type_name.push_str(profile.postfix());
    }
    resolved
}

/// Deduplicate, keeping first-seen order.
fn unique(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
