//! Schema walker.
//!
//! Expands the global configuration into class profiles and plans every
//! (model, profile) pair in a fixed order. Groups are emitted pass by pass; inside a
//! group, models keep their schema order.

use super::planner::ClassPlanner;
use super::DeriveContext;
use crate::config::{ClassMetadata, ClassProfile};
use crate::descriptor::ClassDescriptor;
use crate::error::DeriveResult;
use crate::schema::ModelDef;
use tracing::info;

/// Postfix of relation-only classes.
pub const RELATIONS_POSTFIX: &str = "Relations";
/// Postfix of combined classes when relations are separated.
pub const WITH_RELATIONS_POSTFIX: &str = "WithRelations";
/// Postfix of aggregate-root classes.
pub const AGGREGATE_ROOT_POSTFIX: &str = "AggregateRoot";
/// Postfix of deep-relation classes.
pub const DEEP_RELATIONS_POSTFIX: &str = "WithDeepRelations";

/// Walks a schema and derives every class variant.
#[derive(Debug, Clone, Copy)]
pub struct SchemaWalker<'a> {
    ctx: &'a DeriveContext<'a>,
}

impl<'a> SchemaWalker<'a> {
    /// Create a walker over a derivation context.
    pub fn new(ctx: &'a DeriveContext<'a>) -> Self {
        Self { ctx }
    }

    /// Derive all classes, in emission order.
    pub fn walk(&self) -> DeriveResult<Vec<ClassDescriptor>> {
        let config = self.ctx.config;
        let schema = self.ctx.schema;
        let mut classes = Vec::new();

        let base = ClassProfile::new()
            .with_graphql(config.use_graphql)
            .with_separate_relation_fields(config.separate_relation_fields);
        let embedded = base.clone().with_aggregate_root(
            config.create_aggregate_root,
            config.add_to_object_method_to_aggregate_root,
        );

        if config.separate_relation_fields {
            let relations = base.clone().with_postfix(RELATIONS_POSTFIX).relations_only();
            self.plan_all(&schema.models, &relations, &mut classes)?;
            self.plan_all(&schema.models, &base.clone().without_relations(), &mut classes)?;
            let combined = base.clone().with_postfix(WITH_RELATIONS_POSTFIX);
            self.plan_all(&schema.models, &combined, &mut classes)?;
            self.plan_all(&schema.types, &embedded.relations_only(), &mut classes)?;
        } else {
            self.plan_all(&schema.models, &base, &mut classes)?;
            self.plan_all(&schema.types, &embedded, &mut classes)?;
        }

        if config.create_aggregate_root {
            let aggregate = |postfix: &str| {
                ClassProfile::new()
                    .with_postfix(format!("{}{}", postfix, AGGREGATE_ROOT_POSTFIX))
                    .with_graphql(config.use_graphql)
                    .with_aggregate_root(true, config.add_to_object_method_to_aggregate_root)
                    .with_import_self_relations(true)
                    .with_model_name_getter(config.add_model_name_getter)
            };

            let plain = aggregate("")
                .with_separate_relation_fields(config.separate_relation_fields)
                .without_relations();
            self.plan_family(&schema.models, &plain, "", &mut classes)?;

            let relations = aggregate(RELATIONS_POSTFIX)
                .with_separate_relation_fields(config.separate_relation_fields)
                .relations_only();
            self.plan_family(&schema.models, &relations, RELATIONS_POSTFIX, &mut classes)?;

            let combined = aggregate(WITH_RELATIONS_POSTFIX);
            self.plan_family(&schema.models, &combined, WITH_RELATIONS_POSTFIX, &mut classes)?;
        }

        if config.enable_deep_relations {
            let deep = ClassProfile::new()
                .with_postfix(DEEP_RELATIONS_POSTFIX)
                .with_deep_relations(true);
            self.plan_all(&schema.models, &deep, &mut classes)?;
        }

        info!(
            models = schema.models.len(),
            types = schema.types.len(),
            classes = classes.len(),
            "derived classes"
        );

        Ok(classes)
    }

    fn plan_all(
        &self,
        models: &[ModelDef],
        profile: &ClassProfile,
        out: &mut Vec<ClassDescriptor>,
    ) -> DeriveResult<()> {
        let planner = ClassPlanner::new(self.ctx);
        for model in models {
            out.push(planner.plan(model, profile)?);
        }
        Ok(())
    }

    /// Plan an aggregate-root group, pointing each class at its sibling variant.
    fn plan_family(
        &self,
        models: &[ModelDef],
        profile: &ClassProfile,
        sibling_postfix: &str,
        out: &mut Vec<ClassDescriptor>,
    ) -> DeriveResult<()> {
        let planner = ClassPlanner::new(self.ctx);
        for model in models {
            let sibling = ClassMetadata::sibling(format!("{}{}", model.name, sibling_postfix));
            out.push(planner.plan(model, &profile.clone().with_metadata(sibling))?);
        }
        Ok(())
    }
}
