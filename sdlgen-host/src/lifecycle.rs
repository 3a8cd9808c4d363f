//! Schema customisation lifecycle.

use crate::actions::{ObjectTypeConfig, SchemaActions, TypeDefinition};
use crate::config::PluginConfig;
use crate::error::HostError;
use crate::source::ContentTypeSource;
use sdlgen_codegen::scalar::LINK_TYPE_DECLARATION;
use sdlgen_codegen::sdl::Declaration;
use sdlgen_codegen::{
    FieldType, FileField, REFERENCE_TITLE_FIELD, REFERENCE_TITLE_TYPE, Reference, SchemaRun,
    extend_with_default_entry_fields, reference_placeholder,
};
use sdlgen_model::validate_content_type;

/// What one lifecycle run registered, for the later resolution passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Number of content types whose types were registered.
    pub content_types: usize,
    /// Uids of content types skipped because their schema is invalid.
    pub skipped: Vec<String>,
    /// Reference fields across all content types.
    pub references: Vec<Reference>,
    /// File fields across all content types.
    pub file_fields: Vec<FileField>,
    /// Global field definitions and the parents using each.
    pub global_fields: Vec<(String, Vec<String>)>,
}

/// Builds and registers explicit types for every content type.
///
/// Does nothing, and never calls [`SchemaActions::create_types`], unless
/// `enable_schema_generation` is set. Otherwise `create_types` is called
/// exactly once with the link type, every synthesized declaration in
/// emission order, then one `Node` object type per content type.
///
/// A reference placeholder naming a content type built in the same run is
/// merged into that content type's object type, so every type name is
/// registered once.
///
/// # Errors
/// Returns `HostError` if the content types cannot be fetched.
pub async fn create_schema_customization<S, A>(
    source: &S,
    actions: &mut A,
    config: &PluginConfig,
) -> Result<SchemaReport, HostError>
where
    S: ContentTypeSource + ?Sized,
    A: SchemaActions + ?Sized,
{
    let mut report = SchemaReport::default();
    if !config.enable_schema_generation {
        tracing::info!("Schema generation disabled");
        return Ok(report);
    }

    let content_types = source.fetch_content_types().await?;
    tracing::info!("Generating types for {} content types", content_types.len());

    let mut run = SchemaRun::new(&config.type_prefix, config.schema_options());
    let mut declarations = vec![LINK_TYPE_DECLARATION.to_string()];
    let mut objects = Vec::with_capacity(content_types.len());

    for content_type in &content_types {
        if let Err(e) = validate_content_type(content_type) {
            tracing::warn!("Skipping content type '{}': {}", content_type.uid, e);
            report.skipped.push(content_type.uid.clone());
            continue;
        }

        let parent = content_type.type_name(&config.type_prefix);
        let mut built = run.build(&content_type.schema, &parent);
        extend_with_default_entry_fields(&mut built.fields);

        declarations.extend(built.types);
        objects.push(ObjectTypeConfig::node(parent, built.fields));
        report.references.extend(built.references);
        report.file_fields.extend(built.file_fields);
        report.content_types += 1;
    }

    report.global_fields = run
        .registry()
        .global_fields()
        .map(|(name, users)| (name.to_string(), users.to_vec()))
        .collect();

    for object in &mut objects {
        fold_reference_placeholder(&mut declarations, object);
    }

    let mut types: Vec<TypeDefinition> =
        declarations.into_iter().map(TypeDefinition::Sdl).collect();
    types.extend(objects.into_iter().map(|object| actions.build_object_type(object)));
    tracing::debug!("Registering {} type definitions", types.len());
    actions.create_types(types);

    Ok(report)
}

/// Removes the placeholder declared for `object`, if any, and merges it in.
fn fold_reference_placeholder(declarations: &mut Vec<String>, object: &mut ObjectTypeConfig) {
    let placeholder = reference_placeholder(&object.name).render();
    let Some(index) = declarations.iter().position(|d| *d == placeholder) else {
        return;
    };
    declarations.remove(index);
    tracing::debug!("Merging reference placeholder into '{}'", object.name);

    object.infer = true;
    object
        .fields
        .entry(REFERENCE_TITLE_FIELD.to_string())
        .or_insert_with(|| FieldType::Named(REFERENCE_TITLE_TYPE.to_string()));
}
