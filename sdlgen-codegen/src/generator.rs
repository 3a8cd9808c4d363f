//! Recursive type builder.
//!
//! [`Generator`] walks a field list depth first, turning each field into an
//! output type and appending every synthesized declaration, reference and
//! file field to its accumulator. [`SchemaRun`] owns the state shared by all
//! content types built in one run.

use crate::naming::{
    GlobalFieldNaming, assets_type_name, global_field_type_name, object_type_name,
    reference_type_name, union_type_name,
};
use crate::nullability::Nullability;
use crate::options::SchemaOptions;
use crate::output::{BuiltSchema, FieldAccessor, FieldMap, FieldType, FileField, Reference};
use crate::registry::TypeRegistry;
use crate::scalar::scalar_mapping;
use crate::sdl::{Declaration, ObjectDeclaration, UnionDeclaration, render_fields};
use sdlgen_model::{BlockDef, FieldDescriptor, FieldKind, ScalarKind};
use std::collections::HashSet;

/// Body of the generated asset type.
const ASSET_BODY: &str = "url: String";

/// Field declared by every reference target placeholder.
pub const REFERENCE_TITLE_FIELD: &str = "title";

/// Type of [`REFERENCE_TITLE_FIELD`] on a reference target placeholder.
pub const REFERENCE_TITLE_TYPE: &str = "String!";

/// Placeholder declaration for a reference target type.
///
/// A host that also builds the target content type in the same run must
/// fold this into that object type rather than declare both.
#[must_use]
pub fn reference_placeholder(type_name: &str) -> ObjectDeclaration {
    ObjectDeclaration::node(
        type_name,
        format!("{REFERENCE_TITLE_FIELD}: {REFERENCE_TITLE_TYPE}"),
    )
}

/// One type-building run.
///
/// Content types built on the same run share one [`TypeRegistry`], so a
/// declaration is emitted at most once per run and global fields can share
/// a single type across content types.
#[derive(Debug, Clone)]
pub struct SchemaRun {
    prefix: String,
    options: SchemaOptions,
    registry: TypeRegistry,
}

impl SchemaRun {
    /// Creates a run with an empty registry.
    #[must_use]
    pub fn new(prefix: impl Into<String>, options: SchemaOptions) -> Self {
        Self {
            prefix: prefix.into(),
            options,
            registry: TypeRegistry::new(),
        }
    }

    /// Returns the namespace prefix for generated global type names.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the run options.
    #[must_use]
    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    /// Returns the run-scoped registry.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Builds the output types for one field list owned by `parent`.
    pub fn build(&mut self, fields: &[FieldDescriptor], parent: &str) -> BuiltSchema {
        let mut generator = Generator::new(&self.prefix, &self.options, &mut self.registry);
        let fields = generator.walk(fields, parent);
        generator.finish(fields)
    }
}

/// Depth-first builder for one top-level invocation.
pub struct Generator<'a> {
    prefix: &'a str,
    nullability: Nullability,
    global_naming: GlobalFieldNaming,
    registry: &'a mut TypeRegistry,
    types: Vec<String>,
    references: Vec<Reference>,
    file_fields: Vec<FileField>,
}

impl<'a> Generator<'a> {
    /// Creates a generator writing into `registry`.
    #[must_use]
    pub fn new(prefix: &'a str, options: &SchemaOptions, registry: &'a mut TypeRegistry) -> Self {
        Self {
            prefix,
            nullability: Nullability::new(options),
            global_naming: GlobalFieldNaming::from_flag(options.create_separate_global_field_types),
            registry,
            types: Vec::new(),
            references: Vec::new(),
            file_fields: Vec::new(),
        }
    }

    /// Builds output types for `fields`, in order.
    ///
    /// Fields that produce no type (empty nested schemas, empty reference
    /// targets, unknown kinds) are left out of the returned map.
    pub fn walk(&mut self, fields: &[FieldDescriptor], parent: &str) -> FieldMap {
        self.walk_iter(fields.iter(), parent)
    }

    /// Consumes the generator, pairing `fields` with the accumulated output.
    #[must_use]
    pub fn finish(self, fields: FieldMap) -> BuiltSchema {
        BuiltSchema {
            fields,
            types: self.types,
            references: self.references,
            file_fields: self.file_fields,
        }
    }

    fn walk_iter<'f, I>(&mut self, fields: I, parent: &str) -> FieldMap
    where
        I: IntoIterator<Item = &'f FieldDescriptor>,
    {
        let mut out = FieldMap::new();
        for field in fields {
            if let Some(field_type) = self.build_field(field, parent) {
                out.insert(field.uid.clone(), field_type);
            }
        }
        out
    }

    fn build_field(&mut self, field: &FieldDescriptor, parent: &str) -> Option<FieldType> {
        match &field.kind {
            FieldKind::Scalar(kind) => Some(self.scalar_field(field, *kind)),
            FieldKind::File => Some(self.file_field(field, parent)),
            FieldKind::Group { schema } => self.group_field(field, schema, parent),
            FieldKind::GlobalField {
                reference_to,
                schema,
            } => self.global_field(field, reference_to, schema, parent),
            FieldKind::Blocks { blocks } => self.blocks_field(field, blocks, parent),
            FieldKind::Reference { reference_to } => {
                self.reference_field(field, reference_to, parent)
            }
            FieldKind::Unknown(tag) => {
                tracing::debug!("Skipping field '{}' of unknown type '{}'", field.uid, tag);
                None
            }
        }
    }

    fn scalar_field(&self, field: &FieldDescriptor, kind: ScalarKind) -> FieldType {
        let mapping = scalar_mapping(kind);
        let type_name = self.wrap(mapping.type_name, field);
        if mapping.accessor {
            FieldType::Resolved {
                type_name,
                accessor: FieldAccessor::new(&field.uid),
            }
        } else {
            FieldType::Named(type_name)
        }
    }

    fn file_field(&mut self, field: &FieldDescriptor, parent: &str) -> FieldType {
        let type_name = assets_type_name(self.prefix);
        self.file_fields.push(FileField {
            parent: parent.to_string(),
            field: field.clone(),
        });
        self.emit(&ObjectDeclaration::node(&type_name, ASSET_BODY));
        FieldType::Named(self.wrap(&type_name, field))
    }

    fn group_field(
        &mut self,
        field: &FieldDescriptor,
        schema: &[FieldDescriptor],
        parent: &str,
    ) -> Option<FieldType> {
        if schema.is_empty() {
            tracing::debug!("Skipping group '{}' under '{}': empty schema", field.uid, parent);
            return None;
        }

        let type_name = object_type_name(parent, &field.uid);
        let nested = self.walk(schema, &type_name);
        self.emit(&ObjectDeclaration::node(&type_name, render_fields(&nested)));
        Some(FieldType::Named(self.wrap(&type_name, field)))
    }

    fn global_field(
        &mut self,
        field: &FieldDescriptor,
        definition: &str,
        schema: &[FieldDescriptor],
        parent: &str,
    ) -> Option<FieldType> {
        if schema.is_empty() {
            tracing::debug!(
                "Skipping global field '{}' under '{}': empty schema",
                field.uid,
                parent
            );
            return None;
        }

        let type_name = global_field_type_name(parent, &field.uid, definition, self.global_naming);
        let field_type = FieldType::Named(self.wrap(&type_name, field));

        if self.global_naming == GlobalFieldNaming::Shared
            && self.registry.has_global_field(definition)
        {
            self.registry.record_global_field_use(definition, parent);
            return Some(field_type);
        }

        self.registry.record_global_field_use(definition, parent);
        let nested = self.walk(schema, &type_name);
        self.emit(&ObjectDeclaration::node(&type_name, render_fields(&nested)));
        Some(field_type)
    }

    fn blocks_field(
        &mut self,
        field: &FieldDescriptor,
        blocks: &[BlockDef],
        parent: &str,
    ) -> Option<FieldType> {
        if blocks.is_empty() {
            tracing::debug!("Skipping blocks '{}' under '{}': no blocks", field.uid, parent);
            return None;
        }

        let type_name = object_type_name(parent, &field.uid);
        let nested = self.walk_iter(merge_block_schemas(blocks), &type_name);
        self.emit(&ObjectDeclaration::new(&type_name, render_fields(&nested)));
        Some(FieldType::Named(self.wrap(&type_name, field)))
    }

    fn reference_field(
        &mut self,
        field: &FieldDescriptor,
        targets: &[String],
        parent: &str,
    ) -> Option<FieldType> {
        let mut seen = HashSet::new();
        let targets: Vec<&str> = targets
            .iter()
            .map(String::as_str)
            .filter(|target| seen.insert(*target))
            .collect();

        let type_name = match targets.as_slice() {
            [] => {
                tracing::debug!("Skipping reference '{}' under '{}': no targets", field.uid, parent);
                return None;
            }
            [target] => {
                let name = reference_type_name(self.prefix, target);
                self.emit(&reference_placeholder(&name));
                name
            }
            _ => {
                let members: Vec<String> = targets
                    .iter()
                    .map(|target| reference_type_name(self.prefix, target))
                    .collect();
                for member in &members {
                    self.emit(&reference_placeholder(member));
                }
                let name = union_type_name(self.prefix, &targets);
                self.emit(&UnionDeclaration::new(&name, members));
                name
            }
        };

        self.references.push(Reference {
            parent: parent.to_string(),
            uid: field.uid.clone(),
        });

        // References are list valued in the source model whatever the flags say.
        Some(FieldType::Named(self.nullability.wrap(&type_name, true, true)))
    }

    /// Appends a declaration unless one with the same name exists in this run.
    fn emit(&mut self, declaration: &impl Declaration) -> bool {
        if !self.registry.declare(declaration.name()) {
            return false;
        }
        tracing::trace!("Declaring type '{}'", declaration.name());
        self.types.push(declaration.render());
        true
    }

    fn wrap(&self, inner: &str, field: &FieldDescriptor) -> String {
        self.nullability.wrap(inner, field.multiple, field.mandatory)
    }
}

/// Merges the schemas of all block variants, keeping the first field for each
/// uid.
fn merge_block_schemas(blocks: &[BlockDef]) -> Vec<&FieldDescriptor> {
    let mut seen = HashSet::new();
    blocks
        .iter()
        .flat_map(|block| block.schema.iter())
        .filter(|field| seen.insert(field.uid.as_str()))
        .collect()
}
