//! Field descriptor definitions.
//!
//! This module contains the data structures representing the fields declared
//! by a content type, including nested group, global field and modular block
//! schemas.

use crate::parser::RawField;
use serde::{Deserialize, Serialize};

/// One declared field of a content type schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct FieldDescriptor {
    /// Field identifier, unique among its siblings.
    pub uid: String,
    /// Human readable name.
    pub display_name: Option<String>,
    /// Whether a value must be present.
    pub mandatory: bool,
    /// Whether the field holds a list of values.
    pub multiple: bool,
    /// Kind-specific payload.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Creates a new optional, single-valued field.
    #[must_use]
    pub fn new(uid: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            mandatory: false,
            multiple: false,
            kind,
        }
    }

    /// Creates a scalar field.
    #[must_use]
    pub fn scalar(uid: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(uid, FieldKind::Scalar(kind))
    }

    /// Creates a group field with a nested schema.
    #[must_use]
    pub fn group(uid: impl Into<String>, schema: Vec<FieldDescriptor>) -> Self {
        Self::new(uid, FieldKind::Group { schema })
    }

    /// Creates a global field bound to the named global field definition.
    #[must_use]
    pub fn global_field(
        uid: impl Into<String>,
        reference_to: impl Into<String>,
        schema: Vec<FieldDescriptor>,
    ) -> Self {
        Self::new(
            uid,
            FieldKind::GlobalField {
                reference_to: reference_to.into(),
                schema,
            },
        )
    }

    /// Creates a modular blocks field.
    #[must_use]
    pub fn blocks(uid: impl Into<String>, blocks: Vec<BlockDef>) -> Self {
        Self::new(uid, FieldKind::Blocks { blocks })
    }

    /// Creates a reference field pointing at the given content types.
    #[must_use]
    pub fn reference<I, S>(uid: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            uid,
            FieldKind::Reference {
                reference_to: targets.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Sets the mandatory flag.
    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Sets the multiple flag.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Returns the wire `data_type` tag of this field.
    #[must_use]
    pub fn data_type(&self) -> &str {
        self.kind.data_type()
    }
}

/// Field kind with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive value.
    Scalar(ScalarKind),
    /// Uploaded asset.
    File,
    /// Inline group of fields.
    Group {
        /// Nested fields.
        schema: Vec<FieldDescriptor>,
    },
    /// Reusable field set defined once and embedded in many content types.
    GlobalField {
        /// Name of the global field definition.
        reference_to: String,
        /// Nested fields, repeated verbatim for every user.
        schema: Vec<FieldDescriptor>,
    },
    /// Modular blocks: a list of block variants, each with its own schema.
    Blocks {
        /// Block variants.
        blocks: Vec<BlockDef>,
    },
    /// Pointer to entries of one or more other content types.
    Reference {
        /// Target content type uids, in declaration order.
        reference_to: Vec<String>,
    },
    /// A `data_type` this crate does not recognise.
    Unknown(String),
}

impl FieldKind {
    /// Returns the wire `data_type` tag.
    #[must_use]
    pub fn data_type(&self) -> &str {
        match self {
            Self::Scalar(s) => s.data_type(),
            Self::File => "file",
            Self::Group { .. } => "group",
            Self::GlobalField { .. } => "global_field",
            Self::Blocks { .. } => "blocks",
            Self::Reference { .. } => "reference",
            Self::Unknown(tag) => tag,
        }
    }
}

/// Primitive field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Single or multi line text, rich text, markdown.
    Text,
    /// ISO 8601 date.
    IsoDate,
    /// Numeric value.
    Number,
    /// True/false.
    Boolean,
    /// Arbitrary JSON document.
    Json,
    /// Title plus URL.
    Link,
}

impl ScalarKind {
    /// All scalar kinds, in table order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::IsoDate,
        Self::Number,
        Self::Boolean,
        Self::Json,
        Self::Link,
    ];

    /// Returns the wire `data_type` tag.
    #[must_use]
    pub const fn data_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::IsoDate => "isodate",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Json => "json",
            Self::Link => "link",
        }
    }

    /// Parses a scalar kind from its wire `data_type` tag.
    #[must_use]
    pub fn from_data_type(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(Self::Text),
            "isodate" => Some(Self::IsoDate),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "json" => Some(Self::Json),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// One variant of a modular blocks field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDef {
    /// Block identifier.
    pub uid: String,
    /// Block title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Fields of this block.
    #[serde(default)]
    pub schema: Vec<FieldDescriptor>,
}

impl BlockDef {
    /// Creates a new block definition.
    #[must_use]
    pub fn new(uid: impl Into<String>, schema: Vec<FieldDescriptor>) -> Self {
        Self {
            uid: uid.into(),
            title: None,
            schema,
        }
    }
}
