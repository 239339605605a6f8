//! Data model: type metadata coming in, member documentation going out.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

// -- Type metadata ------------------------------------------------------------

/// Identity of a type: its fully-qualified name as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Member visibility, rendered as its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Internal,
    #[default]
    Private,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A declared type as it appears on a field, property, return value or parameter.
///
/// `name` is what signatures show; `full_name` is the identity used for linking.
/// In a manifest the bare string `"int"` stands for `{ "name": "int", "full_name": "int" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TypeRefRepr")]
pub struct TypeRef {
    pub name: String,
    pub full_name: TypeId,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: TypeId::new(full_name),
        }
    }

    /// A type whose display name is also its identity (primitives, `void`).
    pub fn simple(name: &str) -> Self {
        Self::new(name, name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRefRepr {
    Bare(String),
    Full {
        name: String,
        #[serde(default)]
        full_name: Option<String>,
    },
}

impl From<TypeRefRepr> for TypeRef {
    fn from(repr: TypeRefRepr) -> Self {
        match repr {
            TypeRefRepr::Bare(name) => TypeRef::simple(&name),
            TypeRefRepr::Full { name, full_name } => {
                let full_name = full_name.unwrap_or_else(|| name.clone());
                TypeRef::new(name, full_name)
            }
        }
    }
}

fn void() -> TypeRef {
    TypeRef::simple("void")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// A property; each accessor is present only if the type declares it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub getter: Option<Visibility>,
    #[serde(default)]
    pub setter: Option<Visibility>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodMeta {
    pub name: String,
    #[serde(default = "void")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<ParamMeta>,
}

/// Structural metadata of one type, in provider enumeration order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeMeta {
    pub name: String,
    pub full_name: TypeId,
    #[serde(default)]
    pub fields: Vec<FieldMeta>,
    #[serde(default)]
    pub properties: Vec<PropertyMeta>,
    #[serde(default)]
    pub methods: Vec<MethodMeta>,
}

// -- Documentation ------------------------------------------------------------

/// One type selected for documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentedType {
    pub id: TypeId,
    /// Short display name, also the page title.
    pub name: String,
    pub source_path: PathBuf,
    /// Markdown path relative to the docs root.
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

impl MemberKind {
    /// Section heading used when rendering a group of members.
    pub fn heading(self) -> &'static str {
        match self {
            MemberKind::Field => "Fields",
            MemberKind::Property => "Properties",
            MemberKind::Method => "Methods",
        }
    }
}

/// A documentable member of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDoc {
    pub kind: MemberKind,
    pub title: String,
    pub signature: String,
    /// Filled by the comment miner; empty if nothing was found.
    pub summary: String,
    pub params: Vec<ParamDoc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDoc {
    pub name: String,
    pub ty: TypeRef,
    pub description: String,
    /// Page of the parameter type, if that type is documented in this run.
    pub link: Option<String>,
}

impl ParamDoc {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: String::new(),
            link: None,
        }
    }
}

/// Everything needed to render one page.
#[derive(Debug, Clone)]
pub struct TypeDoc {
    pub name: String,
    pub members: Vec<MemberDoc>,
}
