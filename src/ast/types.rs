//! Type annotation definitions for the AST.
//!
//! Annotations are purely syntactic: a primitive name or a generic
//! reference such as `Promise<number>`. Nothing checks them against real
//! type rules.

use std::fmt::Display;

use crate::Span;

/// The fixed set of primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Any,
    Number,
    Boolean,
    String,
    Symbol,
    Void,
    Unknown,
    Never,
    Object,
    Promise,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "any" => Primitive::Any,
            "number" => Primitive::Number,
            "boolean" => Primitive::Boolean,
            "string" => Primitive::String,
            "symbol" => Primitive::Symbol,
            "void" => Primitive::Void,
            "unknown" => Primitive::Unknown,
            "never" => Primitive::Never,
            "object" => Primitive::Object,
            "Promise" => Primitive::Promise,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Any => "any",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::String => "string",
            Primitive::Symbol => "symbol",
            Primitive::Void => "void",
            Primitive::Unknown => "unknown",
            Primitive::Never => "never",
            Primitive::Object => "object",
            Primitive::Promise => "Promise",
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveType {
    pub primitive: Primitive,
    pub span: Span,
}

/// `Name<T, ...>`; `type_arguments` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub name: String,
    pub type_arguments: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeAnnotation {
    Primitive(PrimitiveType),
    Generic(GenericType),
}

impl TypeAnnotation {
    pub fn get_span(&self) -> &Span {
        match self {
            TypeAnnotation::Primitive(ty) => &ty.span,
            TypeAnnotation::Generic(ty) => &ty.span,
        }
    }
}

impl Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Primitive(ty) => write!(f, "{}", ty.primitive),
            TypeAnnotation::Generic(ty) => {
                write!(f, "{}<", ty.name)?;
                for (i, argument) in ty.type_arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ">")
            }
        }
    }
}
