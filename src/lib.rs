//! Build, edit, query and render XML element trees, and map Rust values
//! onto them.
//!
//! All elements live in a [`Tree`] and are addressed by copyable [`Node`]
//! handles. A value that implements [`Mappable`] describes itself with a
//! [`Schema`] and is turned into an element with [`Tree::map`]; the result
//! can then be normalized with an [`AdapterConfig`], edited in bulk, queried
//! by path and rendered as indented XML.
#![forbid(unsafe_code)]

mod access;
mod adapter;
mod creation;
mod entity;
mod error;
pub mod fixed;
mod global;
mod manipulation;
mod mapping;
#[cfg(feature = "proptest")]
pub mod proptest;
mod query;
mod serialize;
mod treedata;
mod valueaccess;
mod xmlvalue;

pub use adapter::AdapterConfig;
pub use entity::{sanitize_attribute, sanitize_text_attribute};
pub use error::{Error, ErrorKind};
pub use mapping::{
    Field, FieldValue, Mappable, Role, Scalar, Schema, SchemaBuilder, Suffix, Transformer,
};
pub use serialize::XML_DECLARATION;
pub use treedata::{Node, Tree};
pub use xmlvalue::{Attributes, Element, TextNode};
