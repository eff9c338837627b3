//! Map Rust values onto elements.
//!
//! A type describes itself with a [`Schema`]: which fields exist, whether
//! each becomes an attribute or a child element, under which name, in which
//! order and through which [`Transformer`]. [`Tree::map`](crate::Tree::map)
//! walks a value along its schema and builds the element.
mod engine;
mod schema;
mod value;

pub use schema::{Field, Role, Schema, SchemaBuilder, Suffix, Transformer};
pub use value::{FieldValue, Scalar};

/// A value that can be mapped onto an element.
///
/// ```rust
/// use std::sync::OnceLock;
/// use xmlmap::{Field, FieldValue, Mappable, Schema, Tree};
///
/// struct Course {
///     code: String,
///     title: String,
/// }
///
/// impl Mappable for Course {
///     fn schema(&self) -> &'static Schema {
///         static SCHEMA: OnceLock<Schema> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::builder_for::<Course>()
///                 .field(Field::attribute("code"))
///                 .field(Field::element("title"))
///                 .build()
///         })
///     }
///
///     fn field(&self, id: &str) -> FieldValue<'_> {
///         match id {
///             "code" => (&self.code).into(),
///             "title" => (&self.title).into(),
///             _ => FieldValue::Absent,
///         }
///     }
/// }
///
/// let course = Course { code: "M4310".into(), title: "Advanced Programming".into() };
/// let mut tree = Tree::new();
/// let node = tree.map(&course)?;
/// assert_eq!(
///     tree.render(node),
///     "<course code=\"M4310\">\n  <title>\n    Advanced Programming\n  </title>\n</course>\n"
/// );
/// # Ok::<(), xmlmap::Error>(())
/// ```
pub trait Mappable {
    /// The schema of this value's type. It should be built once and shared.
    fn schema(&self) -> &'static Schema;

    /// The value of the field with identifier `id`.
    ///
    /// Unknown identifiers and missing values are [`FieldValue::Absent`].
    fn field(&self, id: &str) -> FieldValue<'_>;
}
