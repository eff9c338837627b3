use std::fmt;
use std::sync::Arc;

use crate::adapter::AdapterConfig;

use super::value::FieldValue;

/// Where a field ends up in the element of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// The field becomes an attribute.
    Attribute,
    /// The field becomes a child element.
    #[default]
    Element,
}

/// Turns a present field value into the string that is placed in the tree.
///
/// Any `fn(&FieldValue) -> String` is a transformer.
pub trait Transformer: Send + Sync {
    /// Transform a value.
    fn transform(&self, value: &FieldValue<'_>) -> String;
}

impl<F> Transformer for F
where
    F: Fn(&FieldValue<'_>) -> String + Send + Sync,
{
    fn transform(&self, value: &FieldValue<'_>) -> String {
        self(value)
    }
}

/// Appends a fixed suffix to the string form of a scalar.
///
/// ```rust
/// use xmlmap::{FieldValue, Suffix, Transformer};
///
/// let percentage = Suffix("%");
/// assert_eq!(percentage.transform(&FieldValue::from(20)), "20%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix(pub &'static str);

impl Transformer for Suffix {
    fn transform(&self, value: &FieldValue<'_>) -> String {
        match value {
            FieldValue::Scalar(scalar) => format!("{}{}", scalar, self.0),
            _ => self.0.to_string(),
        }
    }
}

/// Describes how one field of a value is mapped.
#[derive(Clone)]
pub struct Field {
    pub(crate) id: &'static str,
    pub(crate) role: Role,
    pub(crate) rename: Option<String>,
    pub(crate) exclude: bool,
    pub(crate) transformer: Option<Arc<dyn Transformer>>,
}

impl Field {
    /// A field placed as a child element.
    pub fn element(id: &'static str) -> Self {
        Field {
            id,
            role: Role::Element,
            rename: None,
            exclude: false,
            transformer: None,
        }
    }

    /// A field placed as an attribute.
    pub fn attribute(id: &'static str) -> Self {
        Field {
            role: Role::Attribute,
            ..Field::element(id)
        }
    }

    /// Expose the field under another name.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Leave the field out of the tree altogether.
    pub fn exclude(mut self) -> Self {
        self.exclude = true;
        self
    }

    /// Replace the value with the output of `transformer` before placing it.
    pub fn transform(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    /// The field identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The role of the field.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The name under which the field appears in the tree.
    pub fn exposed_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(self.id)
    }

    /// Whether the field is left out.
    pub fn is_excluded(&self) -> bool {
        self.exclude
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("rename", &self.rename)
            .field("exclude", &self.exclude)
            .field("transformer", &self.transformer.is_some())
            .finish()
    }
}

/// The mapping schema of a type: its fields in processing order, the name
/// of its element and an optional adapter.
///
/// Build it once per type with [`Schema::builder`] and hand it out from
/// [`Mappable::schema`](crate::Mappable::schema), typically from a
/// `static` [`OnceLock`](std::sync::OnceLock).
#[derive(Debug, Clone)]
pub struct Schema {
    type_name: String,
    element_name: String,
    fields: Vec<Field>,
    adapter: Option<AdapterConfig>,
}

impl Schema {
    /// Start a schema for the type called `type_name`.
    pub fn builder(type_name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            type_name: type_name.into(),
            name: None,
            fields: Vec::new(),
            order: Vec::new(),
            adapter: None,
        }
    }

    /// Start a schema for `T`, named after the last path segment of its
    /// Rust type name.
    ///
    /// ```rust
    /// struct ComponenteAvaliacao;
    ///
    /// let schema = xmlmap::Schema::builder_for::<ComponenteAvaliacao>().build();
    /// assert_eq!(schema.type_name(), "ComponenteAvaliacao");
    /// assert_eq!(schema.element_name(), "componenteavaliacao");
    /// ```
    pub fn builder_for<T: ?Sized>() -> SchemaBuilder {
        Self::builder(short_type_name(std::any::type_name::<T>()))
    }

    /// The name of the described type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The name of the element a value of this type maps to: the declared
    /// name, or the lowercased type name.
    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    /// The fields in processing order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The adapter applied to each element of this type after mapping.
    pub fn adapter(&self) -> Option<&AdapterConfig> {
        self.adapter.as_ref()
    }
}

// "alloc::vec::Vec<my::Item>" -> "Vec", "my::module::Item" -> "Item"
fn short_type_name(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Builder for [`Schema`].
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    type_name: String,
    name: Option<String>,
    fields: Vec<Field>,
    order: Vec<String>,
    adapter: Option<AdapterConfig>,
}

impl SchemaBuilder {
    /// Name the element explicitly instead of using the type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a field. Fields are processed in declaration order unless an
    /// explicit [`order`](SchemaBuilder::order) says otherwise.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Process the named fields first, in this order. Fields that are not
    /// named follow in declaration order.
    pub fn order<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Normalize every element of this type with `config` once it is mapped.
    pub fn adapter(mut self, config: AdapterConfig) -> Self {
        self.adapter = Some(config);
        self
    }

    /// Build the schema, fixing the processing order of its fields.
    pub fn build(self) -> Schema {
        let SchemaBuilder {
            type_name,
            name,
            mut fields,
            order,
            adapter,
        } = self;
        if !order.is_empty() {
            // stable: unlisted fields keep declaration order at the end
            fields.sort_by_key(|field| {
                order
                    .iter()
                    .position(|id| id == field.id)
                    .unwrap_or(order.len())
            });
        }
        let element_name = name.unwrap_or_else(|| type_name.to_lowercase());
        Schema {
            type_name,
            element_name,
            fields,
            adapter,
        }
    }
}
