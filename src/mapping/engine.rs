use std::borrow::Cow;

use tracing::{debug, warn};

use crate::error::Error;
use crate::treedata::{Node, Tree};

use super::schema::{Field, Role};
use super::value::{FieldValue, Scalar};
use super::Mappable;

/// ## Mapping
impl Tree {
    /// Map a value onto a new, unattached element.
    ///
    /// The element is named by the value's schema. Its fields are processed
    /// in schema order:
    /// - excluded fields are skipped;
    /// - a transformer replaces the value by its string output, absent
    ///   values included, so a transformed field is never absent;
    /// - absent fields are skipped;
    /// - an attribute field is set as an attribute, overwriting any earlier
    ///   field with the same exposed name;
    /// - an element field holding a scalar becomes a child element named by
    ///   the field, with the scalar as text;
    /// - an element field holding a composite becomes a child element mapped
    ///   from that value, named by the value's own schema;
    /// - an element field holding a sequence adds one such child per present
    ///   item. There is no wrapping element named after the field.
    ///
    /// If the schema carries an adapter, the element is normalized with it.
    pub fn map(&mut self, value: &dyn Mappable) -> Result<Node, Error> {
        let schema = value.schema();
        debug!(type_name = schema.type_name(), "mapping value");
        let node = self.new_element(schema.element_name());
        for field in schema.fields() {
            if field.is_excluded() {
                continue;
            }
            let field_value = match &field.transformer {
                Some(transformer) => {
                    let raw = value.field(field.id());
                    FieldValue::Scalar(Scalar::Str(Cow::Owned(transformer.transform(&raw))))
                }
                None => value.field(field.id()),
            };
            if field_value.is_absent() {
                continue;
            }
            self.map_field(node, field, field_value)?;
        }
        if let Some(config) = schema.adapter() {
            self.normalize(node, config);
        }
        Ok(node)
    }

    fn map_field(&mut self, node: Node, field: &Field, value: FieldValue<'_>) -> Result<(), Error> {
        let name = field.exposed_name();
        match (field.role(), value) {
            (_, FieldValue::Absent) => {}
            (Role::Attribute, FieldValue::Scalar(scalar)) => {
                self.element_mut(node)
                    .set_attribute(name, &scalar.to_string())?;
            }
            (Role::Attribute, _) => {
                warn!(
                    field = field.id(),
                    "nested value cannot be an attribute without a transformer; skipped"
                );
            }
            (Role::Element, FieldValue::Scalar(scalar)) => {
                let child = self.append_element(node, name)?;
                self.set_text(child, scalar.to_string())?;
            }
            (Role::Element, FieldValue::Composite(nested)) => {
                let child = self.map(nested)?;
                self.append(node, child)?;
            }
            (Role::Element, FieldValue::Sequence(items)) => {
                for item in items.into_iter().flatten() {
                    let child = self.map(item)?;
                    self.append(node, child)?;
                }
            }
        }
        Ok(())
    }
}
