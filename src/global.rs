use tracing::debug;

use crate::entity::sanitize_attribute;
use crate::error::Error;
use crate::treedata::{Node, Tree};

/// ## Global edits
///
/// These edits visit `root` and all its descendants with
/// [`Tree::traverse`] and change every matching element. Attributes are
/// upserted, never strictly added, so an edit cannot fail halfway through a
/// tree: the only possible failure is an invalid attribute name, and it is
/// reported before any element is touched.
impl Tree {
    /// Set an attribute on every element, overwriting existing values.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let root = tree.new_element("root");
    /// let child = tree.append_element(root, "child")?;
    /// tree.element_mut(child).add_attribute("attr", "old")?;
    ///
    /// tree.add_global_attribute(root, "attr", "value")?;
    ///
    /// assert_eq!(tree.attribute(root, "attr"), Some("value"));
    /// assert_eq!(tree.attribute(child, "attr"), Some("value"));
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn add_global_attribute(&mut self, root: Node, name: &str, value: &str) -> Result<(), Error> {
        let name = valid_attribute_name(name)?;
        let value = sanitize_attribute(value).into_owned();
        let mut count = 0;
        self.traverse(root, |tree, node| {
            tree.element_mut(node)
                .upsert_attribute(name.clone(), value.clone());
            count += 1;
        });
        debug!(name = %name, count, "added global attribute");
        Ok(())
    }

    /// Rename every element named `old_name` to `new_name`.
    pub fn rename_global_entity(&mut self, root: Node, old_name: &str, new_name: &str) {
        let mut count = 0;
        self.traverse(root, |tree, node| {
            let element = tree.element_mut(node);
            if element.name() == old_name {
                element.set_name(new_name);
                count += 1;
            }
        });
        debug!(old_name, new_name, count, "renamed global entity");
    }

    /// Rename attribute `old_attribute` to `new_attribute` on every element
    /// named `entity`.
    ///
    /// Elements without `old_attribute` are left alone. If an element already
    /// has `new_attribute`, its value is overwritten.
    pub fn rename_global_attribute(
        &mut self,
        root: Node,
        entity: &str,
        old_attribute: &str,
        new_attribute: &str,
    ) -> Result<(), Error> {
        let new_attribute = valid_attribute_name(new_attribute)?;
        let mut count = 0;
        self.traverse(root, |tree, node| {
            let element = tree.element_mut(node);
            if element.name() != entity {
                return;
            }
            if let Some(value) = element.remove_attribute(old_attribute) {
                element.upsert_attribute(new_attribute.clone(), value);
                count += 1;
            }
        });
        debug!(entity, old_attribute, new_attribute = %new_attribute, count, "renamed global attribute");
        Ok(())
    }

    /// Remove every element named `entity` below `root`.
    ///
    /// Each visited element drops its direct children with that name, along
    /// with their descendants. `root` itself is never removed.
    ///
    /// ```rust
    /// let mut tree = xmlmap::Tree::new();
    /// let root = tree.new_element("root");
    /// for _ in 0..5 {
    ///     tree.append_element(root, "entity")?;
    /// }
    ///
    /// tree.remove_global_entity(root, "entity");
    ///
    /// assert_eq!(tree.children(root).count(), 0);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn remove_global_entity(&mut self, root: Node, entity: &str) {
        let mut count = 0;
        self.traverse(root, |tree, node| {
            let doomed = tree
                .children(node)
                .filter(|child| tree.name(*child) == entity)
                .collect::<Vec<_>>();
            count += doomed.len();
            for child in doomed {
                tree.remove(child);
            }
        });
        debug!(entity, count, "removed global entity");
    }

    /// Remove attribute `attribute` from every element named `entity`.
    pub fn remove_global_attribute(&mut self, root: Node, entity: &str, attribute: &str) {
        let mut count = 0;
        self.traverse(root, |tree, node| {
            let element = tree.element_mut(node);
            if element.name() == entity && element.remove_attribute(attribute).is_some() {
                count += 1;
            }
        });
        debug!(entity, attribute, count, "removed global attribute");
    }
}

fn valid_attribute_name(name: &str) -> Result<String, Error> {
    let sanitized = sanitize_attribute(name);
    if sanitized.is_empty() {
        return Err(Error::EmptyAttributeName(name.to_string()));
    }
    Ok(sanitized.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_global_attribute_invalid_name_touches_nothing() {
        let mut tree = Tree::new();
        let root = tree.new_element("root");
        tree.append_element(root, "child").unwrap();
        assert!(tree.add_global_attribute(root, "<>", "value").is_err());
        assert!(tree
            .descendants(root)
            .all(|node| tree.element(node).attributes().is_empty()));
    }

    #[test]
    fn test_remove_global_entity_nested() {
        let mut tree = Tree::new();
        let root = tree.new_element("root");
        let a = tree.append_element(root, "a").unwrap();
        let x = tree.append_element(a, "x").unwrap();
        tree.append_element(x, "y").unwrap();
        tree.append_element(root, "x").unwrap();

        tree.remove_global_entity(root, "x");

        let names = tree
            .descendants(root)
            .map(|node| tree.name(node).to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["root", "a"]);
    }

    #[test]
    fn test_remove_global_entity_keeps_root() {
        let mut tree = Tree::new();
        let root = tree.new_element("entity");
        tree.remove_global_entity(root, "entity");
        assert!(!tree.is_removed(root));
    }
}
