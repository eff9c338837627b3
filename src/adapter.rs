use ahash::{HashMap, HashSet};
use indexmap::IndexMap;

use crate::entity::sanitize_attribute;
use crate::treedata::{Node, Tree};

/// Configuration of a normalization pass, see [`Tree::normalize`].
///
/// ```rust
/// use xmlmap::AdapterConfig;
///
/// let config = AdapterConfig::default()
///     .with_sort_children_by_name(true)
///     .with_tag_rename("componenteavaliacao", "componente");
/// assert!(config.rename_components);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AdapterConfig {
    /// Stable-sort children by element name.
    pub sort_children_by_name: bool,
    /// Keep only the first of several children with the same name and
    /// attribute values.
    pub remove_duplicates: bool,
    /// Rename elements according to `tag_renames`.
    pub rename_components: bool,
    /// Map of old element name to new element name.
    pub tag_renames: HashMap<String, String>,
    /// Attributes to set on every element, overwriting existing values.
    pub add_default_attributes: Option<IndexMap<String, String>>,
}

impl AdapterConfig {
    /// Enable or disable sorting children by name.
    pub fn with_sort_children_by_name(mut self, enabled: bool) -> Self {
        self.sort_children_by_name = enabled;
        self
    }

    /// Enable or disable duplicate removal.
    pub fn with_remove_duplicates(mut self, enabled: bool) -> Self {
        self.remove_duplicates = enabled;
        self
    }

    /// Add a tag rename. This also enables renaming.
    pub fn with_tag_rename(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.rename_components = true;
        self.tag_renames.insert(old.into(), new.into());
        self
    }

    /// Add a default attribute.
    pub fn with_default_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_default_attributes
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }
}

// the default attributes with their names sanitized; pairs whose name
// sanitizes to nothing cannot be set on any element and are dropped
fn default_attributes(config: &AdapterConfig) -> Vec<(String, String)> {
    config
        .add_default_attributes
        .iter()
        .flatten()
        .filter_map(|(name, value)| {
            let name = sanitize_attribute(name);
            if name.is_empty() {
                return None;
            }
            Some((name.into_owned(), sanitize_attribute(value).into_owned()))
        })
        .collect()
}

struct Normalizer<'a> {
    config: &'a AdapterConfig,
    defaults: Vec<(String, String)>,
}

impl Normalizer<'_> {
    // defaults and renames only touch the element itself
    fn adapt_element(&self, tree: &mut Tree, node: Node) {
        let element = tree.element_mut(node);
        for (name, value) in &self.defaults {
            element.upsert_attribute(name.clone(), value.clone());
        }
        if self.config.rename_components {
            if let Some(new_name) = self.config.tag_renames.get(element.name()) {
                element.set_name(new_name.clone());
            }
        }
    }

    fn adapt_children(&self, tree: &mut Tree, node: Node) {
        let mut children = tree.children(node).collect::<Vec<_>>();
        for child in &children {
            self.adapt_element(tree, *child);
        }
        let mut changed = false;
        if self.config.sort_children_by_name {
            let before = children.clone();
            children.sort_by(|a, b| tree.name(*a).cmp(tree.name(*b)));
            changed |= before != children;
        }
        if self.config.remove_duplicates {
            let mut seen = HashSet::default();
            let mut survivors = Vec::with_capacity(children.len());
            for child in children {
                let element = tree.element(child);
                let key = (
                    element.name().to_string(),
                    element.attributes().values().cloned().collect::<String>(),
                );
                if seen.insert(key) {
                    survivors.push(child);
                } else {
                    tree.remove(child);
                    changed = true;
                }
            }
            children = survivors;
        }
        if changed {
            // survivors are already children of `node`; detaching and
            // appending them in order only reorders them
            let arena = tree.arena_mut();
            for child in &children {
                child.get().detach(arena);
                node.get().append(child.get(), arena);
            }
        }
        for child in children {
            self.adapt_children(tree, child);
        }
    }
}

/// ## Normalization
impl Tree {
    /// Normalize an element and its descendants according to `config`.
    ///
    /// Each element gets the configured default attributes and, if renaming
    /// is enabled, its new name. The children of each element are then
    /// sorted by name and deduplicated: children are duplicates when they
    /// have the same name and the same concatenation of attribute values, in
    /// which case only the first one survives. Sorting and deduplication see
    /// children with their defaults and new names already applied.
    ///
    /// Normalizing twice with the same configuration gives the same tree as
    /// normalizing once, as long as no new name in `tag_renames` is itself
    /// renamed.
    ///
    /// ```rust
    /// use xmlmap::{AdapterConfig, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.new_element("root");
    /// tree.append_element(root, "b")?;
    /// tree.append_element(root, "a")?;
    /// tree.append_element(root, "b")?;
    ///
    /// let config = AdapterConfig::default()
    ///     .with_sort_children_by_name(true)
    ///     .with_remove_duplicates(true);
    /// tree.normalize(root, &config);
    ///
    /// let names = tree.children(root).map(|n| tree.name(n)).collect::<Vec<_>>();
    /// assert_eq!(names, vec!["a", "b"]);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn normalize(&mut self, node: Node, config: &AdapterConfig) {
        let normalizer = Normalizer {
            config,
            defaults: default_attributes(config),
        };
        normalizer.adapt_element(self, node);
        normalizer.adapt_children(self, node);
    }
}
