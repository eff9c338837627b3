use indexmap::IndexMap;

use crate::entity::{sanitize_attribute, sanitize_text_attribute};
use crate::error::Error;

/// A map of attribute name to value, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// Strict insert: the name must be non-empty and not yet present.
fn add_to(attributes: &mut Attributes, name: String, value: String) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyAttributeName(name));
    }
    if attributes.contains_key(&name) {
        return Err(Error::DuplicateAttribute(name));
    }
    attributes.insert(name, value);
    Ok(())
}

/// XML element value.
///
/// An element has a name, attributes in insertion order and optionally a
/// [`TextNode`]. Its children live in the [`Tree`](crate::Tree); an element
/// holds either text or children, never both.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) text: Option<TextNode>,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Attributes::new(),
            text: None,
        }
    }

    /// The name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the element.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    ///
    /// ```rust
    /// use xmlmap::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let doc = tree.new_element("doc");
    /// let element = tree.element_mut(doc);
    /// element.add_attribute("a", "A")?;
    ///
    /// assert_eq!(element.get_attribute("a"), Some("A"));
    /// assert_eq!(element.get_attribute("b"), None);
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Add a new attribute.
    ///
    /// Both name and value have the characters `<`, `>`, `&`, `"` and `'`
    /// stripped. Fails with [`Error::EmptyAttributeName`] if nothing of the
    /// name is left, and with [`Error::DuplicateAttribute`] if the attribute
    /// already exists.
    pub fn add_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        add_to(
            &mut self.attributes,
            sanitize_attribute(name).into_owned(),
            sanitize_attribute(value).into_owned(),
        )
    }

    /// Set an attribute, overwriting any existing value.
    ///
    /// An overwritten attribute keeps its position. Fails only if the
    /// sanitized name is empty.
    ///
    /// ```rust
    /// use xmlmap::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let doc = tree.new_element("doc");
    /// let element = tree.element_mut(doc);
    ///
    /// element.set_attribute("a", "A")?;
    /// element.set_attribute("a", "B")?;
    ///
    /// assert_eq!(element.get_attribute("a"), Some("B"));
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let name = sanitize_attribute(name);
        if name.is_empty() {
            return Err(Error::EmptyAttributeName(name.into_owned()));
        }
        self.upsert_attribute(name.into_owned(), sanitize_attribute(value).into_owned());
        Ok(())
    }

    /// Replace the value of an existing attribute.
    ///
    /// Fails with [`Error::MissingAttribute`] if there is no such attribute.
    pub fn update_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let name = sanitize_attribute(name);
        match self.attributes.get_mut(&*name) {
            Some(existing) => {
                *existing = sanitize_attribute(value).into_owned();
                Ok(())
            }
            None => Err(Error::MissingAttribute(name.into_owned())),
        }
    }

    /// Remove an attribute, returning its value if it was present.
    ///
    /// Removing keeps the order of the remaining attributes.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// The text node, if the element holds text.
    pub fn text(&self) -> Option<&TextNode> {
        self.text.as_ref()
    }

    /// Mutable access to the text node, if the element holds text.
    pub fn text_mut(&mut self) -> Option<&mut TextNode> {
        self.text.as_mut()
    }

    // caller guarantees a non-empty, already sanitized name
    pub(crate) fn upsert_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }
}

/// XML text content of an element.
///
/// A text node carries its own attributes. Their names and values are
/// restricted to ASCII letters, digits, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub(crate) content: String,
    pub(crate) attributes: Attributes,
}

impl TextNode {
    pub(crate) fn new(content: String) -> Self {
        TextNode {
            content,
            attributes: Attributes::new(),
        }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.content
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, content: S) {
        self.content = content.into();
    }

    /// The attributes of the text node.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Add a new attribute to the text node.
    ///
    /// ```rust
    /// use xmlmap::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let greeting = tree.new_element("greeting");
    /// tree.set_text(greeting, "Hello")?;
    /// let text = tree.element_mut(greeting).text_mut().unwrap();
    /// text.add_attribute("lang", "en-GB")?;
    /// text.add_attribute("x.y", "a b")?;
    ///
    /// assert_eq!(text.attributes().get("lang").map(|s| s.as_str()), Some("en-GB"));
    /// assert_eq!(text.attributes().get("xy").map(|s| s.as_str()), Some("ab"));
    /// # Ok::<(), xmlmap::Error>(())
    /// ```
    pub fn add_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        add_to(
            &mut self.attributes,
            sanitize_text_attribute(name).into_owned(),
            sanitize_text_attribute(value).into_owned(),
        )
    }

    /// Remove an attribute from the text node if it is present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }
}
