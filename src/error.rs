use thiserror::Error;

/// Broad classification of [`Error`] values.
///
/// Use [`Error::kind`] to obtain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text-or-children invariant of an element would be broken.
    Structural,
    /// An attribute or child was rejected by the tree's validation rules.
    Validation,
    /// The thing to update or annotate does not exist.
    Lookup,
    /// Writing the rendered document failed.
    Io,
}

/// Xmlmap errors
#[derive(Debug, Error)]
pub enum Error {
    /// Cannot add a child to an element that holds text.
    #[error("element `{0}` holds text and cannot take children")]
    TextPresent(String),
    /// Cannot set text on an element that has children.
    #[error("element `{0}` has children and cannot take text")]
    ChildrenPresent(String),
    /// The child is already a child of this element.
    #[error("element `{0}` already contains this child")]
    DuplicateChild(String),
    /// The child is the element itself or one of its ancestors.
    #[error("cannot add `{0}` underneath itself")]
    CyclicChild(String),
    /// The attribute name is empty once invalid characters are stripped.
    #[error("attribute name {0:?} is empty after sanitization")]
    EmptyAttributeName(String),
    /// The attribute already exists on this node.
    #[error("attribute `{0}` already exists")]
    DuplicateAttribute(String),
    /// The attribute to update does not exist.
    #[error("attribute `{0}` does not exist")]
    MissingAttribute(String),
    /// The element holds no text node to annotate.
    #[error("element `{0}` holds no text")]
    MissingText(String),
    /// IO error while writing a document.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TextPresent(_) | Error::ChildrenPresent(_) | Error::CyclicChild(_) => {
                ErrorKind::Structural
            }
            Error::DuplicateChild(_)
            | Error::EmptyAttributeName(_)
            | Error::DuplicateAttribute(_) => ErrorKind::Validation,
            Error::MissingAttribute(_) | Error::MissingText(_) => ErrorKind::Lookup,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(
            Error::TextPresent("a".into()).kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            Error::DuplicateChild("a".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::MissingAttribute("a".into()).kind(),
            ErrorKind::Lookup
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_message() {
        assert_eq!(
            Error::MissingAttribute("encoding".into()).to_string(),
            "attribute `encoding` does not exist"
        );
    }
}
