use std::borrow::Cow;

const ELEMENT_ATTRIBUTE_REJECTS: &[char] = &['<', '>', '&', '"', '\''];

/// Strip the characters that cannot appear unescaped in markup from an
/// element attribute name or value.
///
/// Returns the input unchanged if there is nothing to strip.
pub fn sanitize_attribute(content: &str) -> Cow<'_, str> {
    if !content.contains(ELEMENT_ATTRIBUTE_REJECTS) {
        return Cow::Borrowed(content);
    }
    Cow::Owned(
        content
            .chars()
            .filter(|c| !ELEMENT_ATTRIBUTE_REJECTS.contains(c))
            .collect(),
    )
}

/// Keep only ASCII letters, digits, `_` and `-` of a text node attribute
/// name or value.
///
/// This is stricter than [`sanitize_attribute`].
pub fn sanitize_text_attribute(content: &str) -> Cow<'_, str> {
    let keep = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
    if content.chars().all(keep) {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.chars().filter(|c| keep(*c)).collect())
}

pub(crate) fn serialize_predefined_entities(content: &str) -> Cow<'_, str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '\'' => {
                entity_seen = true;
                result.push_str("&apos;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        Cow::Borrowed(content)
    } else {
        result.into()
    }
}
