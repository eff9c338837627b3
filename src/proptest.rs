//! Proptest support for xmlmap
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module helps you write a proptest by letting you
//! generate an arbitrary element tree and an arbitrary adapter
//! configuration.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`.

use ahash::HashSet;
use proptest::prelude::*;

use crate::adapter::AdapterConfig;
use crate::fixed::{Content, Element};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const ATTRIBUTE_VALUES: &[&str] = &["", "1", "2", "x y"];
const RENAME_TARGETS: &[&str] = &["v", "w"];
const TEXT: &str = "[a-z <&>]{0,8}";

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop::sample::select(ATTRIBUTE_NAMES),
            prop::sample::select(ATTRIBUTE_VALUES),
        ),
        0..4,
    )
    .prop_map(|attributes| {
        let mut seen = HashSet::default();
        attributes
            .into_iter()
            .filter(|(name, _)| seen.insert(*name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    })
}

fn arb_leaf() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(ELEMENT_NAMES),
        arb_attributes(),
        prop::option::of(TEXT),
    )
        .prop_map(|(name, attributes, text)| Element {
            name: name.to_string(),
            attributes,
            content: match text {
                Some(text) => Content::Text(text),
                None => Content::Children(Vec::new()),
            },
        })
}

/// Generate a random element tree.
///
/// This produces a value that can be turned into a node using its
/// [`build`](Element::build) method.
pub fn arb_element() -> impl Strategy<Value = Element> {
    arb_leaf().prop_recursive(
        4,  // levels deep
        64, // maximum size of 64 nodes
        6,  // up to 6 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_attributes(),
                prop::collection::vec(inner, 0..6),
            )
                .prop_map(|(name, attributes, children)| Element {
                    name: name.to_string(),
                    attributes,
                    content: Content::Children(children),
                })
        },
    )
}

/// Generate a random adapter configuration.
///
/// Renames map element names onto names that are never renamed themselves.
pub fn arb_adapter_config() -> impl Strategy<Value = AdapterConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::sample::select(RENAME_TARGETS),
            ),
            0..3,
        ),
        prop::option::of(prop::collection::vec(
            (
                prop::sample::select(ATTRIBUTE_NAMES),
                prop::sample::select(ATTRIBUTE_VALUES),
            ),
            0..3,
        )),
    )
        .prop_map(|(sort, dedupe, rename, renames, defaults)| {
            let mut config = AdapterConfig {
                sort_children_by_name: sort,
                remove_duplicates: dedupe,
                ..Default::default()
            };
            for (old, new) in renames {
                config = config.with_tag_rename(old, new);
            }
            config.rename_components = rename;
            for (name, value) in defaults.into_iter().flatten() {
                config = config.with_default_attribute(name, value);
            }
            config
        })
}
