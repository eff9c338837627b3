use proptest::prelude::*;
use rstest::rstest;
use xmlmap::{Error, ErrorKind, Tree};

#[test]
fn test_text_and_children_are_exclusive() {
    let mut tree = Tree::new();
    let element = tree.new_element("element");
    tree.set_text(element, "Some text").unwrap();

    let child = tree.new_element("child");
    let err = tree.append(element, child).unwrap_err();
    assert!(matches!(err, Error::TextPresent(_)));
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(!tree.has_children(element));

    tree.clear_text(element);
    tree.append(element, child).unwrap();
    let err = tree.set_text(element, "Other text").unwrap_err();
    assert!(matches!(err, Error::ChildrenPresent(_)));
    assert_eq!(tree.text_str(element), None);
}

#[test]
fn test_failed_append_element_leaves_no_child() {
    let mut tree = Tree::new();
    let element = tree.new_element("element");
    tree.set_text(element, "text").unwrap();
    assert!(tree.append_element(element, "child").is_err());
    assert_eq!(tree.children(element).count(), 0);
}

#[test]
fn test_duplicate_child_is_validation_error() {
    let mut tree = Tree::new();
    let parent = tree.new_element("parent");
    let child = tree.append_element(parent, "child").unwrap();
    let err = tree.append(parent, child).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(tree.children(parent).collect::<Vec<_>>(), vec![child]);
}

#[test]
fn test_cycle_is_rejected() {
    let mut tree = Tree::new();
    let root = tree.new_element("root");
    let a = tree.append_element(root, "a").unwrap();
    let b = tree.append_element(a, "b").unwrap();

    assert!(matches!(tree.append(b, root), Err(Error::CyclicChild(_))));
    assert!(matches!(tree.append(a, a), Err(Error::CyclicChild(_))));
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![b, a, root]);
}

#[test]
fn test_detach_and_reattach() {
    let mut tree = Tree::new();
    let root = tree.new_element("root");
    let a = tree.append_element(root, "a").unwrap();
    let b = tree.append_element(root, "b").unwrap();

    tree.remove_child(root, a);
    assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![b]);
    assert!(!tree.is_removed(a));

    tree.append(root, a).unwrap();
    assert_eq!(tree.child_index(root, a), Some(1));
}

#[test]
fn test_remove_child_of_other_parent_is_noop() {
    let mut tree = Tree::new();
    let root = tree.new_element("root");
    let other = tree.new_element("other");
    let child = tree.append_element(other, "child").unwrap();

    tree.remove_child(root, child);

    assert_eq!(tree.parent(child), Some(other));
}

#[test]
fn test_remove_subtree() {
    let mut tree = Tree::new();
    let root = tree.new_element("root");
    let a = tree.append_element(root, "a").unwrap();
    let b = tree.append_element(a, "b").unwrap();

    tree.remove(a);

    assert!(tree.is_removed(a));
    assert!(tree.is_removed(b));
    assert!(!tree.has_children(root));
}

#[rstest]
#[case("name", "name")]
#[case("na<me>", "name")]
#[case("\"a&b'", "ab")]
fn test_attribute_names_are_sanitized(#[case] given: &str, #[case] stored: &str) {
    let mut tree = Tree::new();
    let element = tree.new_element("element");
    tree.element_mut(element).add_attribute(given, "<v>").unwrap();
    assert_eq!(tree.attribute(element, stored), Some("v"));
}

#[test]
fn test_attribute_errors() {
    let mut tree = Tree::new();
    let element = tree.new_element("element");
    let e = tree.element_mut(element);
    e.add_attribute("a", "1").unwrap();

    let err = e.add_attribute("a", "2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(e.get_attribute("a"), Some("1"));

    let err = e.add_attribute("<>", "2").unwrap_err();
    assert!(matches!(err, Error::EmptyAttributeName(_)));

    let err = e.update_attribute("b", "2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);

    e.update_attribute("a", "3").unwrap();
    assert_eq!(e.get_attribute("a"), Some("3"));
    assert_eq!(e.remove_attribute("missing"), None);
}

#[test]
fn test_text_attributes() {
    let mut tree = Tree::new();
    let element = tree.new_element("element");

    let err = tree.add_text_attribute(element, "lang", "pt").unwrap_err();
    assert!(matches!(err, Error::MissingText(_)));
    assert_eq!(err.kind(), ErrorKind::Lookup);

    tree.set_text(element, "Olá").unwrap();
    tree.add_text_attribute(element, "la ng!", "pt").unwrap();
    assert_eq!(
        tree.text(element).unwrap().attributes().get("lang").map(String::as_str),
        Some("pt")
    );
    assert_eq!(
        tree.render(element),
        "<element>\n  <text lang=\"pt\">Olá</text>\n</element>\n"
    );

    tree.remove_text_attribute(element, "lang");
    tree.remove_text_attribute(element, "lang");
    assert_eq!(tree.render(element), "<element>\n  Olá\n</element>\n");
}

#[test]
fn test_attributes_keep_insertion_order() {
    let mut tree = Tree::new();
    let element = tree.new_element("element");
    let e = tree.element_mut(element);
    for name in ["z", "a", "m"] {
        e.add_attribute(name, name).unwrap();
    }
    e.set_attribute("a", "changed").unwrap();
    e.remove_attribute("z");
    let names = e.attributes().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "m"]);
}

fn attribute_pairs(tree: &Tree, element: xmlmap::Node) -> Vec<(String, String)> {
    tree.element(element)
        .attributes()
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

proptest! {
    #[test]
    fn test_attribute_add_remove_round_trip(
        existing in prop::collection::vec(("[a-z][a-z0-9_]{0,4}", "[ -~]{0,8}"), 0..6),
        name in "[a-z][a-z0-9_]{0,8}",
        value in "[ -~]{0,12}",
    ) {
        let mut tree = Tree::new();
        let element = tree.new_element("element");
        for (existing_name, existing_value) in &existing {
            if tree.attribute(element, existing_name).is_none() {
                tree.element_mut(element)
                    .add_attribute(existing_name, existing_value)
                    .unwrap();
            }
        }
        prop_assume!(tree.attribute(element, &name).is_none());
        let before = attribute_pairs(&tree, element);

        let e = tree.element_mut(element);
        e.add_attribute(&name, &value).unwrap();
        prop_assert_eq!(e.get_attribute(&name), Some(&*xmlmap::sanitize_attribute(&value)));
        prop_assert_eq!(e.attributes().len(), before.len() + 1);
        prop_assert!(e.remove_attribute(&name).is_some());

        prop_assert_eq!(attribute_pairs(&tree, element), before);
    }
}
