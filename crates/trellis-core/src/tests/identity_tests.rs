use super::*;

struct Label;
struct Swatch;

fn label() -> ElementType {
    ElementType::of::<Label>()
}

fn swatch() -> ElementType {
    ElementType::of::<Swatch>()
}

#[test]
fn repeated_type_and_key_are_disambiguated_by_count() {
    let ids = assign_identifiers([
        (label(), None),
        (label(), None),
        (label(), Some(Key::from("x"))),
    ]);

    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[0], ids[2]);
    assert_ne!(ids[1], ids[2]);

    assert_eq!(ids[0].count(), 0);
    assert_eq!(ids[1].count(), 1);
    assert_eq!(ids[0].key(), None);
    assert_eq!(ids[1].key(), None);
    assert_eq!(ids[0].element_type(), ids[1].element_type());

    assert_eq!(ids[2].key(), Some(&Key::from("x")));
    assert_eq!(ids[2].count(), 0);
}

#[test]
fn identical_sequences_produce_identical_identifiers() {
    let children = || {
        vec![
            (label(), None),
            (swatch(), Some(Key::from(3u64))),
            (label(), None),
        ]
    };

    assert_eq!(assign_identifiers(children()), assign_identifiers(children()));
}

#[test]
fn changing_one_key_only_changes_that_identifier() {
    let before = assign_identifiers([
        (label(), None),
        (swatch(), Some(Key::from("a"))),
        (swatch(), None),
    ]);
    let after = assign_identifiers([
        (label(), None),
        (swatch(), Some(Key::from("b"))),
        (swatch(), None),
    ]);

    assert_eq!(before[0], after[0]);
    assert_ne!(before[1], after[1]);
    assert_eq!(before[2], after[2]);
}

#[test]
fn counters_are_tracked_per_type() {
    let ids = assign_identifiers([
        (label(), None),
        (swatch(), None),
        (label(), None),
        (swatch(), None),
    ]);

    let counts: Vec<usize> = ids.iter().map(Identifier::count).collect();
    assert_eq!(counts, vec![0, 0, 1, 1]);
}

#[test]
fn groups_do_not_share_counters() {
    let first = assign_identifiers([(label(), None), (label(), None)]);
    let second = assign_identifiers([(label(), None)]);

    assert_eq!(first[0], second[0]);
    assert_eq!(second[0].count(), 0);
}

#[test]
fn empty_group_yields_no_identifiers() {
    assert!(assign_identifiers(std::iter::empty()).is_empty());
}

#[test]
fn hashed_keys_are_deterministic() {
    assert_eq!(Key::hashed(&("row", 7)), Key::hashed(&("row", 7)));
    assert_ne!(Key::hashed(&("row", 7)), Key::hashed(&("row", 8)));
}

#[test]
fn display_uses_short_type_name() {
    let ids = assign_identifiers([(label(), Some(Key::from("x"))), (label(), None)]);
    assert_eq!(ids[0].to_string(), "Label[\"x\"]#0");
    assert_eq!(ids[1].to_string(), "Label#0");
}
