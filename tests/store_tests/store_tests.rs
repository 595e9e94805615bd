//! Store Tests
//!
//! Tests verify:
//! - Entry validation
//! - Placement (front for sectionless, run head for sectioned, tail for new)
//! - Last-write-wins lookup
//! - Scoped deletes
//! - Section contiguity after arbitrary operation sequences

use inistore::{Entry, IniError, Section, Store};

/// Storage order as (section, key, value) triples
fn layout(store: &Store) -> Vec<(Option<&str>, &str, &str)> {
    store
        .iter()
        .map(|e| (e.section_name(), e.key(), e.value()))
        .collect()
}

/// Panics if any section appears in two separate runs or global is not leading
fn assert_contiguous(store: &Store) {
    let mut seen: Vec<&Section> = Vec::new();
    let mut previous: Option<&Section> = None;

    for entry in store {
        let section = entry.section();
        if previous != Some(section) {
            assert!(
                !seen.contains(&section),
                "section {} appears in more than one run",
                section
            );
            if section.is_global() {
                assert!(seen.is_empty(), "global run is not leading");
            }
            seen.push(section);
            previous = Some(section);
        }
    }
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = Store::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert_eq!(store.iter().count(), 0);
}

#[test]
fn test_insert_and_lookup() {
    let mut store = Store::new();

    store.insert(Some("db"), "host", "localhost", Some("primary")).unwrap();

    assert_eq!(store.lookup(Some("db"), "host"), Some("localhost"));
    assert_eq!(store.lookup_comment(Some("db"), "host"), Some("primary"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_lookup_nonexistent_key() {
    let mut store = Store::new();
    store.insert(None, "a", "1", None).unwrap();

    assert_eq!(store.lookup(None, "b"), None);
    assert_eq!(store.lookup_comment(None, "b"), None);
}

#[test]
fn test_lookup_comment_absent_on_match() {
    let mut store = Store::new();
    store.insert(None, "a", "1", None).unwrap();

    assert_eq!(store.lookup(None, "a"), Some("1"));
    assert_eq!(store.lookup_comment(None, "a"), None);
}

#[test]
fn test_global_and_named_sections_do_not_match() {
    let mut store = Store::new();
    store.insert(None, "k", "global", None).unwrap();
    store.insert(Some("s"), "k", "named", None).unwrap();

    assert_eq!(store.lookup(None, "k"), Some("global"));
    assert_eq!(store.lookup(Some("s"), "k"), Some("named"));
    assert_eq!(store.lookup(Some(""), "k"), None);
}

#[test]
fn test_section_and_key_compare_bytewise() {
    let mut store = Store::new();
    store.insert(Some("Section"), "Key", "v", None).unwrap();

    assert_eq!(store.lookup(Some("section"), "Key"), None);
    assert_eq!(store.lookup(Some("Section"), "key"), None);
    assert_eq!(store.lookup(Some("Section"), "Key"), Some("v"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_insert_empty_key_fails() {
    let mut store = Store::new();

    let result = store.insert(Some("s"), "", "value", None);
    assert!(matches!(result, Err(IniError::InvalidEntry { .. })));
    assert!(store.is_empty());
}

#[test]
fn test_insert_empty_value_fails() {
    let mut store = Store::new();

    let result = store.insert(None, "key", "", Some("comment"));
    match result {
        Err(IniError::InvalidEntry { key, .. }) => assert_eq!(key, "key"),
        other => panic!("Expected InvalidEntry, got {:?}", other),
    }
    assert!(store.is_empty());
}

#[test]
fn test_entry_new_validates() {
    assert!(Entry::new(None, "k", "v", None).is_ok());
    assert!(Entry::new(None, "", "v", None).is_err());
    assert!(Entry::new(None, "k", "", None).is_err());
}

// =============================================================================
// Placement Tests
// =============================================================================

#[test]
fn test_sectionless_inserts_accumulate_most_recent_first() {
    let mut store = Store::new();
    store.insert(Some("s"), "x", "1", None).unwrap();
    store.insert(None, "a", "1", None).unwrap();
    store.insert(None, "b", "2", None).unwrap();
    store.insert(None, "c", "3", None).unwrap();

    assert_eq!(
        layout(&store),
        vec![
            (None, "c", "3"),
            (None, "b", "2"),
            (None, "a", "1"),
            (Some("s"), "x", "1"),
        ]
    );
}

#[test]
fn test_new_sections_append_in_first_insert_order() {
    let mut store = Store::new();
    store.insert(Some("one"), "k", "1", None).unwrap();
    store.insert(Some("two"), "k", "2", None).unwrap();
    store.insert(Some("three"), "k", "3", None).unwrap();

    let sections: Vec<_> = store.iter().map(|e| e.section_name()).collect();
    assert_eq!(sections, vec![Some("one"), Some("two"), Some("three")]);
}

#[test]
fn test_same_section_inserts_before_run_head() {
    let mut store = Store::new();
    store.insert(Some("a"), "k1", "1", None).unwrap();
    store.insert(Some("b"), "k1", "1", None).unwrap();
    store.insert(Some("a"), "k2", "2", None).unwrap();
    store.insert(Some("a"), "k3", "3", None).unwrap();

    assert_eq!(
        layout(&store),
        vec![
            (Some("a"), "k3", "3"),
            (Some("a"), "k2", "2"),
            (Some("a"), "k1", "1"),
            (Some("b"), "k1", "1"),
        ]
    );
}

#[test]
fn test_same_section_as_single_tail_entry() {
    let mut store = Store::new();
    store.insert(Some("s"), "k", "v1", None).unwrap();
    store.insert(Some("s"), "k", "v2", None).unwrap();

    assert_eq!(
        layout(&store),
        vec![(Some("s"), "k", "v2"), (Some("s"), "k", "v1")]
    );
}

#[test]
fn test_sample_session_layout() {
    let mut store = Store::new();
    store.insert(Some("section1"), "key_5", "value_1001", Some("comment key_5 ")).unwrap();
    store.insert(Some("section1"), "key_0", "value_011", Some("comment key_0")).unwrap();
    store.insert(None, "key_0", "value_101", None).unwrap();
    store.insert(Some("section1"), "key_8", "value_189", None).unwrap();
    store.insert(Some("section2"), "key_8", "value_967", None).unwrap();
    store.insert(Some("section5"), "key_890", "value_967", None).unwrap();
    store.insert(Some("section1"), "key_890", "value_967", None).unwrap();

    assert_eq!(
        layout(&store),
        vec![
            (None, "key_0", "value_101"),
            (Some("section1"), "key_890", "value_967"),
            (Some("section1"), "key_8", "value_189"),
            (Some("section1"), "key_0", "value_011"),
            (Some("section1"), "key_5", "value_1001"),
            (Some("section2"), "key_8", "value_967"),
            (Some("section5"), "key_890", "value_967"),
        ]
    );
    assert_contiguous(&store);
}

// =============================================================================
// Last-Write-Wins Tests
// =============================================================================

#[test]
fn test_last_write_wins_keeps_both_copies() {
    let mut store = Store::new();
    store.insert(Some("S"), "k", "v1", None).unwrap();
    store.insert(Some("S"), "k", "v2", None).unwrap();

    assert_eq!(store.lookup(Some("S"), "k"), Some("v2"));
    let copies = store
        .iter()
        .filter(|e| e.section_name() == Some("S") && e.key() == "k")
        .count();
    assert_eq!(copies, 2);
}

#[test]
fn test_last_write_wins_sectionless() {
    let mut store = Store::new();
    store.insert(None, "k", "old", Some("first")).unwrap();
    store.insert(None, "k", "new", None).unwrap();

    assert_eq!(store.lookup(None, "k"), Some("new"));
    // Comment lookup follows the same first match, which has no comment.
    assert_eq!(store.lookup_comment(None, "k"), None);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_scoped_delete_key_sectionless() {
    let mut store = Store::new();
    store.insert(None, "k", "a", None).unwrap();
    store.insert(Some("S"), "k", "b", None).unwrap();

    assert_eq!(store.delete_key(None, "k"), 1);

    assert_eq!(store.lookup(None, "k"), None);
    assert_eq!(store.lookup(Some("S"), "k"), Some("b"));
}

#[test]
fn test_scoped_delete_key_in_section() {
    let mut store = Store::new();
    store.insert(None, "k", "a", None).unwrap();
    store.insert(Some("S"), "k", "b", None).unwrap();
    store.insert(Some("T"), "k", "c", None).unwrap();
    store.insert(Some("S"), "other", "d", None).unwrap();

    assert_eq!(store.delete_key(Some("S"), "k"), 1);

    assert_eq!(store.lookup(None, "k"), Some("a"));
    assert_eq!(store.lookup(Some("S"), "k"), None);
    assert_eq!(store.lookup(Some("T"), "k"), Some("c"));
    assert_eq!(store.lookup(Some("S"), "other"), Some("d"));
}

#[test]
fn test_delete_key_removes_all_copies() {
    let mut store = Store::new();
    store.insert(Some("S"), "k", "v1", None).unwrap();
    store.insert(Some("S"), "k", "v2", None).unwrap();
    store.insert(Some("S"), "k", "v3", None).unwrap();

    assert_eq!(store.delete_key(Some("S"), "k"), 3);
    assert!(store.is_empty());
}

#[test]
fn test_delete_key_exact_match_only() {
    let mut store = Store::new();
    store.insert(Some("section1"), "key_890", "v", None).unwrap();

    assert_eq!(store.delete_key(Some("section1"), "key_"), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_key_empty_is_noop() {
    let mut store = Store::new();
    store.insert(None, "k", "v", None).unwrap();

    assert_eq!(store.delete_key(None, ""), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_section() {
    let mut store = Store::new();
    store.insert(None, "g", "1", None).unwrap();
    store.insert(Some("a"), "k", "1", None).unwrap();
    store.insert(Some("b"), "k", "2", None).unwrap();
    store.insert(Some("a"), "j", "3", None).unwrap();

    assert_eq!(store.delete_section(Some("a")), 2);

    assert_eq!(
        layout(&store),
        vec![(None, "g", "1"), (Some("b"), "k", "2")]
    );
}

#[test]
fn test_delete_section_none_is_noop() {
    let mut store = Store::new();
    store.insert(None, "g", "1", None).unwrap();
    store.insert(Some("a"), "k", "1", None).unwrap();

    assert_eq!(store.delete_section(None), 0);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_delete_section_empty_name_only_matches_empty_section() {
    let mut store = Store::new();
    store.insert(None, "g", "1", None).unwrap();
    store.insert(Some(""), "k", "1", None).unwrap();

    assert_eq!(store.delete_section(Some("")), 1);
    assert_eq!(layout(&store), vec![(None, "g", "1")]);
}

#[test]
fn test_insert_after_delete_reopens_section_at_tail() {
    let mut store = Store::new();
    store.insert(Some("a"), "k", "1", None).unwrap();
    store.insert(Some("b"), "k", "2", None).unwrap();
    store.delete_section(Some("a"));
    store.insert(Some("a"), "k", "3", None).unwrap();

    assert_eq!(
        layout(&store),
        vec![(Some("b"), "k", "2"), (Some("a"), "k", "3")]
    );
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear_and_reuse() {
    let mut store = Store::new();
    store.insert(None, "a", "1", None).unwrap();
    store.insert(Some("s"), "b", "2", None).unwrap();

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.lookup(None, "a"), None);

    store.insert(Some("s"), "c", "3", None).unwrap();
    assert_eq!(store.lookup(Some("s"), "c"), Some("3"));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Contiguity Tests
// =============================================================================

#[test]
fn test_contiguity_after_mixed_operations() {
    let sections = [None, Some("alpha"), Some("beta"), Some("gamma"), Some("")];
    let keys = ["k0", "k1", "k2", "k3"];

    let mut store = Store::new();
    // Small LCG so the sequence is deterministic.
    let mut state: u32 = 0x2545_f491;
    let mut next = || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (state >> 16) as usize
    };

    for step in 0..2_000 {
        let section = sections[next() % sections.len()];
        let key = keys[next() % keys.len()];

        match next() % 10 {
            0 => {
                store.delete_section(section);
            }
            1 | 2 => {
                store.delete_key(section, key);
            }
            _ => {
                let value = format!("v{}", step);
                store.insert(section, key, &value, None).unwrap();
            }
        }

        assert_contiguous(&store);
    }
}

#[test]
fn test_lookup_returns_latest_after_mixed_inserts() {
    let mut store = Store::new();
    for round in 0..5 {
        for section in ["a", "b", "c"] {
            let value = format!("{}-{}", section, round);
            store.insert(Some(section), "k", &value, None).unwrap();
            store.insert(None, "k", &value, None).unwrap();
        }
    }

    assert_eq!(store.lookup(Some("a"), "k"), Some("a-4"));
    assert_eq!(store.lookup(Some("b"), "k"), Some("b-4"));
    assert_eq!(store.lookup(Some("c"), "k"), Some("c-4"));
    assert_eq!(store.lookup(None, "k"), Some("c-4"));
    assert_contiguous(&store);
}
