use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_opens_second_section() {
    let expansion = Expansion::default();
    assert_eq!(expansion.open_index(), Some(1));
    assert!(expansion.is_open(1));
    assert!(!expansion.is_open(0));
}

#[test]
fn collapsed_has_nothing_open() {
    assert_eq!(Expansion::collapsed().open_index(), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_open_section_collapses_it() {
    let mut expansion = Expansion::default();
    expansion.toggle(1);
    assert_eq!(expansion, Expansion::collapsed());
}

#[test]
fn toggle_closed_section_replaces_open_one() {
    let mut expansion = Expansion::default();
    expansion.toggle(3);
    assert_eq!(expansion.open_index(), Some(3));
    assert!(!expansion.is_open(1));
}

#[test]
fn toggle_from_collapsed_opens_target() {
    let mut expansion = Expansion::collapsed();
    expansion.toggle(0);
    assert_eq!(expansion.open_index(), Some(0));
}

#[test]
fn click_sequences_keep_at_most_one_section_open() {
    let clicks = [0, 0, 2, 1, 1, 1, 4, 2, 2, 0, 3, 3, 3, 5];
    let mut expansion = Expansion::default();

    for idx in clicks {
        let was_open = expansion.is_open(idx);
        expansion.toggle(idx);

        let open_count = (0..6).filter(|&i| expansion.is_open(i)).count();
        assert!(open_count <= 1, "more than one section open after clicking {idx}");

        if was_open {
            assert_eq!(expansion.open_index(), None);
        } else {
            assert_eq!(expansion.open_index(), Some(idx));
        }
    }
}
