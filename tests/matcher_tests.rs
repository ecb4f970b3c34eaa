use wordsearch::{match_selection, Placements};

fn sample_placements() -> Placements {
    let mut placements = Placements::new();
    placements.insert("CAT".to_string(), vec![(0, 0), (0, 1), (0, 2)]);
    placements.insert("DOG".to_string(), vec![(3, 3), (4, 4), (5, 5)]);
    placements
}

#[test]
fn test_forward_match() {
    let placements = sample_placements();
    assert_eq!(
        match_selection(&placements, &[(0, 0), (0, 1), (0, 2)]),
        Some("CAT")
    );
}

#[test]
fn test_reversed_match() {
    let placements = sample_placements();
    assert_eq!(
        match_selection(&placements, &[(5, 5), (4, 4), (3, 3)]),
        Some("DOG")
    );
}

#[test]
fn test_strict_prefix_matches_nothing() {
    let placements = sample_placements();
    assert_eq!(match_selection(&placements, &[(0, 0), (0, 1)]), None);
    assert_eq!(match_selection(&placements, &[(0, 1), (0, 2)]), None);
}

#[test]
fn test_longer_selection_matches_nothing() {
    let placements = sample_placements();
    assert_eq!(
        match_selection(&placements, &[(0, 0), (0, 1), (0, 2), (0, 3)]),
        None
    );
}

#[test]
fn test_same_cells_wrong_order_matches_nothing() {
    let placements = sample_placements();
    assert_eq!(match_selection(&placements, &[(0, 1), (0, 0), (0, 2)]), None);
}

#[test]
fn test_empty_selection_matches_nothing() {
    let placements = sample_placements();
    assert_eq!(match_selection(&placements, &[]), None);
}
