use wordsearch::{Direction, SelectionTracker};

#[test]
fn test_two_cell_jump_normalizes_direction() {
    let mut tracker = SelectionTracker::new();
    tracker.begin((2, 2));

    assert!(tracker.extend((2, 4)));
    assert_eq!(tracker.direction(), Some(Direction::new(0, 1)));

    assert!(tracker.extend((2, 5)));
    assert!(!tracker.extend((3, 5)), "delta (1,0) must be rejected");
    assert_eq!(tracker.path(), &[(2, 2), (2, 4), (2, 5)]);
}

#[test]
fn test_diagonal_lock() {
    let mut tracker = SelectionTracker::new();
    tracker.begin((0, 0));
    assert!(tracker.extend((2, 2)));
    assert_eq!(tracker.direction(), Some(Direction::new(1, 1)));
    assert!(tracker.extend((3, 3)));
    assert!(!tracker.extend((3, 4)));
    assert!(!tracker.extend((4, 3)));
    assert!(tracker.extend((4, 4)));
}

#[test]
fn test_rejected_input_leaves_path_unchanged() {
    let mut tracker = SelectionTracker::new();
    tracker.begin((5, 5));
    tracker.extend((5, 6));

    let before = tracker.path().to_vec();
    assert!(!tracker.extend((9, 9)));
    assert_eq!(tracker.path(), before.as_slice());
}

#[test]
fn test_no_duplicates_or_backtracking() {
    let mut tracker = SelectionTracker::new();
    tracker.begin((1, 1));
    assert!(!tracker.extend((1, 1)), "re-offering the start cell");

    assert!(tracker.extend((1, 2)));
    assert!(!tracker.extend((1, 2)), "re-offering the last cell");
    assert!(!tracker.extend((1, 1)), "backtracking onto the path");
    assert_eq!(tracker.path(), &[(1, 1), (1, 2)]);
}

#[test]
fn test_extend_without_begin_is_ignored() {
    let mut tracker = SelectionTracker::new();
    assert!(!tracker.extend((0, 0)));
    assert!(tracker.path().is_empty());
}

#[test]
fn test_end_drains_and_resets() {
    let mut tracker = SelectionTracker::new();
    tracker.begin((0, 0));
    tracker.extend((0, 1));
    tracker.extend((0, 2));

    let path = tracker.end();
    assert_eq!(path, vec![(0, 0), (0, 1), (0, 2)]);
    assert!(tracker.path().is_empty());
    assert_eq!(tracker.direction(), None);

    // a new gesture starts clean, with its own direction
    tracker.begin((4, 4));
    assert!(tracker.extend((5, 4)));
    assert_eq!(tracker.direction(), Some(Direction::new(1, 0)));
}

#[test]
fn test_up_right_diagonal_gesture() {
    let mut tracker = SelectionTracker::new();
    tracker.begin((5, 2));
    assert!(tracker.extend((4, 3)));
    assert_eq!(tracker.direction(), Some(Direction::new(-1, 1)));
    assert!(tracker.extend((3, 4)));
    assert_eq!(tracker.end(), vec![(5, 2), (4, 3), (3, 4)]);
}
