use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordsearch::{place_words, Difficulty, Direction};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_cat_and_dog_fill_a_ten_by_ten() {
    let mut rng = SmallRng::seed_from_u64(42);
    let puzzle = place_words(
        &mut rng,
        10,
        10,
        words(&["CAT", "DOG"]),
        2,
        &[],
        Difficulty::Easy,
    );

    assert_eq!(puzzle.placements().len(), 2);
    assert_eq!(puzzle.placements()["CAT"].len(), 3);
    assert_eq!(puzzle.placements()["DOG"].len(), 3);
    assert!(puzzle.grid().is_full(), "no cell may be left empty");
}

#[test]
fn test_placed_letters_match_grid() {
    let mut rng = SmallRng::seed_from_u64(7);
    let puzzle = place_words(
        &mut rng,
        10,
        10,
        words(&["HORSE", "TIGER", "EAGLE", "SHARK"]),
        4,
        &[],
        Difficulty::Hard,
    );

    for (word, path) in puzzle.placements() {
        assert_eq!(path.len(), word.chars().count());
        for (coord, letter) in path.iter().zip(word.chars()) {
            assert_eq!(puzzle.grid().get(*coord).unwrap(), Some(letter));
        }
    }
}

#[test]
fn test_paths_use_one_constant_step() {
    let mut rng = SmallRng::seed_from_u64(3);
    let puzzle = place_words(
        &mut rng,
        10,
        10,
        words(&["PURPLE", "ORANGE", "YELLOW"]),
        3,
        &[],
        Difficulty::Medium,
    );

    for path in puzzle.placements().values() {
        let step = Direction::delta(path[0], path[1]);
        assert!(step.dr.abs() <= 1 && step.dc.abs() <= 1);
        for pair in path.windows(2) {
            assert_eq!(Direction::delta(pair[0], pair[1]), step);
        }
    }
}

#[test]
fn test_shortfall_is_accepted() {
    // only one word available for a target of three, nothing to substitute
    let mut rng = SmallRng::seed_from_u64(1);
    let puzzle = place_words(&mut rng, 10, 10, words(&["CAT"]), 3, &[], Difficulty::Easy);

    assert_eq!(puzzle.placements().len(), 1);
    assert!(puzzle.grid().is_full());
}

#[test]
fn test_unplaceable_word_is_substituted() {
    // a 12-letter word can never sit in a 10x10 grid; the pool offers a
    // replacement that can
    let mut rng = SmallRng::seed_from_u64(9);
    let pool = words(&["dog"]);
    let puzzle = place_words(
        &mut rng,
        10,
        10,
        words(&["ABCDEFGHIJKL"]),
        1,
        &pool,
        Difficulty::Easy,
    );

    assert_eq!(puzzle.placements().len(), 1);
    assert!(puzzle.placements().contains_key("DOG"));
    assert!(!puzzle.placements().contains_key("ABCDEFGHIJKL"));
}

#[test]
fn test_substitution_terminates_on_exhausted_pool() {
    // pool only offers words that cannot fit either; the build must finish
    // with a shortfall instead of looping
    let mut rng = SmallRng::seed_from_u64(11);
    let pool = words(&["ABCDEFGHIJKLM"]);
    let puzzle = place_words(
        &mut rng,
        10,
        10,
        words(&["ABCDEFGHIJKL"]),
        1,
        &pool,
        Difficulty::Easy,
    );

    assert_eq!(puzzle.placements().len(), 0);
    assert!(puzzle.grid().is_full());
}

#[test]
fn test_overlapping_words_share_matching_letters() {
    let mut rng = SmallRng::seed_from_u64(123);
    let list = words(&["RED", "BLUE", "GREEN", "GRAY", "TEAL", "PINK", "BLACK", "WHITE"]);
    let puzzle = place_words(&mut rng, 10, 10, list, 8, &[], Difficulty::Medium);

    // the grid was written word by word; if any two paths cross with
    // different letters, the later word would have failed its feasibility
    // check, so every recorded path must still read back correctly
    for (word, path) in puzzle.placements() {
        let read: String = path
            .iter()
            .map(|&c| puzzle.grid().get(c).unwrap().unwrap())
            .collect();
        assert_eq!(&read, word);
    }
}
