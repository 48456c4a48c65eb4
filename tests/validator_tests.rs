//! Validator integration tests: submission pipeline, scoring and randomness.

use proptest::prelude::*;
use word_scramble::{
    is_possible, sentiment_analysis, GameState, ScoreIndicator, Sentiment, SubmissionResult,
    WordList, WordSet, WordValidator,
};

fn accept_all(_word: &str, _language: &str) -> bool {
    true
}

fn english(words: &[&str]) -> WordSet {
    WordSet::from_words("en", words.iter().copied())
}

/// Play `words` in order, returning the final state and every result.
fn play<D: word_scramble::DictionaryOracle>(
    validator: &WordValidator<D>,
    mut state: GameState,
    words: &[&str],
) -> (GameState, Vec<SubmissionResult>) {
    let mut results = Vec::new();
    for word in words {
        if let Some((next, result)) = validator.submit_word(&state, word) {
            state = next;
            results.push(result);
        }
    }
    (state, results)
}

// =============================================================================
// Letter Feasibility
// =============================================================================

#[test]
fn test_is_possible_examples() {
    assert!(is_possible("cat", "tack"));
    assert!(!is_possible("tacks", "tack"));
    assert!(is_possible("kat", "tack"));
}

#[test]
fn test_is_possible_is_case_sensitive_on_raw_input() {
    // Normalization happens before the check, not inside it
    assert!(!is_possible("CAT", "tack"));
}

// =============================================================================
// Submission Pipeline
// =============================================================================

#[test]
fn test_listen_silent_scores_six() {
    let validator = WordValidator::new(english(&["silent"]), 42);
    let state = GameState::new("listen");

    let (next, result) = validator.submit_word(&state, "silent").unwrap();

    assert_eq!(
        result,
        SubmissionResult::Accepted {
            word: "silent".to_string(),
            length_bonus: 6,
        }
    );
    assert_eq!(next.score, 6);
}

#[test]
fn test_accepted_words_most_recent_first() {
    let validator = WordValidator::new(english(&["silk", "worm", "milk"]), 1);
    let (state, results) = play(&validator, GameState::new("silkworm"), &["silk", "worm", "milk"]);

    assert!(results.iter().all(SubmissionResult::is_accepted));
    let words: Vec<_> = state.used_words().iter().cloned().collect();
    assert_eq!(words, vec!["milk", "worm", "silk"]);
    assert_eq!(state.score, 12);
    assert_eq!(state.sentiment, Sentiment::Ecstatic);
}

#[test]
fn test_sentiment_tracks_score_on_accept() {
    let validator = WordValidator::new(accept_all, 1);
    let state = GameState::new("tack");

    let (state, _) = validator.submit_word(&state, "at").unwrap();
    assert_eq!(state.sentiment, Sentiment::Happy);

    let (state, _) = validator.submit_word(&state, "cat").unwrap();
    assert_eq!(state.score, 5);
    assert_eq!(state.sentiment, Sentiment::Ecstatic);
}

#[test]
fn test_not_a_word_leaves_state() {
    let validator = WordValidator::new(english(&["silent"]), 42);
    let state = GameState::new("listen");

    let (next, result) = validator.submit_word(&state, "lsnt").unwrap();

    assert_eq!(result, SubmissionResult::RejectedNotAWord);
    assert_eq!(next, state);
}

#[test]
fn test_impossible_letters_leaves_state() {
    let validator = WordValidator::new(accept_all, 42);
    let state = GameState::new("listen");

    let (next, result) = validator.submit_word(&state, "listens").unwrap();

    assert_eq!(result, SubmissionResult::RejectedImpossibleLetters);
    assert_eq!(next, state);
}

#[test]
fn test_input_is_normalized() {
    let validator = WordValidator::new(english(&["silent"]), 42);
    let state = GameState::new("listen");

    let (next, result) = validator.submit_word(&state, "  SILENT \n").unwrap();

    assert!(result.is_accepted());
    assert_eq!(next.used_words().front().map(String::as_str), Some("silent"));
}

// =============================================================================
// Sentiment
// =============================================================================

#[test]
fn test_sentiment_boundaries() {
    assert_eq!(sentiment_analysis(0), Sentiment::Neutral);
    assert_eq!(sentiment_analysis(3), Sentiment::Happy);
    assert_eq!(sentiment_analysis(4), Sentiment::Ecstatic);
    assert_eq!(sentiment_analysis(-1), Sentiment::Bad);
}

// =============================================================================
// Start Game
// =============================================================================

#[test]
fn test_start_game_same_seed_same_root() {
    let words = WordList::embedded();

    let mut validator1 = WordValidator::new(accept_all, 2024);
    let mut validator2 = WordValidator::new(accept_all, 2024);

    let state1 = validator1.start_game(words.as_slice());
    let state2 = validator2.start_game(words.as_slice());

    assert_eq!(state1.root_word(), state2.root_word());
    assert_eq!(state1.score, 0);
    assert_eq!(state2.score, 0);
}

#[test]
fn test_start_game_resets_everything() {
    let mut validator = WordValidator::new(accept_all, 7);
    let words = ["listen"];

    let state = validator.start_game(&words);
    let (state, _) = validator.submit_word(&state, "silent").unwrap();
    let state = validator.apply_penalty(&state);
    assert_eq!(state.indicator, ScoreIndicator::Negative);

    let fresh = validator.start_game(&words);
    assert_eq!(fresh.root_word(), "listen");
    assert_eq!(fresh.score, 0);
    assert!(fresh.used_words().is_empty());
    assert_eq!(fresh.sentiment, Sentiment::Neutral);
    assert_eq!(fresh.indicator, ScoreIndicator::Positive);
}

#[test]
fn test_start_game_empty_list_uses_fallback() {
    let mut validator = WordValidator::new(accept_all, 7);
    let state = validator.start_game(WordList::parse("").as_slice());

    assert_eq!(state.root_word(), "cauliflower");
}

#[test]
fn test_start_game_visits_whole_list() {
    let mut validator = WordValidator::new(accept_all, 11);
    let words = ["silkworm", "listened", "airplane"];

    let mut seen: Vec<String> = (0..200)
        .map(|_| validator.start_game(&words).root_word().to_string())
        .collect();
    seen.sort();
    seen.dedup();

    assert_eq!(seen, vec!["airplane", "listened", "silkworm"]);
}

// =============================================================================
// Penalty
// =============================================================================

#[test]
fn test_penalty_can_drive_score_negative_without_bad_sentiment() {
    let mut validator = WordValidator::new(accept_all, 3);
    let mut state = GameState::new("listen");

    for _ in 0..50 {
        state = validator.apply_penalty(&state);
    }

    assert!(state.score < 0);
    assert_eq!(state.sentiment, Sentiment::Neutral);
    assert_eq!(sentiment_analysis(state.score), Sentiment::Bad);
}

#[test]
fn test_penalty_same_seed_same_sequence() {
    let mut validator1 = WordValidator::new(accept_all, 99);
    let mut validator2 = WordValidator::new(accept_all, 99);
    let state = GameState::new("listen");

    let seq1: Vec<_> = (0..10)
        .map(|_| validator1.apply_penalty(&state).score)
        .collect();
    let seq2: Vec<_> = (0..10)
        .map(|_| validator2.apply_penalty(&state).score)
        .collect();

    assert_eq!(seq1, seq2);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_root_word_always_rejected(pad_left in "[ \t]{0,3}", pad_right in "[ \t\n]{0,3}", upper in any::<bool>()) {
        let validator = WordValidator::new(accept_all, 0);
        let state = GameState::new("listen");
        let word = if upper { "LISTEN" } else { "Listen" };
        let raw = format!("{pad_left}{word}{pad_right}");

        let (next, result) = validator.submit_word(&state, &raw).unwrap();

        prop_assert_eq!(result, SubmissionResult::RejectedSameAsRoot);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_used_word_rejected_as_duplicate(index in 0usize..3) {
        let validator = WordValidator::new(accept_all, 0);
        let played = ["silk", "worm", "milk"];
        let (state, _) = play(&validator, GameState::new("silkworm"), &played);

        let (next, result) = validator.submit_word(&state, played[index]).unwrap();

        prop_assert_eq!(result, SubmissionResult::RejectedDuplicate);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_blank_input_is_ignored(raw in "[ \t\r\n]{0,8}") {
        let validator = WordValidator::new(accept_all, 0);
        let state = GameState::new("listen");

        prop_assert!(validator.submit_word(&state, &raw).is_none());
    }

    #[test]
    fn prop_is_possible_order_independent(root in "[a-e]{1,8}", seed in any::<u64>()) {
        let mut letters: Vec<char> = root.chars().collect();
        let mut rng = word_scramble::GameRng::stream(seed, "letters");
        let take = rng.draw(0..letters.len() as i64 + 1) as usize;
        letters.truncate(take);
        letters.reverse();
        let word: String = letters.into_iter().collect();

        prop_assert!(is_possible(&word, &root));
    }

    #[test]
    fn prop_used_words_stay_unique(words in proptest::collection::vec("[a-d]{1,3}", 0..30)) {
        let validator = WordValidator::new(accept_all, 0);
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let (state, results) = play(&validator, GameState::new("abcdabcd"), &refs);

        let mut used: Vec<_> = state.used_words().iter().cloned().collect();
        let total = used.len();
        used.sort();
        used.dedup();
        prop_assert_eq!(used.len(), total);

        let accepted: i64 = results.iter().map(SubmissionResult::score_delta).sum();
        prop_assert_eq!(state.score, accepted);
    }

    #[test]
    fn prop_penalty_within_range(seed in any::<u64>(), score in -100i64..100) {
        let mut validator = WordValidator::new(accept_all, seed);
        let mut state = GameState::new("listen");
        state.score = score;

        let next = validator.apply_penalty(&state);
        let taken = score - next.score;

        prop_assert!((0..6).contains(&taken));
        prop_assert_eq!(next.sentiment, state.sentiment);
        prop_assert_eq!(next.indicator, ScoreIndicator::Negative);
    }
}
