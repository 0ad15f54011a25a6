use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::{Feedback, LetterScore, Word, WordCollection, is_well_formed};
use wordle_game::game::{GameConfig, GameSession, GameState, SessionClosed, select_target};
use wordle_game::wordlists::{FALLBACK, words_from_slice};

fn word(text: &str) -> Word {
    Word::new(text, text.len()).unwrap()
}

fn fallback_collection() -> WordCollection {
    WordCollection::new(words_from_slice(FALLBACK, 5), 5).unwrap()
}

#[test]
fn test_selected_targets_are_members() {
    let words = fallback_collection();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..500 {
        let target = select_target(&words, &mut rng);
        assert!(words.contains(target));
    }
}

#[test]
fn test_self_guess_is_all_exact() {
    for text in ["table", "grape", "speed", "aaaaa"] {
        let w = word(text);
        assert!(Feedback::evaluate(&w, &w).is_all_exact());
    }
}

#[test]
fn test_feedback_table_vs_peach() {
    let feedback = Feedback::evaluate(&word("table"), &word("peach"));
    assert_eq!(
        feedback.scores(),
        &[
            LetterScore::Absent,
            LetterScore::Present,
            LetterScore::Present,
            LetterScore::Absent,
            LetterScore::Absent,
        ]
    );
    assert_eq!(feedback.marks(&word("peach")), "_ea__");
}

#[test]
fn test_feedback_table_vs_water() {
    let feedback = Feedback::evaluate(&word("table"), &word("water"));
    assert_eq!(
        feedback.scores(),
        &[
            LetterScore::Absent,
            LetterScore::Exact,
            LetterScore::Present,
            LetterScore::Present,
            LetterScore::Absent,
        ]
    );
    assert_eq!(feedback.marks(&word("water")), "_Ate_");
}

#[test]
fn test_duplicate_letters_consume_target_counts() {
    // One E in the target, two off-position Es in the guess: one credit
    let feedback = Feedback::evaluate(&word("blame"), &word("eject"));
    assert_eq!(feedback.count_present(), 1);
    assert_eq!(feedback.count_exact(), 0);
}

#[test]
fn test_validator_scenarios() {
    assert!(!is_well_formed("grapes", 5)); // wrong length
    assert!(!is_well_formed("gr4pe", 5)); // non-alphabetic
    assert!(is_well_formed("GRAPE", 5)); // case-insensitive
}

#[test]
fn test_session_lost_after_max_attempts_reveals_target() {
    let mut session = GameSession::new(word("table"), GameConfig::default());
    let guesses = ["grape", "melon", "lemon", "berry", "peach", "plumb"];

    for (i, guess) in guesses.iter().enumerate() {
        assert_eq!(session.target_word(), None);
        let report = session.submit_guess(guess).unwrap();
        assert_eq!(report.attempts_used, u32::try_from(i).unwrap() + 1);
    }

    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.target_word(), Some("table"));
}

#[test]
fn test_session_wins_immediately_on_target() {
    for attempt_of_win in 1..=6 {
        let mut session = GameSession::new(word("table"), GameConfig::default());

        for _ in 1..attempt_of_win {
            session.submit_guess("grape").unwrap();
        }
        let report = session.submit_guess("table").unwrap();

        assert_eq!(report.state, GameState::Won);
        assert_eq!(report.attempts_used, attempt_of_win);
        assert_eq!(session.target_word(), Some("table"));
        assert_eq!(session.submit_guess("grape"), Err(SessionClosed));
    }
}

#[test]
fn test_invalid_guesses_never_consume_attempts() {
    let mut session = GameSession::new(word("table"), GameConfig::default());

    for _ in 0..20 {
        let report = session.submit_guess("not-a-word").unwrap();
        assert_eq!(report.feedback, None);
        assert_eq!(report.attempts_used, 0);
    }

    assert_eq!(session.state(), GameState::InProgress);
    assert_eq!(session.attempts_used(), 0);
}

#[test]
fn test_custom_rules_session() {
    let config = GameConfig {
        word_length: 4,
        max_attempts: 2,
    };
    let mut session = GameSession::new(Word::new("pear", 4).unwrap(), config);

    assert_eq!(
        session.submit_guess("mint").unwrap().state,
        GameState::InProgress
    );
    assert_eq!(session.submit_guess("rope").unwrap().state, GameState::Lost);
    assert_eq!(session.target_word(), Some("pear"));
}

#[test]
fn test_full_game_against_fallback_list() {
    let words = fallback_collection();
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = GameSession::start(&words, GameConfig::default(), &mut rng);

    // Guessing every candidate in order must finish the game one way or the
    // other within the attempt budget
    let mut outcome = GameState::InProgress;
    for candidate in words.words() {
        let report = session.submit_guess(candidate.text()).unwrap();
        outcome = report.state;
        if outcome.is_terminal() {
            break;
        }
    }

    assert!(outcome.is_terminal());
    assert!(session.target_word().is_some());
}
