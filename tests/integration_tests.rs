// Integration tests for the snowman game
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use snowman::cli::CliInterface;
use snowman::*;
use std::collections::{BTreeSet, HashSet};
use std::io::Cursor;

fn seeded_responses() -> Responses {
    Responses::new(StdRng::seed_from_u64(17))
}

#[test]
fn test_end_to_end_win_by_letters() {
    // Single-phrase catalog so the secret is known up front
    let mut dictionary = PhraseDictionary::with_seed(vec!["Dog".to_string()], 1).unwrap();
    let mut responses = seeded_responses();
    let input = "d\no\ng\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let stats = game_loop(&mut dictionary, &GameConfig::default(), &mut responses, &mut interface);
    assert_eq!(stats, SessionStats { won: 1, lost: 0 });
}

#[test]
fn test_end_to_end_loss_then_win() {
    let mut dictionary = PhraseDictionary::with_seed(vec!["CAT".to_string()], 1).unwrap();
    let mut responses = seeded_responses();
    // Four misses build the whole snowman, then a fresh round is won outright
    let input = "z\nq\nx\nw\nnext\ncat\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let stats = game_loop(&mut dictionary, &GameConfig::default(), &mut responses, &mut interface);
    assert_eq!(stats, SessionStats { won: 1, lost: 1 });
}

#[test]
fn test_end_to_end_whitespace_and_blank_lines() {
    let mut dictionary = PhraseDictionary::with_seed(vec!["SHE SELLS".to_string()], 1).unwrap();
    let mut responses = seeded_responses();
    let input = "\n   \n  she sells  \n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let stats = game_loop(&mut dictionary, &GameConfig::default(), &mut responses, &mut interface);
    assert_eq!(stats.won, 1);
}

#[test]
fn test_custom_phrase_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let phrases_path = std::env::temp_dir().join("snowman_test_custom_phrases.txt");
    {
        let mut file = File::create(&phrases_path).unwrap();
        writeln!(file, "# tongue twisters").unwrap();
        writeln!(file, "Red lorry").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Yellow lorry").unwrap();
    }

    let phrases = load_phrases_from_file(&phrases_path).unwrap();
    assert_eq!(phrases, vec!["Red lorry", "Yellow lorry"]);

    let mut dictionary = PhraseDictionary::with_seed(phrases, 5).unwrap();
    let drawn: HashSet<String> = (0..2).map(|_| dictionary.get_phrase()).collect();
    assert_eq!(drawn.len(), 2);

    std::fs::remove_file(&phrases_path).unwrap();
}

#[test]
fn test_empty_phrase_file_fails_fast() {
    let phrases = load_phrases_from_str("# nothing here\n\n");
    let result = PhraseDictionary::with_seed(phrases, 1);
    assert!(matches!(result, Err(SnowmanError::EmptyCatalog)));
}

#[test]
fn test_every_embedded_phrase_solvable_by_letters() {
    let phrases = load_phrases_from_str(snowman::dictionary::EMBEDDED_PHRASES);
    let mut dictionary = PhraseDictionary::with_seed(phrases.clone(), 8).unwrap();

    for _ in 0..phrases.len() {
        let text = dictionary.get_phrase();
        let mut phrase = Phrase::new(&text);
        let letters: BTreeSet<char> =
            phrase.secret().chars().filter(|c| c.is_alphabetic()).collect();

        let mut outcome = None;
        for letter in letters {
            let result = phrase.submit_guess(&letter.to_string());
            assert!(result.accepted);
            outcome = Some(result);
        }
        let outcome = outcome.unwrap();
        assert!(outcome.complete, "{text}");
        assert_eq!(outcome.display, text.to_uppercase());
    }
}

#[test]
fn test_dictionary_cycle_covers_catalog_exactly_once() {
    let catalog: Vec<String> = ["CAT", "DOG", "EMU", "GNU", "YAK"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut dictionary = PhraseDictionary::with_seed(catalog.clone(), 21).unwrap();

    for _ in 0..3 {
        let cycle: Vec<String> =
            (0..catalog.len()).map(|_| dictionary.get_phrase()).collect();
        let unique: HashSet<&String> = cycle.iter().collect();
        assert_eq!(unique.len(), catalog.len());
        assert!(cycle.iter().all(|p| catalog.contains(p)));
    }
}

#[test]
fn test_wrong_letter_leaves_display_unchanged() {
    let mut phrase = Phrase::new("CAT");
    let before = phrase.display().to_string();
    let outcome = phrase.submit_guess("Z");
    assert_eq!(
        outcome,
        GuessOutcome {
            accepted: false,
            complete: false,
            display: before
        }
    );
    assert_eq!(phrase.state(), PhraseState::InProgress);
}

#[test]
fn test_round_with_explicit_budget() {
    let config = GameConfig::new(1, StageCounting::Cumulative, None).unwrap();
    let mut round = Round::new("CAT", &config);
    assert_eq!(
        round.guess("dog"),
        RoundEvent::Lost {
            phrase: "CAT".to_string()
        }
    );
}

#[test]
fn test_phrase_with_punctuation_round_trip() {
    let mut phrase = Phrase::new("The sixth sick sheik's sixth sheep's sick.");
    assert!(phrase.display().ends_with("'_ ____."));
    let outcome = phrase.submit_guess("the sixth sick SHEIK'S sixth sheep's sick.");
    assert!(outcome.complete);
}

#[test]
fn test_letter_free_file_lines_never_reach_a_round() {
    let phrases = load_phrases_from_str("1 2 3\n---\nCAT\n");
    let mut dictionary = PhraseDictionary::with_seed(phrases, 4).unwrap();
    let mut round = Round::new(&dictionary.get_phrase(), &GameConfig::default());

    // A wrong letter must not win the round
    assert!(matches!(round.guess("Z"), RoundEvent::Wrong { .. }));
    assert!(!round.is_over());
}
