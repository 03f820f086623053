use rand::SeedableRng;
use rand::rngs::StdRng;
use snowman::cli::{
    CliInterface, check_and_mark_returning, parse_cli, resolve_phrases, returning_player_marker,
};
use snowman::dictionary::PhraseDictionary;
use snowman::game_state::game_loop;
use snowman::logging::init_logging;
use snowman::responses::Responses;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let config = match cli.game_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let returning =
        returning_player_marker().is_some_and(|marker| check_and_mark_returning(&marker));
    let config = config.with_returning_player(returning);

    let phrases = match resolve_phrases(cli.phrases_path.as_deref()) {
        Ok(phrases) => phrases,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (dictionary, mut responses) = match config.seed {
        Some(seed) => (
            PhraseDictionary::with_seed(phrases, seed),
            Responses::new(StdRng::seed_from_u64(seed.wrapping_add(1))),
        ),
        None => (
            PhraseDictionary::from_os_rng(phrases),
            Responses::new(StdRng::from_os_rng()),
        ),
    };
    let mut dictionary = match dictionary {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Cannot start a game: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} phrases", dictionary.phrase_count());

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(&mut dictionary, &config, &mut responses, &mut interface);
    ExitCode::SUCCESS
}
