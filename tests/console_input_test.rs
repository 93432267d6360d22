//! Tests for the console collaborator driving interactive roles.

use strictly_mastermind::{
    AnyBoard, ConsoleInput, FixedMaker, GuessInput, HumanInput, InteractiveBreaker,
    InteractiveMaker, MatchController, MatchSettings, Outcome, Peg, Sequence,
};

fn console(input: &'static str) -> ConsoleInput<&'static [u8], Vec<u8>> {
    ConsoleInput::new(input.as_bytes(), Vec::new())
}

fn in_play_snapshot() -> strictly_mastermind::BoardSnapshot {
    let mut board = AnyBoard::new(&MatchSettings::default()).expect("Valid settings");
    board
        .install_secret("RGBY".parse().expect("Valid sequence"))
        .expect("Valid secret");
    board.snapshot()
}

#[tokio::test]
async fn test_guess_accepts_initials_names_and_indices() {
    let snapshot = in_play_snapshot();

    let mut input = console("rgby\n");
    let expected = Sequence::new(vec![Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow]);
    assert_eq!(
        input.read_guess(&snapshot).await.expect("Guess"),
        GuessInput::Guess(expected.clone())
    );

    let mut input = console("red green blue yellow\n");
    assert_eq!(
        input.read_guess(&snapshot).await.expect("Guess"),
        GuessInput::Guess(expected.clone())
    );

    let mut input = console("1 2 3 4\n");
    assert_eq!(
        input.read_guess(&snapshot).await.expect("Guess"),
        GuessInput::Guess(expected)
    );
}

#[tokio::test]
async fn test_malformed_guesses_are_reprompted() {
    let snapshot = in_play_snapshot();
    let mut input = console("rgb\nrgbw\nxyzz\n\nrrrr\n");

    let guess = input.read_guess(&snapshot).await.expect("Guess");
    assert_eq!(guess, GuessInput::Guess(Sequence::new(vec![Peg::Red; 4])));

    let out = String::from_utf8(input.into_writer()).expect("Utf8 output");
    assert!(out.contains("Sequence has 3 pegs, expected 4. Try again."));
    assert!(out.contains("White is not in the palette of 6 colours. Try again."));
    assert_eq!(out.matches("Try again.").count(), 4);
}

#[tokio::test]
async fn test_quit_gives_up() {
    let snapshot = in_play_snapshot();
    let mut input = console("QUIT\n");
    assert_eq!(
        input.read_guess(&snapshot).await.expect("Quit"),
        GuessInput::Quit
    );
}

#[tokio::test]
async fn test_secret_respects_repeat_rule() {
    let settings = MatchSettings::default().with_allow_repeats(false);
    let mut input = console("rrgg\nrgby\n");

    let secret = input.read_secret(&settings).await.expect("Secret");
    assert_eq!(secret.to_string(), "RGBY");

    let out = String::from_utf8(input.into_writer()).expect("Utf8 output");
    assert!(out.contains("Red appears more than once"));
}

#[tokio::test]
async fn test_secret_scrolls_off_screen() {
    let mut input = console("rgby\n");
    input
        .read_secret(&MatchSettings::default())
        .await
        .expect("Secret");

    let out = String::from_utf8(input.into_writer()).expect("Utf8 output");
    let warning = out.find("Breaker, look away.").expect("Warning shown");
    let locked = out.find("Secret locked in.").expect("Confirmation shown");
    assert!(warning < locked);
    assert!(out[warning..locked].matches('\n').count() >= 40);
    assert!(!out.contains("RGBY"));
}

#[tokio::test]
async fn test_secret_input_closed() {
    let mut input = console("rg\n");
    assert!(input.read_secret(&MatchSettings::default()).await.is_err());
}

#[tokio::test]
async fn test_ask_settings_reprompts_until_valid() {
    let current = MatchSettings::default().with_allow_repeats(false);
    // 5 pegs without repeats cannot come from 3 colours, so the second round is kept.
    let mut input = console("12\n5\n3\n6\n5\n8\n");

    let settings = input.ask_settings(&current).await.expect("Settings");
    assert_eq!(*settings.max_attempts(), 6);
    assert_eq!(*settings.sequence_length(), 5);
    assert_eq!(*settings.palette_size(), 8);
    assert!(!*settings.allow_repeats());
}

#[tokio::test]
async fn test_human_breaker_plays_a_match() {
    let settings = MatchSettings::default();
    let secret: Sequence = "RGBY".parse().expect("Valid sequence");
    let mut controller = MatchController::new(
        Box::new(FixedMaker::new("Fixed", secret)),
        Box::new(InteractiveBreaker::new("You", console("bbbb\nrgyb\nrgby\n"))),
    );

    let finished = controller.run(&settings).await.expect("Match completes");
    assert_eq!(finished.outcome(), &Outcome::BreakerWon { attempts: 3 });
}

#[tokio::test]
async fn test_human_maker_and_quitting_breaker() {
    let settings = MatchSettings::default();
    let mut controller = MatchController::new(
        Box::new(InteractiveMaker::new("Maker", console("oooo\n"))),
        Box::new(InteractiveBreaker::new("Breaker", console("q\n"))),
    );

    let finished = controller.run(&settings).await.expect("Match completes");
    assert!(finished.outcome().is_concession());
    assert_eq!(finished.attempts_inserted(), 0);
    assert_eq!(finished.secret().to_string(), "OOOO");
}
