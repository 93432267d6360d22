//! Console collaborator for human roles.
//!
//! Reads lines from any async reader and writes prompts to any async
//! writer, so the binary wires it to stdin/stdout and tests to byte
//! buffers. Malformed input is reported and asked again; the board only
//! ever sees well-formed sequences from here.

use crate::games::mastermind::{
    BoardFinished, BoardSnapshot, Peg, Sequence, SequenceRole, check_sequence,
};
use crate::players::{GuessInput, HumanInput};
use crate::settings::{
    MAX_PALETTE_SIZE, MAX_SEQUENCE_LENGTH, MIN_ATTEMPTS, MIN_PALETTE_SIZE, MIN_SEQUENCE_LENGTH,
    MatchSettings,
};
use anyhow::Result;
use crossterm::style::{Color, Stylize};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{debug, instrument};

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Blank lines printed after a secret is typed, pushing it off a shared screen.
const SECRET_SCROLL: usize = 40;

/// Line-oriented console.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl ConsoleInput<BufReader<Stdin>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleInput<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a console without colours.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: false,
        }
    }

    /// Enables or disables coloured pegs.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes text and flushes.
    pub async fn say(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            anyhow::bail!("Input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Asks a yes/no question until answered.
    #[instrument(skip(self))]
    pub async fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            self.say(&format!("{} [y/n]\n> ", question)).await?;
            match self.read_line().await?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.\n").await?,
            }
        }
    }

    /// Asks for a number in `min..=max` until one is given.
    #[instrument(skip(self))]
    pub async fn ask_number(&mut self, question: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            self.say(&format!("{} [{}-{}]\n> ", question, min, max)).await?;
            match self.read_line().await?.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => {
                    self.say(&format!("Please enter a number between {} and {}.\n", min, max))
                        .await?
                }
            }
        }
    }

    /// Asks for new attempts, length and palette until they form valid settings.
    #[instrument(skip(self, current))]
    pub async fn ask_settings(&mut self, current: &MatchSettings) -> Result<MatchSettings> {
        loop {
            let attempts = self
                .ask_number("Number of attempts", MIN_ATTEMPTS, 99)
                .await?;
            let length = self
                .ask_number(
                    "Length of peg sequences",
                    MIN_SEQUENCE_LENGTH,
                    MAX_SEQUENCE_LENGTH,
                )
                .await?;
            let palette = self
                .ask_number("Number of colours", MIN_PALETTE_SIZE, MAX_PALETTE_SIZE)
                .await?;

            let settings = current
                .clone()
                .with_max_attempts(attempts)
                .with_sequence_length(length)
                .with_palette_size(palette);
            match settings.validate() {
                Ok(()) => return Ok(settings),
                Err(e) => self.say(&format!("{}\n", e.message)).await?,
            }
        }
    }

    /// Pegs as coloured initials.
    pub fn render_sequence(&self, seq: &Sequence) -> String {
        seq.iter().map(|peg| self.paint(*peg)).collect()
    }

    fn paint(&self, peg: Peg) -> String {
        let initial = peg.initial().to_string();
        if self.color {
            initial.with(peg_color(peg)).bold().to_string()
        } else {
            initial
        }
    }

    /// Legend mapping palette positions to colours.
    pub fn palette_legend(&self, settings: &MatchSettings) -> String {
        settings
            .palette()
            .iter()
            .enumerate()
            .map(|(i, peg)| format!("{}={} {}", i + 1, self.paint(*peg), peg.label()))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// The board as a table, secret masked until finished.
    pub fn render_board(&self, board: &BoardSnapshot) -> String {
        let length = *board.settings().sequence_length();
        let width = length.max(5);
        let secret = match board.secret() {
            Some(secret) => self.render_sequence(secret),
            None => "?".repeat(length),
        };

        let mut out = format!("Secret: {}\n", secret);
        out.push_str(&format!(
            " #  {:<width$}  Exact  Colour\n",
            "Guess",
            width = width
        ));
        for (i, attempt) in board.attempts().iter().enumerate() {
            let pad = " ".repeat(width - attempt.guess().len());
            out.push_str(&format!(
                "{:>2}  {}{}  {:>5}  {:>6}\n",
                i + 1,
                self.render_sequence(attempt.guess()),
                pad,
                attempt.feedback().exact(),
                attempt.feedback().color_only()
            ));
        }
        out.push_str(&format!(
            "{} of {} attempts left\n",
            board.left_attempts(),
            board.settings().max_attempts()
        ));
        out
    }

    /// Prints the board.
    pub async fn show_board(&mut self, board: &BoardSnapshot) -> Result<()> {
        let text = self.render_board(board);
        self.say(&format!("\n{}", text)).await
    }

    /// Prints the final board and the closing message.
    pub async fn show_result(&mut self, finished: &BoardFinished) -> Result<()> {
        self.show_board(&finished.snapshot()).await?;
        let message = format!(
            "\n{} The secret was {}.\n\n",
            finished.outcome(),
            self.render_sequence(finished.secret())
        );
        self.say(&message).await
    }

    /// Prompts until a well-formed sequence (or, if allowed, a quit) arrives.
    async fn prompt_sequence(
        &mut self,
        settings: &MatchSettings,
        role: SequenceRole,
        allow_quit: bool,
    ) -> Result<Option<Sequence>> {
        let prompt = if allow_quit {
            format!(
                "Enter {} pegs ({}), or 'quit' to give up\n> ",
                settings.sequence_length(),
                self.palette_legend(settings)
            )
        } else {
            format!(
                "Enter {} pegs ({})\n> ",
                settings.sequence_length(),
                self.palette_legend(settings)
            )
        };

        loop {
            self.say(&prompt).await?;
            let line = self.read_line().await?;

            if allow_quit && QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
                return Ok(None);
            }

            let checked = Sequence::parse(&line, *settings.palette_size())
                .map_err(|e| e.to_string())
                .and_then(|seq| {
                    check_sequence(settings, &seq, role)
                        .map(|_| seq)
                        .map_err(|e| e.to_string())
                });

            match checked {
                Ok(seq) => return Ok(Some(seq)),
                Err(reason) => {
                    debug!(%reason, "Rejected input");
                    self.say(&format!("{}. Try again.\n", reason)).await?;
                }
            }
        }
    }
}

fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Green => Color::Green,
        Peg::Blue => Color::Blue,
        Peg::Yellow => Color::Yellow,
        Peg::Orange => Color::Rgb {
            r: 255,
            g: 140,
            b: 0,
        },
        Peg::Purple => Color::Magenta,
        Peg::Cyan => Color::Cyan,
        Peg::White => Color::White,
    }
}

#[async_trait::async_trait]
impl<R, W> HumanInput for ConsoleInput<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_secret(&mut self, settings: &MatchSettings) -> Result<Sequence> {
        self.say("\nMaker, choose the secret. Breaker, look away.\n")
            .await?;
        match self
            .prompt_sequence(settings, SequenceRole::Secret, false)
            .await?
        {
            Some(secret) => {
                self.say(&format!("{}Secret locked in.\n", "\n".repeat(SECRET_SCROLL)))
                    .await?;
                Ok(secret)
            }
            None => anyhow::bail!("No secret entered"),
        }
    }

    async fn read_guess(&mut self, board: &BoardSnapshot) -> Result<GuessInput> {
        self.show_board(board).await?;
        let guess = self
            .prompt_sequence(board.settings(), SequenceRole::Guess, true)
            .await?;
        Ok(match guess {
            Some(guess) => GuessInput::Guess(guess),
            None => GuessInput::Quit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::AnyBoard;

    fn console(input: &'static str) -> ConsoleInput<&'static [u8], Vec<u8>> {
        ConsoleInput::new(input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_yes_no_reprompts() {
        let mut console = console("maybe\nY\n");
        assert!(console.ask_yes_no("Again?").await.unwrap());
        let out = String::from_utf8(console.into_writer()).unwrap();
        assert!(out.contains("Please answer y or n."));
    }

    #[tokio::test]
    async fn test_number_out_of_range_reprompts() {
        let mut console = console("0\nabc\n12\n3\n");
        assert_eq!(console.ask_number("Length", 1, 10).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_closed_input_is_error() {
        let mut console = console("");
        assert!(console.ask_yes_no("Again?").await.is_err());
    }

    #[test]
    fn test_board_masks_secret() {
        let console = console("");
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        board
            .install_secret(Sequence::new(vec![Peg::Red; 4]))
            .unwrap();
        board
            .record_attempt(Sequence::new(vec![Peg::Red, Peg::Blue, Peg::Blue, Peg::Blue]))
            .unwrap();

        let text = console.render_board(&board.snapshot());
        assert!(text.starts_with("Secret: ????\n"));
        assert!(text.contains("RBBB"));
        assert!(text.contains("8 of 9 attempts left"));
    }

    #[test]
    fn test_plain_legend() {
        let console = console("");
        let settings = MatchSettings::default().with_palette_size(3);
        assert_eq!(
            console.palette_legend(&settings),
            "1=R Red  2=G Green  3=B Blue"
        );
    }
}
