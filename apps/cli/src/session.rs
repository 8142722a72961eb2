//! Interactive study session: the command loop and its handlers.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use deck_core::{quiz, Deck, DeckError, QuizOutcome, Sampler};

use crate::console::Console;
use crate::files;

const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Startup and shutdown options for a session.
#[derive(Debug, Default, Clone)]
pub struct Options {
    /// Card file to load before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Card file to save the deck to on exit.
    pub export_to: Option<PathBuf>,
}

/// One interactive study session over a single deck.
///
/// Every deck error and missing import file is reported as one line and the
/// loop keeps going; the session only ends on `exit` or end of input.
pub struct Session<R, W> {
    deck: Deck,
    sampler: Sampler,
    console: Console<R, W>,
    options: Options,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, sampler: Sampler, options: Options) -> Self {
        Self {
            deck: Deck::new(),
            sampler,
            console,
            options,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Run the command loop until `exit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if let Some(path) = self.options.import_from.take() {
            self.import_file(&path)?;
        }

        loop {
            let input = match self.console.prompt(MENU) {
                Ok(input) => input,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(err) => return Err(err.into()),
            };

            let command = input.trim();
            tracing::debug!(command, "dispatching");
            match command {
                "add" => self.handle_add()?,
                "remove" => self.handle_remove()?,
                "import" => self.handle_import()?,
                "export" => self.handle_export()?,
                "ask" => self.handle_ask()?,
                "log" => self.handle_log()?,
                "hardest card" => self.handle_hardest()?,
                "reset stats" => self.handle_reset()?,
                "exit" => {
                    self.console.say("Bye bye!")?;
                    if let Some(path) = self.options.export_to.take() {
                        let saved = files::export_to(&self.deck, &path)?;
                        self.console
                            .say(&format!("{saved} cards have been saved."))?;
                    }
                    return Ok(());
                }
                other => self
                    .console
                    .say(&format!("Unknown command: \"{other}\""))?,
            }
        }
    }

    fn handle_add(&mut self) -> anyhow::Result<()> {
        let term = self.console.prompt("The card:")?;
        let definition = self.console.prompt("The definition of the card:")?;

        match self.deck.add(term.clone(), definition.clone()) {
            Ok(()) => self
                .console
                .say(&format!("The pair (\"{term}\":\"{definition}\") has been added."))?,
            Err(DeckError::DuplicateTerm { term }) => self
                .console
                .say(&format!("The card \"{term}\" already exists."))?,
            Err(DeckError::DuplicateDefinition { definition }) => self
                .console
                .say(&format!("The definition \"{definition}\" already exists."))?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn handle_remove(&mut self) -> anyhow::Result<()> {
        let term = self.console.prompt("Which card?")?;
        match self.deck.remove(&term) {
            Ok(()) => self.console.say("The card has been removed.")?,
            Err(DeckError::NotFound { term }) => self
                .console
                .say(&format!("Can't remove \"{term}\": there is no such card."))?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn handle_import(&mut self) -> anyhow::Result<()> {
        let path = self.console.prompt("File name:")?;
        self.import_file(Path::new(&path))
    }

    fn import_file(&mut self, path: &Path) -> anyhow::Result<()> {
        match files::import_into(&mut self.deck, path) {
            Ok(summary) => {
                self.console
                    .say(&format!("{} cards have been loaded.", summary.loaded))?;
                if summary.skipped > 0 {
                    self.console
                        .say(&format!("Skipped {} malformed lines.", summary.skipped))?;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.console.say("File not found.")?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn handle_export(&mut self) -> anyhow::Result<()> {
        let path = self.console.prompt("File name:")?;
        let saved = files::export_to(&self.deck, Path::new(&path))?;
        self.console
            .say(&format!("{saved} cards have been saved."))?;
        Ok(())
    }

    fn handle_ask(&mut self) -> anyhow::Result<()> {
        let input = self.console.prompt("How many times to ask?")?;
        let count: usize = match input.trim().parse() {
            Ok(count) => count,
            Err(_) => {
                self.console
                    .say(&format!("Expected a number, got \"{input}\"."))?;
                return Ok(());
            }
        };

        for _ in 0..count {
            let Some(term) = self.sampler.pick(&self.deck) else {
                self.console.say("There are no cards to ask about.")?;
                break;
            };

            let answer = self
                .console
                .prompt(&format!("Print the definition of \"{term}\":"))?;

            match quiz::grade(&mut self.deck, &term, &answer)? {
                QuizOutcome::Correct => self.console.say("Correct!")?,
                QuizOutcome::Wrong { correct } => self
                    .console
                    .say(&format!("Wrong. The right answer is \"{correct}\"."))?,
                QuizOutcome::MatchesOtherCard {
                    correct,
                    matched_term,
                } => self.console.say(&format!(
                    "Wrong. The right answer is \"{correct}\", but your definition is correct for \"{matched_term}\"."
                ))?,
            }
        }
        Ok(())
    }

    fn handle_log(&mut self) -> anyhow::Result<()> {
        let path = self.console.prompt("File name:")?;
        let mut file = File::create(&path)?;
        self.console.log().flush_to(&mut file)?;
        self.console.say("The log has been saved.")?;
        Ok(())
    }

    fn handle_hardest(&mut self) -> anyhow::Result<()> {
        let line = {
            let hardest = self.deck.hardest();
            match hardest.as_slice() {
                [] => "There are no cards with errors.".to_string(),
                [card] => format!(
                    "The hardest card is \"{}\". You have {} errors answering it.",
                    card.term, card.error_count
                ),
                cards => {
                    let terms = cards
                        .iter()
                        .map(|c| format!("\"{}\"", c.term))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!(
                        "The hardest cards are {terms}. You have {} errors answering them.",
                        cards[0].error_count
                    )
                }
            }
        };
        self.console.say(&line)?;
        Ok(())
    }

    fn handle_reset(&mut self) -> anyhow::Result<()> {
        self.deck.reset_stats();
        self.console.say("The card statistics have been reset.")?;
        Ok(())
    }
}
