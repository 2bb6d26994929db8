//! Menu loop: reads commands, calls into the card collection and prints results.

use crate::console::Console;
use crate::storage;
use cardset::{hardest_cards, CardCollection, FlashcardError, QuizSession, Verdict};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    deck: CardCollection,
    console: Console<R, W>,
    export_on_exit: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            deck: CardCollection::new(),
            console,
            export_on_exit: None,
        }
    }

    pub fn set_export_on_exit(&mut self, path: PathBuf) {
        self.export_on_exit = Some(path);
    }

    /// Show a message in the console; used for startup warnings.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        self.console.println(text)
    }

    /// Load a card file before the menu starts.
    pub fn preload(&mut self, path: &Path) -> io::Result<()> {
        self.load(path)?;
        self.console.newline()
    }

    /// Run the menu until `exit` or end of input, then auto-export.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.print(&format!("{}\n", MENU))?;
            let Some(command) = self.console.read_line()? else {
                break;
            };
            if self.dispatch(&command)? == Flow::Exit {
                break;
            }
            self.console.newline()?;
        }

        self.console.println("Bye bye!")?;
        if let Some(path) = self.export_on_exit.clone() {
            self.save(&path)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn deck(&self) -> &CardCollection {
        &self.deck
    }

    fn dispatch(&mut self, command: &str) -> io::Result<Flow> {
        tracing::debug!(command, "menu command");
        match command.to_lowercase().as_str() {
            "add" => self.add(),
            "remove" => self.remove(),
            "import" => self.import(),
            "export" => self.export(),
            "ask" => self.ask(),
            "log" => self.log(),
            "hardest card" => self.hardest_card().map(|_| Flow::Continue),
            "reset stats" => self.reset_stats().map(|_| Flow::Continue),
            "exit" => Ok(Flow::Exit),
            _ => {
                self.console
                    .println("Invalid input for menu. Please only enter listed menu actions.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(term) = self.console.prompt("The card:")? else {
            return Ok(Flow::Exit);
        };
        if self.deck.find_by_term(&term).is_some() {
            self.console
                .println(&format!("The card \"{}\" already exists.", term))?;
            return Ok(Flow::Continue);
        }

        let Some(definition) = self.console.prompt("The definition of the card:")? else {
            return Ok(Flow::Exit);
        };
        match self.deck.add(&term, &definition, 0) {
            Ok(()) => self.console.println(&format!(
                "The pair (\"{}\":\"{}\") has been added.",
                term, definition
            ))?,
            Err(FlashcardError::DuplicateDefinition(_)) => self.console.println(&format!(
                "The definition \"{}\" already exists.",
                definition
            ))?,
            Err(e) => self.console.println(&format!("ERROR: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let Some(term) = self.console.prompt("The card:")? else {
            return Ok(Flow::Exit);
        };
        match self.deck.remove(&term) {
            Ok(_) => self.console.println("The card has been removed.")?,
            Err(_) => self.console.println(&format!(
                "Can't remove \"{}\": there is no such card.",
                term
            ))?,
        }
        Ok(Flow::Continue)
    }

    fn import(&mut self) -> io::Result<Flow> {
        let Some(path) = self.console.prompt("File name:")? else {
            return Ok(Flow::Exit);
        };
        self.load(Path::new(&path))?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<Flow> {
        let Some(path) = self.console.prompt("File name:")? else {
            return Ok(Flow::Exit);
        };
        self.save(Path::new(&path))?;
        Ok(Flow::Continue)
    }

    fn ask(&mut self) -> io::Result<Flow> {
        let Some(reply) = self.console.prompt("How many times to ask?")? else {
            return Ok(Flow::Exit);
        };
        let Ok(questions) = reply.parse::<usize>() else {
            self.console
                .println("Please enter the number of questions as a non-negative whole number.")?;
            return Ok(Flow::Continue);
        };

        let mut quiz = QuizSession::new(questions);
        loop {
            let term = match quiz.next_question(&self.deck) {
                Ok(Some(card)) => card.term().to_string(),
                Ok(None) => break,
                Err(_) => {
                    self.console.println("There are no cards to ask about.")?;
                    break;
                }
            };

            let Some(answer) = self
                .console
                .prompt(&format!("Print the definition of \"{}\":", term))?
            else {
                return Ok(Flow::Exit);
            };

            let verdict = match quiz.answer(&mut self.deck, &answer) {
                Ok(verdict) => verdict,
                Err(e) => {
                    self.console.println(&format!("ERROR: {}", e))?;
                    break;
                }
            };
            self.console.println(&describe(&verdict))?;
        }
        Ok(Flow::Continue)
    }

    fn log(&mut self) -> io::Result<Flow> {
        let Some(path) = self.console.prompt("File name:")? else {
            return Ok(Flow::Exit);
        };
        match storage::write_log(Path::new(&path), &self.console.transcript()) {
            Ok(()) => self.console.println("The log has been saved.")?,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "log not written");
                self.console
                    .println(&format!("ERROR: could not write the log to \"{}\": {}", path, e))?
            }
        }
        Ok(Flow::Continue)
    }

    fn hardest_card(&mut self) -> io::Result<()> {
        let hardest = hardest_cards(&self.deck);
        let message = match hardest.terms().as_slice() {
            [] => "There are no cards with errors.".to_string(),
            [term] => format!(
                "The hardest card is \"{}\". You have {} errors answering it.",
                term, hardest.mistakes
            ),
            terms => format!(
                "The hardest cards are {}. You have {} errors answering them.",
                terms
                    .iter()
                    .map(|t| format!("\"{}\"", t))
                    .collect::<Vec<_>>()
                    .join(", "),
                hardest.mistakes
            ),
        };
        self.console.println(&message)
    }

    fn reset_stats(&mut self) -> io::Result<()> {
        self.deck.reset_mistakes();
        self.console.println("Card statistics has been reset.")
    }

    fn load(&mut self, path: &Path) -> io::Result<()> {
        if !path.exists() {
            return self.console.println("File not found.");
        }
        match storage::import_file(&mut self.deck, path) {
            Ok(report) => {
                if let Some(e) = report.error {
                    tracing::warn!(path = %path.display(), error = %e, "import incomplete");
                    self.console
                        .println(&format!("ERROR: {}. Import incomplete.", e))?;
                }
                self.console
                    .println(&format!("{} cards have been loaded.", report.imported))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "import failed");
                self.console
                    .println(&format!("ERROR: {}. Import unsuccessful.", e))?;
                self.console.println("0 cards have been loaded.")
            }
        }
    }

    fn save(&mut self, path: &Path) -> io::Result<()> {
        let saved = match storage::export_file(&self.deck, path) {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "export failed");
                self.console.println(&format!(
                    "ERROR: could not write to \"{}\": {}",
                    path.display(),
                    e
                ))?;
                0
            }
        };
        self.console
            .println(&format!("{} cards have been saved.", saved))
    }
}

fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct => "Correct answer".to_string(),
        Verdict::WrongButValidElsewhere {
            expected,
            other_term,
        } => format!(
            "Wrong answer. The correct one is \"{}\", you've just written the definition of \"{}\".",
            expected, other_term
        ),
        Verdict::WrongNoMatch { expected } => {
            format!("Wrong answer. The correct one is \"{}\".", expected)
        }
    }
}
