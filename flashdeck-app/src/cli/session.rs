use anyhow::Result;
use flashdeck_core::{CardStore, CoreError, Verdict};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::console::Console;

const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// One interactive run: a card store, a transcript console, and the optional
/// deck paths from the command line.
pub struct Session<R, W> {
    console: Console<R, W>,
    store: CardStore,
    import_path: Option<PathBuf>,
    export_path: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        console: Console<R, W>,
        import_path: Option<PathBuf>,
        export_path: Option<PathBuf>,
    ) -> Self {
        Self {
            console,
            store: CardStore::new(),
            import_path,
            export_path,
        }
    }

    /// Runs the command loop until `exit`. Per-command failures are reported
    /// on the console and the loop keeps going; only console I/O itself (or a
    /// closed stdin) ends the session early.
    pub fn run(&mut self) -> Result<()> {
        if let Some(path) = self.import_path.take() {
            self.import_from(&path)?;
        }
        loop {
            self.console.emit(MENU)?;
            let command = self.console.read_line()?;
            match command.as_str() {
                "add" => self.add()?,
                "remove" => self.remove()?,
                "import" => self.import()?,
                "export" => self.export()?,
                "ask" => self.ask()?,
                "log" => self.save_log()?,
                "hardest card" => self.hardest()?,
                "reset stats" => self.reset()?,
                "exit" => {
                    self.exit()?;
                    return Ok(());
                }
                _ => {}
            }
            self.console.emit("")?;
        }
    }

    fn add(&mut self) -> Result<()> {
        self.console.emit("The Card:")?;
        let term = self.console.read_line()?;
        if self.store.contains_term(&term) {
            self.console
                .emit(&format!("The card \"{term}\" already exists."))?;
            return Ok(());
        }
        self.console.emit("The definition of the card:")?;
        let definition = self.console.read_line()?;
        match self.store.add(&term, &definition) {
            Ok(()) => self
                .console
                .emit(&format!("The pair (\"{term}\":\"{definition}\") has been added."))?,
            Err(CoreError::DuplicateDefinition(d)) => self
                .console
                .emit(&format!("The definition \"{d}\" already exists."))?,
            Err(CoreError::DuplicateTerm(t)) => self
                .console
                .emit(&format!("The card \"{t}\" already exists."))?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.console.emit("Which card?")?;
        let term = self.console.read_line()?;
        match self.store.remove(&term) {
            Ok(()) => self.console.emit("The card has been removed.")?,
            Err(CoreError::UnknownTerm(t)) => self
                .console
                .emit(&format!("Can't remove \"{t}\": there is no such card."))?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn import(&mut self) -> Result<()> {
        self.console.emit("File name:")?;
        let name = self.console.read_line()?;
        self.import_from(Path::new(&name))
    }

    fn import_from(&mut self, path: &Path) -> Result<()> {
        match self.store.import_file(path) {
            Ok(count) => self
                .console
                .emit(&format!("{count} cards have been loaded."))?,
            Err(CoreError::FileNotFound(_)) => self.console.emit("File not found.")?,
            Err(e @ (CoreError::TruncatedEntry(_) | CoreError::InvalidMistakeCount(_))) => {
                self.console.emit(&format!("Import failed: {e}."))?
            }
            Err(CoreError::Io(e)) => self.console.emit(&e.to_string())?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        self.console.emit("File name:")?;
        let name = self.console.read_line()?;
        self.export_to(Path::new(&name))
    }

    fn export_to(&mut self, path: &Path) -> Result<()> {
        match self.store.export_file(path) {
            Ok(count) => self
                .console
                .emit(&format!("{count} cards have been saved."))?,
            Err(CoreError::Io(e)) => self.console.emit(&e.to_string())?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn ask(&mut self) -> Result<()> {
        self.console.emit("How many times to ask?")?;
        let raw = self.console.read_line()?;
        let Ok(n) = raw.trim().parse::<usize>() else {
            self.console
                .emit(&format!("\"{raw}\" is not a number."))?;
            return Ok(());
        };
        if self.store.is_empty() {
            self.console.emit("There are no cards to ask about.")?;
            return Ok(());
        }
        for i in 0..n {
            let term = self.store.term_at(i)?.to_string();
            self.console
                .emit(&format!("Print the definition of \"{term}\":"))?;
            let answer = self.console.read_line()?;
            match self.store.answer(&term, &answer)? {
                Verdict::Correct => self.console.emit("Correct!")?,
                Verdict::Wrong {
                    correct,
                    cross_match: Some(other),
                } => self.console.emit(&format!(
                    "Wrong. The right answer is \"{correct}\", but your definition is correct for \"{other}\"."
                ))?,
                Verdict::Wrong {
                    correct,
                    cross_match: None,
                } => self
                    .console
                    .emit(&format!("Wrong. The right answer is \"{correct}\"."))?,
            }
        }
        Ok(())
    }

    fn save_log(&mut self) -> Result<()> {
        self.console.emit("File name:")?;
        let name = self.console.read_line()?;
        // The saved file ends at the file name line; the confirmation below
        // is only part of the live session.
        match self.console.persist(Path::new(&name)) {
            Ok(()) => self.console.emit("The log has been saved.")?,
            Err(e) => self.console.emit(&e.to_string())?,
        }
        Ok(())
    }

    fn hardest(&mut self) -> Result<()> {
        match self.store.hardest() {
            None => self.console.emit("There are no cards with errors.")?,
            Some((terms, max)) if terms.len() == 1 => self.console.emit(&format!(
                "The hardest card is \"{}\". You have {} errors answering it.",
                terms[0], max
            ))?,
            Some((terms, max)) => {
                let list = terms
                    .iter()
                    .map(|t| format!("\"{t}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.console.emit(&format!(
                    "The hardest cards are {list}. You have {max} errors answering them."
                ))?
            }
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.store.reset_stats();
        self.console.emit("Card statistics have been reset.")?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.console.emit("Bye bye!")?;
        if let Some(path) = self.export_path.take() {
            self.export_to(&path)?;
        }
        Ok(())
    }
}
