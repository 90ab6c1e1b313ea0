//! # Logging Session
//!
//! The session is the view layer: a placeholder hint, a prompt, and a count label.
//!
//! Each input line is either a note or a session command:
//!
//! | Input        | Effect                                   |
//! |--------------|------------------------------------------|
//! | `text`       | logs `text` (an empty line logs `""`)    |
//! | `::text`     | logs `:text`                             |
//! | `:list`/`:ls`| prints every entry                       |
//! | `:count`     | prints the count label                   |
//! | `:status`    | prints note/timestamp alignment          |
//! | `:help`/`:h` | prints this table                        |
//! | `:quit`/`:q` | ends the session                         |
//!
//! The count label is redrawn whenever the store reports a write, through a
//! subscription held for the lifetime of the session.

use super::render::{render_count, render_entries, render_messages, render_placeholder};
use notelog::api::NotelogApi;
use notelog::error::Result;
use notelog::store::{DataStore, StoreEvent};
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

const PROMPT: &str = "> ";

const SESSION_HELP: &str = "\
Type a line and press Enter to log it.
  :list     show logged activities (also :ls)
  :count    show the count
  :status   show note/timestamp alignment
  :help     show this help (also :h)
  :quit     end the session (also :q or end of input)
  ::text    log a note that starts with ':'
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Note(String),
    Command(SessionCommand),
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Count,
    Status,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> SessionInput {
    if let Some(escaped) = line.strip_prefix("::") {
        return SessionInput::Note(format!(":{}", escaped));
    }
    let Some(word) = line.strip_prefix(':') else {
        return SessionInput::Note(line.to_string());
    };
    match word.trim() {
        "list" | "ls" => SessionInput::Command(SessionCommand::List),
        "count" => SessionInput::Command(SessionCommand::Count),
        "status" => SessionInput::Command(SessionCommand::Status),
        "help" | "h" => SessionInput::Command(SessionCommand::Help),
        "quit" | "q" => SessionInput::Command(SessionCommand::Quit),
        other => SessionInput::Unknown(other.to_string()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Print a prompt before each read; only useful when a person is typing
    pub interactive: bool,
    pub placeholder: Option<String>,
    pub summary: bool,
}

pub struct Session<'a, S: DataStore> {
    api: &'a mut NotelogApi<S>,
    options: SessionOptions,
    /// Set by the store subscription, cleared when the count is redrawn
    stale: Rc<Cell<bool>>,
}

impl<'a, S: DataStore> Session<'a, S> {
    pub fn new(api: &'a mut NotelogApi<S>, options: SessionOptions) -> Self {
        Self {
            api,
            options,
            stale: Rc::new(Cell::new(false)),
        }
    }

    /// Reads `input` until `:quit` or end of input. Returns the number of notes logged.
    ///
    /// The store subscription is released on every exit path, errors included.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let flag = Rc::clone(&self.stale);
        let subscription = self
            .api
            .subscribe(Box::new(move |_: &StoreEvent| flag.set(true)));

        let start = self.api.store().note_count();
        let outcome = self.read_loop(input, out);
        self.api.unsubscribe(subscription);
        outcome?;

        if self.options.summary {
            let result = self.api.list_notes();
            write!(out, "{}", render_entries(&result.entries))?;
        }
        out.flush()?;

        Ok(self.api.store().note_count() - start)
    }

    fn read_loop<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let placeholder = self
            .options
            .placeholder
            .clone()
            .unwrap_or_else(|| self.api.settings().placeholder.clone());
        write!(out, "{}", render_placeholder(&placeholder))?;
        self.write_count(out)?;

        let mut buf = Vec::new();
        loop {
            if self.options.interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Bytes that are not UTF-8 become U+FFFD instead of ending the session
            let line = String::from_utf8_lossy(&buf);
            let text = line.trim_end_matches(['\n', '\r']);

            match parse_line(text) {
                SessionInput::Note(note) => {
                    let result = self.api.add_note(note)?;
                    log::debug!("logged note {:?}", result.note_count);
                }
                SessionInput::Command(SessionCommand::List) => {
                    let result = self.api.list_notes();
                    write!(out, "{}", render_entries(&result.entries))?;
                }
                SessionInput::Command(SessionCommand::Count) => self.write_count(out)?,
                SessionInput::Command(SessionCommand::Status) => {
                    let result = self.api.status();
                    write!(out, "{}", render_messages(&result.messages))?;
                }
                SessionInput::Command(SessionCommand::Help) => write!(out, "{}", SESSION_HELP)?,
                SessionInput::Command(SessionCommand::Quit) => break,
                SessionInput::Unknown(word) => {
                    let message = notelog::api::CmdMessage::error(format!(
                        "Unknown session command: :{} (try :help)",
                        word
                    ));
                    write!(out, "{}", render_messages(&[message]))?;
                }
            }

            if self.stale.replace(false) {
                self.write_count(out)?;
            }
        }
        Ok(())
    }

    fn write_count<W: Write>(&self, out: &mut W) -> Result<()> {
        let count = self.api.note_count().note_count.unwrap_or_default();
        write!(
            out,
            "{}",
            render_count(&self.api.settings().count_label, count)
        )?;
        Ok(())
    }
}
