//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for all notelog operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the store and the loaded configuration. There is no global store: a client
//!   creates one `NotelogApi` and passes it by reference to whatever needs it.
//! - **Dispatches** to the appropriate command function.
//! - **Stamps** new notes: the store only keeps text, so the facade turns the current
//!   local time into a string using the configured `timestamp-format`.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O**: No stdout or stderr
//!
//! ## Generic Over DataStore
//!
//! `NotelogApi<S: DataStore>` is generic over the store so tests can hand it any backend.

use crate::commands;
use crate::config::NotelogConfig;
use crate::error::Result;
use crate::store::{DataStore, Subscriber, SubscriptionId};
use crate::timestamp::format_timestamp;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;

pub struct NotelogApi<S: DataStore> {
    store: S,
    config: NotelogConfig,
    config_dir: PathBuf,
}

impl<S: DataStore> NotelogApi<S> {
    pub fn new(store: S, config: NotelogConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    /// Logs `note` stamped with the current local time.
    pub fn add_note(&mut self, note: String) -> Result<commands::CmdResult> {
        self.add_note_at(note, &Local::now())
    }

    pub fn add_note_at<Tz>(&mut self, note: String, at: &DateTime<Tz>) -> Result<commands::CmdResult>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let timestamp = format_timestamp(at, &self.config.timestamp_format)?;
        Ok(commands::add::run(&mut self.store, note, timestamp))
    }

    pub fn list_notes(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn note_count(&self) -> commands::CmdResult {
        commands::count::run(&self.store)
    }

    pub fn status(&self) -> commands::CmdResult {
        commands::status::run(&self.store)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, &mut self.config, action)
    }

    pub fn subscribe(&mut self, callback: Subscriber) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &NotelogConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
