//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

use slidein::commands::Cmd;
use slidein::config::ConsoleConfig;
use slidein::messages::{Msg, SlideInMsg};
use slidein::model::{AppModel, HostOptions};
use slidein::panels::{OpenOptions, PanelKind};
use slidein::update::{open_slide_in, update};
use slidein::SlideInRef;

pub const HOST_ID: &str = "slide-in-form";

/// Create a model whose host has an id but is not attached yet
pub fn test_model() -> (AppModel, Receiver<Msg>) {
    test_model_with(HostOptions::with_id(HOST_ID))
}

pub fn test_model_with(options: HostOptions) -> (AppModel, Receiver<Msg>) {
    let (tx, rx) = mpsc::channel();
    let model = AppModel::new(ConsoleConfig::default(), options, tx);
    (model, rx)
}

/// Create a model with the host attached to the page
pub fn attached_model() -> (AppModel, Receiver<Msg>) {
    let (mut model, rx) = test_model();
    update(&mut model, Msg::SlideIn(SlideInMsg::Attach));
    (model, rx)
}

/// Open a panel through the update layer, returning its reference
pub fn open(model: &mut AppModel, kind: PanelKind) -> (SlideInRef, Cmd) {
    open_slide_in(model, kind, OpenOptions::default()).expect("panel should open")
}

/// Generations of every `ScheduleClear` inside `cmd`
pub fn scheduled_clears(cmd: &Cmd) -> Vec<u64> {
    cmd.clone()
        .flatten()
        .into_iter()
        .filter_map(|c| match c {
            Cmd::ScheduleClear { generation, .. } => Some(generation),
            _ => None,
        })
        .collect()
}

/// Generations of every `CancelClear` inside `cmd`
pub fn cancelled_clears(cmd: &Cmd) -> Vec<u64> {
    cmd.clone()
        .flatten()
        .into_iter()
        .filter_map(|c| match c {
            Cmd::CancelClear { generation } => Some(generation),
            _ => None,
        })
        .collect()
}

/// Deliver the timer result for `generation`
pub fn fire_clear(model: &mut AppModel, generation: u64) -> Option<Cmd> {
    update(model, Msg::SlideIn(SlideInMsg::ClearElapsed { generation }))
}

// ----------------------------------------------------------------------------
// Log capture
// ----------------------------------------------------------------------------

/// In-memory log sink shared between the subscriber and the test
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Number of captured lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records every event into the returned buffer
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer)
}
