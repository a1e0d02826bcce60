//! Per-player and per-deck output channels.

use core::fmt;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::{self, File};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::error::LogWriteError;
use crate::sync::Mutex;

/// Destination of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A player's output.
    Player(usize),
    /// A deck's output.
    Deck(usize),
}

impl Channel {
    /// Returns the output file name, e.g. `player1_output.txt`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{self}_output.txt")
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "player{id}"),
            Self::Deck(id) => write!(f, "deck{id}"),
        }
    }
}

/// Receives log lines from players and the game.
///
/// Implementations are shared by every player thread.
pub trait OutputSink: Send + Sync {
    /// Appends one line to `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line could not be written.
    fn write_line(&self, channel: Channel, line: &str) -> Result<(), LogWriteError>;
}

/// Writes a line, reporting failure through `tracing` instead of the caller.
pub(crate) fn record(sink: &dyn OutputSink, channel: Channel, line: impl fmt::Display) {
    if let Err(err) = sink.write_line(channel, &line.to_string()) {
        warn!(error = %err, "dropped log line");
    }
}

/// Writes each channel to its own file in a directory.
///
/// A file is truncated the first time its channel is written during the
/// lifetime of this value and appended to afterwards.
///
/// Each channel has its own writer lock; the map lock is only held to look
/// a writer up or open it.
#[derive(Debug)]
pub struct FileOutput {
    dir: PathBuf,
    files: Mutex<HashMap<Channel, Arc<Mutex<LineWriter<File>>>>>,
}

impl FileOutput {
    /// Creates an output rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self {
            dir,
            files: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path a channel is written to.
    #[must_use]
    pub fn path_of(&self, channel: Channel) -> PathBuf {
        self.dir.join(channel.file_name())
    }

    fn writer(&self, channel: Channel) -> io::Result<Arc<Mutex<LineWriter<File>>>> {
        let mut files = self.files.lock();
        let writer = match files.entry(channel) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let file = File::create(self.path_of(channel))?;
                entry.insert(Arc::new(Mutex::new(LineWriter::new(file))))
            }
        };
        Ok(Arc::clone(writer))
    }
}

impl OutputSink for FileOutput {
    fn write_line(&self, channel: Channel, line: &str) -> Result<(), LogWriteError> {
        let to_error = |source| LogWriteError { channel, source };
        let file = self.writer(channel).map_err(to_error)?;
        let mut writer = file.lock();
        writeln!(writer, "{line}").map_err(to_error)
    }
}

/// Keeps every line in memory, grouped by channel.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<HashMap<Channel, Vec<String>>>,
}

impl MemoryOutput {
    /// Creates an empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines written to `channel`, oldest first.
    #[must_use]
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        self.lines.lock().get(&channel).cloned().unwrap_or_default()
    }
}

impl OutputSink for MemoryOutput {
    fn write_line(&self, channel: Channel, line: &str) -> Result<(), LogWriteError> {
        self.lines
            .lock()
            .entry(channel)
            .or_default()
            .push(line.to_owned());
        Ok(())
    }
}
