use chrono::{Local, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub time: NaiveTime,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS: message`, as shown in the log pane.
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.time.format("%H:%M:%S"), self.message)
    }
}

/// Append-only record of completed transfers.
#[derive(Debug, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) -> &LogEntry {
        self.push_at(Local::now().time(), message)
    }

    pub fn push_at(&mut self, time: NaiveTime, message: impl Into<String>) -> &LogEntry {
        self.entries.push(LogEntry {
            time,
            message: message.into(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for entry in &self.entries {
            result.push_str(&entry.to_line());
            result.push('\n');
        }
        result
    }
}
