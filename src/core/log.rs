//! Bounded, timestamped player log.

use super::format::format_hour;
use super::game_event::GameEvent;
use serde::Serialize;
use std::collections::VecDeque;

/// One line of the player log, stamped with the in-game time it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub day: u32,
    pub hour: u32,
    pub message: String,
}

impl LogEntry {
    /// `"3일차 08:00"`
    pub fn timestamp(&self) -> String {
        format!("{}일차 {}", self.day, format_hour(self.hour))
    }
}

/// Log feed, oldest first. Once full, the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, day: u32, hour: u32, message: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { day, hour, message });
    }

    /// Log every event that has a player-facing message.
    pub fn record(&mut self, day: u32, hour: u32, events: &[GameEvent]) {
        for event in events {
            if let Some(message) = event.message() {
                self.push(day, hour, message);
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
