use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of status lines kept for the activity feed.
pub const MAX_MESSAGES: usize = 15;

/// Rolling feed of human-readable status lines; the oldest line is evicted first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLog {
    messages: VecDeque<String>,
    /// Lines ever pushed, including evicted ones
    #[serde(default)]
    pushed: usize,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        self.pushed += 1;
        while self.messages.len() > MAX_MESSAGES {
            self.messages.pop_front();
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.iter().cloned().collect()
    }

    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Lines pushed after the first `seen`, as far as they are still retained.
    pub fn since(&self, seen: usize) -> Vec<String> {
        let fresh = self.pushed.saturating_sub(seen).min(self.messages.len());
        self.messages
            .iter()
            .skip(self.messages.len() - fresh)
            .cloned()
            .collect()
    }

    pub fn latest(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut log = StatusLog::new();
        for i in 0..20 {
            log.push(format!("message {}", i));
        }
        let msgs = log.messages();
        assert_eq!(msgs.len(), MAX_MESSAGES);
        assert_eq!(msgs[0], "message 5");
        assert_eq!(log.latest(), Some("message 19"));
    }

    #[test]
    fn since_returns_only_unseen_lines() {
        let mut log = StatusLog::new();
        log.push("a");
        log.push("b");
        let seen = log.pushed();
        log.push("c");
        assert_eq!(log.since(seen), vec!["c".to_string()]);
        assert!(log.since(log.pushed()).is_empty());

        for i in 0..30 {
            log.push(format!("m{}", i));
        }
        assert_eq!(log.since(0).len(), MAX_MESSAGES);
    }
}
