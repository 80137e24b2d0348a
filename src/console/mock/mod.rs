use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::console::{GameInput, GameOutput, Message};

#[derive(Clone, Debug, Default)]
pub struct MockGameInput {
    lines: Arc<RwLock<VecDeque<String>>>,
}

impl MockGameInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Arc::new(RwLock::new(lines.iter().map(|l| l.to_string()).collect())),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.read().len()
    }
}

impl GameInput for MockGameInput {
    fn read_line(&mut self) -> Result<String> {
        self.lines
            .write()
            .pop_front()
            .ok_or_else(|| anyhow!("Mock input exhausted"))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockGameOutput {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn count_message(&self, message: &Message) -> usize {
        self.messages.read().iter().filter(|m| *m == message).count()
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}
