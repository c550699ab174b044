use compose_port_finder::prelude::*;

/// Mock ConsoleReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockConsoleReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockConsoleReporter {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Warning: ").map(str::to_string))
            .collect()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ConsoleReporter for MockConsoleReporter {
    fn title(&self, message: &str) {
        self.push(format!("Title: {}", message));
    }

    fn warning(&self, message: &str) {
        self.push(format!("Warning: {}", message));
    }

    fn error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn success(&self, message: &str) {
        self.push(format!("Success: {}", message));
    }

    fn listing(&self, items: &[String]) {
        for item in items {
            self.push(format!("Item: {}", item));
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let msg = if let Some(m) = message {
            format!("Progress: {}/{} - {}", current, total, m)
        } else {
            format!("Progress: {}/{}", current, total)
        };
        self.push(msg);
    }
}
