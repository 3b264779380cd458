use crate::domain::ports::LineSink;
use crate::utils::error::{KioskError, Result};
use std::io::Write;
use std::sync::Mutex;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}

/// Collects emitted lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn take(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }
}

impl LineSink for MemorySink {
    fn emit(&self, line: &str) -> Result<()> {
        let mut lines = self.lines.lock().map_err(|_| KioskError::SinkError {
            message: "memory sink lock poisoned".to_string(),
        })?;
        lines.push(line.to_string());
        Ok(())
    }
}
