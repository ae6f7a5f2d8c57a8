/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Raw command line arguments (including program name at index 0)
    pub raw: Vec<String>,
    /// Command name (e.g., "add", "language")
    pub command: Option<String>,
    /// Arguments after the command name
    pub positional: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse(raw: Vec<String>) -> Self {
        let command = raw.get(1).cloned();
        let positional = raw.iter().skip(2).cloned().collect();

        Self {
            raw,
            command,
            positional,
        }
    }

    /// Get a positional argument by index
    pub fn get(&self, index: usize) -> Option<&String> {
        self.positional.get(index)
    }
}
