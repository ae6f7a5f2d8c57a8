use crate::cli::Args;
use crate::context::Context;
use anyhow::Result;

/// Trait for all CLI commands
pub trait Command: std::fmt::Debug {
    /// Command name (e.g. "add")
    fn name(&self) -> &str;

    /// Command usage string (e.g. "<city>")
    fn usage(&self) -> &str;

    /// Number of positional arguments the command requires
    fn arity(&self) -> usize {
        0
    }

    /// Run the command logic
    fn execute(&self, ctx: &mut Context, args: &Args) -> Result<()>;
}

pub mod add;
pub mod language;
pub mod remove;
pub mod show;

pub use add::AddCommand;
pub use language::LanguageCommand;
pub use remove::RemoveCommand;
pub use show::ShowCommand;

/// Commands selectable by name. Show is the default and has no name to select it by.
pub fn get_all() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(AddCommand),
        Box::new(RemoveCommand),
        Box::new(LanguageCommand),
    ]
}

/// First positional argument of a command whose arity was already checked
fn required<'a>(args: &'a Args, what: &str) -> Result<&'a str> {
    args.get(0)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("missing {}", what))
}
