use crate::cli::Args;
use crate::commands::{self, Command, ShowCommand};
use crate::context::Context;
use anyhow::Result;

pub const INVALID_COMMAND: &str = "Invalid command.";

/// What one invocation will do
#[derive(Debug)]
pub enum Route {
    Show,
    Run(Box<dyn Command>),
    Invalid,
}

/// Command dispatcher that parses arguments and routes to appropriate command
pub struct Dispatcher;

impl Dispatcher {
    /// Dispatch a command based on the provided arguments
    pub fn dispatch(ctx: &mut Context, args: &Args) -> Result<()> {
        match Self::route(args) {
            Route::Show => ShowCommand.execute(ctx, args),
            Route::Run(cmd) => {
                log::debug!("Running '{}' with {:?}", cmd.name(), args.positional);
                cmd.execute(ctx, args)
            }
            Route::Invalid => {
                let known: Vec<String> = commands::get_all()
                    .iter()
                    .map(|c| format!("{} {}", c.name(), c.usage()))
                    .collect();
                log::warn!("Rejected arguments {:?}, expected one of {:?}", args.raw, known);
                ctx.print(INVALID_COMMAND);
                Ok(())
            }
        }
    }

    /// No command shows the clock table. A known command with too few
    /// arguments is as invalid as an unknown one.
    pub fn route(args: &Args) -> Route {
        let Some(cmd_name) = args.command.as_deref() else {
            return Route::Show;
        };

        commands::get_all()
            .into_iter()
            .find(|c| c.name() == cmd_name)
            .filter(|c| args.positional.len() >= c.arity())
            .map_or(Route::Invalid, Route::Run)
    }
}
