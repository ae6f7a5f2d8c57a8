use crate::cli::Args;
use crate::commands::{Command, required};
use crate::context::Context;
use anyhow::Result;
use wt_core::Translator;
use wt_core::i18n::{ADDED_CITY, ALREADY_ADDED};

#[derive(Debug)]
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &str {
        "add"
    }

    fn usage(&self) -> &str {
        "<city>"
    }

    fn arity(&self) -> usize {
        1
    }

    fn execute(&self, ctx: &mut Context, args: &Args) -> Result<()> {
        let city = required(args, "city")?;

        let added = ctx.settings.add_city(city);
        if added {
            ctx.save_settings()?;
            log::info!("Tracking city '{}'", city);
        }

        ctx.print(&report(&ctx.translator(), city, added));
        Ok(())
    }
}

fn report(tr: &Translator, city: &str, added: bool) -> String {
    if added {
        format!("{}: {}.", tr.t(ADDED_CITY), city)
    } else {
        format!("{} {}.", city, tr.t(ALREADY_ADDED))
    }
}
