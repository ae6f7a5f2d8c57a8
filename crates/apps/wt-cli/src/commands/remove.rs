use crate::cli::Args;
use crate::commands::{Command, required};
use crate::context::Context;
use anyhow::Result;
use wt_core::Translator;
use wt_core::i18n::{NOT_FOUND, REMOVED_CITY};

#[derive(Debug)]
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn name(&self) -> &str {
        "remove"
    }

    fn usage(&self) -> &str {
        "<city>"
    }

    fn arity(&self) -> usize {
        1
    }

    fn execute(&self, ctx: &mut Context, args: &Args) -> Result<()> {
        let city = required(args, "city")?;

        let removed = ctx.settings.remove_city(city);
        if removed {
            ctx.save_settings()?;
            log::info!("Stopped tracking city '{}'", city);
        }

        ctx.print(&report(&ctx.translator(), city, removed));
        Ok(())
    }
}

fn report(tr: &Translator, city: &str, removed: bool) -> String {
    if removed {
        format!("{}: {}.", tr.t(REMOVED_CITY), city)
    } else {
        format!("{} {}.", city, tr.t(NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(city: &str) -> Args {
        Args::parse(vec!["wt".into(), "remove".into(), city.into()])
    }

    #[test]
    fn remove_missing_city_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut ctx = Context::open(dir.path(), None).unwrap();
        ctx.settings.add_city("Tokyo");

        RemoveCommand.execute(&mut ctx, &args("Paris")).unwrap();
        assert_eq!(ctx.settings.cities, vec!["Tokyo".to_string()]);
        // Nothing was persisted
        assert!(!dir.path().join("settings.json").exists());
    }

    #[test]
    fn remove_existing_city_persists() {
        let dir = TempDir::new().unwrap();
        let mut ctx = Context::open(dir.path(), None).unwrap();
        ctx.settings.add_city("Paris");
        ctx.settings.add_city("Tokyo");

        RemoveCommand.execute(&mut ctx, &args("Paris")).unwrap();

        let reopened = Context::open(dir.path(), None).unwrap();
        assert_eq!(reopened.settings.cities, vec!["Tokyo".to_string()]);
    }

    #[test]
    fn reports_removed_and_not_found() {
        let en = Translator::new("en");
        assert_eq!(report(&en, "Paris", true), "Removed city: Paris.");
        assert_eq!(report(&en, "Paris", false), "Paris not found.");
        assert_eq!(report(&Translator::new("uz"), "Paris", false), "Paris topilmadi.");
    }
}
