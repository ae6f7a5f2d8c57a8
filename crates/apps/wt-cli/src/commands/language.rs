use crate::cli::Args;
use crate::commands::{Command, required};
use crate::context::Context;
use anyhow::Result;
use wt_core::Translator;
use wt_core::i18n::{LANGUAGE_SET_TO, is_supported};

#[derive(Debug)]
pub struct LanguageCommand;

impl Command for LanguageCommand {
    fn name(&self) -> &str {
        "language"
    }

    fn usage(&self) -> &str {
        "<code>"
    }

    fn arity(&self) -> usize {
        1
    }

    fn execute(&self, ctx: &mut Context, args: &Args) -> Result<()> {
        let code = required(args, "language code")?;

        ctx.settings.set_language(code);
        ctx.save_settings()?;
        if is_supported(code) {
            log::info!("Display language set to '{}'", code);
        } else {
            log::warn!("No translations for '{}', showing untranslated text", code);
        }

        // Confirmation is already in the new language
        ctx.print(&report(&ctx.translator(), code));
        Ok(())
    }
}

fn report(tr: &Translator, code: &str) -> String {
    format!("{}: {}.", tr.t(LANGUAGE_SET_TO), code)
}
