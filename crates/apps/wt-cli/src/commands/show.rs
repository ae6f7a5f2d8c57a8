use crate::cli::Args;
use crate::commands::Command;
use crate::context::Context;
use crate::ui::Table;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use wt_core::clock::{CityResult, city_clocks, format_clock};
use wt_core::i18n::{CITY, LOCAL, LOCAL_TIME, TIME_ZONE};
use wt_core::{Translator, TzDatabase};

const NO_ZONE: &str = "-";

#[derive(Debug)]
pub struct ShowCommand;

impl Command for ShowCommand {
    fn name(&self) -> &str {
        "show"
    }

    fn usage(&self) -> &str {
        ""
    }

    fn execute(&self, ctx: &mut Context, _args: &Args) -> Result<()> {
        let now = Utc::now();
        let local = now.with_timezone(&Local).naive_local();

        let db = TzDatabase::new();
        let results = city_clocks(&db, &ctx.settings.cities, now);

        let mut table = ctx.table();
        let errors = fill_table(&mut table, &ctx.translator(), local, now, &results);

        for error in &errors {
            ctx.print_error(error);
        }
        log::debug!("Showing {} rows, {} cities skipped", table.rows().len(), errors.len());
        print!("{}", table.render());
        Ok(())
    }
}

/// Adds the local, UTC and per-city rows. Returns one message per city that
/// could not be shown; those cities get no row.
fn fill_table(
    table: &mut Table,
    tr: &Translator,
    local: NaiveDateTime,
    now: DateTime<Utc>,
    results: &[CityResult],
) -> Vec<String> {
    table.header(&[tr.t(CITY), tr.t(LOCAL_TIME), tr.t(TIME_ZONE)]);
    let local_time = format_clock(&local);
    let utc_time = format_clock(&now.naive_utc());
    table.row([tr.t(LOCAL), local_time.as_str(), NO_ZONE]);
    table.row(["UTC", utc_time.as_str(), NO_ZONE]);

    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(clock) => {
                let time = clock.formatted_time();
                table.row([clock.city.as_str(), time.as_str(), clock.zone]);
            }
            Err(e) => {
                log::warn!("Skipping '{}': {}", e.city(), e);
                errors.push(format!("Error processing {}: {}.", e.city(), e));
            }
        }
    }
    errors
}
