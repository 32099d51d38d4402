//! Text output for ranked flare lists.

use crate::{
    cmd_line::CmdLineArgs,
    errors::FlareRankErr,
    event::FlareEvent,
    rank::{rank_with_magnitudes, Ranked},
};
use log::info;
use std::{
    fmt::{self, Write},
    io,
};
use unicode_width::UnicodeWidthStr;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line per flare, e.g. `Class X1.0 occurred on 2024-05-08T01:41:00`.
///
/// The start time is printed as it was read.
pub fn summary_line(event: &FlareEvent) -> String {
    format!("Class {} occurred on {}", event.goes_class, event.start_time)
}

/// Select, rank and print events as the command line asks.
///
/// Nothing is written if ranking fails, so a strict run never prints a partial list.
pub fn write_report<W: io::Write>(
    args: &CmdLineArgs,
    events: Vec<FlareEvent>,
    mut out: W,
) -> Result<(), FlareRankErr> {
    let total = events.len();
    let selected = args.query().filter(events);
    info!("{} of {} events matched the query", selected.len(), total);

    let mut ranked = rank_with_magnitudes(selected, args.policy())?;

    if let Some(limit) = args.limit() {
        ranked.truncate(limit);
    }

    if ranked.is_empty() {
        writeln!(out, "No flares matched criteria.")?;
        return Ok(());
    }

    if args.table() {
        let title = match args.query().min_class() {
            Some(threshold) => format!("Flares stronger than {}", threshold),
            None => "Flares".to_owned(),
        };
        let mut table = FlareTable::new(&ranked).with_title(title);

        let unranked = ranked.iter().filter(|r| r.magnitude.is_none()).count();
        if unranked > 0 {
            table = table.with_footer(format!(
                "{} flares with unreadable classes listed last",
                unranked
            ));
        }

        write!(out, "{}", table.render()?)?;
    } else {
        for flare in &ranked {
            writeln!(out, "{}", summary_line(&flare.record))?;
        }
    }

    Ok(())
}

/// A box drawn table of ranked flares.
#[derive(Default, Debug)]
pub struct FlareTable {
    title: Option<String>,
    footer: Option<String>,
    column_names: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl FlareTable {
    /// Build a table from ranked events, most intense first.
    pub fn new(ranked: &[Ranked<FlareEvent>]) -> Self {
        let blank = || "-".to_owned();

        let rows = ranked
            .iter()
            .map(|Ranked { magnitude, record }| {
                vec![
                    record.goes_class.clone(),
                    magnitude
                        .map(|m| format!("{:.1e}", m.peak_flux()))
                        .unwrap_or_else(|| "unranked".to_owned()),
                    record.start_time.format(TIME_FORMAT).to_string(),
                    record.peak_time.format(TIME_FORMAT).to_string(),
                    record.end_time.format(TIME_FORMAT).to_string(),
                    record
                        .hpc_radius
                        .map(|r| format!("{:.1}", r))
                        .unwrap_or_else(blank),
                    record
                        .ar_noaa_num
                        .map(|ar| ar.to_string())
                        .unwrap_or_else(blank),
                ]
            })
            .collect();

        FlareTable {
            title: None,
            footer: None,
            column_names: vec!["CLASS", "FLUX W/m2", "START", "PEAK", "END", "RADIUS", "AR"],
            rows,
        }
    }

    /// Put a title above the table.
    pub fn with_title<T: Into<String>>(self, title: T) -> Self {
        FlareTable {
            title: Some(title.into()),
            ..self
        }
    }

    /// Put a note below the table.
    pub fn with_footer<T: Into<String>>(self, footer: T) -> Self {
        FlareTable {
            footer: Some(footer.into()),
            ..self
        }
    }

    /// Render the table to a string.
    pub fn render(&self) -> Result<String, fmt::Error> {
        //
        // Calculate widths
        //
        let mut col_widths: Vec<usize> = self
            .column_names
            .iter()
            .map(|name| UnicodeWidthStr::width(*name))
            .collect();

        for row in &self.rows {
            for (width, cell) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let all_cols_width = col_widths.iter().sum::<usize>() + col_widths.len() - 1;
        let text_width = |text: &Option<String>| {
            text.as_ref()
                .map(|text| UnicodeWidthStr::width(text.as_str()))
                .unwrap_or(0)
        };
        let table_width = all_cols_width
            .max(text_width(&self.title))
            .max(text_width(&self.footer));

        // Pad the last column so the columns fill a wide title or footer.
        if let Some(last) = col_widths.last_mut() {
            *last += table_width - all_cols_width;
        }

        let rule = |builder: &mut String, left: char, join: char, right: char| -> fmt::Result {
            builder.push(left);
            let segments: Vec<String> =
                col_widths.iter().map(|&w| "\u{2500}".repeat(w)).collect();
            builder.push_str(&segments.join(&join.to_string()));
            builder.push(right);
            builder.push('\n');
            Ok(())
        };

        let mut builder = String::with_capacity(128 * (self.rows.len() + 6));

        //
        // Title
        //
        if let Some(ref title) = self.title {
            writeln!(&mut builder, "\u{250c}{}\u{2510}", "\u{2500}".repeat(table_width))?;
            writeln!(&mut builder, "\u{2502}{0:^1$}\u{2502}", title, table_width)?;
            rule(&mut builder, '\u{251c}', '\u{252c}', '\u{2524}')?;
        } else {
            rule(&mut builder, '\u{250c}', '\u{252c}', '\u{2510}')?;
        }

        //
        // Column names
        //
        for (name, &width) in self.column_names.iter().zip(&col_widths) {
            write!(&mut builder, "\u{2502}{0:^1$}", name, width)?;
        }
        writeln!(&mut builder, "\u{2502}")?;
        rule(&mut builder, '\u{251c}', '\u{253c}', '\u{2524}')?;

        //
        // Data rows
        //
        for row in &self.rows {
            for (cell, &width) in row.iter().zip(&col_widths) {
                write!(&mut builder, "\u{2502}{0:>1$}", cell, width)?;
            }
            writeln!(&mut builder, "\u{2502}")?;
        }

        //
        // Footer
        //
        if let Some(ref footer) = self.footer {
            rule(&mut builder, '\u{251c}', '\u{2534}', '\u{2524}')?;
            writeln!(&mut builder, "\u{2502}{0:<1$}\u{2502}", footer, table_width)?;
            writeln!(&mut builder, "\u{2514}{}\u{2518}", "\u{2500}".repeat(table_width))?;
        } else {
            rule(&mut builder, '\u{2514}', '\u{2534}', '\u{2518}')?;
        }

        Ok(builder)
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
