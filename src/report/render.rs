//! Formatted text output for reports and lookups

use super::lookup::DateLookup;
use super::ranking::Metric;
use super::{ClimateReport, RankedSection};
use crate::constants::DATE_FORMAT;
use crate::models::{DailyDifference, DailyStats, Location};
use crate::season::Season;
use colored::*;
use std::io::{self, Write};

/// Format one day as a ranking line for the given metric
pub fn format_day(day: &DailyStats, metric: Metric) -> String {
    let date = day.date.format(DATE_FORMAT);
    match metric {
        Metric::Temperature => format!("{}: {:.1} °C", date, day.avg_temp),
        Metric::Humidity => format!("{}: {:.0}% RH", date, day.avg_humidity),
        Metric::MoldRisk => format!("{}: Index {:.2}", date, day.mold_risk),
    }
}

pub fn format_difference(difference: &DailyDifference) -> String {
    format!(
        "{}: {:.1} °C difference",
        difference.date.format(DATE_FORMAT),
        difference.difference
    )
}

/// Format the full statistics of one day at one location
pub fn format_day_summary(location: Location, day: &DailyStats) -> String {
    format!(
        "{} {} - Mean temp: {:.1} °C, Mean humidity: {:.0}% RH, Mold-risk index: {:.2}",
        location,
        day.date.format(DATE_FORMAT),
        day.avg_temp,
        day.avg_humidity,
        day.mold_risk
    )
}

fn write_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("=== {} ===", title).bright_green().bold())
}

fn write_section<W: Write>(out: &mut W, title: &str, lines: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " {}", title.bright_cyan())?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_ranking<W: Write>(out: &mut W, section: &RankedSection) -> io::Result<()> {
    let lines: Vec<String> = section
        .days
        .iter()
        .map(|day| format_day(day, section.metric))
        .collect();
    write_section(out, section.title, &lines)
}

/// Write the complete report in display order
pub fn render_report<W: Write>(report: &ClimateReport, out: &mut W) -> io::Result<()> {
    write_heading(out, "OUTDOOR")?;

    let listing: Vec<String> = report
        .outdoor_listing
        .iter()
        .map(|day| format_day(day, Metric::Temperature))
        .collect();
    write_section(out, "Outdoor mean temperature per day", &listing)?;

    for section in &report.outdoor_rankings {
        write_ranking(out, section)?;
    }

    write_heading(out, "SEASONS")?;
    writeln!(out)?;
    for season in Season::ALL {
        let start = report
            .seasons
            .start_of(season)
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "not occurred".to_string());
        writeln!(out, "{}: {}", season, start)?;
    }

    write_heading(out, "INDOOR")?;
    for section in &report.indoor_rankings {
        write_ranking(out, section)?;
    }

    let differences: Vec<String> = report.differences.iter().map(format_difference).collect();
    write_section(
        out,
        "Largest indoor/outdoor temperature difference",
        &differences,
    )?;

    Ok(())
}

/// Write the result of a date lookup, one line per location
pub fn render_lookup<W: Write>(lookup: &DateLookup, out: &mut W) -> io::Result<()> {
    for location in Location::ALL {
        match lookup.for_location(location) {
            Some(day) => writeln!(out, "{}", format_day_summary(location, &day))?,
            None => writeln!(out, "[{}] no data.", location)?,
        }
    }
    Ok(())
}
