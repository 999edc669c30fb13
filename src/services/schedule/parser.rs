use chrono::NaiveTime;

use super::locale::ScheduleLocale;
use crate::models::recurrence::RecurrenceRule;

/// Parse a raw venue schedule string into weekly recurrence rules.
///
/// Input is a semicolon-separated list of clauses, each of the form
/// `"<Type> - <Weekday> <HH:MM>-<HH:MM>"`. Clauses are parsed
/// independently: one that fails the grammar, or whose weekday token is
/// not in the vocabulary, is dropped without aborting the rest. Empty
/// input and the locale's "no schedule" sentinels yield an empty list.
///
/// Community data entry is loose, so dropped clauses are expected and
/// only logged at debug level.
pub fn parse_schedule(raw: &str, locale: &ScheduleLocale) -> Vec<RecurrenceRule> {
    let raw = raw.trim();
    if raw.is_empty() || locale.is_no_schedule_marker(raw) {
        return Vec::new();
    }

    raw.split(';')
        .filter(|clause| !clause.trim().is_empty())
        .filter_map(|clause| match parse_clause(clause, locale) {
            Some(rule) => Some(rule),
            None => {
                log::debug!("dropping unparseable schedule clause: {:?}", clause.trim());
                None
            }
        })
        .collect()
}

fn parse_clause(clause: &str, locale: &ScheduleLocale) -> Option<RecurrenceRule> {
    // "<Type> - <Weekday> <HH:MM>-<HH:MM>", whitespace-tolerant around
    // the separator and the time-range dash. The spaced form is preferred
    // so hyphenated types ("Sainte-Cène") stay intact.
    let (celebration_type, rest) = clause
        .split_once(" - ")
        .or_else(|| clause.split_once('-'))?;
    let celebration_type = celebration_type.trim();
    if celebration_type.is_empty() {
        return None;
    }

    let mut tokens = rest.split_whitespace();
    let weekday = locale.weekday_from_name(tokens.next()?)?;

    // Re-joining the remaining tokens tolerates "10:30 - 11:30".
    let time_range: String = tokens.collect();
    let (start_str, end_str) = time_range.split_once('-')?;
    let start = parse_time(start_str)?;
    let end = parse_time(end_str)?;

    Some(RecurrenceRule::new(celebration_type, weekday, start, end))
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token.trim(), "%H:%M").ok()
}
