//! Release-calendar counts and per-title lookups.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{CleanError, CleanResult};
use crate::types::{Dataset, Value};

use super::text::{month_number, normalize, weekday_number};
use super::MovieStore;

/// One title match with its popularity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieScore {
    /// Title as stored in the table.
    pub title: String,
    /// Release year as stored in the table.
    pub year: String,
    /// Popularity score, when the cell holds a number.
    pub popularity: Option<f64>,
}

/// One title match with its vote totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieVotes {
    /// Title as stored in the table.
    pub title: String,
    /// Release year as stored in the table.
    pub year: String,
    /// Total number of votes.
    pub vote_count: f64,
    /// Average vote, only reported for titles with at least 2000 votes.
    pub vote_average: Option<f64>,
}

/// Votes below this total do not get an average reported.
const VOTE_AVERAGE_THRESHOLD: f64 = 2000.0;

impl MovieStore {
    /// Count how many movies were historically released in the given month
    /// (Spanish name). Only rows with status `Released` count; rows with an
    /// unparsable release date are skipped.
    pub fn released_in_month(&self, month: &str) -> CleanResult<usize> {
        let wanted = month_number(month).ok_or_else(|| CleanError::UnknownMonth {
            name: month.to_string(),
        })?;
        count_released(&self.releases, |date| date.month() == wanted)
    }

    /// Count how many movies were historically released on the given weekday
    /// (Spanish name). Only rows with status `Released` count; rows with an
    /// unparsable release date are skipped.
    pub fn released_on_weekday(&self, weekday: &str) -> CleanResult<usize> {
        let wanted = weekday_number(weekday).ok_or_else(|| CleanError::UnknownWeekday {
            name: weekday.to_string(),
        })?;
        count_released(&self.releases, |date| {
            date.weekday().number_from_monday() == wanted
        })
    }

    /// All title matches with their release year and popularity score.
    pub fn movie_popularity(&self, title: &str) -> CleanResult<Vec<MovieScore>> {
        let title_idx = require_column(&self.popularity, "title")?;
        let year_idx = require_column(&self.popularity, "release_year")?;
        let pop_idx = require_column(&self.popularity, "popularity")?;
        let wanted = normalize(title);

        let mut matches = Vec::new();
        for row in &self.popularity.rows {
            let Some(stored) = row.get(title_idx).and_then(Value::as_str) else {
                continue;
            };
            if normalize(stored) != wanted {
                continue;
            }
            matches.push(MovieScore {
                title: stored.to_string(),
                year: text_or_empty(row.get(year_idx)),
                popularity: row.get(pop_idx).and_then(Value::to_f64),
            });
        }
        Ok(matches)
    }

    /// All title matches with their vote totals. The vote average is withheld
    /// for titles with fewer than 2000 votes; rows whose vote count is not a
    /// number are skipped.
    pub fn movie_votes(&self, title: &str) -> CleanResult<Vec<MovieVotes>> {
        let title_idx = require_column(&self.votes, "title")?;
        let year_idx = require_column(&self.votes, "release_year")?;
        let count_idx = require_column(&self.votes, "vote_count")?;
        let average_idx = require_column(&self.votes, "vote_average")?;
        let wanted = normalize(title);

        let mut matches = Vec::new();
        for row in &self.votes.rows {
            let Some(stored) = row.get(title_idx).and_then(Value::as_str) else {
                continue;
            };
            if normalize(stored) != wanted {
                continue;
            }
            let Some(vote_count) = row.get(count_idx).and_then(Value::to_f64) else {
                continue;
            };
            let vote_average = if vote_count >= VOTE_AVERAGE_THRESHOLD {
                row.get(average_idx).and_then(Value::to_f64)
            } else {
                None
            };
            matches.push(MovieVotes {
                title: stored.to_string(),
                year: text_or_empty(row.get(year_idx)),
                vote_count,
                vote_average,
            });
        }
        Ok(matches)
    }
}

fn count_released<F>(releases: &Dataset, mut matches: F) -> CleanResult<usize>
where
    F: FnMut(NaiveDate) -> bool,
{
    let date_idx = require_column(releases, "release_date")?;
    let status_idx = require_column(releases, "status")?;

    let mut count = 0;
    for row in &releases.rows {
        if row.get(status_idx).and_then(Value::as_str) != Some("Released") {
            continue;
        }
        let Some(date) = row
            .get(date_idx)
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        else {
            continue;
        };
        if matches(date) {
            count += 1;
        }
    }
    Ok(count)
}

pub(super) fn require_column(dataset: &Dataset, column: &str) -> CleanResult<usize> {
    dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })
}

pub(super) fn text_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
