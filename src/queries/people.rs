//! Actor and director return statistics.

use serde::Serialize;

use crate::error::CleanResult;
use crate::literal::parse_literal;
use crate::types::Value;

use super::movies::{require_column, text_or_empty};
use super::text::normalize;
use super::MovieStore;

/// Aggregate return statistics for one actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSummary {
    /// Name as stored in the table.
    pub name: String,
    /// Number of movie appearances.
    pub movies_total: usize,
    /// Sum of the return ratios across appearances.
    pub return_total: f64,
    /// Average return ratio per appearance.
    pub return_average: f64,
}

/// One movie directed by the queried director.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectedMovie {
    /// Title as stored in the table.
    pub title: String,
    /// Release date as stored in the table.
    pub release_date: String,
    /// Return ratio, when the cell holds a number.
    pub return_ratio: Option<f64>,
    /// Budget, when the cell holds a number.
    pub budget: Option<f64>,
    /// Revenue, when the cell holds a number.
    pub revenue: Option<f64>,
}

/// Aggregate return statistics for one director, movie by movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorSummary {
    /// Name as stored in the table.
    pub name: String,
    /// Sum of the return ratios across directed movies.
    pub return_total: f64,
    /// The directed movies, in table order.
    pub movies: Vec<DirectedMovie>,
}

impl MovieStore {
    /// Success of an actor measured through return ratios: appearance count,
    /// total, and average. `None` when the actor appears in no row's cast
    /// list. Cells that fail to parse as a literal list are skipped; return
    /// cells that are not numbers count as zero.
    pub fn actor_summary(&self, actor: &str) -> CleanResult<Option<ActorSummary>> {
        let names_idx = require_column(&self.cast, "actor_name")?;
        let return_idx = require_column(&self.cast, "return")?;
        let wanted = normalize(actor);

        let mut name = String::new();
        let mut movies_total = 0usize;
        let mut return_total = 0.0f64;

        for row in &self.cast.rows {
            let Some(Value::List(actors)) = row
                .get(names_idx)
                .and_then(Value::as_str)
                .and_then(|cell| parse_literal(cell).ok())
            else {
                continue;
            };
            for entry in &actors {
                let Some(stored) = entry.as_str() else {
                    continue;
                };
                if normalize(stored) == wanted {
                    name = stored.to_string();
                    movies_total += 1;
                    return_total += row.get(return_idx).and_then(Value::to_f64).unwrap_or(0.0);
                }
            }
        }

        if movies_total == 0 {
            return Ok(None);
        }
        Ok(Some(ActorSummary {
            name,
            movies_total,
            return_total,
            return_average: return_total / movies_total as f64,
        }))
    }

    /// Success of a director measured through return ratios, with the
    /// directed movies listed one by one. A crew entry counts only when the
    /// job aligned with the matching name is `Director`. `None` when no row
    /// matches.
    pub fn director_summary(&self, director: &str) -> CleanResult<Option<DirectorSummary>> {
        let names_idx = require_column(&self.crew, "crew_name")?;
        let jobs_idx = require_column(&self.crew, "crew_job")?;
        let title_idx = require_column(&self.crew, "title")?;
        let date_idx = require_column(&self.crew, "release_date")?;
        let return_idx = require_column(&self.crew, "return")?;
        let budget_idx = require_column(&self.crew, "budget")?;
        let revenue_idx = require_column(&self.crew, "revenue")?;
        let wanted = normalize(director);

        let mut name = String::new();
        let mut return_total = 0.0f64;
        let mut movies = Vec::new();

        for row in &self.crew.rows {
            let Some(Value::List(names)) = row
                .get(names_idx)
                .and_then(Value::as_str)
                .and_then(|cell| parse_literal(cell).ok())
            else {
                continue;
            };
            let Some(Value::List(jobs)) = row
                .get(jobs_idx)
                .and_then(Value::as_str)
                .and_then(|cell| parse_literal(cell).ok())
            else {
                continue;
            };

            for (idx, entry) in names.iter().enumerate() {
                let Some(stored) = entry.as_str() else {
                    continue;
                };
                if normalize(stored) != wanted {
                    continue;
                }
                if jobs.get(idx).and_then(Value::as_str) != Some("Director") {
                    continue;
                }
                name = stored.to_string();
                return_total += row.get(return_idx).and_then(Value::to_f64).unwrap_or(0.0);
                movies.push(DirectedMovie {
                    title: text_or_empty(row.get(title_idx)),
                    release_date: text_or_empty(row.get(date_idx)),
                    return_ratio: row.get(return_idx).and_then(Value::to_f64),
                    budget: row.get(budget_idx).and_then(Value::to_f64),
                    revenue: row.get(revenue_idx).and_then(Value::to_f64),
                });
            }
        }

        if movies.is_empty() {
            return Ok(None);
        }
        Ok(Some(DirectorSummary {
            name,
            return_total,
            movies,
        }))
    }
}
