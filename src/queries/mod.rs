//! Lookup and aggregate queries over the loaded movie tables.
//!
//! The HTTP layer asks questions like "how many movies were released in
//! January" or "how successful is this director"; everything here answers
//! them by scanning the in-memory tables. Table locations are injected at
//! construction through [`MovieStorePaths`] — loading happens once, queries
//! share the resulting [`MovieStore`].
//!
//! Titles and person names arrive in the API's path-parameter form (spaces as
//! `-`, accents optional); matching goes through [`text::normalize`] on both
//! sides. Month and weekday names are Spanish, the API's public contract.

pub mod movies;
pub mod people;
pub mod text;

use std::path::PathBuf;

use crate::error::CleanResult;
use crate::ingestion::{load_csv_with, LoadOptions};
use crate::types::Dataset;

pub use movies::{MovieScore, MovieVotes};
pub use people::{ActorSummary, DirectedMovie, DirectorSummary};

/// Locations of the five query tables.
#[derive(Debug, Clone)]
pub struct MovieStorePaths {
    /// Table with `release_date` and `status` columns.
    pub releases: PathBuf,
    /// Table with `title`, `release_year`, and `popularity` columns.
    pub popularity: PathBuf,
    /// Table with `title`, `release_year`, `vote_count`, `vote_average`.
    pub votes: PathBuf,
    /// Table with `actor_name` (encoded list) and `return` columns.
    pub cast: PathBuf,
    /// Table with `crew_name`/`crew_job` (encoded lists) plus per-movie
    /// `title`, `release_date`, `return`, `budget`, `revenue` columns.
    pub crew: PathBuf,
}

/// In-memory store of the query tables, loaded once at construction.
#[derive(Debug, Clone)]
pub struct MovieStore {
    /// Release calendar table.
    pub releases: Dataset,
    /// Popularity table.
    pub popularity: Dataset,
    /// Votes table.
    pub votes: Dataset,
    /// Cast table.
    pub cast: Dataset,
    /// Crew table.
    pub crew: Dataset,
}

impl MovieStore {
    /// Load all five tables, reporting each load to the configured observer.
    pub fn load(paths: &MovieStorePaths, options: &LoadOptions) -> CleanResult<Self> {
        Ok(Self {
            releases: load_csv_with(&paths.releases, options)?,
            popularity: load_csv_with(&paths.popularity, options)?,
            votes: load_csv_with(&paths.votes, options)?,
            cast: load_csv_with(&paths.cast, options)?,
            crew: load_csv_with(&paths.crew, options)?,
        })
    }

    /// Build a store from already-loaded tables.
    pub fn from_tables(
        releases: Dataset,
        popularity: Dataset,
        votes: Dataset,
        cast: Dataset,
        crew: Dataset,
    ) -> Self {
        Self {
            releases,
            popularity,
            votes,
            cast,
            crew,
        }
    }
}
