//! `cineprep` is a small library for preparing and querying the movie-metadata
//! tables behind the movies analytics API.
//!
//! CSV exports load into an in-memory [`types::Dataset`] with dynamically-typed
//! cells; the [`cleaning`] layer then coerces, validates, deduplicates, and
//! extracts nested values, and the [`queries`] layer answers the API's lookup
//! and aggregate questions over the cleaned tables.
//!
//! ## What the cleaning layer does
//!
//! - **Numeric coercion**: [`cleaning::coerce_numeric`] with a configurable
//!   fallback for non-convertible cells
//! - **Duplicate/blank handling**: [`cleaning::count_duplicates`],
//!   [`cleaning::remove_duplicates`], [`cleaning::count_blanks`],
//!   [`cleaning::remove_blanks`]
//! - **Expression validation**: [`cleaning::validate_expressions`] classifies
//!   each cell as a valid literal, blank, missing, or malformed
//! - **Record deduplication**: [`cleaning::dedup_records`] by key-tuple
//!   equality over parsed record lists
//! - **Nested extraction**: [`cleaning::extract_values`] and
//!   [`cleaning::extract_record_values`] pull keys out of encoded cells into
//!   new columns
//!
//! Malformed data never raises anywhere in the cleaning layer: unparsable
//! cells degrade to a fallback policy or get tallied in a report. Broken call
//! contracts (missing columns, mismatched key/output lists) fail immediately
//! with a [`CleanError`].
//!
//! ## Quick example: load and clean a table
//!
//! ```no_run
//! use cineprep::cleaning::{coerce_numeric, extract_values, remove_blanks};
//! use cineprep::ingestion::load_csv_from_path;
//!
//! # fn main() -> Result<(), cineprep::CleanError> {
//! let mut movies = load_csv_from_path("movies.csv")?;
//!
//! coerce_numeric(&mut movies, "budget", None)?;
//! extract_values(&mut movies, "crew", &["name", "job"], &["crew_name", "crew_job"])?;
//! let movies = remove_blanks(&movies, "release_date")?;
//! println!("rows={}", movies.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: answer API queries
//!
//! ```no_run
//! use cineprep::ingestion::LoadOptions;
//! use cineprep::queries::{MovieStore, MovieStorePaths};
//!
//! # fn main() -> Result<(), cineprep::CleanError> {
//! let paths = MovieStorePaths {
//!     releases: "data/api_data12.csv".into(),
//!     popularity: "data/api_data3.csv".into(),
//!     votes: "data/api_data4.csv".into(),
//!     cast: "data/api_data5.csv".into(),
//!     crew: "data/api_data6.csv".into(),
//! };
//! let store = MovieStore::load(&paths, &LoadOptions::default())?;
//!
//! println!("enero: {}", store.released_in_month("enero")?);
//! for score in store.movie_popularity("toy-story")? {
//!     println!("{} ({}): {:?}", score.title, score.year, score.popularity);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading and load observability
//! - [`types`]: in-memory dataset and value types
//! - [`cleaning`]: validation and extraction utilities
//! - [`literal`]: safe parsing of literal expressions found inside cells
//! - [`queries`]: lookup/aggregate queries over the loaded tables
//! - [`error`]: error types used across the crate

pub mod cleaning;
pub mod error;
pub mod ingestion;
pub mod literal;
pub mod queries;
pub mod types;

pub use error::{CleanError, CleanResult};
