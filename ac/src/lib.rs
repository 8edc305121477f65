//! ArticleControl - validation of proposed newspaper article counts
//!
//! Loads historical circulation counts per publication from a CSV file and
//! checks each proposed count against those statistics before recording it.
//!
//! # Validation cascade
//!
//! ```text
//! proposed ──► threshold (80% of mean) ──► variability (coef. of variation)
//!                                             ├── high: Q1 / IQR checks
//!                                             └── low:  must equal the mode
//! ```
//!
//! # Example
//!
//! ```ignore
//! use articlecontrol::{Desk, Decision};
//!
//! let mut desk = Desk::default();
//! desk.load("circulacion.csv")?;
//! let decision = desk.submit("El Diario", "120", chrono::Local::now().date_naive())?;
//! assert!(decision.is_accepted());
//! ```

pub mod cli;
pub mod config;
pub mod desk;
pub mod error;
pub mod history;
pub mod records;
pub mod render;
pub mod reports;
pub mod shell;
pub mod stats;
pub mod validator;

pub use config::Config;
pub use desk::Desk;
pub use error::{LoadError, ReportError, SubmitError, ValidationError};
pub use history::{HistoryStore, LoadSummary};
pub use records::{AcceptedRecord, RecordStore};
pub use reports::{GridRow, Prediction, WeeklyRow};
pub use stats::SeriesSummary;
pub use validator::{Decision, ValidationRules, Validator, parse_count, validate};

/// Fraction of the historical mean below which a count is always rejected
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.8;

/// Coefficient of variation above which a series counts as highly variable
pub const DEFAULT_HIGH_VARIABILITY_CV: f64 = 0.2;

/// Multiplier applied to the IQR for the outlier check
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Weeks shown in the historical grid
pub const DEFAULT_GRID_WEEKS: usize = 6;

/// Largest grid the history view will lay out (ten years)
pub const MAX_GRID_WEEKS: usize = 520;

/// Half-width of the random adjustment applied to predictions
pub const DEFAULT_PREDICTION_JITTER: f64 = 5.0;

/// Days per week in every weekly layout
pub const DAYS_PER_WEEK: usize = 7;

/// Spanish weekday names, Monday first
pub const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"];

/// Abbreviated weekday names used in grid headers
pub const WEEKDAY_ABBREVS: [&str; DAYS_PER_WEEK] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sa", "Do"];
