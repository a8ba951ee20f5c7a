use crate::model::JobPosting;

/// Result of a finished search request, as seen by the state machine.
///
/// Transport detail never reaches the core; the shell logs the error and
/// reduces it to `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Loaded(Vec<JobPosting>),
    Failed,
}

/// Result of a finished email-report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Accepted,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query URL input.
    QueryChanged(String),
    /// User submitted the current query URL for scraping.
    SearchSubmitted,
    /// A search request finished. `generation` names the submission the
    /// response belongs to; stale generations are discarded.
    SearchFinished {
        generation: u64,
        outcome: SearchOutcome,
    },
    /// User moved the minimum-salary slider.
    ThresholdChanged(u32),
    /// User edited the report recipient input.
    EmailChanged(String),
    /// User requested an email report of the visible postings.
    ReportSubmitted,
    /// The email-report request finished.
    ReportFinished { outcome: ReportOutcome },
    /// Fallback for placeholder wiring.
    NoOp,
}
