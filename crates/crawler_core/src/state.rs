use crate::model::{filter_by_salary, max_salary, JobPosting};
use crate::msg::{ReportOutcome, SearchOutcome};
use crate::view_model::{AppViewModel, JobCardView};

/// Lifecycle of the search request, owned by the search alone.
///
/// The email report tracks its own in-flight flag so that neither operation's
/// completion can mask the other's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    email: String,
    /// Full dataset from the most recent successful search.
    canonical: Vec<JobPosting>,
    /// Invariant: always `filter_by_salary(canonical, threshold)`.
    filtered: Vec<JobPosting>,
    threshold: u32,
    phase: SearchPhase,
    /// Bumped on every submitted search; completions carrying an older value
    /// are discarded.
    search_generation: u64,
    report_in_flight: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn search_generation(&self) -> u64 {
        self.search_generation
    }

    pub fn report_in_flight(&self) -> bool {
        self.report_in_flight
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_email(&mut self, email: String) {
        if self.email != email {
            self.email = email;
            self.mark_dirty();
        }
    }

    /// Enters `Loading` and hands out a fresh generation for the request.
    pub(crate) fn begin_search(&mut self) -> u64 {
        self.search_generation += 1;
        self.phase = SearchPhase::Loading;
        self.mark_dirty();
        self.search_generation
    }

    /// Applies a finished search. Returns false when the response was stale
    /// and nothing changed.
    pub(crate) fn apply_search_outcome(&mut self, generation: u64, outcome: SearchOutcome) -> bool {
        if generation != self.search_generation {
            return false;
        }
        match outcome {
            SearchOutcome::Loaded(postings) => {
                self.canonical = postings;
                self.threshold = 0;
                self.filtered = filter_by_salary(&self.canonical, self.threshold);
                self.phase = SearchPhase::Loaded;
            }
            SearchOutcome::Failed => {
                // Data stays whatever it was before the attempt.
                self.phase = if self.canonical.is_empty() {
                    SearchPhase::Idle
                } else {
                    SearchPhase::Loaded
                };
            }
        }
        self.mark_dirty();
        true
    }

    /// Recomputes the filtered view at a new threshold, clamped to the
    /// highest salary in the canonical dataset. No-op before any results.
    pub(crate) fn set_threshold(&mut self, threshold: u32) {
        if self.canonical.is_empty() {
            return;
        }
        let clamped = threshold.min(max_salary(&self.canonical));
        self.threshold = clamped;
        self.filtered = filter_by_salary(&self.canonical, clamped);
        self.mark_dirty();
    }

    pub(crate) fn begin_report(&mut self) {
        self.report_in_flight = true;
        self.mark_dirty();
    }

    pub(crate) fn apply_report_outcome(&mut self, outcome: ReportOutcome) {
        if outcome == ReportOutcome::Accepted {
            self.email.clear();
        }
        self.report_in_flight = false;
        self.mark_dirty();
    }

    pub(crate) fn canonical(&self) -> &[JobPosting] {
        &self.canonical
    }

    pub(crate) fn filtered(&self) -> &[JobPosting] {
        &self.filtered
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            query: self.query.clone(),
            email: self.email.clone(),
            threshold: self.threshold,
            max_salary: max_salary(&self.canonical),
            show_filter: !self.filtered.is_empty(),
            report_in_flight: self.report_in_flight,
            cards: self.filtered.iter().map(JobCardView::from_posting).collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
