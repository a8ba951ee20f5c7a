//! Crawler core: pure state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{filter_by_salary, max_salary, visible_job_ids, JobId, JobPosting};
pub use msg::{Msg, ReportOutcome, SearchOutcome};
pub use state::{AppState, SearchPhase};
pub use update::update;
pub use view_model::{format_salary_brl, AppViewModel, JobCardView, SLIDER_STEP};
