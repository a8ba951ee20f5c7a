use crate::model::visible_job_ids;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Neither the query URL nor the email address is validated before
/// submission; rejection semantics belong to the backend.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let generation = state.begin_search();
            vec![Effect::FetchJobs {
                generation,
                url: state.query().to_owned(),
            }]
        }
        Msg::SearchFinished {
            generation,
            outcome,
        } => {
            // Overlapping searches are allowed; only the newest one may land.
            state.apply_search_outcome(generation, outcome);
            Vec::new()
        }
        Msg::ThresholdChanged(threshold) => {
            state.set_threshold(threshold);
            Vec::new()
        }
        Msg::EmailChanged(email) => {
            state.set_email(email);
            Vec::new()
        }
        Msg::ReportSubmitted => {
            state.begin_report();
            vec![Effect::SendReport {
                email: state.email().to_owned(),
                job_ids: visible_job_ids(state.filtered(), state.canonical()),
            }]
        }
        Msg::ReportFinished { outcome } => {
            state.apply_report_outcome(outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
