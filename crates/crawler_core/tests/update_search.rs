use std::sync::Once;

use crawler_core::{
    update, AppState, Effect, JobPosting, Msg, SearchOutcome, SearchPhase,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn posting(id: u64, salary: u32) -> JobPosting {
    JobPosting {
        id,
        job_name: format!("Job {id}"),
        company: "Acme".to_string(),
        description: "Do things".to_string(),
        salary,
        work_type: None,
        location: "Recife".to_string(),
        link: format!("https://example.com/jobs/{id}"),
    }
}

fn submit_search(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(url.to_string()));
    update(state, Msg::SearchSubmitted)
}

#[test]
fn submit_enters_loading_and_emits_fetch_effect() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = submit_search(state, "https://example.com/jobs");

    assert_eq!(state.phase(), SearchPhase::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchJobs {
            generation: 1,
            url: "https://example.com/jobs".to_string(),
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn successful_search_stores_canonical_and_filtered() {
    init_logging();
    let (state, _) = submit_search(AppState::new(), "https://example.com/jobs");

    let (mut state, effects) = update(
        state,
        Msg::SearchFinished {
            generation: 1,
            outcome: SearchOutcome::Loaded(vec![posting(1, 3000), posting(2, 5000)]),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, SearchPhase::Loaded);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.threshold, 0);
    assert_eq!(view.max_salary, 5000);
    assert!(view.show_filter);
    assert!(state.consume_dirty());
}

#[test]
fn failed_search_clears_loading_and_keeps_data() {
    init_logging();
    // Load an initial dataset, then fail a second search over it.
    let (state, _) = submit_search(AppState::new(), "https://example.com/jobs");
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 1,
            outcome: SearchOutcome::Loaded(vec![posting(1, 3000)]),
        },
    );

    let (state, _) = update(state, Msg::SearchSubmitted);
    assert_eq!(state.phase(), SearchPhase::Loading);

    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 2,
            outcome: SearchOutcome::Failed,
        },
    );
    let view = state.view();

    assert_eq!(view.phase, SearchPhase::Loaded);
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].id, 1);
}

#[test]
fn failed_first_search_returns_to_idle() {
    init_logging();
    let (state, _) = submit_search(AppState::new(), "https://example.com/jobs");

    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 1,
            outcome: SearchOutcome::Failed,
        },
    );

    assert_eq!(state.phase(), SearchPhase::Idle);
    assert!(state.view().cards.is_empty());
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    // Two overlapping searches: generation 1 then 2.
    let (state, _) = submit_search(AppState::new(), "https://old.example.com");
    let (state, effects) = submit_search(state, "https://new.example.com");
    assert_eq!(
        effects,
        vec![Effect::FetchJobs {
            generation: 2,
            url: "https://new.example.com".to_string(),
        }]
    );

    // The first search resolves late; its postings must not land.
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 1,
            outcome: SearchOutcome::Loaded(vec![posting(9, 1000)]),
        },
    );
    assert_eq!(state.phase(), SearchPhase::Loading);
    assert!(state.view().cards.is_empty());

    // The newest search still lands normally.
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 2,
            outcome: SearchOutcome::Loaded(vec![posting(1, 3000)]),
        },
    );
    assert_eq!(state.phase(), SearchPhase::Loaded);
    assert_eq!(state.view().cards[0].id, 1);
}

#[test]
fn new_search_replaces_dataset_wholesale() {
    init_logging();
    let (state, _) = submit_search(AppState::new(), "https://example.com/a");
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 1,
            outcome: SearchOutcome::Loaded(vec![posting(1, 3000), posting(2, 5000)]),
        },
    );
    let (state, _) = update(state, Msg::ThresholdChanged(4000));
    assert_eq!(state.view().cards.len(), 1);

    let (state, _) = submit_search(state, "https://example.com/b");
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 2,
            outcome: SearchOutcome::Loaded(vec![posting(7, 2000)]),
        },
    );
    let view = state.view();

    // Threshold resets with the new dataset; nothing of the old set survives.
    assert_eq!(view.threshold, 0);
    assert_eq!(view.max_salary, 2000);
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].id, 7);
}
