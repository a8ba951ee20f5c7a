use crawler_core::{
    format_salary_brl, update, AppState, JobPosting, Msg, SearchOutcome, SLIDER_STEP,
};

fn posting(id: u64, salary: u32, work_type: Option<&str>) -> JobPosting {
    JobPosting {
        id,
        job_name: format!("Job {id}"),
        company: "Acme".to_string(),
        description: "Do things".to_string(),
        salary,
        work_type: work_type.map(str::to_string),
        location: "Recife".to_string(),
        link: format!("https://example.com/jobs/{id}"),
    }
}

fn loaded_state(postings: Vec<JobPosting>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            generation: 1,
            outcome: SearchOutcome::Loaded(postings),
        },
    );
    state
}

#[test]
fn salary_formats_as_brazilian_reais() {
    assert_eq!(format_salary_brl(0), "R$ 0,00");
    assert_eq!(format_salary_brl(500), "R$ 500,00");
    assert_eq!(format_salary_brl(3000), "R$ 3.000,00");
    assert_eq!(format_salary_brl(1_234_567), "R$ 1.234.567,00");
}

#[test]
fn slider_step_is_five_hundred() {
    assert_eq!(SLIDER_STEP, 500);
}

#[test]
fn undisclosed_salary_has_no_label() {
    let state = loaded_state(vec![posting(1, 0, None)]);
    let view = state.view();

    assert_eq!(view.cards[0].salary_label, None);
}

#[test]
fn disclosed_salary_is_formatted() {
    let state = loaded_state(vec![posting(1, 3000, Some("Remote"))]);
    let card = &state.view().cards[0];

    assert_eq!(card.salary_label.as_deref(), Some("R$ 3.000,00"));
    assert_eq!(card.work_type.as_deref(), Some("Remote"));
}

#[test]
fn filter_control_hidden_when_view_is_empty() {
    let empty = loaded_state(Vec::new());
    assert!(!empty.view().show_filter);

    let populated = loaded_state(vec![posting(1, 3000, None)]);
    assert!(populated.view().show_filter);
}

#[test]
fn view_reflects_input_edits() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::QueryChanged("https://example.com".to_string()));
    let (mut state, _) = update(state, Msg::EmailChanged("a@b.com".to_string()));

    let view = state.view();
    assert_eq!(view.query, "https://example.com");
    assert_eq!(view.email, "a@b.com");
    assert!(state.consume_dirty());

    // Re-sending the same text leaves the state clean.
    let (mut state, _) = update(state, Msg::EmailChanged("a@b.com".to_string()));
    assert!(!state.consume_dirty());
}
