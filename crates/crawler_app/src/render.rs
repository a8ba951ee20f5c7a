use crawler_core::{format_salary_brl, AppViewModel, SearchPhase, SLIDER_STEP};

/// Renders the view model as terminal text. Pure so it can be tested without
/// a terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    if view.phase == SearchPhase::Loading {
        out.push_str("Searching...\n");
        return out;
    }

    if view.show_filter {
        out.push_str(&format!(
            "Minimum salary: {} — {} (step {})\n\n",
            format_salary_brl(view.threshold),
            format_salary_brl(view.max_salary),
            SLIDER_STEP
        ));
    }

    if view.cards.is_empty() {
        match view.phase {
            SearchPhase::Idle => out.push_str("No search yet. Try `search <url>`.\n"),
            _ => out.push_str("No postings match the current filter.\n"),
        }
    }

    for card in &view.cards {
        out.push_str(&format!("[{}] {}\n", card.id, card.job_name));
        out.push_str(&format!("    {}\n", card.company));
        out.push_str(&format!("    {}\n", card.description));

        let mut labels = Vec::new();
        if let Some(salary) = &card.salary_label {
            labels.push(salary.clone());
        }
        if let Some(work_type) = &card.work_type {
            labels.push(work_type.clone());
        }
        labels.push(card.location.clone());
        out.push_str(&format!("    {}\n", labels.join(" | ")));
        out.push_str(&format!("    {}\n\n", card.link));
    }

    if view.report_in_flight {
        out.push_str("Sending email report...\n");
    }

    out
}
