use crate::model::{JobId, JobPosting};
use crate::state::SearchPhase;

/// Step size of the minimum-salary slider, in whole currency units.
pub const SLIDER_STEP: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SearchPhase,
    pub query: String,
    pub email: String,
    pub threshold: u32,
    /// Upper bound of the slider; equals the highest salary in the dataset.
    pub max_salary: u32,
    /// The filter control is only shown while postings are visible.
    pub show_filter: bool,
    pub report_in_flight: bool,
    pub cards: Vec<JobCardView>,
    pub dirty: bool,
}

/// One rendered posting card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub id: JobId,
    pub job_name: String,
    pub company: String,
    pub description: String,
    /// Absent when the salary was not disclosed (backend sends 0).
    pub salary_label: Option<String>,
    pub work_type: Option<String>,
    pub location: String,
    pub link: String,
}

impl JobCardView {
    pub(crate) fn from_posting(posting: &JobPosting) -> Self {
        let salary_label = if posting.salary == 0 {
            None
        } else {
            Some(format_salary_brl(posting.salary))
        };
        Self {
            id: posting.id,
            job_name: posting.job_name.clone(),
            company: posting.company.clone(),
            description: posting.description.clone(),
            salary_label,
            work_type: posting.work_type.clone(),
            location: posting.location.clone(),
            link: posting.link.clone(),
        }
    }
}

/// Formats a whole-unit amount as Brazilian reais, e.g. `R$ 3.000,00`.
///
/// The backend quotes salaries in whole BRL; the centavos are always zero.
pub fn format_salary_brl(amount: u32) -> String {
    let mut grouped = String::new();
    for (i, ch) in amount.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("R$ {grouped},00")
}
