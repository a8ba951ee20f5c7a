use std::fmt;

pub type JobId = u64;

/// A single job posting as returned by the scraping backend.
///
/// Postings only live for the duration of the current session; the whole set
/// is replaced on every successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: JobId,
    pub job_name: String,
    pub company: String,
    pub description: String,
    /// Whole currency units; 0 means the salary was not disclosed.
    pub salary: u32,
    pub work_type: Option<String>,
    pub location: String,
    pub link: String,
}

impl fmt::Display for JobPosting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({})", self.job_name, self.company, self.location)
    }
}

/// Highest salary present in the dataset, 0 when the dataset is empty.
///
/// Bounds the filter slider and labels it; undisclosed salaries count as 0 and
/// therefore never raise the bound.
pub fn max_salary(postings: &[JobPosting]) -> u32 {
    postings.iter().map(|posting| posting.salary).max().unwrap_or(0)
}

/// All postings paying at least `threshold`, original order preserved.
///
/// Applied uniformly for every threshold: at 0 the comparison admits every
/// posting, so the result equals the full dataset.
pub fn filter_by_salary(postings: &[JobPosting], threshold: u32) -> Vec<JobPosting> {
    postings
        .iter()
        .filter(|posting| posting.salary >= threshold)
        .cloned()
        .collect()
}

/// Ids of the postings the user is currently looking at.
///
/// The filtered view wins when it has entries; otherwise the canonical dataset
/// stands in. This ordered list is the payload of the email report.
pub fn visible_job_ids(filtered: &[JobPosting], canonical: &[JobPosting]) -> Vec<JobId> {
    let source = if filtered.is_empty() { canonical } else { filtered };
    source.iter().map(|posting| posting.id).collect()
}
