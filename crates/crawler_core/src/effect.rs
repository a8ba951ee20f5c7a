use crate::model::JobId;

/// Requests the update function asks the shell to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the query URL to the backend search endpoint. The generation is
    /// echoed back in `Msg::SearchFinished` so stale responses can be fenced.
    FetchJobs { generation: u64, url: String },
    /// Send the recipient address and the visible posting ids to the backend
    /// reporting endpoint.
    SendReport { email: String, job_ids: Vec<JobId> },
}
