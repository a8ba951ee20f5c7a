//! Crawler API: async jobs-service client and background request execution.
mod client;
mod handle;
mod records;
mod types;

pub use client::{ClientSettings, JobsApi, ReqwestJobsApi};
pub use handle::ClientHandle;
pub use records::{JobRecord, ReportRequest, SearchRequest};
pub use types::{ApiError, ClientEvent, FailureKind, Generation};
