use serde::{Deserialize, Serialize};

/// One posting as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: u64,
    pub job_name: String,
    pub company: String,
    pub description: String,
    /// Whole currency units; 0 when not disclosed.
    pub salary: u32,
    #[serde(default)]
    pub type_of_work: Option<String>,
    pub location: String,
    pub link: String,
}

/// Body of `POST /trabalhos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest<'a> {
    pub url: &'a str,
}

/// Body of `POST /email`. The backend's field names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest<'a> {
    pub email: &'a str,
    pub lista: &'a [u64],
}
