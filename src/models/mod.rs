use serde::{Deserialize, Serialize};

/// Body of `POST /sector-company-list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorCompanyRequest {
    pub sector: String,
}

/// Response of `GET /sector-list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorListResponse {
    pub status: String,
    pub sector_list: Vec<String>,
}

/// Response of `POST /sector-company-list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorCompanyResponse {
    pub status: String,
    pub company_list: Vec<String>,
    /// JSON-encoded array of finance row objects, passed through as text.
    pub finance_list: String,
}
