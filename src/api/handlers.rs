use axum::extract::State;
use axum::Json;
use tracing::error;

use super::error::ApiError;
use super::AppState;
use crate::database::{self, queries};
use crate::models::{SectorCompanyRequest, SectorCompanyResponse, SectorListResponse};

/// `GET /sector-list`
pub async fn sector_list(
    State(state): State<AppState>,
) -> Result<Json<SectorListResponse>, ApiError> {
    match load_sector_list(&state).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("Error in sector_list: {:#}", err);
            Err(ApiError::SectorList)
        }
    }
}

async fn load_sector_list(state: &AppState) -> anyhow::Result<SectorListResponse> {
    let sectors = database::fetch_table(
        &state.config.database_path,
        queries::SECTOR_LIST,
        &[],
        false,
    )
    .await?;

    Ok(SectorListResponse {
        status: "success".to_string(),
        sector_list: sectors.string_column("sectorBig")?,
    })
}

/// `POST /sector-company-list`
pub async fn sector_company_list(
    State(state): State<AppState>,
    Json(request): Json<SectorCompanyRequest>,
) -> Result<Json<SectorCompanyResponse>, ApiError> {
    match load_sector_companies(&state, &request.sector).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("Error in sector_company_list: {:#}", err);
            Err(ApiError::SectorCompany)
        }
    }
}

async fn load_sector_companies(
    state: &AppState,
    sector: &str,
) -> anyhow::Result<SectorCompanyResponse> {
    let companies = database::fetch_table(
        &state.config.database_path,
        queries::COMPANIES_BY_SECTOR,
        &[sector],
        false,
    )
    .await?;

    let finances = database::fetch_table(
        &state.config.database_path,
        queries::FINANCES_BY_SECTOR,
        &[sector],
        false,
    )
    .await?;

    Ok(SectorCompanyResponse {
        status: "success".to_string(),
        company_list: companies.string_column("name")?,
        finance_list: serde_json::to_string(&finances.records())?,
    })
}
