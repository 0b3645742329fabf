use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::confirmation::{
    ConfirmationRequest, ConfirmationResponse, ConfirmationService, ConfirmationServiceApi,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::{AcceptsJson, FinancialId, ValidatedJson};

pub struct ConfirmationController {
    confirmation_service: Arc<ConfirmationService>,
}

impl ConfirmationController {
    pub fn new(confirmation_service: Arc<ConfirmationService>) -> Self {
        Self {
            confirmation_service,
        }
    }

    /// POST /confirmation-of-payee - Check a payee name against the account
    pub async fn confirm(
        State(controller): State<Arc<ConfirmationController>>,
        _: AcceptsJson,
        FinancialId(financial_id): FinancialId,
        ValidatedJson(request): ValidatedJson<ConfirmationRequest>,
    ) -> AppResult<Json<ConfirmationResponse>> {
        tracing::info!(financial_id = %financial_id, "Confirmation of payee requested");

        let check = request.into_check().ok_or_else(|| {
            AppError::MalformedBody("validated request is missing payee details".to_string())
        })?;

        let response = controller.confirmation_service.confirm(check).await?;
        Ok(Json(response))
    }
}
