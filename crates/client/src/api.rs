//! Typed HTTP client for the `/api` surface.

use std::time::Duration;

use chrono::NaiveDate;
use nirmaan_shared::types::{
    AttendanceRequest, BudgetSummaryResponse, CreateExpenseRequest, CreateLabourRequest,
    CreatedResponse, ErrorBody, ExpenseId, ExpenseRow, LabourId, LabourRow, SuccessResponse,
    TotalPayRequest, UpdateBudgetRequest,
};
use reqwest::{Response, Url};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Errors talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The base URL could not be parsed.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// Rejected input.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Transport failure or undecodable body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body.
    #[error("{message} ({status})")]
    Api {
        /// HTTP status.
        status: u16,
        /// Machine-readable code from the error body.
        code: String,
        /// Human-readable message from the error body.
        message: String,
    },
}

impl ClientError {
    /// Returns the API error code, if the server sent one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// HTTP client for one Nirmaan server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` for an unparseable URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            }
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, base })
    }

    /// The server this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base.as_str().trim_end_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let (code, message) = match response.json::<ErrorBody>().await {
            Ok(body) => (body.error, body.message),
            Err(_) => (
                "http_error".to_string(),
                status.canonical_reason().unwrap_or("Unexpected status").to_string(),
            ),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn expect_success(response: Response) -> Result<(), ClientError> {
        Self::decode::<SuccessResponse>(response).await.map(|_| ())
    }

    /// GET /budget
    pub async fn budget(&self) -> Result<BudgetSummaryResponse, ClientError> {
        let response = self.http.get(self.url("/budget")).send().await?;
        Self::decode(response).await
    }

    /// PUT /budget
    pub async fn update_budget(&self, total_budget: Decimal) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url("/budget"))
            .json(&UpdateBudgetRequest { total_budget })
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// GET /labour
    pub async fn labour(&self) -> Result<Vec<LabourRow>, ClientError> {
        let response = self.http.get(self.url("/labour")).send().await?;
        Self::decode(response).await
    }

    /// POST /labour
    pub async fn add_worker(
        &self,
        name: &str,
        daily_wage: Decimal,
    ) -> Result<LabourId, ClientError> {
        let response = self
            .http
            .post(self.url("/labour"))
            .json(&CreateLabourRequest {
                name: name.to_string(),
                daily_wage,
            })
            .send()
            .await?;
        let created: CreatedResponse<LabourId> = Self::decode(response).await?;
        Ok(created.id)
    }

    /// PUT /labour/{id}/attendance
    pub async fn set_attendance(&self, id: LabourId, is_present: bool) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/labour/{id}/attendance")))
            .json(&AttendanceRequest { is_present })
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// PUT /labour/{id}/total-pay
    pub async fn set_total_pay(&self, id: LabourId, total_pay: Decimal) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/labour/{id}/total-pay")))
            .json(&TotalPayRequest { total_pay })
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// DELETE /labour/{id}
    pub async fn remove_worker(&self, id: LabourId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/labour/{id}")))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// GET /expenses
    pub async fn expenses(&self) -> Result<Vec<ExpenseRow>, ClientError> {
        let response = self.http.get(self.url("/expenses")).send().await?;
        Self::decode(response).await
    }

    /// POST /expenses
    pub async fn add_expense(
        &self,
        category: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<ExpenseId, ClientError> {
        let response = self
            .http
            .post(self.url("/expenses"))
            .json(&CreateExpenseRequest {
                category: category.to_string(),
                amount,
                date: date.format("%Y-%m-%d").to_string(),
            })
            .send()
            .await?;
        let created: CreatedResponse<ExpenseId> = Self::decode(response).await?;
        Ok(created.id)
    }

    /// DELETE /expenses/{id}
    pub async fn remove_expense(&self, id: ExpenseId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/expenses/{id}")))
            .send()
            .await?;
        Self::expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_api_prefix() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.url("/budget"), "http://localhost:8080/api/budget");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn test_api_error_code() {
        let err = ClientError::Api {
            status: 404,
            code: "not_found".into(),
            message: "Worker 3 not found".into(),
        };
        assert_eq!(err.code(), Some("not_found"));
        assert_eq!(err.to_string(), "Worker 3 not found (404)");
    }
}
