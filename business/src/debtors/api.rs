//! Debtors backend contract and its HTTP implementation.
//!
//! Endpoints, relative to `BusinessConfig::api_url()`:
//! - `GET debtors/` returns a JSON array of debtors
//! - `DELETE debtors/{id}/` answers 204 (any 2xx is accepted)

use async_trait::async_trait;

use super::error::{DebtorsError, DebtorsResult};
use super::model::{Debtor, DebtorId};
use crate::BusinessConfig;
use crate::http::Client;

/// Service-access abstraction the list view is built on.
#[async_trait]
pub trait DebtorsBackend: Send + Sync {
    async fn fetch_debtors(&self) -> DebtorsResult<Vec<Debtor>>;

    async fn delete_debtor(&self, id: DebtorId) -> DebtorsResult<()>;
}

/// [`DebtorsBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDebtorsBackend {
    client: Client,
}

impl HttpDebtorsBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.client())
    }

    fn check_base(&self) -> DebtorsResult<()> {
        if self.client.api_url().trim().is_empty() {
            return Err(DebtorsError::MissingBaseUrl);
        }
        Ok(())
    }
}

#[async_trait]
impl DebtorsBackend for HttpDebtorsBackend {
    async fn fetch_debtors(&self) -> DebtorsResult<Vec<Debtor>> {
        self.check_base()?;

        let response = self
            .client
            .get("debtors/")
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.is_success() {
            return Err(DebtorsError::from_status(response.status));
        }

        Ok(response.json::<Vec<Debtor>>()?)
    }

    async fn delete_debtor(&self, id: DebtorId) -> DebtorsResult<()> {
        self.check_base()?;

        let response = self.client.delete(&format!("debtors/{id}/")).send().await?;

        if !response.is_success() {
            return Err(DebtorsError::from_status(response.status));
        }

        Ok(())
    }
}
