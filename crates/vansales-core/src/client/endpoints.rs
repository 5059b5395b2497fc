//! Raw endpoint calls for the ApiClient.

use log::warn;
use reqwest::Method;

use super::ApiClient;
use crate::{
    error::Result,
    models::{
        keep_decoded, Customer, CustomerId, JourneyOptions, JourneyPlan, Record, User,
        VisitUpdate,
    },
    params::SignIn,
};

impl ApiClient {
    /// `GET /api/journey-plans`, in server order.
    ///
    /// Each plan is decoded on its own; deciding which malformed plans
    /// matter is left to [`usable_plans`](crate::journey::usable_plans).
    pub async fn journey_plans(&self) -> Result<Vec<Record<JourneyPlan>>> {
        let request = self.request(Method::GET, &["api", "journey-plans"])?;
        self.send_json(request, "fetching journey plans", "journey plans")
            .await
            .inspect_err(|e| warn!("Error fetching journey plans: {e}"))
    }

    /// `GET /api/journey-plans/customers`, in server order. Malformed
    /// customers are skipped with a warning.
    pub async fn customers(&self) -> Result<Vec<Customer>> {
        let request = self.request(Method::GET, &["api", "journey-plans", "customers"])?;
        let records: Vec<Record<Customer>> = self
            .send_json(request, "fetching customers", "customers")
            .await
            .inspect_err(|e| warn!("Error fetching customers: {e}"))?;
        Ok(keep_decoded(records, "customer"))
    }

    /// `GET /api/journey-plans/options`.
    pub async fn options(&self) -> Result<JourneyOptions> {
        let request = self.request(Method::GET, &["api", "journey-plans", "options"])?;
        self.send_json(request, "fetching options", "options")
            .await
            .inspect_err(|e| warn!("Error fetching options: {e}"))
    }

    /// `POST /api/journey-plans/login`.
    pub async fn login(&self, credentials: &SignIn) -> Result<User> {
        let request = self
            .request(Method::POST, &["api", "journey-plans", "login"])?
            .json(credentials);
        self.send_json(request, "signing in", "user")
            .await
            .inspect_err(|e| warn!("Error during login: {e}"))
    }

    /// `PATCH /api/journey-plans/customers/{id}`.
    pub async fn update_customer_visit(
        &self,
        id: &CustomerId,
        update: &VisitUpdate,
    ) -> Result<Customer> {
        let request = self
            .request(
                Method::PATCH,
                &["api", "journey-plans", "customers", id.as_str()],
            )?
            .json(update);
        self.send_json(request, "updating customer visit", "customer")
            .await
            .inspect_err(|e| warn!("Error updating customer visit: {e}"))
    }
}
