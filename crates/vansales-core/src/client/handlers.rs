//! Journey operations composed from the raw endpoints.

use log::{debug, info, warn};

use super::ApiClient;
use crate::{
    error::{Result, VanSalesError},
    journey::{usable_plans, JourneySnapshot},
    models::{CalendarDay, Customer, CustomerId, VisitOutcome, VisitUpdate},
    params::SignIn,
    session::Session,
};

/// Message shown when the server rejects a login without saying why.
pub const LOGIN_FAILED: &str = "Login failed";

impl ApiClient {
    /// Signs in and opens a session for the returned user.
    ///
    /// # Errors
    ///
    /// Returns `VanSalesError::SignInFailed` carrying the server's `error`
    /// message, or "Login failed" when there is none (including transport
    /// failures and unreadable responses).
    pub async fn sign_in(&self, credentials: &SignIn) -> Result<Session> {
        match self.login(credentials).await {
            Ok(user) => {
                info!("Signed in as {}", user.display_name());
                Ok(Session::new(user))
            }
            Err(e) => Err(VanSalesError::SignInFailed {
                message: e.server_message().unwrap_or(LOGIN_FAILED).to_string(),
            }),
        }
    }

    /// Loads today's journey for the signed-in employee.
    ///
    /// Plans and customers are fetched concurrently. If either request fails
    /// the whole load fails and nothing is returned. Malformed records are
    /// skipped, except for a malformed plan that could be the employee's
    /// current one.
    pub async fn load_journey(
        &self,
        session: &Session,
        today: &CalendarDay,
    ) -> Result<JourneySnapshot> {
        let (records, customers) = tokio::try_join!(self.journey_plans(), self.customers())?;
        let plans = usable_plans(records, session.employee_name(), today)
            .inspect_err(|e| warn!("Error reading journey plans: {e}"))?;
        debug!(
            "Fetched {} plans and {} customers for {}",
            plans.len(),
            customers.len(),
            today
        );

        Ok(JourneySnapshot::from_remote(
            &plans,
            customers,
            session.employee_name(),
            today,
        ))
    }

    /// Fetches the customer list and returns the customer with `id`.
    ///
    /// # Errors
    ///
    /// Returns `VanSalesError::CustomerNotFound` if the id is not in the list.
    pub async fn find_customer(&self, id: &CustomerId) -> Result<Customer> {
        self.customers()
            .await?
            .into_iter()
            .find(|customer| &customer.id == id)
            .ok_or_else(|| VanSalesError::CustomerNotFound { id: id.to_string() })
    }

    /// Marks the visit to `id` as completed with the given outcome and
    /// returns the updated customer.
    pub async fn complete_visit(
        &self,
        id: &CustomerId,
        outcome: VisitOutcome,
    ) -> Result<Customer> {
        let update = VisitUpdate::from(outcome);
        let customer = self.update_customer_visit(id, &update).await?;
        info!(
            "Completed visit to customer {id} ({outcome:?}, amount {})",
            update.sales_amount
        );
        Ok(customer)
    }
}

