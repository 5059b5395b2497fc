//! Command handlers and clap argument wrappers
//!
//! Arguments follow the parameter wrapper pattern: each clap struct converts
//! into the interface-neutral type from `vansales_core::params`, so the CLI
//! and the MCP server drive the core with the same values.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ApiClient / Journey
//! ```
//!
//! The CLI keeps no state between invocations. Commands that need a user
//! sign in first, do their work and sign out before returning.

use std::fmt;

use anyhow::{Context, Error, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::{debug, info};
use vansales_core::{
    display::{Profile, VisitResult},
    journey::VisitClassifier,
    models::{CalendarDay, VisitTab},
    params::{CompleteVisit, CustomerRef, ListJourney, SignIn},
    ApiClient, Session, VanSalesError,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Visit status tab, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Pending,
    Visited,
    Missed,
    ZeroSales,
    Unplanned,
}

impl From<TabArg> for VisitTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Pending => VisitTab::Pending,
            TabArg::Visited => VisitTab::Visited,
            TabArg::Missed => VisitTab::Missed,
            TabArg::ZeroSales => VisitTab::ZeroSales,
            TabArg::Unplanned => VisitTab::Unplanned,
        }
    }
}

impl fmt::Display for TabArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", VisitTab::from(*self))
    }
}

/// List today's journey
///
/// Customers on the current plan are sorted into tabs by visit status.
/// Search narrows every tab to customers whose name or customer code
/// contains the text, ignoring case.
#[derive(Args, Default)]
pub struct JourneyArgs {
    #[arg(short, long, value_enum, help = "Tab to list [default: pending]")]
    pub tab: Option<TabArg>,
    #[arg(short, long, help = "Filter by customer name or customer code")]
    pub search: Option<String>,
}

impl From<JourneyArgs> for ListJourney {
    fn from(val: JourneyArgs) -> Self {
        ListJourney {
            tab: val.tab.map(|tab| tab.to_string()),
            search: val.search,
        }
    }
}

#[derive(Args)]
pub struct ShowCustomerArgs {
    #[arg(help = "Customer ID as shown in the journey list")]
    pub id: String,
}

impl From<ShowCustomerArgs> for CustomerRef {
    fn from(val: ShowCustomerArgs) -> Self {
        CustomerRef { id: val.id }
    }
}

/// Complete a visit
///
/// Marks the customer as visited. With --order the visit is booked as a
/// sale; without it the visit is recorded with zero sales.
#[derive(Args)]
pub struct VisitArgs {
    #[arg(help = "Customer ID as shown in the journey list")]
    pub id: String,
    #[arg(long, help = "An order was taken during the visit")]
    pub order: bool,
}

impl From<VisitArgs> for CompleteVisit {
    fn from(val: VisitArgs) -> Self {
        CompleteVisit {
            id: val.id,
            take_order: val.order,
        }
    }
}

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Show customer details
    #[command(alias = "s")]
    Show(ShowCustomerArgs),
    /// Complete a visit to a customer
    #[command(alias = "v")]
    Visit(VisitArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against the API and renders the results.
pub struct Cli {
    client: ApiClient,
    credentials: SignIn,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: ApiClient, credentials: SignIn, renderer: TerminalRenderer) -> Self {
        Self {
            client,
            credentials,
            renderer,
        }
    }

    async fn sign_in(&self) -> Result<Session> {
        self.credentials.validate().context(
            "Sign-in required: pass --username and --password or set VANSALES_USERNAME and VANSALES_PASSWORD",
        )?;
        let session = self.client.sign_in(&self.credentials).await?;
        Ok(session)
    }

    pub async fn handle_customer_command(&self, command: CustomerCommands) -> Result<()> {
        match command {
            CustomerCommands::Show(args) => self.show_customer(&args.into()).await,
            CustomerCommands::Visit(args) => self.complete_visit(&args.into()).await,
        }
    }

    pub async fn journey(&self, params: &ListJourney) -> Result<()> {
        let session = self.sign_in().await?;
        let today = CalendarDay::today();
        debug!("Listing {} for {today}", params.tab());

        let snapshot = self
            .client
            .load_journey(&session, &today)
            .await
            .context("Failed to load data")?;
        let view = snapshot.view(
            &VisitClassifier::default(),
            &today,
            &params.tab(),
            params.query(),
        );
        session.sign_out();

        self.renderer.render(&view.to_string())
    }

    pub async fn show_customer(&self, params: &CustomerRef) -> Result<()> {
        let id = params.customer_id()?;
        let customer = self
            .client
            .find_customer(&id)
            .await
            .map_err(|e| match e {
                VanSalesError::CustomerNotFound { .. } => Error::new(e).context("Customer not found"),
                other => Error::new(other).context("Failed to load data"),
            })?;

        self.renderer.render(&customer.to_string())
    }

    pub async fn complete_visit(&self, params: &CompleteVisit) -> Result<()> {
        let id = params.customer_id()?;
        let outcome = params.outcome();
        let customer = self
            .client
            .complete_visit(&id, outcome)
            .await
            .context("Failed to complete visit")?;
        info!("Visit to {id} recorded");

        self.renderer
            .render(&VisitResult::new(customer, outcome).to_string())
    }

    pub async fn profile(&self) -> Result<()> {
        let session = self.sign_in().await?;
        let output = Profile(session.user()).to_string();
        session.sign_out();

        self.renderer.render(&output)
    }

    pub async fn options(&self) -> Result<()> {
        let options = self
            .client
            .options()
            .await
            .context("Failed to load options")?;

        self.renderer
            .render(&format!("# Options\n\n```json\n{}\n```\n", options.to_pretty_json()))
    }
}
