//! Core library for the van sales journey plan client.
//!
//! This crate talks to the journey plan API, selects the signed-in
//! employee's current plan and sorts the plan's customers into visit status
//! tabs (PENDING, VISITED, MISSED, ZERO SALES, UNPLANNED).
//!
//! # Architecture
//!
//! - **Remote API** ([`client`]): typed endpoint calls over `reqwest`, plus
//!   the sign-in, journey load and visit completion operations
//! - **Classification** ([`journey`]): pure plan selection and tab
//!   classification, and the [`JourneyBoard`] that keeps the latest load
//! - **Domain Models** ([`models`]): wire types with lenient decoding
//! - **Display** ([`display`]): markdown rendering shared by the CLI and
//!   the MCP server
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vansales_core::{
//!     journey::VisitClassifier,
//!     models::{CalendarDay, VisitTab},
//!     params::SignIn,
//!     ApiClientBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClientBuilder::new()
//!     .with_base_url("http://localhost:3000")
//!     .build()?;
//!
//! let session = client
//!     .sign_in(&SignIn {
//!         username: "vansales_test01".to_string(),
//!         password: "password123".to_string(),
//!     })
//!     .await?;
//!
//! let today = CalendarDay::today();
//! let snapshot = client.load_journey(&session, &today).await?;
//! let view = snapshot.view(&VisitClassifier::default(), &today, &VisitTab::Pending, "");
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod journey;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use client::{ApiClient, ApiClientBuilder};
pub use config::Config;
pub use display::{CustomerList, Profile, SignOutNotice, VisitResult};
pub use error::{Result, VanSalesError};
pub use journey::{JourneyBoard, JourneySnapshot, JourneyView, VisitClassifier};
pub use models::{CalendarDay, Customer, CustomerId, JourneyPlan, User, VisitOutcome, VisitTab};
pub use params::{CompleteVisit, CustomerRef, ListJourney, SignIn};
pub use session::Session;
