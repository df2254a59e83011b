//! login-e2e: end-to-end browser tests for the Practice Test Automation
//! login page.
//!
//! A [`pages::LoginPage`] page object hides the site's selectors behind
//! semantic operations; [`Scenario`] describes one credentials-in,
//! observable-out interaction; [`Session`] owns the browser session a
//! scenario runs in. The integration suite under `tests/` drives a real
//! browser against a local replica of the site, so it runs offline and
//! deterministically.
//!
//! # Example
//!
//! ```ignore
//! use login_e2e::{Scenario, Session, SuiteConfig};
//!
//! #[tokio::main]
//! async fn main() -> login_e2e::Result<()> {
//!     let config = SuiteConfig::from_env();
//!     let session = Session::launch(&config).await?;
//!
//!     for scenario in Scenario::canonical() {
//!         scenario.run(&session, &config).await?;
//!     }
//!
//!     session.close().await
//! }
//! ```
//!
//! Browsers must be installed for the bundled driver version first:
//!
//! ```bash
//! npx playwright@1.56.1 install chromium
//! ```

pub mod config;
pub mod error;
pub mod pages;
pub mod scenario;
pub mod session;

pub use config::{BrowserKind, SuiteConfig};
pub use error::{Error, Result};
pub use scenario::{Expected, Scenario};
pub use session::Session;
