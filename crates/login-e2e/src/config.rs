// Suite configuration
//
// Everything the original Playwright config file carried as framework
// options (headless flag, timeouts, video capture, artifact directory)
// plus the target base URL, so the suite can point at a local replica of
// the site during offline runs.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Production site the suite targets by default.
pub const DEFAULT_BASE_URL: &str = "https://practicetestautomation.com";

/// Path of the login page, relative to the base URL.
pub const LOGIN_PATH: &str = "/practice-test-login/";

/// Path the site navigates to after a successful login.
pub const LOGGED_IN_PATH: &str = "/logged-in-successfully/";

const DEFAULT_WAIT_TIMEOUT_MS: u64 = 10_000;

/// Browser engine to launch, mirroring the driver's browser types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }

    /// Parses a browser name; unknown names fall back to chromium.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "firefox" => BrowserKind::Firefox,
            "webkit" => BrowserKind::Webkit,
            _ => BrowserKind::Chromium,
        }
    }
}

/// Configuration for one suite run.
///
/// All fields have working defaults; `LOGIN_E2E_*` environment variables
/// override them via [`SuiteConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the target site (scheme + host, no path).
    pub base_url: String,
    /// Browser engine to launch.
    pub browser: BrowserKind,
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Budget for waiting on an element to appear, in milliseconds.
    pub wait_timeout_ms: u64,
    /// Directory receiving one screenshot per scenario.
    pub artifact_dir: PathBuf,
    /// Record a video of each session into the artifact directory.
    pub record_video: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        SuiteConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            browser: BrowserKind::default(),
            headless: true,
            wait_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            artifact_dir: PathBuf::from("screenshots"),
            record_video: false,
        }
    }
}

impl SuiteConfig {
    /// Builds a config from defaults overridden by `LOGIN_E2E_*` variables:
    /// `BASE_URL`, `BROWSER`, `HEADLESS`, `TIMEOUT_MS`, `ARTIFACT_DIR`,
    /// `VIDEO`.
    pub fn from_env() -> Self {
        let mut config = SuiteConfig::default();
        if let Ok(base) = std::env::var("LOGIN_E2E_BASE_URL") {
            config.base_url = base;
        }
        if let Ok(browser) = std::env::var("LOGIN_E2E_BROWSER") {
            config.browser = BrowserKind::parse(&browser);
        }
        if let Ok(headless) = std::env::var("LOGIN_E2E_HEADLESS") {
            config.headless = parse_bool(&headless, true);
        }
        if let Ok(timeout) = std::env::var("LOGIN_E2E_TIMEOUT_MS") {
            if let Ok(ms) = timeout.trim().parse::<u64>() {
                config.wait_timeout_ms = ms;
            }
        }
        if let Ok(dir) = std::env::var("LOGIN_E2E_ARTIFACT_DIR") {
            config.artifact_dir = PathBuf::from(dir);
        }
        if let Ok(video) = std::env::var("LOGIN_E2E_VIDEO") {
            config.record_video = parse_bool(&video, false);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = dir.into();
        self
    }

    pub fn with_record_video(mut self, record_video: bool) -> Self {
        self.record_video = record_video;
        self
    }

    /// Wait budget as a [`Duration`].
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
