// Browser session bootstrap
//
// One `Session` per scenario: the session owns the driver handle, browser,
// context, and page, so navigation state is explicit rather than ambient.

use std::path::PathBuf;

use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright, RecordVideo,
};
use tracing::{debug, info};

use crate::config::{BrowserKind, SuiteConfig};
use crate::error::{Error, Result};

/// An isolated browser session for a single scenario.
///
/// Construction launches the driver and a fresh browser context honoring
/// the suite's headless and video-capture settings; [`Session::close`] is
/// the explicit teardown the original suite ran after each test.
pub struct Session {
    // Held so the driver server process outlives the session.
    _playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
    artifact_dir: PathBuf,
}

impl Session {
    /// Launches a browser and opens one page.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.artifact_dir).map_err(|source| Error::Artifact {
            path: config.artifact_dir.clone(),
            source,
        })?;

        info!(browser = config.browser.as_str(), headless = config.headless, "launching session");
        let playwright = Playwright::launch().await?;

        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let launch_options = LaunchOptions {
            headless: Some(config.headless),
            ..LaunchOptions::default()
        };
        let browser = browser_type.launch_with_options(launch_options).await?;

        let context = if config.record_video {
            let video_dir = config.artifact_dir.join("videos");
            let options = BrowserContextOptions::builder()
                .record_video(RecordVideo {
                    dir: video_dir.to_string_lossy().into_owned(),
                    size: None,
                })
                .build();
            browser.new_context_with_options(options).await?
        } else {
            browser.new_context().await?
        };
        let page = context.new_page().await?;

        Ok(Session {
            _playwright: playwright,
            browser,
            context,
            page,
            artifact_dir: config.artifact_dir.clone(),
        })
    }

    /// The session's page; page objects borrow it from here.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Captures `<artifact_dir>/<name>.png` and returns its path.
    pub async fn screenshot(&self, name: &str) -> Result<PathBuf> {
        let path = self.artifact_dir.join(format!("{name}.png"));
        debug!(artifact = %path.display(), "capturing screenshot");
        self.page.screenshot_to_file(&path, None).await?;
        Ok(path)
    }

    /// Tears down the context and browser.
    pub async fn close(self) -> Result<()> {
        self.context.close().await?;
        self.browser.close().await?;
        Ok(())
    }
}
