// Page object for the practice-test-login page.

use std::time::Duration;

use playwright_rs::{Page, expect};
use tracing::debug;
use url::Url;

use crate::config::{LOGGED_IN_PATH, LOGIN_PATH, SuiteConfig};
use crate::error::{Error, Result};

// Selector map. Fixed at construction, matching the live site's markup;
// a change to that markup is an external breaking change.
const USERNAME_INPUT: &str = r#"input[name="username"]"#;
const PASSWORD_INPUT: &str = r#"input[name="password"]"#;
const SUBMIT_BUTTON: &str = r#"button[id="submit"]"#;
const LOGGED_IN_MESSAGE: &str = ".post-header h1";
const LOGOUT_BUTTON: &str = r#"a[class*="wp-block-button"]"#;
const ERROR_MESSAGE: &str = "div#error.show";

/// Login and post-login URLs derived once from the configured base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrls {
    pub login: Url,
    pub logged_in: Url,
}

impl PageUrls {
    pub fn from_base(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let join = |path: &str| {
            base.join(path).map_err(|source| Error::InvalidBaseUrl {
                url: base_url.to_string(),
                source,
            })
        };
        Ok(PageUrls {
            login: join(LOGIN_PATH)?,
            logged_in: join(LOGGED_IN_PATH)?,
        })
    }
}

/// Semantic interface to the login page's affordances.
///
/// Every operation is a single driver call; none of them keeps state of
/// its own. Navigation state lives in the browser session the page was
/// constructed from.
pub struct LoginPage {
    page: Page,
    urls: PageUrls,
    wait_timeout: Duration,
}

impl LoginPage {
    /// Wraps an existing session page.
    pub fn new(page: &Page, config: &SuiteConfig) -> Result<Self> {
        Ok(LoginPage {
            page: page.clone(),
            urls: PageUrls::from_base(&config.base_url)?,
            wait_timeout: config.wait_timeout(),
        })
    }

    /// Navigates to the login page.
    pub async fn open(&self) -> Result<()> {
        debug!(url = %self.urls.login, "opening login page");
        self.page.goto(self.urls.login.as_str(), None).await?;
        Ok(())
    }

    /// Fills the username field. The value is opaque text; empty and
    /// injection-shaped strings are typed verbatim.
    pub async fn set_username(&self, username: &str) -> Result<()> {
        self.page.locator(USERNAME_INPUT).await.fill(username, None).await?;
        Ok(())
    }

    /// Fills the password field.
    pub async fn set_password(&self, password: &str) -> Result<()> {
        self.page.locator(PASSWORD_INPUT).await.fill(password, None).await?;
        Ok(())
    }

    /// Submits the login form.
    pub async fn click_submit(&self) -> Result<()> {
        self.page.locator(SUBMIT_BUTTON).await.click(None).await?;
        Ok(())
    }

    /// True iff the current URL contains the post-login path fragment.
    pub fn is_logged_in_successfully(&self) -> bool {
        self.page.url().contains(LOGGED_IN_PATH)
    }

    /// Waits for the success heading, then returns its text.
    ///
    /// Called after a failed login, the heading never appears and this
    /// fails with the driver's timeout error once the configured wait
    /// budget elapses. It does not hang and does not return a default.
    pub async fn logged_in_message(&self) -> Result<String> {
        let heading = self.page.locator(LOGGED_IN_MESSAGE).await;
        expect(heading.clone())
            .with_timeout(self.wait_timeout)
            .to_be_visible()
            .await?;
        heading
            .text_content()
            .await?
            .ok_or_else(|| Error::EmptyText {
                selector: LOGGED_IN_MESSAGE.to_string(),
            })
    }

    /// Single visibility check on the logout control; does not wait.
    pub async fn is_logout_button_displayed(&self) -> Result<bool> {
        Ok(self.page.locator(LOGOUT_BUTTON).await.is_visible().await?)
    }

    /// Single visibility check on the submit control; does not wait.
    pub async fn is_login_button_displayed(&self) -> Result<bool> {
        Ok(self.page.locator(SUBMIT_BUTTON).await.is_visible().await?)
    }

    /// Single visibility check on the error banner; does not wait.
    pub async fn is_error_displayed(&self) -> Result<bool> {
        Ok(self.page.locator(ERROR_MESSAGE).await.is_visible().await?)
    }

    /// Waits for the error banner, then returns its text. Same blocking
    /// contract as [`LoginPage::logged_in_message`].
    pub async fn error_message_text(&self) -> Result<String> {
        let banner = self.page.locator(ERROR_MESSAGE).await;
        expect(banner.clone())
            .with_timeout(self.wait_timeout)
            .to_be_visible()
            .await?;
        banner.text_content().await?.ok_or_else(|| Error::EmptyText {
            selector: ERROR_MESSAGE.to_string(),
        })
    }

    /// Triggers the logout action.
    pub async fn click_logout(&self) -> Result<()> {
        self.page.locator(LOGOUT_BUTTON).await.click(None).await?;
        Ok(())
    }

    /// True iff the current URL exactly equals the login page URL.
    pub fn is_logged_out_successfully(&self) -> bool {
        self.page.url() == self.urls.login.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn urls_derive_from_production_base() {
        let urls = PageUrls::from_base(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            urls.login.as_str(),
            "https://practicetestautomation.com/practice-test-login/"
        );
        assert_eq!(
            urls.logged_in.as_str(),
            "https://practicetestautomation.com/logged-in-successfully/"
        );
    }

    #[test]
    fn urls_derive_from_local_base() {
        let urls = PageUrls::from_base("http://127.0.0.1:4173").unwrap();
        assert_eq!(urls.login.as_str(), "http://127.0.0.1:4173/practice-test-login/");
        assert_eq!(
            urls.logged_in.as_str(),
            "http://127.0.0.1:4173/logged-in-successfully/"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let with = PageUrls::from_base("http://localhost:8080/").unwrap();
        let without = PageUrls::from_base("http://localhost:8080").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn invalid_base_is_rejected() {
        let err = PageUrls::from_base("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn selector_map_is_non_empty() {
        for selector in [
            USERNAME_INPUT,
            PASSWORD_INPUT,
            SUBMIT_BUTTON,
            LOGGED_IN_MESSAGE,
            LOGOUT_BUTTON,
            ERROR_MESSAGE,
        ] {
            assert!(!selector.is_empty());
        }
    }
}
