// Integration tests for the logout round trip and open() idempotence.

mod common;

use std::path::PathBuf;
use std::time::Duration;

use login_e2e::pages::LoginPage;
use login_e2e::{Session, SuiteConfig};
use practice_site::TestSite;

fn site_config(site: &TestSite, artifact_dir: PathBuf) -> SuiteConfig {
    SuiteConfig::default()
        .with_base_url(site.url())
        .with_artifact_dir(artifact_dir)
        .with_wait_timeout(Duration::from_secs(5))
}

/// Polls a condition until it holds or the deadline elapses.
async fn eventually<F: FnMut() -> bool>(mut check: F, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if check() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn login_then_logout_returns_to_the_login_page() {
    common::init_tracing();
    let site = TestSite::start().await;
    let artifacts = tempfile::tempdir().expect("Failed to create artifact dir");
    let config = site_config(&site, artifacts.path().to_path_buf());

    let session = Session::launch(&config)
        .await
        .expect("Failed to launch session");
    let login_page = LoginPage::new(session.page(), &config).expect("Failed to build page object");

    login_page.open().await.expect("Failed to open login page");
    login_page
        .set_username("student")
        .await
        .expect("Failed to fill username");
    login_page
        .set_password("Password123")
        .await
        .expect("Failed to fill password");
    login_page.click_submit().await.expect("Failed to submit");

    let message = login_page
        .logged_in_message()
        .await
        .expect("Success heading should appear");
    assert!(message.contains("Logged In Successfully"));
    assert!(login_page.is_logged_in_successfully());
    assert!(
        login_page
            .is_logout_button_displayed()
            .await
            .expect("Visibility check failed")
    );

    login_page.click_logout().await.expect("Failed to log out");

    // Back on the login page: exact URL match, login control visible again.
    assert!(
        eventually(
            || login_page.is_logged_out_successfully(),
            Duration::from_secs(5)
        )
        .await,
        "logout did not navigate back to the login page"
    );
    assert!(
        login_page
            .is_login_button_displayed()
            .await
            .expect("Visibility check failed")
    );

    let artifact = session
        .screenshot("login_and_logout")
        .await
        .expect("Failed to capture screenshot");
    assert!(artifact.is_file());

    session.close().await.expect("Failed to close session");
    site.shutdown();
}

#[tokio::test]
async fn open_is_idempotent() {
    common::init_tracing();
    let site = TestSite::start().await;
    let artifacts = tempfile::tempdir().expect("Failed to create artifact dir");
    let config = site_config(&site, artifacts.path().to_path_buf());

    let session = Session::launch(&config)
        .await
        .expect("Failed to launch session");
    let login_page = LoginPage::new(session.page(), &config).expect("Failed to build page object");

    login_page.open().await.expect("Failed to open login page");
    assert!(
        login_page
            .is_login_button_displayed()
            .await
            .expect("Visibility check failed")
    );

    // Re-opening an already-open login page changes nothing observable.
    login_page.open().await.expect("Failed to re-open login page");
    assert!(
        login_page
            .is_login_button_displayed()
            .await
            .expect("Visibility check failed")
    );
    assert!(login_page.is_logged_out_successfully());

    session.close().await.expect("Failed to close session");
    site.shutdown();
}
