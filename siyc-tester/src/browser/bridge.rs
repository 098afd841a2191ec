use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What `window.__siycTest.state()` reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSnapshot {
    pub page: Option<String>,
    pub last_status: Option<String>,
    pub price: Option<String>,
    pub submitting: bool,
    pub payment_enabled: bool,
    pub general_error: Option<String>,
    pub field_errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn is_available(&self) -> Result<bool> {
        let result = self
            .driver
            .execute("return !!window.__siycTest", vec![])
            .await?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    pub async fn ensure_available(&self) -> Result<()> {
        if !self.is_available().await? {
            bail!("__siycTest is not available. Did you pass ?test=1 in the base url?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<AppSnapshot> {
        let result = self
            .driver
            .execute("return window.__siycTest.state()", vec![])
            .await?;
        let snapshot: AppSnapshot =
            serde_json::from_value(result.json().clone()).context("parsing AppSnapshot")?;
        Ok(snapshot)
    }

    /// Returns whether the page id was recognised.
    pub async fn show(&self, page: &str) -> Result<bool> {
        let result = self
            .driver
            .execute(
                "return window.__siycTest.show(arguments[0])",
                vec![page.into()],
            )
            .await?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    pub async fn fill(&self, field: &str, value: &str) -> Result<()> {
        self.driver
            .execute(
                "window.__siycTest.fill(arguments[0], arguments[1])",
                vec![field.into(), value.into()],
            )
            .await?;
        Ok(())
    }

    pub async fn submit(&self) -> Result<()> {
        self.driver
            .execute("window.__siycTest.submit()", vec![])
            .await?;
        Ok(())
    }

    pub async fn proof(&self, mime_type: &str, size_bytes: u64) -> Result<()> {
        self.driver
            .execute(
                "window.__siycTest.proof(arguments[0], arguments[1])",
                vec![mime_type.into(), size_bytes.into()],
            )
            .await?;
        Ok(())
    }

    /// Poll until the bridge exists, covering the wasm download and boot.
    pub async fn wait_until_available(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while !self.is_available().await.unwrap_or(false) {
            if Instant::now() >= deadline {
                bail!("__siycTest did not appear within {timeout:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        Ok(())
    }

    /// Poll `state()` until `page` is active, e.g. once the loading screen hands over to home.
    pub async fn wait_for_page(&self, page: &str, timeout: Duration) -> Result<AppSnapshot> {
        let deadline = Instant::now() + timeout;
        loop {
            let snapshot = self.state().await?;
            if snapshot.page.as_deref() == Some(page) {
                return Ok(snapshot);
            }
            if Instant::now() >= deadline {
                bail!(
                    "page {page:?} not active within {timeout:?} (active: {:?})",
                    snapshot.page
                );
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
