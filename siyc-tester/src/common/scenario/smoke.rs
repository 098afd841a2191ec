use anyhow::{Context, Result, ensure};
use siyc_core::countdown::remaining_until;
use siyc_core::loading::step;
use siyc_core::{ApiConfig, EVENT_START_MS, PageId, PageNavigator};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, boot, section_is_active};
use crate::logic::{CheckFuture, LogicCtx, LogicPlan};

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> LogicPlan {
        LogicPlan::new()
            .with_check("default api config", default_api_config)
            .with_check("loading screen lands on home", loading_lands_on_home)
            .with_check("countdown splits remaining time", countdown_splits_time)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let snapshot = boot(driver, ctx).await?;
        ensure!(
            snapshot.last_status.is_none(),
            "fresh load should have no registration, got {:?}",
            snapshot.last_status
        );

        let loading = driver.find(By::Id("loading-screen")).await;
        if let Ok(screen) = loading {
            ensure!(
                !screen.is_displayed().await?,
                "loading screen is still visible after boot"
            );
        }

        ensure!(
            section_is_active(driver, "home").await?,
            "home section is not marked active"
        );

        let pills = driver.find_all(By::Css("a.nav-pill")).await?;
        let expected = PageId::nav_pills().count();
        ensure!(
            pills.len() == expected,
            "expected {expected} nav pills, found {}",
            pills.len()
        );

        for id in ["hours", "minutes", "seconds"] {
            let text = driver
                .find(By::Id(id))
                .await
                .with_context(|| format!("countdown unit #{id} missing"))?
                .text()
                .await?;
            ensure!(
                text.trim().chars().all(|c| c.is_ascii_digit()),
                "countdown #{id} shows {text:?}"
            );
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        if ctx.verbose {
            println!("  📊 Final state: {:?}", ctx.bridge.state().await?);
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", Self::plan()))
    }
}

fn default_api_config(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let config = ApiConfig::default();
        config.validate()?;
        ensure!(
            config.register_url() == "https://backend-siyc.onrender.com/api/register",
            "unexpected register url {}",
            config.register_url()
        );
        ensure!(
            config.timeout() == Duration::from_secs(50),
            "request timeout should be 50s, got {:?}",
            config.timeout()
        );
        Ok(())
    })
}

fn loading_lands_on_home(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        // Slowest draw still finishes within 50 ticks (6 s at 120 ms).
        for r in [0.0, 0.5, 0.999] {
            let mut progress = 0.0;
            let mut ticks = 0;
            while progress < 100.0 {
                progress = (progress + step(progress, r)).min(100.0);
                ticks += 1;
            }
            ensure!(ticks <= 50, "r={r} took {ticks} ticks to finish loading");
        }

        let mut nav = PageNavigator::new();
        ensure!(nav.active().is_none(), "no page is active before boot");
        let transition = nav.show_page(PageId::Home);
        ensure!(transition.from.is_none(), "boot should start from no page");
        ensure!(nav.is_active(PageId::Home), "boot should land on home");
        Ok(())
    })
}

fn countdown_splits_time(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let left = remaining_until(EVENT_START_MS, EVENT_START_MS - 3_723_000);
        ensure!(left.to_string() == "01:02:03", "got {left}");
        let over = remaining_until(EVENT_START_MS, EVENT_START_MS + 1);
        ensure!(over.is_over(), "countdown past the event should read zero, got {over}");
        Ok(())
    })
}
