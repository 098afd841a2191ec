use anyhow::{Result, ensure};
use siyc_core::{NavEffect, NavigationError, PageId, PageNavigator};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, boot, section_is_active};
use crate::logic::{CheckFuture, LogicCtx, LogicPlan};

const SWITCH_TIMEOUT: Duration = Duration::from_secs(3);

pub struct NavigationScenario;

impl NavigationScenario {
    fn plan() -> LogicPlan {
        LogicPlan::new()
            .with_check("repeated show keeps one page", repeated_show_keeps_one_page)
            .with_check("unknown target is ignored", unknown_target_is_ignored)
            .with_check("payment has no pill", payment_has_no_pill)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for NavigationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        boot(driver, ctx).await?;

        for page in PageId::nav_pills() {
            let selector = format!("a.nav-pill[data-page='{page}']");
            driver.find(By::Css(selector.as_str())).await?.click().await?;
            ctx.bridge.wait_for_page(page.as_str(), SWITCH_TIMEOUT).await?;
            ensure!(
                section_is_active(driver, page.as_str()).await?,
                "section #{page} not shown after clicking its pill"
            );
            let pill_classes = driver
                .find(By::Css(selector.as_str()))
                .await?
                .class_name()
                .await?
                .unwrap_or_default();
            ensure!(
                pill_classes.contains("active"),
                "pill for {page} not highlighted: {pill_classes:?}"
            );
            if ctx.verbose {
                println!("  🖱️  Pill {page} shows its section");
            }
        }

        let before = ctx.bridge.state().await?;
        ensure!(
            !ctx.bridge.show("nowhere").await?,
            "bridge accepted an unknown page"
        );
        let after = ctx.bridge.state().await?;
        ensure!(
            before.page == after.page,
            "unknown page moved from {:?} to {:?}",
            before.page,
            after.page
        );
        Ok(())
    }
}

impl CombinedScenario for NavigationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Page Navigation", Self::plan()))
    }
}

fn active_count(nav: &PageNavigator) -> usize {
    nav.visibility().filter(|(_, active)| *active).count()
}

fn repeated_show_keeps_one_page(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let mut nav = PageNavigator::with_active(PageId::Home);
        for page in PageId::ALL {
            nav.show(page.as_str())?;
            nav.show(page.as_str())?;
            ensure!(nav.is_active(page), "{page} should be active");
            ensure!(active_count(&nav) == 1, "more than one page active on {page}");
            let expected_pill = page.has_nav_pill().then_some(page);
            ensure!(
                nav.highlighted() == expected_pill,
                "highlight {:?} does not follow {page}",
                nav.highlighted()
            );
        }
        Ok(())
    })
}

fn unknown_target_is_ignored(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let mut nav = PageNavigator::with_active(PageId::Faq);
        let outcome = nav.show("nonexistent");
        ensure!(
            matches!(outcome, Err(NavigationError::UnknownPage(ref id)) if id == "nonexistent"),
            "unknown page should be rejected, got {outcome:?}"
        );
        ensure!(
            matches!(nav.show("  "), Err(NavigationError::MissingTarget)),
            "blank target should be rejected"
        );
        ensure!(nav.is_active(PageId::Faq), "active page changed");
        Ok(())
    })
}

fn payment_has_no_pill(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        ensure!(
            PageId::nav_pills().all(|page| page != PageId::Payment),
            "payment must not carry a pill"
        );
        let mut nav = PageNavigator::with_active(PageId::Registration);
        let transition = nav.show_page(PageId::Payment);
        ensure!(
            transition.effects.contains(&NavEffect::EnterPayment),
            "entering payment should refresh the price, got {:?}",
            transition.effects
        );
        ensure!(nav.highlighted().is_none(), "no pill is highlighted on payment");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    #[test]
    fn navigation_logic_plan_passes() {
        let scenario = NavigationScenario.as_logic_scenario().expect("logic plan");
        let tester = LogicTester::new(LogicCtx {
            timeout_ms: 50,
            verbose: false,
        });
        let result = tokio_test::block_on(tester.run_scenario(&scenario, 2));
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.successful_iterations, 2);
    }
}
