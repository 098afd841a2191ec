use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::browser::{AppSnapshot, TestBridge};
use crate::logic::LogicPlan;

pub mod navigation;
pub mod payment;
pub mod registration;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    /// Covers wasm download plus the loading screen.
    pub boot_timeout: Duration,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: LogicPlan,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, plan: LogicPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    /// `false` for scenarios that need a scripted backend; a served build talks to the real one.
    fn runs_in_browser(&self) -> bool {
        true
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

#[derive(Clone)]
pub struct LogicOnlyScenario {
    name: &'static str,
    plan: LogicPlan,
}

impl LogicOnlyScenario {
    pub const fn new(name: &'static str, plan: LogicPlan) -> Self {
        Self { name, plan }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnlyScenario {
    fn runs_in_browser(&self) -> bool {
        false
    }

    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} needs a scripted backend and runs in logic mode only", self.name)
    }
}

impl CombinedScenario for LogicOnlyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.plan.clone()))
    }
}

/// Load the app and wait for the loading screen to hand over to the home page.
pub async fn boot(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<AppSnapshot> {
    driver.goto(&ctx.base_url).await?;
    driver
        .find(By::Id("app"))
        .await
        .context("app root never rendered")?;
    ctx.bridge.wait_until_available(ctx.boot_timeout).await?;
    let snapshot = ctx.bridge.wait_for_page("home", ctx.boot_timeout).await?;
    if ctx.verbose {
        println!("  🌐 App booted, bridge connected: {snapshot:?}");
    }
    Ok(snapshot)
}

/// Whether the section for `page` is the visible one.
pub async fn section_is_active(driver: &WebDriver, page: &str) -> Result<bool> {
    let section = driver
        .find(By::Id(page))
        .await
        .with_context(|| format!("no section #{page}"))?;
    let classes = section.class_name().await?.unwrap_or_default();
    Ok(classes.split_whitespace().any(|class| class == "active"))
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "navigation" | "nav" => Some(Box::new(navigation::NavigationScenario)),
        "validation" | "form" => Some(Box::new(registration::ValidationScenario)),
        "registration" | "register" => Some(Box::new(registration::round_trip_scenario())),
        "timeout" => Some(Box::new(registration::timeout_scenario())),
        "single-flight" | "in-flight" => Some(Box::new(registration::single_flight_scenario())),
        "payment" | "payment-gate" => Some(Box::new(payment::PaymentScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("navigation", "Page Navigation"),
        ("validation", "Form Validation"),
        ("registration", "Registration Round Trip (logic only)"),
        ("timeout", "Request Timeout (logic only)"),
        ("single-flight", "Single Flight Submission (logic only)"),
        ("payment", "Payment Gate"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} should resolve");
        }
        assert!(get_scenario("Navigation").is_some());
        assert!(get_scenario("boss-fight").is_none());
    }

    #[test]
    fn scripted_backend_scenarios_skip_the_browser() {
        let browser_ready: Vec<&str> = list_scenarios()
            .into_iter()
            .map(|(key, _)| key)
            .filter(|key| get_scenario(key).is_some_and(|s| s.runs_in_browser()))
            .collect();
        assert_eq!(browser_ready, vec!["smoke", "navigation", "validation", "payment"]);
    }

    #[test]
    fn every_scenario_has_logic_checks() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key)
                .and_then(|s| s.as_logic_scenario())
                .expect("logic scenario");
            assert!(!scenario.plan.checks.is_empty(), "{key} has no checks");
        }
    }
}
