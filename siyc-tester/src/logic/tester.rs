use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

pub type CheckFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

/// One named assertion run against `siyc-core`. Futures are `!Send`, like the desk they drive.
pub type Check = fn(LogicCtx) -> CheckFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicCtx {
    /// Request timeout given to scripted registration clients.
    pub timeout_ms: u64,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LogicPlan {
    pub checks: Vec<(&'static str, Check)>,
}

impl LogicPlan {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_check(mut self, name: &'static str, check: Check) -> Self {
        self.checks.push((name, check));
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    ctx: LogicCtx,
}

impl LogicTester {
    pub const fn new(ctx: LogicCtx) -> Self {
        Self { ctx }
    }

    pub async fn run_scenario(&self, scenario: &TestScenario, iterations: usize) -> ScenarioResult {
        if self.ctx.verbose {
            println!(
                "🧪 Testing scenario: {} ({} checks)",
                scenario.name.bright_white(),
                scenario.plan.checks.len()
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            match self.run_plan(&scenario.plan).await {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.ctx.verbose {
                        println!("  ✅ Iteration {}/{} passed ({duration:?})", i + 1, iterations);
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {}: {err:#}", i + 1);
                    if self.ctx.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            format!("{err:#}").red()
                        );
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }

    /// Runs every check; the first failure ends the iteration.
    async fn run_plan(&self, plan: &LogicPlan) -> Result<()> {
        for (name, check) in &plan.checks {
            check(self.ctx)
                .await
                .map_err(|err| err.context(format!("check '{name}'")))?;
            log::debug!("logic: check '{name}' passed");
        }
        Ok(())
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}
