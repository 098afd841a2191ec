mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use browser::{BrowserConfig, BrowserKind, TestBridge, new_session};
use common::scenario::{ScenarioCtx, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicCtx, LogicTester};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Registration logic against scripted backends (fast, no browser)
    Logic,
    /// Browser automation against a served build (slow, captures screenshots)
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "siyc-tester", version)]
#[command(about = "Automated QA for the SIYC landing page - registration logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario (logic mode only)
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Request timeout for scripted registration backends, in milliseconds
    #[arg(long, default_value_t = 250)]
    timeout_ms: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the served site (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    base_url: String,

    /// How long to wait for the app to boot past the loading screen, in seconds
    #[arg(long, default_value_t = 20)]
    boot_timeout_secs: u64,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);

    let all_results = run_logic_scenarios(&args, &scenarios).await;
    let browser_failures = run_browser_scenarios(&args, &scenarios).await?;

    write_reports(&args, &all_results, start_time)?;

    if browser_failures > 0 || all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎟️  SIYC Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn logic_ctx(args: &Args) -> LogicCtx {
    LogicCtx {
        timeout_ms: args.timeout_ms.max(1),
        verbose: args.verbose,
    }
}

async fn run_logic_scenarios(args: &Args, scenarios: &[String]) -> Vec<logic::ScenarioResult> {
    let mut results: Vec<logic::ScenarioResult> = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(logic_ctx(args));

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.push(
                    logic_tester
                        .run_scenario(&logic_scenario, args.iterations)
                        .await,
                );
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

/// Returns how many browser scenario runs failed.
async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Result<usize> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(0);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let mut failures = 0;
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let cfg = build_browser_config(args);

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await;
        let _ = driver.quit().await;
    }

    Ok(failures)
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let label = kind.label();
    let mut failures = 0;
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if !scenario.runs_in_browser() {
            eprintln!(
                "⚠️  Scenario {} runs in logic mode only",
                scenario_name.yellow()
            );
            continue;
        }

        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            bridge: TestBridge::new(driver),
            boot_timeout: Duration::from_secs(args.boot_timeout_secs),
            verbose: args.verbose,
        };

        let scenario_start = Instant::now();
        match scenario.run_browser(driver, &ctx).await {
            Ok(()) => {
                println!(
                    "✅ [{}] {} - {:?}",
                    label.green(),
                    scenario_name,
                    scenario_start.elapsed()
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    scenario_start.elapsed(),
                    e
                );
                let dir = artifacts_dir(&args.artifacts_dir, &label, scenario_name);
                if let Err(artifact_err) = capture_artifacts(driver, &dir, &e).await {
                    log::warn!("could not write artifacts to {dir}: {artifact_err:#}");
                }
            }
        }
    }
    failures
}

fn write_reports(args: &Args, results: &[logic::ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                logic::reports::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# SIYC Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            let duration = start_time.elapsed();
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            iterations: 1,
            timeout_ms: 30,
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/?test=1".to_string(),
            boot_timeout_secs: 1,
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "siyc-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn all_expands_to_every_scenario_once() {
        let scenarios = expand_scenarios("payment, all");
        assert_eq!(scenarios.first().map(String::as_str), Some("payment"));
        assert_eq!(scenarios.len(), list_scenarios().len());
        assert!(scenarios.iter().any(|s| s == "single-flight"));
    }

    #[test]
    fn parses_cli_flags() {
        let args = Args::parse_from([
            "siyc-tester",
            "--mode",
            "both",
            "--scenarios",
            "navigation,payment",
            "--timeout-ms",
            "75",
            "--headless",
            "windowed",
            "--report",
            "markdown",
        ]);
        assert!(matches!(args.mode, TestMode::Both));
        assert_eq!(args.timeout_ms, 75);
        assert!(!args.headless.is_headless());
        assert_eq!(args.report, "markdown");
        assert!(Args::try_parse_from(["siyc-tester", "--report", "csv"]).is_err());
    }

    #[test]
    fn logic_ctx_never_uses_a_zero_timeout() {
        let mut args = base_args();
        args.timeout_ms = 0;
        assert_eq!(logic_ctx(&args).timeout_ms, 1);
    }

    #[test]
    fn logic_run_writes_json_report() {
        let mut args = base_args();
        args.scenarios = "smoke,timeout,unknown".to_string();
        let output = temp_path("json");
        args.output = Some(output.clone());

        let scenarios = expand_scenarios(&args.scenarios);
        let results = tokio_test::block_on(run_logic_scenarios(&args, &scenarios));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "{results:?}");

        write_reports(&args, &results, Instant::now()).expect("write report");
        let content = std::fs::read_to_string(output).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&content).expect("json report");
        assert_eq!(parsed[1]["scenario_name"], "Request Timeout");
    }

    #[test]
    fn browser_mode_skips_logic_and_unknown_browsers() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        args.browsers = "lynx".to_string();
        let scenarios = expand_scenarios(&args.scenarios);
        assert!(tokio_test::block_on(run_logic_scenarios(&args, &scenarios)).is_empty());
        let failures =
            tokio_test::block_on(run_browser_scenarios(&args, &scenarios)).expect("browser run");
        assert_eq!(failures, 0);
    }

    #[test]
    fn empty_results_render_placeholders() {
        let mut args = base_args();
        for (format, expected) in [
            ("json", "[]"),
            ("markdown", "_No scenarios executed._"),
            ("console", "No logic scenarios executed."),
        ] {
            let output = temp_path(format);
            args.report = format.to_string();
            args.output = Some(output.clone());
            write_reports(&args, &[], Instant::now()).expect("write report");
            let content = std::fs::read_to_string(output).expect("read report");
            assert!(content.contains(expected), "{format}: {content}");
        }
    }
}
