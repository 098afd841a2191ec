use anyhow::{Result, ensure};
use siyc_core::payment::MAX_PROOF_BYTES;
use siyc_core::{PaymentError, PaymentGate, PaymentProof, ProofError, check_proof, evaluate};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, boot};
use crate::logic::{CheckFuture, LogicCtx, LogicPlan};

const MIB: u64 = 1024 * 1024;

pub struct PaymentScenario;

impl PaymentScenario {
    fn plan() -> LogicPlan {
        LogicPlan::new()
            .with_check("proof rules", proof_rules)
            .with_check("completion needs a proof", completion_needs_proof)
            .with_check("rejected file clears the selection", rejected_file_clears)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for PaymentScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        boot(driver, ctx).await?;
        ensure!(ctx.bridge.show("payment").await?, "bridge rejected the payment page");

        let before = ctx.bridge.state().await?;
        ensure!(!before.payment_enabled, "completion enabled without a proof");
        ensure!(
            before.price.is_none(),
            "price shown without a registration: {:?}",
            before.price
        );
        let button = driver.find(By::Id("complete-payment")).await?;
        ensure!(!button.is_enabled().await?, "complete button enabled without a proof");

        // Only accepted files here: a rejected one raises a blocking alert.
        ctx.bridge.proof("image/jpeg", MIB).await?;
        tokio::time::sleep(Duration::from_millis(200)).await;

        let after = ctx.bridge.state().await?;
        ensure!(after.payment_enabled, "1 MiB JPEG should enable completion");
        let button = driver.find(By::Id("complete-payment")).await?;
        ensure!(button.is_enabled().await?, "complete button still disabled");
        if ctx.verbose {
            println!("  💳 Proof accepted, completion enabled");
        }
        Ok(())
    }
}

impl CombinedScenario for PaymentScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Payment Gate", Self::plan()))
    }
}

fn proof_rules(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let cases = [
            ("image/png", 6 * MIB, Err(ProofError::TooLarge)),
            ("application/pdf", MIB, Err(ProofError::UnsupportedType)),
            ("image/jpeg", MIB, Ok(())),
            ("image/gif", MAX_PROOF_BYTES, Ok(())),
            ("image/webp", MIB, Err(ProofError::UnsupportedType)),
        ];
        for (mime, size, expected) in cases {
            let proof = PaymentProof::new(mime, size);
            let got = check_proof(&proof);
            ensure!(got == expected, "{mime} {size} bytes: {got:?}");
            ensure!(
                evaluate(Some(&proof)) == expected.is_ok(),
                "gate disagrees for {mime}"
            );
        }
        ensure!(!evaluate(None), "no file must keep completion disabled");
        Ok(())
    })
}

fn completion_needs_proof(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let mut gate = PaymentGate::default();
        ensure!(
            gate.complete() == Err(PaymentError::MissingProof),
            "completed without a proof"
        );
        gate.attach(PaymentProof::new("image/png", MIB))?;
        ensure!(gate.is_enabled(), "valid proof should enable completion");
        gate.complete()?;
        ensure!(gate.is_completed(), "completion not recorded");
        ensure!(
            gate.complete() == Err(PaymentError::AlreadyCompleted),
            "completion accepted twice"
        );
        Ok(())
    })
}

fn rejected_file_clears(_ctx: LogicCtx) -> CheckFuture {
    Box::pin(async {
        let mut gate = PaymentGate::default();
        gate.attach(PaymentProof::new("image/jpeg", MIB))?;
        let rejected = gate.attach(PaymentProof::new("image/png", 6 * MIB));
        ensure!(rejected == Err(ProofError::TooLarge), "got {rejected:?}");
        ensure!(gate.proof().is_none(), "rejected file kept the old selection");
        ensure!(!gate.is_enabled(), "completion still enabled");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    #[test]
    fn payment_logic_plan_passes() {
        let scenario = PaymentScenario.as_logic_scenario().expect("logic plan");
        let tester = LogicTester::new(LogicCtx {
            timeout_ms: 50,
            verbose: false,
        });
        let result = tokio_test::block_on(tester.run_scenario(&scenario, 1));
        assert!(result.passed, "{:?}", result.failures);
    }
}
