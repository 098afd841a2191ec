//! Proof-of-payment gating.
//!
//! The attached proof never leaves the browser; the gate only decides whether the completion
//! action may run.

use thiserror::Error;

use crate::presenter::ErrorCategory;

pub const MAX_PROOF_BYTES: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];
/// Delay between the success display and returning home.
pub const COMPLETION_DELAY_MS: u32 = 5_000;

/// Metadata of the selected proof file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentProof {
    pub mime_type: String,
    pub size_bytes: u64,
}

impl PaymentProof {
    #[must_use]
    pub fn new(mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("Please upload a valid image file (JPEG, PNG, GIF)")]
    UnsupportedType,
    #[error("File size must be less than 5MB")]
    TooLarge,
}

impl ProofError {
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        ErrorCategory::File
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Please upload your transaction proof")]
    MissingProof,
    #[error("payment already completed")]
    AlreadyCompleted,
}

/// Type is checked before size, so an oversized PDF reports the type.
///
/// # Errors
///
/// Returns the first rule the proof breaks.
pub fn check_proof(proof: &PaymentProof) -> Result<(), ProofError> {
    let mime = proof.mime_type.trim().to_ascii_lowercase();
    if !ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(ProofError::UnsupportedType);
    }
    if proof.size_bytes > MAX_PROOF_BYTES {
        return Err(ProofError::TooLarge);
    }
    Ok(())
}

/// Whether the completion action is enabled for the given selection.
#[must_use]
pub fn evaluate(proof: Option<&PaymentProof>) -> bool {
    proof.is_some_and(|p| check_proof(p).is_ok())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentGate {
    proof: Option<PaymentProof>,
    completed: bool,
}

impl PaymentGate {
    /// Replace the current selection. A rejected file clears the selection.
    ///
    /// # Errors
    ///
    /// Returns why the file was rejected; the host shows it as a blocking alert and resets the
    /// file input.
    pub fn attach(&mut self, proof: PaymentProof) -> Result<(), ProofError> {
        match check_proof(&proof) {
            Ok(()) => {
                log::debug!(
                    "payment: proof attached ({}, {} bytes)",
                    proof.mime_type,
                    proof.size_bytes
                );
                self.proof = Some(proof);
                Ok(())
            }
            Err(err) => {
                log::warn!("payment: proof rejected: {err}");
                self.proof = None;
                Err(err)
            }
        }
    }

    pub fn clear(&mut self) {
        self.proof = None;
    }

    #[must_use]
    pub const fn proof(&self) -> Option<&PaymentProof> {
        self.proof.as_ref()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.completed && evaluate(self.proof.as_ref())
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Mark payment done. The host then shows the success state and returns home after
    /// [`COMPLETION_DELAY_MS`].
    ///
    /// # Errors
    ///
    /// Fails without a valid proof, or when already completed.
    pub fn complete(&mut self) -> Result<(), PaymentError> {
        if self.completed {
            return Err(PaymentError::AlreadyCompleted);
        }
        if !self.is_enabled() {
            return Err(PaymentError::MissingProof);
        }
        self.completed = true;
        log::info!("payment: completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn oversized_png_is_rejected_for_size() {
        let proof = PaymentProof::new("image/png", 6 * MIB);
        assert_eq!(check_proof(&proof), Err(ProofError::TooLarge));
        assert!(!evaluate(Some(&proof)));
    }

    #[test]
    fn pdf_is_rejected_for_type() {
        let proof = PaymentProof::new("application/pdf", MIB);
        assert_eq!(check_proof(&proof), Err(ProofError::UnsupportedType));
        assert!(!evaluate(Some(&proof)));
    }

    #[test]
    fn small_jpeg_enables_completion() {
        let proof = PaymentProof::new("image/jpeg", MIB);
        assert!(evaluate(Some(&proof)));
        assert!(evaluate(Some(&PaymentProof::new("image/gif", MAX_PROOF_BYTES))));
        assert!(!evaluate(Some(&PaymentProof::new("image/gif", MAX_PROOF_BYTES + 1))));
        assert!(!evaluate(None));
    }

    #[test]
    fn rejected_attach_clears_previous_selection() {
        let mut gate = PaymentGate::default();
        gate.attach(PaymentProof::new("image/png", MIB)).unwrap();
        assert!(gate.is_enabled());

        let err = gate
            .attach(PaymentProof::new("image/webp", MIB))
            .unwrap_err();
        assert_eq!(err.to_string(), "Please upload a valid image file (JPEG, PNG, GIF)");
        assert_eq!(err.category(), ErrorCategory::File);
        assert!(gate.proof().is_none());
        assert!(!gate.is_enabled());
    }

    #[test]
    fn completion_requires_proof_and_is_terminal() {
        let mut gate = PaymentGate::default();
        assert_eq!(gate.complete(), Err(PaymentError::MissingProof));
        assert_eq!(
            PaymentError::MissingProof.to_string(),
            "Please upload your transaction proof"
        );

        gate.attach(PaymentProof::new("image/jpg", 2 * MIB)).unwrap();
        gate.complete().unwrap();
        assert!(gate.is_completed());
        assert!(!gate.is_enabled());
        assert_eq!(gate.complete(), Err(PaymentError::AlreadyCompleted));
    }
}
