//! Opt-in observation of signing intermediates.
//!
//! Nonces and challenges are secret-dependent. Nothing is reported unless a
//! [`SignTrace`] other than [`NoTrace`] is installed on the signer.

use num_bigint::BigUint;
use tracing::trace;

/// `tracing` target used by [`TracingTrace`].
pub const TRACE_TARGET: &str = "secp_schnorr::intermediates";

/// Receives intermediate values while a signature is computed.
///
/// All methods default to no-ops.
pub trait SignTrace {
    /// The nonce as derived, before any negation.
    fn nonce(&self, _k: &BigUint) {}

    /// Whether the nonce was replaced by `n - k`.
    fn nonce_negated(&self, _negated: bool) {}

    /// The challenge `e0` before reduction.
    fn challenge(&self, _e0: &BigUint) {}
}

/// Default hook; reports nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl SignTrace for NoTrace {}

/// Emits intermediates as TRACE events under [`TRACE_TARGET`].
///
/// Install only in diagnostic builds; the events contain secret-dependent
/// material.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TracingTrace;

impl SignTrace for TracingTrace {
    fn nonce(&self, k: &BigUint) {
        let nonce = format!("{k:064x}");
        trace!(target: TRACE_TARGET, %nonce, "derived nonce");
    }

    fn nonce_negated(&self, negated: bool) {
        trace!(target: TRACE_TARGET, negated, "canonical nonce selected");
    }

    fn challenge(&self, e0: &BigUint) {
        let challenge = format!("{e0:064x}");
        trace!(target: TRACE_TARGET, %challenge, "computed challenge");
    }
}

impl<T: SignTrace + ?Sized> SignTrace for &T {
    fn nonce(&self, k: &BigUint) {
        (**self).nonce(k)
    }

    fn nonce_negated(&self, negated: bool) {
        (**self).nonce_negated(negated)
    }

    fn challenge(&self, e0: &BigUint) {
        (**self).challenge(e0)
    }
}
