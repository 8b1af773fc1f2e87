//! RAGFlow Admin Retrieval - Retrieval Test Probe
//!
//! State behind the retrieval test tab: the query form settings and the
//! probe lifecycle. A probe is started with [`RetrievalProbe::begin`], the
//! simulated search runs through [`RetrievalProbe::run`] and the outcome is
//! stored with [`RetrievalProbe::finish`].
//!
//! Key Features:
//! - Single in-flight probe guarded by the pending flag
//! - Delay future supplied by the caller (browser timer or test future)
//! - Cancellation through a `CancellationToken` so an unmounted view never
//!   receives results
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

use crate::error::{ConsoleError, Result};
use crate::mock;
use crate::types::RetrievalHit;
use crate::utils::{Choice, SliderRange};
use futures::future::{self, Either};
use std::future::Future;
use tokio_util::sync::CancellationToken;

// =============================================================================
// Query Settings
// =============================================================================

pub const SIMILARITY_THRESHOLD: SliderRange = SliderRange::new(0.0, 1.0, 0.01);
pub const VECTOR_WEIGHT: SliderRange = SliderRange::new(0.0, 1.0, 0.1);

pub const RERANK_MODELS: &[Choice] = &[
    Choice::new("none", "None"),
    Choice::new("bge-reranker", "BGE Reranker"),
    Choice::new("cohere-rerank", "Cohere Rerank"),
];

pub const CROSS_LANGUAGES: &[Choice] = &[
    Choice::new("vi", "Tiếng Việt"),
    Choice::new("en", "English"),
    Choice::new("zh", "中文"),
];

/// Form values of the retrieval test tab.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalSettings {
    pub similarity_threshold: f64,
    pub vector_weight: f64,
    pub rerank_model: String,
    pub use_knowledge_graph: bool,
    pub cross_language: String,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            vector_weight: 0.5,
            rerank_model: "none".to_string(),
            use_knowledge_graph: false,
            cross_language: "vi".to_string(),
        }
    }
}

impl RetrievalSettings {
    pub fn set_similarity_threshold(&mut self, value: f64) {
        self.similarity_threshold = SIMILARITY_THRESHOLD.snap(value);
    }

    pub fn set_vector_weight(&mut self, value: f64) {
        self.vector_weight = VECTOR_WEIGHT.snap(value);
    }
}

// =============================================================================
// Probe
// =============================================================================

/// Lifecycle of one retrieval test at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrievalProbe {
    pending: bool,
    results: Vec<RetrievalHit>,
}

impl RetrievalProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn results(&self) -> &[RetrievalHit] {
        &self.results
    }

    /// Whether the trigger button accepts a click for `text`.
    pub fn can_begin(&self, text: &str) -> bool {
        !self.pending && !text.trim().is_empty()
    }

    /// Mark a probe as in flight.
    pub fn begin(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ConsoleError::EmptyQuery);
        }
        if self.pending {
            return Err(ConsoleError::ProbePending);
        }
        self.pending = true;
        log::debug!("retrieval test started");
        Ok(())
    }

    /// Wait for `sleep`, then produce the fixed hit set, unless `token`
    /// is cancelled first.
    pub async fn run<F>(sleep: F, token: CancellationToken) -> Result<Vec<RetrievalHit>>
    where
        F: Future<Output = ()>,
    {
        if token.is_cancelled() {
            return Err(ConsoleError::ProbeCancelled);
        }

        let cancelled = token.cancelled();
        futures::pin_mut!(sleep, cancelled);

        match future::select(sleep, cancelled).await {
            Either::Left(((), _)) => Ok(mock::retrieval_hits()),
            Either::Right(((), _)) => Err(ConsoleError::ProbeCancelled),
        }
    }

    /// Store the outcome of [`RetrievalProbe::run`] and clear the pending flag.
    /// Previous results are kept when the probe failed.
    pub fn finish(&mut self, outcome: Result<Vec<RetrievalHit>>) -> Result<usize> {
        self.pending = false;
        let hits = outcome?;
        log::debug!("retrieval test returned {} hits", hits.len());
        self.results = hits;
        Ok(self.results.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_probe_yields_fixed_hits() {
        let mut probe = RetrievalProbe::new();
        probe.begin("Thiền định là gì?").unwrap();
        assert!(probe.is_pending());

        let outcome = block_on(RetrievalProbe::run(future::ready(()), CancellationToken::new()));
        assert_eq!(probe.finish(outcome).unwrap(), 3);
        assert!(!probe.is_pending());

        let scores: Vec<f32> = probe.results().iter().map(|h| h.score).collect();
        assert_eq!(scores, vec![0.95, 0.87, 0.82]);
    }

    #[test]
    fn test_begin_rejected_while_pending() {
        let mut probe = RetrievalProbe::new();
        probe.begin("first").unwrap();
        assert!(!probe.can_begin("second"));
        assert!(matches!(probe.begin("second"), Err(ConsoleError::ProbePending)));
    }

    #[test]
    fn test_begin_rejects_blank_text() {
        let mut probe = RetrievalProbe::new();
        assert!(matches!(probe.begin("   "), Err(ConsoleError::EmptyQuery)));
        assert!(!probe.is_pending());
    }

    #[test]
    fn test_cancelled_probe_keeps_previous_results() {
        let mut probe = RetrievalProbe::new();
        probe.begin("q").unwrap();
        let first = block_on(RetrievalProbe::run(future::ready(()), CancellationToken::new()));
        probe.finish(first).unwrap();

        probe.begin("q").unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let outcome = block_on(RetrievalProbe::run(future::pending::<()>(), token));
        assert!(matches!(outcome, Err(ConsoleError::ProbeCancelled)));

        assert!(probe.finish(outcome).is_err());
        assert!(!probe.is_pending());
        assert_eq!(probe.results().len(), 3);
    }

    #[test]
    fn test_settings_snap() {
        let mut settings = RetrievalSettings::default();
        settings.set_similarity_threshold(0.734);
        assert!((settings.similarity_threshold - 0.73).abs() < 1e-9);
        settings.set_vector_weight(1.7);
        assert_eq!(settings.vector_weight, 1.0);
        assert_eq!(SIMILARITY_THRESHOLD.format(0.7), "0.70");
    }
}
