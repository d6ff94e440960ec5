//! Workspace umbrella crate for textcmp.
//!
//! Compares two documents and reports how much text they share, which words
//! one uses where the other uses a synonym, and how hard each is to read.
//! The stage crates do the work; this crate validates input, runs the stages
//! in order, and merges their output into one [`ComparisonResult`].
//!
//! ```
//! let result = textcmp::compare("I am happy", "I am glad").unwrap();
//! assert!(result.similarity > 50.0);
//! assert_eq!(result.synonyms[0].first, "happy");
//! assert_eq!(result.synonyms[0].second, "glad");
//! ```

pub mod config;
pub mod extract;

pub use canonical::{
    CanonicalError, CanonicalizeConfig, Document, Token, canonicalize, normalize, token_set,
    tokenize,
};
pub use lexical::{
    LexicalDatabase, LexicalError, Lexicon, LexiconBuilder, PartOfSpeech, Synset, SynsetId,
    SynonymConfig, SynonymMatcher, SynonymPair, find_synonyms, install_shared,
};
pub use readability::{ReadabilityConfig, ReadabilityReport, analyze, readability};
pub use similarity::{
    DiffSegment, OpTag, Opcode, SimilarityBand, SimilarityConfig, char_diff, char_opcodes,
    similarity, similarity_with,
};

use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, info_span, warn};

/// Which side of a comparison had no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSide {
    First,
    Second,
    Both,
}

impl MissingSide {
    fn of(first_missing: bool, second_missing: bool) -> Option<Self> {
        match (first_missing, second_missing) {
            (true, true) => Some(MissingSide::Both),
            (true, false) => Some(MissingSide::First),
            (false, true) => Some(MissingSide::Second),
            (false, false) => None,
        }
    }
}

impl fmt::Display for MissingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingSide::First => f.write_str("the first document"),
            MissingSide::Second => f.write_str("the second document"),
            MissingSide::Both => f.write_str("both documents"),
        }
    }
}

/// Errors that can occur while comparing two documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("no text provided for {side}")]
    MissingInput { side: MissingSide },
    #[error("canonicalization failure: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for every stage of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub canonical: CanonicalizeConfig,
    pub similarity: SimilarityConfig,
    pub synonyms: SynonymConfig,
    pub readability: ReadabilityConfig,
}

impl CompareConfig {
    pub fn validate(&self) -> Result<(), CompareError> {
        self.canonical
            .validate()
            .map_err(|err| CompareError::InvalidConfig(format!("canonical: {err}")))
    }
}

/// Everything a comparison reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Character-level similarity in `[0, 100]`, unrounded.
    pub similarity: f64,
    pub band: SimilarityBand,
    /// Cross-document synonym pairs, ordered by first word then second.
    pub synonyms: Vec<SynonymPair>,
    /// Flesch-Kincaid grade of the first and second document.
    pub readability: [f64; 2],
    pub reports: [ReadabilityReport; 2],
}

impl ComparisonResult {
    /// Similarity with two decimals, e.g. `"42.86%"`.
    pub fn similarity_display(&self) -> String {
        format!("{:.2}%", self.similarity)
    }
}

/// Stages of a comparison, as reported to [`CompareMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareStage {
    Canonical,
    Similarity,
    Synonyms,
    Readability,
}

impl CompareStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareStage::Canonical => "canonical",
            CompareStage::Similarity => "similarity",
            CompareStage::Synonyms => "synonyms",
            CompareStage::Readability => "readability",
        }
    }
}

/// Metrics observer for comparisons.
pub trait CompareMetrics: Send + Sync {
    fn record_stage(&self, stage: CompareStage, latency: Duration);
    fn record_comparison(&self, latency: Duration, result: Result<(), CompareError>);
}

/// Install or clear the global comparison metrics recorder.
pub fn set_compare_metrics(recorder: Option<Arc<dyn CompareMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CompareMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn CompareMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn CompareMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Option<Arc<dyn CompareMetrics>>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Self {
        Self {
            recorder: metrics_recorder(),
            start: Instant::now(),
        }
    }

    fn stage(&mut self, stage: CompareStage) -> Duration {
        let elapsed = self.start.elapsed();
        if let Some(recorder) = &self.recorder {
            recorder.record_stage(stage, elapsed);
        }
        self.start = Instant::now();
        elapsed
    }
}

fn record_comparison(started: Instant, result: Result<(), CompareError>) {
    if let Some(recorder) = metrics_recorder() {
        recorder.record_comparison(started.elapsed(), result);
    }
}

/// Runs comparisons against one lexical database and configuration.
pub struct Comparator {
    matcher: SynonymMatcher<Arc<dyn LexicalDatabase>>,
    config: CompareConfig,
}

impl Comparator {
    /// Build a comparator over an explicit lexical database.
    pub fn new(
        lexicon: Arc<dyn LexicalDatabase>,
        config: CompareConfig,
    ) -> Result<Self, CompareError> {
        config.validate()?;
        let matcher = SynonymMatcher::with_config(lexicon, config.synonyms.clone());
        Ok(Self { matcher, config })
    }

    /// Build a comparator over the process-wide lexicon.
    pub fn with_shared_lexicon(config: CompareConfig) -> Result<Self, CompareError> {
        Self::new(lexical::shared(), config)
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two decoded documents.
    ///
    /// Fails with [`CompareError::MissingInput`] when either side is the empty
    /// string; no stage runs in that case. Whitespace-only text is compared
    /// like any other document.
    pub fn compare(&self, doc1: &str, doc2: &str) -> Result<ComparisonResult, CompareError> {
        let started = Instant::now();
        let result = self.run(doc1, doc2);
        record_comparison(started, result.as_ref().map(|_| ()).map_err(Clone::clone));
        result
    }

    fn run(&self, doc1: &str, doc2: &str) -> Result<ComparisonResult, CompareError> {
        if let Some(side) = MissingSide::of(doc1.is_empty(), doc2.is_empty()) {
            warn!(%side, "comparison_missing_input");
            return Err(CompareError::MissingInput { side });
        }

        let span = info_span!(
            "textcmp.compare",
            first_len = doc1.len(),
            second_len = doc2.len()
        );
        let _guard = span.enter();
        let cfg = &self.config;
        let mut metrics = MetricsSpan::start();

        let first = canonicalize("first", doc1, &cfg.canonical)?;
        let second = canonicalize("second", doc2, &cfg.canonical)?;
        let canonical_time = metrics.stage(CompareStage::Canonical);

        let percent = similarity_with(&first.normalized, &second.normalized, &cfg.similarity);
        let similarity_time = metrics.stage(CompareStage::Similarity);

        let synonyms = self
            .matcher
            .find_in_sets(&first.token_set(), &second.token_set());
        let synonyms_time = metrics.stage(CompareStage::Synonyms);

        let reports = [
            analyze(&first.raw, &cfg.readability),
            analyze(&second.raw, &cfg.readability),
        ];
        let readability_time = metrics.stage(CompareStage::Readability);

        let result = ComparisonResult {
            similarity: percent,
            band: SimilarityBand::from_percent(percent),
            synonyms,
            readability: [reports[0].grade, reports[1].grade],
            reports,
        };

        info!(
            similarity = result.similarity,
            band = %result.band,
            synonym_pairs = result.synonyms.len(),
            first_grade = result.readability[0],
            second_grade = result.readability[1],
            canonical_micros = canonical_time.as_micros(),
            similarity_micros = similarity_time.as_micros(),
            synonyms_micros = synonyms_time.as_micros(),
            readability_micros = readability_time.as_micros(),
            "comparison_complete"
        );
        Ok(result)
    }
}

/// Compare two documents with the default configuration and the
/// process-wide lexicon.
pub fn compare(doc1: &str, doc2: &str) -> Result<ComparisonResult, CompareError> {
    Comparator::with_shared_lexicon(CompareConfig::default())?.compare(doc1, doc2)
}
