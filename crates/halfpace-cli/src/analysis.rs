//! One submission end to end: extract, predict, compare.

use crate::config::Config;
use crate::error::Result;
use halfpace_dataset::{DatasetConfig, HistoricalDataset};
use halfpace_domain::{MissingFields, ParsedRecord, RaceTime};
use halfpace_extractor::{Extraction, Extractor};
use halfpace_llm::{
    Comparator, ComparisonError, LlmConfig, MockProvider, OpenAiProvider, ProviderKind,
};
use halfpace_predictor::{distance_km, format_duration, RiegelModel};
use once_cell::unsync::OnceCell;
use serde::Serialize;
use tracing::{info, warn};

const MOCK_SUMMARY: &str = "Tryb offline: porównanie z danymi historycznymi nie zostało wykonane.";

/// Where comparison requests go.
pub enum ComparisonBackend {
    /// OpenAI-compatible API
    OpenAi(Comparator<OpenAiProvider>),
    /// Canned answer
    Mock(Comparator<MockProvider>),
    /// The provider could not be set up; every request fails with this error
    Unavailable(ComparisonError),
    /// Comparison turned off in configuration
    Disabled,
}

impl ComparisonBackend {
    /// Build the backend selected in configuration.
    ///
    /// A missing API key is not fatal here: it surfaces as an auth failure
    /// when a comparison is requested, leaving extraction and prediction intact.
    pub fn from_config(config: &LlmConfig) -> Self {
        match config.provider {
            ProviderKind::None => Self::Disabled,
            ProviderKind::Mock => Self::Mock(Comparator::new(MockProvider::new(MOCK_SUMMARY))),
            ProviderKind::OpenAi => match OpenAiProvider::from_config(config) {
                Ok(provider) => Self::OpenAi(Comparator::new(provider)),
                Err(e) => {
                    info!("Comparison provider unavailable: {}", e);
                    Self::Unavailable(e.into())
                }
            },
        }
    }

    /// Whether comparisons can be attempted at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    async fn compare(
        &self,
        user_text: &str,
        sample: &str,
        predicted_half: Option<&str>,
    ) -> std::result::Result<String, ComparisonError> {
        match self {
            Self::OpenAi(comparator) => comparator.compare(user_text, sample, predicted_half).await,
            Self::Mock(comparator) => comparator.compare(user_text, sample, predicted_half).await,
            Self::Unavailable(error) => Err(error.clone()),
            Self::Disabled => Err(ComparisonError::new(
                halfpace_llm::FailureKind::Unknown,
                "comparison disabled",
            )),
        }
    }
}

/// What happened to the comparison step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// The model answered
    Summary {
        /// Answer text
        text: String,
    },
    /// The model could not be reached or refused the request
    Failed {
        /// Classified error
        error: ComparisonError,
    },
    /// Not attempted
    Skipped {
        /// Why
        reason: SkipReason,
    },
}

/// Why a comparison was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Turned off by flag or configuration
    Disabled,
    /// Some fields are missing from the description
    IncompleteInput,
}

/// A predicted race time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// The 5 km time it is based on
    pub five_k: RaceTime,
    /// Target distance (km)
    pub distance_km: f64,
    /// Predicted time over the target distance
    pub predicted: RaceTime,
    /// `HH:MM:SS`
    pub formatted: String,
}

/// Everything the front end shows for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Extracted fields
    pub record: ParsedRecord,
    /// Fields that could not be found
    pub missing: MissingFields,
    /// Present whenever a 5 km time was found, regardless of sex and age
    pub prediction: Option<Prediction>,
    /// Comparison with historical results
    pub comparison: ComparisonOutcome,
}

/// Options for a single analysis.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    /// Attempt the comparison
    pub compare: bool,
    /// Rows of historical data in the comparison prompt
    pub sample_rows: usize,
}

fn prediction(model: &RiegelModel, five_k: RaceTime) -> Prediction {
    let predicted = model.predict(five_k);
    Prediction {
        five_k,
        distance_km: model.to_km,
        predicted,
        formatted: format_duration(predicted.total_seconds()),
    }
}

/// Runs submissions through extraction, prediction and comparison.
///
/// The historical dataset is loaded on first use and kept for the lifetime of
/// the analyzer.
pub struct Analyzer {
    extractor: Extractor,
    model: RiegelModel,
    dataset_config: DatasetConfig,
    dataset: OnceCell<Option<HistoricalDataset>>,
    backend: ComparisonBackend,
}

impl Analyzer {
    /// Create a new Analyzer
    pub fn new(model: RiegelModel, dataset_config: DatasetConfig, backend: ComparisonBackend) -> Self {
        Self {
            extractor: Extractor::new(),
            model,
            dataset_config,
            dataset: OnceCell::new(),
            backend,
        }
    }

    /// Create an Analyzer from the CLI configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.predictor.model()?,
            config.dataset.clone(),
            ComparisonBackend::from_config(&config.llm),
        ))
    }

    /// Use an already loaded dataset instead of reading the configured files
    ///
    /// Replaces whatever dataset was set or loaded before.
    pub fn with_dataset(mut self, dataset: HistoricalDataset) -> Self {
        self.dataset = OnceCell::from(Some(dataset));
        self
    }

    /// Default number of historical rows in a comparison
    pub fn default_sample_rows(&self) -> usize {
        self.dataset_config.sample_rows
    }

    /// Extract fields only
    pub fn extract(&self, text: &str) -> Extraction {
        self.extractor.extract(text)
    }

    /// Predict with the configured model (half marathon by default)
    pub fn predict(&self, five_k: RaceTime) -> Prediction {
        prediction(&self.model, five_k)
    }

    /// Predict over a named distance (`10k`, `half`, `marathon`, ...) keeping
    /// the configured source distance and exponent
    pub fn predict_to(&self, five_k: RaceTime, distance: &str) -> Result<Prediction> {
        let model =
            RiegelModel::with_exponent(self.model.from_km, distance_km(distance)?, self.model.exponent)?;
        Ok(prediction(&model, five_k))
    }

    fn dataset(&self) -> Option<&HistoricalDataset> {
        self.dataset
            .get_or_init(|| match HistoricalDataset::load(&self.dataset_config) {
                Ok(dataset) => Some(dataset),
                Err(e) => {
                    warn!("Historical results unavailable: {}", e);
                    None
                }
            })
            .as_ref()
    }

    /// Run one submission through every step
    pub async fn analyze(&self, text: &str, options: AnalyzeOptions) -> Analysis {
        let (record, missing) = self.extract(text).into_parts();
        let prediction = record.five_k_time.map(|five_k| self.predict(five_k));

        let comparison = if !options.compare || !self.backend.is_enabled() {
            ComparisonOutcome::Skipped {
                reason: SkipReason::Disabled,
            }
        } else if !missing.is_empty() {
            ComparisonOutcome::Skipped {
                reason: SkipReason::IncompleteInput,
            }
        } else {
            let sample = self
                .dataset()
                .map(|d| d.sample(options.sample_rows))
                .unwrap_or_default();
            let predicted = prediction.as_ref().map(|p| p.formatted.as_str());

            match self.backend.compare(text, &sample, predicted).await {
                Ok(text) => ComparisonOutcome::Summary { text },
                Err(error) => ComparisonOutcome::Failed { error },
            }
        };

        info!(
            missing = missing.len(),
            predicted = prediction.is_some(),
            "Analysis finished"
        );

        Analysis {
            record,
            missing,
            prediction,
            comparison,
        }
    }
}
