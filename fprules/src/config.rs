use crate::error::ConfigError;

/// Minimum support, either as an absolute transaction count or as a fraction
/// of the transaction total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(usize),
    Ratio(f64),
}

impl MinSupport {
    /// Absolute count for a batch of `num_transactions`. Ratios truncate.
    pub fn to_count(self, num_transactions: usize) -> usize {
        match self {
            MinSupport::Count(count) => count,
            MinSupport::Ratio(ratio) => (ratio * num_transactions as f64) as usize,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    pub min_confidence: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Ratio(0.01),
            min_confidence: 0.5,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support: MinSupport::Ratio(min_support),
            min_confidence,
        }
    }

    pub fn with_min_support_count(mut self, count: usize) -> Self {
        self.min_support = MinSupport::Count(count);
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let MinSupport::Ratio(ratio) = self.min_support {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::SupportRatio(ratio));
            }
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::Confidence(self.min_confidence));
        }
        Ok(())
    }
}
