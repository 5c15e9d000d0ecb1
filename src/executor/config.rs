//! Limits applied to every query the executor runs.

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Maximum nesting of selection sets.
    pub max_depth: usize,
    /// Maximum total field cost of a query.
    pub max_complexity: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_depth: 15,
            max_complexity: 500,
        }
    }
}

impl ExecutorConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.max_depth == 0 {
            return Err(CatalogError::InvalidConfig("max_depth must be > 0".into()));
        }
        if self.max_complexity == 0 {
            return Err(CatalogError::InvalidConfig(
                "max_complexity must be > 0".into(),
            ));
        }
        Ok(())
    }
}
