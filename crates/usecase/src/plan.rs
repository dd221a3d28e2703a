// crates/usecase/src/plan.rs
use std::path::PathBuf;

use derive_builder::Builder;
use file_lister_domain::Timestamp;
use file_lister_shared_kernel::{ApplicationError, Result};

/// Everything a walk needs, fixed before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(error = "ListingPlanBuilderError"))]
pub struct ListingPlan {
    /// Absolute path of the directory to walk.
    pub root: PathBuf,
    /// Only entries strictly newer than this are listed; `None` lists everything.
    #[builder(default)]
    pub threshold: Option<Timestamp>,
}

impl ListingPlan {
    pub fn builder() -> ListingPlanBuilder {
        ListingPlanBuilder::default()
    }
}

#[derive(Debug)]
pub struct ListingPlanBuilderError(String);

impl From<derive_builder::UninitializedFieldError> for ListingPlanBuilderError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self(err.to_string())
    }
}

impl From<ListingPlanBuilderError> for ApplicationError {
    fn from(err: ListingPlanBuilderError) -> Self {
        Self::InvalidPlan { reason: err.0 }
    }
}

impl ListingPlanBuilder {
    /// Like `build`, but reporting through the workspace error type.
    ///
    /// # Errors
    /// Fails when `root` was never set.
    pub fn finish(&self) -> Result<ListingPlan> {
        Ok(self.build().map_err(ApplicationError::from)?)
    }
}
