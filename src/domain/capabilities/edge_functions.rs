//! Capability trait for publishing edge functions.

use serde::{Deserialize, Serialize};

use crate::domain::entities::FunctionVersion;
use crate::error::HostingError;

/// Runtime an edge function is executed with on the delivery network.
///
/// The Basic-Auth gate is pinned to [`FunctionRuntime::NodeJs14`]; that the
/// runtime is end-of-life is an operational risk owned by the operator, not
/// a concern of the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionRuntime {
    #[serde(rename = "nodejs14.x")]
    NodeJs14,
}

impl FunctionRuntime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NodeJs14 => "nodejs14.x",
        }
    }
}

/// Publishes edge function code as an immutable version.
///
/// # Implementations
///
/// - [`crate::infrastructure::planner::PlanEngine`] - records the function declaration
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait EdgeFunctions: Send + Sync {
    /// Publishes `code` under `name` and returns the resulting immutable
    /// function version.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Provisioning`] when the engine cannot declare
    /// the function.
    fn publish(
        &self,
        name: &str,
        handler: &str,
        runtime: FunctionRuntime,
        code: &str,
    ) -> Result<FunctionVersion, HostingError>;
}
