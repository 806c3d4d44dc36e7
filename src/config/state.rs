// Process-scoped application state: constructed once in main() and handed
// to the router via `with_state`. Read-only after startup.

use std::sync::Arc;

use anyhow::Result;

use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Builds the state from the process environment
    pub fn from_env() -> Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;

        Ok(Self {
            environment: Arc::new(environment),
        })
    }
}
