// Feature route modules and the registry the composer consumes. Each
// module describes itself: a one-time initializer and a mountable
// sub-router. Modules are registered once at startup and never mutated.

pub mod exercises;
pub mod home;
pub mod muscles;

use anyhow::Result;
use axum::Router;

use crate::config::state::AppState;

/// A self-contained feature unit the application composer can mount
/// under the versioned API prefix.
pub trait RouteModule: Send + Sync {
    /// Short identifier used in composition logs and error context
    fn name(&self) -> &'static str;

    /// One-time internal setup, invoked exactly once before the module's
    /// router is mounted. Failing here aborts the whole composition.
    fn init_routes(&self) -> Result<()> {
        Ok(())
    }

    /// The mountable sub-application
    fn router(&self) -> Router<AppState>;
}

/// The modules served under `/api/v1`, in registration order.
/// The home module is mounted separately at the root path.
pub fn modules() -> Vec<Box<dyn RouteModule>> {
    vec![
        Box::new(exercises::ExercisesModule),
        Box::new(muscles::MusclesModule),
    ]
}
