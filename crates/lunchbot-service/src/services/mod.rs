//! Business logic services
//!
//! All services borrow a `ServiceContext`, which owns the shared
//! dependencies: the catalog repository, the recommendation log, and the
//! process-wide exclusion lock that serializes catalog mutations.

pub mod context;
pub mod error;
pub mod leaderboard;
pub mod recommend;
pub mod reconcile;
pub mod snapshot;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::{top_k, LeaderboardService};
pub use recommend::RecommendService;
pub use reconcile::ReconcileService;
pub use snapshot::resolve_recommend_count;
