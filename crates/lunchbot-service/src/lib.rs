//! # lunchbot-service
//!
//! Application layer containing the recommendation reconciler, the reaction
//! snapshot resolver, the leaderboard projector, and the recommendation
//! picker. The chat integration layer drives these services from reaction
//! events and user commands.

pub mod services;

pub use services::{
    resolve_recommend_count, top_k, LeaderboardService, ReconcileService, RecommendService,
    ServiceContext, ServiceError, ServiceResult,
};
