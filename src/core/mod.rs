//! Core resolution engine and configuration snapshots

pub mod engine;
pub mod snapshot;

pub use engine::{
    CapabilityRequest, RouteDecision, RoutePolicy, RouteSource, RoutedResponse, RouterEngine,
    RouterEngineBuilder,
};
pub use snapshot::{ConfigSnapshot, SnapshotCache};
