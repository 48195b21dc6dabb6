//! Host-facing drawing: the surface and metrics collaborators plus the per-frame orchestrator.

pub(crate) mod metrics;
pub(crate) mod renderer;
pub(crate) mod surface;
