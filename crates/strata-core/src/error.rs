use thiserror::Error;

/// Errors that can occur during Strata initialization and runtime.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("WebGPU adapter not found: {0}")]
    AdapterNotFound(String),

    #[error("Failed to request GPU device: {0}")]
    DeviceRequestFailed(String),

    #[error("Surface configuration failed: {0}")]
    SurfaceConfigFailed(String),
}
