//! Error types for Dodgefall

use thiserror::Error;

/// The main error type for Dodgefall
///
/// The simulation itself never fails; errors only come from configuration
/// and from the GPU/platform boundary.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// Result type alias for Dodgefall operations
pub type Result<T> = std::result::Result<T, GameError>;
