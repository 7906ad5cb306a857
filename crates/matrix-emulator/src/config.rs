//! Emulator configuration

/// Configuration for emulator display presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Upscaling factor (1 = no scaling, 2 = 2x for visibility, etc.)
    pub scale: u32,
}

impl EmulatorConfig {
    /// Default configuration: 2x scaling for visibility
    pub const DEFAULT: Self = Self { scale: 2 };

    /// No upscaling (1:1 pixel mapping)
    pub const NATIVE: Self = Self { scale: 1 };
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
