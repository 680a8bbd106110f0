use std::sync::OnceLock;

/// Largest image accepted by `resize`, in pixels (64 Mpx)
pub const DEFAULT_MAX_PIXELS: usize = 64 * 1024 * 1024;
/// Largest number of candidates kept per scan
pub const DEFAULT_MAX_CANDIDATES: usize = 40;
/// Half-width of the adaptive threshold window
pub const DEFAULT_ADAPTIVE_RADIUS: usize = 15;
/// Percentage below the local mean a pixel must fall to count as dark
pub const DEFAULT_ADAPTIVE_BIAS: u8 = 5;
/// Largest payload a single symbol may decode to
pub const DEFAULT_MAX_PAYLOAD: usize = 8896;

/// Tunable limits for the native engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on width * height accepted by `resize`
    pub max_pixels: usize,
    /// Upper bound on candidates reported by a single scan
    pub max_candidates: usize,
    /// Half-width of the adaptive threshold window, in pixels
    pub adaptive_radius: usize,
    /// Adaptive threshold bias, percent below the local mean
    pub adaptive_bias: u8,
    /// Upper bound on decoded payload bytes per symbol
    pub max_payload_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_pixels: DEFAULT_MAX_PIXELS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            adaptive_radius: DEFAULT_ADAPTIVE_RADIUS,
            adaptive_bias: DEFAULT_ADAPTIVE_BIAS,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD,
        }
    }
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

static ENV_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Defaults overridden by `QR_REVEAL_*` environment variables.
    ///
    /// The environment is read once per process; later calls return the
    /// same snapshot.
    pub fn from_env() -> Self {
        *ENV_CONFIG.get_or_init(Self::read_env)
    }

    fn read_env() -> Self {
        let defaults = Self::default();
        Self {
            max_pixels: parse_env_usize("QR_REVEAL_MAX_PIXELS", defaults.max_pixels).max(1),
            max_candidates: parse_env_usize("QR_REVEAL_MAX_CANDIDATES", defaults.max_candidates)
                .clamp(1, 4096),
            adaptive_radius: parse_env_usize("QR_REVEAL_ADAPTIVE_RADIUS", defaults.adaptive_radius)
                .clamp(1, 255),
            adaptive_bias: parse_env_u8("QR_REVEAL_ADAPTIVE_BIAS", defaults.adaptive_bias)
                .min(50),
            max_payload_bytes: parse_env_usize("QR_REVEAL_MAX_PAYLOAD", defaults.max_payload_bytes)
                .max(1),
        }
    }

    /// Same config with a different pixel limit
    pub fn with_max_pixels(mut self, max_pixels: usize) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    /// Same config with a different candidate limit
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Same config with a different payload limit
    pub fn with_max_payload_bytes(mut self, max_payload_bytes: usize) -> Self {
        self.max_payload_bytes = max_payload_bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_candidates, 40);
        assert_eq!(config.max_payload_bytes, 8896);
        assert!(config.max_pixels >= 1920 * 1080);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_max_pixels(100)
            .with_max_candidates(2)
            .with_max_payload_bytes(16);
        assert_eq!(config.max_pixels, 100);
        assert_eq!(config.max_candidates, 2);
        assert_eq!(config.max_payload_bytes, 16);
    }

    #[test]
    fn test_from_env_is_stable() {
        assert_eq!(EngineConfig::from_env(), EngineConfig::from_env());
    }

    #[test]
    fn test_parse_env_fallback() {
        assert_eq!(parse_env_usize("QR_REVEAL_TEST_UNSET_VARIABLE", 7), 7);
        assert_eq!(parse_env_u8("QR_REVEAL_TEST_UNSET_VARIABLE", 3), 3);
    }
}
