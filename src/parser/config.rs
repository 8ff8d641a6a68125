//! Parser configuration and resource limits

/// Root element name required by the dialect
pub const DEFAULT_ROOT_NAME: &str = "speak";
/// Default maximum element nesting depth
pub const DEFAULT_MAX_DEPTH: u16 = 128;
/// Hard nesting ceiling applied when the depth limit is disabled or set above it.
///
/// Trees are dropped, compared, rendered and serialized recursively, so depth
/// is never left unbounded.
pub const MAX_DEPTH_CEILING: u16 = 1024;
/// Default maximum input size in bytes (1 MB)
pub const DEFAULT_MAX_SIZE: usize = 1024 * 1024;

/// Configuration for the markup parser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name the single top-level element must carry
    pub root_name: String,
    /// Maximum nesting depth (0 means [`MAX_DEPTH_CEILING`])
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
    /// Keep runs of spaces inside quoted attribute values
    pub preserve_attribute_whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            preserve_attribute_whitespace: true,
        }
    }
}

impl Config {
    /// Default limits with a different root element name
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            ..Self::default()
        }
    }

    /// Default root name with the size limit disabled and depth held only by
    /// [`MAX_DEPTH_CEILING`]
    pub fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
            ..Self::default()
        }
    }

    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    pub const fn with_max_depth(mut self, max_depth: u16) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub const fn with_preserve_attribute_whitespace(mut self, preserve: bool) -> Self {
        self.preserve_attribute_whitespace = preserve;
        self
    }

    /// Depth limit actually enforced, never above [`MAX_DEPTH_CEILING`]
    pub const fn effective_max_depth(&self) -> u16 {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            self.max_depth
        }
    }

    pub(crate) fn depth_exceeded(&self, depth: usize) -> bool {
        depth > usize::from(self.effective_max_depth())
    }

    pub(crate) const fn size_exceeded(&self, size: usize) -> bool {
        self.max_size != 0 && size > self.max_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.root_name, "speak");
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.preserve_attribute_whitespace);
    }

    #[test]
    fn test_unlimited_keeps_depth_ceiling() {
        let config = Config::unlimited();
        assert_eq!(config.effective_max_depth(), MAX_DEPTH_CEILING);
        assert!(!config.depth_exceeded(usize::from(MAX_DEPTH_CEILING)));
        assert!(config.depth_exceeded(usize::from(MAX_DEPTH_CEILING) + 1));
        assert!(!config.size_exceeded(usize::MAX));
    }

    #[test]
    fn test_depth_above_ceiling_is_clamped() {
        let config = Config::default().with_max_depth(u16::MAX);
        assert_eq!(config.effective_max_depth(), MAX_DEPTH_CEILING);
        assert_eq!(Config::default().effective_max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_limits() {
        let config = Config::new("root").with_max_depth(2).with_max_size(10);
        assert_eq!(config.root_name, "root");
        assert_eq!(config.clone().with_root_name("speak").root_name, "speak");
        assert!(!config.depth_exceeded(2));
        assert!(config.depth_exceeded(3));
        assert!(!config.size_exceeded(10));
        assert!(config.size_exceeded(11));
    }
}
