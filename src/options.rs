/// Containers a document may nest when no explicit limit is given.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for [`crate::decode_with`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DecodeOptions {
    /// Maximum number of lists/dictionaries enclosing any value.
    pub max_depth: usize,
    /// Reject integers with leading zeros or a negative zero.
    pub strict_integers: bool,
}

impl DecodeOptions {
    pub fn new() -> DecodeOptions {
        DecodeOptions::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> DecodeOptions {
        self.max_depth = max_depth;
        self
    }

    pub fn strict_integers(mut self, strict: bool) -> DecodeOptions {
        self.strict_integers = strict;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_integers: false,
        }
    }
}
