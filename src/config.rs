use parking_lot::RwLock;

use crate::error::{Error, ErrorKind, Result};

pub const DEFAULT_INDENT_SPACES: usize = 2;
pub const DEFAULT_MAX_DEPTH: usize = 512;

static GLOBAL: RwLock<RenderConfig> = RwLock::new(RenderConfig::DEFAULT);

/// Configuration for rendering markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces added per nesting level in indented output
    pub indent_spaces: usize,
    /// Render boolean attributes as `name="name"` and use the XHTML document prolog
    pub strict_xhtml: bool,
    /// Maximum element nesting depth, at least 1.
    ///
    /// Bounds rendering only. Dropping a tree is iterative, but `Clone` and
    /// `PartialEq` on [`crate::Node`] still recurse once per nesting level.
    pub max_depth: usize,
    /// Escape `&`, `<`, `>` and quotes in attribute values.
    ///
    /// Off by default: attribute values are written as given, so callers passing
    /// untrusted values must sanitize them first or turn this on.
    pub escape_attributes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RenderConfig {
    pub const DEFAULT: Self = Self {
        indent_spaces: DEFAULT_INDENT_SPACES,
        strict_xhtml: false,
        max_depth: DEFAULT_MAX_DEPTH,
        escape_attributes: false,
    };

    pub const fn with_indent(mut self, indent_spaces: usize) -> Self {
        self.indent_spaces = indent_spaces;
        self
    }

    pub const fn with_strict_xhtml(mut self, strict_xhtml: bool) -> Self {
        self.strict_xhtml = strict_xhtml;
        self
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_escape_attributes(mut self, escape_attributes: bool) -> Self {
        self.escape_attributes = escape_attributes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent_spaces == 0 {
            return Err(Error::new(ErrorKind::InvalidIndent));
        }
        if self.max_depth == 0 {
            return Err(Error::new(ErrorKind::InvalidMaxDepth));
        }
        Ok(())
    }

    /// Snapshot of the process-wide configuration used by [`crate::Node::render`].
    pub fn global() -> Self {
        *GLOBAL.read()
    }

    /// Replace the process-wide configuration.
    ///
    /// Renders already in flight keep the configuration they started with.
    pub fn set_global(config: Self) -> Result<()> {
        config.validate()?;
        *GLOBAL.write() = config;
        Ok(())
    }

    /// Modify the process-wide configuration in place, rejecting invalid results.
    pub fn update_global<F>(f: F) -> Result<()>
    where
        F: FnOnce(&mut Self),
    {
        let mut guard = GLOBAL.write();
        let mut next = *guard;
        f(&mut next);
        next.validate()?;
        *guard = next;
        Ok(())
    }

    /// Restore the process-wide configuration to its defaults.
    pub fn reset_global() {
        *GLOBAL.write() = Self::DEFAULT;
    }
}
