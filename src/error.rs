//! Error types for tagic

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Content passed positionally to an attribute-style constructor
    PositionalContent { tag: String },
    /// A void element was given children
    VoidElementContent { tag: String },
    /// A raw-content element was given an element child
    InvalidRawContentChild {
        tag: String,
        child: String,
    },
    MaxDepthExceeded { max: usize },
    InvalidIndent,
    InvalidMaxDepth,
}

impl ErrorKind {
    /// True for the errors raised while building a node
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::PositionalContent { .. })
    }

    /// True for the element content violations detected during render
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            Self::VoidElementContent { .. } | Self::InvalidRawContentChild { .. }
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionalContent { tag } => write!(
                f,
                "<{tag}> takes content only through its children, not as a positional argument"
            ),
            Self::VoidElementContent { tag } => {
                write!(f, "void element <{tag}> cannot have content")
            }
            Self::InvalidRawContentChild { tag, child } => write!(
                f,
                "<{tag}> accepts only text content, found element <{child}>"
            ),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::InvalidIndent => write!(f, "indent width must be at least one space"),
            Self::InvalidMaxDepth => write!(f, "max depth must allow at least one element"),
        }
    }
}

/// Main error type for tagic
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    // innermost element first
    path: Vec<String>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            path: Vec::new(),
            message,
        }
    }

    /// Record that the error surfaced inside the element `tag`.
    pub fn within(mut self, tag: impl Into<String>) -> Self {
        self.path.push(tag.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Tag names from the outermost element down to the failing one
    pub fn path(&self) -> Vec<&str> {
        self.path.iter().rev().map(String::as_str).collect()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "error: {}", self.message)
        } else {
            write!(f, "error at {}: {}", self.path().join(" > "), self.message)
        }
    }
}

/// Result type alias for tagic
pub type Result<T> = std::result::Result<T, Error>;
