//! Compilation options.

/// What to do when input ends with blocks still open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnclosedPolicy {
    /// Fail with [`ScssError::UnclosedBlock`](crate::ScssError::UnclosedBlock).
    #[default]
    Error,
    /// Emit pending properties and synthetic closing braces, then succeed.
    AutoClose,
}

/// Options for [`compile_with`](crate::compile_with).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub unclosed: UnclosedPolicy,
    /// Spaces before each property in emitted rules.
    pub indent: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            unclosed: UnclosedPolicy::Error,
            indent: 2,
        }
    }
}

impl CompileOptions {
    /// Options that recover from unbalanced braces instead of failing.
    pub fn lenient() -> Self {
        Self {
            unclosed: UnclosedPolicy::AutoClose,
            ..Self::default()
        }
    }
}
