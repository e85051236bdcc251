use crate::html::RenderOptions;

/// How the lexer and formatter are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Iterator chaining on the calling thread.
    #[default]
    Lazy,
    /// One thread per stage, joined by channels of `capacity` slots.
    Staged { capacity: usize },
}

/// Options for [`crate::highlight`] and [`crate::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: Mode,
    pub render: RenderOptions,
}
