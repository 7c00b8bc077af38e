//! zdiff: a text diff that highlights exactly which words changed
//!
//! - `areas`: the documents being compared and where they come from
//! - `artifacts`: diffing, highlighting and rendering
//! - `commands`: the diff command driving the pipeline

pub mod areas;
pub mod artifacts;
pub mod commands;

/// When to emit terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only an interactive stdout with `NO_COLOR` unset.
    pub fn resolve(&self, stdout_is_terminal: bool, no_color_env: bool) -> bool {
        match self {
            ColorChoice::Auto => stdout_is_terminal && !no_color_env,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
