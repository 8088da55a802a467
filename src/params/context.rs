use log::LevelFilter;

use super::{Result, ValidationError};

/// Name under which the quiet flag is handed to [`Verbosity`].
pub const QUIET: &str = "quiet";

/// State shared by the parameters of a single invocation.
///
/// One context is created per command line and handed to every parser that
/// needs to know about the others, so `--quiet` can silence `-v` no matter
/// which one was seen first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseContext {
    verbosity: i32,
    quiet: bool,
    debug: bool,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective verbosity, `-1` once quiet mode was requested.
    pub fn verbosity(&self) -> i32 {
        if self.quiet {
            -1
        } else {
            self.verbosity
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn log_level(&self) -> LevelFilter {
        let level = match self.verbosity() {
            i32::MIN..=-1 => LevelFilter::Off,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        if self.debug && level < LevelFilter::Debug {
            LevelFilter::Debug
        } else {
            level
        }
    }
}

pub struct Verbosity;

impl Verbosity {
    /// Parses a verbosity level given for `param`.
    ///
    /// The quiet parameter only marks the context, its value is ignored.
    /// Any other value must be an integer, text like `loud` is rejected
    /// rather than coerced.
    pub fn convert(&self, value: &str, param: &str, ctx: &mut ParseContext) -> Result<i32> {
        if param == QUIET {
            ctx.quiet = true;
            return Ok(ctx.verbosity());
        }
        let level = value.trim().parse::<i32>().map_err(|_| {
            ValidationError::new(
                param,
                format!("Invalid verbosity '{value}'. Please indicate an integer"),
            )
        })?;
        ctx.verbosity = level;
        Ok(ctx.verbosity())
    }
}

pub struct DebugMode;

impl DebugMode {
    pub fn convert(&self, ctx: &mut ParseContext) -> bool {
        ctx.debug = true;
        true
    }
}
