use clap::{ArgAction, Parser, Subcommand};
use lazo::params::{DebugMode, ParseContext, ValidationError, Verbosity, QUIET};

use self::k8s::K8sCommands;
use self::rancher::RancherCommands;

pub(crate) mod k8s;
pub(crate) mod rancher;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase logging, may be repeated
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,
    /// Silence logging, wins over --verbose
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Work with the Rancher v3 API
    #[command(subcommand)]
    Rancher(RancherCommands),
    /// Work with Kubernetes objects directly
    #[command(subcommand)]
    K8s(K8sCommands),
}

impl Cli {
    /// Builds the parse context for this invocation out of the global flags.
    pub(crate) fn context(&self) -> Result<ParseContext, ValidationError> {
        let mut ctx = ParseContext::new();
        Verbosity.convert(&self.verbose.to_string(), "verbose", &mut ctx)?;
        if self.quiet {
            Verbosity.convert("", QUIET, &mut ctx)?;
        }
        if self.debug {
            DebugMode.convert(&mut ctx);
        }
        Ok(ctx)
    }
}
