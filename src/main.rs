use clap::{error::ErrorKind, CommandFactory, Parser};
use cmd::{Cli, Commands};
use lazo::params::ValidationError;
use log::*;
mod cmd;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = match cli.context() {
        Ok(ctx) => ctx,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };
    env_logger::Builder::from_default_env()
        .filter_level(ctx.log_level())
        .init();
    debug!("parse context: {:?}", ctx);

    let res = match &cli.command {
        Commands::Rancher(command) => cmd::rancher::run(command),
        Commands::K8s(command) => cmd::k8s::run(command),
    };
    if let Err(err) = res {
        // Values read after clap is done (stdin) still fail like a bad argument
        if let Some(invalid) = err.downcast_ref::<ValidationError>() {
            debug!("invalid value for {}", invalid.param());
            Cli::command()
                .error(ErrorKind::ValueValidation, invalid)
                .exit()
        }
        return Err(err);
    }

    Ok(())
}
