use clap::{Args, Subcommand};
use lazo::helpers::plans::{self, OutputFormat};
use lazo::params::{DockerImage, ImagePullPolicy, Target};
use log::*;

#[derive(Subcommand)]
pub(crate) enum K8sCommands {
    /// Print a Deployment patch that swaps the image of a container
    Upgrade(K8sUpgradeArgs),
}

#[derive(Args)]
pub(crate) struct K8sUpgradeArgs {
    /// Container to update, defaults to the deployment name
    #[arg(long, short)]
    pub(crate) container: Option<String>,
    #[arg(long, short, default_value_t = ImagePullPolicy::IfNotPresent)]
    pub(crate) pull_policy: ImagePullPolicy,
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
    pub(crate) output: OutputFormat,
    /// Deployment as 'namespace:name'
    pub(crate) target: Target,
    /// Image as 'account[/image[:tag]]'
    pub(crate) image: DockerImage,
}

pub(crate) fn run(command: &K8sCommands) -> anyhow::Result<()> {
    match command {
        K8sCommands::Upgrade(args) => upgrade(args),
    }
}

fn upgrade(args: &K8sUpgradeArgs) -> anyhow::Result<()> {
    let container = args.container.as_deref().unwrap_or(&args.target.name);
    info!(
        "patching container {} of {} to {}",
        container, args.target, args.image
    );
    let patch = plans::prepare_deployment_patch(&args.target, container, &args.image, args.pull_policy);
    print!("{}", plans::render(&patch, args.output)?);
    Ok(())
}
