use std::io::{self, BufRead};

use clap::{Args, Subcommand};
use lazo::helpers::plans::{self, OutputFormat};
use lazo::params::{
    parse_url, Credentials, DockerImage, ImagePullPolicy, Project, StdinAuth, ValidationError,
    Workload,
};
use log::*;

#[derive(Subcommand)]
pub(crate) enum RancherCommands {
    /// Upgrade the image of a workload
    Upgrade(RancherUpgradeArgs),
}

#[derive(Args)]
pub(crate) struct RancherUpgradeArgs {
    /// Rancher API endpoint, without the trailing '/'
    #[arg(long, env = "RANCHER_ENDPOINT", value_parser = parse_url)]
    pub(crate) url: String,
    /// Credentials as 'key:secret'
    #[arg(
        long,
        env = "RANCHER_AUTH",
        hide_env_values = true,
        required_unless_present = "stdin"
    )]
    pub(crate) auth: Option<Credentials>,
    /// Read 'key:secret' from the first line of stdin, wins over --auth
    #[arg(long, default_value_t = false)]
    pub(crate) stdin: bool,
    /// Project as 'clusterId:projectId'
    #[arg(long, env = "RANCHER_PROJECT")]
    pub(crate) project: Project,
    #[arg(long, short, default_value_t = ImagePullPolicy::IfNotPresent)]
    pub(crate) pull_policy: ImagePullPolicy,
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
    pub(crate) output: OutputFormat,
    /// Workload as '[kind:]namespace:name'
    pub(crate) workload: Workload,
    /// Image as 'account[/image[:tag]]'
    pub(crate) image: DockerImage,
}

pub(crate) fn run(command: &RancherCommands) -> anyhow::Result<()> {
    match command {
        RancherCommands::Upgrade(args) => upgrade(args),
    }
}

fn credentials<R: BufRead>(args: &RancherUpgradeArgs, stdin: R) -> Result<Credentials, ValidationError> {
    match &args.auth {
        Some(credentials) if !args.stdin => Ok(credentials.clone()),
        _ => StdinAuth.read(stdin),
    }
}

fn upgrade(args: &RancherUpgradeArgs) -> anyhow::Result<()> {
    let credentials = credentials(args, io::stdin().lock())?;
    info!(
        "upgrading {} in project {} to {}",
        args.workload, args.project, args.image
    );
    let plan = plans::prepare_upgrade_plan(
        &args.url,
        &args.project,
        &args.workload,
        &args.image,
        args.pull_policy,
        &credentials,
    );
    print!("{}", plans::render(&plan, args.output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use crate::cmd::{Cli, Commands};

    use super::*;

    fn upgrade_args(argv: &[&str]) -> Result<RancherUpgradeArgs, clap::Error> {
        let cli = Cli::try_parse_from(argv)?;
        match cli.command {
            Commands::Rancher(RancherCommands::Upgrade(args)) => Ok(args),
            _ => panic!("expected rancher upgrade"),
        }
    }

    #[test]
    fn parses_upgrade_arguments() {
        let args = upgrade_args(&[
            "lazo",
            "rancher",
            "upgrade",
            "--url",
            "https://rancher.example.com:9000/v3",
            "--auth",
            "token:secret",
            "--project",
            "c-abc12:p-xyz34",
            "--pull-policy",
            "a",
            "statefulset:ns1:db",
            "saxix/db:1.2",
        ])
        .unwrap();
        assert_eq!(args.url, "https://rancher.example.com:9000/v3");
        assert_eq!(args.auth.as_ref().map(|c| c.key.as_str()), Some("token"));
        assert!(!args.stdin);
        assert_eq!(args.project.cluster_id, "c-abc12");
        assert_eq!(args.pull_policy, ImagePullPolicy::Always);
        assert_eq!(args.workload.kind, "statefulset");
        assert_eq!(args.image.id(), "saxix/db:1.2");
        assert_eq!(args.output, OutputFormat::Yaml);
    }

    #[test]
    fn rejects_invalid_values() {
        let base = [
            "lazo",
            "rancher",
            "upgrade",
            "--stdin",
            "--project",
            "c-abc12:p-xyz34",
        ];
        let cases: [&[&str]; 3] = [
            &["--url", "https://rancher.example.com/v3/", "ns1:web", "acct/web"],
            &["--url", "https://rancher.example.com/v3", "web", "acct/web"],
            &["--url", "https://rancher.example.com/v3", "ns1:web", "acct:tag"],
        ];
        for case in cases {
            let argv: Vec<&str> = base.iter().chain(case.iter()).copied().collect();
            let err = upgrade_args(&argv).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn stdin_wins_over_auth_from_env() {
        std::env::set_var("RANCHER_AUTH", "env-key:env-secret");
        let args = upgrade_args(&[
            "lazo",
            "rancher",
            "upgrade",
            "--url",
            "https://rancher.example.com/v3",
            "--stdin",
            "--project",
            "c-abc12:p-xyz34",
            "ns1:web",
            "acct/web",
        ])
        .unwrap();
        std::env::remove_var("RANCHER_AUTH");
        assert!(args.stdin);
        assert_eq!(args.auth.as_ref().map(|c| c.key.as_str()), Some("env-key"));

        let credentials = credentials(&args, Cursor::new("stdin-key:stdin-secret\n")).unwrap();
        assert_eq!(credentials.key, "stdin-key");
        assert_eq!(credentials.secret, "stdin-secret");
    }

    #[test]
    fn auth_flag_is_used_without_stdin() {
        let args = upgrade_args(&[
            "lazo",
            "rancher",
            "upgrade",
            "--url",
            "https://rancher.example.com/v3",
            "--auth",
            "token:secret",
            "--project",
            "c-abc12:p-xyz34",
            "ns1:web",
            "acct/web",
        ])
        .unwrap();
        let credentials = credentials(&args, Cursor::new("")).unwrap();
        assert_eq!(credentials.key, "token");
    }
}
