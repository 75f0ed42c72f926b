use aibom_cli::{commands, logging, CliConfig, CommandOutput, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};

fn cli() -> Command {
    Command::new("aibom")
        .version(aibom_cli::VERSION)
        .about("Generate, validate and audit AI Bills of Materials")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (default: ./aibom.toml when present)"),
        )
        .subcommand(
            Command::new("generate")
                .about("Build an AIBOM from a model/tool inventory")
                .arg(path_arg("inventory", "Inventory file (JSON or YAML)").required(true))
                .arg(path_arg("output", "Write the AIBOM here instead of stdout")),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate an AIBOM file")
                .arg(path_arg("file", "AIBOM JSON file").required(true))
                .arg(format_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail on warnings as well as errors"),
                ),
        )
        .subcommand(
            Command::new("policy")
                .about("Evaluate a policy file against an AIBOM")
                .arg(path_arg("bom", "AIBOM JSON file").required(true))
                .arg(path_arg("policy", "Policy file (JSON or YAML)"))
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the components of an AIBOM")
                .arg(path_arg("file", "AIBOM JSON file").required(true)),
        )
}

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_parser(value_parser!(OutputFormat))
        .help("Output format (overrides config)")
}

fn path<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    args.get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .with_context(|| format!("--{name} is required"))
}

fn run(matches: &ArgMatches, config: &CliConfig) -> Result<CommandOutput> {
    let format_of = |args: &ArgMatches| {
        args.get_one::<OutputFormat>("format")
            .copied()
            .unwrap_or(config.format)
    };

    match matches.subcommand() {
        Some(("generate", args)) => commands::generate(
            path(args, "inventory")?,
            args.get_one::<PathBuf>("output").map(PathBuf::as_path),
        ),
        Some(("validate", args)) => commands::validate(
            path(args, "file")?,
            format_of(args),
            args.get_flag("strict") || config.strict,
        ),
        Some(("policy", args)) => {
            let policy = args
                .get_one::<PathBuf>("policy")
                .or(config.policy.as_ref())
                .context("no policy file: pass --policy or set `policy` in the config")?;
            commands::policy(path(args, "bom")?, policy, format_of(args))
        }
        Some(("inspect", args)) => commands::inspect(path(args, "file")?),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = CliConfig::discover(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        &cwd,
    )
    .context("loading configuration")?;
    logging::init_tracing(&config.log);

    let outcome = run(&matches, &config)?;
    println!("{}", outcome.output);
    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }
    Ok(())
}
