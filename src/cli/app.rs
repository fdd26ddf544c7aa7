//! Main CLI application

use crate::cli::completion::print_completions;
use crate::commands::{generate_from_args, rename_project, Kind};
use crate::context::{Context, Verbosity};
use crate::error::{Result, StacoError, UsageError};
use crate::ui;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the process arguments
    pub fn run(self) -> Result<()> {
        self.run_from(std::env::args_os())
    }

    /// Run the application with explicit arguments (first item is the binary name).
    ///
    /// Usage and conflict errors are printed here and do not fail the call;
    /// only I/O errors are returned.
    pub fn run_from<I, T>(mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            Err(e) => {
                match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        let _ = e.print();
                    }
                    // unknown flags fall back to help like unknown commands
                    _ => println!("{}", self.command.render_help()),
                }
                return Ok(());
            }
        };

        if matches.get_flag("no-color") {
            ui::disable_color();
        }

        let mut ctx = Context::new().with_verbosity(get_verbosity(&matches));
        if let Some(root) = matches.get_one::<PathBuf>("root") {
            ctx = ctx.with_root(root.clone());
        }
        ctx.reporter().debug(format!("Project root: {}", ctx.root.display()));

        let result = match matches.subcommand() {
            Some(("rename", sub)) => rename_project(&ctx, arg_str(sub, "name")).map(|_| ()),
            Some(("generate", sub)) => {
                generate_from_args(&ctx, arg_str(sub, "kind"), arg_str(sub, "name")).map(|_| ())
            }
            Some(("completions", sub)) => {
                if let Some(shell) = sub.get_one::<Shell>("shell") {
                    print_completions(*shell, &mut self.command);
                }
                Ok(())
            }
            _ => {
                // No command, or one we do not know
                println!("{}", self.command.render_help());
                Ok(())
            }
        };

        report(&ctx, result)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Print locally-handled errors and pass fatal ones through
fn report(ctx: &Context, result: Result<()>) -> Result<()> {
    let err = match result {
        Ok(()) => return Ok(()),
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => e,
    };

    let reporter = ctx.reporter();
    reporter.error(&err);
    match err {
        StacoError::Usage(UsageError::MissingProjectName) => {
            reporter.info("Usage: staco rename <new-name>");
        }
        StacoError::Usage(UsageError::MissingKind | UsageError::UnknownKind(_)) => {
            reporter.info(format!("Available types: {}", Kind::available()));
        }
        _ => {}
    }

    Ok(())
}

fn arg_str<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(String::as_str)
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("staco")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Staco CLI - Development Tools")
        .allow_external_subcommands(true)
        .after_help(
            "Examples:\n  staco rename my-app\n  staco generate controller user\n  staco g v user\n  staco g comp card",
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Project root directory (defaults to the current directory)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print warnings and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("rename")
                .about("Rename the project")
                .arg(positional("name").value_name("NEW_NAME").help("New project name"))
                .arg(ignored_rest()),
        )
        .subcommand(
            Command::new("generate")
                .visible_alias("g")
                .about("Create a new controller, view or component")
                .arg(
                    positional("kind")
                        .value_name("KIND")
                        .help("controller (c), view (v) or component (comp)"),
                )
                .arg(positional("name").value_name("NAME").help("Name of the new file"))
                .arg(ignored_rest()),
        )
        .subcommand(
            Command::new("completions")
                .about("Print a shell completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// Positional token taken verbatim, even when it starts with `-`.
///
/// Flags are only recognized before the command name.
fn positional(id: &'static str) -> Arg {
    Arg::new(id).allow_hyphen_values(true)
}

/// Swallow surplus positional tokens
fn ignored_rest() -> Arg {
    positional("rest").num_args(1..).hide(true)
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    App::new().run()
}
