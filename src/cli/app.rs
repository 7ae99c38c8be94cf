//! Main CLI application

use crate::config::{parse_config_auto, parse_config_file, validate_config, Config};
use crate::error::{CompgenError, ConfigError};
use crate::generator::{generate, SpecifierSource};
use crate::ui::{Ui, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// CLI application
pub struct App {
    /// Loaded tables
    config: Config,
    /// Tables file path (`None` for the bundled tables)
    config_path: Option<PathBuf>,
}

impl App {
    /// Create a new app, discovering the tables file
    pub fn new() -> Result<Self, CompgenError> {
        let (config, config_path) = parse_config_auto()?;
        validate_config(&config)?;

        Ok(App {
            config,
            config_path,
        })
    }

    /// Create app with a specific tables file
    pub fn with_config_file(path: PathBuf) -> Result<Self, CompgenError> {
        let config = parse_config_file(&path)?;
        validate_config(&config)?;

        Ok(App {
            config,
            config_path: Some(path),
        })
    }

    /// Directory relative source paths are resolved against
    fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Pick the specifier source from the arguments and the tables
    fn specifier_source(&self, matches: &ArgMatches) -> Result<SpecifierSource, CompgenError> {
        let source = match matches.get_one::<String>("input") {
            Some(input) => SpecifierSource::from_input(input),
            None => {
                let source = self.config.source.as_ref().ok_or(ConfigError::NoSource)?;
                SpecifierSource::from_config(source, &self.base_dir())
            }
        };

        Ok(match matches.get_one::<String>("working-dir") {
            Some(dir) => source.with_working_dir(PathBuf::from(dir)),
            None => source,
        })
    }

    /// Run the application with parsed arguments
    pub fn run(self, matches: &ArgMatches) -> Result<(), CompgenError> {
        let ui = Ui::new(get_verbosity(matches));

        match &self.config_path {
            Some(path) => ui.debug(&format!("Using tables from {}", path.display())),
            None => ui.debug("Using built-in kdesrc-build tables"),
        }

        if matches.get_flag("print-config") {
            let yaml = serde_yaml::to_string(&self.config)?;
            io::stdout().write_all(yaml.as_bytes())?;
            return Ok(());
        }

        let source = self.specifier_source(matches)?;
        let origin = source.describe();
        ui.info(&format!("Reading option specifiers from {}", origin));

        let text = source.fetch(&ui)?;
        let script = generate(&text, &origin, &self.config, &ui)?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;

        Ok(())
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("zcompgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a zsh completion script from a build tool's option specifiers")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to zcompgen.yml tables file"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read specifiers from FILE ('-' for stdin) instead of running the program"),
        )
        .arg(
            Arg::new("working-dir")
                .short('C')
                .long("working-dir")
                .value_name("DIR")
                .help("Directory to run the program from"),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .help("Print the effective tables as YAML and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application with process arguments
pub fn run() -> Result<(), CompgenError> {
    let matches = build_command().get_matches();

    let app = match matches.get_one::<String>("file") {
        Some(path) => App::with_config_file(PathBuf::from(path))?,
        None => App::new()?,
    };

    app.run(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    fn app() -> App {
        App {
            config: default_config().unwrap(),
            config_path: Some(PathBuf::from("/etc/zcompgen/zcompgen.yml")),
        }
    }

    #[test]
    fn test_get_verbosity() {
        let matches = build_command().get_matches_from(vec!["zcompgen"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Normal);

        let matches = build_command().get_matches_from(vec!["zcompgen", "-q"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Quiet);

        let matches = build_command().get_matches_from(vec!["zcompgen", "--verbose"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = build_command().try_get_matches_from(vec!["zcompgen", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_source() {
        let matches = build_command().get_matches_from(vec!["zcompgen", "-i", "-"]);
        let source = app().specifier_source(&matches).unwrap();
        assert!(matches!(source, SpecifierSource::Stdin));
    }

    #[test]
    fn test_program_source_with_working_dir_override() {
        let matches = build_command().get_matches_from(vec!["zcompgen", "-C", "/tmp/kde"]);
        match app().specifier_source(&matches).unwrap() {
            SpecifierSource::Program {
                program,
                working_dir,
                ..
            } => {
                assert_eq!(program, "./kdesrc-build");
                assert_eq!(working_dir, Some(PathBuf::from("/tmp/kde")));
            }
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let mut app = app();
        app.config.source = None;
        let matches = build_command().get_matches_from(vec!["zcompgen"]);
        assert!(matches!(
            app.specifier_source(&matches),
            Err(CompgenError::Config(ConfigError::NoSource))
        ));
    }

    #[test]
    fn test_base_dir_from_config_path() {
        assert_eq!(app().base_dir(), PathBuf::from("/etc/zcompgen"));
    }
}
