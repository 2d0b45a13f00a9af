use clap::{Parser, Subcommand};
use resub::error::ConfigError;
use resub::{resub, Config, ConfigStore, Rule, RuleEntry, Verbosity, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use std::process::ExitCode;

/// Recursive regex substitution over directory trees.
#[derive(Parser)]
#[command(name = "resub", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a source tree and write substituted copies to an output tree
    Run {
        /// The source directory to walk
        source: PathBuf,
        /// The root of the mirrored output tree
        output: PathBuf,
        /// Path to the JSON config holding the substitution queue
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Filename suffix to process, with leading dot (repeatable)
        #[arg(long = "ext", value_name = "SUFFIX", default_value = ".py")]
        extensions: Vec<String>,
        /// Suppress status output
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,
        /// Print per-path status lines
        #[arg(short, long)]
        verbose: bool,
    },
    /// Inspect or edit the stored substitution queue
    #[command(subcommand)]
    Rules(RulesCommand),
}

#[derive(Subcommand)]
enum RulesCommand {
    /// Print the substitution queue
    Show {
        /// Path to the JSON config holding the substitution queue
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Append a rule to the substitution queue
    Add {
        /// The regex pattern to match
        pattern: String,
        /// The replacement text (capture groups as $1, $name)
        replacement: String,
        /// Path to the JSON config holding the substitution queue
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            source,
            output,
            config,
            extensions,
            quiet,
            verbose,
        } => {
            let store = ConfigStore::new(config);
            let rules = match store.read_rules() {
                Ok(rules) => rules,
                Err(e) => {
                    eprintln!("{:?}", e);
                    return ExitCode::FAILURE;
                }
            };
            let verbosity = if quiet {
                Verbosity::Quiet
            } else if verbose {
                Verbosity::Verbose
            } else {
                Verbosity::Normal
            };
            let cfg = Config {
                source_dir: source,
                output_dir: output,
                rules,
                extensions,
                verbosity,
            };
            match resub(cfg) {
                Ok(_) => ExitCode::SUCCESS,
                Err(()) => ExitCode::FAILURE,
            }
        }
        Command::Rules(RulesCommand::Show { config }) => {
            let store = ConfigStore::new(config);
            match store.read_rules() {
                Ok(entries) => {
                    for entry in &entries {
                        match RuleEntry::from(entry) {
                            RuleEntry::Valid(rule) => {
                                println!("{} -> {}", rule.pattern, rule.replacement)
                            }
                            RuleEntry::Rejected(raw) => println!("(invalid) {raw}"),
                        }
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{:?}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Rules(RulesCommand::Add {
            pattern,
            replacement,
            config,
        }) => {
            let store = ConfigStore::new(config);
            // an existing config without the queue key starts an empty queue;
            // a missing config file is still an error
            let entries = match store.read_rules() {
                Ok(entries) => Ok(entries),
                Err(e) => match e.current_context() {
                    ConfigError::MissingKey(_) => Ok(vec![]),
                    _ => Err(e),
                },
            };
            let result = entries.and_then(|mut entries| {
                entries.push(Rule::new(pattern, replacement).to_value());
                store.write_rules(&entries)
            });
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{:?}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
