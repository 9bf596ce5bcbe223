//! CLI entry point for stack-kit.
//!
//! Every command goes through the [`Client`] facade; the binary never
//! reads or writes the persisted settings files itself.

use clap::{Parser, Subcommand};
use colored::Colorize;
use sk_core::client::Client;
use sk_core::init::InitError;
use sk_core::resolver::ResolveError;
use sk_protocol::Scope;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stack")]
#[command(version, about = "Manage the active stack and project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a directory as a stack-kit repository root
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<PathBuf>,

        /// Reinitialize even if the directory is already a repository
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved active configuration
    Status,

    /// Set the active stack
    Set {
        /// Name of the stack to activate
        name: String,

        /// Change the machine-wide default instead of this repository
        #[arg(long)]
        global: bool,
    },

    /// Clear the repository-local stack override
    Unset,

    /// Manage the active project
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ProjectCommands {
    /// Set the active project
    Set {
        /// Name of the project to activate
        name: String,

        /// Change the machine-wide default instead of this repository
        #[arg(long)]
        global: bool,
    },

    /// Clear the active project
    Unset {
        /// Clear the machine-wide default instead of this repository
        #[arg(long)]
        global: bool,
    },
}

fn scope_for(global: bool) -> Scope {
    if global {
        Scope::Global
    } else {
        Scope::Local
    }
}

fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Local => "this repository",
        Scope::Global => "the global default",
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::new()?;
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path, force } => {
            let target = path.unwrap_or_else(|| cwd.clone());
            match client.init_repository(&target, force).await {
                Ok(()) => {
                    println!(
                        "{} Initialized stack-kit repository at {}",
                        "✓".green(),
                        target.display()
                    );
                }
                Err(InitError::AlreadyInitialized(dir)) => {
                    eprintln!(
                        "{} {} is already a stack-kit repository (use --force to reinitialize)",
                        "!".yellow(),
                        dir.display()
                    );
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Status => {
            let config = client.active_config(&cwd).await?;
            println!("{} {}", "Active stack:".bold(), config.stack_name.green());
            match &config.project_name {
                Some(project) => {
                    println!("{} {}", "Active project:".bold(), project.green());
                }
                None => println!("{} {}", "Active project:".bold(), "none".dimmed()),
            }
            match &config.repository_root {
                Some(root) => {
                    println!(
                        "{} {}",
                        "Repository root:".bold(),
                        root.display().to_string().cyan()
                    );
                }
                None => println!("{} {}", "Repository root:".bold(), "none".dimmed()),
            }
            println!(
                "{} {}",
                "Global settings:".bold(),
                client.resolver().global_store().path().display()
            );
        }

        Commands::Set { name, global } => {
            let scope = scope_for(global);
            match client.set_active_stack(&cwd, &name, scope).await {
                Ok(()) => {
                    println!(
                        "{} Active stack for {} is now {}",
                        "✓".green(),
                        scope_label(scope),
                        name.green()
                    );
                }
                Err(ResolveError::NoRepositoryRoot(_)) => {
                    eprintln!(
                        "{} No stack-kit repository found here. Run {} first, or pass {} \
                         to change the machine-wide default.",
                        "✗".red(),
                        "stack init".bold(),
                        "--global".bold()
                    );
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Unset => match client.clear_active_stack(&cwd).await {
            Ok(()) => {
                println!(
                    "{} Stack override cleared; this repository now follows the global default",
                    "✓".green()
                );
            }
            Err(ResolveError::NoRepositoryRoot(_)) => {
                eprintln!("{} No stack-kit repository found here.", "✗".red());
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },

        Commands::Project { command } => match command {
            ProjectCommands::Set { name, global } => {
                let scope = scope_for(global);
                match client.set_active_project(&cwd, &name, scope).await {
                    Ok(()) => {
                        println!(
                            "{} Active project for {} is now {}",
                            "✓".green(),
                            scope_label(scope),
                            name.green()
                        );
                    }
                    Err(ResolveError::NoRepositoryRoot(_)) => {
                        eprintln!(
                            "{} No stack-kit repository found here. Run {} first, or pass {}.",
                            "✗".red(),
                            "stack init".bold(),
                            "--global".bold()
                        );
                        std::process::exit(1);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            ProjectCommands::Unset { global } => {
                let scope = scope_for(global);
                match client.clear_active_project(&cwd, scope).await {
                    Ok(()) => {
                        println!("{} Project cleared for {}", "✓".green(), scope_label(scope));
                    }
                    Err(ResolveError::NoRepositoryRoot(_)) => {
                        eprintln!("{} No stack-kit repository found here.", "✗".red());
                        std::process::exit(1);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        },
    }

    Ok(())
}
