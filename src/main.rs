//! # go-painless CLI Entry Point
//!
//! Parses arguments with clap and routes each command to the library.
//! Anything that is not a go-painless command is handed to `go` unchanged.
//!
//! ## Command Structure
//!
//! - **Project**: `init`, `clear`, `tidy`, `publish`
//! - **Dependencies**: `add`, `remove`, `restore`, `list`
//! - **Tool**: `setup`, `cache`, `completion`

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;

use painless::deps::{self, AddOptions, cache, git::Git2Vcs};
use painless::layout::Layout;
use painless::process::SystemRunner;
use painless::project::Context;
use painless::setup::{self, SetupOutcome};
use painless::ui;

#[derive(Parser)]
#[command(name = "go-painless")]
#[command(about = "Private dependencies for Go modules", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(allow_external_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize package.json and go.mod in the current directory
    Init {
        /// Project (and Go module) name
        name: String,
        /// Project version
        #[arg(long, default_value = "1.0.0")]
        pkg_version: String,
    },
    /// Add a dependency
    Add {
        /// Module path, or repository URL for private dependencies
        uri: String,
        /// Dependency name (defaults to the last path segment of the URI)
        #[arg(short, long)]
        name: Option<String>,
        /// Clone from a private repository instead of `go get`
        #[arg(long)]
        private: bool,
        /// Restore the cloned dependency's own dependencies
        #[arg(long)]
        recursive: bool,
        /// Re-clone a previously downloaded dependency
        #[arg(long)]
        update: bool,
    },
    /// Remove a dependency
    Remove {
        /// Dependency name
        name: String,
    },
    /// Restore all dependencies of an existing project
    Restore {
        /// Run `go mod tidy` after restoring
        #[arg(long)]
        tidy: bool,
        /// Re-clone previously downloaded dependencies
        #[arg(long)]
        update: bool,
    },
    /// List declared dependencies
    List,
    /// Remove go.mod and go.sum
    Clear,
    /// Run `go mod tidy` for the project
    Tidy,
    /// Build the project for a target platform
    Publish {
        /// Target OS (GOOS)
        #[arg(long = "os")]
        goos: String,
        /// Target architecture (GOARCH)
        #[arg(long = "arch")]
        goarch: String,
        /// Output path
        #[arg(short, long)]
        output: String,
        /// Package to build
        #[arg(short, long, default_value = ".")]
        target: String,
    },
    /// Install this binary under ~/go-painless/bin
    Setup,
    /// Manage the private package cache
    Cache {
        #[command(subcommand)]
        op: CacheOp,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
    /// Forwarded to `go`
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Subcommand)]
enum CacheOp {
    /// Print the cache directory
    Path,
    /// List cached packages
    Ls,
    /// Delete every cached package
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = Layout::from_home()?;
    let runner = SystemRunner;
    let vcs = Git2Vcs;
    let ctx = Context {
        project_dir: std::env::current_dir().context("Could not read current directory")?,
        self_exe: layout.self_exe()?,
        layout,
        runner: &runner,
        vcs: &vcs,
    };

    match cli.command {
        Some(Commands::Init { name, pkg_version }) => {
            let manifest = ctx.init(&name, &pkg_version)?;
            println!(
                "{} Initialized {} v{}",
                "✓".green(),
                manifest.name.bold(),
                manifest.version
            );
            Ok(())
        }

        Some(Commands::Add {
            uri,
            name,
            private,
            recursive,
            update,
        }) => {
            let name = match name.or_else(|| deps::derive_name(&uri)) {
                Some(name) => name,
                None => anyhow::bail!("Could not derive a name from '{}', pass --name", uri),
            };
            let mut manifest = ctx.load()?;
            println!("{} Adding dependency: {}...", "📦".blue(), name.bold());
            if private {
                deps::add_private(&ctx, &mut manifest, &name, &uri, AddOptions { recursive, update })?;
            } else {
                deps::add_public(&ctx, &mut manifest, &name, &uri)?;
            }
            ctx.flush(&manifest)?;
            println!("{} Added {} to package.json", "✓".green(), name);
            Ok(())
        }

        Some(Commands::Remove { name }) => {
            let mut manifest = ctx.load()?;
            if deps::remove(&mut manifest, &name) {
                println!("{} Removed dependency: {}", "🗑️".red(), name.bold());
            } else {
                println!("{} Dependency '{}' not found in package.json", "!".yellow(), name);
            }
            ctx.flush(&manifest)?;
            Ok(())
        }

        Some(Commands::Restore { tidy, update }) => {
            let manifest = ctx.load()?;
            ctx.clear_build_files()?;
            println!(
                "{} Restoring {} dependencies...",
                "📦".blue(),
                manifest.dependencies.len()
            );
            let summary = deps::restore(&ctx, &manifest, update)?;
            ctx.flush(&manifest)?;
            if tidy {
                ctx.go().tidy(&ctx.project_dir)?;
            }
            println!(
                "{} Restored ({} cloned, {} cached, {} public)",
                "✓".green(),
                summary.cloned.len(),
                summary.cached.len(),
                summary.public.len()
            );
            Ok(())
        }

        Some(Commands::List) => list_dependencies(&ctx),

        Some(Commands::Clear) => {
            let removed = ctx.clear_build_files()?;
            if removed.is_empty() {
                println!("{} Nothing to clear", "!".yellow());
            } else {
                println!("{} Removed {}", "✓".green(), removed.join(", "));
            }
            Ok(())
        }

        Some(Commands::Tidy) => Ok(ctx.go().tidy(&ctx.project_dir)?),

        Some(Commands::Publish {
            goos,
            goarch,
            output,
            target,
        }) => {
            ctx.go().build(&ctx.project_dir, &goos, &goarch, &output, &target)?;
            println!("{} Built {} ({}/{})", "✓".green(), output.bold(), goos, goarch);
            Ok(())
        }

        Some(Commands::Setup) => {
            let exe = std::env::current_exe().context("Could not locate running executable")?;
            match setup::install(&ctx.layout, &exe)? {
                SetupOutcome::Installed => println!(
                    "{} go-painless installed to {}",
                    "✓".green(),
                    ctx.layout.installed_binary().display()
                ),
                SetupOutcome::AlreadyInstalled => println!(
                    "{} This version of go-painless has already been set up",
                    "✓".green()
                ),
            }
            Ok(())
        }

        Some(Commands::Cache { op }) => match op {
            CacheOp::Path => {
                println!("{}", ctx.layout.packages_dir().display());
                Ok(())
            }
            CacheOp::Ls => {
                let names = cache::list(&ctx.layout)?;
                if names.is_empty() {
                    println!("{} Cache is empty.", "ℹ".blue());
                } else {
                    let mut table = ui::Table::new(&["Cached Package"]);
                    for name in names {
                        table.add_row(vec![name]);
                    }
                    table.print();
                }
                Ok(())
            }
            CacheOp::Clean => {
                if cache::clean(&ctx.layout)? {
                    println!("{} Cache cleaned.", "✓".green());
                } else {
                    println!("{} Cache already empty.", "✓".green());
                }
                Ok(())
            }
        },

        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }

        Some(Commands::External(args)) => Ok(ctx.go().passthrough(&ctx.project_dir, &args)?),

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn list_dependencies(ctx: &Context) -> Result<()> {
    let manifest = ctx.load()?;
    println!("{} v{}", manifest.name.bold().cyan(), manifest.version);
    if manifest.dependencies.is_empty() {
        println!("└── (no dependencies)");
        return Ok(());
    }

    let mut table = ui::Table::new(&["Name", "Uri", "Kind", "Cached"]);
    for (name, dep) in &manifest.dependencies {
        let (kind, cached) = if dep.private {
            let cached = cache::is_cached(&ctx.layout, name);
            (
                "private".yellow().to_string(),
                if cached { "yes".green().to_string() } else { "no".red().to_string() },
            )
        } else {
            ("public".cyan().to_string(), "-".dimmed().to_string())
        };
        table.add_row(vec![name.bold().to_string(), dep.uri.clone(), kind, cached]);
    }
    table.print();
    Ok(())
}
