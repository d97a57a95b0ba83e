use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wit::Repository;
use wit::artifacts::core::{PagerWriter, should_page};
use wit::artifacts::log::commit_log::{LogEntry, LogFormat};

const LOG_FILTER_ENV: &str = "WIT_LOG";

#[derive(Parser)]
#[command(
    name = "wit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small local version control system",
    long_about = "wit snapshots a working directory into commits, keeps a staging area \
    between snapshots and can restore the working directory to any earlier commit.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .wit control directory in the current directory \
        or at the specified path, together with an empty .witignore file."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage a file or directory",
        long_about = "This command copies a file, or a whole directory, into the staging area. \
        Paths matching a rule in .witignore are skipped."
    )]
    Add {
        #[arg(index = 1, help = "The file or directory to stage")]
        path: PathBuf,
    },
    #[command(
        name = "ignore",
        about = "Add a pattern to .witignore",
        long_about = "This command appends a glob pattern to the .witignore file. \
        Matching paths are excluded from add and status."
    )]
    Ignore {
        #[arg(index = 1, help = "The glob pattern to ignore")]
        pattern: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staging area",
        long_about = "This command records the staged files as a new commit with the specified message, \
        moves HEAD to it and clears the staging area."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working directory status",
        long_about = "This command lists staged changes, unstaged changes and untracked files."
    )]
    Status {
        #[arg(long, help = "Give the output in a stable, short format")]
        porcelain: bool,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists every commit, newest first, marking the one HEAD points to."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "checkout",
        about = "Restore the working directory to a commit",
        long_about = "This command replaces every tracked file in the working directory with the \
        files of the given commit. It refuses to run while changes are staged."
    )]
    Checkout {
        #[arg(index = 1, help = "The id of the commit to check out")]
        commit_id: String,
    },
}

fn main() {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(|path| pwd.join(path)).unwrap_or_else(|| pwd.clone());
            std::fs::create_dir_all(&path)?;

            let repository = Repository::open(&path)?;
            println!("{}", repository.init()?);
        }
        Commands::Add { path } => {
            let repository = Repository::open(&pwd)?;
            let path = repository.relative_path(&current_dir(&pwd)?, &path)?;

            println!("{}", repository.add(&path)?);
        }
        Commands::Ignore { pattern } => {
            let repository = Repository::open(&pwd)?;
            println!("{}", repository.ignore(&pattern)?);
        }
        Commands::Commit { message } => {
            let repository = Repository::open(&pwd)?;
            println!("{}", repository.commit(&message)?);
        }
        Commands::Status { porcelain } => {
            let repository = Repository::open(&pwd)?;
            let status = repository.status_info()?;

            if porcelain {
                print!("{}", status.porcelain());
            } else {
                print!("{status}");
            }
        }
        Commands::Log { oneline } => {
            let repository = Repository::open(&pwd)?;
            let format = if oneline {
                LogFormat::OneLine
            } else {
                LogFormat::Medium
            };

            print_log(&repository, format)?;
        }
        Commands::Checkout { commit_id } => {
            let repository = Repository::open(&pwd)?;
            println!("{}", repository.checkout(&commit_id)?);
        }
    }

    Ok(())
}

fn print_log(repository: &Repository, format: LogFormat) -> Result<()> {
    let entries = repository.log()?;

    if !should_page() {
        let mut stdout = std::io::stdout().lock();
        write_log(&mut stdout, &entries, format)?;
        return Ok(());
    }

    let pager = Pager::new();
    let mut writer = PagerWriter::new(pager.clone());
    write_log(&mut writer, &entries, format)?;
    minus::page_all(pager)?;

    Ok(())
}

fn write_log(
    writer: &mut dyn Write,
    entries: &[LogEntry],
    format: LogFormat,
) -> Result<()> {
    if entries.is_empty() {
        writeln!(writer, "No commits yet.")?;
        return Ok(());
    }

    for entry in entries {
        write!(writer, "{}", entry.render(format))?;
        if format == LogFormat::Medium {
            writeln!(writer)?;
        }
    }

    Ok(())
}

// the repository root is canonical, so compare against a canonical cwd too
fn current_dir(pwd: &Path) -> Result<PathBuf> {
    Ok(pwd.canonicalize()?)
}
