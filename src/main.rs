use anyhow::Result;
use clap::{Parser, Subcommand};
use hunter::areas::repository::Repository;
use hunter::commands::plumbing::cat_file::CatFileMode;
use hunter::commands::porcelain::log::LogOptions;
use hunter::commands::porcelain::status::StatusFormat;
use hunter::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hunter",
    version = "0.1.0",
    about = "A minimal local version control system",
    long_about = "Hunter tracks file snapshots in a local .hunter directory: \
    content-addressed blobs, a staging area and a linear chain of commits.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
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
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        Running it on an existing repository is safe."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add files to the staging area",
        long_about = "This command stores the content of the given files and stages them for the next commit. \
        Directories are expanded to every file beneath them."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staging area as a new commit and clears it."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged changes, unstaged changes and untracked files."
    )]
    Status {
        #[arg(long, help = "Give the output in a stable, easy-to-parse format")]
        porcelain: bool,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists commits from HEAD back to the root commit."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content or type of an object",
        long_about = "This command prints a stored blob or commit. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', conflicts_with = "show_type", help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short = 't', help = "Show the object type")]
        show_type: bool,
        #[arg(index = 1, help = "The object SHA")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command computes the blob id of a file and can store the blob. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from_env();
    config.init_logging();
    config.apply_color();

    let pwd = std::env::current_dir()?;
    let open = |config: Config| -> Result<Repository> {
        Ok(Repository::discover(&pwd, Box::new(std::io::stdout()))?.with_config(config))
    };

    match &cli.command {
        Commands::Init { path } => {
            let path = path.clone().unwrap_or_else(|| pwd.clone());
            let repository =
                Repository::new(&path, Box::new(std::io::stdout()))?.with_config(config);

            repository.init()?
        }
        Commands::Add { paths } => {
            open(config)?.add(paths)?;
        }
        Commands::Commit { message } => {
            open(config)?.commit(message)?;
        }
        Commands::Status { porcelain } => {
            let format = if *porcelain {
                StatusFormat::Porcelain
            } else {
                StatusFormat::Long
            };
            open(config)?.status(format)?;
        }
        Commands::Log { oneline } => open(config)?.log(&LogOptions { oneline: *oneline })?,
        Commands::CatFile {
            pretty: _,
            show_type,
            sha,
        } => {
            let mode = if *show_type {
                CatFileMode::Type
            } else {
                CatFileMode::Pretty
            };
            open(config)?.cat_file(sha, mode)?
        }
        Commands::HashObject { write, file } => {
            open(config)?.hash_object(file, *write)?;
        }
    }

    Ok(())
}
