//! Taskpad - Main Entry Point
//!
//! Thin CLI over the `taskpad` library. The CLI plays the view layer's
//! role: it trims and validates input before calling into the store and
//! renders the refreshed list through a subscribed observer.

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use taskpad::{JsonFileStorage, Priority, Task, TaskStore, formatting, validation};

/// Taskpad - prioritized to-do list with local persistence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file
    #[arg(long, default_value = "tasks.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Priority: High, Medium or Low
        #[arg(long, default_value = "Medium")]
        priority: Priority,
    },
    /// Show all tasks
    List,
    /// Toggle completion for a task
    Toggle {
        /// Task id as shown by `list`
        id: String,
    },
    /// Remove a task
    Remove {
        /// Task id as shown by `list`
        id: String,
    },
    /// Check whether a task with the given title exists
    Exists {
        /// Title to look up (case-insensitive)
        title: String,
    },
}

fn render(tasks: &[Task]) {
    println!("{}", formatting::format_tasks(tasks));
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let storage = JsonFileStorage::new(&args.file);
    let mut store = TaskStore::open(storage)?;

    match args.command {
        Command::Add { title, priority } => {
            let title = validation::validate_new_title(&store, &title)?;
            store.subscribe(render);
            store.add_task(title, priority)?;
        }
        Command::List => {
            println!("{}\n", formatting::format_header(Local::now().date_naive()));
            println!("{}", formatting::format_tasks(&store.all_tasks()));
        }
        Command::Toggle { id } => {
            store.subscribe(render);
            store.toggle_completion(id.trim())?;
        }
        Command::Remove { id } => {
            store.subscribe(render);
            store.remove_task(id.trim())?;
        }
        Command::Exists { title } => {
            let found = store.task_exists(title.trim());
            println!("{}", if found { "yes" } else { "no" });
        }
    }

    Ok(())
}
