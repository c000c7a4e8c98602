use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use taskboard_client::{HttpTaskApi, TaskApi, TaskBoard, DEFAULT_API_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard task list client")]
struct Cli {
    /// Base URL of the taskboard API
    #[arg(long, env = "TASKBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tasks
    List,
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Task description
        description: String,
    },
    /// Replace a task's title and description
    Edit {
        /// Task identifier
        id: String,
        /// New title
        title: String,
        /// New description
        description: String,
    },
    /// Delete a task
    Delete {
        /// Task identifier
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("taskboard_client=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use 'taskboard --help' for commands");
        return Ok(());
    };

    let mut board = TaskBoard::new(HttpTaskApi::new(&cli.api_url)?);
    board.load().await;

    match command {
        Commands::List => {}
        Commands::Add { title, description } => {
            board.form.title = title;
            board.form.description = description;
            if !board.submit_create().await {
                println!("Title and description are both required.");
            }
        }
        Commands::Edit {
            id,
            title,
            description,
        } => {
            if !board.start_edit(&id) {
                println!("No task with ID {}", id);
            } else {
                if let Some(session) = board.edit_mut() {
                    session.title = title;
                    session.description = description;
                }
                if !board.submit_update().await {
                    println!("Title and description are both required.");
                }
            }
        }
        Commands::Delete { id, yes } => {
            board.delete(&id, || yes || confirm_delete()).await;
        }
    }

    render(&board);
    Ok(())
}

fn confirm_delete() -> bool {
    print!("Are you sure you want to delete this? [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn render<A: TaskApi>(board: &TaskBoard<A>) {
    if let Some(notice) = board.visible_notice(Instant::now()) {
        if notice.is_error() {
            eprintln!("{}", notice.text());
        } else {
            println!("{}", notice.text());
        }
    }

    if board.tasks().is_empty() {
        println!("No tasks found.");
        return;
    }
    for task in board.tasks() {
        println!(
            "ID: {}, Title: {}, Description: {}",
            task.id, task.title, task.description
        );
    }
}
