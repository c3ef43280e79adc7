//! taskopt CLI - Command line interface for the taskopt server.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taskopt_core::Task;

mod client;
mod error;

use client::HttpClient;
use error::ClientError;

/// taskopt CLI - submit tasks and run the profit optimization
#[derive(Parser)]
#[command(name = "taskopt")]
#[command(about = "CLI for the taskopt server", long_about = None)]
struct Cli {
    /// Server address
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pending tasks
    #[command(name = "list-tasks")]
    ListTasks,

    /// Add a single task
    #[command(name = "add-task")]
    AddTask {
        /// Task name
        #[arg(short, long)]
        name: String,

        /// Resource the task needs (repeatable)
        #[arg(short, long = "resource")]
        resources: Vec<String>,

        /// Profit earned by running the task
        #[arg(short, long, allow_negative_numbers = true)]
        profit: f64,
    },

    /// Add tasks from a JSON file holding an array of tasks
    #[command(name = "add-tasks")]
    AddTasks {
        /// Path to the JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Remove and print the most profitable set of compatible tasks
    Execute,

    /// Check server health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = HttpClient::new(&cli.addr);

    match cli.command {
        Commands::ListTasks => {
            list_tasks(&client).await?;
        }
        Commands::AddTask {
            name,
            resources,
            profit,
        } => {
            let task = Task::new(name, resources, profit)
                .map_err(|e| ClientError::Input(e.to_string()))?;
            add_tasks(&client, vec![task]).await?;
        }
        Commands::AddTasks { file } => {
            let tasks = read_tasks(&file)?;
            add_tasks(&client, tasks).await?;
        }
        Commands::Execute => {
            execute(&client).await?;
        }
        Commands::Health => {
            let healthy = client.health().await?;
            println!("{}", if healthy { "ok" } else { "unhealthy" });
        }
    }

    Ok(())
}

fn read_tasks(path: &Path) -> Result<Vec<Task>, ClientError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ClientError::Input(format!("cannot read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&content)?)
}

async fn list_tasks(client: &HttpClient) -> Result<(), ClientError> {
    let tasks = client.list_tasks().await?;

    println!("Tasks ({}):", tasks.len());
    print_tasks(&tasks);

    Ok(())
}

async fn add_tasks(client: &HttpClient, tasks: Vec<Task>) -> Result<(), ClientError> {
    let response = client.add_tasks(&tasks).await?;
    println!(
        "Added {} task(s), {} pending",
        response.added, response.pool_size
    );
    Ok(())
}

async fn execute(client: &HttpClient) -> Result<(), ClientError> {
    let tasks = client.execute().await?;
    let profit: f64 = tasks.iter().map(|t| t.profit).sum();

    println!("Selected {} task(s), total profit {}:", tasks.len(), profit);
    print_tasks(&tasks);

    Ok(())
}

fn print_tasks(tasks: &[Task]) {
    println!("{:<24}  {:>12}  {}", "NAME", "PROFIT", "RESOURCES");
    println!("{}", "-".repeat(72));

    for task in tasks {
        let mut resources = task.resources.to_vec();
        resources.sort();
        println!(
            "{:<24}  {:>12}  {}",
            task.name,
            task.profit,
            resources.join(", ")
        );
    }
}
