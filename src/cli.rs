use clap::{Parser, Subcommand};

use taskboard::filter::SortKey;
use taskboard::model::{Priority, TaskStatus};

#[derive(Debug, Parser)]
#[command(name = "taskboard")]
#[command(about = "TaskBoard - Manage tasks in a remote task store from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the access token
    Login {
        username: String,
        password: String,
    },

    /// Register a new account
    Signup {
        username: String,
        password: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List tasks with optional filters
    List {
        /// Filter by status (todo, in-progress, done)
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Filter by priority (low, medium, high)
        #[arg(long)]
        priority: Option<Priority>,
        /// Filter by category id
        #[arg(long)]
        category: Option<i64>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        /// Sort key (-created_at, created_at, -priority, priority, due_date, -due_date)
        #[arg(long)]
        ordering: Option<SortKey>,
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,
    },

    /// Create a new task
    New {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Status (default: todo)
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Priority (default: medium)
        #[arg(long)]
        priority: Option<Priority>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Category id
        #[arg(long)]
        category: Option<String>,
        /// Ask the advice service to write the description from the title
        #[arg(long)]
        suggest: bool,
    },

    /// Edit an existing task (unset flags keep the current value)
    Edit {
        /// Task id
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        /// Due date (YYYY-MM-DD, empty string clears it)
        #[arg(long)]
        due: Option<String>,
        /// Category id (empty string clears it)
        #[arg(long)]
        category: Option<String>,
        /// Replace the description with a suggestion from the advice service
        #[arg(long)]
        suggest: bool,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Show task counts by status and priority
    Dashboard,

    /// Initialize taskboard (creates config directory and default config)
    Init {
        /// Overwrite an existing config.toml
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,
    /// Create a category
    New { name: String },
    /// Rename a category
    Edit { id: i64, name: String },
    /// Delete a category
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
