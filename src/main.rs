mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{CategoryCommands, Cli, Commands};
use taskboard::categories::CategoryStore;
use taskboard::config::Config;
use taskboard::filter::{FilterCriteria, SortKey};
use taskboard::form::{SubmitResult, SuggestOutcome, TaskForm};
use taskboard::http::HttpStore;
use taskboard::list::{DeleteOutcome, ListPhase, TaskListController};
use taskboard::model::{CategoryPayload, Priority, Task, TaskStatus};
use taskboard::session::Session;
use taskboard::store::TaskStore;

fn main() -> Result<()> {
    // Setup better panic handling
    better_panic::install();

    // Load config
    let config = Config::load()?;

    // Rotate log file before setting up logging (keeps it under 1000 lines)
    logging::rotate_log(&config);

    // Initialize file-based logging to ~/.taskboard/taskboard.log
    logging::setup_logging(&config)?;

    // Parse CLI
    let cli = Cli::parse();

    tracing::debug!(command = ?cli.command, "dispatching command");

    match cli.command {
        Commands::Login { username, password } => cmd_login(&config, &username, &password),
        Commands::Signup { username, password } => cmd_signup(&config, &username, &password),
        Commands::Logout => cmd_logout(&config),
        Commands::Whoami => cmd_whoami(&config),

        Commands::List {
            status,
            priority,
            category,
            search,
            ordering,
            page,
        } => cmd_list(&config, status, priority, category, search, ordering, page),

        Commands::New {
            title,
            description,
            status,
            priority,
            due,
            category,
            suggest,
        } => cmd_new(
            &config,
            title,
            description,
            status,
            priority,
            due,
            category,
            suggest,
        ),

        Commands::Edit {
            id,
            title,
            description,
            status,
            priority,
            due,
            category,
            suggest,
        } => cmd_edit(
            &config,
            id,
            title,
            description,
            status,
            priority,
            due,
            category,
            suggest,
        ),

        Commands::Delete { id, force } => cmd_delete(&config, id, force),

        Commands::Categories { command } => match command {
            CategoryCommands::List => cmd_categories_list(&config),
            CategoryCommands::New { name } => cmd_categories_new(&config, &name),
            CategoryCommands::Edit { id, name } => cmd_categories_edit(&config, id, &name),
            CategoryCommands::Delete { id, force } => cmd_categories_delete(&config, id, force),
        },

        Commands::Dashboard => cmd_dashboard(&config),

        Commands::Init { force } => {
            config.init_default_files(force)?;
            println!("taskboard initialized at {}", config.base_dir.display());
            Ok(())
        }
    }
}

/// Build the HTTP store with the stored session token (if any) injected.
fn open_store(config: &Config) -> HttpStore {
    let session = Session::load(config);
    HttpStore::new(config, session.as_ref())
}

fn confirm(prompt: &str) -> bool {
    use std::io::Write;
    print!("{} [y/N] ", prompt);
    let _ = std::io::stdout().flush();
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim(), "y" | "Y" | "yes")
}

fn cmd_login(config: &Config, username: &str, password: &str) -> Result<()> {
    let store = HttpStore::new(config, None);
    let token = store
        .login(username, password)
        .context("Login failed")?;
    Session::save(config, &token)?;
    println!("Logged in as '{}'", username);
    Ok(())
}

fn cmd_signup(config: &Config, username: &str, password: &str) -> Result<()> {
    let store = HttpStore::new(config, None);
    store.signup(username, password).context("Signup failed")?;
    println!("Account '{}' created. Run `taskboard login` to sign in.", username);
    Ok(())
}

fn cmd_logout(config: &Config) -> Result<()> {
    Session::clear(config)?;
    println!("Logged out.");
    Ok(())
}

fn cmd_whoami(config: &Config) -> Result<()> {
    let store = open_store(config);
    let profile = store.me().context("Failed to fetch user profile")?;
    match profile.email {
        Some(email) => println!("{} <{}>", profile.username, email),
        None => println!("{}", profile.username),
    }
    Ok(())
}

fn cmd_list(
    config: &Config,
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    category: Option<i64>,
    search: Option<String>,
    ordering: Option<SortKey>,
    page: u64,
) -> Result<()> {
    let store = open_store(config);

    let mut criteria = FilterCriteria {
        status,
        priority,
        category,
        search: None,
        ordering,
    };
    criteria.set_search(search.as_deref().unwrap_or(""));

    let mut controller = TaskListController::with_criteria(criteria, page);
    controller.refresh(&store);

    if controller.phase() == ListPhase::Error {
        println!("Failed to load tasks. See the log for details.");
        return Ok(());
    }

    print_tasks(&controller);
    Ok(())
}

fn print_tasks(controller: &TaskListController) {
    if controller.tasks().is_empty() {
        println!("No tasks found.");
    } else {
        println!(
            "{:<6} {:<32} {:<12} {:<8} {:<12} CATEGORY",
            "ID", "TITLE", "STATUS", "PRIORITY", "DUE"
        );
        for task in controller.tasks() {
            println!(
                "{:<6} {:<32} {:<12} {:<8} {:<12} {}",
                task.id,
                truncate(&task.title, 32),
                task.status,
                task.priority,
                date_part(task.due_date.as_deref()),
                task.category_details
                    .as_ref()
                    .map(|c| c.name.as_str())
                    .unwrap_or("-"),
            );
        }
    }
    println!();
    println!("Page {} of {}", controller.page(), controller.total_pages());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn date_part(due: Option<&str>) -> String {
    due.and_then(|d| d.split('T').next())
        .unwrap_or("-")
        .to_string()
}

#[allow(clippy::too_many_arguments)]
fn cmd_new(
    config: &Config,
    title: String,
    description: String,
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    due: Option<String>,
    category: Option<String>,
    suggest: bool,
) -> Result<()> {
    let store = open_store(config);

    let mut form = TaskForm::new();
    form.title = title;
    form.description = description;
    if let Some(status) = status {
        form.status = status;
    }
    if let Some(priority) = priority {
        form.priority = priority;
    }
    if let Some(due) = due {
        form.due_date = due;
    }
    if let Some(category) = category {
        form.category = category;
    }

    if suggest {
        apply_suggestion(&store, &mut form)?;
    }

    match form.submit(&store) {
        SubmitResult::Saved(task) => {
            println!("Created task {} '{}'", task.id, task.title);
            Ok(())
        }
        SubmitResult::Rejected { error, .. } => Err(error).context("Failed to create task"),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_edit(
    config: &Config,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    due: Option<String>,
    category: Option<String>,
    suggest: bool,
) -> Result<()> {
    let store = open_store(config);

    let task = find_task(&store, id)?
        .with_context(|| format!("Task {} not found", id))?;

    let mut form = TaskForm::edit(&task);
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(description) = description {
        form.description = description;
    }
    if let Some(status) = status {
        form.status = status;
    }
    if let Some(priority) = priority {
        form.priority = priority;
    }
    if let Some(due) = due {
        form.due_date = due;
    }
    if let Some(category) = category {
        form.category = category;
    }

    if suggest {
        apply_suggestion(&store, &mut form)?;
    }

    match form.submit(&store) {
        SubmitResult::Saved(task) => {
            println!("Updated task {} '{}'", task.id, task.title);
            Ok(())
        }
        SubmitResult::Rejected { error, .. } => Err(error).context("Failed to update task"),
    }
}

fn apply_suggestion(store: &HttpStore, form: &mut TaskForm) -> Result<()> {
    let categories = CategoryStore::load(store);
    match form.suggest_description(&categories, store) {
        SuggestOutcome::EmptyTitle => anyhow::bail!("Enter a task title before asking for a suggestion"),
        SuggestOutcome::Failed => {
            println!("Suggestion service unavailable, keeping the current description.");
            Ok(())
        }
        SuggestOutcome::Applied => {
            println!("Suggested description: {}", form.description);
            Ok(())
        }
    }
}

/// Find a task by id through the listing boundary, walking pages as needed.
fn find_task(store: &impl TaskStore, id: i64) -> Result<Option<Task>> {
    let criteria = FilterCriteria::default();
    let mut page = 1;
    loop {
        let result = store
            .list_tasks(&criteria, page)
            .context("Failed to load tasks")?;
        if let Some(task) = result.tasks.iter().find(|t| t.id == id) {
            return Ok(Some(task.clone()));
        }
        let total = result.total_pages.unwrap_or(1);
        if page >= total {
            return Ok(None);
        }
        page += 1;
    }
}

fn cmd_delete(config: &Config, id: i64, force: bool) -> Result<()> {
    let store = open_store(config);
    let mut controller = TaskListController::new();

    let outcome = controller
        .delete(&store, id, || {
            force || confirm("Are you sure you want to delete this task?")
        })
        .context("Failed to delete task")?;

    match outcome {
        DeleteOutcome::Deleted => println!("Deleted task {}", id),
        DeleteOutcome::Cancelled => println!("Cancelled."),
    }
    Ok(())
}

fn cmd_categories_list(config: &Config) -> Result<()> {
    let store = open_store(config);
    let categories = CategoryStore::load(&store);
    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }
    println!("{:<6} NAME", "ID");
    for category in categories.all() {
        println!("{:<6} {}", category.id, category.name);
    }
    Ok(())
}

fn cmd_categories_new(config: &Config, name: &str) -> Result<()> {
    let store = open_store(config);
    let payload = CategoryPayload {
        name: name.to_string(),
    };
    let category = store
        .create_category(&payload)
        .context("Failed to create category")?;
    println!("Created category {} '{}'", category.id, category.name);
    Ok(())
}

fn cmd_categories_edit(config: &Config, id: i64, name: &str) -> Result<()> {
    let store = open_store(config);
    let payload = CategoryPayload {
        name: name.to_string(),
    };
    let category = store
        .update_category(id, &payload)
        .context("Failed to update category")?;
    println!("Renamed category {} to '{}'", category.id, category.name);
    Ok(())
}

fn cmd_categories_delete(config: &Config, id: i64, force: bool) -> Result<()> {
    let store = open_store(config);
    if !force && !confirm("Are you sure? Tasks linked to this category keep working without it.") {
        println!("Cancelled.");
        return Ok(());
    }
    store
        .delete_category(id)
        .context("Failed to delete category")?;
    println!("Deleted category {}", id);
    Ok(())
}

fn cmd_dashboard(config: &Config) -> Result<()> {
    let store = open_store(config);
    let stats = store.dashboard().context("Failed to load dashboard")?;

    println!("Total tasks: {}", stats.total_tasks);
    println!();
    println!("By status:");
    println!("  todo         {}", stats.status_counts.todo);
    println!("  in-progress  {}", stats.status_counts.in_progress);
    println!("  done         {}", stats.status_counts.done);
    println!();
    println!("By priority:");
    println!("  low          {}", stats.priority_counts.low);
    println!("  medium       {}", stats.priority_counts.medium);
    println!("  high         {}", stats.priority_counts.high);
    Ok(())
}
