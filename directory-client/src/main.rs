//! # Employee Directory Terminal Client
//!
//! Line-oriented front-end over the directory API.
//!
//! ## Commands
//!
//! - `list`: Show employees matching the current search
//! - `search <text>`: Set the search text (empty clears it)
//! - `add`: Create an employee
//! - `edit <id>`: Edit an employee
//! - `delete <id>`: Delete an employee after confirmation
//! - `quit`: Exit
//!
//! ## Usage
//!
//! ```bash
//! DIRECTORY_API_URL=http://localhost:5000 cargo run -p directory-client
//! ```
//!
//! Set `DIRECTORY_API_URL=local` to run against an in-memory directory.

use directory_client::app::DirectoryApp;
use directory_client::config::ClientConfig;
use directory_client::gateway::{EmployeeApi, HttpGateway, LocalGateway};
use directory_client::render;
use directory_client::views::Field;
use directory_shared::validation::parse_id;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the table
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()?;

    let api: Arc<dyn EmployeeApi> = if config.api_url == "local" {
        tracing::info!("Using in-memory directory");
        Arc::new(LocalGateway::new())
    } else {
        tracing::info!(url = %config.api_url, "Using directory API");
        Arc::new(HttpGateway::new(&config.api_url, config.request_timeout)?)
    };

    let mut app = DirectoryApp::new(api, config.search_debounce);
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Employee Directory v{}", env!("CARGO_PKG_VERSION"));
    println!("Commands: list, search <text>, add, edit <id>, delete <id>, quit");

    app.list.refresh().await;
    show_list(&app).await;

    loop {
        let Some(line) = prompt(&mut input, "> ").await? else {
            break;
        };

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "list" => {
                app.list.refresh().await;
                show_list(&app).await;
            }
            "search" => {
                let handle = app.list.set_search(argument).await;
                handle.await?;
                show_list(&app).await;
            }
            "add" => {
                app.open_create();
                edit_form(&mut app, &mut input).await?;
            }
            "edit" => match parse_id(argument) {
                Ok(id) => match app.open_edit(id).await {
                    Ok(_) => edit_form(&mut app, &mut input).await?,
                    Err(e) => app.notices.error(e.to_string()),
                },
                Err(e) => app.notices.error(e.message),
            },
            "delete" => match parse_id(argument) {
                Ok(id) => match app.request_delete(id).await {
                    Ok(employee) => {
                        let question = format!(
                            "Are you sure you want to delete {} <{}>? [y/N] ",
                            employee.name, employee.email
                        );
                        let answer = prompt(&mut input, &question).await?.unwrap_or_default();

                        if answer.trim().eq_ignore_ascii_case("y") {
                            if app.confirm_delete().await {
                                show_list(&app).await;
                            }
                        } else {
                            app.cancel_delete();
                        }
                    }
                    Err(e) => app.notices.error(e.to_string()),
                },
                Err(e) => app.notices.error(e.message),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command: {}", other),
        }

        show_notices(&app);
    }

    Ok(())
}

/// Prompts for each field until the form is saved or abandoned
///
/// An empty answer keeps the current value; `.` abandons the form.
async fn edit_form(app: &mut DirectoryApp, input: &mut Input) -> anyhow::Result<()> {
    loop {
        let Some(form) = app.form_mut() else {
            return Ok(());
        };

        for field in Field::ALL {
            let current = form.value(field).to_string();
            let question = match form.error(field) {
                Some(error) => format!("{} [{}] ({}): ", field.label(), current, error),
                None => format!("{} [{}]: ", field.label(), current),
            };

            let Some(answer) = prompt(input, &question).await? else {
                app.close_form();
                return Ok(());
            };

            match answer.trim() {
                "." => {
                    app.close_form();
                    println!("Cancelled");
                    return Ok(());
                }
                "" => {}
                value => form.set(field, value),
            }
        }

        if app.submit_form().await.is_some() {
            show_list(app).await;
            return Ok(());
        }

        if let Some(form) = app.form() {
            print!("{}", render::form(form));
        }
        show_notices(app);
    }
}

async fn prompt(input: &mut Input, question: &str) -> anyhow::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(question.as_bytes()).await?;
    stdout.flush().await?;

    Ok(input.next_line().await?)
}

async fn show_list(app: &DirectoryApp) {
    let state = app.list.snapshot().await;
    if !state.search.is_empty() {
        println!("Search: {}", state.search);
    }
    println!("{}", render::employee_table(&state.employees));
}

fn show_notices(app: &DirectoryApp) {
    for notice in app.notices.drain() {
        println!("{}", render::notice(&notice));
    }
}
