//! Interactive menu shell: the original console experience.
//!
//! One login session at a time. Mutations are saved back to the data
//! directory as they happen, and everything is saved again on exit, so a
//! killed session loses at most the prompt it was in the middle of.

mod admin;
mod prompt;
mod traveler;

use std::path::Path;

use owo_colors::OwoColorize;

use tripdesk_core::{DataStore, Role};

use crate::cli::GlobalOpts;
use crate::error::{CliError, from_core};

/// Print a recoverable error and keep the shell running.
fn notify_err(err: &CliError) {
    eprintln!("{}", err.to_string().red());
}

pub fn run(data_dir: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    let mut store = DataStore::load(data_dir).map_err(|e| from_core(e, data_dir))?;
    tracing::debug!(data_dir = %data_dir.display(), "interactive shell started");

    println!("{}", "Welcome to the tripdesk reservation desk".bold());
    loop {
        let choice = prompt::select(
            "Main menu",
            &[
                "Admin login",
                "Traveler login",
                "Register a new account",
                "Save and exit",
            ],
        )?;
        match choice {
            0 => login(&mut store, data_dir, global, Role::Admin)?,
            1 => login(&mut store, data_dir, global, Role::Traveler)?,
            2 => register(&mut store, data_dir)?,
            _ => {
                store.save(data_dir).map_err(|e| from_core(e, data_dir))?;
                println!("All records saved. Goodbye!");
                return Ok(());
            }
        }
    }
}

/// One login attempt followed by the role's menu loop. Bad credentials
/// drop back to the main menu instead of exiting.
fn login(
    store: &mut DataStore,
    data_dir: &Path,
    global: &GlobalOpts,
    role: Role,
) -> Result<(), CliError> {
    let username = prompt::input_text("Username")?;
    let password = prompt::password("Password")?;

    // Clone the username out so the session does not borrow the store.
    let session = store
        .login(&username, &password, role)
        .map(|user| user.username.clone());

    match session {
        Ok(username) => match role {
            Role::Admin => admin::menu(store, data_dir, global),
            Role::Traveler => traveler::menu(store, data_dir, &username),
        },
        Err(err) => {
            notify_err(&from_core(err, data_dir));
            Ok(())
        }
    }
}

/// Account creation, admin or traveler. The admin toggle at registration
/// mirrors the original desk: this is a trusted, single-operator tool.
fn register(store: &mut DataStore, data_dir: &Path) -> Result<(), CliError> {
    let username = prompt::input_text("Choose a username")?;
    let password = prompt::password("Choose a password")?;
    let role = if prompt::confirm("Is this an admin account?", false)? {
        Role::Admin
    } else {
        Role::Traveler
    };

    match store.register(&username, &password, role) {
        Ok(()) => {
            store.save(data_dir).map_err(|e| from_core(e, data_dir))?;
            println!("Account '{username}' registered as {role}.");
        }
        Err(err) => notify_err(&from_core(err, data_dir)),
    }
    Ok(())
}
