// src/bin/secret_vault.rs
//! Interactive password vault: add / get / exit menu

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rpassword::read_password;
use secret_vault::{load_config, validate, CoreError, PasswordRule, PlainSecret, SecretManager};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = load_config().context("Failed to load configuration")?;
    let max_attempts = config.cli.max_attempts.max(1);
    info!(
        key_file = %config.paths.key_file.display(),
        secrets_db = %config.paths.secrets_db.display(),
        "starting password vault"
    );

    let manager = SecretManager::open(&config).with_context(|| {
        format!(
            "Failed to open secrets database {}",
            config.paths.secrets_db.display()
        )
    })?;

    loop {
        println!("\n=== Password Manager ===");
        println!("1. Add password");
        println!("2. Get password");
        println!("3. Exit");

        let Some(choice) = prompt_line("\nEnter choice (1-3): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                print_requirements();
                let Some(service) = prompt_line("Enter service name (e.g., gmail.com): ")? else {
                    break;
                };
                add_password(&manager, &service, max_attempts)?;
            }
            "2" => {
                let Some(service) = prompt_line("Enter service name (e.g., gmail.com): ")? else {
                    break;
                };
                get_password(&manager, &service);
            }
            "3" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_requirements() {
    let rules: Vec<String> = PasswordRule::ALL
        .iter()
        .map(|rule| rule.description().to_lowercase())
        .collect();
    println!("Password requirements: {}", rules.join(", "));
}

/// Read one line from stdin; `None` on EOF. Only the line terminator is stripped.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_owned()))
}

fn prompt_secret(prompt: &str) -> Result<PlainSecret> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(PlainSecret::new(read_password()?))
}

fn add_password(manager: &SecretManager, service: &str, max_attempts: u32) -> Result<()> {
    for attempt in 1..=max_attempts {
        let password = prompt_secret("Enter password: ")?;

        if let Err(err) = validate(password.expose_secret()) {
            println!("\nPassword does not meet requirements:");
            for rule in err.failed_rules() {
                println!("- {rule}");
            }
            if attempt < max_attempts {
                println!("\nAttempt {attempt}/{max_attempts}. Please try again.");
            } else {
                println!("\nFailed after {max_attempts} attempts. Password not saved.");
            }
            continue;
        }

        if !confirm_password(&password, max_attempts)? {
            return Ok(());
        }

        match manager.add_secret(service, password.expose_secret()) {
            Ok(()) => println!("Password for {service} saved successfully"),
            Err(CoreError::DuplicateService { .. }) => {
                println!("Password for {service} already exists.")
            }
            Err(err) => {
                warn!(error = %err, "saving password failed");
                println!("Error saving password: {err}");
            }
        }
        return Ok(());
    }
    Ok(())
}

fn confirm_password(password: &PlainSecret, max_attempts: u32) -> Result<bool> {
    for attempt in 1..=max_attempts {
        let confirm = prompt_secret("Confirm password: ")?;
        if confirm.expose_secret() == password.expose_secret() {
            return Ok(true);
        }
        println!("Passwords don't match.");
        if attempt < max_attempts {
            println!("\nAttempt {attempt}/{max_attempts}. Please try again.");
        } else {
            println!("\nFailed after {max_attempts} attempts. Password not saved.");
        }
    }
    Ok(false)
}

fn get_password(manager: &SecretManager, service: &str) {
    match manager.get_secret(service) {
        Ok(secret) => {
            println!("\nService: {service}");
            println!("Password: {}", secret.expose_secret());
        }
        Err(CoreError::NotFound { .. }) => println!("No password found for {service}"),
        Err(err) => {
            warn!(error = %err, "retrieving password failed");
            println!("Error retrieving password: {err}");
        }
    }
}
