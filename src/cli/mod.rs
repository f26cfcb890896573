// CLI module for operations run against the database directly

pub mod admin;
pub mod migrate;

use clap::{Parser, Subcommand};

/// Workplace inventory backend
#[derive(Parser)]
#[command(name = "workplace-inventory")]
#[command(about = "Inventory backend for workstations, software and maintenance", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server
    Serve,

    /// Run pending database migrations and exit
    Migrate,

    /// Create an admin account with a generated password
    CreateAdmin {
        #[arg(long)]
        username: String,

        #[arg(long, default_value = "")]
        full_name: String,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["workplace-inventory"]).expect("parse failed");

        assert_eq!(cli.command(), Commands::Serve);
    }

    #[test]
    fn test_create_admin_arguments() {
        let cli = Cli::try_parse_from([
            "workplace-inventory",
            "create-admin",
            "--username",
            "root",
            "--full-name",
            "System Administrator",
        ])
        .expect("parse failed");

        assert_eq!(
            cli.command(),
            Commands::CreateAdmin {
                username: "root".to_string(),
                full_name: "System Administrator".to_string(),
            }
        );
    }

    #[test]
    fn test_create_admin_requires_username() {
        assert!(Cli::try_parse_from(["workplace-inventory", "create-admin"]).is_err());
    }
}
