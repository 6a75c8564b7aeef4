//! Referral Rewards CLI
//!
//! Command-line interface for the Referral Rewards service.

mod client;
mod commands;
mod style;
mod wizard;

use clap::{Parser, Subcommand};
use style::*;

const BANNER: &str = r#"
  ██████╗ ███████╗███████╗███████╗██████╗ ██████╗  █████╗ ██╗
  ██╔══██╗██╔════╝██╔════╝██╔════╝██╔══██╗██╔══██╗██╔══██╗██║
  ██████╔╝█████╗  █████╗  █████╗  ██████╔╝██████╔╝███████║██║
  ██╔══██╗██╔══╝  ██╔══╝  ██╔══╝  ██╔══██╗██╔══██╗██╔══██║██║
  ██║  ██║███████╗██║     ███████╗██║  ██║██║  ██║██║  ██║███████╗
  ╚═╝  ╚═╝╚══════╝╚═╝     ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝
"#;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "referral")]
#[command(version)]
#[command(about = "Referral Rewards - Share your code, climb the leaderboard", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// API base URL, including the route prefix
    #[arg(
        short,
        long,
        env = "REFERRAL_URL",
        default_value = "http://localhost:5000/api",
        global = true
    )]
    url: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive signup wizard - create an account (default)
    #[command(visible_aliases = ["register", "r"])]
    Signup,

    /// Log in and show your dashboard
    #[command(visible_alias = "l")]
    Login,

    /// Run the API server in this process
    #[command(visible_alias = "s")]
    Server {
        /// Host to bind [default: from config.toml]
        #[arg(long, env = "REFERRAL_HOST")]
        host: Option<String>,

        /// Port to listen on [default: from config.toml]
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,
    },

    /// View the leaderboard
    #[command(visible_alias = "lb")]
    Leaderboard {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show a referrer's dashboard
    #[command(visible_alias = "u")]
    User {
        /// User id
        id: u32,
    },

    /// List the reward catalog
    Rewards,

    /// Credit a donation to a referrer
    Donate {
        /// User id
        id: u32,

        /// Amount in whole dollars
        amount: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The server always logs; other commands only with --verbose
    let is_server = matches!(cli.command, Some(Commands::Server { .. }));
    if cli.verbose || is_server {
        tracing_subscriber::fmt().with_env_filter("info").init();
    }

    // Default to signup if no command specified
    let command = cli.command.unwrap_or(Commands::Signup);

    let result = match command {
        Commands::Signup => wizard::run_signup_wizard(&cli.url).await,
        Commands::Login => wizard::run_login_wizard(&cli.url).await,
        Commands::Server {
            host,
            port,
            no_seed,
        } => {
            print_banner();
            commands::server::run(host, port, no_seed).await
        }
        Commands::Leaderboard { limit } => commands::leaderboard::run(&cli.url, limit).await,
        Commands::User { id } => commands::user::run(&cli.url, id).await,
        Commands::Rewards => commands::rewards::run(&cli.url).await,
        Commands::Donate { id, amount } => commands::donate::run(&cli.url, id, amount).await,
    };

    if let Err(e) = result {
        print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

pub fn print_banner() {
    println!("{}", style_cyan(BANNER));
    println!(
        "  {}",
        style_dim(&format!("Referral Rewards v{}", VERSION))
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_alias() {
        let cli = Cli::try_parse_from(["referral", "u", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::User { id: 2 })));
    }

    #[test]
    fn test_server_flags() {
        let args = ["referral", "server", "--host", "127.0.0.1", "-p", "8080"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Server { host, port, .. }) => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected server command"),
        }
    }
}
