use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use hemogate::access::AccessGate;
use hemogate::cli::{check_path, issue_token, parse_role};
use hemogate::config::{AccessConfig, JwtConfig};

#[derive(Parser)]
#[command(name = "hemogate-cli")]
#[command(about = "Hemogate CLI - Development tools for the access gate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a session credential with JWT_SECRET
    IssueToken {
        /// Role of the subject (ADMIN or DONOR)
        #[arg(short = 'r', long)]
        role: String,

        /// Subject identifier
        #[arg(short = 'i', long)]
        id: String,

        /// Lifetime in seconds (defaults to JWT_ACCESS_EXPIRY)
        #[arg(short = 't', long)]
        ttl: Option<i64>,
    },
    /// Print the decision the gate would make for a path
    Check {
        /// Requested path, optionally with a query string
        path: String,

        /// Session credential to present
        #[arg(short = 't', long)]
        token: Option<String>,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let jwt_config = JwtConfig::from_env();

    match cli.command {
        Commands::IssueToken { role, id, ttl } => {
            let token = parse_role(&role).and_then(|role| issue_token(role, &id, ttl, &jwt_config));
            match token {
                Ok(token) => println!("{token}"),
                Err(e) => {
                    eprintln!("❌ Error issuing token: {e:#}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { path, token } => {
            let gate = AccessGate::new(&AccessConfig::from_env(), &jwt_config);
            println!("{}", check_path(&gate, &path, token.as_deref()));
        }
    }
}
