//! `keylo`: terminal client for the Keylo wallet backend.
//!
//! Every command is one request against the same REST contract the web
//! client uses. Results print as pretty JSON on stdout; diagnostics go to
//! stderr through `tracing` (`RUST_LOG=debug` shows each request).

mod backend;
mod session_file;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand, ValueEnum};
use reqwest::Method;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use wire::endpoints::{self, DEFAULT_PAGE_SIZE};
use wire::session::{self, LogoutOutcome, SessionState};
use wire::types::{
    AuthPayload, BurnRequest, CloseAccountRequest, CreateOrderRequest, Dex, LoginRequest, OrderType, OtpPurpose,
    OtpRequest, RegisterRequest, TradeRequest, TradeSide, TransferRequest, UpdateOrderRequest, WRAPPED_SOL_MINT,
};
use wire::{ApiError, Reply, SessionStore};

use crate::backend::HttpBackend;
use crate::session_file::FileSessionStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `keylo login` first")]
    NotSignedIn,
    #[error("session expired or revoked: {0}")]
    SessionRejected(ApiError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "keylo", about = "Keylo wallet and trading CLI")]
struct Cli {
    #[arg(long, env = "KEYLO_BACKEND_URL", default_value = "http://127.0.0.1:8080")]
    backend_url: String,

    #[arg(long, env = "KEYLO_SESSION_FILE")]
    session_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Email a one-time passcode for login or registration.
    Otp {
        #[arg(long, value_enum, default_value_t = Purpose::Login)]
        purpose: Purpose,
        #[arg(long)]
        email: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "KEYLO_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        otp: Option<String>,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "KEYLO_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        otp: Option<String>,
    },
    Logout,
    /// Revalidate the stored session and print its user.
    Whoami,
    Dashboard,
    Assets {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long, default_value = "available")]
        status: String,
    },
    Balance,
    Price(PriceCommand),
    /// Send a token (or SOL when `--mint` is omitted) to another wallet.
    Transfer {
        #[arg(long, default_value = WRAPPED_SOL_MINT)]
        mint: String,
        #[arg(long, value_parser = positive_amount)]
        amount: f64,
        #[arg(long)]
        to: String,
    },
    Burn {
        #[arg(long)]
        mint: String,
        #[arg(long, value_parser = positive_amount)]
        amount: f64,
    },
    Transactions {
        #[command(flatten)]
        page: PageArgs,
    },
    Orders(OrdersCommand),
    /// Market buy or sell.
    Trade {
        side: TradeSide,
        #[arg(long)]
        mint: String,
        #[arg(long, value_parser = positive_amount)]
        amount: f64,
        #[arg(long, default_value_t = Dex::Jupiter)]
        dex: Dex,
        #[arg(long, value_parser = non_negative_amount)]
        tip: Option<f64>,
        #[arg(long, value_parser = non_negative_amount)]
        slippage: Option<f64>,
    },
    /// Token metadata, authorities and holder concentration.
    Overview { mint: String },
    Trending {
        #[arg(long, default_value_t = 24, value_parser = trending_window)]
        hour: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    Rent(RentCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Purpose {
    Login,
    Register,
}

impl From<Purpose> for OtpPurpose {
    fn from(purpose: Purpose) -> Self {
        match purpose {
            Purpose::Login => Self::Login,
            Purpose::Register => Self::Register,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    limit: u32,
}

#[derive(Args, Debug)]
struct PriceCommand {
    #[command(subcommand)]
    command: PriceSubcommand,
}

#[derive(Subcommand, Debug)]
enum PriceSubcommand {
    Sol,
    Token { mint: String },
}

#[derive(Args, Debug)]
struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Args, Debug)]
struct OrderTerms {
    #[arg(long, value_parser = positive_amount)]
    amount: f64,
    #[arg(long, value_parser = positive_amount)]
    trigger_price: f64,
    #[arg(long, default_value_t = 10.0, value_parser = non_negative_amount)]
    slippage: f64,
    #[arg(long, default_value_t = 0.001, value_parser = non_negative_amount)]
    tip: f64,
}

#[derive(Subcommand, Debug)]
enum OrdersSubcommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Create {
        side: TradeSide,
        #[arg(long)]
        mint: String,
        #[arg(long, default_value_t = Dex::Jupiter)]
        dex: Dex,
        #[arg(long, default_value_t = OrderType::High)]
        order_type: OrderType,
        #[command(flatten)]
        terms: OrderTerms,
    },
    Update {
        order_id: String,
        #[command(flatten)]
        terms: OrderTerms,
    },
    Delete {
        order_id: String,
    },
}

#[derive(Args, Debug)]
struct RentCommand {
    #[command(subcommand)]
    command: RentSubcommand,
}

#[derive(Subcommand, Debug)]
enum RentSubcommand {
    /// Empty token accounts and the rent they hold.
    List,
    /// Close the empty account for `mint` and reclaim its rent.
    Close { mint: String },
}

fn positive_amount(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err("must be a number greater than zero".to_owned()),
    }
}

fn non_negative_amount(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err("must be a number that is zero or more".to_owned()),
    }
}

fn trending_window(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|hour| endpoints::TRENDING_WINDOWS.contains(hour))
        .ok_or_else(|| format!("must be one of {:?}", endpoints::TRENDING_WINDOWS))
}

struct CliContext {
    backend: HttpBackend,
    store: FileSessionStore,
}

impl CliContext {
    fn token(&self) -> Result<String, CliError> {
        self.store.load().map(|s| s.token).ok_or(CliError::NotSignedIn)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let ctx = CliContext {
        backend: HttpBackend::new(&cli.backend_url),
        store: FileSessionStore::new(cli.session_file.unwrap_or_else(session_file::default_path)),
    };

    if let Err(e) = run(&ctx, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    let backend = &ctx.backend;
    let reply = match command {
        Command::Otp { purpose, email } => {
            let request = OtpRequest { purpose: purpose.into(), email };
            backend.send(Method::POST, endpoints::OTP_REQUEST, None, &request).await?
        }
        Command::Login { email, password, otp } => {
            let request = LoginRequest { email, password, otp };
            let reply = backend.call::<AuthPayload, _>(Method::POST, endpoints::LOGIN, None, Some(&request)).await?;
            return signed_in(ctx, reply);
        }
        Command::Register { name, email, password, otp } => {
            let request = RegisterRequest { name, email, password, otp };
            let reply = backend.call::<AuthPayload, _>(Method::POST, endpoints::REGISTER, None, Some(&request)).await?;
            return signed_in(ctx, reply);
        }
        Command::Logout => return logout(ctx).await,
        Command::Whoami => return whoami(ctx).await,
        Command::Dashboard => backend.get(endpoints::DASHBOARD, Some(&ctx.token()?)).await?,
        Command::Assets { page, status } => {
            backend.get(&endpoints::assets(page.page, page.limit, &status), Some(&ctx.token()?)).await?
        }
        Command::Balance => backend.get(endpoints::BALANCE, Some(&ctx.token()?)).await?,
        Command::Price(price) => match price.command {
            PriceSubcommand::Sol => backend.get(endpoints::SOL_PRICE, None).await?,
            PriceSubcommand::Token { mint } => {
                backend.get(&endpoints::token_price(&mint), Some(&ctx.token()?)).await?
            }
        },
        Command::Transfer { mint, amount, to } => {
            let request = TransferRequest { mint, amount, to };
            backend.send(Method::POST, endpoints::TRANSFER, Some(&ctx.token()?), &request).await?
        }
        Command::Burn { mint, amount } => {
            let request = BurnRequest { mint, amount };
            backend.send(Method::POST, endpoints::BURN, Some(&ctx.token()?), &request).await?
        }
        Command::Transactions { page } => {
            backend.get(&endpoints::transactions(page.page, page.limit), Some(&ctx.token()?)).await?
        }
        Command::Orders(orders) => run_orders(ctx, orders.command).await?,
        Command::Trade { side, mint, amount, dex, tip, slippage } => {
            let request = TradeRequest { mint, amount, dex, tip, slippage, side };
            backend.send(Method::POST, endpoints::TRADE, Some(&ctx.token()?), &request).await?
        }
        Command::Overview { mint } => backend.get(&endpoints::token_overview(&mint), Some(&ctx.token()?)).await?,
        Command::Trending { hour, limit } => {
            backend.get(&endpoints::trending(hour, limit), Some(&ctx.token()?)).await?
        }
        Command::Rent(rent) => match rent.command {
            RentSubcommand::List => backend.get(endpoints::EMPTY_ACCOUNTS, Some(&ctx.token()?)).await?,
            RentSubcommand::Close { mint } => {
                let request = CloseAccountRequest { mint };
                backend.send(Method::POST, endpoints::CLOSE_ACCOUNT, Some(&ctx.token()?), &request).await?
            }
        },
    };
    print_reply(&reply)
}

async fn run_orders(ctx: &CliContext, command: OrdersSubcommand) -> Result<Reply<Value>, CliError> {
    let token = ctx.token()?;
    let backend = &ctx.backend;
    let reply = match command {
        OrdersSubcommand::List { page } => backend.get(&endpoints::orders(page.page, page.limit), Some(&token)).await?,
        OrdersSubcommand::Create { side, mint, dex, order_type, terms } => {
            let request = CreateOrderRequest {
                mint,
                amount: terms.amount,
                dex,
                order_type,
                trigger_price: terms.trigger_price,
                slippage: terms.slippage,
                tip: terms.tip,
                side,
            };
            backend.send(Method::POST, endpoints::ORDERS, Some(&token), &request).await?
        }
        OrdersSubcommand::Update { order_id, terms } => {
            let request = update_request(&terms);
            backend.send(Method::PUT, &endpoints::order(&order_id), Some(&token), &request).await?
        }
        OrdersSubcommand::Delete { order_id } => {
            backend.call::<Value, Value>(Method::DELETE, &endpoints::order(&order_id), Some(&token), None).await?
        }
    };
    Ok(reply)
}

fn update_request(terms: &OrderTerms) -> UpdateOrderRequest {
    UpdateOrderRequest {
        amount: terms.amount,
        trigger_price: terms.trigger_price,
        slippage: terms.slippage,
        tip: terms.tip,
    }
}

fn signed_in(ctx: &CliContext, reply: Reply<AuthPayload>) -> Result<(), CliError> {
    let state = session::sign_in(&ctx.store, reply.data);
    tracing::info!(path = %ctx.store.path().display(), "session saved");
    let user = state.user().map(serde_json::to_value).transpose()?.unwrap_or(Value::Null);
    print_reply(&Reply { message: reply.message, data: user })
}

async fn logout(ctx: &CliContext) -> Result<(), CliError> {
    let state = ctx.store.load().map_or_else(SessionState::unauthenticated, SessionState::authenticated);
    let (_, outcome) = session::sign_out(&ctx.backend, &ctx.store, &state).await;
    let message = logout_message(&outcome);
    if let LogoutOutcome::Failed(e) = &outcome {
        tracing::warn!(error = %e, "backend logout failed");
    }
    print_reply(&Reply { message, data: Value::Null })
}

fn logout_message(outcome: &LogoutOutcome) -> String {
    match outcome {
        LogoutOutcome::Confirmed => "Logged out".to_owned(),
        LogoutOutcome::Failed(e) => format!("Logged out locally; backend logout failed: {}", e.summary()),
        LogoutOutcome::NoSession => "No active session".to_owned(),
    }
}

async fn whoami(ctx: &CliContext) -> Result<(), CliError> {
    let restored = session::restore(&ctx.backend, &ctx.store).await;
    if let Some(e) = restored.failure {
        return Err(CliError::SessionRejected(e));
    }
    let user = restored.state.user().ok_or(CliError::NotSignedIn)?;
    print_reply(&Reply { message: String::new(), data: serde_json::to_value(user)? })
}

fn render_reply(reply: &Reply<Value>) -> Result<String, CliError> {
    let value = if reply.message.is_empty() {
        json!({ "data": reply.data })
    } else {
        json!({ "message": reply.message, "data": reply.data })
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn print_reply(reply: &Reply<Value>) -> Result<(), CliError> {
    let rendered = render_reply(reply)?;
    println!("{rendered}");
    Ok(())
}
