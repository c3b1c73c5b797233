//! Storefront Orders Binary
//!
//! Loads one order, prints the order detail view as JSON, and optionally
//! runs the confirm-then-cancel sequence.
//!
//! # Usage
//!
//! ```bash
//! storefront-orders <order-id> [--cancel [--yes]] [--review] [--offline]
//! ```
//!
//! Without `--yes` the confirmation is declined, so nothing is cancelled.
//! `--offline` runs against built-in sample orders (ids 1 to 3) instead of the
//! backend.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_TOKEN`: Bearer token for the storefront backend (required
//!   with `--cancel`)
//! - `STOREFRONT_CONFIG`: Config file path (default: storefront.yaml; built-in
//!   defaults when absent)
//! - `RUST_LOG`: Log filter (default: `storefront_orders=info`)

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use storefront_orders::config::{Config, DEFAULT_CONFIG_PATH, load_config, require_env};
use storefront_orders::observability::init_tracing;
use storefront_orders::{
    Customer, HttpOrderService, InMemoryOrderService, Order, OrderDetailFlow, OrderId,
    OrderServicePort, OrderStatus, RecordingNavigator, RecordingNotifier, Session,
};

/// Bearer token variable.
const TOKEN_VAR: &str = "STOREFRONT_API_TOKEN";

#[derive(Debug, Parser)]
#[command(name = "storefront-orders")]
#[command(about = "Show a storefront order and optionally cancel it", long_about = None)]
struct CliArgs {
    /// Order id as it appears in the route, e.g. 42
    order_id: String,

    /// Open the cancel confirmation
    #[arg(long)]
    cancel: bool,

    /// Accept the cancel confirmation instead of declining it
    #[arg(short, long, requires = "cancel")]
    yes: bool,

    /// Open the review form for the order
    #[arg(long)]
    review: bool,

    /// Use built-in sample orders instead of the backend
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let args = CliArgs::parse();
    let config = read_config()?;

    init_tracing(&config.observability.logging).context("failed to initialize logging")?;
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        max_attempts = config.api.max_attempts,
        "Configuration loaded"
    );

    let service: Arc<dyn OrderServicePort> = if args.offline {
        tracing::info!("Offline mode, using sample orders");
        Arc::new(sample_orders())
    } else {
        let session = match require_env(TOKEN_VAR) {
            Ok(token) => Session::from_token(token),
            Err(e) if args.cancel => {
                return Err(e).context("cancelling requires a signed-in session");
            }
            Err(_) => {
                tracing::warn!("{TOKEN_VAR} not set, requests are anonymous");
                Session::new()
            }
        };
        Arc::new(
            HttpOrderService::new(&config.api.to_api_config(), Arc::new(session))
                .context("failed to build order service")?,
        )
    };
    let notifier = Arc::new(RecordingNotifier::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let mut flow = OrderDetailFlow::new(service, Arc::clone(&notifier), Arc::clone(&navigator));
    flow.load(&args.order_id).await;
    print_json(&flow.view())?;

    if args.cancel {
        let prompt = flow.request_cancel().context("order cannot be cancelled")?;
        print_json(&prompt)?;

        let outcome = if args.yes {
            flow.accept_cancel().await?
        } else {
            flow.decline_cancel()?
        };
        tracing::info!(outcome = ?outcome, "Cancel sequence finished");
        print_json(&flow.view())?;
    }

    if args.review {
        flow.write_review()?;
    }

    for notice in notifier.drain() {
        print_json(&notice)?;
    }
    for event in navigator.events() {
        print_json(&event)?;
    }

    Ok(())
}

/// Load the config file, or built-in defaults when the default file is absent.
fn read_config() -> anyhow::Result<Config> {
    match std::env::var("STOREFRONT_CONFIG") {
        Ok(path) => load_config(Some(&path)).with_context(|| format!("loading {path}")),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).with_context(|| format!("loading {DEFAULT_CONFIG_PATH}"))
        }
        Err(_) => Ok(Config::default()),
    }
}

/// Orders served by `--offline`.
fn sample_orders() -> InMemoryOrderService {
    let order = |id: i64, name: &str, status: OrderStatus, total: i64| {
        Order::new(OrderId::new(id), Customer::new(name), status, Decimal::from(total))
    };
    InMemoryOrderService::with_orders([
        order(1, "Nguyễn Văn A", OrderStatus::Pending, 500_000)
            .with_notes("Giao giờ hành chính")
            .with_created_at("2024-05-01T12:00:00.670331"),
        order(2, "Trần Thị B", OrderStatus::Shipping, 1_250_000)
            .with_created_at("2024-04-28T09:15:00+07:00"),
        order(3, "Lê Văn C", OrderStatus::Delivered, 89_000),
    ])
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("storefront-orders").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_plain_id() {
        let parsed = parse(&["42"]).unwrap();
        assert_eq!(parsed.order_id, "42");
        assert!(!parsed.cancel);
        assert!(!parsed.offline);
    }

    #[test]
    fn parses_cancel_flags() {
        let parsed = parse(&["--cancel", "7", "-y", "--offline"]).unwrap();
        assert_eq!(parsed.order_id, "7");
        assert!(parsed.cancel);
        assert!(parsed.yes);
        assert!(parsed.offline);
    }

    #[test]
    fn rejects_missing_id_and_stray_flags() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["1", "--force"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["1", "2"]).is_err());
        assert_eq!(
            parse(&["1", "--yes"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[tokio::test]
    async fn sample_orders_cover_cancellable_and_not() {
        let service = sample_orders();
        let pending = service.get_order_detail(OrderId::new(1)).await.unwrap();
        let shipping = service.get_order_detail(OrderId::new(2)).await.unwrap();
        assert!(pending.can_cancel());
        assert!(!shipping.can_cancel());
    }
}
