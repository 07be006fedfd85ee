use std::fmt;
use std::sync::Arc;

use coleta_core::model::ClassGroup;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock};
use storage::sheets::SheetsConfig;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBackend { raw: String },
    InvalidDbUrl { raw: String },
    MissingSheetsConfig,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBackend { raw } => write!(f, "invalid --backend value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::MissingSheetsConfig => write!(
                f,
                "sheets backend needs COLETA_SHEETS_API_KEY and COLETA_SHEETS_SPREADSHEET_ID"
            ),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Memory,
    Sqlite,
    Sheets,
}

impl Backend {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "memory" => Some(Self::Memory),
            "sqlite" => Some(Self::Sqlite),
            "sheets" => Some(Self::Sheets),
            _ => None,
        }
    }
}

struct Args {
    backend: Backend,
    db_url: String,
    class_group: Option<ClassGroup>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--backend <memory|sqlite|sheets>] [--db <sqlite_url>] [--class <group>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --backend sqlite");
    eprintln!("  --db sqlite:coleta.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COLETA_BACKEND, COLETA_DB_URL, COLETA_CLASS_GROUP");
    eprintln!("  COLETA_SHEETS_API_KEY, COLETA_SHEETS_SPREADSHEET_ID,");
    eprintln!("  COLETA_SHEETS_BASE_URL, COLETA_SHEETS_RANGE (sheets backend)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut backend = match std::env::var("COLETA_BACKEND") {
            Ok(raw) => Backend::from_arg(&raw).ok_or(ArgsError::InvalidBackend { raw })?,
            Err(_) => Backend::Sqlite,
        };
        let mut db_url = std::env::var("COLETA_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://coleta.sqlite3".into(), normalize_sqlite_url);
        let mut class_group = std::env::var("COLETA_CLASS_GROUP")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(ClassGroup::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend" => {
                    let value = require_value(args, "--backend")?;
                    backend = Backend::from_arg(&value)
                        .ok_or(ArgsError::InvalidBackend { raw: value })?;
                }
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--class" => {
                    let value = require_value(args, "--class")?;
                    class_group = Some(ClassGroup::new(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            backend,
            db_url,
            class_group,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let services = match parsed.backend {
        Backend::Memory => AppServices::new_in_memory(clock),
        Backend::Sqlite => {
            // Open + migrate at startup; keep the file plumbing in the
            // binary glue so core/services stay pure.
            prepare_sqlite_file(&parsed.db_url)?;
            AppServices::new_sqlite(&parsed.db_url, clock, parsed.class_group).await?
        }
        Backend::Sheets => {
            let config = SheetsConfig::from_env().ok_or(ArgsError::MissingSheetsConfig)?;
            AppServices::new_google_sheets(config, clock, parsed.class_group)
        }
    };

    tracing::info!(backend = ?parsed.backend, class = %services.class_group(), "starting coleta");

    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Coleta")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
