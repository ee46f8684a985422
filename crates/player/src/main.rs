//! rpgficha - command-line client for the ficha API

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpgficha_domain::{DiceSides, FichaId};
use rpgficha_player::presentation::SheetText;
use rpgficha_player::state::{FichaForm, FormAction};
use rpgficha_player::{DiceTray, FichaService, HttpFichaApi, SheetMode, SheetSession};
use rpgficha_shared::{FichaPayload, FichaRecord};

#[derive(Debug, Parser)]
#[command(name = "rpgficha", version, about = "RPG character sheet client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a ficha and print it with its derived values
    Show { id: FichaId },
    /// Create a ficha from a payload JSON file
    Create { file: PathBuf },
    /// Replace a ficha with a payload JSON file
    Update { id: FichaId, file: PathBuf },
    /// Set current HP from the view screen; only the last value is sent
    Hp {
        id: FichaId,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Roll one die locally
    Roll {
        #[arg(default_value_t = 20)]
        sides: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpgficha_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Command::Roll { sides } = cli.command {
        return roll(sides);
    }

    let api = HttpFichaApi::from_env().context("Loading API configuration")?;
    tracing::debug!(base_url = api.config().base_url(), "Using ficha API");
    let service = FichaService::new(Arc::new(api));

    match cli.command {
        Command::Show { id } => {
            let record = service
                .load(id)
                .await
                .with_context(|| format!("Loading ficha {}", id))?;
            print!("{}", SheetText::new(&record));
        }
        Command::Create { file } => {
            let payload = read_payload(&file)?;
            let record = save(SheetSession::blank(service), payload).await?;
            match record.id {
                Some(id) => println!("Ficha criada: {}", id),
                None => println!("Ficha criada (sem id retornado)"),
            }
            print!("{}", SheetText::new(&record));
        }
        Command::Update { id, file } => {
            let payload = read_payload(&file)?;
            let existing = FichaRecord {
                id: Some(id),
                payload: FichaPayload::default(),
            };
            let session = SheetSession::new(service, Some(existing), SheetMode::Edit);
            let record = save(session, payload).await?;
            println!("Ficha atualizada: {}", id);
            print!("{}", SheetText::new(&record));
        }
        Command::Hp { id, values } => {
            let Some(record) = service.load_for_view(id).await else {
                bail!("Ficha {} não encontrada", id);
            };
            let mut session = SheetSession::new(service, Some(record), SheetMode::View);
            for value in values {
                if !session.set_view_hp(value) {
                    tracing::info!(value, "HP unchanged");
                }
            }
            session.flush_hp_sync().await;
            if let Some(saved) = session.saved() {
                println!(
                    "PV {}/{}",
                    saved.payload.current_hp, saved.payload.max_hp
                );
            }
        }
        Command::Roll { .. } => {}
    }

    Ok(())
}

/// Push `payload` through the form and save it.
async fn save(mut session: SheetSession, payload: FichaPayload) -> anyhow::Result<FichaRecord> {
    session.dispatch(FormAction::Load(FichaForm::from_payload(&payload)));
    for (field, value) in session.form().unlisted_options() {
        tracing::warn!(field, value, "Value is not one of the offered options");
    }
    match session.save(None).await {
        Ok(record) => Ok(record.clone()),
        Err(e) => bail!("{}", e.user_message()),
    }
}

fn roll(sides: u32) -> anyhow::Result<()> {
    let Some(sides) = DiceSides::from_sides(sides) else {
        bail!("Dado inválido: d{}", sides);
    };
    let mut tray = DiceTray::new();
    tray.change_sides(sides);
    tray.roll();
    println!("{}: {}", sides.label(), tray.value());
    Ok(())
}

fn read_payload(path: &Path) -> anyhow::Result<FichaPayload> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parsing ficha payload {}", path.display()))
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
