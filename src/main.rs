use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use autoflow_catalog::{IntegrationCatalog, IntegrationKind, StaticCatalog};
use autoflow_controller::{ControllerConfig, FlowController};
use autoflow_editor::{UuidIds, to_steps};
use autoflow_flow::{Flow, FlowDraft};
use autoflow_store::{Credential, CredentialStore, FlowStore, SqliteStore};
use autoflow_validator::{Config, Validator};

/// Autoflow - author, validate and publish trigger/action automations
#[derive(Parser)]
#[command(name = "autoflow")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.autoflow)
  #[arg(long, global = true, env = "AUTOFLOW_DATA_DIR")]
  data_dir: Option<PathBuf>,

  /// Timeout for each store round trip, in seconds
  #[arg(long, global = true, env = "AUTOFLOW_TIMEOUT_SECS", default_value_t = 30)]
  timeout_secs: u64,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Browse available integrations
  Catalog {
    kind: KindArg,

    /// Only integrations whose name, description or category matches
    #[arg(long)]
    search: Option<String>,

    /// Group the output by category
    #[arg(long)]
    by_category: bool,
  },

  /// Check a step configuration against an integration's rules
  Validate {
    integration_id: String,

    /// Configuration as a JSON object (default: {})
    config: Option<String>,
  },

  /// Manage stored flows
  Flows {
    #[command(subcommand)]
    action: FlowsCommand,
  },

  /// Manage stored credentials
  Credentials {
    #[command(subcommand)]
    action: CredentialsCommand,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
  Triggers,
  Actions,
}

impl From<KindArg> for IntegrationKind {
  fn from(kind: KindArg) -> Self {
    match kind {
      KindArg::Triggers => IntegrationKind::Trigger,
      KindArg::Actions => IntegrationKind::Action,
    }
  }
}

#[derive(Subcommand)]
enum FlowsCommand {
  /// List stored flows
  List,
  /// Show a flow as an editing session
  Show { flow_id: String },
  /// Delete a flow
  Delete { flow_id: String },
  /// Save and activate a flow
  Publish { flow_id: String },
  /// Deactivate a flow
  Unpublish { flow_id: String },
  /// Dry-run a flow's actions against their configuration rules
  Test { flow_id: String },
  /// Create a flow from a flow document
  Import { file: PathBuf },
  /// Print the editable steps of a flow document
  Steps { file: PathBuf },
}

#[derive(Subcommand)]
enum CredentialsCommand {
  /// List credentials for an integration
  List { integration_id: String },
  /// Register a credential for an integration
  Add {
    integration_id: String,
    name: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("autoflow=info")))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let data_dir = match cli.data_dir {
    Some(dir) => dir,
    None => dirs::home_dir()
      .context("could not determine home directory")?
      .join(".autoflow"),
  };
  let timeout = Duration::from_secs(cli.timeout_secs);

  let Some(command) = cli.command else {
    println!("autoflow - use --help to see available commands");
    return Ok(());
  };

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run(command, data_dir, timeout).await })
}

async fn run(command: Commands, data_dir: PathBuf, timeout: Duration) -> Result<()> {
  match command {
    Commands::Catalog {
      kind,
      search,
      by_category,
    } => {
      let catalog = open_catalog(&data_dir).await?;
      let kind = IntegrationKind::from(kind);
      let output = if by_category {
        let groups: serde_json::Map<_, _> = catalog
          .group_by_category(kind)
          .into_iter()
          .map(|(category, integrations)| {
            (category.label().to_string(), json!(integrations))
          })
          .collect();
        json!(groups)
      } else {
        match search {
          Some(query) => json!(catalog.search(kind, &query)),
          None => json!(catalog.list(kind)),
        }
      };
      print_json(&output)
    }
    Commands::Validate {
      integration_id,
      config,
    } => {
      let config = parse_config(config.as_deref())?;
      println!("{}", Validator::new().validate(&integration_id, &config));
      Ok(())
    }
    Commands::Flows { action } => run_flows(action, &data_dir, timeout).await,
    Commands::Credentials { action } => run_credentials(action, &data_dir).await,
  }
}

async fn run_flows(action: FlowsCommand, data_dir: &Path, timeout: Duration) -> Result<()> {
  match action {
    FlowsCommand::Steps { file } => {
      let flow = read_flow(&file).await?;
      let catalog = open_catalog(data_dir).await?;
      let steps = to_steps(&flow, &catalog, &UuidIds);
      print_json(&steps)
    }
    FlowsCommand::List => {
      let store = open_store(data_dir).await?;
      let flows = store.list_flows().await.context("failed to list flows")?;
      let summary: Vec<_> = flows
        .iter()
        .map(|f| {
          json!({
            "id": f.id,
            "displayName": f.display_name(),
            "status": f.status,
            "steps": f.version.trigger.len(),
          })
        })
        .collect();
      print_json(&summary)
    }
    FlowsCommand::Import { file } => {
      let flow = read_flow(&file).await?;
      let draft = FlowDraft {
        display_name: flow.version.display_name,
        metadata: flow.metadata,
        trigger: flow.version.trigger,
      };
      let store = open_store(data_dir).await?;
      let created = store
        .create_flow(&draft)
        .await
        .context("failed to store flow")?;
      info!(flow_id = %created.id, "flow_imported");
      print_json(&created)
    }
    FlowsCommand::Show { flow_id } => {
      let controller = open_session(data_dir, timeout, &flow_id).await?;
      print_json(&controller.snapshot())
    }
    FlowsCommand::Delete { flow_id } => {
      let controller = open_session(data_dir, timeout, &flow_id).await?;
      controller.delete().await.context("failed to delete flow")?;
      eprintln!("Deleted flow: {}", flow_id);
      Ok(())
    }
    FlowsCommand::Publish { flow_id } => {
      let controller = open_session(data_dir, timeout, &flow_id).await?;
      let flow = controller.publish().await.context("failed to publish flow")?;
      print_json(&flow)
    }
    FlowsCommand::Unpublish { flow_id } => {
      let controller = open_session(data_dir, timeout, &flow_id).await?;
      let flow = controller
        .unpublish()
        .await
        .context("failed to unpublish flow")?;
      print_json(&flow)
    }
    FlowsCommand::Test { flow_id } => {
      let controller = open_session(data_dir, timeout, &flow_id).await?;
      let report = controller.test().await.context("test run failed")?;
      eprintln!(
        "Test run {}: {} step(s) in {} ms",
        if report.success { "passed" } else { "failed" },
        report.steps.len(),
        report.execution_time_ms
      );
      print_json(&report)
    }
  }
}

async fn run_credentials(action: CredentialsCommand, data_dir: &Path) -> Result<()> {
  let store = open_store(data_dir).await?;
  match action {
    CredentialsCommand::List { integration_id } => {
      let credentials = store
        .get_credentials(&integration_id)
        .await
        .context("failed to list credentials")?;
      print_json(&credentials)
    }
    CredentialsCommand::Add {
      integration_id,
      name,
    } => {
      let id = format!("cred-{}", uuid::Uuid::new_v4());
      let credential = Credential::new(id, integration_id, name);
      store
        .add_credential(&credential)
        .await
        .context("failed to store credential")?;
      print_json(&credential)
    }
  }
}

async fn open_catalog(data_dir: &Path) -> Result<StaticCatalog> {
  let mut catalog = StaticCatalog::builtin();
  let path = data_dir.join("integrations.json");
  let added = catalog
    .load_extensions(&path)
    .await
    .with_context(|| format!("failed to load integrations: {}", path.display()))?;
  if added > 0 {
    info!(added, path = %path.display(), "catalog_extended");
  }
  Ok(catalog)
}

async fn open_store(data_dir: &Path) -> Result<SqliteStore> {
  tokio::fs::create_dir_all(data_dir)
    .await
    .with_context(|| format!("failed to create data directory: {}", data_dir.display()))?;

  let url = format!("sqlite://{}", data_dir.join("autoflow.db").display());
  SqliteStore::connect(&url)
    .await
    .with_context(|| format!("failed to open database: {}", url))
}

async fn open_session(data_dir: &Path, timeout: Duration, flow_id: &str) -> Result<FlowController> {
  let store = Arc::new(open_store(data_dir).await?);
  let catalog = open_catalog(data_dir).await?;
  let controller = FlowController::new(store.clone(), store, Arc::new(catalog)).with_config(
    ControllerConfig {
      persistence_timeout: timeout,
      ..Default::default()
    },
  );
  controller
    .load(flow_id)
    .await
    .with_context(|| format!("failed to load flow: {}", flow_id))?;
  Ok(controller)
}

async fn read_flow(file: &Path) -> Result<Flow> {
  let content = tokio::fs::read_to_string(file)
    .await
    .with_context(|| format!("failed to read flow file: {}", file.display()))?;
  Flow::from_json(&content)
    .with_context(|| format!("failed to parse flow file: {}", file.display()))
}

fn parse_config(raw: Option<&str>) -> Result<Config> {
  let Some(raw) = raw else {
    return Ok(Config::new());
  };
  match serde_json::from_str(raw).context("failed to parse config JSON")? {
    serde_json::Value::Object(map) => Ok(map),
    other => anyhow::bail!("config must be a JSON object, got: {}", other),
  }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_config() {
    assert!(parse_config(None).unwrap().is_empty());
    let config = parse_config(Some(r#"{"scheduleType":"daily"}"#)).unwrap();
    assert_eq!(config["scheduleType"], "daily");
    assert!(parse_config(Some("[1, 2]")).is_err());
    assert!(parse_config(Some("{not json")).is_err());
  }

  #[tokio::test]
  async fn test_open_catalog_with_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = open_catalog(dir.path()).await.unwrap();
    assert!(catalog.find(IntegrationKind::Trigger, "erp_trigger").is_none());

    tokio::fs::write(
      dir.path().join("integrations.json"),
      json!([{
        "id": "erp_trigger",
        "name": "ERP",
        "description": "Orders from the ERP",
        "category": "Database",
        "color": "#123456",
        "type": "trigger",
        "requiresAuth": false
      }])
      .to_string(),
    )
    .await
    .unwrap();

    let catalog = open_catalog(dir.path()).await.unwrap();
    assert!(catalog.find(IntegrationKind::Trigger, "erp_trigger").is_some());
  }

  #[tokio::test]
  async fn test_import_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("flow.json");
    tokio::fs::write(
      &file,
      json!({
        "id": "ignored",
        "status": "ENABLED",
        "version": {
          "displayName": "Imported",
          "trigger": {
            "name": "webhook",
            "displayName": "Webhook",
            "valid": true,
            "type": "PIECE_TRIGGER",
            "settings": { "pieceName": "webhook", "triggerName": "webhook", "input": {} }
          }
        },
        "metadata": {}
      })
      .to_string(),
    )
    .await
    .unwrap();

    run_flows(FlowsCommand::Import { file }, dir.path(), Duration::from_secs(5))
      .await
      .unwrap();

    let store = open_store(dir.path()).await.unwrap();
    let flows = store.list_flows().await.unwrap();
    assert_eq!(flows.len(), 1);
    assert!(!flows[0].is_published());

    let controller = open_session(dir.path(), Duration::from_secs(5), &flows[0].id)
      .await
      .unwrap();
    assert_eq!(controller.display_name(), "Imported");
    assert_eq!(controller.steps().len(), 1);
  }
}
