// ==========================================
// 补给品管理系统 - 命令行入口
// ==========================================
// 子命令:
//   dashboard
//   supplies  list | show | create | update | delete | import | export
//   inventory list | in | out | history
// 全局参数: --base-url / --locale / --json / --yes
// ==========================================

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;

use supply_manager::app::{
    AppState, AssumeYes, Confirmer, DashboardPage, InventoryManagementPage, Notifier, Route,
    Shell, SupplyManagementPage,
};
use supply_manager::config::ClientConfig;
use supply_manager::i18n::{self, t};
use supply_manager::views::{render_supply_table, render_transaction_table};
use supply_manager::{logging, TransactionType};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    let config = ClientConfig::from_env()
        .context("failed to load configuration from environment")?
        .with_base_url(cli.base_url.as_deref())
        .context("invalid --base-url")?
        .with_locale(cli.locale.clone());
    i18n::apply_locale(&config.locale);

    tracing::info!(version = supply_manager::VERSION, "{}", supply_manager::APP_NAME);

    let state = AppState::new(config).context("failed to initialise HTTP client")?;
    let notifier: Arc<dyn Notifier> = Arc::new(StderrNotifier);
    let confirmer: Arc<dyn Confirmer> = if cli.yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(StdinConfirmer)
    };
    let context = CliContext {
        state,
        notifier,
        confirmer,
        json: cli.json,
    };

    match cli.command {
        Commands::Dashboard => handle_dashboard(&context),
        Commands::Supplies(command) => handle_supplies_command(&context, command).await,
        Commands::Inventory(command) => handle_inventory_command(&context, command).await,
    }
}

#[derive(Parser)]
#[command(name = "supply-manager", about = "Supply inventory client for the supply REST API", version)]
struct Cli {
    #[arg(long, global = true, help = "Base URL of the REST API (overrides SUPPLY_API_BASE_URL)")]
    base_url: Option<String>,
    #[arg(long, global = true, help = "UI language: ja, en or zh-CN (overrides SUPPLY_LOCALE)")]
    locale: Option<String>,
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[arg(
        long,
        short = 'y',
        global = true,
        action = ArgAction::SetTrue,
        help = "Skip confirmation prompts"
    )]
    yes: bool,
    #[arg(long, global = true, action = ArgAction::SetTrue, help = "Emit logs as JSON")]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the navigation dashboard
    Dashboard,
    #[command(subcommand)]
    Supplies(SuppliesCommands),
    #[command(subcommand)]
    Inventory(InventoryCommands),
}

#[derive(Subcommand)]
enum SuppliesCommands {
    /// List all supplies
    List,
    /// Show one supply
    Show { id: i64 },
    /// Register a new supply
    Create(SupplyFieldArgs),
    /// Replace the editable fields of a supply
    Update {
        id: i64,
        #[command(flatten)]
        fields: SupplyFieldArgs,
    },
    /// Delete a supply (asks for confirmation unless --yes)
    Delete { id: i64 },
    /// Upload a CSV file to the import endpoint
    Import { path: PathBuf },
    /// Download the Excel export
    Export {
        #[arg(long, help = "Target file (default: download directory/supplies.xlsx)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Also convert the workbook into an import CSV at this path")]
        csv: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SupplyFieldArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
    #[arg(long)]
    unit_price: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

impl SupplyFieldArgs {
    fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("name", self.name.as_deref()),
            ("quantity", self.quantity.as_deref()),
            ("unitPrice", self.unit_price.as_deref()),
            ("category", self.category.as_deref()),
        ]
    }
}

#[derive(Subcommand)]
enum InventoryCommands {
    /// List all stock movements
    List,
    /// Record a stock-in
    In(MovementArgs),
    /// Record a stock-out
    Out(MovementArgs),
    /// List stock movements of one supply
    History { supply_id: i64 },
}

#[derive(Args)]
struct MovementArgs {
    #[arg(long)]
    supply_id: String,
    #[arg(long)]
    quantity: String,
    #[arg(long)]
    note: Option<String>,
}

struct CliContext {
    state: AppState,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    json: bool,
}

impl CliContext {
    fn supply_page(&self) -> SupplyManagementPage {
        SupplyManagementPage::new(&self.state, self.notifier.clone(), self.confirmer.clone())
    }

    fn inventory_page(&self) -> InventoryManagementPage {
        InventoryManagementPage::new(&self.state, self.notifier.clone())
    }

    fn print_header(&self, route: Route) {
        if !self.json {
            let mut shell = Shell::new();
            shell.navigate_to(route);
            println!("{}", shell.render_header());
        }
    }
}

// ==========================================
// dashboard
// ==========================================
fn handle_dashboard(context: &CliContext) -> Result<()> {
    let page = DashboardPage::new();
    if context.json {
        let cards: Vec<_> = page
            .cards()
            .into_iter()
            .map(|card| {
                serde_json::json!({
                    "title": card.title,
                    "description": card.description,
                    "path": card.route.map(|route| route.path()),
                })
            })
            .collect();
        return print_json(&cards);
    }

    context.print_header(Route::Dashboard);
    print!("{}", page.render());
    Ok(())
}

// ==========================================
// supplies
// ==========================================
async fn handle_supplies_command(context: &CliContext, command: SuppliesCommands) -> Result<()> {
    let mut page = context.supply_page();

    match command {
        SuppliesCommands::List => {
            let snapshot = page.mount().await;
            if let Some(message) = snapshot.error {
                bail!(message);
            }
            if context.json {
                return print_json(&snapshot.data);
            }
            context.print_header(Route::Supplies);
            print!("{}", page.render());
        }
        SuppliesCommands::Show { id } => {
            let supply = context
                .state
                .supply_service
                .get_by_id(id)
                .await
                .with_context(|| format!("failed to load supply {}", id))?;
            if context.json {
                return print_json(&supply);
            }
            print!("{}", render_supply_table(std::slice::from_ref(&supply)));
        }
        SuppliesCommands::Create(fields) => {
            page.open_create();
            apply_supply_fields(&mut page, &fields)?;
            let saved = page
                .submit()
                .await
                .ok_or_else(|| anyhow!(t("supply.save_failed")))?;
            print_saved(context, &page, &saved)?;
        }
        SuppliesCommands::Update { id, fields } => {
            page.mount().await;
            if !page.open_edit(id).await {
                bail!(t("supply.save_failed"));
            }
            apply_supply_fields(&mut page, &fields)?;
            let saved = page
                .submit()
                .await
                .ok_or_else(|| anyhow!(t("supply.save_failed")))?;
            print_saved(context, &page, &saved)?;
        }
        SuppliesCommands::Delete { id } => {
            if !page.delete(id).await {
                bail!("supply {} was not deleted", id);
            }
            if context.json {
                return print_json(&serde_json::json!({ "deleted": id }));
            }
            print!("{}", page.render());
        }
        SuppliesCommands::Import { path } => {
            let summary = page
                .import(&path)
                .await
                .ok_or_else(|| anyhow!(t("supply.import_failed")))?;
            if context.json {
                return print_json(&serde_json::json!({ "result": summary }));
            }
            println!("{}", summary);
        }
        SuppliesCommands::Export { output, csv } => {
            let (saved, converted) = match csv {
                Some(csv_path) => {
                    let (saved, converted) = page
                        .export_with_import_csv(output.as_deref(), &csv_path)
                        .await
                        .ok_or_else(|| anyhow!(t("supply.export_failed")))?;
                    (saved, Some(converted))
                }
                None => {
                    let saved = page
                        .export(output.as_deref())
                        .await
                        .ok_or_else(|| anyhow!(t("supply.export_failed")))?;
                    (saved, None)
                }
            };
            if context.json {
                return print_json(&serde_json::json!({
                    "workbook": saved.display().to_string(),
                    "csv": converted.map(|path| path.display().to_string()),
                }));
            }
        }
    }

    Ok(())
}

fn apply_supply_fields(page: &mut SupplyManagementPage, fields: &SupplyFieldArgs) -> Result<()> {
    for (name, value) in fields.entries() {
        if let Some(raw) = value {
            page.set_field(name, raw)
                .with_context(|| format!("invalid value for {}", name))?;
        }
    }
    Ok(())
}

fn print_saved(
    context: &CliContext,
    page: &SupplyManagementPage,
    saved: &supply_manager::Supply,
) -> Result<()> {
    if context.json {
        return print_json(saved);
    }
    context.print_header(Route::Supplies);
    print!("{}", page.render());
    Ok(())
}

// ==========================================
// inventory
// ==========================================
async fn handle_inventory_command(context: &CliContext, command: InventoryCommands) -> Result<()> {
    let mut page = context.inventory_page();

    match command {
        InventoryCommands::List => {
            page.mount().await;
            let snapshot = page.transactions();
            if let Some(message) = snapshot.error {
                bail!(message);
            }
            if context.json {
                return print_json(&snapshot.data);
            }
            context.print_header(Route::Inventory);
            print!("{}", page.render());
        }
        InventoryCommands::In(args) => {
            record_movement(context, &mut page, TransactionType::In, args).await?;
        }
        InventoryCommands::Out(args) => {
            record_movement(context, &mut page, TransactionType::Out, args).await?;
        }
        InventoryCommands::History { supply_id } => {
            let transactions = page
                .history(supply_id)
                .await
                .ok_or_else(|| anyhow!(t("inventory.fetch_failed")))?;
            if context.json {
                return print_json(&transactions);
            }
            print!("{}", render_transaction_table(&transactions));
        }
    }

    Ok(())
}

async fn record_movement(
    context: &CliContext,
    page: &mut InventoryManagementPage,
    transaction_type: TransactionType,
    args: MovementArgs,
) -> Result<()> {
    page.mount().await;

    let type_value = transaction_type.to_string();
    let mut fields = vec![
        ("supplyId", args.supply_id.as_str()),
        ("type", type_value.as_str()),
        ("quantity", args.quantity.as_str()),
    ];
    if let Some(note) = args.note.as_deref() {
        fields.push(("note", note));
    }
    for (name, raw) in fields {
        page.set_field(name, raw)
            .with_context(|| format!("invalid value for {}", name))?;
    }

    let transaction = page
        .submit()
        .await
        .ok_or_else(|| anyhow!(t("inventory.submit_failed")))?;

    if context.json {
        return print_json(&transaction);
    }
    context.print_header(Route::Inventory);
    print!("{}", page.render());
    Ok(())
}

// ==========================================
// 终端交互
// ==========================================

/// 提示写到 stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// 从 stdin 读取 y/N
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{} {} ", message, t("common.yes_no"));
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                tracing::warn!(error = %err, "确认输入读取失败");
                false
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
