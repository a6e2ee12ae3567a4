//! # QuiltCalc CLI
//!
//! Terminal front end for the quilt yardage calculator. Every command feeds
//! the raw values through the same calculator session the app uses, so
//! blank or half-typed secondary values fall back to the defaults.
//!
//! ```text
//! quiltcalc calc --width 60 --length 72 --extra 4
//! quiltcalc calc --width 90 --length 100 --wideback --json
//! quiltcalc layout --width 48 --length 48 --canvas-width 600
//! quiltcalc materials --store list.json add-result --width 60 --length 72
//! quiltcalc interactive
//! ```

mod logger;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use quilt_core::calculations::layout::{LayoutResult, LayoutRole};
use quilt_core::input::FormField;
use quilt_core::materials::BackingOrientation;
use quilt_core::materials_list::MaterialsList;
use quilt_core::storage::{clear_materials_list, load_materials_list, save_materials_list, JsonFileStore};
use quilt_core::{CalculationResult, CalculatorDefaults, CalculatorSession};

#[derive(Debug, Parser)]
#[command(name = "quiltcalc", version, about = "Quilt batting, backing and binding calculator")]
struct Cli {
    /// Settings file with calculator defaults (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate batting, backing and binding
    Calc {
        #[command(flatten)]
        quilt: QuiltArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Also print the diagram geometry
        #[arg(long)]
        layout: bool,
    },
    /// Print diagram geometry as JSON
    Layout {
        #[command(flatten)]
        quilt: QuiltArgs,
        #[arg(long)]
        canvas_width: Option<f64>,
        #[arg(long)]
        canvas_height: Option<f64>,
        #[arg(long)]
        padding: Option<f64>,
    },
    /// Manage the saved materials list
    Materials {
        /// Store file
        #[arg(long, default_value = "quiltcalc-store.json")]
        store: PathBuf,
        #[command(subcommand)]
        action: MaterialsAction,
    },
    /// Prompt for each value
    Interactive,
}

#[derive(Debug, Subcommand)]
enum MaterialsAction {
    /// Show the list and its total
    List,
    /// Append an item
    Add {
        name: String,
        #[arg(long, default_value = "1")]
        quantity: String,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        #[arg(long, default_value = "Fabric")]
        category: String,
    },
    /// Remove an item by id
    Remove { id: String },
    /// Delete the saved list
    Clear,
    /// Calculate and append batting, backing and binding
    AddResult {
        #[command(flatten)]
        quilt: QuiltArgs,
    },
}

/// Calculator values, passed as typed. Omitted values keep the defaults.
#[derive(Debug, Args)]
struct QuiltArgs {
    /// Quilt top width (in)
    #[arg(long)]
    width: Option<String>,
    /// Quilt top length (in)
    #[arg(long)]
    length: Option<String>,
    /// Extra batting on each side (in)
    #[arg(long)]
    extra: Option<String>,
    /// Backing fabric width (in)
    #[arg(long)]
    backing_width: Option<String>,
    /// Binding fabric width (in)
    #[arg(long)]
    binding_fabric_width: Option<String>,
    /// Binding strip width (in)
    #[arg(long)]
    strip_width: Option<String>,
    /// Backing panel direction: vertical or horizontal
    #[arg(long)]
    orientation: Option<BackingOrientation>,
    /// Use 108" wideback fabric
    #[arg(long)]
    wideback: bool,
}

impl QuiltArgs {
    /// Apply the given values, as typed, to a fresh session.
    fn into_session(self, defaults: CalculatorDefaults) -> CalculatorSession {
        let mut session = CalculatorSession::new(defaults);
        let fields = [
            (FormField::QuiltWidth, self.width),
            (FormField::QuiltLength, self.length),
            (FormField::ExtraWidth, self.extra),
            (FormField::BackingFabricWidth, self.backing_width),
            (FormField::BindingFabricWidth, self.binding_fabric_width),
            (FormField::BindingStripWidth, self.strip_width),
        ];
        for (field, value) in fields {
            if let Some(text) = value {
                let _ = session.set_text(field, &text);
            }
        }
        if let Some(orientation) = self.orientation {
            let _ = session.set_orientation(orientation);
        }
        if self.wideback {
            let _ = session.set_wideback(true);
        }
        session
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let defaults = match &cli.config {
        Some(path) => CalculatorDefaults::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => CalculatorDefaults::default(),
    };
    debug!(?defaults, "calculator defaults");

    match cli.command {
        Command::Calc { quilt, json, layout } => run_calc(quilt.into_session(defaults), json, layout),
        Command::Layout {
            quilt,
            canvas_width,
            canvas_height,
            padding,
        } => {
            let mut defaults = defaults;
            if let Some(width) = canvas_width {
                defaults.canvas.width = width;
            }
            if let Some(height) = canvas_height {
                defaults.canvas.height = height;
            }
            if let Some(padding) = padding {
                defaults.canvas.padding = padding;
            }
            let session = quilt.into_session(defaults);
            let layout = current_layout(&session)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
            Ok(())
        }
        Command::Materials { store, action } => run_materials(store, action, defaults),
        Command::Interactive => run_interactive(defaults),
    }
}

fn run_calc(session: CalculatorSession, json: bool, with_layout: bool) -> Result<()> {
    let result = session.result().map_err(|e| anyhow::anyhow!(e.clone()))?;
    if json {
        if with_layout {
            let layout = current_layout(&session)?;
            let combined = serde_json::json!({ "result": result, "layout": layout });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        } else {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        return Ok(());
    }

    print_result(result);
    if with_layout {
        print_layout(&current_layout(&session)?);
    }
    Ok(())
}

fn current_layout(session: &CalculatorSession) -> Result<LayoutResult> {
    let layout = session
        .layout()
        .context("no diagram without a valid quilt size")?
        .context("laying out diagram")?;
    Ok(layout)
}

fn run_materials(store_path: PathBuf, action: MaterialsAction, defaults: CalculatorDefaults) -> Result<()> {
    let mut store = JsonFileStore::open(&store_path)
        .with_context(|| format!("opening store {}", store_path.display()))?;

    match action {
        MaterialsAction::List => {
            let list = load_materials_list(&store)?;
            print_materials(&list);
        }
        MaterialsAction::Add {
            name,
            quantity,
            price,
            category,
        } => {
            let mut list = load_materials_list(&store)?;
            let id = list.add(name, quantity, price, category.as_str());
            save_materials_list(&mut store, &list)?;
            info!(%id, "added material");
            println!("Added {}", id);
        }
        MaterialsAction::Remove { id } => {
            let mut list = load_materials_list(&store)?;
            let removed = list.remove(&id)?;
            save_materials_list(&mut store, &list)?;
            println!("Removed {} ({})", removed.name, removed.id);
        }
        MaterialsAction::Clear => {
            clear_materials_list(&mut store)?;
            println!("Materials list cleared");
        }
        MaterialsAction::AddResult { quilt } => {
            let session = quilt.into_session(defaults);
            let result = session.result().map_err(|e| anyhow::anyhow!(e.clone()))?;
            let mut list = load_materials_list(&store)?;
            let ids = list.add_from_result(result);
            save_materials_list(&mut store, &list)?;
            println!("Added {} items", ids.len());
            print_materials(&list);
        }
    }
    Ok(())
}

fn prompt_text(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn run_interactive(defaults: CalculatorDefaults) -> Result<()> {
    println!("QuiltCalc - Batting, Backing & Binding Calculator");
    println!("=================================================");
    println!("Press Enter to keep the value in brackets.");
    println!();

    let mut session = CalculatorSession::new(defaults);
    for field in FormField::ALL {
        let current = session.form().field(field).to_string();
        let text = prompt_text(field.label(), &current);
        let _ = session.set_text(field, &text);
    }

    let current = session.form().backing_orientation;
    let answer = prompt_text("Backing orientation (vertical/horizontal)", &current.to_string());
    if let Err(e) = apply_orientation_answer(&mut session, &answer) {
        println!("  {} - keeping {}", e, current);
    }
    let current = if session.form().wideback { "y" } else { "n" };
    let answer = prompt_text("Wideback 108\" backing? (y/n)", current);
    if !apply_wideback_answer(&mut session, &answer) {
        println!("  Expected y or n - keeping {}", current);
    }

    println!();
    match session.result() {
        Ok(result) => {
            print_result(result);
            if let Some(Ok(layout)) = session.layout() {
                print_layout(&layout);
            }
            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(e.clone())),
    }
}

/// Set the backing orientation from a prompt answer.
fn apply_orientation_answer(session: &mut CalculatorSession, answer: &str) -> Result<(), String> {
    let orientation = answer.parse::<BackingOrientation>()?;
    let _ = session.set_orientation(orientation);
    Ok(())
}

/// Set wideback from a y/n answer. Returns false, leaving it unchanged, for anything else.
fn apply_wideback_answer(session: &mut CalculatorSession, answer: &str) -> bool {
    let wideback = match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => return false,
    };
    let _ = session.set_wideback(wideback);
    true
}

fn print_result(result: &CalculationResult) {
    println!("═══════════════════════════════════════");
    println!("  QUILT MATERIALS");
    println!("═══════════════════════════════════════");
    for line in result.summary_lines() {
        println!("  {}", line);
    }
    println!("═══════════════════════════════════════");
}

fn print_layout(layout: &LayoutResult) {
    println!();
    println!("Diagram (scale {:.3} px/in):", layout.scale);
    for rect in &layout.rects {
        println!(
            "  {:<9} at ({:.1}, {:.1}) size {:.1} x {:.1}",
            role_name(rect.role),
            rect.origin.x,
            rect.origin.y,
            rect.width,
            rect.height
        );
    }
    for line in &layout.lines {
        println!(
            "  {:<9} ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            role_name(line.role),
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y
        );
    }
}

fn print_materials(list: &MaterialsList) {
    println!("Materials ({} items)", list.len());
    for item in &list.items {
        println!(
            "  [{}] {} - {} ({}) ${:.2}",
            item.id, item.name, item.quantity, item.category, item.price
        );
    }
    println!("Total: ${:.2}", list.total_cost());
}

fn role_name(role: LayoutRole) -> &'static str {
    match role {
        LayoutRole::QuiltTop => "Quilt",
        LayoutRole::Batting => "Batting",
        LayoutRole::Seam => "Seam",
        LayoutRole::Dimension => "Dimension",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_calc() {
        let cli = Cli::parse_from([
            "quiltcalc", "calc", "--width", "60", "--length", "72", "--orientation", "horizontal", "--json",
        ]);
        match cli.command {
            Command::Calc { quilt, json, .. } => {
                assert!(json);
                assert_eq!(quilt.orientation, Some(BackingOrientation::Horizontal));
                let session = quilt.into_session(CalculatorDefaults::default());
                assert_eq!(session.result().unwrap().batting_width_in, 66.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_omitted_args_keep_defaults() {
        let cli = Cli::parse_from(["quiltcalc", "calc", "--strip-width", ""]);
        match cli.command {
            Command::Calc { quilt, .. } => {
                let session = quilt.into_session(CalculatorDefaults::default());
                let result = session.result().unwrap();
                assert_eq!(result.backing_yards, 3.0);
                assert_eq!(result.binding_yards, 0.25);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flag_values_are_not_filtered() {
        let cli = Cli::parse_from([
            "quiltcalc", "calc", "--extra", "2.5", "--binding-fabric-width", "42.5", "--backing-width", "42.5",
        ]);
        let Command::Calc { quilt, .. } = cli.command else {
            panic!("expected calc");
        };
        let session = quilt.into_session(CalculatorDefaults::default());
        assert_eq!(session.form().extra_width, "2.5");
        assert_eq!(session.form().binding_fabric_width, "42.5");
        let result = session.result().unwrap();
        assert_eq!(result.batting_width_in, 53.0);
        assert_eq!(result.backing_fabric_width_in, 42.5);
    }

    #[test]
    fn test_negative_width_is_an_error() {
        let cli = Cli::parse_from(["quiltcalc", "calc", "--width=-48"]);
        let Command::Calc { quilt, .. } = cli.command else {
            panic!("expected calc");
        };
        let session = quilt.into_session(CalculatorDefaults::default());
        let err = session.result().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
        assert!(run_calc(session, false, false).is_err());
    }

    #[test]
    fn test_prompt_defaults_follow_settings() {
        let defaults = CalculatorDefaults {
            backing_orientation: BackingOrientation::Horizontal,
            wideback: true,
            ..CalculatorDefaults::default()
        };
        let mut session = CalculatorSession::new(defaults);

        // Pressing Enter answers with the value shown in brackets
        let shown = session.form().backing_orientation.to_string();
        apply_orientation_answer(&mut session, &shown).unwrap();
        assert_eq!(session.form().backing_orientation, BackingOrientation::Horizontal);
        let shown_wideback = if session.form().wideback { "y" } else { "n" };
        assert!(apply_wideback_answer(&mut session, shown_wideback));
        assert!(session.form().wideback);

        assert!(apply_orientation_answer(&mut session, "diagonal").is_err());
        assert_eq!(session.form().backing_orientation, BackingOrientation::Horizontal);
        assert!(!apply_wideback_answer(&mut session, "maybe"));
        assert!(session.form().wideback);

        assert!(apply_wideback_answer(&mut session, "No"));
        assert!(!session.form().wideback);
    }

    #[test]
    fn test_materials_subcommand() {
        let cli = Cli::parse_from(["quiltcalc", "materials", "--store", "x.json", "remove", "abc"]);
        match cli.command {
            Command::Materials { store, action } => {
                assert_eq!(store, PathBuf::from("x.json"));
                assert!(matches!(action, MaterialsAction::Remove { id } if id == "abc"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
