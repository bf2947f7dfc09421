use clap::Parser;
use mtss_flow::prelude::*;
use mtss_flow::render::format_view;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Replays editing commands against an RTI/MTSS flow document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow document JSON file (created on save if missing)
    document_path: Option<String>,

    /// JSON array of editor commands to replay
    #[arg(short, long)]
    script: Option<String>,

    /// Editor configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Additional templates (JSON array) registered next to the built-in ones
    #[arg(short, long)]
    templates: Option<String>,

    /// Where to write the resulting document (defaults to the input path)
    #[arg(short, long)]
    output: Option<String>,

    /// Log history transitions
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for commands
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let document_path = cli.document_path.clone().unwrap_or_else(|| {
        if cli.human {
            prompt_for_input("Enter flow document path", Some("data/flow.json"))
        } else {
            exit_with_error("Document path is required in non-interactive mode.")
        }
    });

    let mut editor = open_editor(&cli, &document_path);

    if cli.human {
        run_interactive(&mut editor, &document_path);
    } else {
        run_script(&cli, &mut editor, &document_path);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn open_editor(cli: &Cli, document_path: &str) -> FlowEditor {
    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };

    let mut templates = TemplateLibrary::builtin();
    if let Some(path) = &cli.templates {
        let extra = TemplateLibrary::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load templates: {}", e)));
        templates.merge(extra);
    }

    let builder = FlowEditor::builder()
        .with_config(config)
        .with_templates(templates);

    if fs::metadata(document_path).is_ok() {
        builder
            .open(&JsonFileStore::new(document_path))
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to open flow: {}", e)))
    } else {
        println!(
            "No document at '{}'. Starting with an empty flow.",
            document_path
        );
        builder.build()
    }
}

/// Runs the CLI in non-interactive mode, replaying a command script.
fn run_script(cli: &Cli, editor: &mut FlowEditor, document_path: &str) {
    let total_start = Instant::now();

    let commands = match &cli.script {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read script file '{}': {}", path, e))
            });
            EditorCommand::parse_script(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse script: {}", e)))
        }
        None => Vec::new(),
    };

    println!("Replaying {} command(s)...", commands.len());
    let replay_start = Instant::now();
    editor
        .dispatch_all(commands)
        .unwrap_or_else(|e| exit_with_error(&format!("Command failed: {}", e)));
    let replay_duration = replay_start.elapsed();

    print!("\n{}", format_view(&editor.view()));

    let output = cli.output.as_deref().unwrap_or(document_path);
    if editor.is_dirty() || cli.output.is_some() {
        editor
            .save(&JsonFileStore::new(output))
            .unwrap_or_else(|e| exit_with_error(&format!("Save failed: {}", e)));
        println!("\nSaved flow to '{}'", output);
    } else {
        println!("\nNo changes to save.");
    }

    let history = editor.history();
    println!("\n--- History Summary ---");
    println!("Entries:              {}", history.len());
    println!(
        "Cursor:               {}",
        history
            .cursor()
            .map_or("-".to_string(), |c| c.to_string())
    );
    println!("Can Undo / Redo:      {} / {}", editor.can_undo(), editor.can_redo());
    println!("Replay:               {:?}", replay_duration);
    println!("Total Execution:      {:?}", total_start.elapsed());
    println!();
}

/// Runs the CLI as a small line-oriented editor.
fn run_interactive(editor: &mut FlowEditor, document_path: &str) {
    println!("--- Flow Editor Interactive Mode ---");
    println!(
        "Commands: show, undo, redo, connect A B, template NAME, templates, remove NODE, \
         move NODE X Y, save, quit"
    );

    loop {
        let Some(line) = read_command() else {
            break;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["show"] => print!("{}", format_view(&editor.view())),
            ["undo"] => {
                if !editor.undo() {
                    println!("Nothing to undo.");
                }
            }
            ["redo"] => {
                if !editor.redo() {
                    println!("Nothing to redo.");
                }
            }
            ["connect", source, target] => {
                editor.on_connect(source, target);
                println!("Connected {} -> {}", source, target);
            }
            ["template", name] => match editor.apply_named_template(name) {
                Ok(()) => println!("Applied template '{}'", name),
                Err(e) => println!("Error: {}", e),
            },
            ["templates"] => {
                for name in editor.templates().names() {
                    println!("  {}", name);
                }
            }
            ["remove", id] => editor.remove_node(id),
            ["move", id, x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => {
                    editor.on_nodes_change(&[NodeChange::position(*id, Position::new(x, y))])
                }
                _ => println!("Coordinates must be numbers."),
            },
            ["save"] => match editor.save(&JsonFileStore::new(document_path)) {
                Ok(()) => println!("Saved to '{}'", document_path),
                Err(e) => println!("Save failed: {}", e),
            },
            ["quit"] | ["exit"] => {
                if editor.is_dirty() {
                    println!("Warning: quitting with unsaved changes.");
                }
                break;
            }
            _ => println!("Unknown command: {}", line),
        }
    }
}

/// Reads one command line. Returns `None` once stdin is closed.
fn read_command() -> Option<String> {
    let mut line = String::new();
    print!("flow> ");
    io::stdout().flush().ok()?;
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
