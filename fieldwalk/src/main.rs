use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use fieldwalk::{
    InterfaceDocument, Value, data,
    schema::{self, SchemaNode},
    walk,
};

#[derive(Parser, Debug)]
#[command(name = "fieldwalk", version, about = "Inspect form schemas and the data they describe")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial data for an interface document
    Defaults {
        interface: PathBuf,
        /// Only this section
        #[arg(short, long)]
        section: Option<String>,
    },
    /// List every field/value pair of a data file
    Walk {
        interface: PathBuf,
        data_file: PathBuf,
        /// Walk one section against the whole data file
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print the value at a path of a data file
    Get { data_file: PathBuf, path: String },
    /// Print the schema node at a path (starting at `sections`)
    Field { interface: PathBuf, path: String },
    /// Compare two data files
    Diff {
        a: PathBuf,
        b: PathBuf,
        /// Compare only these top-level keys
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// Print the JSON Schema of interface documents
    Schema,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Defaults { interface, section } => {
            let doc = load_interface(&interface)?;
            let out = match section {
                Some(name) => doc
                    .initialize_section(&name)
                    .with_context(|| format!("no section named {name:?}"))?,
                None => doc.initialize_all(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Walk {
            interface,
            data_file,
            section,
        } => {
            let doc = load_interface(&interface)?;
            let value = load_json(&data_file)?;
            let fields = match &section {
                Some(name) => doc
                    .section(name)
                    .and_then(|s| s.fields.as_ref())
                    .with_context(|| format!("section {name:?} has no fields"))?,
                None => &doc.sections,
            };
            walk::walk_with_paths(fields, &value, |path, field, value| {
                let shown = value.map_or_else(|| "-".to_string(), Value::to_string);
                println!("{path}\t{}\t{shown}", field.field_type);
            });
        }
        Command::Get { data_file, path } => {
            let value = load_json(&data_file)?;
            let Some(found) = data::value_by_path(&value, &path) else {
                bail!("nothing at {path:?}");
            };
            println!("{}", serde_json::to_string_pretty(found)?);
        }
        Command::Field { interface, path } => {
            let doc = load_interface(&interface)?;
            let out = match schema::field_by_path(&doc.sections, &path) {
                Some(SchemaNode::Tree(tree)) => serde_json::to_value(tree)?,
                Some(SchemaNode::Field(field)) => serde_json::to_value(field)?,
                Some(SchemaNode::Type(field_type)) => Value::String(field_type.to_string()),
                Some(SchemaNode::Multiple(flag)) => Value::Bool(flag),
                Some(SchemaNode::Attribute(value)) => value.clone(),
                None => bail!("no field at {path:?}"),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Diff { a, b, keys } => {
            let left = load_json(&a)?;
            let right = load_json(&b)?;
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            let filter = (!keys.is_empty()).then_some(keys.as_slice());
            if data::differs(&left, &right, filter) {
                println!("different");
                return Ok(ExitCode::FAILURE);
            }
            println!("same");
        }
        Command::Schema => {
            let schema = InterfaceDocument::json_schema()?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_interface(path: &Path) -> anyhow::Result<InterfaceDocument> {
    InterfaceDocument::load(path, env!("CARGO_PKG_VERSION"))
        .with_context(|| format!("Failed to load interface {}", path.display()))
}

fn load_json(path: &Path) -> anyhow::Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}
