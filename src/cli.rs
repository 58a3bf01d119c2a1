use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Hyperliquid docs pipeline - generate OpenAPI documents from the SDK source and publish them
#[derive(Parser, Debug)]
#[command(name = "hl-docs")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Hyperliquid SDK checkout
    #[arg(value_name = "SDK_PATH")]
    pub sdk_path: PathBuf,

    /// Table-of-contents document whose API section is regenerated
    #[arg(short = 't', long = "toc", value_name = "FILE")]
    pub toc_path: PathBuf,

    /// Also write each generated document into this directory
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Output format for --out-dir dumps
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Operations to exclude, in addition to the built-in skip list
    #[arg(long = "skip", value_name = "METHOD")]
    pub skip: Vec<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.sdk_path.is_dir() {
        anyhow::bail!(
            "SDK path is not a directory: {}",
            args.sdk_path.display()
        );
    }

    if !args.toc_path.is_file() {
        anyhow::bail!(
            "Table-of-contents file does not exist: {}",
            args.toc_path.display()
        );
    }

    info!("SDK path: {}", args.sdk_path.display());
    info!("ToC file: {}", args.toc_path.display());
    if let Some(ref out_dir) = args.out_dir {
        info!("Dump directory: {} ({:?})", out_dir.display(), args.output_format);
    }
    if !args.skip.is_empty() {
        info!("Extra skipped operations: {:?}", args.skip);
    }

    Ok(args)
}

/// Resolves, converts, and assembles one OpenAPI document per registered
/// operation that survives the skip list.
pub fn generate_specs(
    source: &crate::source::SdkSource,
    skip: &[String],
) -> crate::error::Result<crate::openapi::SpecMap> {
    use crate::openapi::{build_document, SpecMap};
    use crate::registry::{self, Endpoint};
    use crate::resolver;
    use crate::schema::SchemaConverter;
    use crate::symbols::SymbolTable;
    use crate::types::TypeResolver;

    let mut specs = SpecMap::new();

    for endpoint in Endpoint::ALL {
        let methods = registry::methods(endpoint, skip);
        info!("Generating {} documents for {}", methods.len(), endpoint);

        let client_file = source.client_file(endpoint)?;
        let symbols = SymbolTable::from_file(client_file);
        let mut converter = SchemaConverter::new(TypeResolver::new(source.files()));

        let mut documents = std::collections::BTreeMap::new();
        for method in methods {
            debug!("Processing {}/{}", endpoint, method);
            let resolved = resolver::resolve(&symbols, converter.types(), endpoint, method)?;
            let pair = converter.convert_pair(&resolved.request, &resolved.response)?;
            documents.insert(method.to_string(), build_document(endpoint, method, &pair));
        }
        specs.insert(endpoint, documents);
    }

    Ok(specs)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::config::PublishConfig;
    use crate::publisher::{self, GitBookClient};
    use crate::registry::DEFAULT_SKIP;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
    use crate::source::SdkSource;
    use crate::toc;

    info!("Starting documentation generation...");

    // Fail on missing credentials before any work happens.
    let config = PublishConfig::from_env()?;

    let mut skip: Vec<String> = DEFAULT_SKIP.iter().map(|s| s.to_string()).collect();
    skip.extend(args.skip.iter().cloned());

    // Step 1: Load and parse the SDK checkout
    info!("Loading SDK source...");
    let source = SdkSource::load(&args.sdk_path)?;
    info!("Parsed {} SDK source files", source.files().len());

    // Step 2: Resolve schemas and assemble OpenAPI documents
    info!("Generating OpenAPI documents...");
    let specs = generate_specs(&source, &skip)?;
    let total: usize = specs.values().map(|methods| methods.len()).sum();
    info!("Assembled {} documents", total);

    // Step 3: Optional local dumps
    if let Some(out_dir) = &args.out_dir {
        info!("Writing documents to {}", out_dir.display());
        for (endpoint, methods) in &specs {
            for (method, document) in methods {
                let (content, extension) = match args.output_format {
                    OutputFormat::Json => (serialize_json(document)?, "json"),
                    OutputFormat::Yaml => (serialize_yaml(document)?, "yaml"),
                };
                let path = out_dir.join(format!("{}.{}", endpoint.slug(method), extension));
                write_to_file(&content, &path)?;
            }
        }
    }

    // Step 4: Regenerate the ToC section
    info!("Updating table of contents...");
    let toc_content = std::fs::read_to_string(&args.toc_path)?;
    let updated = toc::update_api_section(&toc_content, &specs)?;
    write_to_file(&updated, &args.toc_path)?;

    // Step 5: Reconcile the remote collection
    info!("Publishing to documentation host...");
    let host = GitBookClient::new(&config)?;
    let report = publisher::sync(&host, &specs)?;

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Documents: {}", total);
    info!("  - Deleted remotely: {}", report.deleted.len());
    info!("  - Created remotely: {}", report.created.len());
    info!("  - Updated remotely: {}", report.updated.len());

    Ok(())
}
