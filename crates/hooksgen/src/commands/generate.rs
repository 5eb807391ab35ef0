use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use hooksgen_core::DocumentFile;
use hooksgen_core::GeneratorConfig;
use hooksgen_core::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="JSON file with generator options (`idType`, `scalarTypes`, \
             `subscriptions`). Flags given on the command line take \
             precedence over values in this file.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL documents or directories \
             containing GraphQL documents to generate bindings for.",
        name="DOCUMENT_PATHS",
        required=true,
    )]
    document_paths: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="TypeScript type to use for the GraphQL `ID` scalar.",
        long,
    )]
    id_type: Option<String>,

    #[arg(
        help="File to write the generated TypeScript module to. Writes to \
             stdout when omitted.",
        long,
        short='o',
    )]
    out: Option<PathBuf>,

    #[arg(
        help="Maps a custom GraphQL scalar to a TypeScript type. May be \
             repeated.",
        long="scalar",
        value_name="NAME=TS_TYPE",
        value_parser=parse_scalar_mapping,
    )]
    scalars: Vec<(String, String)>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing schema files.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Allow `subscription` operations and emit the subscription \
             runtime glue.",
        long,
    )]
    subscriptions: bool,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let summary = match self.generate() {
            Ok(summary) => summary,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Generation failed: {e:#}",
                output_utils::RED_X,
            )),
        };

        match &self.out {
            Some(out_path) => {
                if let Err(e) = std::fs::write(out_path, summary.output.as_bytes()) {
                    return CommandResult::stderr(format_args!(
                        "{} Failed to write {out_path:#?}: {e}",
                        output_utils::RED_X,
                    ));
                }
                CommandResult::stdout(format_args!(
                    "{}\n  * Wrote {out_path:#?}.",
                    summary,
                ))
            },

            None => CommandResult::with_summary(
                summary.output.to_owned(),
                format_args!("{summary}"),
            ),
        }
    }
}

impl GenerateCmd {
    fn generate(&self) -> anyhow::Result<GenerateSummary> {
        let config = self.load_config()?;
        let graphql_file_exts = normalize_exts(&self.graphql_file_exts);

        let schema_paths = collect_graphql_files(&self.schema, &graphql_file_exts)?;
        anyhow::ensure!(
            !schema_paths.is_empty(),
            "No schema files found under {:?}.",
            self.schema,
        );
        log::debug!("Loading {} schema files...", schema_paths.len());
        let schema = SchemaBuilder::from_files(schema_paths.as_slice())?
            .build()
            .context("Failed to build the GraphQL schema")?;

        let document_paths =
            collect_graphql_files(&self.document_paths, &graphql_file_exts)?;
        log::debug!("Parsing {} document files...", document_paths.len());
        let documents = document_paths.iter()
            .map(DocumentFile::from_file)
            .collect::<Result<Vec<_>, _>>()?;

        let ir = hooksgen_core::transform(&schema, &documents, &config)?;
        let output = hooksgen_core::format(&ir, &config);

        Ok(GenerateSummary {
            num_files: ir.files().len(),
            num_fragments: ir.fragment_count(),
            num_input_types: ir.input_types().len(),
            num_operations: ir.operation_count(),
            output,
        })
    }

    fn load_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(config_path) => {
                let content = std::fs::read_to_string(config_path)
                    .with_context(|| format!("Failed to read {config_path:#?}"))?;
                serde_json::from_str::<GeneratorConfig>(content.as_str())
                    .with_context(|| format!("Invalid config file {config_path:#?}"))?
            },
            None => GeneratorConfig::default(),
        };
        apply_overrides(
            &mut config,
            self.id_type.as_deref(),
            &self.scalars,
            self.subscriptions,
        );
        Ok(config)
    }
}

#[derive(Debug)]
struct GenerateSummary {
    num_files: usize,
    num_fragments: usize,
    num_input_types: usize,
    num_operations: usize,
    output: String,
}
impl std::fmt::Display for GenerateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            concat!(
                "{} Generated hooks successfully:\n",
                "  * Processed {} document files.\n",
                "  * Generated {} operations.\n",
                "  * Generated {} fragments.\n",
                "  * Generated {} input types.",
            ),
            output_utils::GREEN_CHECK,
            self.num_files,
            self.num_operations,
            self.num_fragments,
            self.num_input_types,
        )
    }
}

pub(super) fn apply_overrides(
    config: &mut GeneratorConfig,
    id_type: Option<&str>,
    scalars: &[(String, String)],
    subscriptions: bool,
) {
    if let Some(id_type) = id_type {
        config.id_type = Some(id_type.to_string());
    }
    for (scalar_name, ts_type) in scalars {
        config.scalar_types.insert(scalar_name.to_owned(), ts_type.to_owned());
    }
    if subscriptions {
        config.subscriptions = true;
    }
}

pub(super) fn parse_scalar_mapping(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, ts_type))
            if !name.trim().is_empty() && !ts_type.trim().is_empty() =>
            Ok((name.trim().to_string(), ts_type.trim().to_string())),
        _ => Err(format!("expected `NAME=TS_TYPE`, got `{arg}`")),
    }
}

pub(super) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Finds every GraphQL file at or under each of `paths`.
///
/// Files named directly are always included. Files found by walking a
/// directory are filtered by `graphql_file_exts`. Paths are kept as they were
/// given (relative stays relative) so that generated section headers don't
/// depend on where the project is checked out. The result is sorted, and a
/// file reached through two different paths is kept once.
pub(super) fn collect_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> anyhow::Result<Vec<PathBuf>> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut seen_canonical_paths: HashSet<PathBuf> = HashSet::new();
    let mut file_paths = vec![];
    let mut add_file = |file_path: &Path| -> anyhow::Result<()> {
        if seen_canonical_paths.insert(canonicalize(file_path)?) {
            file_paths.push(file_path.to_path_buf());
        }
        Ok(())
    };

    for path in paths {
        if path.is_file() {
            add_file(path.as_path())?;
            continue;
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!(
                "Failed to scan files at/under {path:#?}"
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let ext_matches = entry_path.extension()
                .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
            if ext_matches {
                log::trace!("Found file at {entry_path:#?}.");
                add_file(entry_path)?;
            } else {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
            }
        }
    }

    file_paths.sort();
    Ok(file_paths)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:#?}"))
}
