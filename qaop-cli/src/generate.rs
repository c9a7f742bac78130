//! Generate command implementation for the `qaop` CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use qaop_netgen::{DEFAULT_OUTPUT_PATH, GeneratorConfig, generate_network, write_network};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_GENERATE_K_NEAREST, ARG_GENERATE_NODES, ARG_GENERATE_OUT, ARG_GENERATE_SEED, CliError,
};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "generate",
    long_about = "Scatter nodes over the Arctic box (lat 60..80, lon -150..50) \
                 with a seeded generator, link each node to its nearest \
                 neighbours and write the network as pretty JSON.",
    about = "Write a synthetic Arctic network"
)]
#[ortho_config(prefix = "QAOP")]
pub(crate) struct GenerateArgs {
    /// Number of nodes to place.
    #[arg(long = ARG_GENERATE_NODES, value_name = "count")]
    #[serde(default)]
    pub(crate) nodes: Option<usize>,
    /// Auxiliary edges per node.
    #[arg(long = ARG_GENERATE_K_NEAREST, value_name = "count")]
    #[serde(default)]
    pub(crate) k_nearest: Option<usize>,
    /// Seed for the random number generator.
    #[arg(long = ARG_GENERATE_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Output file.
    #[arg(long = ARG_GENERATE_OUT, value_name = "path")]
    #[serde(default)]
    pub(crate) out: Option<Utf8PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(GenerateConfig::from(merged))
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GenerateConfig {
    /// Generator settings.
    pub(crate) generator: GeneratorConfig,
    /// Where the network is written.
    pub(crate) out: Utf8PathBuf,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(args: GenerateArgs) -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            generator: GeneratorConfig {
                nodes: args.nodes.unwrap_or(defaults.nodes),
                k_nearest: args.k_nearest.unwrap_or(defaults.k_nearest),
                seed: args.seed.unwrap_or(defaults.seed),
                ..defaults
            },
            out: args
                .out
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_generate_with(args, &mut stdout)
}

pub(crate) fn run_generate_with(
    args: GenerateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let network = generate_network(&config.generator)?;
    write_network(&config.out, &network)?;
    writeln!(
        writer,
        "wrote {} nodes and {} edges to {}",
        network.len(),
        network.edges.len(),
        config.out
    )
    .map_err(CliError::WriteOutput)
}
