//! sigmoid-mlp: evaluate sigmoid perceptrons and multi-layer networks.
//!
//! ```bash
//! # AND / OR neurons and the XOR network
//! cargo run -- gates
//!
//! # Forward pass through a network described by a JSON spec
//! cargo run -- run --spec demos/xor.json --input 0,1
//!
//! # Dump the weights of a spec
//! cargo run -- weights --spec demos/xor.json
//! ```

mod gates;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::info;

use sigmoid_mlp::NetworkSpec;

#[derive(Parser)]
#[command(
    name = "sigmoid-mlp",
    version,
    about = "Forward evaluation of sigmoid perceptron networks"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the AND, OR and XOR truth tables
    Gates,
    /// Run one input vector through the network described by a JSON spec
    Run {
        /// Network spec (layer_sizes, bias, weights)
        #[arg(short, long)]
        spec: String,

        /// Comma-separated input values, e.g. 0,1 or -1,0.5
        #[arg(short, long, allow_hyphen_values = true)]
        input: String,

        /// Print the output vector as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every neuron's weights
    Weights {
        #[arg(short, long)]
        spec: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Command::Gates => print_gates(),
        Command::Run { spec, input, json } => run_spec(&spec, &parse_input(&input)?, json),
        Command::Weights { spec } => {
            let network = load_spec(&spec)?.build().context("failed to build network")?;
            print!("{network}");
            Ok(())
        }
    }
}

fn load_spec(path: &str) -> Result<NetworkSpec> {
    let spec = NetworkSpec::load_json(path).with_context(|| format!("failed to read spec {path}"))?;
    info!("loaded spec {path}: layers {:?}, bias {}", spec.layer_sizes, spec.bias);
    Ok(spec)
}

/// Parses `"-1, 0.5,2"` into `[-1.0, 0.5, 2.0]`.
fn parse_input(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f64>()
                .with_context(|| format!("invalid input value {field:?} in {text:?}"))
        })
        .collect()
}

fn run_spec(path: &str, input: &[f64], json: bool) -> Result<()> {
    let mut network = load_spec(path)?.build().context("failed to build network")?;
    let output = network.run(input).context("forward pass failed")?;

    if json {
        println!("{}", serde_json::to_string(output)?);
    } else {
        let values: Vec<String> = output.iter().map(|v| format!("{v:.10}")).collect();
        println!("{}", values.join(" "));
    }
    Ok(())
}

fn print_row(input: &[f64; 2], output: f64) {
    println!("{} {} = {:.10}", input[0], input[1], output);
}

fn print_gates() -> Result<()> {
    println!("AND Gate:");
    for (input, output) in gates::neuron_truth_table(&gates::and_neuron())? {
        print_row(&input, output);
    }

    println!("\nOR Gate:");
    for (input, output) in gates::neuron_truth_table(&gates::or_neuron())? {
        print_row(&input, output);
    }

    let mut network = gates::xor_network()?;
    println!();
    print!("{network}");
    println!("\nMLP:");
    for (input, output) in gates::network_truth_table(&mut network)? {
        print_row(&input, output);
    }
    Ok(())
}
