// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

mod graph;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use graph::{parse_scalar, TypeGraph};
use std::path::{Path, PathBuf};
use typewalk::builtins::published_types;
use typewalk::lookup::{lookup_special_method, lookup_special_or_default};
use typewalk::object::Object;
use typewalk::{Error, Value};

#[derive(Parser)]
#[command(name = "typewalk-inspect")]
#[command(about = "Inspect special attribute resolution over a YAML type graph")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the search order of a type
    Mro {
        /// Type graph YAML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Type name
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Resolve a special attribute on a fresh instance of a type
    Lookup {
        /// Type graph YAML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Type name
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Attribute name
        #[arg(value_name = "NAME")]
        name: String,

        /// Value returned when the attribute is missing
        #[arg(long, value_name = "STR", conflicts_with = "method")]
        default: Option<String>,

        /// Use the method-lookup form (missing prints None)
        #[arg(long)]
        method: bool,

        /// Instance assignment applied before the lookup (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        assignments: Vec<String>,

        /// Call the result with no arguments and print the return value
        #[arg(long)]
        call: bool,
    },

    /// List the published built-in type names
    Builtins,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Mro { input, type_name } => cmd_mro(&input, &type_name)?,
        Commands::Lookup {
            input,
            type_name,
            name,
            default,
            method,
            assignments,
            call,
        } => {
            let request = LookupRequest {
                type_name,
                name,
                default,
                method,
                assignments,
                call,
            };
            cmd_lookup(&input, &request)?
        }
        Commands::Builtins => cmd_builtins(),
    };
    println!("{}", output);
    Ok(())
}

fn cmd_mro(input: &Path, type_name: &str) -> anyhow::Result<String> {
    let graph = TypeGraph::load(input)?;
    let ty = graph.resolve(type_name)?;
    let names: Vec<&str> = ty.search_order().map(|t| t.name()).collect();
    Ok(names.join(" -> "))
}

struct LookupRequest {
    type_name: String,
    name: String,
    default: Option<String>,
    method: bool,
    assignments: Vec<String>,
    call: bool,
}

fn cmd_lookup(input: &Path, request: &LookupRequest) -> anyhow::Result<String> {
    let graph = TypeGraph::load(input)?;
    run_lookup(&graph, request)
}

fn run_lookup(graph: &TypeGraph, request: &LookupRequest) -> anyhow::Result<String> {
    let ty = graph.resolve(&request.type_name)?;
    let obj = Object::new(&ty);
    for assignment in &request.assignments {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", assignment))?;
        obj.set_attr(name, parse_scalar(value));
    }

    let instance = Value::Object(obj);
    let name = Value::str(&request.name);
    let result = if request.method {
        lookup_special_method(&instance, &name)
    } else {
        let default = request.default.as_deref().map(Value::str);
        lookup_special_or_default(&instance, &name, default.as_ref())
    };
    let value = result.map_err(|e| anyhow!(describe(&e)))?;

    if !request.call {
        return Ok(value.to_string());
    }
    let returned = value
        .call(&[])
        .map_err(|e| anyhow!(describe(&e)))
        .with_context(|| format!("calling {}", value))?;
    Ok(returned.to_string())
}

/// Host-style rendering: `ExceptionName: message`.
fn describe(err: &Error) -> String {
    match err {
        Error::Raised { .. } => err.to_string(),
        other => format!("{}: {}", other.exception_name(), other),
    }
}

fn cmd_builtins() -> String {
    published_types()
        .iter()
        .map(|(name, ty)| format!("{:<24}{}", name, ty.name()))
        .collect::<Vec<_>>()
        .join("\n")
}
