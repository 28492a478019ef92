// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::{Context, Result};
use dagwood_modules::config::{load_and_validate_config, RuntimeBuilder};
use dagwood_modules::modules::{register_builtin_modules, ModuleRegistry};
use dagwood_modules::segment::SegmentBuilder;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <graph.yaml> [graph2.yaml ...]", program);
    eprintln!("       {} --list", program);
    eprintln!("Example: {} graphs/ingest.yaml", program);
}

fn print_registered_modules(registry: &ModuleRegistry) {
    for (namespace, ids) in registry.registered_modules() {
        println!("{}:", namespace);
        for id in ids {
            println!("  {}", id);
        }
    }
}

fn print_segment(path: &str, segment: &SegmentBuilder) {
    println!("{} (segment '{}')", path, segment.name());
    for name in segment.object_names() {
        let module_type = segment
            .module(name)
            .map(|module| module.module_type())
            .unwrap_or("object");
        println!("  {} [{}]", name, module_type);
    }
    for edge in segment.edges() {
        println!("  {} -> {} ({:?})", edge.source, edge.sink, edge.kind);
    }
}

fn assemble(path: &str) -> Result<SegmentBuilder> {
    let cfg = load_and_validate_config(path)
        .with_context(|| format!("failed to load graph description {}", path))?;
    let segment = RuntimeBuilder::from_config(&cfg, ModuleRegistry::global())
        .with_context(|| format!("failed to assemble {}", path))?;
    Ok(segment)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let registry = ModuleRegistry::global();
    register_builtin_modules(registry).context("failed to register built-in modules")?;

    if args[1] == "--list" {
        print_registered_modules(registry);
        return Ok(());
    }

    // Graph files are independent; assemble them side by side.
    let tasks: Vec<_> = args[1..]
        .iter()
        .cloned()
        .map(|path| {
            tokio::task::spawn_blocking(move || {
                let result = assemble(&path);
                (path, result)
            })
        })
        .collect();

    let mut failures = 0;
    for task in tasks {
        let (path, result) = task.await.context("graph assembly task panicked")?;
        match result {
            Ok(segment) => print_segment(&path, &segment),
            Err(e) => {
                failures += 1;
                eprintln!("❌ {:#}", e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} graph descriptions failed", failures, args.len() - 1);
    }
    Ok(())
}
