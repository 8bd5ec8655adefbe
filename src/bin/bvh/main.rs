//! BVH CLI - Build and check BVH documents from JSON descriptions.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use bvh_builder::hierarchy;
use bvh_builder::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("bvh-cli");

    // Parse global flags
    let mut level = "warn";
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            "-V" | "--version" => {
                println!(
                    "bvh-cli {} ({}, built {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("BVH_GIT_REVISION"),
                    env!("BVH_BUILD_DATE")
                );
                return;
            }
            _ => filtered_args.push(arg),
        }
    }
    init_tracing(level);

    if filtered_args.is_empty() {
        print_usage(prog);
        return;
    }

    let result = match filtered_args[0] {
        "build" | "b" => match parse_io(&filtered_args[1..]) {
            Some((input, output)) => cmd_build(input, output),
            None => usage_error(prog, "build <doc.json> [-o out.bvh]"),
        },
        "check" | "c" => match filtered_args.get(1) {
            Some(input) => cmd_check(input),
            None => usage_error(prog, "check <doc.json>"),
        },
        "demo" | "d" => match parse_output(&filtered_args[1..]) {
            Some(output) => cmd_demo(output),
            None => usage_error(prog, "demo [-o out.bvh]"),
        },
        "help" | "h" | "-h" | "--help" => {
            print_usage(prog);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(prog);
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage(prog: &str) {
    println!("BVH CLI - Build BVH motion capture documents");
    println!();
    println!("Usage: {} [options] <command> [args]", prog);
    println!();
    println!("Commands:");
    println!("  b, build <doc.json> [-o out.bvh]  Render a JSON document as BVH");
    println!("  c, check <doc.json>               Validate the hierarchy and print counts");
    println!("  d, demo [-o out.bvh]              Render the built-in sample document");
    println!("  h, help                           Show this help");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Debug output");
    println!("  -vv, --trace   Trace output (very verbose)");
    println!("  -q, --quiet    Errors only");
    println!("  -V, --version  Show version");
    println!();
    println!("Without -o the document is written to stdout. RUST_LOG overrides the log level.");
}

fn usage_error(prog: &str, usage: &str) -> anyhow::Result<()> {
    bail!("usage: {} {}", prog, usage)
}

/// `<input> [-o <output>]`
fn parse_io<'a>(args: &[&'a str]) -> Option<(&'a str, Option<&'a str>)> {
    let (input, rest) = args.split_first()?;
    if input.starts_with('-') {
        return None;
    }
    Some((*input, parse_output(rest)?))
}

/// `[-o <output>]`, `None` when malformed.
fn parse_output<'a>(args: &[&'a str]) -> Option<Option<&'a str>> {
    match args {
        [] => Some(None),
        ["-o" | "--output", path] => Some(Some(*path)),
        _ => None,
    }
}

fn load_document(path: &str) -> anyhow::Result<BvhDocument> {
    info!("Reading document: {}", path);
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let doc = BvhDocument::from_json(&json).with_context(|| format!("failed to parse {}", path))?;
    debug!("Document has {} frames", doc.frames.len());
    Ok(doc)
}

fn emit(text: &str, output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(Path::new(path), text).with_context(|| format!("failed to write {}", path))?;
            info!("Wrote {} bytes to {}", text.len(), path);
            println!("{} file has been created", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn cmd_build(input: &str, output: Option<&str>) -> anyhow::Result<()> {
    let doc = load_document(input)?;
    let text = doc.to_bvh().with_context(|| format!("invalid document {}", input))?;
    emit(&text, output)
}

fn cmd_check(input: &str) -> anyhow::Result<()> {
    let doc = load_document(input)?;
    let Some(root) = doc.hierarchy.as_ref() else {
        bail!("{}: {}", input, Error::NullHierarchy);
    };
    let channel_count = hierarchy::validate(root).with_context(|| format!("invalid hierarchy in {}", input))?;

    println!("Document: {}", input);
    println!("  Root:      {}", root.name());
    println!("  Joints:    {}", root.joint_count());
    println!("  End sites: {}", root.end_site_count());
    let (positions, rotations) = channel_split(root);
    println!("  Channels:  {} ({} position, {} rotation)", channel_count, positions, rotations);
    println!("  Frames:    {}", doc.frames.len());
    if doc.frame_time > 0.0 {
        let mut motion = Motion::new(doc.frame_time);
        motion.frames = doc.frames.iter().map(|f| Frame::from(f.as_slice())).collect();
        println!("  Duration:  {:.3}s", motion.duration());
    }

    let bad: Vec<usize> = doc
        .frames
        .iter()
        .enumerate()
        .filter(|(_, f)| f.len() != channel_count)
        .map(|(i, _)| i)
        .collect();
    if !bad.is_empty() {
        bail!("{} frame(s) do not have {} values: {:?}", bad.len(), channel_count, bad);
    }
    Ok(())
}

/// Position and rotation channel totals over the tree.
fn channel_split(node: &Node) -> (usize, usize) {
    let own = node.channels();
    let mut positions = own.iter().filter(|c| c.is_position()).count();
    let mut rotations = own.iter().filter(|c| c.is_rotation()).count();
    for child in node.children() {
        let (p, r) = channel_split(child);
        positions += p;
        rotations += r;
    }
    (positions, rotations)
}

fn cmd_demo(output: Option<&str>) -> anyhow::Result<()> {
    let text = BvhDocument::demo().to_bvh()?;
    emit(&text, output)
}
