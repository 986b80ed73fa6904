use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;
use thingvec::cli::Cli;
use thingvec::replay::{self, Replayer};
use thingvec::thing_vector::{Thing, ThingVector, VectorError};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    pretty_env_logger::formatted_builder()
        .filter_level(cli.log_level())
        .parse_default_env()
        .try_init()
        .context("Failed to install logger")?;

    if cli.demo {
        println!("Running built-in scenarios...");
        run_all_scenarios().context("Scenarios failed")?;
        println!("All scenarios passed!");
    } else if let Some(file_path) = cli.file {
        run_script(&file_path).with_context(|| format!("Failed to replay script: {:?}", file_path))?;
    } else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
    }

    Ok(())
}

fn run_script(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!("File not found: {:?}", path));
    }
    if path.extension().and_then(|s| s.to_str()) != Some("ops") {
        return Err(anyhow!("File must have .ops extension: {:?}", path));
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    let ops = replay::parse_script(&source)?;
    log::info!("replaying {} ops from {:?}", ops.len(), path);

    let mut replayer = Replayer::new();
    for op in ops {
        println!("{}", replayer.apply(op));
    }
    Ok(())
}

fn run_all_scenarios() -> Result<()> {
    println!("--- Running Append/Remove Scenario ---");
    run_append_remove()?;

    println!("--- Running Empty Container Scenario ---");
    run_empty_container()?;

    println!("--- Running Shrink Scenario ---");
    run_shrink()?;

    Ok(())
}

fn check(cond: bool, what: &str) -> Result<()> {
    if !cond {
        bail!("check failed: {what}");
    }
    Ok(())
}

fn run_append_remove() -> Result<()> {
    let mut things = ThingVector::new();
    for i in 1..=5 {
        things.push(Thing::new(i));
    }
    println!("after appending 1..=5: {:?} (capacity {})", things, things.capacity());
    check(things.len() == 5, "len is 5")?;
    check(things.capacity() >= 5, "capacity holds 5")?;
    check(things.front().value() == 1, "front is 1")?;
    check(things.back().value() == 5, "back is 5")?;

    things.pop()?;
    things.pop()?;
    println!("after two removals: {:?}", things);
    let values: Vec<i64> = things.as_slice().iter().map(Thing::value).collect();
    check(values == [1, 2, 3], "remaining are [1, 2, 3]")
}

fn run_empty_container() -> Result<()> {
    let mut things = ThingVector::new();
    check(things.is_empty() && things.capacity() == 0, "starts empty")?;
    match things.at(0) {
        Err(err @ VectorError::IndexOutOfRange { .. }) => println!("at(0): {err}"),
        other => bail!("at(0) on empty returned {:?}", other),
    }
    match things.pop() {
        Err(VectorError::EmptyContainer) => println!("pop: {}", VectorError::EmptyContainer),
        other => bail!("pop on empty returned {:?}", other),
    }
    check(things.capacity() == 0, "failed pop keeps capacity")
}

fn run_shrink() -> Result<()> {
    let mut things = ThingVector::new();
    for i in 0..16 {
        things.push(Thing::new(i));
    }
    let mut last_capacity = things.capacity();
    while let Ok(thing) = things.pop() {
        if things.capacity() != last_capacity {
            println!(
                "popped {thing}: {} live, capacity {} -> {}",
                things.len(),
                last_capacity,
                things.capacity()
            );
            check(things.len() < last_capacity / 4, "shrinks below a quarter")?;
            last_capacity = things.capacity();
        }
    }
    check(things.capacity() == 2, "drained buffer keeps 2 slots")
}
