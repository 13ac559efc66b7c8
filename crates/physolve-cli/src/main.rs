use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use physolve_lang::{new_entity, Entity, Resolved};

#[derive(Parser)]
#[command(name = "physolve")]
#[command(about = "Solve vector and kinematics unknowns from free-text tokens", long_about = None)]
#[command(version)]
struct Cli {
    /// Entity type: vector, single_acc (single), multi_vector
    kind: String,

    /// Tokens such as `3x -4y hyp`; a bare name is the target. Put flags before the tokens.
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Combine with another entity, e.g. --combine "vector -1x 1y" (repeatable)
    #[arg(long = "combine", value_name = "TYPE TOKENS")]
    combine: Vec<String>,

    /// Target to resolve after combining
    #[arg(long)]
    target: Option<String>,

    /// Resolve this parameter of an entity-valued result (e.g. `--target res --yield mag`)
    #[arg(long = "yield", value_name = "PARAM")]
    yield_param: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log only errors
    #[arg(short, long)]
    quiet: bool,
}

/// What a run produces: the entity itself when nothing was targeted, else a value.
#[derive(Debug)]
enum Output {
    Entity(Entity),
    Value(Resolved),
}

fn parse_entity(desc: &str) -> Result<Entity> {
    let mut words = desc.split_whitespace();
    let tag = words
        .next()
        .ok_or_else(|| anyhow!("empty entity description"))?;
    let tokens: Vec<&str> = words.collect();
    Ok(new_entity(tag, &tokens)?)
}

fn evaluate(cli: &Cli) -> Result<Output> {
    let mut entity = new_entity(&cli.kind, &cli.tokens)?;
    for desc in &cli.combine {
        let other = parse_entity(desc).with_context(|| format!("--combine {desc:?}"))?;
        entity = entity.combined_with(&other)?;
    }
    if let Some(target) = &cli.target {
        entity.set_target(target.as_str());
    }
    if entity.target().is_none() {
        if let Some(param) = &cli.yield_param {
            bail!("--yield {param} needs a target; pass --target or a bare name");
        }
        return Ok(Output::Entity(entity));
    }

    let result = entity.resolve()?;
    match (&cli.yield_param, result) {
        (None, result) => Ok(Output::Value(result)),
        (Some(param), Resolved::Entity(nested)) => Ok(Output::Value(nested.resolve_param(param)?)),
        (Some(_), other) => bail!("{other} is not further solvable"),
    }
}

fn render(output: &Output, json: bool) -> Result<String> {
    let text = match (output, json) {
        (Output::Entity(entity), true) => serde_json::to_string_pretty(entity)?,
        (Output::Value(value), true) => serde_json::to_string_pretty(value)?,
        (Output::Entity(entity), false) => entity.to_string(),
        (Output::Value(value), false) => value.to_string(),
    };
    Ok(text)
}

fn run(cli: &Cli) -> Result<()> {
    let output = evaluate(cli)?;
    println!("{}", render(&output, cli.json)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
