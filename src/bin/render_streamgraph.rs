use std::path::PathBuf;

use streamgraph::api::{StreamgraphConfig, StreamgraphEngine};
use streamgraph::data::read_records;
use streamgraph::interaction::{PointerEvent, TooltipEffect};
use streamgraph::render::SvgRenderer;
use streamgraph::telemetry::init_default_tracing;

const USAGE: &str = "usage: render_streamgraph --input <csv> --output <svg> [--config <json>] [--probe <x>,<y>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    probe: Option<(f64, f64)>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => StreamgraphConfig::load(path)
            .map_err(|err| format!("failed to load config `{}`: {err}", path.display()))?,
        None => StreamgraphConfig::default(),
    };
    let records = read_records(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    if records.is_empty() {
        return Err(format!("`{}` contains no records", args.input.display()));
    }

    let mut engine = StreamgraphEngine::new(SvgRenderer::new(), config)
        .map_err(|err| format!("invalid config: {err}"))?;
    engine
        .set_records(records)
        .map_err(|err| format!("failed to lay out records: {err}"))?;
    engine
        .render()
        .map_err(|err| format!("failed to render: {err}"))?;

    if let Some((x, y)) = args.probe {
        probe(&mut engine, x, y)?;
    }

    engine
        .renderer()
        .write_to(&args.output)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn probe(engine: &mut StreamgraphEngine<SvgRenderer>, x: f64, y: f64) -> Result<(), String> {
    let Some(series) = engine.layer_at(x, y) else {
        println!("probe ({x}, {y}) is outside every layer");
        return Ok(());
    };

    let effect = engine
        .pointer_move(PointerEvent::new(x, y, series))
        .map_err(|err| format!("failed to resolve probe: {err}"))?;
    match effect {
        TooltipEffect::Show { hit, .. } => println!(
            "probe ({x}, {y}) hit {} at {} (value {})",
            hit.series,
            hit.record.date.format("%Y-%m-%d"),
            hit.value()
        ),
        TooltipEffect::Hide => println!("probe ({x}, {y}) over {series} matched no sample"),
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut probe = None::<(f64, f64)>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--probe" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --probe".to_owned())?;
                probe = Some(parse_point(&value)?);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    let output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        config,
        probe,
    })
}

fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("probe `{value}` must be formatted as <x>,<y>"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid probe coordinate `{part}`: {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}
