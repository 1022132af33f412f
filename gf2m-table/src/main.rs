use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod render;

#[derive(Parser)]
#[command(name = "gf2m-table")]
#[command(about = "Print GF(2^m) addition tables in exponent form")]
#[command(group(clap::ArgGroup::new("source").required(true).args(["config", "degree"])))]
struct Args {
    // Field definitions as printed by gf2m-print-example-config
    #[arg(short, long, env = "GF2M_CONFIG")]
    config: Option<PathBuf>,

    // Fields to print from the configuration; all of them if none are given
    #[arg(short, long, requires = "config")]
    field: Vec<String>,

    #[arg(short = 'm', long, requires = "polynomial", conflicts_with = "config")]
    degree: Option<u32>,

    // e.g. "x^3 + x + 1"
    #[arg(short, long, requires = "degree")]
    polynomial: Option<String>,

    #[arg(short, long, default_value_t = tracing_subscriber::filter::LevelFilter::INFO)]
    verbosity: tracing_subscriber::filter::LevelFilter,
}

impl Args {
    fn fields(&self) -> anyhow::Result<Vec<(String, gf2m_config::FieldConfig)>> {
        if let (Some(degree), Some(polynomial)) = (self.degree, &self.polynomial) {
            let field = gf2m_config::FieldConfig {
                degree,
                primitive_polynomial: gf2m_config::parse_polynomial(polynomial)?,
            };
            return Ok(vec![(format!("GF(2^{degree})"), field)]);
        }

        let path = self.config.as_ref().context("Either --config or --degree is required")?;
        let config = gf2m_config::Gf2mConfig::load(path)
            .with_context(|| format!("Unable to load {}", path.display()))?;

        if self.field.is_empty() {
            return Ok(config.fields.into_iter().collect());
        }
        self.field
            .iter()
            .map(|name| -> anyhow::Result<_> { Ok((name.clone(), config.field(name)?.clone())) })
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(args.verbosity);
    tracing_subscriber::registry().with(stderr_layer).init();

    for (name, field_config) in args.fields()? {
        let start = std::time::Instant::now();
        let field = field_config
            .build()
            .with_context(|| format!("Unable to construct field '{name}'"))?;
        tracing::info!(
            field = name.as_str(),
            degree = field.degree(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "Addition table constructed"
        );

        println!(
            "{name}: GF(2^{}) with primitive polynomial {}",
            field.degree(),
            field.primitive_polynomial()
        );
        print!("{}", render::AdditionTableDisplay(&field));
        println!();
    }

    Ok(())
}
