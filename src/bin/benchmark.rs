use dijkstra_compare::benchmark::{compare_performances, BenchmarkConfig};
use std::env;

fn parse_sizes(raw: &str) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    let mut sizes = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        sizes.push(part.trim().parse()?);
    }
    Ok(sizes)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = BenchmarkConfig::default();
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sizes" => {
                let raw = args.next().ok_or("--sizes needs a value, e.g. 10,50,100")?;
                config = config.with_sizes(parse_sizes(&raw)?);
            }
            "--density" => {
                let raw = args.next().ok_or("--density needs a value")?;
                config = config.with_density(raw.parse()?);
            }
            "--weights" => {
                let raw = args.next().ok_or("--weights needs a value, e.g. 1..10")?;
                let (min, max) = raw.split_once("..").ok_or("--weights expects MIN..MAX")?;
                config = config.with_weight_range(min.parse()?, max.parse()?);
            }
            "--seed" => {
                let raw = args.next().ok_or("--seed needs a value")?;
                config = config.with_seed(raw.parse()?);
            }
            "--json" => json = true,
            other => return Err(format!("unknown argument: {}", other).into()),
        }
    }

    let report = compare_performances(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=====================================================");
        println!("Naive Dijkstra vs heap Dijkstra (density {})", config.density);
        println!("=====================================================");
        print!("{}", report.render_table());
    }

    Ok(())
}
