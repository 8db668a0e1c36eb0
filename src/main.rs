use anyhow::Context;
use clap::Parser;
use historical_weather::cli::{Args, setup_logging};
use historical_weather::{Query, WeatherProcessor};
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let config = args.config();

    // Reject the request before touching the input file
    let query = match Query::from_request(&args.request(), &config) {
        Ok(query) => query,
        Err(errors) => {
            for message in errors.messages() {
                println!("{}", message);
            }
            process::exit(1);
        }
    };

    let processor = WeatherProcessor::new(config);
    processor.describe_query(&query);

    let result = processor.run(&query).with_context(|| {
        format!(
            "{} failed for {}",
            query.operation(),
            processor.config().data_path.display()
        )
    });

    match result {
        Ok(result) => {
            println!("{}", result);
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
