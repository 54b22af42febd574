use clap::Parser;

use asciify::cli::Args;
use asciify::config::Config;
use asciify::pipeline::{self, ConvertOptions};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = ConvertOptions::resolve(args.width, &config);

    if let Err(e) = pipeline::run(&args.infile, &args.outfile, &options).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Done!");
}
