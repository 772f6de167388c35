use clap::{Arg, Command as ClapCommand};
use std::fs;

use easy_protocol::error::CompileError;
use easy_protocol::forest::{forest_to_json, parse_forest};
use easy_protocol::lifecycle::release;
use easy_protocol::ToStringVisitor;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CompileError> {
    let matches = ClapCommand::new("easyp")
        .version("0.1.0")
        .about("Render easy-protocol syntax trees back to source text")
        .arg(
            Arg::new("input")
                .help("Forest document (JSON) produced by the parser")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print a banner before each tree")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input_file = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let quiet = matches.get_flag("quiet");

    // A missing input is reported, not treated as a failure
    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(_) => {
            println!("failed to open file: {}", input_file);
            return Ok(());
        }
    };

    let forest = parse_forest(&source)?;

    if format == "json" {
        println!("{}", forest_to_json(&forest)?);
        return Ok(());
    }

    let mut released = 0;
    for root in forest {
        if !quiet {
            println!("parsed ast:");
        }
        println!("{}", ToStringVisitor::render(&root));
        released += release(root).len();
    }

    if !quiet {
        eprintln!("released {} nodes from {}", released, input_file);
    }

    Ok(())
}
