//! Interactive driver: read a formula, print the per-node truth table and
//! all canonical forms.

use std::io::{self, BufRead, Write};

use clap::Parser;

use formula_rs::formula::Formula;
use formula_rs::node::NodeId;

#[derive(Parser)]
#[command(about = "Print the truth table and canonical forms of a propositional formula")]
struct Args {
    /// Fully parenthesized formula over `& | > ~ !` (read from stdin if omitted).
    expression: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let text = match args.expression {
        Some(expression) => expression,
        None => {
            print!("Enter expression: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    let expression: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut formula = Formula::new();
    formula.build(&expression)?;

    let table = formula.truth_table();
    for i in 0..formula.size() {
        let id = NodeId::new(i as u32);
        if let Some(column) = table.column(id) {
            let bits: Vec<&str> = column.iter().map(|&b| if b { "1" } else { "0" }).collect();
            println!("{:^30}: {}", formula.to_infix(id), bits.join("\t"));
        }
    }

    match formula.full_conjunctive_numeric_form() {
        Some(rows) => {
            let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
            println!("({})&", rows.join(", "));
            println!("{}", formula.full_conjunctive_normal_form().unwrap());
        }
        None => println!("No full conjunctive normal form"),
    }

    match formula.full_disjunctive_numeric_form() {
        Some(rows) => {
            let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
            println!("({})|", rows.join(", "));
            println!("{}", formula.full_disjunctive_normal_form().unwrap());
        }
        None => println!("No full disjunctive normal form"),
    }

    println!("index: {}", formula.index_form());

    Ok(())
}
