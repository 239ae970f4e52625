//! TopRank CLI
//!
//! Command-line driver for the top-paid selection.

use clap::{Parser, Subcommand};
use toprank::{select_top_paid, Record, RecordCollection, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// TopRank CLI
#[derive(Parser, Debug)]
#[command(name = "toprank-cli")]
#[command(about = "Select the top-N highest-valued records from two collections")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in sample selection and print it twice
    /// (once via indexed access, once via iteration)
    Demo,

    /// Select from two JSON roster files
    Select {
        /// First roster file (JSON array of {"name", "value"} objects)
        #[arg(long)]
        list_a: String,

        /// Second roster file
        #[arg(long)]
        list_b: String,

        /// How many records to take from the first roster
        #[arg(short = 'n', long, default_value = "3")]
        take_a: i64,

        /// How many records to take from the second roster
        #[arg(short = 'm', long, default_value = "3")]
        take_b: i64,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,toprank=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Demo => demo(),
        Commands::Select {
            list_a,
            list_b,
            take_a,
            take_b,
        } => {
            let a = toprank::load_roster(&list_a)?;
            let b = toprank::load_roster(&list_b)?;

            let result = select_top_paid(&a, &b, take_a, take_b);
            for record in &result {
                println!("{}", record);
            }
            Ok(())
        }
    }
}

/// The original sample: two five-record collections, top 3 from each,
/// printed once via indexed access and once via iteration.
fn demo() -> Result<()> {
    let mut list1 = RecordCollection::with_capacity(10); // reserving 10 elements
    list1.append(Record::new("One", 1));
    list1.append(Record::new("Two", 2));
    list1.append(Record::new("Three", 3));
    list1.append(Record::new("Four", 4));
    list1.append(Record::new("Five", 5));

    let mut list2 = RecordCollection::new(); // no reserve
    list2.append(Record::new("Six", 6));
    list2.append(Record::new("Seven", 7));
    list2.append(Record::new("Eight", 8));
    list2.append(Record::new("Nine", 9));
    list2.append(Record::new("Ten", 10));

    let list3 = select_top_paid(&list1, &list2, 3, 3);

    for i in 0..list3.len() {
        println!("{}", list3.get(i)?);
    }

    println!("---------------- once again -----------------");

    for record in &list3 {
        println!("{}", record);
    }

    Ok(())
}
