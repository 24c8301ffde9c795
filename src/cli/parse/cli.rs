use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use dadda_lib::{
    config::{self, EmptyColumn},
    encoding::equivalence::Link,
};

use crate::config_io;

pub fn cli() -> Command {
    Command::new("dadda_cnf")
        .about("Compiles a 9x9 bit Dadda multiplier to a formula in DIMACS form")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help(format!("The path to write the formula to.
Default: {}", config::defaults::OUTPUT_PATH)))

        .arg(Arg::new("lhs")
            .long("lhs")
            .value_name("N")
            .value_parser(value_parser!(u64).range(0..512))
            .required(false)
            .num_args(1)
            .help("Fix the left operand to N, with unit clauses."))

        .arg(Arg::new("rhs")
            .long("rhs")
            .value_name("N")
            .value_parser(value_parser!(u64).range(0..512))
            .required(false)
            .num_args(1)
            .help("Fix the right operand to N, with unit clauses."))

        .arg(Arg::new("link")
            .long("link")
            .value_name("LINK")
            .value_parser(clap::builder::ValueParser::new(link_parser))
            .required(false)
            .num_args(1)
            .help(format!("How to link the products of two multipliers over the same operands.
Default: {}", config_io::LINK))
            .long_help(format!("How to link the products of two multipliers over the same operands.
Default: {}

  - equal: Require the products to be equal, bit for bit.
           The formula is satisfiable exactly when the multipliers agree.
  - miter: Require the products to differ in some bit.
           The formula is unsatisfiable exactly when the multipliers agree.
  - none : Compile a single multiplier.", config_io::LINK)))

        .arg(Arg::new("empty_column")
            .long("empty-column")
            .value_name("POLICY")
            .value_parser(clap::builder::ValueParser::new(empty_column_parser))
            .required(false)
            .num_args(1)
            .help(format!("How to fill a bit of the product with no literal after reduction.
Default: {}", config::defaults::EMPTY_COLUMN))
            .long_help(format!("How to fill a bit of the product with no literal after reduction.
Default: {}

  - fixed: A fresh atom, fixed false by a unit clause.
  - free : A fresh atom, with no clause.", config::defaults::EMPTY_COLUMN)))

        .arg(Arg::new("dadda_heights")
            .long("dadda-heights")
            .value_name("HEIGHTS")
            .value_parser(value_parser!(usize))
            .value_delimiter(',')
            .required(false)
            .num_args(1..)
            .help(format!("The height bounds of Dadda reduction, in order.
Default: {:?}", config::defaults::DADDA_HEIGHTS)))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display counts of gates and clauses."))
}

fn link_parser(arg: &str) -> Result<Link, std::io::Error> {
    arg.parse::<Link>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))
}

fn empty_column_parser(arg: &str) -> Result<EmptyColumn, std::io::Error> {
    arg.parse::<EmptyColumn>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))
}
