#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use dadda_lib::{
    context::Context,
    encoding::equivalence::Link,
    types::err::{self},
};

mod config_io;
mod misc;
mod parse;

use config_io::ConfigIO;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    let mut the_context = Context::from_config(config);

    if let Err(e) = build(&mut the_context, &config_io) {
        println!("c Error building formula: {e}");
        std::process::exit(1);
    }

    if config_io.show_stats {
        misc::print_stats(&the_context);
    }

    match the_context.export(&config_io.output) {
        Ok(()) => {
            println!(
                "c Wrote {} atoms and {} clauses to {}",
                the_context.atom_count(),
                the_context.clause_count(),
                config_io.output.display()
            );
        }
        Err(e) => {
            println!("c Error writing formula: {e}");
            std::process::exit(2);
        }
    }
}

/// Operands, then one multiplier, then (unless unlinked) a second multiplier and the link.
fn build(the_context: &mut Context, config_io: &ConfigIO) -> Result<(), err::ErrorKind> {
    let lhs = the_context.fresh_operand()?;
    let rhs = the_context.fresh_operand()?;

    if let Some(value) = config_io.lhs {
        the_context.fix_operand(&lhs, value)?;
    }
    if let Some(value) = config_io.rhs {
        the_context.fix_operand(&rhs, value)?;
    }

    let r1 = the_context.compile_multiplier(&lhs, &rhs)?;

    match config_io.link {
        Link::None => {}
        link => {
            let r2 = the_context.compile_multiplier(&lhs, &rhs)?;
            the_context.link(link, &r1, &r2)?;
        }
    }

    Ok(())
}
