//! Adds one tenth to zero ten million times in every precision.
//!
//! The exact answer is `1_000_000`; how far each type lands from it, and how
//! long it takes, is the whole report.

use log::info;

use float_pitfalls::engine::report::{bits_line, completed_line};
use float_pitfalls::logging;
use float_pitfalls::prelude::*;


fn run<T: Precision>() {
    let result = timed(|| repeated_sum(tenth::<T>(), DEFAULT_SEQUENCE_LEN));

    println!("{}:", T::NAME);
    println!("{}", bits_line::<T>());
    println!("{}", result.value.to_fixed(REPEATED_DIGITS));
    println!("{}", completed_line(result.seconds()));
    println!();
}

fn main() -> DemoResult<()> {
    let _logger = logging::init("warn")?;
    info!("repeated addition of 0.1, {DEFAULT_SEQUENCE_LEN} terms");

    run::<f32>();
    run::<f64>();
    run::<DoubleDouble>();

    info!("done");
    Ok(())
}
