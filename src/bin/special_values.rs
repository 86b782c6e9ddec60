//! Limits and special-value behaviour of every precision.

use log::info;

use float_pitfalls::prelude::*;
use float_pitfalls::{logging, nan_bits_f32, nan_bits_f64, PrecisionReport};


fn main() -> DemoResult<()> {
    let _logger = logging::init("warn")?;
    info!("special value report");

    println!("{}", PrecisionReport::<f32>::of());
    println!("  NaN bits:               {}", nan_bits_f32());
    println!();
    println!("{}", PrecisionReport::<f64>::of());
    println!("  NaN bits:               {}", nan_bits_f64());
    println!();
    println!("{}", PrecisionReport::<DoubleDouble>::of());

    info!("done");
    Ok(())
}
