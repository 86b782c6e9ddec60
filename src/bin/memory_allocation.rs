//! Allocates ten million `f32` and then ten million `f64` and holds each.
//!
//! The pauses leave time to watch resident memory in `top` or a task manager.

use std::thread;
use std::time::Duration;

use log::info;

use float_pitfalls::engine::report::footprint_lines;
use float_pitfalls::prelude::*;
use float_pitfalls::{logging, Footprint};


const WARMUP: Duration = Duration::from_secs(1);
const HOLD: Duration = Duration::from_secs(5);
const BETWEEN: Duration = Duration::from_secs(2);

fn measure<T: Precision>() {
    println!("Testing allocation of {}:", T::NAME);

    let buffer = Footprint::<T>::allocate(DEFAULT_SEQUENCE_LEN);
    for line in footprint_lines(&buffer.stats()) {
        println!("{line}");
    }

    println!("Sleeping five seconds...");
    buffer.hold(HOLD);
    buffer.release();
    println!("Memory freed");
    println!();
}

fn main() -> DemoResult<()> {
    let _logger = logging::init("warn")?;
    info!("footprint of {DEFAULT_SEQUENCE_LEN} values per type");

    println!("Floating point versus double: Which uses more memory?");
    println!("Use your task manager or 'top' to view resource use");
    println!();
    thread::sleep(WARMUP);

    measure::<f32>();
    thread::sleep(BETWEEN);
    measure::<f64>();

    info!("done");
    Ok(())
}
