//! prints the shapes and the collision results, pass json scenario files to run them too
//!
//! `RUST_LOG=gjk=trace cargo run --example demo -- scenarios.json`

use std::{env, process::ExitCode};

use gjk::prelude::*;
use log::error;

fn report(name_a: &str, name_b: &str, a: &dyn Shape, b: &dyn Shape) {
    if calculate(a, b).is_some() {
        println!("Collision detected between {name_a} and {name_b}!");
    } else {
        println!("No collision detected between {name_a} and {name_b}!");
    }
}

fn run_file(path: &str) -> GjkResult<bool> {
    let mut all_expected = true;
    for scenario in Scenario::from_file(path)? {
        let report = scenario.run()?;
        println!("{report}");
        all_expected &= report.matches_expectation().unwrap_or(true);
    }
    Ok(all_expected)
}

fn main() -> ExitCode {
    env_logger::init();

    let a: Polygon = [(0., 1.), (1., -2.), (-1., -1.)].into_iter().collect();
    let b: Polygon = [(0., -1.), (1., 1.), (-1., 1.)].into_iter().collect();

    println!("----A----");
    println!("{a}");
    println!("----B----");
    println!("{b}");

    report("A", "B", &a, &b);

    let c = Circle::new((0., 1.), 2.);
    println!("----C----");
    println!("{c}");

    report("A", "C", &a, &c);

    let mut exit_code = ExitCode::SUCCESS;
    for path in env::args().skip(1) {
        match run_file(&path) {
            Ok(true) => {}
            Ok(false) => exit_code = ExitCode::FAILURE,
            Err(err) => {
                error!("{path}: {err}");
                exit_code = ExitCode::FAILURE;
            }
        }
    }
    exit_code
}
