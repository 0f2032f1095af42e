//! Walks through the solver on a handful of reference equations.
//!
//! Run with `RUST_LOG=quadcat_solvers=debug` to see solver logging on stderr.

use quadcat_core::{Equation, catalan::catalan_number};
use quadcat_solvers::{
    DEFAULT_TOLERANCE, Error, SERIES_RADIUS,
    quadratic::{Config, Event, Status, solve, solve_unobserved},
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    print_catalan_table();
    print_reference_solutions();
    print_tolerance_sweep();
    print_term_trace();
    print_invalid_tolerance();
}

fn print_catalan_table() {
    println!("Catalan numbers");
    for n in 0..10 {
        match catalan_number(n) {
            Some(value) => println!("  C({n:2}) = {value}"),
            None => println!("  C({n:2}) overflows u128"),
        }
    }
    println!();
}

fn print_reference_solutions() {
    println!("Reference equations (tolerance {DEFAULT_TOLERANCE:e})");

    let equations = [
        Equation::new(1.0, 4.0, 1.0),
        Equation::new(2.0, 6.0, 1.0),
        Equation::new(1.0, 2.0, 2.0),
        Equation::new(1.0, 0.0, -4.0),
        Equation::new(1.0, 5.0, 0.0),
        Equation::new(0.0, 3.0, -6.0),
        Equation::new(0.0, 0.0, 5.0),
    ];

    for equation in &equations {
        let solution = solve_unobserved(equation, &Config::default());

        println!("  {equation}");
        match equation.catalan_parameter() {
            Some(parameter) => println!(
                "    A = {parameter:.6} ({} radius {SERIES_RADIUS})",
                if parameter.abs() <= SERIES_RADIUS { "within" } else { "outside" }
            ),
            None => println!("    A undefined"),
        }
        println!("    method: {}", solution.kind());

        if let Some(degenerate) = solution.degenerate() {
            println!("    degenerate: {degenerate:?}");
        }
        if solution.roots.is_empty() {
            println!("    no real roots");
        }
        for (i, root) in solution.roots.iter().enumerate() {
            println!(
                "    x{} = {root:.10}  (residual {:.2e})",
                i + 1,
                equation.evaluate(*root)
            );
        }
        if let Some(report) = solution.series_report() {
            println!(
                "    terms: {}, delta: {:.2e}, status: {:?}",
                report.terms_used, report.error, report.status
            );
        }
    }
    println!();
}

fn print_tolerance_sweep() {
    let equation = Equation::new(1.0, 4.0, 1.0);
    println!("Tolerance sweep for {equation}");

    for exponent in [4, 6, 8, 10, 12, 14] {
        let tolerance = 10.0_f64.powi(-exponent);
        let Ok(config) = Config::with_tolerance(tolerance) else {
            continue;
        };
        let solution = solve_unobserved(&equation, &config);
        if let (Some(terms), Some(root)) = (solution.terms_used(), solution.native_root()) {
            println!("  tol {tolerance:.0e}: {terms:2} terms, x1 = {root:.15}");
        }
    }
    println!();
}

fn print_term_trace() {
    let equation = Equation::new(1.0, 6.0, 1.0);
    println!("Series terms for {equation}");

    let observer = |event: &Event| {
        let delta = event
            .delta
            .map_or_else(|| "-".to_string(), |delta| format!("{delta:.2e}"));
        println!(
            "  n={:2}  C(n)={:6}  term={:.3e}  sum={:.12}  delta={delta}",
            event.n, event.coefficient, event.term, event.partial_sum
        );
        None
    };
    let solution = solve(&equation, &Config::default(), observer);

    if let Some(report) = solution.series_report() {
        let verdict = match report.status {
            Status::Converged => "converged",
            Status::MaxTerms => "hit the term cap",
            Status::StoppedByObserver => "was stopped",
        };
        println!("  series {verdict} after {} terms", report.terms_used);
    }
    println!();
}

fn print_invalid_tolerance() {
    println!("Invalid tolerance");
    match quadcat_solvers::solve(1.0, 4.0, 1.0, 0.0) {
        Ok(solution) => println!("  unexpected solution: {solution:?}"),
        Err(Error::InvalidConfig(error)) => println!("  rejected: {error}"),
    }
}
