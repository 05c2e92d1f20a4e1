// ============================================================================
// Basic Usage Example
// ============================================================================

use crossbeam::channel::unbounded;
use numeric_tower::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    let _ = numeric_tower::init_logging(tracing::Level::DEBUG);

    println!("=== Numeric Tower Example ===\n");

    // Session with a logging subscriber and a channel we can inspect
    let session = Session::new();
    session.on(EventKind::Error, Arc::new(LoggingErrorHandler));
    session.on(EventKind::Warning, Arc::new(LoggingErrorHandler));
    let (tx, rx) = unbounded();
    session.on(EventKind::Error, Arc::new(ChannelErrorHandler::new(tx)));

    // Big integers
    println!("BigInteger:");
    let a = session.integer("123456789").unwrap();
    let b = session.integer("987654321").unwrap();
    println!("  {} x {} = {}", a, b, session.times(&a, &b).unwrap());

    let two = Value::from(2);
    let power = session.pow(&two, &Value::from(200)).unwrap();
    println!("  2^200 = {}", power);

    let (q, r) = session
        .divrem(&BigInteger::from(-7), &BigInteger::from(2))
        .unwrap();
    println!("  divrem(-7, 2) = ({}, {})", q, r);

    // Rationals
    println!("\nRational:");
    let third = session.divide(&Value::from(1), &Value::from(3)).unwrap();
    let sixth = session.rational(1, 6).unwrap();
    let sum = session.plus(&third, &sixth).unwrap();
    println!("  1/3 + 1/6 = {}", sum);
    if let Value::Rational(r) = &sum {
        println!("  reduced   = {}", r.reduce());
        println!("  LaTeX     = {}", r.reduce().to_latex());
    }

    // Complex numbers
    println!("\nComplex:");
    let z = Complex::new(3.0, 4.0);
    println!("  |{}| = {}", z, z.abs());
    println!("  sqrt({}) = {}", Complex::new(-4.0, 0.0), Complex::new(-4.0, 0.0).sqrt());
    println!("  (2+5i)^3 = {}", Complex::new(2.0, 5.0).powf(3.0));
    println!("  1/0 = {}", Complex::zero().inverse());

    // Mixed ranks
    println!("\nDispatch:");
    let mixed = [
        Value::from(1),
        Value::from(0.5),
        Value::Rational(Rational::new(1, 4).unwrap()),
        Value::Complex(Complex::new(0.0, 1.0)),
    ];
    for pair in mixed.windows(2) {
        let result = session.plus(&pair[0], &pair[1]).unwrap();
        println!(
            "  {} ({}) + {} ({}) = {} ({})",
            pair[0],
            pair[0].tag(),
            pair[1],
            pair[1].tag(),
            result,
            result.tag()
        );
    }
    println!("  sum = {}", session.sum(&mixed).unwrap());

    // Failures reach subscribers
    println!("\n=== Error Channel ===");
    let _ = session.rational(2, 0);
    let _ = session.modulo(&Value::from(5), &Value::from(0));
    for event in rx.try_iter() {
        println!(
            "  [{}] {}: {}",
            event.timestamp.format("%H:%M:%S%.3f"),
            event.method,
            event.message
        );
    }
}
