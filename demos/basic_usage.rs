// ============================================================================
// Basic Usage Example
// ============================================================================

use padic_integer::prelude::*;

fn main() -> Result<(), PadicError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== p-adic Integer Example ===\n");

    let config = PadicConfig::quinary(10);
    let a = config.integer(123)?;
    let b = config.integer(456)?;

    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", (&a + &b)?);
    println!("a - b = {}", (&a - &b)?);
    println!("a * b = {}", (&a * &b)?);

    println!("\n{:?}", a);
    println!("digit width: {}", a.digit_width());

    // Mixing primes is rejected before any digit is touched
    let seven = PadicConfig::new(7, 10).integer(123)?;
    if let Err(err) = &a + &seven {
        println!("\n{}", err);
    }

    Ok(())
}
