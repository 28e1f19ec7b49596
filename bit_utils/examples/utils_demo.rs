use bit_utils::{is_power_of_two, random_sample};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Bit Utils Examples ===\n");

    println!("Example 1: Power of two checks");
    for value in [0i64, 1, 2, 3, 4, -1, 1 << 60, i64::MAX] {
        println!("  {:>20}: {}", value, is_power_of_two(value));
    }
    println!("  {:>20}: {}", 1u64 << 63, is_power_of_two(1u64 << 63));
    println!();

    println!("Example 2: Random sample");
    let v: Vec<i32> = (1..=10).collect();
    for n in [5, 11] {
        match random_sample(&v, n) {
            Ok(sample) => println!("  Random selection of {n} elements: {sample:?}"),
            Err(e) => eprintln!("  Error: {e}"),
        }
    }
}
