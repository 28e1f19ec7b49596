use bit_storage::{BitStorage, BitStorageError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Bit Storage Examples ===\n");

    if let Err(e) = example_fields() {
        eprintln!("Error: {e}");
    }

    example_rejections();
}

fn example_fields() -> Result<(), BitStorageError> {
    println!("Example 1: Reading and writing bit fields");

    let mut bits = BitStorage::new(128, vec![0x123456789ABCDEF0, 0x0FEDCBA987654321])?;

    println!("  {}", bits.to_hex_string());
    println!("  BitSize: {}", bits.len());

    let field = bits.get_field(4, 8)?;
    println!("  BitField: {}", field.to_hex_string());

    bits.set_field_from_u64(16, 8, 0xAA)?;
    println!("  Modified bit vector: {}", bits.to_hex_string());

    let value = bits.get_field_as_u64(16, 8)?;
    println!("  The resulting bit field as int: {:x}", value);
    println!();

    Ok(())
}

fn example_rejections() {
    println!("Example 2: Rejected operations");

    match BitStorage::new(129, vec![0, 0]) {
        Ok(_) => println!("  unexpected: 129 bits fit in two words"),
        Err(e) => println!("  construct: {e}"),
    }

    let mut bits = BitStorage::zeroed(32);
    if let Err(e) = bits.set_field_from_u64(28, 8, 0xFF) {
        println!("  set: {e}");
    }
    if let Err(e) = bits.get_field_as_u64(0, 65) {
        println!("  get: {e}");
    }
    println!("  storage after rejections: {bits}");
}
