use bit_packer::{
    PackedArray, calculate_packed_size, checked, get, get_bits_per_value, pack, set, unpack,
};

fn main() {
    println!("=== Bit Packer Examples ===\n");

    // Example 1: Raw buffers
    example_raw_buffers();

    // Example 2: Checked calls
    let _ = example_checked();

    // Example 3: Memory comparison
    let _ = example_memory_savings();
}

fn example_raw_buffers() {
    println!("Example 1: Packing a sample array at its minimal width");

    let mut values = [
        15, 17, 19, 16, 18, 19, 21000, 17, 1700, 15, 21, 21, 21, 3, 15, 16, 1, 0, 2, 5, 31000,
    ];
    let bits = get_bits_per_value(&values);
    let mut packed = vec![0u8; calculate_packed_size(values.len(), bits)];
    pack(&values, 0, values.len(), &mut packed, 0, bits);

    println!("  {} values at {} bits -> {} bytes", values.len(), bits, packed.len());
    println!("  value 1: {}", get(&packed, 1, bits));
    set(&mut packed, 1, 10, bits);
    println!("  value 1 after set: {}", get(&packed, 1, bits));
    println!("  value 6: {}", get(&packed, 6, bits));

    values.fill(0);
    let len = values.len();
    unpack(&mut values, 0, len, &packed, 0, bits);
    println!("  unpacked: {:?}", values);
    println!();
}

fn example_checked() -> Result<(), bit_packer::BitPackError> {
    println!("Example 2: Checked access");

    let mut packed = [0u8; 3];
    checked::try_set(&mut packed, 2, 63, 6)?;
    println!("  slot 2: {}", checked::try_get(&packed, 2, 6)?);

    if let Err(err) = checked::try_set(&mut packed, 2, 64, 6) {
        println!("  rejected: {}", err);
    }
    if let Err(err) = checked::try_get(&packed, 4, 6) {
        println!("  rejected: {}", err);
    }
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), bit_packer::BitPackError> {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    // Standard Vec<u32>
    let standard_bytes = count * 4;

    // values 0-4095 need 12 bits
    let mut array = PackedArray::with_capacity(12, count)?;
    for i in 0..count {
        array.push((i % 4096) as u32)?;
    }
    let packed_bytes = array.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 12-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
