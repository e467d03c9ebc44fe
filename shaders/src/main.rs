//! Building this crate compiles `shader-crate` to SPIR-V. Running it prints
//! where the module ended up, for use as `PASSTHROUGH_SPV`.

#[cfg(test)]
mod entry_points;

fn main() {
    println!("{}", env!("PASSTHROUGH_SPV"));
}
