//! Sparse Polynomial Arithmetic
//!
//! This demo reads two polynomials from term list files and shows:
//! - Rendering
//! - Addition, subtraction and multiplication
//! - Evaluation at a few points
//!
//! Run with: cargo run --example poly_arithmetic [-- <a.txt> <b.txt>]
//! Without arguments the bundled files under `demos/data` are used.

use std::error::Error;
use std::path::PathBuf;

use termpoly::Poly;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("data");
    let mut args = std::env::args().skip(1);
    let a_path = args.next().map(PathBuf::from).unwrap_or_else(|| data.join("a.txt"));
    let b_path = args.next().map(PathBuf::from).unwrap_or_else(|| data.join("b.txt"));

    let a: Poly = Poly::load(&a_path)?;
    let b: Poly = Poly::load(&b_path)?;

    println!("=== Sparse Polynomial Arithmetic ===\n");
    println!("a(x) = {}", a);
    println!("b(x) = {}", b);
    println!("degree(a) = {:?}", a.degree());
    println!("degree(b) = {:?}", b.degree());
    println!();

    println!("--- Arithmetic ---\n");
    println!("a + b = {}", &a + &b);
    println!("a - b = {}", &a - &b);
    println!("a * b = {}", &a * &b);
    println!("-a    = {}", -&a);
    println!();

    println!("--- Evaluation ---\n");
    for x in [-1.0f32, 0.0, 1.0, 2.0] {
        println!("a({}) = {}, b({}) = {}", x, a.eval(x), x, b.eval(x));
    }

    Ok(())
}
