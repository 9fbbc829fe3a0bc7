use data_loader::{DataPaths, Dataset};
use std::time::Instant;

fn main() {
    let paths = DataPaths::in_dir("downloads");

    println!("Loading movie corpus...\n");

    let start = Instant::now();
    let dataset = Dataset::load(&paths)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (movies, appearances, merged) = dataset.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Appearances: {}", appearances);
    println!("Merged rows: {}", merged);
    println!("\nPerformance: {:.0} appearances/second",
             appearances as f64 / elapsed.as_secs_f64());
}
