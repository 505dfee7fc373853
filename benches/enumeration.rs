use divan::AllocProfiler;
use seqgen::{Enumeration, Structure, enumerate, index::product_indices, infixes};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench(args = [(4, 4), (8, 3), (16, 2)])]
fn index_space(args: (usize, usize)) -> usize {
    let (n, power) = divan::black_box(args);
    product_indices(n, power).len()
}

#[divan::bench(args = Structure::ALL)]
fn eager(structure: Structure) -> Vec<String> {
    enumerate(structure, 4, divan::black_box("ABCDEFG"))
}

#[divan::bench(args = Structure::ALL)]
fn lazy(structure: Structure) -> usize {
    Enumeration::<char, String>::new(structure, 4, divan::black_box("ABCDEFG")).count()
}

#[cfg(feature = "rayon")]
#[divan::bench(args = Structure::ALL)]
fn parallel(structure: Structure) -> Vec<String> {
    seqgen::par_enumerate(structure, 4, divan::black_box("ABCDEFG"))
}

#[divan::bench(args = [2, 16, 256])]
fn windows(bencher: divan::Bencher, length: usize) {
    let xs: Vec<u32> = (0..1024).collect();
    bencher.bench(|| infixes::<_, Vec<u32>>(length, divan::black_box(&xs)));
}
