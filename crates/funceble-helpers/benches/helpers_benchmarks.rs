use criterion::{Criterion, black_box, criterion_group, criterion_main};
use funceble_helpers::{Directory, File, Hash};
use tempfile::tempdir;

fn hash_benchmark(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test_file.txt");
    File::new(&path)
        .write(&"Hello World!\n".repeat(4096), true)
        .unwrap();

    c.bench_function("hash::Hash::get (md5)", |b| {
        let hash = Hash::new(&path);
        b.iter(|| black_box(&hash).get().unwrap())
    });

    c.bench_function("hash::Hash::get (all)", |b| {
        let hash = Hash::with_algorithm(&path, "all").unwrap();
        b.iter(|| black_box(&hash).get().unwrap())
    });
}

fn fix_path_benchmark(c: &mut Criterion) {
    c.bench_function("directory::Directory::fix_path", |b| {
        let directory = Directory::new("/output\\domains/ACTIVE\\splitted");
        b.iter(|| black_box(&directory).fix_path())
    });
}

criterion_group!(benches, hash_benchmark, fix_path_benchmark);
criterion_main!(benches);
