use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gf2m::{GaloisField, Polynomial};

const PRIMITIVE_POLYNOMIALS: [(u32, u128); 5] = [
    (4, 0b10011),
    (5, 0b100101),
    (6, 0b1000011),
    (7, 0b10000011),
    (8, 0x11D),
];

pub fn construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for (degree, bits) in PRIMITIVE_POLYNOMIALS {
        let primitive = Polynomial::from_bits(bits);
        group.bench_with_input(BenchmarkId::new("galois_field_new", degree), &primitive, |b, p| {
            b.iter(|| GaloisField::new(degree, *p).unwrap())
        });
    }

    group.finish();
}

pub fn lookup(c: &mut Criterion) {
    let field = GaloisField::new(8, Polynomial::from_bits(0x11D)).unwrap();
    let n = field.nonzero_elements();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("sum_row", |b| {
        b.iter(|| (0..n).filter_map(|j| field.sum(17, j)).fold(0usize, |acc, k| acc ^ k))
    });
    group.bench_function("checked_sum_row", |b| {
        b.iter(|| {
            (0..n)
                .filter_map(|j| field.checked_sum(17, j).flatten())
                .fold(0usize, |acc, k| acc ^ k)
        })
    });
    group.finish();
}

criterion_group!(benches, construction, lookup);
criterion_main!(benches);
