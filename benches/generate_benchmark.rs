//! Benchmarks for courtdocx generation performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks cover fragment writing, package assembly and whole
//! petition generation at various party counts.

use courtdocx::docx::{assemble, body_fragments, Compression};
use courtdocx::{
    generate, Block, Clock, DocumentRecord, GenerateOptions, PageGeometry, Paragraph, PartyForm,
    PetitionForm,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Creates body blocks with the given number of multi-line paragraphs.
fn create_blocks(paragraph_count: usize) -> Vec<Block> {
    (0..paragraph_count)
        .map(|i| {
            Block::from(Paragraph::with_text(format!(
                "{}.\tThat paragraph {} carries <escaped> & \"quoted\" text.\nSecond line.",
                i + 1,
                i
            )))
        })
        .collect()
}

/// Creates a petition record with `parties` petitioners and defendants.
fn create_petition(parties: usize) -> DocumentRecord {
    let party = |i: usize| PartyForm {
        name: Some(format!("Party {}", i)),
        parent_name: Some("Parent".to_string()),
        occupation: Some("Business".to_string()),
        address: Some("Margao, Goa 403601".to_string()),
        ..Default::default()
    };
    let form = PetitionForm {
        court: Some("District Court".to_string()),
        case_no: Some("7/2026".to_string()),
        petitioners: (0..parties).map(party).collect(),
        defendants: (0..parties).map(party).collect(),
        petition_text: Some("Facts of the case.\n".repeat(20)),
        ..Default::default()
    };
    form.resolve(&Clock::system()).into()
}

/// Benchmark fragment writing at various sizes.
fn bench_fragment_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment_writing");
    let geometry = PageGeometry::default();

    for para_count in [10, 100, 1000].iter() {
        let blocks = create_blocks(*para_count);

        group.throughput(Throughput::Elements(*para_count as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &blocks,
            |b, blocks| {
                b.iter(|| {
                    let _ = body_fragments(black_box(blocks), &geometry);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark package assembly with both compression methods.
fn bench_package_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("package_assembly");
    let geometry = PageGeometry::default();
    let fragments = body_fragments(&create_blocks(500), &geometry).unwrap();

    for (name, compression) in [("deflated", Compression::Deflated), ("stored", Compression::Stored)] {
        group.bench_with_input(BenchmarkId::new("compression", name), &fragments, |b, f| {
            b.iter(|| {
                let _ = assemble(black_box(f.clone()), geometry, compression);
            });
        });
    }

    group.finish();
}

/// Benchmark end-to-end petition generation.
fn bench_petition_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("petition_generation");
    let options = GenerateOptions::default();

    for parties in [1, 5, 20].iter() {
        let record = create_petition(*parties);

        group.bench_with_input(BenchmarkId::new("parties", parties), &record, |b, record| {
            b.iter(|| {
                let _ = generate(black_box(record), &options);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fragment_writing,
    bench_package_assembly,
    bench_petition_generation,
);
criterion_main!(benches);
