// benches/ranking.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use league_scrape::{core::extract_tables, scrape};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/points_table.html"))
        .expect("read tests/fixtures/points_table.html")
}

/// A page with many groups, each a decent-sized table.
fn synthetic_page(tables: usize, rows: usize) -> String {
    let mut doc = String::from("<html><body>");
    for t in 0..tables {
        doc.push_str("<table><thead><tr><th>Team</th><th>Won</th><th>Points</th><th>NRR</th></tr></thead><tbody>");
        for r in 0..rows {
            let pts = (r * 7 + t) % 13;
            let nrr = ((r * 31 + t * 17) % 200) as f64 / 100.0 - 1.0;
            doc.push_str(&format!(
                "<tr><td>Team {t}-{r}</td><td>{}</td><td>{pts}</td><td>{nrr:.3}</td></tr>",
                pts / 2
            ));
        }
        doc.push_str("</tbody></table>");
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_ranking(c: &mut Criterion) {
    let sample = load_sample();
    let big = synthetic_page(8, 64);
    let big_tables = extract_tables(&big);

    c.bench_function("extract_sample", |b| {
        b.iter(|| black_box(extract_tables(black_box(&sample)).len()))
    });

    c.bench_function("extract_8x64", |b| {
        b.iter(|| black_box(extract_tables(black_box(&big)).len()))
    });

    c.bench_function("rank_8x64", |b| {
        b.iter(|| {
            let rows = scrape::flatten(scrape::rank_tables(black_box(&big_tables)));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
