// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use agenda_watch::config::consts::SELECTORS;
use agenda_watch::extract;

// Synthetic agenda page: n announced activities plus the usual chrome.
fn sample_page(n: usize) -> String {
    let mut body = String::new();
    body.push_str("<header><h1>Agenda</h1><nav><a href=\"/\">Inicio</a></nav></header><main>");
    for i in 0..n {
        body.push_str(&format!(
            "<h2>Taller {i}</h2><p>Descripción del taller {i}.</p>\
             <div class=\"event-title\">Evento {i}</div>"
        ));
    }
    body.push_str("</main><footer><p>Escaramuza</p></footer>");
    format!("<html><body>{body}</body></html>")
}

fn bench_extract(c: &mut Criterion) {
    let small = sample_page(20);
    let large = sample_page(500);

    c.bench_function("extract_20", |b| {
        b.iter(|| extract::activities(black_box(&small), black_box(SELECTORS)).len())
    });

    c.bench_function("extract_500", |b| {
        b.iter(|| extract::activities(black_box(&large), black_box(SELECTORS)).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
