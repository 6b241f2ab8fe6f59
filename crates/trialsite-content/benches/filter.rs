use criterion::{Criterion, criterion_group, criterion_main};
use trialsite_content::{
    FilterCriteria, Region, Selection, TherapeuticArea,
    catalog::{CASE_STUDIES, WHITE_PAPERS},
    filter_records,
};

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let everything = FilterCriteria::default();
    group.bench_function("case_studies_unfiltered", |b| {
        b.iter(|| std::hint::black_box(filter_records(CASE_STUDIES, &everything).len()));
    });

    let narrow = FilterCriteria::default()
        .with_search_term("Oncology")
        .with_area(Selection::Only(TherapeuticArea::Oncology))
        .with_region(Selection::Only(Region::Global));
    group.bench_function("case_studies_all_predicates", |b| {
        b.iter(|| std::hint::black_box(filter_records(CASE_STUDIES, &narrow).len()));
    });

    // One evaluation per keystroke while typing a search term.
    group.bench_function("white_papers_keystrokes", |b| {
        let term = "patient recruitment";
        b.iter(|| {
            for end in 1..=term.len() {
                let criteria = FilterCriteria::default().with_search_term(&term[..end]);
                std::hint::black_box(filter_records(WHITE_PAPERS, &criteria).len());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
