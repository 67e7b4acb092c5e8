use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_booking_engine::catalog::AVAILABLE_AMENITIES;
use hotel_booking_engine::{
    filter_and_sort, EngineConfig, HotelRecord, RoomOffering, SearchCriteria, SortMode,
};
use rand::{seq::SliceRandom, thread_rng, Rng};

fn random_catalog(size: usize) -> Vec<HotelRecord> {
    let mut rng = thread_rng();
    let locations = ["Swiss Alps", "Maldives", "New York", "Dubai", "Lisbon", "Kyoto"];

    (0..size)
        .map(|i| {
            let price = rng.gen_range(50.0..1200.0);
            let amenities = AVAILABLE_AMENITIES
                .choose_multiple(&mut rng, 5)
                .map(|a| a.to_string())
                .collect();

            HotelRecord {
                id: i as u32,
                name: format!("Hotel {}", i),
                location: locations.choose(&mut rng).unwrap().to_string(),
                description: String::new(),
                images: vec![],
                amenities,
                price,
                original_price: None,
                discount: None,
                rating: rng.gen_range(0.0..=5.0),
                reviews: rng.gen_range(0..2000),
                rooms: vec![RoomOffering {
                    room_type: "Double".to_string(),
                    price,
                    capacity: 2,
                }],
            }
        })
        .collect()
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_filter_and_sort");
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    for size in [100, 1_000, 10_000].iter() {
        let catalog = random_catalog(*size);

        for sort_mode in [SortMode::Recommended, SortMode::PriceAscending] {
            let criteria = SearchCriteria::defaults(today, &EngineConfig::default())
                .with_destination("a")
                .with_amenities(["Spa"])
                .with_sort_mode(sort_mode);

            group.bench_with_input(
                BenchmarkId::new(sort_mode.to_string(), size),
                &catalog,
                |b, catalog| b.iter(|| black_box(filter_and_sort(catalog, &criteria))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
