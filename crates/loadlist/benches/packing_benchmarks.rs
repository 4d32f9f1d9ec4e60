use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use picker_core::RecordId;
use picker_inventory::{Abbreviated, Dimension, StockDetails, StockItem};
use picker_loadlist::{LoadListPlanner, PlannerConfig, RngSource, StockPolicy};
use picker_parties::{ContactInfo, Customer, CustomerId};

fn stock(count: u32, details: StockDetails) -> Vec<StockItem> {
    (1..=count)
        .map(|i| StockItem {
            id: RecordId::new(i),
            location: format!("Regal {}", i % 12),
            brand: "Prüm".to_string(),
            orientation: Abbreviated {
                name: "DIN links".to_string(),
                abbreviation: "L".to_string(),
            },
            height: Dimension {
                name: "Standard".to_string(),
                number: 1985,
            },
            width: Dimension {
                name: "86er".to_string(),
                number: 860,
            },
            surface: "Weißlack".to_string(),
            weight: Some(f64::from(10 + i % 40)),
            quantity: 5,
            description: None,
            details: details.clone(),
        })
        .collect()
}

fn customers(count: u32) -> Vec<Customer> {
    (1..=count)
        .map(|i| Customer {
            id: CustomerId::new(i),
            name: format!("Kunde {i}"),
            contact: ContactInfo::default(),
        })
        .collect()
}

fn bench_generate_load_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_load_list");
    let customers = customers(50);

    for size in [100u32, 1_000, 10_000] {
        let doors = stock(
            size,
            StockDetails::Door {
                lock_type: Abbreviated {
                    name: "Buntbart".to_string(),
                    abbreviation: "BB".to_string(),
                },
            },
        );
        let frames = stock(
            size / 2,
            StockDetails::Frame {
                wall_thickness: "100 mm".to_string(),
                frame_type: "Umfassungszarge".to_string(),
            },
        );
        group.throughput(Throughput::Elements(u64::from(size + size / 2)));

        for policy in [StockPolicy::Replenished, StockPolicy::Consumed] {
            let config = PlannerConfig::default().with_stock_policy(policy);
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        let mut planner =
                            LoadListPlanner::new(config.clone(), RngSource::seeded(7)).unwrap();
                        black_box(planner.generate_load_list(&doors, &frames, &customers))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_generate_load_list);
criterion_main!(benches);
