use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ramp_eng::{Asset, Currency, Engine, Event, Mode, session};

/// Generates a realistic editing session for benchmarking.
///
/// Pattern (repeating):
/// 1. Type a fiat amount
/// 2. Switch asset
/// 3. Switch buy/sell
/// 4. Type an asset quantity
/// 5. Switch currency
pub struct EventGenerator {
    remaining: u64,
    step: u64,
}

impl EventGenerator {
    pub fn new(total: u64) -> Self {
        Self {
            remaining: total,
            step: 0,
        }
    }
}

impl Iterator for EventGenerator {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let step = self.step;
        self.step += 1;

        let event = match step % 5 {
            0 => Event::EditFiat {
                raw: format!("{}.{:02}", 100 + step % 900, step % 100),
            },
            1 => Event::SwitchAsset(match step % 3 {
                0 => Asset::Btc,
                1 => Asset::Eth,
                _ => Asset::Sol,
            }),
            2 => Event::SwitchMode(if step % 2 == 0 { Mode::Buy } else { Mode::Sell }),
            3 => Event::EditAsset {
                raw: format!("0.{:04}", 1 + step % 9999),
            },
            _ => Event::SwitchCurrency(if step % 2 == 0 {
                Currency::Eur
            } else {
                Currency::Usd
            }),
        };

        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for EventGenerator {}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for total in [100_u64, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| {
                let mut engine = Engine::new();
                for event in EventGenerator::new(total) {
                    engine.apply(black_box(event));
                }
                black_box(engine.quote())
            });
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut engine = Engine::new();
    for event in EventGenerator::new(7) {
        engine.apply(event);
    }
    let snapshot = engine.snapshot().clone();

    c.bench_function("encode_decode", |b| {
        b.iter(|| {
            let payload = session::encode(black_box(&snapshot));
            let json = payload.to_json().unwrap();
            let parsed = session::Payload::from_json(&json).unwrap();
            black_box(session::decode(Some(&parsed)))
        });
    });
}

criterion_group!(benches, bench_apply, bench_codec);
criterion_main!(benches);
