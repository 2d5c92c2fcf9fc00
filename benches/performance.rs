use budget_engine::ledger::{
    balance, expand, never_ending_end_date, order_transactions, BalanceWindow, Direction, Ledger,
    RecurrencePeriod, Transaction, TransactionOrder,
};
use budget_engine::storage::json_backend::{load_ledger_from_path, save_ledger_to_path};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use tempfile::tempdir;

const PERIODS: [RecurrencePeriod; 5] = [
    RecurrencePeriod::Daily,
    RecurrencePeriod::Weekly,
    RecurrencePeriod::Fortnightly,
    RecurrencePeriod::Monthly,
    RecurrencePeriod::Yearly,
];

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new("Benchmark");
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..txn_count {
        let start = start_date + Duration::days((idx % 365) as i64);
        let direction = if idx % 4 == 0 {
            Direction::Income
        } else {
            Direction::Expense
        };
        let amount = Decimal::new(5_000 + (idx % 100) as i64 * 25, 2);
        let txn = Transaction::new(format!("txn-{idx}"), amount, direction, start)
            .with_recurrence(PERIODS[idx % PERIODS.len()], start + Duration::days(730));
        ledger.add_transaction(txn);
    }
    ledger
}

fn bench_expand(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let end = never_ending_end_date(start, 12);

    c.bench_function("expand_daily_12y", |b| {
        b.iter(|| expand(black_box(start), RecurrencePeriod::Daily, black_box(end)))
    });
    c.bench_function("expand_monthly_12y", |b| {
        b.iter(|| expand(black_box(start), RecurrencePeriod::Monthly, black_box(end)))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let ledger = build_sample_ledger(2_000);
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let custom = BalanceWindow::Custom {
        start: today,
        end: today + Duration::days(365),
    };

    c.bench_function("balance_yearly_2k", |b| {
        b.iter(|| balance(&BalanceWindow::Yearly, black_box(&ledger.transactions), today))
    });
    c.bench_function("balance_custom_2k", |b| {
        b.iter(|| balance(&custom, black_box(&ledger.transactions), today))
    });
    c.bench_function("order_by_date_2k", |b| {
        b.iter(|| {
            order_transactions(
                TransactionOrder::DateAscending,
                black_box(&ledger.transactions),
                today,
            )
        })
    });
}

fn bench_ledger_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(1_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("ledger.json");

    c.bench_function("ledger_save_1k", |b| {
        b.iter(|| {
            save_ledger_to_path(&ledger, &file_path).expect("save ledger");
        })
    });

    save_ledger_to_path(&ledger, &file_path).expect("seed");

    c.bench_function("ledger_load_1k", |b| {
        b.iter(|| {
            let loaded = load_ledger_from_path(&file_path).expect("load ledger");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_expand, bench_aggregate, bench_ledger_io);
criterion_main!(benches);
