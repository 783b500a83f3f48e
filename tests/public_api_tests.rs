mod common;

use common::{date, days_ago, pinned_engine, sample_log, vehicle};
use vehicle_core::{
    build_chart_series, build_distribution, build_mileage_track, build_yearly_comparison,
    compute_stats,
    domain::{ExpenseRecord, ExpenseType, MileageTrack},
};

#[test]
fn total_expenses_covers_every_amount() {
    let car = vehicle();
    let expenses = sample_log(&car);
    let expected: f64 = expenses.iter().map(|e| e.amount).sum();

    let stats = compute_stats(&expenses, &car).expect("stats");
    assert_eq!(stats.total_expenses, expected);
    assert_eq!(
        stats.total_fuel_spend,
        62.5 + 60.25 + 20.0 + 64.0 + 58.5 + 61.0
    );
}

#[test]
fn two_fill_scenario() {
    let car = vehicle();
    let expenses = vec![
        ExpenseRecord::fuel(car.id, date(2024, 1, 1), 60.0, 40.0, 10_000),
        ExpenseRecord::fuel(car.id, date(2024, 2, 1), 65.0, 42.0, 10_600),
    ];
    let stats = compute_stats(&expenses, &car).expect("stats");

    assert_eq!(stats.lifetime.distance, 600);
    assert!((stats.average_fuel_consumption - 7.0).abs() < 1e-9);
    assert!((stats.cost_per_distance.fuel - 65.0 / 600.0).abs() < 1e-9);
    assert!((stats.cost_per_distance.total - 125.0 / 600.0).abs() < 1e-9);
    assert!((stats.average_fuel_price - 65.0 / 42.0).abs() < 1e-9);
    assert!(stats.has_fuel_expenses);
}

#[test]
fn decreasing_odometer_contributes_nothing() {
    let car = vehicle();
    let expenses = vec![
        ExpenseRecord::fuel(car.id, date(2024, 1, 1), 60.0, 40.0, 10_600),
        ExpenseRecord::fuel(car.id, date(2024, 2, 1), 65.0, 42.0, 10_000),
    ];
    let stats = compute_stats(&expenses, &car).expect("stats");

    assert_eq!(stats.lifetime.distance, 0);
    assert_eq!(stats.lifetime.fuel_volume, 0.0);
    assert_eq!(stats.average_fuel_consumption, 0.0);
    assert_eq!(stats.recent_average_fuel_consumption, 0.0);
    assert_eq!(stats.cost_per_distance.fuel, 0.0);
    assert_eq!(stats.cost_per_distance.total, 0.0);
    assert_eq!(stats.average_fuel_price, 0.0);
    assert!(stats.has_fuel_expenses);
}

#[test]
fn sample_log_pairs_around_the_correction() {
    let car = vehicle();
    let stats = compute_stats(&sample_log(&car), &car).expect("stats");

    // 48_200 -> 48_850 -> 49_500; 49_400 skips back to 48_850; 50_100 pairs with 49_400.
    assert_eq!(stats.lifetime.fuel_events, 5);
    assert_eq!(stats.lifetime.paired_events, 4);
    assert_eq!(stats.lifetime.distance, 650 + 650 + 550 + 700);
    assert_eq!(stats.lifetime.fuel_volume, 39.5 + 42.0 + 38.0 + 40.0);
}

#[test]
fn distribution_sums_to_total() {
    let car = vehicle();
    let expenses = sample_log(&car);
    let stats = compute_stats(&expenses, &car).expect("stats");
    let shares = build_distribution(&expenses);

    let sum: f64 = shares.iter().map(|s| s.value).sum();
    assert!((sum - stats.total_expenses).abs() < 1e-9);
    let categories: Vec<ExpenseType> = shares.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            ExpenseType::Fuel,
            ExpenseType::Maintenance,
            ExpenseType::Insurance,
            ExpenseType::Fine,
            ExpenseType::Toll,
        ]
    );
}

#[test]
fn empty_mileage_track_is_zeroed() {
    assert_eq!(
        build_mileage_track(&[], &vehicle()),
        MileageTrack {
            current: 0,
            year_start: 0,
            year_progress: 0
        }
    );
}

#[test]
fn chart_excludes_old_non_fuel_and_empty_fills() {
    let car = vehicle();
    let expenses = vec![
        ExpenseRecord::fuel(car.id, days_ago(400), 60.0, 40.0, 10_000),
        ExpenseRecord::fuel(car.id, days_ago(366), 60.0, 40.0, 10_200),
        ExpenseRecord::fuel(car.id, days_ago(200), 70.0, 40.0, 12_000),
        ExpenseRecord::fuel(car.id, days_ago(30), 63.0, 0.0, 14_000),
        ExpenseRecord::new(car.id, days_ago(20), ExpenseType::Maintenance, 90.0)
            .with_fuel_volume(4.0),
        ExpenseRecord::new(car.id, days_ago(10), ExpenseType::Fuel, 55.0).with_fuel_volume(35.0),
    ];
    let series = pinned_engine().build_chart_series(&expenses);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, days_ago(200));
    assert_eq!(series[0].price, 1.75);
    assert_eq!(series[0].mileage, Some(12_000));
    assert_eq!(series[1].price, 1.571);
    assert_eq!(series[1].mileage, None);
}

#[test]
fn empty_input_yields_empty_outputs() {
    let car = vehicle();
    assert!(compute_stats(&[], &car).is_none());
    assert!(build_chart_series(&[]).is_empty());
    assert!(build_distribution(&[]).is_empty());
    assert!(build_yearly_comparison(&[]).is_empty());
}

#[test]
fn compute_stats_is_idempotent() {
    let car = vehicle();
    let expenses = sample_log(&car);
    let before = expenses.clone();

    let first = compute_stats(&expenses, &car);
    let second = compute_stats(&expenses, &car);
    assert_eq!(first, second);
    assert_eq!(expenses, before);
}

#[test]
fn yearly_comparison_always_lists_four_categories() {
    let car = vehicle();
    let expenses = vec![ExpenseRecord::new(
        car.id,
        days_ago(0),
        ExpenseType::Toll,
        4.0,
    )];
    let pairs = pinned_engine().build_yearly_comparison(&expenses);
    let names: Vec<&str> = pairs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Fuel", "Maintenance", "Repair", "Insurance"]);
    assert!(pairs
        .iter()
        .all(|p| p.current_year == 0.0 && p.previous_year == 0.0));
}

#[test]
fn chart_window_includes_its_first_day() {
    let car = vehicle();
    let expenses = vec![
        ExpenseRecord::fuel(car.id, days_ago(366), 60.0, 40.0, 10_000),
        ExpenseRecord::fuel(car.id, days_ago(365), 62.0, 40.0, 10_400),
        ExpenseRecord::fuel(car.id, days_ago(0), 64.0, 40.0, 11_000),
    ];
    let series = pinned_engine().build_chart_series(&expenses);

    let dates: Vec<_> = series.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2024, 6, 30), date(2025, 6, 30)]);
}

#[test]
fn huge_odometer_jumps_do_not_overflow_distance() {
    let car = vehicle();
    let half = u64::MAX / 2 + 10;
    let expenses = vec![
        ExpenseRecord::fuel(car.id, date(2024, 1, 1), 60.0, 40.0, 1),
        ExpenseRecord::fuel(car.id, date(2024, 2, 1), 60.0, 40.0, half),
        ExpenseRecord::fuel(car.id, date(2024, 3, 1), 60.0, 40.0, 2),
        ExpenseRecord::fuel(car.id, date(2024, 4, 1), 60.0, 40.0, half),
    ];
    let stats = pinned_engine().compute_stats(&expenses, &car).expect("stats");

    assert_eq!(stats.lifetime.distance, u64::MAX);
    assert!(stats.average_fuel_consumption.is_finite());
}
