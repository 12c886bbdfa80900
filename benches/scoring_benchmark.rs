use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use zone_challenge::models::{Activity, HeartRateZones};
use zone_challenge::scoring::{
    compare, project, AthleteHistory, AthleteStats, CompetitionWindow,
};

/// A season of synthetic activities: one per day, mixed sports, some points
/// stored as text.
fn synthetic_activities(athlete_id: u64, count: u64) -> Vec<Activity> {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
    (0..count)
        .map(|i| Activity {
            id: athlete_id * 100_000 + i,
            athlete_id,
            name: format!("Activity {}", i),
            sport_type: match i % 4 {
                0 => Some("Run".to_string()),
                1 => Some("Ride".to_string()),
                2 => Some("WeightTraining".to_string()),
                _ => None,
            },
            start_date: start + Duration::days(i as i64),
            distance_meters: 5_000.0 + i as f64,
            moving_time_seconds: 1_800.0,
            average_heartrate: Some(145.0),
            max_heartrate: Some(175.0),
            average_speed: Some(2.8),
            total_elevation_gain: Some(40.0),
            zone_points: Some(if i % 3 == 0 {
                format!("{}", (i % 50) as f64 + 0.5).as_str().into()
            } else {
                ((i % 40) as f64).into()
            }),
            in_competition_window: true,
            hidden: if i % 17 == 0 { Some(true) } else { None },
            exclude_from_pace_analysis: false,
            heart_rate_zones: Some(HeartRateZones {
                zone_1: 300.0,
                zone_2: 600.0,
                zone_3: 500.0,
                zone_4: 300.0,
                zone_5: 100.0,
            }),
        })
        .collect()
}

fn benchmark_stats(c: &mut Criterion) {
    let first = synthetic_activities(1, 365);
    let second = synthetic_activities(2, 365);

    let mut group = c.benchmark_group("athlete_stats");

    group.bench_function("from_activities_one_year", |b| {
        b.iter(|| AthleteStats::from_activities(1, black_box(&first)))
    });

    let stats1 = AthleteStats::from_activities(1, &first);
    let stats2 = AthleteStats::from_activities(2, &second);
    group.bench_function("compare", |b| {
        b.iter(|| compare(black_box(Some(&stats1)), black_box(Some(&stats2))))
    });

    group.finish();
}

fn benchmark_projections(c: &mut Criterion) {
    let roster: Vec<Vec<Activity>> = (1..=50).map(|id| synthetic_activities(id, 120)).collect();
    let histories: Vec<AthleteHistory<'_>> = roster
        .iter()
        .enumerate()
        .map(|(i, activities)| AthleteHistory {
            athlete_id: i as u64 + 1,
            name: format!("Athlete {}", i + 1),
            activities: activities.as_slice(),
        })
        .collect();

    let window = CompetitionWindow {
        start: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 5, 3, 0, 0, 0).unwrap(),
    };
    let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

    c.bench_function("project_fifty_athletes", |b| {
        b.iter(|| project(black_box(&window), now, black_box(&histories)))
    });
}

criterion_group!(benches, benchmark_stats, benchmark_projections);
criterion_main!(benches);
