#[cfg(test)]
mod tests {
    use separator_dashboard::hooks::use_endpoint::FetchState;
    use separator_dashboard::models::{
        chart::ChartModel,
        energy::CurrentMetrics,
        error::AppError,
        palette::StateColorRegistry,
        refresh::RefreshCoordinator,
        state::OperatingState,
        summary::{self, EnergySummary},
        telemetry::{TelemetryPoint, TimelineSample, normalize},
        ticks,
    };
    use separator_dashboard::services::api::{ApiConfig, rejection_detail};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::rc::Rc;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 0, 0, 0).unwrap()
    }

    // One sample per minute over `minutes` minutes, endpoints included
    fn minute_series(minutes: i64) -> Vec<TelemetryPoint> {
        (0..=minutes)
            .map(|m| TelemetryPoint::new(start() + Duration::minutes(m), 40.0))
            .collect()
    }

    fn sample_summary() -> EnergySummary {
        serde_json::from_str(
            r#"{
                "period": "Last 7 days",
                "rate_per_kwh": 0.30,
                "total_cost_usd": 36.0,
                "total_kwh": 120.0,
                "by_state": {
                    "Processing": {"hours": 10.0, "kwh": 50.0, "cost_usd": 15.0, "pct_time": 41.7},
                    "CIP": {"hours": 4.0, "kwh": 30.0, "cost_usd": 9.0, "pct_time": 16.7},
                    "Shutdown": {"hours": 10.0, "kwh": 40.0, "cost_usd": 12.0, "pct_time": 41.6}
                },
                "by_shift": {
                    "1st Shift": {
                        "hours": 8.0, "kwh": 40.0, "cost_usd": 12.0,
                        "by_state": {
                            "Processing": {"hours": 8.0, "kwh": 40.0, "cost_usd": 12.0, "pct_time": 100.0}
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_barrier_releases_after_every_widget_reports() {
        let mut coordinator = RefreshCoordinator::new();
        let token = coordinator.begin(8).unwrap();

        for _ in 0..7 {
            coordinator.complete(token);
            assert!(coordinator.is_pending());
        }
        coordinator.complete(token);
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_stale_reports_do_not_count() {
        let mut coordinator = RefreshCoordinator::new();
        let first = coordinator.begin(2).unwrap();
        let second = coordinator.begin(2).unwrap();
        assert_ne!(first, second);

        assert!(!coordinator.complete(first));
        assert!(!coordinator.complete(first));
        assert!(coordinator.is_pending());
        assert_eq!(coordinator.generation().completed_count, 0);

        coordinator.complete(second);
        coordinator.complete(second);
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_begin_rejects_empty_barrier() {
        let mut coordinator = RefreshCoordinator::new();
        assert!(matches!(
            coordinator.begin(0),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_deadline_releases_a_stuck_generation() {
        let mut coordinator = RefreshCoordinator::new();
        let token = coordinator.begin(8).unwrap();
        coordinator.complete(token);

        assert_eq!(coordinator.expire(token), Some(7));
        assert!(!coordinator.is_pending());
        assert_eq!(coordinator.expire(token), None);
    }

    #[test]
    fn test_normalize_inserts_marker_after_gap() {
        let raw = vec![
            TelemetryPoint::new(start(), 10.0),
            TelemetryPoint::new(start() + Duration::minutes(1), 12.0),
            TelemetryPoint::new(start() + Duration::minutes(10), 14.0),
        ];
        let normalized = normalize(&raw, Duration::minutes(5)).unwrap();

        assert_eq!(normalized.len(), 4);
        assert!(normalized[2].is_gap());
        assert_eq!(
            normalized[2].timestamp,
            start() + Duration::minutes(1) + Duration::milliseconds(1)
        );
        assert_eq!(normalized[3].value, Some(14.0));
    }

    #[test]
    fn test_normalize_empty_and_out_of_order() {
        assert!(normalize(&[], Duration::minutes(5)).unwrap().is_empty());

        let raw = vec![
            TelemetryPoint::new(start() + Duration::minutes(2), 1.0),
            TelemetryPoint::new(start(), 2.0),
        ];
        assert!(matches!(
            normalize(&raw, Duration::minutes(5)),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_timeline_samples_feed_the_normalizer() {
        let samples: Vec<TimelineSample> = serde_json::from_str(
            r#"[
                {"timestamp": "2026-02-14T00:00:00Z", "kw": 40.5, "state": "Processing", "tou_period": "Off-Peak", "shift": "3rd Shift"},
                {"timestamp": "2026-02-14T00:20:00", "kw": 0.0, "state": "Idle", "tou_period": "Off-Peak", "shift": "3rd Shift"}
            ]"#,
        )
        .unwrap();

        let points: Vec<TelemetryPoint> = samples.into_iter().map(TelemetryPoint::from).collect();
        let normalized = normalize(&points, Duration::minutes(5)).unwrap();

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].category.as_deref(), Some("Processing"));
        assert!(normalized[1].is_gap());
    }

    #[test]
    fn test_ticks_thin_out_over_a_day() {
        let day = ticks::plan_in(&minute_series(24 * 60), &Utc);
        assert_eq!(day.len(), 9);
        assert_eq!(day[0].label, "12 AM");
        assert_eq!(day[1].label, "3 AM");

        let shift = ticks::plan_in(&minute_series(10 * 60), &Utc);
        assert_eq!(shift.len(), 11);
        assert_eq!(shift[10].label, "10 AM");
    }

    #[test]
    fn test_missing_state_renders_as_zero_row() {
        let view = summary::render(&sample_summary(), &StateColorRegistry::standard());

        let labels: Vec<&str> = view.states.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["Processing", "CIP", "Idle", "Shutdown"]);

        let idle = &view.states[2];
        assert_eq!(idle.hours, "0.0 hrs");
        assert_eq!(idle.cost, "$0.00");
        assert_eq!(idle.share.as_deref(), Some("0.0%"));
    }

    #[test]
    fn test_processing_row_end_to_end() {
        let view = summary::render(&sample_summary(), &StateColorRegistry::standard());
        let processing = &view.states[0];

        assert_eq!(processing.hours, "10.0 hrs");
        assert_eq!(processing.energy, "50.0 kWh");
        assert_eq!(processing.cost, "$15.00");
        assert_eq!(processing.share.as_deref(), Some("41.7%"));
        assert_eq!(processing.color.hex(), "#22C55E");
    }

    #[test]
    fn test_shift_table_nests_states_and_fills_missing_shifts() {
        let view = summary::render(&sample_summary(), &StateColorRegistry::standard());

        // 1st shift plus its four states, then the two empty shifts
        assert_eq!(view.shifts.len(), 7);
        assert_eq!(view.shifts[0].label, "1st Shift");
        assert_eq!(view.shifts[1].depth, 1);
        assert_eq!(view.shifts[5].label, "2nd Shift");
        assert_eq!(view.shifts[5].cost, "$0.00");
        assert_eq!(view.shifts[6].label, "3rd Shift");
    }

    #[test]
    fn test_colors_are_stable_across_registries() {
        let a = StateColorRegistry::standard();
        let b = StateColorRegistry::default();

        for state in OperatingState::all() {
            assert_eq!(a.state_color(*state), b.state_color(*state));
        }
        assert_eq!(a.color_of("Maintenance"), b.color_of("Maintenance"));
        assert_eq!(a.color_of("Maintenance"), a.fallback());
    }

    #[test]
    fn test_state_pie_skips_idle_without_cost() {
        let summary = sample_summary();
        let ChartModel::Pie { slices } =
            ChartModel::state_pie(&summary, &StateColorRegistry::standard())
        else {
            panic!("expected a pie");
        };

        let labels: Vec<&str> = slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Processing", "CIP", "Shutdown"]);
    }

    #[test]
    fn test_kpis_from_summary() {
        let kpis = sample_summary().kpis();

        assert!((kpis.avg_cost_per_hour - 36.0 / 24.0).abs() < 1e-9);
        assert!((kpis.processing_pct - 41.7).abs() < 1e-9);
    }

    #[test]
    fn test_fetch_state_data() {
        let loading: FetchState<EnergySummary> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let loaded = FetchState::Loaded(Rc::new(sample_summary()));
        assert!(!loaded.is_loading());
        assert_eq!(loaded.data().map(|s| s.total_kwh), Some(120.0));

        let failed: FetchState<EnergySummary> = FetchState::Error(AppError::Timeout.to_string());
        assert_eq!(failed.error(), Some("Request timed out"));
    }

    #[test]
    fn test_api_urls_and_rejection_details() {
        let config = ApiConfig::builder()
            .base_url("http://plant.local:8000/api/")
            .build();
        assert_eq!(config.url("/energy/summary"), "http://plant.local:8000/api/energy/summary");

        assert_eq!(rejection_detail(r#"{"detail": "Rate out of range"}"#), "Rate out of range");
        assert_eq!(
            rejection_detail(r#"{"detail": [{"loc": ["body"], "msg": "value is not a valid float"}]}"#),
            "value is not a valid float"
        );
        assert_eq!(rejection_detail("<html>"), "Save failed");
    }

    #[test]
    fn test_current_snapshot_with_color_field() {
        let current: CurrentMetrics = serde_json::from_str(
            r##"{"amps": 61.2, "kw": 42.9, "cost_per_hour": 12.87, "state": "Processing",
                "color": "#22C55E", "tou_period": "Peak", "tou_rate": 0.30, "shift": "1st Shift"}"##,
        )
        .unwrap();

        assert_eq!(current.state, "Processing");
        assert_eq!(current.kw, Some(42.9));
        assert_eq!(current.shift, "1st Shift");
    }
}
