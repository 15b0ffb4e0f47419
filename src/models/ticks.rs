use super::telemetry::TelemetryPoint;
use chrono::{DateTime, DurationRound, TimeDelta, TimeZone, Utc};

/// Above this many hourly candidates, keep every 3rd.
const SPARSE_ABOVE: usize = 24;
/// Above this many hourly candidates, keep every 2nd.
const HALF_ABOVE: usize = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub at: DateTime<Utc>,
    pub label: String,
}

/// Plans hour-aligned axis ticks spanning the series, in the browser's time zone.
pub fn plan(points: &[TelemetryPoint]) -> Vec<Tick> {
    plan_in(points, &chrono::Local)
}

/// Plans hour-aligned axis ticks from the hour containing the first point
/// through the last point inclusive, labelled with the hour of day in `tz`.
///
/// Candidates are thinned by count alone so labels never crowd, whether the
/// series covers one day or several.
pub fn plan_in<Tz>(points: &[TelemetryPoint], tz: &Tz) -> Vec<Tick>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let start = first.timestamp.with_timezone(tz);
    let start = start
        .clone()
        .duration_trunc(TimeDelta::hours(1))
        .unwrap_or(start);
    let end = last.timestamp.with_timezone(tz);

    let mut candidates = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        candidates.push(cursor.clone());
        cursor = cursor + TimeDelta::hours(1);
    }

    let step = if candidates.len() > SPARSE_ABOVE {
        3
    } else if candidates.len() > HALF_ABOVE {
        2
    } else {
        1
    };

    candidates
        .into_iter()
        .step_by(step)
        .map(|at| Tick {
            label: at.format("%-I %p").to_string(),
            at: at.with_timezone(&Utc),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn series(start: DateTime<Utc>, minutes: i64) -> Vec<TelemetryPoint> {
        (0..=minutes)
            .map(|m| TelemetryPoint::new(start + Duration::minutes(m), 1.0))
            .collect()
    }

    #[test]
    fn test_empty_series() {
        assert!(plan_in(&[], &Utc).is_empty());
    }

    #[test]
    fn test_first_tick_floors_to_hour() {
        let start = Utc.with_ymd_and_hms(2026, 2, 21, 13, 42, 10).unwrap();
        let ticks = plan_in(&series(start, 90), &Utc);

        assert_eq!(ticks[0].at, Utc.with_ymd_and_hms(2026, 2, 21, 13, 0, 0).unwrap());
        assert_eq!(ticks[0].label, "1 PM");
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[2].label, "3 PM");
    }

    #[test]
    fn test_fifteen_candidates_keep_every_second() {
        let start = Utc.with_ymd_and_hms(2026, 2, 21, 0, 0, 0).unwrap();
        let ticks = plan_in(&series(start, 14 * 60), &Utc);

        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[1].label, "2 AM");
    }

    #[test]
    fn test_labels_follow_time_zone() {
        let start = Utc.with_ymd_and_hms(2026, 2, 21, 12, 0, 0).unwrap();
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let ticks = plan_in(&series(start, 60), &pacific);

        assert_eq!(ticks[0].label, "4 AM");
        assert_eq!(ticks[0].at, start);
    }

    #[test]
    fn test_half_hour_offset_floors_locally() {
        let start = Utc.with_ymd_and_hms(2026, 2, 21, 12, 0, 0).unwrap();
        let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let ticks = plan_in(&series(start, 60), &india);

        // 12:00 UTC is 17:30 local, so the first tick is 17:00 local.
        assert_eq!(ticks[0].label, "5 PM");
        assert_eq!(ticks[0].at, start - Duration::minutes(30));
    }
}
