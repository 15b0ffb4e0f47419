use super::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// One sample of the separator's power draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryPoint {
    pub timestamp: DateTime<Utc>,
    /// kW, or `None` for a break in the series.
    pub value: Option<f64>,
    pub category: Option<String>,
    pub period_tag: Option<String>,
    pub shift_tag: Option<String>,
}

impl TelemetryPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            timestamp,
            value: Some(value),
            category: None,
            period_tag: None,
            shift_tag: None,
        }
    }

    /// Synthetic null sample forcing a visual break at `timestamp`.
    pub fn gap_marker(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            value: None,
            category: None,
            period_tag: None,
            shift_tag: None,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.value.is_none()
    }
}

/// Row of `GET /energy/timeline`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineSample {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub kw: Option<f64>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tou_period: String,
    #[serde(default)]
    pub shift: String,
}

impl From<TimelineSample> for TelemetryPoint {
    fn from(sample: TimelineSample) -> Self {
        Self {
            timestamp: sample.timestamp,
            value: sample.kw,
            category: Some(sample.state),
            period_tag: Some(sample.tou_period),
            shift_tag: Some(sample.shift),
        }
    }
}

/// Accepts RFC 3339 timestamps as well as offset-less ones, which are read
/// as UTC.
fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use chrono::NaiveDateTime;

    let s: String = Deserialize::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = s.trim_end_matches('Z');
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| dt.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse datetime '{s}'")))
}

/// Inserts a gap marker between every pair of adjacent points further apart
/// than `gap_threshold`, so a chart breaks the line instead of interpolating
/// across an outage.
///
/// Every input point is kept, unchanged and in order. A marker sits one
/// millisecond after the point preceding the gap, but never past the point
/// that follows it.
///
/// Input must be ordered by timestamp; a point earlier than its predecessor
/// is rejected with [`AppError::InvalidArgument`].
pub fn normalize(
    points: &[TelemetryPoint],
    gap_threshold: Duration,
) -> Result<Vec<TelemetryPoint>, AppError> {
    let Some(first) = points.first() else {
        return Ok(Vec::new());
    };

    let mut normalized = Vec::with_capacity(points.len() + 1);
    normalized.push(first.clone());

    for (index, pair) in points.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let delta = next.timestamp - prev.timestamp;

        if delta < Duration::zero() {
            return Err(AppError::InvalidArgument(format!(
                "timeline out of order at index {}: {} precedes {}",
                index + 1,
                next.timestamp,
                prev.timestamp
            )));
        }

        if delta > gap_threshold {
            let marker_at = (prev.timestamp + Duration::milliseconds(1)).min(next.timestamp);
            normalized.push(TelemetryPoint::gap_marker(marker_at));
        }
        normalized.push(next.clone());
    }

    Ok(normalized)
}

/// One colored cell of the state timeline strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSegment {
    pub at: DateTime<Utc>,
    pub state: String,
}

/// Thins the timeline to roughly `max_segments` cells by keeping every
/// `max(1, len / max_segments)`-th sample.
pub fn state_segments(samples: &[TimelineSample], max_segments: usize) -> Vec<TimelineSegment> {
    let step = (samples.len() / max_segments.max(1)).max(1);

    samples
        .iter()
        .step_by(step)
        .map(|sample| TimelineSegment {
            at: sample.timestamp,
            state: sample.state.clone(),
        })
        .collect()
}

/// First, middle and last sample timestamps, used as the strip's axis labels.
pub fn edge_times(samples: &[TimelineSample]) -> Option<[DateTime<Utc>; 3]> {
    let first = samples.first()?;
    let last = samples.last()?;
    let middle = &samples[samples.len() / 2];
    Some([first.timestamp, middle.timestamp, last.timestamp])
}
