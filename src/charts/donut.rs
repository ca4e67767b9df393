use serde::Serialize;

use crate::models::SalesShare;

const CENTER: f64 = 50.0;
const RADIUS: f64 = 40.0;

/// One drawable slice of the donut. Angles are degrees from the circle's
/// zero axis; the consumer rotates the whole chart -90° so slices start at
/// twelve o'clock.
#[derive(Debug, Clone, Serialize)]
pub struct ArcSegment {
    pub source: String,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
}

/// Converts percentage shares into pie-slice arc paths on a fixed radius-40
/// circle centered at (50,50), in input order. Each slice spans
/// `percentage * 3.6` degrees starting where the previous one ended.
pub fn donut_arcs(shares: &[SalesShare]) -> Vec<ArcSegment> {
    let mut segments = Vec::with_capacity(shares.len());
    let mut cumulative = 0.0;

    for share in shares {
        let start_angle = cumulative / 100.0 * 360.0;
        cumulative += share.percentage;
        let end_angle = start_angle + share.percentage / 100.0 * 360.0;

        let start_rad = start_angle.to_radians();
        let end_rad = end_angle.to_radians();

        let x1 = CENTER + RADIUS * start_rad.cos();
        let y1 = CENTER + RADIUS * start_rad.sin();
        let x2 = CENTER + RADIUS * end_rad.cos();
        let y2 = CENTER + RADIUS * end_rad.sin();

        let large_arc_flag = if share.percentage > 50.0 { 1 } else { 0 };

        let path = format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            CENTER, CENTER, x1, y1, RADIUS, RADIUS, large_arc_flag, x2, y2
        );

        segments.push(ArcSegment {
            source: share.source.clone(),
            percentage: share.percentage,
            start_angle,
            end_angle,
            path,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares(percentages: &[f64]) -> Vec<SalesShare> {
        percentages
            .iter()
            .enumerate()
            .map(|(i, p)| SalesShare {
                source: format!("Source {}", i),
                amount_cents: 0,
                percentage: *p,
            })
            .collect()
    }

    #[test]
    fn full_circle_spans_sum_to_360_degrees() {
        let segments = donut_arcs(&shares(&[47.1, 21.1, 24.0, 7.8]));
        assert_eq!(segments.len(), 4);

        let total_span: f64 = segments.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total_span - 360.0).abs() < 1e-9, "span was {}", total_span);
        assert!((segments.last().unwrap().end_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn segments_are_contiguous_in_input_order() {
        let segments = donut_arcs(&shares(&[47.1, 21.1, 24.0, 7.8]));
        assert_eq!(segments[0].start_angle, 0.0);
        for pair in segments.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
    }

    #[test]
    fn large_arc_flag_set_above_half() {
        let segments = donut_arcs(&shares(&[60.0, 40.0]));
        assert!(segments[0].path.contains("A 40 40 0 1 1"));
        assert!(segments[1].path.contains("A 40 40 0 0 1"));
    }

    #[test]
    fn quarter_slice_geometry() {
        let segments = donut_arcs(&shares(&[25.0]));
        let seg = &segments[0];
        assert_eq!(seg.start_angle, 0.0);
        assert_eq!(seg.end_angle, 90.0);

        // Starts on the zero axis at (90, 50); 90° later x is back at the
        // center line and y is at the bottom of the circle.
        assert!(seg.path.starts_with("M 50 50 L 90 50 A 40 40 0 0 1"));
        let x2 = CENTER + RADIUS * 90f64.to_radians().cos();
        let y2 = CENTER + RADIUS * 90f64.to_radians().sin();
        assert!(seg.path.contains(&format!("{} {} Z", x2, y2)));
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(donut_arcs(&[]).is_empty());
    }

    #[test]
    fn partial_totals_leave_a_gap() {
        let segments = donut_arcs(&shares(&[30.0, 30.0]));
        let total_span: f64 = segments.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total_span - 216.0).abs() < 1e-9);
    }
}
