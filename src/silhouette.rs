//! Obstacle outlines turned into closed horizon silhouettes.
//!
//! Each obstacle is a loose list of azimuth/height points. Before drawing, the
//! list is closed down to the ground (the first obstacle starts at height 0,
//! every obstacle ends at height 0), padded to an even length, floored at the
//! diagram's minimum azimuth and reordered so the outline rises through its
//! first half and falls through its second half. The result never folds over
//! itself, whatever order the points were typed in.

use std::cmp::Ordering;

use crate::solar::MIN_AZIMUTH_DEG;
use crate::types::{HorizonPoint, Obstacle};

#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    pub points: Vec<HorizonPoint>,
}

impl Silhouette {
    pub fn first(&self) -> HorizonPoint {
        self.points[0]
    }

    pub fn last(&self) -> HorizonPoint {
        self.points[self.points.len() - 1]
    }
}

/// Segment joining two consecutive silhouettes into one horizon profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: HorizonPoint,
    pub to: HorizonPoint,
}

fn by_height(a: &HorizonPoint, b: &HorizonPoint) -> Ordering {
    a.height.total_cmp(&b.height)
}

/// Rise-then-fall ordering. Odd lengths fall back to a plain ascending sort.
pub fn ascend_descend(mut points: Vec<HorizonPoint>) -> Vec<HorizonPoint> {
    if points.len() % 2 != 0 {
        points.sort_by(by_height);
        return points;
    }
    let mid = points.len() / 2;
    let (rising, falling) = points.split_at_mut(mid);
    rising.sort_by(by_height);
    falling.sort_by(|a, b| by_height(b, a));
    points
}

/// Close one obstacle's points. `first` marks the leftmost obstacle of the horizon.
pub fn close_outline(points: &[HorizonPoint], first: bool) -> Option<Silhouette> {
    let mut pts = points.to_vec();
    let head = *pts.first()?;

    if first && head.height != 0.0 {
        pts.insert(0, HorizonPoint::new(head.azimuth, 0.0));
    }

    let tail = pts[pts.len() - 1];
    if tail.height != 0.0 {
        pts.push(HorizonPoint::new(tail.azimuth, 0.0));
    }

    if pts.len() % 2 != 0 {
        let tail = pts[pts.len() - 1];
        pts.push(HorizonPoint::new(tail.azimuth, 0.0));
    }

    for p in &mut pts {
        p.azimuth = p.azimuth.max(MIN_AZIMUTH_DEG);
    }

    Some(Silhouette {
        points: ascend_descend(pts),
    })
}

/// Silhouettes for every obstacle with at least one point, in input order.
pub fn build_silhouettes(obstacles: &[Obstacle]) -> Vec<Silhouette> {
    let mut out = Vec::with_capacity(obstacles.len());
    for o in obstacles {
        let resolved = o.resolved();
        if let Some(s) = close_outline(&resolved, out.is_empty()) {
            out.push(s);
        }
    }
    out
}

pub fn connectors(silhouettes: &[Silhouette]) -> Vec<Connector> {
    silhouettes
        .windows(2)
        .map(|w| Connector {
            from: w[0].last(),
            to: w[1].first(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointInput;

    fn hp(azimuth: f64, height: f64) -> HorizonPoint {
        HorizonPoint::new(azimuth, height)
    }

    fn obstacle(points: &[(f64, f64)]) -> Obstacle {
        Obstacle::new(points.iter().map(|&(a, h)| PointInput::new(a, h)).collect())
    }

    #[test]
    fn single_point_obstacle_is_closed_on_both_sides() {
        let s = build_silhouettes(&[obstacle(&[(100.0, 20.0)])]);
        assert_eq!(s.len(), 1);
        assert_eq!(
            s[0].points,
            vec![hp(100.0, 0.0), hp(100.0, 20.0), hp(100.0, 0.0), hp(100.0, 0.0)]
        );
    }

    #[test]
    fn later_obstacles_only_close_their_end() {
        let s = build_silhouettes(&[
            obstacle(&[(60.0, 10.0)]),
            obstacle(&[(150.0, 30.0), (170.0, 15.0)]),
        ]);
        assert_eq!(s.len(), 2);
        // (150,30),(170,15) + (170,0) → odd → + (170,0); halves sorted
        assert_eq!(
            s[1].points,
            vec![hp(170.0, 15.0), hp(150.0, 30.0), hp(170.0, 0.0), hp(170.0, 0.0)]
        );
    }

    #[test]
    fn output_is_even_and_grounded() {
        let cases = vec![
            vec![obstacle(&[(40.0, 5.0)])],
            vec![obstacle(&[(40.0, 5.0), (50.0, 12.0), (55.0, 3.0)])],
            vec![
                obstacle(&[(90.0, 0.0), (100.0, 40.0)]),
                obstacle(&[(200.0, 10.0)]),
                obstacle(&[(250.0, 25.0), (260.0, 25.0), (270.0, 0.0)]),
            ],
            vec![obstacle(&[(10.0, 8.0), (20.0, 16.0)])],
        ];
        for obstacles in cases {
            let sil = build_silhouettes(&obstacles);
            for (i, s) in sil.iter().enumerate() {
                assert!(s.points.len() >= 2);
                assert_eq!(s.points.len() % 2, 0);
                assert_eq!(s.last().height, 0.0, "obstacle {i} must end on the ground");
                assert!(s.points.iter().all(|p| p.azimuth >= MIN_AZIMUTH_DEG));
            }
            assert_eq!(sil[0].first().height, 0.0);
        }
    }

    #[test]
    fn azimuths_below_domain_are_floored() {
        let s = build_silhouettes(&[obstacle(&[(10.0, 8.0), (20.0, 16.0)])]);
        assert!(s[0].points.iter().all(|p| p.azimuth == MIN_AZIMUTH_DEG));
    }

    #[test]
    fn builder_is_idempotent_on_its_output() {
        let obstacles = vec![
            obstacle(&[(80.0, 12.0), (95.0, 30.0), (110.0, 18.0)]),
            obstacle(&[(200.0, 5.0), (230.0, 22.0)]),
        ];
        let once = build_silhouettes(&obstacles);
        let again: Vec<Silhouette> = once
            .iter()
            .enumerate()
            .filter_map(|(i, s)| close_outline(&s.points, i == 0))
            .collect();
        assert_eq!(once, again);
    }

    #[test]
    fn shuffled_points_rise_then_fall() {
        let s = build_silhouettes(&[obstacle(&[
            (120.0, 25.0),
            (100.0, 5.0),
            (110.0, 40.0),
            (130.0, 10.0),
            (125.0, 15.0),
        ])]);
        let heights: Vec<f64> = s[0].points.iter().map(|p| p.height).collect();
        let mid = heights.len() / 2;
        assert!(heights[..mid].windows(2).all(|w| w[0] <= w[1]));
        assert!(heights[mid..].windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn blank_points_and_empty_obstacles() {
        let obstacles = vec![
            Obstacle::default(),
            Obstacle::new(vec![PointInput {
                azimuth: None,
                height: Some(12.0),
            }]),
        ];
        let s = build_silhouettes(&obstacles);
        // The empty obstacle is skipped, so the second one is treated as first.
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].first(), hp(MIN_AZIMUTH_DEG, 0.0));
        assert!(s[0].points.iter().any(|p| p.height == 12.0));
    }

    #[test]
    fn ascend_descend_on_odd_input_sorts_ascending() {
        let out = ascend_descend(vec![hp(1.0, 3.0), hp(2.0, 1.0), hp(3.0, 2.0)]);
        let heights: Vec<f64> = out.iter().map(|p| p.height).collect();
        assert_eq!(heights, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn connectors_join_consecutive_silhouettes() {
        let sil = build_silhouettes(&[
            obstacle(&[(60.0, 10.0)]),
            obstacle(&[(150.0, 30.0)]),
            obstacle(&[(250.0, 20.0)]),
        ]);
        let links = connectors(&sil);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].from, sil[0].last());
        assert_eq!(links[0].to, sil[1].first());
        assert_eq!(links[1].to, sil[2].first());
        assert!(connectors(&sil[..1]).is_empty());
    }
}
