extern crate cgkit;

use cgkit::curve::{evaluate_curve_point, subdivision_levels};
use cgkit::prelude::*;

fn assert_near(lhs: Point2<f32>, rhs: Point2<f32>) {
    assert!(
        (lhs.x - rhs.x).abs() < 1e-5 && (lhs.y - rhs.y).abs() < 1e-5,
        "{:?} != {:?}",
        lhs,
        rhs
    );
}

fn polygon(len: usize) -> Vec<Point2<f32>> {
    (0..len)
        .map(|i| {
            let a = i as f32 * 0.9;
            Point2::new(a.cos() * (1.0 + i as f32 * 0.1), a.sin())
        })
        .collect()
}

#[test]
fn level_sizes() {
    for k in 0..10 {
        let points = polygon(k);
        let levels: Vec<_> = subdivision_levels(&points, 0.3).collect();

        assert_eq!(levels.len(), k);
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(level.len(), k - i);
        }
    }
}

#[test]
fn first_level_is_input() {
    let points = polygon(6);
    let first = subdivision_levels(&points, 0.8).next().unwrap();
    assert_eq!(first, points);
}

#[test]
fn last_level_is_curve_point() {
    for k in 1..10 {
        let points = polygon(k);
        for step in 0..=8 {
            let t = step as f32 / 8.0;
            let last = subdivision_levels(&points, t).last().unwrap();
            assert_eq!(last.len(), 1);
            assert_near(last[0], evaluate_curve_point(&points, t).unwrap());
        }
    }
}

#[test]
fn line() {
    let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)];
    let levels: Vec<_> = subdivision_levels(&points, 0.5).collect();
    assert_eq!(
        levels,
        vec![
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)],
            vec![Point2::new(0.5, 1.0)],
        ]
    );
}

#[test]
fn restartable() {
    let points = polygon(7);
    let lhs: Vec<_> = subdivision_levels(&points, 0.42).collect();
    let rhs: Vec<_> = subdivision_levels(&points, 0.42).collect();
    assert_eq!(lhs, rhs);
}

#[test]
fn snapshot() {
    let mut points = ControlPoints::new();
    points.append(Point2::new(0.0, 0.0));
    points.append(Point2::new(1.0, 0.0));

    let mut levels = subdivision_levels(points.as_slice(), 0.5);
    points.append(Point2::new(2.0, 0.0));

    assert_eq!(levels.next().unwrap().len(), 2);
    assert_eq!(levels.next().unwrap(), vec![Point2::new(0.5, 0.0)]);
    assert!(levels.next().is_none());
    assert!(levels.next().is_none());
}

#[test]
fn animator() {
    let mut animator = CurveAnimator::new(CurveParams {
        max_count: 4,
        ..Default::default()
    });

    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(4.0, 0.0),
    ];

    assert_eq!(animator.t(), 0.0);
    assert_eq!(animator.samples(&points), vec![Point2::new(0.0, 0.0)]);

    animator.advance();
    animator.advance();
    assert_eq!(animator.t(), 0.5);
    assert_eq!(animator.samples(&points).len(), 3);
    assert_eq!(
        animator.levels(&points).last(),
        Some(vec![Point2::new(2.0, 0.0)])
    );

    animator.advance();
    animator.advance();
    assert_eq!(animator.count(), 4);
    assert_eq!(animator.t(), 1.0);

    animator.advance();
    assert_eq!(animator.count(), 0);
    assert!(animator.samples(&[]).is_empty());
    assert_eq!(animator.levels(&[]).count(), 0);
}

#[test]
fn editing() {
    let mut points = ControlPoints::new();
    let viewport = Vector2::new(800, 600);

    let p = points.append_cursor(Vector2::new(200.0, 150.0), viewport);
    assert_eq!(p, Point2::new(-0.5, 0.5));
    points.append_cursor(Vector2::new(600.0, 450.0), viewport);
    assert_eq!(points.len(), 2);

    assert_eq!(
        evaluate_curve_point(points.as_slice(), 0.5),
        Some(Point2::new(0.0, 0.0))
    );

    points.remove_last();
    points.remove_last();
    points.remove_last();
    assert!(points.is_empty());
    assert_eq!(evaluate_curve_point(points.as_slice(), 0.5), None);
}
