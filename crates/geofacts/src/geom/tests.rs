use super::*;
use crate::error::DegenerateGeometry;
use proptest::prelude::*;

fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
    Segment::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
}

#[test]
fn identity_ignores_names() {
    let p = Point::named("P", 1.0, 2.0);
    let q = Point::named("Q", 1.0 + EPS / 2.0, 2.0 - EPS / 2.0);
    assert_eq!(p, q);
    assert_ne!(p, Point::named("P", 1.0 + 2.0 * EPS, 2.0));
}

#[test]
fn lexicographic_order_x_then_y() {
    let mut pts = vec![
        Point::new(1.0, 5.0),
        Point::new(0.0, 9.0),
        Point::new(1.0, -1.0),
    ];
    pts.sort();
    assert_eq!(pts[0], Point::new(0.0, 9.0));
    assert_eq!(pts[1], Point::new(1.0, -1.0));
    assert_eq!(pts[2], Point::new(1.0, 5.0));
}

#[test]
fn generated_labels_render_with_marker() {
    let p = Point::with_label(Label::Generated("AA".into()), 0.0, 0.0);
    assert_eq!(p.name(), Some("AA"));
    assert_eq!(p.to_string(), "*_AA(0.00, 0.00)");
    assert_eq!(Point::origin().to_string(), "origin(0.00, 0.00)");
}

#[test]
fn slope_and_vertical_failure() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(2.0, 1.0);
    assert!((slope(&a, &b).unwrap() - 0.5).abs() < 1e-12);
    let c = Point::new(0.0, 3.0);
    assert!(matches!(
        slope(&a, &c),
        Err(DegenerateGeometry::VerticalSlope(_, _))
    ));
    assert_eq!(Segment::new(a, c).slope(), f64::INFINITY);
}

#[test]
fn between_is_inclusive() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(4.0, 4.0);
    assert!(between(&a, &a, &b));
    assert!(between(&b, &a, &b));
    assert!(between(&Point::new(1.0, 1.0), &a, &b));
    assert!(!between(&Point::new(1.0, 1.5), &a, &b));
    assert!(!between(&Point::new(5.0, 5.0), &a, &b));
}

#[test]
fn segment_helpers() {
    let s = seg((3.0, 4.0), (0.0, 0.0));
    assert!((s.length() - 5.0).abs() < 1e-12);
    assert_eq!(*s.p1(), Point::new(0.0, 0.0));
    assert_eq!(s.other(&Point::new(0.0, 0.0)), Some(&Point::new(3.0, 4.0)));
    assert!(s.other(&Point::new(1.0, 1.0)).is_none());
    assert!(seg((0.0, 0.0), (0.0, 2.0)).is_vertical());
    assert!(seg((0.0, 1.0), (5.0, 1.0)).is_horizontal());
}

#[test]
fn has_sub_segment() {
    let s = seg((0.0, 0.0), (15.0, 15.0));
    assert!(s.has_sub_segment(&s));
    assert!(s.has_sub_segment(&seg((1.0, 1.0), (10.0, 10.0))));
    assert!(s.has_sub_segment(&seg((0.0, 0.0), (10.0, 10.0))));
    assert!(!s.has_sub_segment(&seg((56.0 / 15.0, 28.0 / 15.0), (-194.0 / 55.0, 182.0 / 55.0))));
}

#[test]
fn point_lies_between_excludes_endpoints() {
    let s = seg((0.0, 0.0), (2.0, 0.0));
    assert!(s.point_lies_on(&Point::new(0.0, 0.0)));
    assert!(!s.point_lies_between(&Point::new(0.0, 0.0)));
    assert!(s.point_lies_between(&Point::new(1.0, 0.0)));
}

#[test]
fn shared_vertex_cases() {
    let ab = seg((0.0, 0.0), (2.0, 0.0));
    let bc = seg((2.0, 0.0), (2.0, 2.0));
    let cd = seg((2.0, 2.0), (0.0, 2.0));
    assert_eq!(ab.shared_vertex(&bc), Some(&Point::new(2.0, 0.0)));
    assert!(ab.shared_vertex(&cd).is_none());
    assert!(ab.shared_vertex(&ab.clone()).is_none());
}

#[test]
fn collinearity_guards() {
    let diag = seg((0.0, 0.0), (1.0, 1.0));
    assert!(diag.is_collinear_with(&seg((2.0, 2.0), (3.0, 3.0))));
    // Parallel but offset.
    assert!(!diag.is_collinear_with(&seg((0.0, 1.0), (1.0, 2.0))));
    // Verticals on different x.
    assert!(!seg((0.0, 0.0), (0.0, 1.0)).is_collinear_with(&seg((1.0, 0.0), (1.0, 1.0))));
    // Perpendicular sides of a square.
    assert!(!seg((0.0, 0.0), (2.0, 0.0)).is_collinear_with(&seg((2.0, 0.0), (2.0, 2.0))));
    // Shallow piece sharing an endpoint with a horizontal one.
    let h = seg((0.0, 0.0), (50.0, 0.0));
    let shallow = seg((0.0, -0.004), (50.0, 0.0));
    assert!(!h.is_collinear_with(&shallow));
    assert!(!shallow.is_collinear_with(&h));
    assert!(!h.coincide_without_overlap(&shallow));
}

#[test]
fn coincide_without_overlap_cases() {
    let s = seg((0.0, 0.0), (15.0, 15.0));
    assert!(!s.coincide_without_overlap(&seg((0.0, 0.0), (15.0, 15.0))));
    assert!(!s.coincide_without_overlap(&seg((56.0 / 15.0, 28.0 / 15.0), (-194.0 / 55.0, 182.0 / 55.0))));
    assert!(s.coincide_without_overlap(&seg((20.0, 20.0), (30.0, 30.0))));
    assert!(s.coincide_without_overlap(&seg((15.0, 15.0), (30.0, 30.0))));
    assert!(!s.coincide_without_overlap(&seg((14.0, 14.0), (30.0, 30.0))));

    let v1 = seg((0.0, 0.0), (0.0, 15.0));
    assert!(v1.coincide_without_overlap(&seg((0.0, 20.0), (0.0, 30.0))));
    let h1 = seg((0.0, 0.0), (15.0, 0.0));
    assert!(h1.coincide_without_overlap(&seg((20.0, 0.0), (30.0, 0.0))));
    assert!(!h1.coincide_without_overlap(&seg((5.0, 0.0), (30.0, 0.0))));
}

#[test]
fn ordered_points_on_projects_and_sorts() {
    let s = seg((0.0, 0.0), (15.0, 15.0));
    let cands = vec![
        Point::named("5", 5.0, 5.0),
        Point::named("1", 1.0, 1.0),
        Point::named("off", 3.0, 4.0),
        Point::named("10", 10.0, 10.0),
        Point::named("dup", 0.0, 0.0),
    ];
    let on = s.ordered_points_on(&cands);
    let xs: Vec<f64> = on.iter().map(Point::x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 5.0, 10.0, 15.0]);
    // Endpoint instance wins over the duplicate candidate.
    assert_eq!(on[0].name(), None);

    let only_ends = s.ordered_points_on(&[]);
    assert_eq!(only_ends.len(), 2);
}

#[test]
fn ordering_is_total_near_tolerance() {
    // Each pair is ordered by x even though the x gaps are within a few EPS.
    let a = Point::new(1.8e-4, 0.0);
    let b = Point::new(0.9e-4, 1.0);
    let c = Point::new(0.0, 2.0);
    assert!(c < b && b < a);
    assert!(c < a);
    let mut pts = vec![a.clone(), c.clone(), b.clone()];
    pts.sort();
    assert_eq!(pts[0].x(), 0.0);
    assert_eq!(pts[1].x(), 0.9e-4);
    assert_eq!(pts[2].x(), 1.8e-4);
}

#[test]
fn ordered_points_on_steep_segment_walks_the_segment() {
    // x-extent of two EPS; y carries the order.
    let t = Point::named("T", 0.0, 2.0);
    let u = Point::named("U", 1.8e-4, 0.0);
    let s = Segment::new(t, u);
    let m = Point::named("M", 0.9e-4, 1.0);
    let on = s.ordered_points_on([&m]);
    let names: Vec<_> = on.iter().map(|p| p.name().unwrap_or("")).collect();
    assert_eq!(names, vec!["T", "M", "U"]);
}

#[test]
fn line_intersection_dispatch() {
    // General case: diagonals of a square.
    let p = line_intersection(&seg((0.0, 0.0), (2.0, 2.0)), &seg((2.0, 0.0), (0.0, 2.0)))
        .unwrap()
        .unwrap();
    assert_eq!(p, Point::new(1.0, 1.0));
    // Vertical × horizontal.
    let p = line_intersection(&seg((1.0, -5.0), (1.0, 5.0)), &seg((-3.0, 2.0), (3.0, 2.0)))
        .unwrap()
        .unwrap();
    assert_eq!(p, Point::new(1.0, 2.0));
    // Vertical × sloped.
    let p = line_intersection(&seg((1.0, -5.0), (1.0, 5.0)), &seg((0.0, 0.0), (2.0, 4.0)))
        .unwrap()
        .unwrap();
    assert_eq!(p, Point::new(1.0, 2.0));
    // Horizontal × sloped, lines extended beyond the segments.
    let p = line_intersection(&seg((10.0, 6.0), (12.0, 6.0)), &seg((0.0, 0.0), (1.0, 2.0)))
        .unwrap()
        .unwrap();
    assert_eq!(p, Point::new(3.0, 6.0));
    // Shared endpoint.
    let p = line_intersection(&seg((0.0, 0.0), (2.0, 0.0)), &seg((2.0, 0.0), (2.0, 2.0)))
        .unwrap()
        .unwrap();
    assert_eq!(p, Point::new(2.0, 0.0));
}

#[test]
fn line_intersection_none_for_parallel_and_coincident() {
    let a = seg((0.0, 0.0), (1.0, 1.0));
    assert!(line_intersection(&a, &seg((0.0, 1.0), (1.0, 2.0))).unwrap().is_none());
    assert!(line_intersection(&a, &seg((2.0, 2.0), (3.0, 3.0))).unwrap().is_none());
    assert!(line_intersection(&a, &a.clone()).unwrap().is_none());
    let v = seg((0.0, 0.0), (0.0, 1.0));
    assert!(line_intersection(&v, &seg((1.0, 0.0), (1.0, 1.0))).unwrap().is_none());
    let h = seg((0.0, 0.0), (2.0, 0.0));
    assert!(line_intersection(&h, &seg((1.0, 0.0), (3.0, 0.0))).unwrap().is_none());
}

#[test]
fn shallow_crossing_of_horizontal_segment_is_found() {
    // Slope 8e-5 differs from horizontal by less than EPS.
    let h = seg((0.0, 0.0), (100.0, 0.0));
    let shallow = seg((0.0, -0.004), (100.0, 0.004));
    let p = segment_intersection(&h, &shallow).unwrap().unwrap();
    assert_eq!(p, Point::new(50.0, 0.0));
    let p = segment_intersection(&shallow, &h).unwrap().unwrap();
    assert_eq!(p, Point::new(50.0, 0.0));
}

#[test]
fn overflowing_solve_is_singular() {
    let a = seg((0.0, 0.0), (1.0, 1.0));
    // Slope overflows to -inf; the Cramer solve yields NaN.
    let b = seg((0.0, 1.7e308), (1.7e308, -1.7e308));
    let err = line_intersection(&a, &b).unwrap_err();
    assert!(matches!(err, DegenerateGeometry::SingularSystem(_, _)));
    assert!(segment_intersection(&b, &a).is_err());
}

#[test]
fn segment_intersection_is_finite_and_inclusive() {
    let a = seg((0.0, 0.0), (1.0, 1.0));
    // Lines meet at (3, 3), outside `a`.
    assert!(segment_intersection(&a, &seg((3.0, 0.0), (3.0, 5.0))).unwrap().is_none());
    // Touching at an endpoint of one segment counts.
    let p = segment_intersection(&seg((0.0, 0.0), (2.0, 0.0)), &seg((1.0, 0.0), (1.0, 3.0)))
        .unwrap()
        .unwrap();
    assert_eq!(p, Point::new(1.0, 0.0));
}

#[test]
fn crossing_classification() {
    let d1 = seg((0.0, 0.0), (2.0, 2.0));
    let d2 = seg((2.0, 0.0), (0.0, 2.0));
    assert!(d1.middle_crosses(&d2).unwrap());
    assert!(!d1.standing_on(&d2).unwrap());

    let base = seg((0.0, 0.0), (2.0, 0.0));
    let post = seg((1.0, 0.0), (1.0, 3.0));
    assert!(post.standing_on(&base).unwrap());
    assert!(!post.middle_crosses(&base).unwrap());

    let side = seg((2.0, 0.0), (2.0, 2.0));
    assert!(!base.standing_on(&side).unwrap());
    assert!(!base.middle_crosses(&side).unwrap());
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

proptest! {
    #[test]
    fn prop_identity_within_tolerance(x in coord(), y in coord(), dx in -0.4f64..0.4, dy in -0.4f64..0.4) {
        let p = Point::named("P", x, y);
        let q = Point::named("Q", x + dx * EPS, y + dy * EPS);
        prop_assert_eq!(p, q);
    }

    #[test]
    fn prop_ordering_is_transitive(xs in prop::collection::vec((0.0f64..5e-4, coord()), 3)) {
        let p: Vec<Point> = xs.iter().map(|&(x, y)| Point::new(x, y)).collect();
        if p[0] <= p[1] && p[1] <= p[2] {
            prop_assert!(p[0] <= p[2]);
        }
        prop_assert_eq!(p[0].cmp(&p[1]), p[1].cmp(&p[0]).reverse());
    }

    #[test]
    fn prop_segment_symmetry(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assume!(a != b);
        prop_assert_eq!(Segment::new(a.clone(), b.clone()), Segment::new(b, a));
    }

    #[test]
    fn prop_self_disjointness(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assume!(a != b);
        let s = Segment::new(a, b);
        prop_assert!(!s.coincide_without_overlap(&s.clone()));
    }
}
