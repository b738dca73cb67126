//! Walks the reference ceiling outline from first corner to finished drawing.

#![allow(clippy::unwrap_used)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use roomplan::error::{PolygonError, RoomplanError, UnitError};
use roomplan::units::{round_to, CENTIMETRE, DEGREE, METRE, SQUARE_METRE};
use roomplan::{FigureMeasures, LayoutConfig, PointSpec, Polygon, RenderLayout, UnitContext};

fn surveyed_ceiling() -> Polygon {
    let mut ceiling = Polygon::with_origin();
    let walk = [
        PointSpec::by_direction(125.0, 90.0, CENTIMETRE, DEGREE),
        PointSpec::by_angle(27.0, 90.0, CENTIMETRE, DEGREE),
        PointSpec::by_angle(46.0, 270.0, CENTIMETRE, DEGREE),
        PointSpec::absolute(222.01, 169.98, CENTIMETRE),
        PointSpec::absolute(2.25, 0.0, METRE),
    ];
    for spec in &walk {
        ceiling.add(spec).unwrap();
    }
    ceiling
}

#[test]
fn walked_corners_land_where_measured() {
    let ceiling = surveyed_ceiling();
    let expected = [
        (0.0, 0.0),
        (0.0, 125.0),
        (27.0, 125.0),
        (27.0, 171.0),
        (222.01, 169.98),
        (225.0, 0.0),
    ];
    assert_eq!(ceiling.len(), expected.len());
    for (pt, (x, y)) in ceiling.points_in(CENTIMETRE, 2).iter().zip(expected) {
        assert_abs_diff_eq!(pt.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(pt.y, y, epsilon = 1e-9);
    }
}

#[test]
fn corrected_ceiling_matches_reference_metrics() {
    let mut ceiling = surveyed_ceiling();
    // The fourth corner was re-measured slightly off the wall line.
    ceiling
        .set_point(3, roomplan::math::Point::new(27.01, 171.0))
        .unwrap();

    assert_relative_eq!(round_to(ceiling.area_in(SQUARE_METRE), 2), 3.69);
    assert_relative_eq!(round_to(ceiling.perimeter_in(METRE), 2), 7.88);

    let summary = ceiling.summary(&FigureMeasures::default(), 2);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["areaUnit"], "m2");
    assert_eq!(json["pointsCount"], 6);
}

#[test]
fn client_unit_names_drive_presentation() {
    let context: UnitContext = serde_json::from_str(
        r#"{"lengthUnit": "m", "areaUnit": "m2", "perimeterUnit": "m", "angleUnit": "deg"}"#,
    )
    .unwrap();
    let measures = FigureMeasures::from_context(&context).unwrap();
    let ceiling = surveyed_ceiling();

    let layout = RenderLayout::new(&ceiling, &measures)
        .with_config(LayoutConfig::default())
        .with_notes(true)
        .execute()
        .unwrap();

    assert_eq!(layout.vertices.len(), 6);
    assert_eq!(layout.edges.len(), 6);
    assert_eq!(layout.vertices[5].label, "F");
    assert_eq!(layout.edges[0].text, "1.25 m");
    assert_eq!(layout.notes[4], "Points: 6");
    assert!(layout.canvas_width > layout.drawing_width + 2.0 * 60.0);
    // The geometry is still stored in centimetres.
    assert_abs_diff_eq!(ceiling.points()[1].y, 125.0, epsilon = 1e-9);
}

#[test]
fn bad_requests_are_typed() {
    let mut empty = Polygon::new();
    let err: RoomplanError = empty
        .add(&PointSpec::by_direction(1.0, 0.0, METRE, DEGREE))
        .unwrap_err()
        .into();
    assert!(matches!(
        err,
        RoomplanError::Polygon(PolygonError::NotEnoughPoints { .. })
    ));
    assert!(err.is_client_error());

    let context = UnitContext {
        length_unit: "furlong".into(),
        ..UnitContext::default()
    };
    let err: RoomplanError = FigureMeasures::from_context(&context).unwrap_err().into();
    assert!(matches!(err, RoomplanError::Unit(UnitError::UnknownUnit { .. })));

    let mut ceiling = surveyed_ceiling();
    ceiling.delete_point(0).unwrap();
    assert_eq!(
        ceiling.point(5).unwrap_err(),
        PolygonError::IndexOutOfRange { index: 5, len: 5 }
    );
}
