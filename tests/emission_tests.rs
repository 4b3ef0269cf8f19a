use ballwave::{
    Gearbox,
    io::DxfSink,
    sketch::{DrawingSpec, Entity, Layer, Sketch, emit},
};

mod support;

use crate::support::{approx_eq, reference_inputs};

fn reference_gearbox() -> Gearbox {
    Gearbox::build(&reference_inputs()).unwrap()
}

fn record(gearbox: &Gearbox, spec: &DrawingSpec) -> Sketch {
    let mut sketch = Sketch::new();
    emit(gearbox, spec, &mut sketch);
    sketch
}

fn export(gearbox: &Gearbox, spec: &DrawingSpec) -> Sketch {
    let mut sink = DxfSink::new();
    emit(gearbox, spec, &mut sink);
    Sketch::from_dxf(&sink.to_bytes().unwrap()).unwrap()
}

fn without(layer: Layer) -> DrawingSpec {
    let mut spec = DrawingSpec::all();
    match layer {
        Layer::Wheel => spec.wheel = false,
        Layer::Separator => spec.separator = false,
        Layer::Eccentric => spec.eccentric = false,
        Layer::Balls => spec.balls = false,
        Layer::OuterDiameter => spec.outer_diameter = false,
    }
    spec
}

#[test]
fn all_flags_entity_counts() {
    let gearbox = reference_gearbox();
    for sketch in [record(&gearbox, &DrawingSpec::all()), export(&gearbox, &DrawingSpec::all())] {
        let polylines = |layer| {
            sketch
                .on_layer(layer)
                .filter(|e| matches!(e, Entity::Polyline { .. }))
                .count()
        };
        let circles = |layer| {
            sketch
                .on_layer(layer)
                .filter(|e| matches!(e, Entity::Circle { .. }))
                .count()
        };
        assert_eq!(polylines(Layer::Wheel), 1);
        assert_eq!(circles(Layer::Separator), 2);
        assert_eq!(circles(Layer::Eccentric), 1);
        assert_eq!(polylines(Layer::Eccentric), 3);
        assert_eq!(circles(Layer::Balls), 17);
        assert_eq!(circles(Layer::OuterDiameter), 1);
        assert_eq!(sketch.len(), 27);
    }
}

#[test]
fn disabled_layers_reach_no_sink() {
    let gearbox = reference_gearbox();
    for layer in Layer::ALL {
        let spec = without(layer);
        assert!(!spec.enabled(layer));
        assert_eq!(record(&gearbox, &spec).count_on_layer(layer), 0, "{layer:?}");
        assert_eq!(export(&gearbox, &spec).count_on_layer(layer), 0, "{layer:?}");
        for other in Layer::ALL.into_iter().filter(|l| *l != layer) {
            assert!(record(&gearbox, &spec).count_on_layer(other) > 0, "{other:?}");
        }
    }
}

#[test]
fn export_matches_recording() {
    // Same entities, same order, same coordinates in both sinks.
    let gearbox = reference_gearbox();
    let recorded = record(&gearbox, &DrawingSpec::all());
    let exported = export(&gearbox, &DrawingSpec::all());
    assert_eq!(recorded.len(), exported.len());
    for (a, b) in recorded.entities.iter().zip(&exported.entities) {
        match (a, b) {
            (Entity::Point { layer: la, at: pa }, Entity::Point { layer: lb, at: pb }) => {
                assert_eq!(la, lb);
                assert!(approx_eq(pa.x, pb.x, 1e-9) && approx_eq(pa.y, pb.y, 1e-9));
            },
            (
                Entity::Polyline { layer: la, points: pa },
                Entity::Polyline { layer: lb, points: pb },
            ) => {
                assert_eq!(la, lb);
                assert_eq!(pa.0.len(), pb.0.len());
                for (ca, cb) in pa.coords().zip(pb.coords()) {
                    assert!(approx_eq(ca.x, cb.x, 1e-9) && approx_eq(ca.y, cb.y, 1e-9));
                }
            },
            (
                Entity::Circle { layer: la, center: ca, radius: ra },
                Entity::Circle { layer: lb, center: cb, radius: rb },
            ) => {
                assert_eq!(la, lb);
                assert!(approx_eq(ca.x, cb.x, 1e-9) && approx_eq(ca.y, cb.y, 1e-9));
                assert!(approx_eq(*ra, *rb, 1e-9));
            },
            (a, b) => panic!("entity kinds differ: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn wheel_polyline_keeps_profile_order() {
    let gearbox = reference_gearbox();
    let sketch = record(&gearbox, &DrawingSpec::default());
    let polyline = sketch
        .on_layer(Layer::Wheel)
        .find_map(|e| match e {
            Entity::Polyline { points, .. } => Some(points.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(polyline.0.as_slice(), gearbox.profile.points());
}

#[test]
fn outer_diameter_and_balls() {
    let gearbox = reference_gearbox();
    let sketch = record(&gearbox, &DrawingSpec::all());
    match sketch.on_layer(Layer::OuterDiameter).next() {
        Some(Entity::Circle { center, radius, .. }) => {
            assert_eq!((center.x, center.y), (0.0, 0.0));
            assert!(approx_eq(*radius, 45.0, 1e-12));
        },
        other => panic!("expected outer circle, got {other:?}"),
    }
    let centres: Vec<_> = gearbox.balls.rendered().collect();
    for (entity, centre) in sketch.on_layer(Layer::Balls).zip(&centres) {
        match entity {
            Entity::Circle { center, radius, .. } => {
                assert_eq!(center, centre);
                assert!(approx_eq(*radius, 3.0, 1e-12));
            },
            other => panic!("expected a ball, got {other:?}"),
        }
    }
}
