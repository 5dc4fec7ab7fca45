//! End-to-end geometric properties of built diagrams.

use std::{f64::consts::PI, thread};

use float_cmp::approx_eq;

use arcanum::{
    draw::PathRecorder,
    geometry::{Point, Size},
    layout::{Diagram, LayoutOptions, build_diagram},
    shape::Shape,
    spell::{Attribute, School, SpellAttributes},
};

fn magic_missile() -> SpellAttributes {
    SpellAttributes::new(None, 3, 1, 1, 4, 1)
}

#[test]
fn magic_missile_layout() {
    let diagram = build_diagram(magic_missile(), Size::square(1600.0), 5.0).unwrap();

    assert_eq!(diagram.school_index(), 0);
    assert!(approx_eq!(
        f64,
        diagram.central_radius(),
        0.5 * 1600.0 / 3.0 - 5.0,
        epsilon = 1e-9
    ));

    let range = diagram.sigil(Attribute::Range);
    assert_eq!(range.sides(), 9);
    assert_eq!(range.density(), 3);
}

#[test]
fn outer_centres_have_six_fold_symmetry() {
    let diagram = build_diagram(magic_missile(), Size::square(1600.0), 5.0).unwrap();
    let centres = diagram.centres();
    let distance = centres[0].hypot();

    for (k, centre) in centres.iter().enumerate() {
        assert!(approx_eq!(f64, centre.hypot(), distance, epsilon = 1e-9));

        let next = centres[(k + 1) % centres.len()];
        let mut step = next.angle() - centre.angle();
        if step < 0.0 {
            step += 2.0 * PI;
        }
        assert!(
            approx_eq!(f64, step.to_degrees(), 60.0, epsilon = 1e-9),
            "slot {k} to next is {} degrees",
            step.to_degrees()
        );
    }

    // slot 0 is straight up
    assert!(approx_eq!(f64, centres[0].x(), 0.0, epsilon = 1e-9));
    assert!(centres[0].y() > 0.0);
}

#[test]
fn whole_diagram_fits_canvas() {
    let options = LayoutOptions::default();
    let diagram = Diagram::new(magic_missile(), &options).unwrap();
    let half = options.canvas().min_dimension() / 2.0;

    for vertex in diagram.path().vertices() {
        assert!(
            vertex.hypot() <= half - options.edge_spacing() + 1e-6,
            "{vertex:?} falls outside the canvas"
        );
    }
}

#[test]
fn every_vertex_lies_on_its_shape() {
    let spell = SpellAttributes::new(Some(School::Necromancy), 5, 2, 3, 1, 6);
    let diagram = Diagram::new(spell, &LayoutOptions::default()).unwrap();
    assert_eq!(diagram.school_index(), 7);

    for shape in diagram.shapes() {
        for vertex in shape.produce_path().vertices() {
            let distance = shape.centre().distance_to(vertex);
            assert!(approx_eq!(
                f64,
                distance,
                shape.radius(),
                epsilon = 1e-9 * shape.radius()
            ));
        }
    }
}

#[test]
fn draw_is_idempotent() {
    let diagram = Diagram::new(magic_missile(), &LayoutOptions::default()).unwrap();

    let mut first = PathRecorder::new();
    let mut second = PathRecorder::new();
    diagram.draw(&mut first);
    diagram.draw(&mut second);

    assert_eq!(first.into_path(), second.into_path());
}

#[test]
fn diagrams_build_independently_on_threads() {
    let spells = [
        magic_missile(),
        SpellAttributes::new(Some(School::Evocation), 2, 2, 5, 0, 4),
        SpellAttributes::new(Some(School::Conjuration), 2, 3, 2, 1, 9),
    ];

    let handles: Vec<_> = spells
        .into_iter()
        .map(|spell| {
            thread::spawn(move || {
                let diagram = Diagram::new(spell, &LayoutOptions::default()).unwrap();
                let mut recorder = PathRecorder::new();
                diagram.draw(&mut recorder);
                recorder.into_path()
            })
        })
        .collect();

    for (spell, handle) in spells.into_iter().zip(handles) {
        let threaded = handle.join().unwrap();
        let local = Diagram::new(spell, &LayoutOptions::default())
            .unwrap()
            .path();
        assert_eq!(threaded, local);
    }
}

#[test]
fn central_boundary_is_at_origin() {
    let diagram = Diagram::new(magic_missile(), &LayoutOptions::default()).unwrap();
    assert_eq!(diagram.central_boundary().centre(), Point::default());
    assert_eq!(diagram.outer_boundary().centre(), Point::default());
}
