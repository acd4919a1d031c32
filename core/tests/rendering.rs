use quadrast_core::prelude::*;
use quadrast_core::util::ascii;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const BG: [f32; 3] = [0.0, 0.0, 0.25];

fn triangle_scene(pl: &mut Pipeline) {
    let aspect = (80.0 * 5.0) / (24.0 * 8.0);
    pl.set_camera(
        &perspective(degs(45.0), aspect, 0.1, 100.0),
        &look_at(vec3(0.0, 0.0, 7.0), Vec3::ZERO),
    );
    pl.set_polygon_mode(Face::FrontAndBack, PolygonMode::Fill);
    pl.set_flat_color(1.0, 0.0, 0.0);
    pl.submit_vertex(-0.5, -0.5, 0.0);
    pl.submit_vertex(0.5, -0.5, 0.0);
    pl.submit_vertex(0.0, 0.5, 0.0);
    pl.submit_vertex(0.0, 0.5, 0.0);
}

fn square(pl: &mut Pipeline, half: f32, z: f32) {
    for (x, y) in [(-half, -half), (half, -half), (half, half), (-half, half)] {
        pl.submit_vertex(x, y, z);
    }
}

#[test]
fn red_triangle_on_terminal_grid() {
    let mut pl = Pipeline::new(80, 24);
    pl.clear_color(0.0, 0.0, 0.0);
    triangle_scene(&mut pl);

    let text = ascii::threshold(&pl.read_pixels(), 80, 0.1);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 24);

    let blank = " ".repeat(80);
    let span = |l: usize, r: usize| {
        let mut s = " ".repeat(l);
        s += &"#".repeat(r - l);
        s += &" ".repeat(80 - r);
        s
    };
    for (y, row) in rows.iter().enumerate() {
        let expected = match y {
            9 | 10 => span(40, 41),
            11 => span(39, 42),
            12 => span(38, 42),
            13 => span(37, 43),
            14 => span(36, 44),
            _ => blank.clone(),
        };
        assert_eq!(*row, expected, "row {y}");
    }
}

#[test]
fn untouched_pixels_keep_clear_color() {
    let mut pl = Pipeline::new(80, 24);
    pl.clear_color(BG[0], BG[1], BG[2]);
    triangle_scene(&mut pl);

    let px = pl.read_pixels();
    assert!(px.iter().all(|&p| p == RED || p == BG));
    assert_eq!(px.iter().filter(|&&p| p == RED).count(), 23);
}

#[test]
fn closer_quad_wins_regardless_of_order() {
    let render = |near_first: bool| {
        let mut pl = Pipeline::new(16, 16);
        let quads = [(0.0, [1.0, 0.0, 0.0]), (0.5, [0.0, 1.0, 0.0])];
        let order: Vec<_> = if near_first {
            quads.to_vec()
        } else {
            quads.iter().rev().copied().collect()
        };
        for (z, [r, g, b]) in order {
            pl.set_flat_color(r, g, b);
            square(&mut pl, 0.5, z);
        }
        pl.read_pixels()
    };
    let a = render(true);
    let b = render(false);
    assert_eq!(a, b);
    assert!(a.contains(&RED));
    assert!(!a.contains(&[0.0, 1.0, 0.0]));
}

#[test]
fn equal_depth_keeps_first_writer() {
    let mut pl = Pipeline::new(16, 16);
    pl.set_flat_color(1.0, 0.0, 0.0);
    square(&mut pl, 0.5, 0.0);
    let first = pl.read_pixels();

    pl.set_flat_color(0.0, 1.0, 0.0);
    square(&mut pl, 0.5, 0.0);
    assert_eq!(pl.read_pixels(), first);
}

#[test]
fn resubmitting_a_quad_changes_nothing() {
    let mut pl = Pipeline::new(16, 16);
    pl.set_flat_color(0.2, 0.4, 0.6);
    square(&mut pl, 0.5, 0.25);
    let once = pl.read_pixels();
    square(&mut pl, 0.5, 0.25);
    assert_eq!(pl.read_pixels(), once);
}

#[test]
fn lit_channels_saturate_at_one() {
    let mut pl = Pipeline::new(8, 8);
    pl.set_light_position(LightId::L0, [0.0, 0.0, 1.0, 0.0]);
    pl.set_light_color(LightId::L0, 2.0, 2.0, 2.0);
    pl.enable_light(LightId::L0);
    pl.set_flat_color(0.75, 0.25, 0.0);
    square(&mut pl, 0.5, 0.0);

    let px = pl.read_pixels();
    assert!(px.contains(&[1.0, 0.5, 0.0]));
    assert!(px.iter().flatten().all(|&c| c <= 1.0));
}

#[test]
fn lights_facing_away_give_black() {
    let mut pl = Pipeline::new(8, 8);
    pl.clear_color(0.0, 0.0, 1.0);
    pl.set_light_position(LightId::L2, [0.0, 0.0, -1.0, 0.0]);
    pl.set_light_color(LightId::L2, 1.0, 1.0, 1.0);
    pl.enable_light(LightId::L2);
    pl.set_flat_color(1.0, 1.0, 1.0);
    square(&mut pl, 0.5, 0.0);

    let px = pl.read_pixels();
    assert!(px.contains(&[0.0, 0.0, 0.0]));
    assert!(!px.contains(&[1.0, 1.0, 1.0]));
}

#[test]
fn point_light_behind_viewer_lights_square() {
    let mut pl = Pipeline::new(8, 8);
    pl.light_fv(LightId::L3, LightAttrib::Position, &[0.0, 0.0, 10.0, 1.0])
        .unwrap();
    pl.light_fv(LightId::L3, LightAttrib::Diffuse, &[0.5, 0.5, 0.5])
        .unwrap();
    pl.enable_light(LightId::L3);
    pl.set_flat_color(1.0, 1.0, 1.0);
    square(&mut pl, 0.5, 0.0);

    // The center lies on the light axis, so the quad is lit head-on
    assert!(pl.read_pixels().contains(&[0.5, 0.5, 0.5]));
}

#[test]
fn line_and_point_modes_ignore_lighting() {
    for mode in [PolygonMode::Line, PolygonMode::Point] {
        let mut pl = Pipeline::new(16, 16);
        pl.set_polygon_mode(Face::Front, mode);
        pl.set_light_position(LightId::L0, [0.0, 0.0, 1.0, 0.0]);
        pl.set_light_color(LightId::L0, 0.1, 0.1, 0.1);
        pl.enable_light(LightId::L0);
        pl.set_flat_color(1.0, 0.0, 0.0);
        square(&mut pl, 0.5, 0.0);

        let px = pl.read_pixels();
        assert!(px.contains(&RED), "{mode:?}");
        assert!(px.iter().all(|&p| p == RED || p == [0.0; 3]), "{mode:?}");
    }
}

#[test]
fn back_polygon_mode_does_not_affect_output() {
    let render = |back| {
        let mut pl = Pipeline::new(16, 16);
        pl.set_polygon_mode(Face::Back, back);
        square(&mut pl, 0.5, 0.0);
        pl.read_pixels()
    };
    let fill = render(PolygonMode::Fill);
    assert_eq!(render(PolygonMode::Point), fill);
    assert_eq!(render(PolygonMode::Line), fill);
}

#[test]
fn resize_then_render() {
    let mut pl = Pipeline::new(4, 4);
    pl.configure_viewport(10, 6);
    pl.clear_color(BG[0], BG[1], BG[2]);
    pl.set_flat_color(1.0, 0.0, 0.0);
    square(&mut pl, 2.0, 0.0);

    // Covers the whole of NDC, so every pixel is red
    let px = pl.read_pixels();
    assert_eq!(px.len(), 60);
    assert!(px.iter().all(|&p| p == RED));
}

#[test]
fn deferred_output_matches_immediate() {
    let render = |compositing| {
        let ctx = Context { compositing, ..Context::default() };
        let mut pl = Pipeline::with_context(ctx, 32, 24);
        pl.clear_color(BG[0], BG[1], BG[2]);
        pl.begin();
        for (i, z) in [0.5, 0.0, 0.25].into_iter().enumerate() {
            pl.set_flat_color(i as f32 / 2.0, 1.0 - z, z);
            square(&mut pl, 0.3 + z, z);
        }
        pl.end();
        (pl.read_pixels(), pl.stats().frags)
    };
    let (imm_px, imm_frags) = render(Compositing::Immediate);
    let (def_px, def_frags) = render(Compositing::Deferred);
    assert_eq!(imm_px, def_px);
    assert_eq!(imm_frags, def_frags);
}

#[test]
fn camera_with_identity_view_is_projection() {
    let proj = frustum(-1.0, 1.0, -0.5, 0.5, 0.1, 100.0);
    let mut pl = Pipeline::new(1, 1);
    pl.set_camera(&proj, &Mat4::IDENTITY);
    assert_eq!(pl.transform(), &proj);
}

#[test]
fn independent_pipelines_share_nothing() {
    let mut a = Pipeline::new(8, 8);
    let b = Pipeline::new(8, 8);
    a.set_flat_color(1.0, 0.0, 0.0);
    square(&mut a, 0.5, 0.0);
    a.enable_light(LightId::L0);

    assert!(a.read_pixels().contains(&RED));
    assert_eq!(b.read_pixels(), [[0.0; 3]; 64]);
    assert!(!b.light(LightId::L0).enabled);
}
