use proptest::prelude::*;

use quadrast_core::math::{Vec2i, vec2i, vec3};
use quadrast_core::prelude::*;
use quadrast_core::render::proj::viewport_transform;
use quadrast_core::render::raster::{line, tri_fill};

fn point(range: i32) -> impl Strategy<Value = Vec2i> {
    (-range..range, -range..range).prop_map(|(x, y)| vec2i(x, y))
}

fn in_bounds(p: Vec2i, (w, h): (usize, usize)) -> bool {
    p.x >= 0 && p.y >= 0 && (p.x as usize) < w && (p.y as usize) < h
}

proptest! {
    #[test]
    fn line_pixels_are_in_bounds_and_connected(
        p0 in point(40), p1 in point(40), w in 1usize..32, h in 1usize..32,
    ) {
        let dims = (w, h);
        let mut pts = vec![];
        line([p0, p1], dims, |p| pts.push(p));

        prop_assert!(pts.iter().all(|&p| in_bounds(p, dims)));
        for pair in pts.windows(2) {
            let d = pair[1] - pair[0];
            prop_assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != vec2i(0, 0));
        }
        if in_bounds(p0, dims) {
            prop_assert_eq!(pts.first(), Some(&p0));
        }
        if in_bounds(p1, dims) {
            prop_assert_eq!(pts.last(), Some(&p1));
        }
    }

    #[test]
    fn clipped_line_is_a_run_of_the_whole_line(
        p0 in point(40), p1 in point(40), w in 1usize..32, h in 1usize..32,
    ) {
        let mut clipped = vec![];
        line([p0, p1], (w, h), |p| clipped.push(p));

        // The same line shifted into a buffer large enough to hold all of it
        let off = vec2i(40, 40);
        let mut whole = vec![];
        line([p0 + off, p1 + off], (80, 80), |p| whole.push(p - off));
        whole.retain(|&p| in_bounds(p, (w, h)));

        prop_assert_eq!(clipped, whole);
    }

    #[test]
    fn line_is_symmetric_in_pixel_count(
        (x0, y0, x1, y1) in (0..200, 0..200, 0..200, 0..200),
    ) {
        let (p0, p1) = (vec2i(x0, y0), vec2i(x1, y1));
        let dims = (200, 200);
        let (mut fwd, mut back) = (0, 0);
        line([p0, p1], dims, |_| fwd += 1);
        line([p1, p0], dims, |_| back += 1);
        prop_assert_eq!(fwd, back);
        prop_assert_eq!(fwd, (x1 - x0).abs().max((y1 - y0).abs()) + 1);
    }

    #[test]
    fn fill_scanlines_are_in_bounds_and_ordered(
        a in point(50), b in point(50), c in point(50),
        w in 1usize..40, h in 1usize..40,
    ) {
        let mut prev = None;
        tri_fill([a, b, c], (w, h), |sl| {
            assert!(sl.y < h);
            assert!(!sl.xs.is_empty() && sl.xs.end <= w);
            assert!(prev.is_none_or(|y| y < sl.y));
            prev = Some(sl.y);
        });
    }

    #[test]
    fn fill_covers_its_vertices(a in point(20), b in point(20), c in point(20)) {
        let shift = |p: Vec2i| vec2i(p.x + 20, p.y + 20);
        prop_assume!(a.y != b.y || b.y != c.y);
        let verts = [a, b, c].map(shift);
        let mut covered = vec![];
        tri_fill(verts, (40, 40), |sl| {
            covered.extend(sl.xs.map(|x| (x as i32, sl.y as i32)));
        });
        for v in verts {
            prop_assert!(covered.contains(&(v.x, v.y)), "{v:?} not covered");
        }
    }

    #[test]
    fn ndc_maps_into_closed_viewport(
        x in -1.0f32..=1.0, y in -1.0f32..=1.0, w in 1usize..500, h in 1usize..500,
    ) {
        let p = viewport_transform(vec3(x, y, 0.0), (w, h));
        prop_assert!(0 <= p.x && p.x <= w as i32);
        prop_assert!(0 <= p.y && p.y <= h as i32);
    }

    #[test]
    fn unlit_fill_writes_only_flat_color(
        verts in prop::array::uniform4((-2.0f32..2.0, -2.0f32..2.0, -1.0f32..1.0)),
        w in 1usize..24, h in 1usize..24,
    ) {
        let mut pl = Pipeline::new(w, h);
        pl.clear_color(0.0, 0.0, 1.0);
        pl.set_flat_color(1.0, 0.5, 0.0);
        for (x, y, z) in verts {
            pl.submit_vertex(x, y, z);
        }
        let px = pl.read_pixels();
        prop_assert_eq!(px.len(), w * h);
        prop_assert!(px.iter().all(|&p| p == [0.0, 0.0, 1.0] || p == [1.0, 0.5, 0.0]));
    }

    #[test]
    fn lit_colors_never_exceed_one(
        base in prop::array::uniform3(0.0f32..1.0),
        light in prop::array::uniform3(0.0f32..4.0),
        dir in prop::array::uniform3(-1.0f32..1.0),
    ) {
        prop_assume!(dir.iter().any(|c| c.abs() > 0.01));
        let mut pl = Pipeline::new(8, 8);
        for id in [LightId::L0, LightId::L1] {
            pl.set_light_position(id, [dir[0], dir[1], dir[2], 0.0]);
            pl.set_light_color(id, light[0], light[1], light[2]);
            pl.enable_light(id);
        }
        pl.set_flat_color(base[0], base[1], base[2]);
        for (x, y) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            pl.submit_vertex(x, y, 0.0);
        }
        prop_assert!(pl.read_pixels().iter().flatten().all(|&c| (0.0..=1.0).contains(&c)));
    }
}
