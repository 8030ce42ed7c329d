use rastlab_core::prelude::*;

use rastlab_core::render::{
    ScreenVertex, Varyings,
    line::{bresenham_points, dda_points},
    raster::{ScreenVert, edge_walk_fill},
    shade::{fill, fill_with},
};

const BLACK: Option<Color4> = Some(rgba(0, 0, 0, 0xFF));

fn screen_tri(
    [a, b, c]: [(f32, f32, f32); 3],
) -> [ScreenVert<()>; 3] {
    [a, b, c].map(|(x, y, z)| vertex(vec3(x, y, z), ()))
}

#[test]
fn edge_walk_scanline_spans_edge_intersections() {
    let mut fb = Framebuf::new((600, 600));
    let color = rgb(1.0, 0.5, 0.2);
    edge_walk_fill(
        &mut fb,
        [vec2(100.0, 100.0), vec2(400.0, 300.0), vec2(200.0, 500.0)],
        color,
    );
    let expected = Some(color.to_color4());

    // Left edge (100,100)-(200,500) crosses y=300 at x=150,
    // right edges meet at the vertex (400,300).
    for x in 150..=400 {
        assert_eq!(fb.pixel(x, 300), expected, "x={x}");
    }
    assert_eq!(fb.pixel(149, 300), BLACK);
    assert_eq!(fb.pixel(401, 300), BLACK);

    // Vertices are on the outline
    assert_eq!(fb.pixel(100, 100), expected);
    assert_eq!(fb.pixel(200, 500), expected);
    // Outside the closed triangle
    assert_eq!(fb.pixel(100, 500), BLACK);
    assert_eq!(fb.pixel(500, 100), BLACK);
}

#[test]
fn filled_depth_lies_between_vertex_depths() {
    let tris = [
        [(100.0, 100.0, 0.2), (400.0, 300.0, 0.5), (200.0, 500.0, 0.8)],
        [(10.5, 3.2, -0.9), (590.1, 250.7, 0.9), (33.3, 599.0, 0.1)],
        [(300.0, 17.0, 0.7), (12.0, 40.0, -0.3), (580.0, 45.0, 0.0)],
    ];
    for tri in tris {
        let (min, max) = tri
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v.2), hi.max(v.2)));

        let mut fb = Framebuf::new((600, 600));
        let io = fill_with(&mut fb, screen_tri(tri), |_| gray(1.0));
        assert!(io.o > 0);

        let written = fb.depth_buf().data().iter().filter(|&&z| z != 1.0);
        let mut n = 0;
        for &z in written {
            let eps = 1e-6;
            assert!(min - eps <= z && z <= max + eps, "{min} <= {z} <= {max}");
            n += 1;
        }
        assert_eq!(n, io.o);
    }
}

#[test]
fn depth_test_makes_redraw_idempotent() {
    let mut fb = Framebuf::new((600, 600));
    let verts =
        screen_tri([(100.0, 100.0, 0.2), (400.0, 300.0, 0.5), (200.0, 500.0, 0.8)]);

    let first = fill_with(&mut fb, verts, |_| rgb(0.3, 0.6, 0.9));
    let once = fb.clone();
    let second = fill_with(&mut fb, verts, |_| rgb(0.9, 0.6, 0.3));

    assert_eq!(first.i, second.i);
    assert_eq!(second.o, 0);
    assert_eq!(fb, once);
}

#[test]
fn gouraud_and_phong_agree_at_vertices() {
    let lighting = Lighting {
        light: Light::directional(vec3(0.3, 0.5, 1.0)),
        eye: vec3(0.0, 0.0, 5.0),
        ..Lighting::default()
    };
    let normal = vec3(0.0, 0.0, 1.0);
    let base = rgb(0.8, 0.4, 0.2);
    let verts: [ScreenVertex; 3] = [(20.0, 20.0), (180.0, 60.0), (60.0, 180.0)]
        .map(|(x, y)| {
            let world = vec3(x / 100.0, -y / 100.0, 0.0);
            let lit = lighting.shade(world, normal, base);
            vertex(
                vec3(x, y, 0.5),
                Varyings { color: base, lit, normal, world },
            )
        });

    let mut gouraud = Framebuf::new((200, 200));
    let mut phong = Framebuf::new((200, 200));
    fill(&mut gouraud, verts, Shading::Gouraud, &lighting);
    fill(&mut phong, verts, Shading::Phong, &lighting);

    for v in verts {
        let (x, y) = (v.pos.x() as i32, v.pos.y() as i32);
        assert_ne!(gouraud.pixel(x, y), BLACK);
        assert_eq!(gouraud.pixel(x, y), phong.pixel(x, y), "at {x},{y}");
    }
}

// Holds for integer endpoints only: DDA rounds a fractional endpoint
// while Bresenham truncates it.
#[test]
fn dda_and_bresenham_share_integer_endpoints() {
    let ends = [
        (0.0, 0.0),
        (17.0, 3.0),
        (3.0, 17.0),
        (-12.0, 5.0),
        (-4.0, -19.0),
        (9.0, -9.0),
        (0.0, 11.0),
    ];
    for p in ends {
        for q in ends {
            let (p, q) = (vec2(p.0, p.1), vec2(q.0, q.1));
            let dda: Vec<_> = dda_points(p, q).collect();
            let bres: Vec<_> = bresenham_points(p, q).collect();

            assert_eq!(dda.first(), bres.first());
            assert_eq!(dda.last(), bres.last());
            assert_eq!(dda.len(), bres.len());

            // Both stay within a pixel of the ideal line
            let d = q - p;
            let len = d.len().max(1.0);
            for &(x, y) in dda.iter().chain(&bres) {
                let off = vec2(x as f32, y as f32) - p;
                let dist = d.perp_dot(&off).abs() / len;
                assert!(dist <= 1.0, "{p:?}-{q:?}: ({x},{y}) off by {dist}");
            }
        }
    }
}

#[test]
fn dda_and_bresenham_differ_on_fractional_endpoints() {
    let (p, q) = (vec2(0.5, 0.0), vec2(4.5, 0.0));
    let dda: Vec<_> = dda_points(p, q).collect();
    let bres: Vec<_> = bresenham_points(p, q).collect();
    assert_eq!(dda, [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    assert_eq!(bres, [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
}

#[test]
fn stored_colors_are_clamped() {
    let mut fb = Framebuf::new((10, 10));
    fill_with(
        &mut fb,
        screen_tri([(0.0, 0.0, 0.0), (9.0, 0.0, 0.0), (0.0, 9.0, 0.0)]),
        |_| rgb(3.5, -2.0, 1.0),
    );
    assert_eq!(fb.pixel(1, 1), Some(rgba(255, 0, 255, 255)));
}

#[test]
fn rendered_cube_face_is_lit() {
    let n = vec3(0.0, 0.0, 1.0);
    let c = rgb(1.0, 0.5, 0.2);
    let quad = Mesh::new(
        [Tri([0, 1, 2]), Tri([0, 2, 3])],
        [
            model_vertex(vec3(-1.0, -1.0, 0.0), c, n),
            model_vertex(vec3(1.0, -1.0, 0.0), c, n),
            model_vertex(vec3(1.0, 1.0, 0.0), c, n),
            model_vertex(vec3(-1.0, 1.0, 0.0), c, n),
        ],
    );
    let dims = (200, 150);
    let cam = Camera::new(vec3(0.0, 0.0, 5.0), Projection::perspective(4.0 / 3.0));
    let bright = Lighting {
        light: Light { color: gray(10.0), ..Light::default() },
        ..Lighting::default()
    };

    for shading in [Shading::Flat, Shading::Gouraud, Shading::Phong] {
        let mut fb = Framebuf::new(dims);
        let ctx = Context { shading, ..Context::default() };
        fb.clear(ctx.clear_color);
        let uni = Uniforms::new(&cam, dims, bright);
        let stats = render(&quad, &uni, &mut fb, &ctx);

        assert_eq!(stats.prims.o, 2, "{shading:?}");
        // Overexposed light saturates every channel
        assert_eq!(fb.pixel(100, 75), Some(rgba(255, 255, 255, 255)));
        // Background keeps the clear color
        assert_eq!(fb.pixel(2, 2), Some(gray(0.1).to_color4()));
    }
}
