use pbn_core::{Direction, Point, Raster, Vec2i};

use crate::region::Region;

/// Slides from `start` to the south-west-most pixel reachable by west and
/// south steps over non-black pixels.
///
/// Both neighbors are re-checked after every move, so any pixel of a convex
/// run converges on the same corner. `start` is expected to be non-black.
pub fn find_origin(raster: &Raster, start: Point) -> Point {
    let mut p = start;
    loop {
        let open_west = !raster.is_black(p + Direction::West);
        let open_south = !raster.is_black(p + Direction::South);
        if !open_west && !open_south {
            return p;
        }

        if open_west {
            p = p + Direction::West;
        }
        if !raster.is_black(p + Direction::South) {
            p = p + Direction::South;
        }
    }
}

/// Traces the region containing `start`, unless it is black or its origin
/// has already been visited by an earlier trace.
pub fn trace_region(raster: &mut Raster, start: Point) -> Option<Region> {
    if raster.is_black(start) {
        return None;
    }

    let origin = find_origin(raster, start);
    if raster.is_visited(origin) {
        return None;
    }

    Some(trace_from_origin(raster, origin))
}

/// Walks the border of the region whose south-west corner is `origin`.
///
/// `origin` must be an in-bounds, non-black pixel with black (or the image
/// border) to its west and south, as returned by [`find_origin`]. The walker
/// heads east first with the divider on its right and returns to `origin`
/// heading south, where the polygon closes on its first vertex.
///
/// Every non-black pixel 4-connected to `origin` is marked visited, holes
/// and the pixels hugging them included, so no later scan position can
/// start another trace of the same region.
pub fn trace_from_origin(raster: &mut Raster, origin: Point) -> Region {
    let color = raster.get(origin).color;
    let pixels = mark_component(raster, origin);

    let mut vertices = vec![origin + turn_right_corner(Direction::East)];
    let mut pos = origin;
    let mut dir = Direction::East;
    let mut closed = false;

    'walk: for _ in 0..step_bound(raster) {
        // Divider fell away on the right: wrap around the convex corner.
        if !raster.is_black(pos + dir.rotate_right()) {
            push_vertex(&mut vertices, pos + turn_right_corner(dir));
            dir = dir.rotate_right();
        }

        // Divider ahead: turn left in place until the way is open.
        while raster.is_black(pos + dir) {
            if pos == origin && dir == Direction::South {
                closed = true;
                break 'walk;
            }
            push_vertex(&mut vertices, pos + turn_left_corner(dir));
            dir = dir.rotate_left();
        }

        pos = pos + dir;
    }

    if !closed {
        tracing::warn!(
            x = origin.x,
            y = origin.y,
            vertices = vertices.len(),
            "region walk hit the step bound before closing"
        );
    }

    tracing::debug!(
        x = origin.x,
        y = origin.y,
        color = %color,
        pixels,
        vertices = vertices.len(),
        "traced region"
    );

    Region::new(color, origin, vertices)
}

/// Offset of the vertex emitted when turning right: behind-right diagonal.
/// Equals `(-d.x + d.y, -d.x - d.y)`.
#[inline]
fn turn_right_corner(dir: Direction) -> Vec2i {
    let d = dir.vector();
    d.rotate_right() - d
}

/// Offset of the vertex emitted when turning left: ahead-right diagonal.
/// Equals `(d.x + d.y, -d.x + d.y)`.
#[inline]
fn turn_left_corner(dir: Direction) -> Vec2i {
    let d = dir.vector();
    d + d.rotate_right()
}

#[inline]
fn push_vertex(vertices: &mut Vec<Point>, v: Point) {
    // A one-pixel divider notch turns twice on the same cell.
    if vertices.last() != Some(&v) {
        vertices.push(v);
    }
}

/// Flood-fills the non-black pixels 4-connected to `origin`, marking them
/// visited. Returns how many were marked.
fn mark_component(raster: &mut Raster, origin: Point) -> usize {
    let mut stack = vec![origin];
    let mut marked = 0usize;

    while let Some(p) = stack.pop() {
        let px = raster.get(p);
        // The sentinel is black and visited, so the fill never leaves the raster.
        if px.is_black() || px.visited {
            continue;
        }

        let res = raster.set_visited(p, true);
        debug_assert!(res.is_ok(), "fill left the raster at {p:?}");
        marked += 1;

        for dir in Direction::ALL {
            stack.push(p + dir);
        }
    }

    marked
}

/// Each (pixel, heading) state occurs at most once per closed walk.
fn step_bound(raster: &Raster) -> usize {
    raster
        .width()
        .saturating_mul(raster.height())
        .saturating_mul(4)
        .saturating_add(4)
}
