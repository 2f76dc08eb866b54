//! Hilbert curve algorithms for mapping between 1D and 2D coordinates.
//!
//! The Hilbert curve is a space-filling curve that provides good locality
//! preservation: consecutive distances along the curve land on adjacent grid
//! cells, which makes it a natural layout for heatmaps of sequential
//! measurement series.

/// Rotate/flip a quadrant appropriately for the Hilbert curve transformation.
#[inline]
fn rot(s: u32, x: &mut u32, y: &mut u32, rx: u32, ry: u32) {
    if ry == 0 {
        if rx == 1 {
            // Signed arithmetic: x or y may exceed s - 1 mid-transform, and
            // the wrapped value is still correct for the remaining bit tests.
            let s_minus_1 = i64::from(s) - 1;
            *x = (s_minus_1 - i64::from(*x)) as u32;
            *y = (s_minus_1 - i64::from(*y)) as u32;
        }
        std::mem::swap(x, y);
    }
}

/// Convert distance along the Hilbert curve to (x, y) coordinates.
///
/// `side` is the grid side length and must be a power of 2.
#[inline]
pub fn d2xy(side: u32, d: u32) -> (u32, u32) {
    let mut x = 0u32;
    let mut y = 0u32;
    let mut s = 1u32;
    let mut t = d;

    while s < side {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);

        rot(s, &mut x, &mut y, rx, ry);

        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }

    (x, y)
}

/// Convert (x, y) coordinates to distance along the Hilbert curve.
///
/// `side` is the grid side length and must be a power of 2.
#[inline]
pub fn xy2d(side: u32, mut x: u32, mut y: u32) -> u32 {
    let mut d = 0u32;
    let mut s = side / 2;

    while s > 0 {
        let rx = u32::from((x & s) > 0);
        let ry = u32::from((y & s) > 0);
        d += s * s * ((3 * rx) ^ ry);
        rot(s, &mut x, &mut y, rx, ry);
        s /= 2;
    }

    d
}

/// Smallest curve order `p` such that the `2^p x 2^p` grid has at least
/// `cells` cells.
pub fn order_for_cells(cells: usize) -> u32 {
    let mut order = 0u32;
    while (1usize << (2 * order)) < cells {
        order += 1;
    }
    order
}

/// Grid side length for a given curve order.
#[inline]
pub fn side_for_order(order: u32) -> u32 {
    1 << order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let side = 256;
        for d in 0..1000 {
            let (x, y) = d2xy(side, d);
            assert_eq!(xy2d(side, x, y), d, "roundtrip failed for d={d}");
        }
    }

    #[test]
    fn test_xy2d_edge_cases() {
        // (3, 0) exercises the mid-transform reflection where x exceeds s - 1.
        let side = 4;
        let d = xy2d(side, 3, 0);
        assert_eq!(d2xy(side, d), (3, 0));

        for x in 0..side {
            for y in 0..side {
                let d = xy2d(side, x, y);
                assert_eq!(d2xy(side, d), (x, y), "roundtrip failed for ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_bijection_covers_grid_once() {
        for order in 0..5 {
            let side = side_for_order(order);
            let cells = (side * side) as usize;
            let mut seen = vec![false; cells];

            for d in 0..cells as u32 {
                let (x, y) = d2xy(side, d);
                assert!(x < side && y < side);
                let idx = (y * side + x) as usize;
                assert!(!seen[idx], "cell ({x}, {y}) visited twice at d={d}");
                seen[idx] = true;
            }

            assert!(seen.iter().all(|&v| v), "order {order} left cells unvisited");
        }
    }

    #[test]
    fn test_locality_unit_steps() {
        for order in 1..6 {
            let side = side_for_order(order);
            let cells = side * side;

            let (mut px, mut py) = d2xy(side, 0);
            for d in 1..cells {
                let (x, y) = d2xy(side, d);
                let step = x.abs_diff(px) + y.abs_diff(py);
                assert_eq!(step, 1, "non-unit step at d={d}, order={order}");
                px = x;
                py = y;
            }
        }
    }

    #[test]
    fn test_order_for_cells() {
        assert_eq!(order_for_cells(0), 0);
        assert_eq!(order_for_cells(1), 0);
        assert_eq!(order_for_cells(2), 1);
        assert_eq!(order_for_cells(4), 1);
        assert_eq!(order_for_cells(5), 2);
        assert_eq!(order_for_cells(16), 2);
        assert_eq!(order_for_cells(17), 3);
        assert_eq!(order_for_cells(1 << 20), 10);
    }

    #[test]
    fn test_order_fits_cell_count() {
        for n in 0..200usize {
            let order = order_for_cells(n);
            let side = side_for_order(order) as usize;
            assert!(side * side >= n);
            if order > 0 {
                let prev_side = side_for_order(order - 1) as usize;
                assert!(prev_side * prev_side < n, "order {order} not minimal for n={n}");
            }
        }
    }
}
