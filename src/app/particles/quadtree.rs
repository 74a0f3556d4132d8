use eframe::egui::{Pos2, Rect, Vec2};

const LEAF_CAPACITY: usize = 8;
const MAX_DEPTH: usize = 8;

// Squared gap between two cells; zero when they touch or overlap.
pub(super) fn gap_sq(a: Rect, b: Rect) -> f32 {
    let dx = (a.min.x - b.max.x).max(b.min.x - a.max.x).max(0.0);
    let dy = (a.min.y - b.max.y).max(b.min.y - a.max.y).max(0.0);
    dx * dx + dy * dy
}

pub(super) struct Node {
    pub(super) cell: Rect,
    pub(super) members: Vec<usize>,
    pub(super) children: Vec<Node>,
}

impl Node {
    pub(super) fn build(positions: &[Pos2]) -> Option<Self> {
        if positions.is_empty() || positions.iter().any(|pos| !pos.is_finite()) {
            return None;
        }

        let extent = Rect::from_points(positions);
        let side = extent.width().max(extent.height()).max(1.0) + 2.0;
        let cell = Rect::from_center_size(extent.center(), Vec2::splat(side));
        Some(Self::subdivide(cell, (0..positions.len()).collect(), positions, 0))
    }

    fn subdivide(cell: Rect, members: Vec<usize>, positions: &[Pos2], depth: usize) -> Self {
        if depth >= MAX_DEPTH || members.len() <= LEAF_CAPACITY {
            return Self::leaf(cell, members);
        }

        let center = cell.center();
        let mut quadrants: [Vec<usize>; 4] = Default::default();
        for index in members.iter().copied() {
            let pos = positions[index];
            let slot = usize::from(pos.x >= center.x) + 2 * usize::from(pos.y >= center.y);
            quadrants[slot].push(index);
        }

        if quadrants.iter().filter(|quadrant| !quadrant.is_empty()).count() < 2 {
            return Self::leaf(cell, members);
        }

        let children = quadrants
            .into_iter()
            .enumerate()
            .filter(|(_, quadrant)| !quadrant.is_empty())
            .map(|(slot, quadrant)| {
                let corner = Pos2::new(
                    if slot & 1 == 0 { cell.min.x } else { center.x },
                    if slot & 2 == 0 { cell.min.y } else { center.y },
                );
                let child = Rect::from_min_size(corner, cell.size() * 0.5);
                Self::subdivide(child, quadrant, positions, depth + 1)
            })
            .collect();

        Self {
            cell,
            members: Vec::new(),
            children,
        }
    }

    fn leaf(cell: Rect, members: Vec<usize>) -> Self {
        Self {
            cell,
            members,
            children: Vec::new(),
        }
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
