use eframe::egui::Pos2;

use super::quadtree::{Node, gap_sq};

pub(super) const LINK_DISTANCE: f32 = 120.0;
pub(super) const LINK_MAX_OPACITY: f32 = 0.15;
const QUADTREE_LINK_THRESHOLD: usize = 48;
// Cell gaps are pruned with a little slack so rounding in the cell distance
// never drops a pair the pairwise pass would keep.
const PRUNE_SLACK: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
}

// Line opacity for two particles `distance` apart, `None` when they are
// too far apart to be connected.
pub fn link_opacity(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some(LINK_MAX_OPACITY * (1.0 - distance / LINK_DISTANCE))
    } else {
        None
    }
}

fn link_between(positions: &[Pos2], from: usize, to: usize) -> Option<Link> {
    let (from, to) = if from < to { (from, to) } else { (to, from) };
    let distance = (positions[from] - positions[to]).length();
    link_opacity(distance).map(|opacity| Link { from, to, opacity })
}

pub fn links(positions: &[Pos2], out: &mut Vec<Link>) {
    if positions.len() > QUADTREE_LINK_THRESHOLD {
        quadtree_links(positions, out);
    } else {
        pairwise_links(positions, out);
    }
}

pub fn pairwise_links(positions: &[Pos2], out: &mut Vec<Link>) {
    out.clear();
    for from in 0..positions.len() {
        for to in (from + 1)..positions.len() {
            if let Some(link) = link_between(positions, from, to) {
                out.push(link);
            }
        }
    }
}

pub fn quadtree_links(positions: &[Pos2], out: &mut Vec<Link>) {
    out.clear();
    let Some(tree) = Node::build(positions) else {
        pairwise_links(positions, out);
        return;
    };

    let max_gap = LINK_DISTANCE + PRUNE_SLACK;
    links_within(&tree, positions, max_gap * max_gap, out);
    out.sort_unstable_by_key(|link| (link.from, link.to));
}

fn links_within(node: &Node, positions: &[Pos2], max_gap_sq: f32, out: &mut Vec<Link>) {
    if node.is_leaf() {
        for (offset, &from) in node.members.iter().enumerate() {
            for &to in &node.members[offset + 1..] {
                out.extend(link_between(positions, from, to));
            }
        }
        return;
    }

    for (offset, child) in node.children.iter().enumerate() {
        links_within(child, positions, max_gap_sq, out);
        for other in &node.children[offset + 1..] {
            links_across(child, other, positions, max_gap_sq, out);
        }
    }
}

fn links_across(a: &Node, b: &Node, positions: &[Pos2], max_gap_sq: f32, out: &mut Vec<Link>) {
    if gap_sq(a.cell, b.cell) > max_gap_sq {
        return;
    }

    match (a.is_leaf(), b.is_leaf()) {
        (true, true) => {
            for &from in &a.members {
                for &to in &b.members {
                    out.extend(link_between(positions, from, to));
                }
            }
        }
        (false, true) => {
            for child in &a.children {
                links_across(child, b, positions, max_gap_sq, out);
            }
        }
        (true, false) => {
            for child in &b.children {
                links_across(a, child, positions, max_gap_sq, out);
            }
        }
        (false, false) if a.cell.width() >= b.cell.width() => {
            for child in &a.children {
                links_across(child, b, positions, max_gap_sq, out);
            }
        }
        (false, false) => {
            for child in &b.children {
                links_across(a, child, positions, max_gap_sq, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn scattered(count: usize, seed: u64) -> Vec<Pos2> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| pos2(rng.random_range(-5.0..805.0), rng.random_range(-5.0..605.0)))
            .collect()
    }

    #[test]
    fn opacity_falls_to_zero_at_link_distance() {
        assert_eq!(link_opacity(0.0), Some(LINK_MAX_OPACITY));
        assert_eq!(link_opacity(60.0), Some(LINK_MAX_OPACITY * 0.5));
        assert_eq!(link_opacity(LINK_DISTANCE), None);
        assert_eq!(link_opacity(500.0), None);

        let mut previous = f32::INFINITY;
        for step in 0..120 {
            let opacity = link_opacity(step as f32).expect("inside range");
            assert!(opacity < previous);
            previous = opacity;
        }
        assert!(link_opacity(119.999).expect("inside range") < 1e-4);
    }

    #[test]
    fn pairwise_links_are_ordered_unordered_pairs() {
        let positions = vec![pos2(0.0, 0.0), pos2(100.0, 0.0), pos2(300.0, 0.0)];
        let mut out = Vec::new();
        pairwise_links(&positions, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].from, out[0].to), (0, 1));
        assert!((out[0].opacity - LINK_MAX_OPACITY / 6.0).abs() < 1e-6);
    }

    #[test]
    fn quadtree_matches_pairwise_reference() {
        for (count, seed) in [(32, 1), (80, 2), (80, 3), (300, 4)] {
            let positions = scattered(count, seed);
            let mut reference = Vec::new();
            let mut indexed = Vec::new();
            pairwise_links(&positions, &mut reference);
            quadtree_links(&positions, &mut indexed);
            assert!(!reference.is_empty());
            assert_eq!(reference, indexed, "{count} particles, seed {seed}");
        }
    }

    #[test]
    fn clustered_points_match_pairwise_reference() {
        let mut positions = vec![pos2(200.0, 200.0); 30];
        positions.extend(scattered(50, 9));
        let mut reference = Vec::new();
        let mut indexed = Vec::new();
        pairwise_links(&positions, &mut reference);
        links(&positions, &mut indexed);
        assert_eq!(reference, indexed);
    }
}
