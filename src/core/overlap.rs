use super::constants::OVERLAPPING_FLAG;
use super::geometry::{overlaps, ScreenRect};
use super::port::ViewerPort;
use super::registry::Hotspot;
use smallvec::SmallVec;

/// Outcome of one overlap pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapReport {
    /// Hotspots whose label had a rendering box.
    pub visible: usize,
    /// Indices (into the hotspot slice) flagged as overlapping, ascending.
    pub overlapping: Vec<usize>,
}

/// Recompute the `overlapping` flag of every hotspot from the live label
/// rectangles.
///
/// Every pass starts by clearing all flags, so nothing from an earlier pass
/// survives. Pairs are compared exhaustively; hotspot counts are small.
pub fn detect<P: ViewerPort>(port: &P, hotspots: &[Hotspot<P::Element>]) -> OverlapReport {
    let visible: SmallVec<[(usize, ScreenRect); 16]> = hotspots
        .iter()
        .enumerate()
        .filter(|(_, h)| port.is_laid_out(&h.label))
        .map(|(i, h)| (i, port.bounding_rect(&h.label)))
        .collect();

    for h in hotspots {
        port.set_flag(&h.marker, OVERLAPPING_FLAG, false);
    }

    let mut hit = vec![false; hotspots.len()];
    for (a, &(i, ref rect_i)) in visible.iter().enumerate() {
        for &(j, ref rect_j) in &visible[a + 1..] {
            if overlaps(rect_i, rect_j) {
                hit[i] = true;
                hit[j] = true;
            }
        }
    }

    let overlapping: Vec<usize> = hit
        .iter()
        .enumerate()
        .filter_map(|(i, &on)| on.then_some(i))
        .collect();
    for &i in &overlapping {
        port.set_flag(&hotspots[i].marker, OVERLAPPING_FLAG, true);
    }

    log::debug!(
        "[overlap] visible={} overlapping={}",
        visible.len(),
        overlapping.len()
    );
    OverlapReport {
        visible: visible.len(),
        overlapping,
    }
}
