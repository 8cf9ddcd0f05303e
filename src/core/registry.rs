use super::camera::{parse_anchor, AnchorError};
use super::constants::{POSITION_ATTR, ROOM_ID_ATTR};
use super::port::ViewerPort;
use super::rooms::{Room, RoomCatalog};
use glam::DVec3;

/// A marker bound to a room, with its label and raw anchor position.
#[derive(Clone, Debug)]
pub struct Hotspot<E> {
    pub room_id: String,
    pub position: Option<String>,
    pub marker: E,
    pub label: E,
}

impl<E> Hotspot<E> {
    /// Parsed `data-position` of the marker.
    pub fn anchor(&self) -> Result<DVec3, AnchorError> {
        match self.position.as_deref() {
            Some(p) => parse_anchor(p),
            None => Err(AnchorError::Missing),
        }
    }
}

/// Hotspots found in the page at startup. Fixed for the session.
#[derive(Clone, Debug)]
pub struct HotspotRegistry<E> {
    hotspots: Vec<Hotspot<E>>,
}

impl<E: Clone> HotspotRegistry<E> {
    /// Scan the viewer's markers. Markers without a room id or without a
    /// label are partial annotations and are skipped.
    pub fn discover<P>(port: &P, catalog: &RoomCatalog) -> Self
    where
        P: ViewerPort<Element = E>,
    {
        let mut hotspots = Vec::new();
        for (i, marker) in port.markers().into_iter().enumerate() {
            let room_id = match port.attribute(&marker, ROOM_ID_ATTR) {
                Some(id) if !id.is_empty() => id,
                _ => {
                    log::debug!("[hotspots] marker {} has no room id, skipped", i);
                    continue;
                }
            };
            let Some(label) = port.label_of(&marker) else {
                log::debug!("[hotspots] marker {} ({}) has no label, skipped", i, room_id);
                continue;
            };
            if !catalog.contains(&room_id) {
                log::warn!("[hotspots] room '{}' is not in the catalog", room_id);
            }
            let position = port.attribute(&marker, POSITION_ATTR);
            hotspots.push(Hotspot {
                room_id,
                position,
                marker,
                label,
            });
        }
        log::info!("[hotspots] {} hotspots found", hotspots.len());
        Self { hotspots }
    }
}

impl<E> HotspotRegistry<E> {
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Hotspot<E>> {
        self.hotspots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hotspot<E>> {
        self.hotspots.iter()
    }

    pub fn as_slice(&self) -> &[Hotspot<E>] {
        &self.hotspots
    }

    /// Catalog entry for the hotspot at `index`.
    pub fn room_of<'c>(&self, index: usize, catalog: &'c RoomCatalog) -> Option<&'c Room> {
        self.get(index).and_then(|h| catalog.get(&h.room_id))
    }
}

impl<E> Default for HotspotRegistry<E> {
    fn default() -> Self {
        Self {
            hotspots: Vec::new(),
        }
    }
}
