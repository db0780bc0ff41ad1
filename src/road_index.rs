use std::sync::OnceLock;

use log::debug;
use rstar::{AABB, RTree, RTreeObject};

use crate::dataset::RoadSegment;
use crate::geometry::{Coordinate, expanded_bounds};

/// How far from a road's bounding box a route point may be and still count as "on" it.
pub const ROAD_MATCH_TOLERANCE_METERS: f64 = 300.0;

#[derive(Debug, Clone)]
struct RoadEnvelope {
    road: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for RoadEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree of road bounding boxes, already grown by [`ROAD_MATCH_TOLERANCE_METERS`].
///
/// A point query returns exactly the roads for which
/// [`is_near_segment`](crate::geometry::is_near_segment) holds at that tolerance.
#[derive(Debug, Clone)]
pub struct RoadIndex {
    tree: RTree<RoadEnvelope>,
}

impl RoadIndex {
    pub fn new(roads: &[RoadSegment]) -> Self {
        let envelopes = roads
            .iter()
            .enumerate()
            .map(|(road, segment)| {
                let bounds = expanded_bounds(segment.endpoints, ROAD_MATCH_TOLERANCE_METERS);
                let (min, max) = (bounds.min(), bounds.max());
                RoadEnvelope {
                    road,
                    envelope: AABB::from_corners([min.y, min.x], [max.y, max.x]),
                }
            })
            .collect();

        let tree = RTree::bulk_load(envelopes);
        debug!("Road index built: {} segments", tree.size());
        Self { tree }
    }

    /// Indices into the road list this index was built from.
    pub fn near(&self, point: Coordinate) -> impl Iterator<Item = usize> + '_ {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.lat, point.lon]))
            .map(|e| e.road)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lazily built index slot. Cloning yields an empty slot so a copied dataset
/// never reuses an index built over different roads.
#[derive(Debug, Default)]
pub(crate) struct RoadIndexCell(OnceLock<RoadIndex>);

impl RoadIndexCell {
    pub(crate) fn get_or_build(&self, roads: &[RoadSegment]) -> &RoadIndex {
        self.0.get_or_init(|| RoadIndex::new(roads))
    }
}

impl Clone for RoadIndexCell {
    fn clone(&self) -> Self {
        Self::default()
    }
}
