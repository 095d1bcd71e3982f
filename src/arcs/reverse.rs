use super::ArcId;

/// Makes a ring trace the same boundary in the opposite direction.
///
/// Reverses the order of the ids and complements each one, so every arc is
/// walked the other way. Vertex data is untouched. An empty ring stays empty.
pub fn reverse_ring(ids: &mut [ArcId]) {
    ids.reverse();
    for id in ids.iter_mut() {
        *id = !*id;
    }
}

/// Returns a reversed copy of the ring. See `reverse_ring()`.
pub fn reversed_ring(ids: &[ArcId]) -> Vec<ArcId> {
    ids.iter().rev().map(|&id| !id).collect()
}
