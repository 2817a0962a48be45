use crate::entities::DistanceEntry;

/// Generates the full inbound by outbound distance table.
/// The distance between two doors is the absolute difference of their ids
/// plus a constant `min_offset`, which models doors laid out along a line.
pub fn generate_distances(n_in: usize, n_out: usize, min_offset: u64) -> Vec<DistanceEntry> {
    let mut entries = Vec::with_capacity(n_in * n_out);
    for in_door in 0..n_in {
        for out_door in 0..n_out {
            entries.push(DistanceEntry {
                in_door,
                out_door,
                distance: in_door.abs_diff(out_door) as u64 + min_offset,
            });
        }
    }
    entries
}
