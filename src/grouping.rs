use crate::model::RsvpRecord;
use crate::timestamp::to_millis;

/// The admin listing grouped by party: ascending group numbers, each with its
/// records in submission order.
pub type GroupedView = Vec<(f64, Vec<RsvpRecord>)>;

/// Partitions a flat record list into groups keyed by group number. Records
/// whose group number is not finite are dropped from the view. Within a
/// group, records sort by creation time in milliseconds, with an unknown
/// timestamp counting as 0 so undated records cluster at the front.
pub fn group_rsvps(records: &[RsvpRecord]) -> GroupedView {
    let mut groups: GroupedView = Vec::new();

    for record in records {
        let key = record.group_number;
        if !key.is_finite() {
            continue;
        }
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((key, vec![record.clone()])),
        }
    }

    for (_, members) in &mut groups {
        members.sort_by_key(|r| to_millis(r.created_at.as_ref()).unwrap_or(0));
    }
    groups.sort_by(|a, b| a.0.total_cmp(&b.0));

    groups
}
