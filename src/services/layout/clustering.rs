//! Overlap clustering: partition a day's events into independent nodes of
//! transitively overlapping events.

use std::cmp::Ordering;

use crate::models::event::Event;
use crate::models::layout::ClusterNode;

/// Group events into clusters.
///
/// Events are walked in `(start asc, duration desc, id asc)` order and each
/// one joins the first node whose span it overlaps, widening that node.
/// Node order follows creation order and carries no meaning beyond iteration.
pub fn cluster_events<'a, I>(events: I) -> Vec<ClusterNode<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut nodes: Vec<ClusterNode<'a>> = Vec::new();

    for event in sort_events_for_clustering(events) {
        match nodes.iter_mut().find(|node| is_event_part_of_node(event, node)) {
            Some(node) => add_event_to_node(event, node),
            None => nodes.push(ClusterNode::new(event)),
        }
    }

    log::trace!("Clustered events into {} node(s)", nodes.len());
    nodes
}

/// Sort by start ascending, longer events first on equal starts.
///
/// The id comparison only breaks exact ties so the result does not depend on
/// input order.
pub fn sort_events_for_clustering<'a, I>(events: I) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<&'a Event> = events.into_iter().collect();
    sorted.sort_by(|a, b| compare_for_clustering(a, b));
    sorted
}

fn compare_for_clustering(a: &Event, b: &Event) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Half-open overlap between the event and the node's current span.
pub fn is_event_part_of_node(event: &Event, node: &ClusterNode<'_>) -> bool {
    event.range().overlaps(&node.span())
}

fn add_event_to_node<'a>(event: &'a Event, node: &mut ClusterNode<'a>) {
    node.events.push(event);
    node.start = node.start.min(event.start);
    node.end = node.end.max(event.end);
}
