use crate::flow::search::find_augmenting_path;
use crate::flow::solver::{augment, bottleneck, collect_path, validate_endpoints};
use crate::flow::state::FlowState;
use crate::network::error::NetworkError;
use crate::network::network::RailNetwork;

/// Cost accounting over the augmenting paths the breadth-first search
/// happens to select: every traversed edge, forward or backward, adds its
/// service-class increment. The run keeps only the (bottleneck, cost)
/// records whose bottleneck matches the best one seen so far, clearing
/// superseded smaller-bottleneck records. This reports the cost of the
/// largest single-path contributions; it is not minimum-cost maximum
/// flow.
pub fn cost_augmented_max_flow(
    net: &RailNetwork,
    source: &str,
    dest: &str,
) -> Result<Vec<(u32, u32)>, NetworkError> {
    let s = net.require(source)?;
    let t = net.require(dest)?;
    validate_endpoints(net, s, t)?;

    let mut state = FlowState::new(net);
    let mut best = 0u32;
    let mut records: Vec<(u32, u32)> = Vec::new();
    while let Some(steps) = find_augmenting_path(net, &state, s, t) {
        let path = collect_path(net, &steps, s, t);
        let amount = bottleneck(net, &state, &path);
        let cost = path
            .iter()
            .map(|step| net.edge(step.edge).service().cost())
            .sum();
        if amount > best {
            best = amount;
            records.clear();
        }
        if amount == best {
            records.push((amount, cost));
        }
        augment(&mut state, &path, amount);
    }
    Ok(records)
}
