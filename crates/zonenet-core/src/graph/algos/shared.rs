use crate::graph::types::Weight;

/// How a zone was first reached during a search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: usize,
    pub weight: Weight,
}

/// Walks predecessor steps back from `destination` to `origin`.
///
/// Returns the store positions origin-first with the summed weight, or
/// `None` when the chain stops short of `origin`.
pub fn reconstruct(
    origin: usize,
    destination: usize,
    predecessors: &[Option<Step>],
) -> Option<(Vec<usize>, Weight)> {
    let mut positions = vec![destination];
    let mut weights = Vec::new();
    let mut current = destination;

    while current != origin {
        let step = predecessors.get(current).copied().flatten()?;
        weights.push(step.weight);
        positions.push(step.from);
        current = step.from;

        // A chain longer than the store can only be a cycle
        if positions.len() > predecessors.len() {
            return None;
        }
    }

    positions.reverse();
    let weight = weights.into_iter().rev().sum();
    Some((positions, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: usize, weight: f64) -> Option<Step> {
        Some(Step {
            from,
            weight: Weight::new(weight),
        })
    }

    #[test]
    fn test_reconstruct_chain() {
        // 0 -> 1 -> 3, 2 unreached
        let predecessors = vec![None, step(0, 2.0), None, step(1, 5.0)];
        let (positions, weight) = reconstruct(0, 3, &predecessors).unwrap();
        assert_eq!(positions, vec![0, 1, 3]);
        assert_eq!(weight.value(), 7.0);
    }

    #[test]
    fn test_reconstruct_origin_is_destination() {
        let predecessors = vec![None, None];
        let (positions, weight) = reconstruct(1, 1, &predecessors).unwrap();
        assert_eq!(positions, vec![1]);
        assert_eq!(weight.value(), 0.0);
    }

    #[test]
    fn test_reconstruct_chain_not_reaching_origin() {
        // 3 is reached from 2, but 2 has no predecessor
        let predecessors = vec![None, None, None, step(2, 1.0)];
        assert!(reconstruct(0, 3, &predecessors).is_none());
    }

    #[test]
    fn test_reconstruct_cycle_is_rejected() {
        let predecessors = vec![None, step(2, 1.0), step(1, 1.0)];
        assert!(reconstruct(0, 1, &predecessors).is_none());
    }
}
