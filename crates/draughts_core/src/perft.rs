use crate::{board::State, movegen::successors_into};

/// Pure perft node count.
/// Counts all successor sequences from the current state down to `depth`.
pub fn perft(state: &State, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &State, depth: u8, layers: &mut [Vec<State>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        successors_into(state, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for child in buf.iter() {
            nodes += inner(child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(16); depth as usize];
    inner(state, depth, &mut layers[..])
}
