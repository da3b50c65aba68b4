use crate::pairwise::sw::algo::{Direction, Directions, DirectionsIter};
use crate::pairwise::sw::traceback::{Trace, TraceMatrix};
use crate::pairwise::sw::{Cell, Matrix};
use crate::Score;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
struct Link {
    // Longest number of steps from the cell to a terminal cell
    len: usize,
    // Directions reaching that length
    next: Directions,
}

/// Longest path lengths for every cell of a trace matrix.
///
/// Every predecessor precedes its cell in row-major order, so a single pass suffices.
/// Directions that lead to shorter paths are dropped, which makes each enumerated path
/// maximal by construction. `Reset` survives only in cells with no non-empty path.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Extents {
    links: Matrix<Link>,
}

struct Frame {
    cell: Cell,
    pending: DirectionsIter,
}

impl Extents {
    pub fn new<S: Score>(tracemat: &TraceMatrix<S>) -> Self {
        let mut links = Matrix::<Link>::new(tracemat.rows(), tracemat.cols());

        for cell in links.interior() {
            let mut best = Link::default();
            for direction in tracemat.directions(cell) {
                let len = match direction.predecessor(cell) {
                    Some(prev) => links[prev].len + 1,
                    None => 0,
                };
                if best.next.is_empty() || len > best.len {
                    best = Link {
                        len,
                        next: Directions::from(direction),
                    };
                } else if len == best.len {
                    best.next.insert(direction);
                }
            }
            links[cell] = best;
        }

        Self { links }
    }

    /// Maximal number of steps of any path starting at the cell.
    pub fn len(&self, cell: Cell) -> usize {
        self.links[cell].len
    }

    /// Directions lying on at least one maximal path from the cell.
    pub fn next(&self, cell: Cell) -> Directions {
        self.links[cell].next
    }

    /// Every maximal-length path ending at `origin`.
    ///
    /// Paths are produced depth-first, visiting directions in the canonical order at each cell.
    /// The number of paths can grow exponentially with the number of ties.
    pub fn paths(&self, origin: Cell) -> Vec<Trace> {
        let mut result = Vec::new();

        let mut steps: Vec<Direction> = Vec::with_capacity(self.len(origin));
        let mut cells: Vec<Cell> = Vec::with_capacity(self.len(origin) + 1);
        let mut stack = vec![Frame {
            cell: origin,
            pending: self.next(origin).iter(),
        }];
        cells.push(origin);

        while let Some(frame) = stack.last_mut() {
            let cell = frame.cell;
            let next = if self.len(cell) == 0 {
                // Terminal: reset or boundary
                result.push(Trace::new(
                    steps.iter().rev().copied().collect(),
                    cells.iter().rev().copied().collect(),
                ));
                None
            } else {
                frame.pending.next()
            };

            let next = next.and_then(|direction| Some((direction, direction.predecessor(cell)?)));
            match next {
                Some((direction, prev)) => {
                    steps.push(direction);
                    cells.push(prev);
                    stack.push(Frame {
                        cell: prev,
                        pending: self.next(prev).iter(),
                    });
                }
                None => {
                    stack.pop();
                    steps.pop();
                    cells.pop();
                }
            }
        }

        debug_assert!(result.iter().all(|x| x.len() == self.len(origin)));
        result
    }
}
