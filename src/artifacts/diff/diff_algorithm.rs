use crate::artifacts::diff::opcode::{DiffOp, Edit, group_edits};
use derive_new::new;

/// Bounds on the work spent diffing one pair of sequences.
///
/// `max_len` applies to the differing middle (after the common prefix and
/// suffix are stripped), `max_cost` to the edit distance explored by Myers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffGuard {
    pub max_len: usize,
    pub max_cost: usize,
}

impl Default for DiffGuard {
    fn default() -> Self {
        Self {
            max_len: 100_000,
            max_cost: 4_000,
        }
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    /// Forward pass; `None` when the edit distance exceeds the configured cost.
    fn compute_shortest_edit(&self) -> Option<Self::Trace>;
    fn backtrack(&self) -> Option<Self::EditPath>;
    fn diff(&self) -> Option<Self::EditScript>;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    #[new(value = "usize::MAX")]
    max_cost: usize,
}

impl<'d, T> MyersDiff<'d, T> {
    pub fn with_max_cost(mut self, max_cost: usize) -> Self {
        self.max_cost = max_cost;
        self
    }
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    /// One snapshot per round `d`, holding the furthest x reached on
    /// diagonals `-d..=d` before that round ran (index `k + d`).
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;
    type EditScript = Vec<Edit>;

    fn compute_shortest_edit(&self) -> Option<Self::Trace> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let limit = ((n + m) as usize).min(self.max_cost) as isize;
        let offset = limit + 1;

        let mut v = vec![0; (2 * offset + 1) as usize];
        let mut trace = Vec::new();

        for d in 0..=limit {
            trace.push(v[(offset - d) as usize..=(offset + d) as usize].to_vec());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // came down from k+1, an insertion
                    v[idx + 1]
                } else {
                    // came across from k-1, a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Some(trace);
                }
            }
        }

        None
    }

    fn backtrack(&self) -> Option<Self::EditPath> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit()?;

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;

            if d == 0 {
                while x > 0 && y > 0 {
                    edit_path.push((x - 1, y - 1, x, y));
                    x -= 1;
                    y -= 1;
                }
                break;
            }

            let at = |k: isize| v[(k + d) as usize];
            let k = x - y;

            let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
                k + 1
            } else {
                k - 1
            };

            let prev_x = at(prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            edit_path.push((prev_x, prev_y, x, y));

            (x, y) = (prev_x, prev_y);
        }

        Some(edit_path)
    }

    fn diff(&self) -> Option<Self::EditScript> {
        let path = self.backtrack()?;

        let mut diff = path
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    // only y increased
                    Edit::Insert {
                        new: prev_y as usize,
                    }
                } else if y == prev_y {
                    // only x increased
                    Edit::Delete {
                        old: prev_x as usize,
                    }
                } else {
                    Edit::Equal {
                        old: prev_x as usize,
                        new: prev_y as usize,
                    }
                }
            })
            .collect::<Vec<_>>();

        diff.reverse();
        Some(diff)
    }
}

/// Diff two sequences into opcodes.
///
/// The common prefix and suffix are matched up front, so identical leading
/// elements always pair with their earliest counterpart. If the differing
/// middle trips the guard it is reported as one whole-range change.
pub fn diff_ops<T: Eq>(a: &[T], b: &[T], guard: &DiffGuard) -> Vec<DiffOp> {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let a_mid = &a[prefix..a.len() - suffix];
    let b_mid = &b[prefix..b.len() - suffix];

    let mut edits = Vec::with_capacity(a.len().max(b.len()));
    edits.extend((0..prefix).map(|i| Edit::Equal { old: i, new: i }));

    let middle = if a_mid.len() + b_mid.len() > guard.max_len {
        None
    } else {
        MyersDiff::new(a_mid, b_mid)
            .with_max_cost(guard.max_cost)
            .diff()
    };

    match middle {
        Some(script) => edits.extend(script.into_iter().map(|edit| match edit {
            Edit::Delete { old } => Edit::Delete { old: old + prefix },
            Edit::Insert { new } => Edit::Insert { new: new + prefix },
            Edit::Equal { old, new } => Edit::Equal {
                old: old + prefix,
                new: new + prefix,
            },
        })),
        None => {
            log::debug!(
                "diff guard exceeded ({} vs {} elements), reporting whole-range change",
                a_mid.len(),
                b_mid.len()
            );
            edits.extend((0..a_mid.len()).map(|i| Edit::Delete { old: prefix + i }));
            edits.extend((0..b_mid.len()).map(|j| Edit::Insert { new: prefix + j }));
        }
    }

    let (a_tail, b_tail) = (a.len() - suffix, b.len() - suffix);
    edits.extend((0..suffix).map(|i| Edit::Equal {
        old: a_tail + i,
        new: b_tail + i,
    }));

    group_edits(&edits)
}
