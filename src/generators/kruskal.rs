use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{
    generators::{lattice_cells, lattice_cols, lattice_rows},
    maze::{Coord, Grid},
    step::StepEmitter,
};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall cell between two lattice cells
#[derive(Clone, Copy)]
struct Edge {
    wall: Coord,
    cell1: Coord,
    cell2: Coord,
}

pub fn randomized_kruskal(grid: &mut Grid, steps: &mut StepEmitter, rng: &mut StdRng) {
    // Every lattice cell starts as its own set
    lattice_cells(grid)
        .into_iter()
        .for_each(|cell| grid.carve(cell));

    // Union-Find keyed by the grid's raveled index
    let mut uf = UnionFind::new(grid.cell_count());

    let (rows, cols) = (grid.rows(), grid.cols());
    let mut edges: Vec<Edge> = lattice_rows(grid)
        .flat_map(|row| lattice_cols(grid).map(move |col| (row, col)))
        .flat_map(|(row, col)| {
            [
                (col + 2 < cols - 1).then(|| Edge {
                    wall: (row, col + 1),
                    cell1: (row, col),
                    cell2: (row, col + 2),
                }),
                (row + 2 < rows - 1).then(|| Edge {
                    wall: (row + 1, col),
                    cell1: (row, col),
                    cell2: (row + 2, col),
                }),
            ]
        })
        .flatten()
        .collect();

    // Shuffle edges randomly
    edges.shuffle(rng);

    for edge in edges {
        let idx1 = grid.ravel_index(edge.cell1);
        let idx2 = grid.ravel_index(edge.cell2);

        // If cells are not yet connected, remove the wall between them
        if uf.unite(idx1, idx2) {
            grid.carve(edge.wall);
            steps.emit_animated(grid);
        }
    }
}
