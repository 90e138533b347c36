use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Uniform coordinate in `[0, width) x [0, height)`.
    pub fn random(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        Position {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Open => ' ',
            Cell::Wall => '.',
        }
    }

    pub fn walkable(&self) -> bool {
        matches!(self, Cell::Open)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn open(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![vec![Cell::Open; width]; height],
            width,
            height,
        }
    }

    /// Scatter walls independently over every cell except `spawn`, which is
    /// always left open. Nothing guarantees the open cells are connected.
    pub fn generate(
        width: usize,
        height: usize,
        spawn: Position,
        wall_chance_percent: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut grid = Grid::open(width, height);
        let chance = wall_chance_percent.min(100);

        for y in 0..height {
            for x in 0..width {
                if x == spawn.x && y == spawn.y {
                    continue;
                }
                if rng.gen_ratio(chance, 100) {
                    grid.cells[y][x] = Cell::Wall;
                }
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.y][pos.x]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.y][pos.x] = cell;
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.get(pos).walkable()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn wall_count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|c| **c == Cell::Wall).count())
            .sum()
    }
}
