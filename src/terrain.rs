use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use std::error::Error;
use std::str::FromStr;

/// Terrain type of a single grid cell. The discriminant doubles as the cost of entering the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    Wall = 0,
    Clear = 1,
    Wood = 2,
    Water = 3,
}

impl CellType {
    /// Cost of entering a cell of this type, [None] for walls.
    pub fn cost(self) -> Option<i32> {
        match self {
            CellType::Wall => None,
            cell => Some(cell as i32),
        }
    }
    pub fn is_passable(self) -> bool {
        self != CellType::Wall
    }
}

impl TryFrom<char> for CellType {
    type Error = TerrainError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(CellType::Wall),
            '1' => Ok(CellType::Clear),
            '2' => Ok(CellType::Wood),
            '3' => Ok(CellType::Water),
            other => Err(TerrainError::UnknownCell(other)),
        }
    }
}

/// The four cardinal moves. Neighbours are always visited in declaration order, which fixes
/// tie-breaking between equally good candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    pub const ALL: [Compass; 4] = [Compass::North, Compass::East, Compass::South, Compass::West];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Compass::North => (0, 1),
            Compass::East => (1, 0),
            Compass::South => (0, -1),
            Compass::West => (-1, 0),
        }
    }
    pub fn apply(self, point: Point) -> Point {
        let (dx, dy) = self.offset();
        point + Point::new(dx, dy)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainError {
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownCell(char),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TerrainError::Empty => write!(f, "terrain has no cells"),
            TerrainError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells but {} were expected",
                row, found, expected
            ),
            TerrainError::UnknownCell(c) => write!(f, "unknown terrain cell '{}'", c),
        }
    }
}

impl Error for TerrainError {}

/// Rectangular cost grid with (0, 0) in the bottom-left corner, backed by a [SimpleGrid].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    pub grid: SimpleGrid<CellType>,
}

impl TerrainGrid {
    pub fn new(width: usize, height: usize, fill: CellType) -> TerrainGrid {
        TerrainGrid {
            grid: SimpleGrid::new(width, height, fill),
        }
    }

    /// Builds a grid from rows indexed as `rows[y][x]`. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellType>>) -> Result<TerrainGrid, TerrainError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(TerrainError::Empty);
        }
        let mut terrain = TerrainGrid::new(width, rows.len(), CellType::Wall);
        for (y, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(TerrainError::RaggedRow {
                    row: y,
                    expected: width,
                    found: values.len(),
                });
            }
            for (x, cell) in values.into_iter().enumerate() {
                terrain.grid.set(x, y, cell);
            }
        }
        Ok(terrain)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.point_in_bounds(Point::new(x, y))
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.grid.point_in_bounds(point)
    }

    fn assert_in_bounds(&self, point: Point) {
        assert!(
            self.point_in_bounds(point),
            "{} lies outside the {}x{} terrain",
            point,
            self.width(),
            self.height()
        );
    }

    /// Panics if the coordinates are out of bounds.
    pub fn cell_type(&self, x: i32, y: i32) -> CellType {
        self.cell_type_point(Point::new(x, y))
    }
    pub fn cell_type_point(&self, point: Point) -> CellType {
        self.assert_in_bounds(point);
        self.grid.get_point(point)
    }
    pub fn set(&mut self, x: i32, y: i32, cell: CellType) {
        let point = Point::new(x, y);
        self.assert_in_bounds(point);
        self.grid.set_point(point, cell);
    }

    /// Cost of entering `point`, or [None] if it is a wall or off the grid.
    pub fn cost(&self, point: Point) -> Option<i32> {
        if self.point_in_bounds(point) {
            self.grid.get_point(point).cost()
        } else {
            None
        }
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.cost(point).is_some()
    }

    /// In-bounds, non-wall neighbours of `point` in North, East, South, West order, with the cost
    /// of entering each.
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = (Point, i32)> + '_ {
        Compass::ALL
            .into_iter()
            .map(move |dir| dir.apply(point))
            .filter_map(move |p| self.cost(p).map(|c| (p, c)))
    }
}

impl FromStr for TerrainGrid {
    type Err = TerrainError;

    /// Parses rows of digits, one text line per grid row. The first line is the top row, so it
    /// ends up with the highest y coordinate. Whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(CellType::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;
        rows.reverse();
        TerrainGrid::from_rows(rows)
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height() as i32).rev() {
            let row = (0..self.width() as i32)
                .map(|x| char::from(b'0' + self.cell_type(x, y) as u8))
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
