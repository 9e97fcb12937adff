use crate::collections::FxIndexMap;
use crate::errors::MapError;
use super::{CityGrid, Direction, Mark};


/// Stable handle of a cell inside a `CityMap`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}


/// What occupies a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Start,
    Destination,
    Intersection,
    Road(Direction), // one-way segment, travel only in this direction
}


#[derive(Clone, Debug)]
struct MapCell {
    kind: CellKind,
    distance: u32,
    predecessor: Option<CellId>,
    mark: Mark,
}

impl MapCell {
    fn new(kind: CellKind) -> Self {
        Self {
            kind,
            distance: u32::MAX,
            predecessor: None,
            mark: Mark::Unmarked,
        }
    }
}


/// City map stored as an arena of cells keyed by (x, y) position
/// Positions with no cell are impassable
#[derive(Clone, Debug)]
pub struct CityMap {
    cells: FxIndexMap<(i32, i32), MapCell>,
    start: CellId,
}

impl CityMap {

    /// Build a map from positioned cells, exactly one of them must be the start
    pub fn new<I>(cells: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = ((i32, i32), CellKind)>,
    {
        let mut map: FxIndexMap<(i32, i32), MapCell> = FxIndexMap::default();
        let mut start = None;

        for (position, kind) in cells {
            if map.contains_key(&position) {
                return Err(MapError::DuplicateCell(position));
            }
            let index = map.insert_full(position, MapCell::new(kind)).0;
            if kind == CellKind::Start {
                if start.is_some() {
                    return Err(MapError::DuplicateStart);
                }
                start = Some(CellId(index));
            }
        }

        let start = start.ok_or(MapError::MissingStart)?;
        Ok(Self { cells: map, start })
    }

    pub fn cell_at(&self, position: (i32, i32)) -> Option<CellId> {
        self.cells.get_index_of(&position).map(CellId)
    }

    pub fn position(&self, cell: CellId) -> Option<(i32, i32)> {
        self.cells.get_index(cell.0).map(|(&position, _)| position)
    }

    /// Forget every search result so the map can be searched again
    pub fn reset(&mut self) {
        for data in self.cells.values_mut() {
            data.distance = u32::MAX;
            data.predecessor = None;
            data.mark = Mark::Unmarked;
        }
    }

    // CellIds are only handed out by this map, so indexing stays in bounds
    fn cell(&self, cell: CellId) -> &MapCell {
        &self.cells[cell.0]
    }

    fn cell_mut(&mut self, cell: CellId) -> &mut MapCell {
        &mut self.cells[cell.0]
    }

    /// Parse a text layout, used by tests
    /// S start, D destination, + intersection, ^ > v < roads, anything else is empty
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Result<Self, MapError> {
        let cells = rows.iter().enumerate().flat_map(|(y, row)| {
            row.chars().enumerate().filter_map(move |(x, c)| {
                let kind = match c {
                    'S' => CellKind::Start,
                    'D' => CellKind::Destination,
                    '+' => CellKind::Intersection,
                    '^' => CellKind::Road(Direction::North),
                    '>' => CellKind::Road(Direction::East),
                    'v' => CellKind::Road(Direction::South),
                    '<' => CellKind::Road(Direction::West),
                    _ => return None,
                };
                Some(((x as i32, y as i32), kind))
            })
        });
        Self::new(cells)
    }
}


impl CityGrid for CityMap {
    type Cell = CellId;
    type Distance = u32;

    fn start(&self) -> CellId {
        self.start
    }

    fn neighbour(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        let (x, y) = self.position(cell)?;
        let (dx, dy) = direction.offset();
        self.cell_at((x + dx, y + dy))
    }

    fn is_start(&self, cell: CellId) -> bool {
        self.cell(cell).kind == CellKind::Start
    }

    fn is_destination(&self, cell: CellId) -> bool {
        self.cell(cell).kind == CellKind::Destination
    }

    fn is_intersection(&self, cell: CellId) -> bool {
        self.cell(cell).kind == CellKind::Intersection
    }

    fn is_road(&self, cell: CellId, direction: Direction) -> bool {
        self.cell(cell).kind == CellKind::Road(direction)
    }

    fn distance_to_start(&self, cell: CellId) -> u32 {
        self.cell(cell).distance
    }

    fn set_distance_to_start(&mut self, cell: CellId, distance: u32) {
        self.cell_mut(cell).distance = distance;
    }

    fn predecessor(&self, cell: CellId) -> Option<CellId> {
        self.cell(cell).predecessor
    }

    fn set_predecessor(&mut self, cell: CellId, predecessor: CellId) {
        self.cell_mut(cell).predecessor = Some(predecessor);
    }

    fn mark(&self, cell: CellId) -> Mark {
        self.cell(cell).mark
    }

    fn mark_in_list(&mut self, cell: CellId) {
        self.cell_mut(cell).mark = Mark::InList;
    }

    fn mark_out_list(&mut self, cell: CellId) {
        self.cell_mut(cell).mark = Mark::OutList;
    }
}
