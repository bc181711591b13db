use mapgrid::{CellState, GridElement, GridError, GridModel, MarkerKind, SlotState};

#[test]
fn construction_produces_open_cells_and_plain_ring() {
    for &(cols, rows) in &[(1, 1), (3, 2), (20, 10), (50, 50)] {
        let grid = GridModel::new(cols, rows).expect("dimensions in range");

        let mut open_cells = 0;
        for row in 0..rows {
            for col in 0..cols {
                assert_eq!(grid.cell(col, row), Some(CellState::Open));
                open_cells += 1;
            }
        }
        assert_eq!(open_cells, cols * rows);

        let expected_slots = (2 * (cols + 2) + 2 * rows) as usize;
        assert_eq!(grid.slots().len(), expected_slots);
        assert!(grid.slots().iter().all(|s| s.state == SlotState::Plain));
    }
}

#[test]
fn construction_rejects_out_of_range_dimensions() {
    for &(cols, rows) in &[(0, 10), (10, 0), (51, 10), (10, 51), (-1, 5)] {
        assert_eq!(
            GridModel::new(cols, rows).err(),
            Some(GridError::InvalidDimension),
            "({cols}, {rows}) should be rejected"
        );
    }
}

#[test]
fn corners_belong_to_top_and_bottom_rows() {
    let grid = GridModel::new(3, 2).expect("valid dims");

    // corners exist exactly once, owned by the extended top/bottom rows
    for &(col, row) in &[(-1, -1), (3, -1), (-1, 2), (3, 2)] {
        assert!(grid.slot_at(col, row).is_some(), "({col}, {row}) missing");
        let count = grid
            .slots()
            .iter()
            .filter(|s| (s.col, s.row) == (col, row))
            .count();
        assert_eq!(count, 1, "({col}, {row}) duplicated");
    }
}

#[test]
fn element_lookup_dispatches_by_position() {
    let grid = GridModel::new(3, 2).expect("valid dims");

    assert_eq!(grid.element_at(0, 0), Some(GridElement::Cell { col: 0, row: 0 }));
    assert_eq!(grid.element_at(2, 1), Some(GridElement::Cell { col: 2, row: 1 }));
    assert_eq!(
        grid.element_at(-1, 0),
        Some(GridElement::BorderSlot { col: -1, row: 0 })
    );
    assert_eq!(
        grid.element_at(1, 2),
        Some(GridElement::BorderSlot { col: 1, row: 2 })
    );
    // outside the ring entirely
    assert_eq!(grid.element_at(-2, 0), None);
    assert_eq!(grid.element_at(4, -1), None);
    // side columns do not extend past the interior rows
    assert_eq!(grid.element_at(-1, -1), Some(GridElement::BorderSlot { col: -1, row: -1 }));
}

#[test]
fn painting_cells_is_bounded_and_idempotent() {
    let mut grid = GridModel::new(3, 2).expect("valid dims");

    grid.set_cell(1, 1, CellState::Blocked).expect("in range");
    assert_eq!(grid.cell(1, 1), Some(CellState::Blocked));

    // repainting the same state changes nothing
    grid.set_cell(1, 1, CellState::Blocked).expect("in range");
    assert_eq!(grid.cell(1, 1), Some(CellState::Blocked));

    grid.set_cell(1, 1, CellState::Open).expect("in range");
    assert_eq!(grid.cell(1, 1), Some(CellState::Open));

    assert_eq!(
        grid.set_cell(3, 0, CellState::Blocked),
        Err(GridError::OutOfBounds { col: 3, row: 0 })
    );
    assert_eq!(
        grid.set_cell(0, -1, CellState::Blocked),
        Err(GridError::OutOfBounds { col: 0, row: -1 })
    );
}

#[test]
fn border_slots_never_take_terrain_and_cells_never_take_markers() {
    let mut grid = GridModel::new(3, 2).expect("valid dims");

    // a border coordinate is not paintable
    assert!(grid.set_cell(-1, 0, CellState::Blocked).is_err());
    assert_eq!(grid.slot_at(-1, 0).map(|s| s.state), Some(SlotState::Plain));

    // an interior coordinate is not a marker target
    assert!(grid.assign_marker(1, 1, MarkerKind::Player).is_err());
    assert_eq!(grid.cell(1, 1), Some(CellState::Open));
}
