use smartbus_core::seat::SeatLabel;
use smartbus_shared::models::SeatAssignment;

#[derive(Debug, Clone, PartialEq)]
pub struct Occupant {
    pub passenger_id: String,
    pub seat_type: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatCell {
    pub seat: SeatLabel,
    pub label: String,
    pub occupant: Option<Occupant>,
}

/// Row-major seat grid for drawing an allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMap {
    rows: u32,
    cols: u32,
    cells: Vec<SeatCell>,
    unplaced: Vec<SeatAssignment>,
}

impl SeatMap {
    pub fn new(rows: u32, cols: u32) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| SeatLabel::from_position(row, col)))
            .map(|seat| SeatCell {
                seat,
                label: seat.to_string(),
                occupant: None,
            })
            .collect();

        Self {
            rows,
            cols,
            cells,
            unplaced: Vec::new(),
        }
    }

    /// Seats every assignment whose seat id is on the grid. The rest are kept in `unplaced`.
    pub fn with_assignments(mut self, assignments: &[SeatAssignment]) -> Self {
        for assignment in assignments {
            let index = SeatLabel::parse(&assignment.seat_id)
                .ok()
                .filter(|seat| seat.fits(self.rows, self.cols))
                .map(|seat| (seat.row * self.cols + seat.col) as usize);

            match index {
                Some(i) => {
                    self.cells[i].occupant = Some(Occupant {
                        passenger_id: assignment.passenger_id.clone(),
                        seat_type: assignment.seat_type.clone(),
                        explanation: assignment.explanation.clone(),
                    });
                }
                None => {
                    tracing::warn!(
                        "Seat {} is not on a {}x{} grid",
                        assignment.seat_id,
                        self.rows,
                        self.cols
                    );
                    self.unplaced.push(assignment.clone());
                }
            }
        }
        self
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Cells of one zero-based row, or an empty slice past the last row.
    pub fn row(&self, row: u32) -> &[SeatCell] {
        if row >= self.rows {
            return &[];
        }
        let start = (row * self.cols) as usize;
        &self.cells[start..start + self.cols as usize]
    }

    pub fn cell(&self, label: &str) -> Option<&SeatCell> {
        let seat = SeatLabel::parse(label).ok()?;
        self.cells.iter().find(|c| c.seat == seat)
    }

    pub fn occupied(&self) -> impl Iterator<Item = &SeatCell> {
        self.cells.iter().filter(|c| c.occupant.is_some())
    }

    pub fn unplaced(&self) -> &[SeatAssignment] {
        &self.unplaced
    }
}
