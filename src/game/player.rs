use super::board::Cell;

/// A seat at the table. Seat order is fixed when the challenge is accepted:
/// the player who posted the invitation sits at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Blue,
    Red,
}

impl Seat {
    /// Seat whose turn it is after `filled` pieces have been placed
    pub fn from_parity(filled: usize) -> Seat {
        if filled % 2 == 0 {
            Seat::Blue
        } else {
            Seat::Red
        }
    }

    /// Position in the player pair
    pub fn index(self) -> usize {
        match self {
            Seat::Blue => 0,
            Seat::Red => 1,
        }
    }

    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::Blue => Seat::Red,
            Seat::Red => Seat::Blue,
        }
    }

    /// Convert seat to the token it places
    pub fn to_cell(self) -> Cell {
        match self {
            Seat::Blue => Cell::Blue,
            Seat::Red => Cell::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::Blue => "Blue",
            Seat::Red => "Red",
        }
    }
}
