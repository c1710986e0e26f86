/// Visibility of the cart drawer. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }

    pub fn open(&mut self) {
        *self = DrawerState::Open;
    }

    pub fn close(&mut self) {
        *self = DrawerState::Closed;
    }

    /// What the cart button does: flips the current state.
    pub fn toggle(&mut self) {
        *self = match self {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
    }
}

impl std::fmt::Display for DrawerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerState::Closed => write!(f, "closed"),
            DrawerState::Open => write!(f, "open"),
        }
    }
}
