use poem_openapi::Object;

use business::domain::drawer::model::DrawerState;

#[derive(Debug, Clone, Object)]
pub struct DrawerResponse {
    /// "open" or "closed"
    pub state: String,
    pub is_open: bool,
}

impl From<DrawerState> for DrawerResponse {
    fn from(state: DrawerState) -> Self {
        Self {
            state: state.to_string(),
            is_open: state.is_open(),
        }
    }
}
