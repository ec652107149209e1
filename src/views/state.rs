/// Tri-state render contract shared by every view. Exactly one of the three
/// is ever shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    /// Failure text, shown verbatim
    Failed(String),
    Loaded(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> ViewState<&T> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Failed(message) => ViewState::Failed(message.clone()),
            ViewState::Loaded(data) => ViewState::Loaded(data),
        }
    }

    pub fn map<U, F>(self, f: F) -> ViewState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Failed(message) => ViewState::Failed(message),
            ViewState::Loaded(data) => ViewState::Loaded(f(data)),
        }
    }
}
