/// Load state of a piece of remote data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    /// Failed load with the message shown to the user.
    Error(String),
}

impl<T> Cache<T> {
    #[cfg(test)]
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Cache::NotFetched)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Cache::Error(message) => Some(message),
            _ => None,
        }
    }
}
