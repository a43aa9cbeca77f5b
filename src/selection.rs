/// Optional index into a fixed list, with "nothing selected" as its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Index(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Index(i) => Some(*i),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        *self == Selection::Index(index)
    }
}
