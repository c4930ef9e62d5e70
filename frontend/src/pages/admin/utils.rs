/// Which record an admin editor form is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Closed,
    Create,
    Edit(i64),
}

impl EditorMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorMode::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, EditorMode::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_report_their_state() {
        assert!(!EditorMode::Closed.is_open());
        assert!(EditorMode::Create.is_open());
        assert!(!EditorMode::Create.is_edit());
        assert!(EditorMode::Edit(5).is_edit());
    }
}
