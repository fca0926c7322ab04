/// FAQ accordion: at most one item open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index` (closing any other) or closes it when it is already open
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_other_closes_current() {
        let mut a = Accordion::default();
        a.toggle(0);
        a.toggle(2);
        assert!(!a.is_open(0));
        assert!(a.is_open(2));
    }

    #[test]
    fn test_reclick_closes() {
        let mut a = Accordion::default();
        a.toggle(1);
        a.toggle(1);
        assert!(!a.is_open(1));
        a.toggle(1);
        assert!(a.is_open(1));
    }
}
