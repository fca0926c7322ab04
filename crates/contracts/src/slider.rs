/// Rotation interval of the hero slider in milliseconds
pub const DEFAULT_SLIDE_DURATION_MS: u32 = 6000;

/// Visual state of a single progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStatus {
    Done,
    Active,
    Pending,
}

impl BarStatus {
    pub fn class(&self) -> &'static str {
        match self {
            BarStatus::Done => "progress-bar done",
            BarStatus::Active => "progress-bar active",
            BarStatus::Pending => "progress-bar",
        }
    }
}

/// Current slide of the hero slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    len: usize,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jumps to `index`; out-of-range indices are ignored
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    /// Moves to the next slide, wrapping to the first
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }

    pub fn bar_status(&self, index: usize) -> BarStatus {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => BarStatus::Done,
            std::cmp::Ordering::Equal if self.len > 0 => BarStatus::Active,
            _ => BarStatus::Pending,
        }
    }
}
