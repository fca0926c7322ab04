/// Message shown after the contact form was submitted
pub const ACKNOWLEDGMENT: &str =
    "Vielen Dank für Ihre Nachricht! Wir melden uns in Kürze bei Ihnen.";

/// Local-only contact form; nothing is sent anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactForm {
    submissions: u32,
}

impl ContactForm {
    /// Records a submission and returns the single acknowledgment to show
    pub fn submit(&mut self) -> &'static str {
        self.submissions += 1;
        ACKNOWLEDGMENT
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_acknowledgment_per_submission() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), ACKNOWLEDGMENT);
        assert_eq!(form.submit(), ACKNOWLEDGMENT);
        assert_eq!(form.submissions(), 2);
    }
}
