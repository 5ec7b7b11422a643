use log::info;

/// The site's contact form. Submissions are logged and acknowledged locally;
/// nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Log the submission, reset the form and return the acknowledgement
    pub fn submit(&mut self) -> String {
        info!(
            "Contact form submitted: name={:?} email={:?} message={:?}",
            self.name, self.email, self.message
        );
        let reply = format!("Thank you for your message, {}!", self.name);
        self.reset();
        reply
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
