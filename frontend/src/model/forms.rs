use crate::model::toast::ToastKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn selector(self) -> &'static str {
        match self {
            FormKind::Contact => ".contact-form",
            FormKind::Newsletter => ".newsletter-form",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_fields(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut read = |field: &str| lookup(field).unwrap_or_default();
        Self {
            name: read("name"),
            email: read("email"),
            subject: read("subject"),
            message: read("message"),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn from_fields(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            email: lookup("email").unwrap_or_default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// What a submission turns into: the toast to show and whether to clear the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: &'static str,
    pub kind: ToastKind,
    pub reset: bool,
}

pub fn contact_outcome(form: &ContactForm) -> SubmitOutcome {
    if form.is_complete() {
        SubmitOutcome {
            message: "Message sent successfully!",
            kind: ToastKind::Success,
            reset: true,
        }
    } else {
        SubmitOutcome {
            message: "Please fill in all fields",
            kind: ToastKind::Error,
            reset: false,
        }
    }
}

pub fn newsletter_outcome(form: &NewsletterForm) -> SubmitOutcome {
    if form.is_complete() {
        SubmitOutcome {
            message: "Successfully subscribed to newsletter!",
            kind: ToastKind::Success,
            reset: true,
        }
    } else {
        SubmitOutcome {
            message: "Please enter your email address",
            kind: ToastKind::Error,
            reset: false,
        }
    }
}
