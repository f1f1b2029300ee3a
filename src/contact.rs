//! Contact form state machine and the mail-delivery seam.
//!
//! The form itself never talks to the network. A submission hands a
//! [`ContactMessage`] to an [`Outbox`], and the outbox reports back through
//! [`ContactForm::finish`]. Every submission carries a ticket so that a late
//! completion or dismissal from an older submission is ignored.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name`/`id` attribute of the matching input.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// First required field left empty. Matches the browser's `required`
    /// check: whitespace counts as a value.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Submitting,
    Success,
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// What the outbox is asked to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub ticket: Ticket,
    pub fields: ContactFields,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("required field `{}` is empty", .0.key())]
    Missing(Field),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("delivery unavailable: {0}")]
    Unavailable(String),
}

/// External mail-delivery collaborator.
///
/// Implementations must eventually call `done` exactly once, unless the
/// page is torn down first.
pub trait Outbox {
    fn send(&self, message: ContactMessage, done: Box<dyn FnOnce(Result<(), DeliveryError>)>);
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    status: Status,
    current: Option<Ticket>,
    next_ticket: u64,
    last_failure: Option<DeliveryError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: Status::Idle,
            current: None,
            next_ticket: 1,
            last_failure: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn last_failure(&self) -> Option<&DeliveryError> {
        self.last_failure.as_ref()
    }

    /// Whether the submit control should be disabled.
    pub fn is_locked(&self) -> bool {
        self.status == Status::Submitting
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Move to `Submitting` and return the message to hand to the outbox.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.status == Status::Submitting {
            return Err(SubmitError::InFlight);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(SubmitError::Missing(field));
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.current = Some(ticket);
        self.status = Status::Submitting;
        self.last_failure = None;
        Ok(ContactMessage {
            ticket,
            fields: self.fields.clone(),
        })
    }

    /// Apply the outbox result. Returns `false` when `ticket` is stale.
    pub fn finish(&mut self, ticket: Ticket, result: Result<(), DeliveryError>) -> bool {
        if self.status != Status::Submitting || self.current != Some(ticket) {
            return false;
        }
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = Status::Success;
            }
            Err(e) => {
                self.current = None;
                self.last_failure = Some(e);
                self.status = Status::Idle;
            }
        }
        true
    }

    /// Hide the success banner of submission `ticket`, if it is still shown.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if self.status != Status::Success || self.current != Some(ticket) {
            return false;
        }
        self.current = None;
        self.status = Status::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Asha");
        form.set(Field::Email, "asha@example.com");
        form.set(Field::Subject, "Landing page");
        form.set(Field::Message, "Need a site by March.");
        form
    }

    type Pending = Rc<RefCell<Vec<(ContactMessage, Box<dyn FnOnce(Result<(), DeliveryError>)>)>>>;

    /// Holds callbacks until the test releases them.
    #[derive(Default)]
    struct ManualOutbox {
        pending: Pending,
    }

    impl Outbox for ManualOutbox {
        fn send(&self, message: ContactMessage, done: Box<dyn FnOnce(Result<(), DeliveryError>)>) {
            self.pending.borrow_mut().push((message, done));
        }
    }

    #[test]
    fn idle_submitting_success_idle() {
        let mut form = filled();
        let msg = form.begin_submit().unwrap();
        assert_eq!(form.status(), Status::Submitting);
        assert!(form.is_locked());
        assert_eq!(msg.fields.name, "Asha");

        assert!(form.finish(msg.ticket, Ok(())));
        assert_eq!(form.status(), Status::Success);
        assert_eq!(form.fields(), &ContactFields::default());

        assert!(form.dismiss(msg.ticket));
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn cannot_resubmit_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = filled();
        form.set(Field::Subject, "");
        form.set(Field::Message, "");
        assert_eq!(form.begin_submit(), Err(SubmitError::Missing(Field::Subject)));
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(
            SubmitError::Missing(Field::Subject).to_string(),
            "required field `subject` is empty"
        );
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(Field::Subject, "   ");
        let msg = form.begin_submit().unwrap();
        assert_eq!(msg.fields.subject, "   ");
        assert_eq!(form.status(), Status::Submitting);
    }

    #[test]
    fn failed_delivery_keeps_fields() {
        let mut form = filled();
        let msg = form.begin_submit().unwrap();
        let err = DeliveryError::Unavailable("offline".into());
        assert!(form.finish(msg.ticket, Err(err.clone())));
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.fields().email, "asha@example.com");
        assert_eq!(form.last_failure(), Some(&err));
    }

    #[test]
    fn stale_dismissal_does_not_hide_newer_banner() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.finish(first.ticket, Ok(()));
        form.dismiss(first.ticket);

        let mut form2 = form.clone();
        for f in Field::ALL {
            form2.set(f, "x");
        }
        let second = form2.begin_submit().unwrap();
        form2.finish(second.ticket, Ok(()));

        assert!(!form2.dismiss(first.ticket));
        assert_eq!(form2.status(), Status::Success);
        assert!(!form2.finish(first.ticket, Ok(())));
    }

    #[test]
    fn outbox_round_trip() {
        let outbox = ManualOutbox::default();
        let form = Rc::new(RefCell::new(filled()));

        let msg = form.borrow_mut().begin_submit().unwrap();
        let ticket = msg.ticket;
        let weak = Rc::downgrade(&form);
        outbox.send(
            msg,
            Box::new(move |result| {
                if let Some(form) = weak.upgrade() {
                    form.borrow_mut().finish(ticket, result);
                }
            }),
        );
        assert_eq!(form.borrow().status(), Status::Submitting);

        let (_, done) = outbox.pending.borrow_mut().pop().unwrap();
        done(Ok(()));
        assert_eq!(form.borrow().status(), Status::Success);
    }

    #[test]
    fn completion_after_teardown_is_a_no_op() {
        let outbox = ManualOutbox::default();
        let form = Rc::new(RefCell::new(filled()));
        let msg = form.borrow_mut().begin_submit().unwrap();
        let ticket = msg.ticket;
        let weak = Rc::downgrade(&form);
        outbox.send(
            msg,
            Box::new(move |result| {
                if let Some(form) = weak.upgrade() {
                    form.borrow_mut().finish(ticket, result);
                }
            }),
        );
        drop(form);
        let (_, done) = outbox.pending.borrow_mut().pop().unwrap();
        done(Ok(()));
    }
}
