//! Contact Form Controller
//!
//! Field values, inline validation and the submission status machine:
//!
//! ```text
//! idle    --submit (valid)-->   sending --relay ok-->  success --5s--> idle
//! idle    --submit (invalid)--> idle                  (errors shown)
//! sending --relay error / timeout-->  error
//! ```
//!
//! Every dispatch gets a [`Ticket`]. Relay responses, timeouts and reset
//! timers carry the ticket they were issued for and are ignored once a newer
//! dispatch exists.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::relay::{ContactMessage, MessageRelay, RelayError};

/// Delay before a success panel returns to the empty form
pub const SUCCESS_RESET_MS: u32 = 5_000;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("is invalid")]
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Check every field; an empty map means the form may be sent
    pub fn validate(&self) -> BTreeMap<Field, FieldError> {
        let mut errors = BTreeMap::new();
        for field in Field::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                errors.insert(field, FieldError::Required);
            } else if field == Field::Email && !EMAIL_SHAPE.is_match(value) {
                errors.insert(field, FieldError::InvalidFormat);
            }
        }
        errors
    }

    fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Identifies one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u32);

/// A message ready to hand to the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub message: ContactMessage,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: BTreeMap<Field, FieldError>,
    status: SubmissionStatus,
    generation: u32,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Input change: store the value and clear that field's error
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.errors.remove(&field);
    }

    /// Submit attempt.
    ///
    /// Returns the message to dispatch, or `None` when a dispatch is already
    /// in flight or validation failed (errors are then populated).
    ///
    /// The dispatched values are trimmed, so surrounding whitespace typed
    /// into a field is never sent to the relay.
    pub fn begin_submit(&mut self) -> Option<Dispatch> {
        if self.is_sending() {
            log::debug!("[contact] submit ignored while sending");
            return None;
        }

        self.errors = self.fields.validate();
        if !self.errors.is_empty() {
            self.status = SubmissionStatus::Idle;
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.status = SubmissionStatus::Sending;
        Some(Dispatch { ticket: Ticket(self.generation), message: self.fields.to_message() })
    }

    /// Apply the relay outcome for `ticket`.
    ///
    /// Returns the ticket to schedule the success reset with, if any.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<(), RelayError>) -> Option<Ticket> {
        if !self.owns(ticket) || !self.is_sending() {
            log::debug!("[contact] ignoring stale relay outcome");
            return None;
        }

        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors.clear();
                self.status = SubmissionStatus::Success;
                Some(ticket)
            }
            Err(e) => {
                log::warn!("[contact] message not sent: {}", e);
                self.status = SubmissionStatus::Error;
                None
            }
        }
    }

    /// Dispatch deadline elapsed
    pub fn time_out(&mut self, ticket: Ticket) {
        if self.owns(ticket) && self.is_sending() {
            self.settle(ticket, Err(RelayError::TimedOut));
        }
    }

    /// Success reset timer fired
    pub fn expire_success(&mut self, ticket: Ticket) {
        if self.owns(ticket) && self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }

    fn owns(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

// ========================
// Dispatch Driving
// ========================

/// Shared, mutable home of a [`ContactForm`] (a signal in the view)
pub trait FormCell {
    /// Run `f` against the form; `None` if the form is gone
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T>;
}

/// Send `dispatch` through `relay`, settle the form, and after a success
/// wait [`SUCCESS_RESET_MS`] before returning it to idle.
pub async fn deliver<C, R, S, Fut>(cell: &C, relay: &R, dispatch: Dispatch, sleep: S)
where
    C: FormCell,
    R: MessageRelay,
    S: Fn(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    let outcome = relay.send(&dispatch.message).await;
    let Some(reset) = cell.with_form(|f| f.settle(dispatch.ticket, outcome)).flatten() else {
        return;
    };
    sleep(SUCCESS_RESET_MS).await;
    cell.with_form(|f| f.expire_success(reset));
}

/// Fail `ticket` if it is still unsettled after `timeout_ms`
pub async fn expire_after<C, S, Fut>(cell: &C, ticket: Ticket, timeout_ms: u32, sleep: S)
where
    C: FormCell,
    S: Fn(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(timeout_ms).await;
    cell.with_form(|f| f.time_out(ticket));
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// One submit attempt end to end, as the contact panel drives it
    async fn submit_with<R: MessageRelay>(form: &mut ContactForm, relay: &R) -> Option<Ticket> {
        let dispatch = form.begin_submit()?;
        let outcome = relay.send(&dispatch.message).await;
        form.settle(dispatch.ticket, outcome)
    }

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Message, message);
        form
    }

    /// Relay that records what it was asked to send
    struct FakeRelay {
        fail: bool,
        sent: RefCell<Vec<ContactMessage>>,
        calls: Cell<u32>,
    }

    impl FakeRelay {
        fn ok() -> Self {
            Self { fail: false, sent: RefCell::new(Vec::new()), calls: Cell::new(0) }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::ok() }
        }
    }

    #[async_trait(?Send)]
    impl MessageRelay for FakeRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(RelayError::Transport("offline".to_string()));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    #[test]
    fn test_all_empty_yields_three_required_errors() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors().len(), 3);
        for field in Field::ALL {
            assert_eq!(form.error(field), Some(FieldError::Required));
        }
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled("   ", " \t", "\n");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_invalid_email_is_the_only_error() {
        let mut form = filled("A", "not-an-email", "hi");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_email_shape() {
        let ok = ["a@b.co", "first.last@sub.example.org"];
        let bad = ["a@b", "@b.c", "a b@c.d", "plain"];
        for email in ok {
            assert!(!filled("A", email, "hi").fields().validate().contains_key(&Field::Email), "{}", email);
        }
        for email in bad {
            assert_eq!(
                filled("A", email, "hi").fields().validate().get(&Field::Email),
                Some(&FieldError::InvalidFormat),
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.begin_submit();
        form.set_field(Field::Name, "B");
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some(FieldError::Required));
        assert_eq!(form.error(Field::Message), Some(FieldError::Required));
    }

    #[test]
    fn test_valid_submit_dispatches_trimmed_values() {
        let mut form = filled(" Ada ", "ada@example.com ", " hello ");
        let dispatch = form.begin_submit().expect("should dispatch");
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert_eq!(dispatch.message.name, "Ada");
        assert_eq!(dispatch.message.email, "ada@example.com");
        assert_eq!(dispatch.message.message, "hello");
    }

    #[test]
    fn test_no_second_dispatch_while_sending() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_success_clears_and_resets_after_timer() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        let dispatch = form.begin_submit().unwrap();
        let reset = form.settle(dispatch.ticket, Ok(())).expect("reset ticket");

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), &ContactFields::default());

        form.expire_success(reset);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        let before = form.fields().clone();
        let dispatch = form.begin_submit().unwrap();
        let reset = form.settle(dispatch.ticket, Err(RelayError::Transport("down".to_string())));

        assert!(reset.is_none());
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
    }

    #[test]
    fn test_error_persists_until_next_submit() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        let first = form.begin_submit().unwrap();
        form.settle(first.ticket, Err(RelayError::TimedOut));
        form.expire_success(first.ticket);
        assert_eq!(form.status(), SubmissionStatus::Error);

        // Retry goes straight back to sending
        assert!(form.begin_submit().is_some());
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_timeout_then_late_response_is_ignored() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        let dispatch = form.begin_submit().unwrap();

        form.time_out(dispatch.ticket);
        assert_eq!(form.status(), SubmissionStatus::Error);

        assert!(form.settle(dispatch.ticket, Ok(())).is_none());
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_timeout_after_settle_is_noop() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        let dispatch = form.begin_submit().unwrap();
        form.settle(dispatch.ticket, Ok(()));
        form.time_out(dispatch.ticket);
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_new_submission_supersedes_pending_reset() {
        let mut form = filled("Ada", "ada@example.com", "hello");
        let first = form.begin_submit().unwrap();
        let stale_reset = form.settle(first.ticket, Ok(())).unwrap();

        form.set_field(Field::Name, "Bob");
        form.set_field(Field::Email, "bob@example.com");
        form.set_field(Field::Message, "again");
        let second = form.begin_submit().unwrap();
        assert_ne!(first.ticket, second.ticket);

        // The first reset timer fires while the second dispatch is in flight
        form.expire_success(stale_reset);
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[tokio::test]
    async fn test_submit_with_successful_relay() {
        let relay = FakeRelay::ok();
        let mut form = filled("Ada", "ada@example.com", "hello");

        let reset = submit_with(&mut form, &relay).await;

        assert!(reset.is_some());
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.sent.borrow()[0].email, "ada@example.com");
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.value(Field::Message), "");
    }

    #[tokio::test]
    async fn test_submit_with_failing_relay() {
        let relay = FakeRelay::failing();
        let mut form = filled("Ada", "ada@example.com", "hello");

        assert!(submit_with(&mut form, &relay).await.is_none());
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.value(Field::Message), "hello");
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_relay() {
        let relay = FakeRelay::ok();
        let mut form = filled("A", "not-an-email", "hi");

        assert!(submit_with(&mut form, &relay).await.is_none());
        assert_eq!(relay.calls.get(), 0);
    }

    impl FormCell for RefCell<ContactForm> {
        fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    /// Sleep stand-in that records the requested delays and returns at once
    fn recording_sleep(delays: &RefCell<Vec<u32>>) -> impl Fn(u32) -> std::future::Ready<()> + '_ {
        move |ms| {
            delays.borrow_mut().push(ms);
            std::future::ready(())
        }
    }

    #[tokio::test]
    async fn test_deliver_schedules_success_reset() {
        let relay = FakeRelay::ok();
        let cell = RefCell::new(filled("Ada", "ada@example.com", "hello"));
        let dispatch = cell.borrow_mut().begin_submit().unwrap();
        let delays = RefCell::new(Vec::new());

        deliver(&cell, &relay, dispatch, recording_sleep(&delays)).await;

        assert_eq!(*delays.borrow(), vec![SUCCESS_RESET_MS]);
        assert_eq!(SUCCESS_RESET_MS, 5_000);
        let form = cell.borrow();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_deliver_failure_schedules_nothing() {
        let relay = FakeRelay::failing();
        let cell = RefCell::new(filled("Ada", "ada@example.com", "hello"));
        let dispatch = cell.borrow_mut().begin_submit().unwrap();
        let delays = RefCell::new(Vec::new());

        deliver(&cell, &relay, dispatch, recording_sleep(&delays)).await;

        assert!(delays.borrow().is_empty());
        assert_eq!(cell.borrow().status(), SubmissionStatus::Error);
        assert_eq!(cell.borrow().value(Field::Name), "Ada");
    }

    #[tokio::test]
    async fn test_expire_after_uses_configured_timeout() {
        let cell = RefCell::new(filled("Ada", "ada@example.com", "hello"));
        let ticket = cell.borrow_mut().begin_submit().unwrap().ticket;
        let delays = RefCell::new(Vec::new());

        expire_after(&cell, ticket, 15_000, recording_sleep(&delays)).await;

        assert_eq!(*delays.borrow(), vec![15_000]);
        assert_eq!(cell.borrow().status(), SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn test_expire_after_settled_dispatch_is_noop() {
        let relay = FakeRelay::ok();
        let cell = RefCell::new(filled("Ada", "ada@example.com", "hello"));
        let dispatch = cell.borrow_mut().begin_submit().unwrap();
        let ticket = dispatch.ticket;
        let delays = RefCell::new(Vec::new());

        // Settle without waiting out the reset
        let outcome = relay.send(&dispatch.message).await;
        cell.borrow_mut().settle(ticket, outcome);
        expire_after(&cell, ticket, 15_000, recording_sleep(&delays)).await;

        assert_eq!(cell.borrow().status(), SubmissionStatus::Success);
    }
}
