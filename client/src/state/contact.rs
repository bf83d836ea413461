//! Contact form state machine.
//!
//! DESIGN
//! ======
//! The form moves `Idle -> Submitting -> Succeeded | Failed -> Idle`, with a
//! local validation failure jumping straight from `Idle` to `Failed`. The view
//! drives it in three steps so the relay call can run on the event loop
//! between them:
//!
//! 1. `begin_submit` validates and hands back the payload to send,
//! 2. `finish_submit` records the relay outcome,
//! 3. `revert` clears the transient phase once the display window elapses.
//!
//! Every attempt bumps a generation counter. `RevertTicket`s capture it, so a
//! timer scheduled for an older attempt cannot clear a newer result.
//!
//! Attachments arrive in two steps as well. `pick_attachment` records the
//! file's name and size as soon as it is chosen; files over the limit are
//! never read. The contents land later through `attach_loaded`, guarded by a
//! `ReadTicket` so a read that finishes after the slot was cleared, replaced,
//! or emptied by a successful send is dropped. Submitting waits for the read.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use thiserror::Error;

use crate::net::relay::{EmailRelay, RelayError};
use crate::util::words::word_count;

/// Maximum number of words accepted in the message body.
pub const MAX_WORDS: usize = 100;

/// Maximum attachment size in bytes (5 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// How long a success or error indicator stays visible.
pub const REVERT_WINDOW: Duration = Duration::from_secs(3);

pub const SUCCESS_MESSAGE: &str = "Thanks for your message! I'll get back to you soon ✨";

/// Lifecycle stage of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Text fields addressable by their input `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// A file chosen in the picker, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content_type: content_type.into(), bytes }
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// What the attachment slot currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachmentSlot {
    /// Picked; contents are still being read.
    Loading { file_name: String, bytes: u64, read: u64 },
    /// Picked but over the size limit; contents are never read.
    Oversized { file_name: String, bytes: u64 },
    Ready(Attachment),
}

impl AttachmentSlot {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Loading { file_name, .. } | Self::Oversized { file_name, .. } => file_name,
            Self::Ready(attachment) => &attachment.file_name,
        }
    }

    /// Size as reported by the picker, or the actual byte count once read.
    pub fn size(&self) -> u64 {
        match self {
            Self::Loading { bytes, .. } | Self::Oversized { bytes, .. } => *bytes,
            Self::Ready(attachment) => attachment.size(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Claim on one pending attachment read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "hand the ticket back with the read result or the form stays blocked"]
pub struct ReadTicket {
    read: u64,
}

/// Locally detected problem with the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message exceeds {limit} words limit", limit = MAX_WORDS)]
    WordLimitExceeded { words: usize },
    #[error("File size should be less than 5MB")]
    AttachmentTooLarge { bytes: u64 },
}

/// Anything that stops a submission from succeeding.
///
/// Relay failures display one generic message whatever their cause; the
/// wrapped `RelayError` is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to send message. Please try again later.")]
    Relay(#[source] RelayError),
}

/// Everything the relay needs for one attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub attachment: Option<Attachment>,
}

/// Permission to revert the phase scheduled by a specific attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "schedule a revert with the ticket or the indicator never clears"]
pub struct RevertTicket {
    generation: u64,
}

/// Why `begin_submit` did not produce a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A relay call is still in flight; nothing changed.
    InFlight,
    /// Validation failed; the form is now `Failed` and the ticket clears it.
    Invalid(RevertTicket),
    /// The picked attachment is still being read; nothing changed.
    AttachmentLoading,
}

/// Status line to show under the form, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusLine {
    Success(&'static str),
    Error(String),
}

/// Per-form state: field values, attachment, and submission phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    attachment: Option<AttachmentSlot>,
    word_count: usize,
    phase: Phase,
    error: Option<ContactError>,
    generation: u64,
    reads: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// The attachment that would be sent, once its contents are in memory.
    pub fn attachment(&self) -> Option<&Attachment> {
        match &self.attachment {
            Some(AttachmentSlot::Ready(attachment)) => Some(attachment),
            _ => None,
        }
    }

    pub fn attachment_slot(&self) -> Option<&AttachmentSlot> {
        self.attachment.as_ref()
    }

    pub fn attachment_loading(&self) -> bool {
        self.attachment.as_ref().is_some_and(AttachmentSlot::is_loading)
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    pub fn over_word_limit(&self) -> bool {
        self.word_count > MAX_WORDS
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Submitting && !self.over_word_limit() && !self.attachment_loading()
    }

    /// Counter label shown next to the message field.
    pub fn word_counter_label(&self) -> String {
        format!("{}/{MAX_WORDS} words", self.word_count)
    }

    pub fn status_line(&self) -> Option<StatusLine> {
        match (self.phase, &self.error) {
            (Phase::Succeeded, _) => Some(StatusLine::Success(SUCCESS_MESSAGE)),
            (Phase::Failed, Some(err)) => Some(StatusLine::Error(err.to_string())),
            _ => None,
        }
    }

    /// Replace a text field. The message field also refreshes the word count.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => {
                self.word_count = word_count(&value);
                self.message = value;
            }
        }
    }

    /// Replace the held attachment with one already in memory, or clear it.
    /// Any read still pending is abandoned. Size is checked at submit time.
    pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
        self.reads += 1;
        self.attachment = attachment.map(AttachmentSlot::Ready);
    }

    /// Record a freshly picked file from its metadata alone.
    ///
    /// Returns a ticket when the contents should be read, or `None` when the
    /// file is over the size limit and must not be read at all.
    pub fn pick_attachment(&mut self, file_name: impl Into<String>, bytes: u64) -> Option<ReadTicket> {
        self.reads += 1;
        let file_name = file_name.into();
        if bytes > MAX_ATTACHMENT_BYTES {
            self.attachment = Some(AttachmentSlot::Oversized { file_name, bytes });
            return None;
        }
        self.attachment = Some(AttachmentSlot::Loading { file_name, bytes, read: self.reads });
        Some(ReadTicket { read: self.reads })
    }

    /// Store the contents of the read `ticket` was issued for. Returns
    /// `false`, dropping `attachment`, if the slot has moved on since.
    pub fn attach_loaded(&mut self, ticket: ReadTicket, attachment: Attachment) -> bool {
        if !self.read_pending(ticket) {
            return false;
        }
        self.attachment = Some(AttachmentSlot::Ready(attachment));
        true
    }

    /// Give up on a read that failed. Clears the slot only if it still waits
    /// on that read.
    pub fn abandon_read(&mut self, ticket: ReadTicket) -> bool {
        if !self.read_pending(ticket) {
            return false;
        }
        self.attachment = None;
        true
    }

    /// Validate and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitBlocked::InFlight` while an earlier attempt is pending,
    /// `SubmitBlocked::AttachmentLoading` while the attachment is being read,
    /// or `SubmitBlocked::Invalid` after moving to `Failed` on bad input.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitBlocked> {
        if self.phase == Phase::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.attachment_loading() {
            return Err(SubmitBlocked::AttachmentLoading);
        }
        self.generation += 1;
        self.error = None;

        if let Err(invalid) = self.validate() {
            self.phase = Phase::Failed;
            self.error = Some(invalid.into());
            return Err(SubmitBlocked::Invalid(self.ticket()));
        }

        self.phase = Phase::Submitting;
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            attachment: self.attachment().cloned(),
        })
    }

    /// Record the relay outcome for the attempt in flight.
    ///
    /// Success clears every field; failure keeps them so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), RelayError>) -> RevertTicket {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.attachment = None;
                self.word_count = 0;
                self.error = None;
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                self.error = Some(ContactError::Relay(err));
                self.phase = Phase::Failed;
            }
        }
        self.ticket()
    }

    /// Return to `Idle` if `ticket` belongs to the latest attempt.
    ///
    /// Only the phase and the error are cleared. Returns whether anything
    /// changed.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        if !matches!(self.phase, Phase::Succeeded | Phase::Failed) {
            return false;
        }
        self.phase = Phase::Idle;
        self.error = None;
        true
    }

    /// Run a whole attempt against `relay` without a reactive host.
    ///
    /// Returns the ticket for the revert to schedule, or `None` when another
    /// attempt is still in flight or the attachment is still being read.
    pub async fn submit<R: EmailRelay>(&mut self, relay: &R) -> Option<RevertTicket> {
        match self.begin_submit() {
            Ok(payload) => {
                let outcome = relay.send(&payload).await;
                Some(self.finish_submit(outcome))
            }
            Err(SubmitBlocked::Invalid(ticket)) => Some(ticket),
            Err(SubmitBlocked::InFlight | SubmitBlocked::AttachmentLoading) => None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.word_count > MAX_WORDS {
            return Err(ValidationError::WordLimitExceeded { words: self.word_count });
        }
        if let Some(slot) = &self.attachment {
            if slot.size() > MAX_ATTACHMENT_BYTES {
                return Err(ValidationError::AttachmentTooLarge { bytes: slot.size() });
            }
        }
        Ok(())
    }

    fn read_pending(&self, ticket: ReadTicket) -> bool {
        matches!(&self.attachment, Some(AttachmentSlot::Loading { read, .. }) if *read == ticket.read)
    }

    fn ticket(&self) -> RevertTicket {
        RevertTicket { generation: self.generation }
    }
}
