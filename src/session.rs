//! Card session: the export → prompt → send flow.
//!
//! `CardSession` wires the pure pieces (vCard builder, validators, message
//! composer) to the injected host capabilities and tracks the UI flow
//! state. All logic runs on user-initiated events; the only asynchrony is
//! the fire-and-forget scheduler used for UI sequencing.

use crate::cache::{KeyValueStore, VisitorCache};
use crate::compose;
use crate::config::Config;
use crate::host::{FileSaver, UriDispatcher};
use crate::models::VisitorInput;
use crate::platform::PlatformProbe;
use crate::scheduler::Scheduler;
use crate::validate;
use crate::vcard;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info};

/// UI flow state.
///
/// `Idle → Exported → PromptShown → MessageDispatched`, with
/// `PromptShown → Idle` on dismiss. `MessageDispatched` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing in flight; the card is just being viewed.
    Idle,

    /// The vCard was handed to the host saver; the prompt timer is running.
    Exported,

    /// The follow-up form is visible.
    PromptShown,

    /// The deep link was handed to the host dispatcher. Terminal.
    MessageDispatched,
}

/// Inline per-field error copy, `None` when the field has no visible error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Error under the name field.
    pub name: Option<&'static str>,

    /// Error under the email field.
    pub email: Option<&'static str>,
}

/// The transient exportable document, held until the host's save
/// mechanism has had time to consume it.
struct ExportDocument {
    contents: Vec<u8>,
}

/// Orchestrator for one visitor's pass through the card flow.
pub struct CardSession {
    config: Config,
    saver: Arc<dyn FileSaver>,
    dispatcher: Arc<dyn UriDispatcher>,
    scheduler: Arc<dyn Scheduler>,
    probe: Arc<dyn PlatformProbe>,
    cache: VisitorCache,
    state: Arc<Mutex<FlowState>>,
    visitor: Arc<Mutex<VisitorInput>>,
    errors: Arc<Mutex<FieldErrors>>,
    pending_export: Arc<Mutex<Option<ExportDocument>>>,
}

impl CardSession {
    /// Create a session, restoring any cached visitor fields.
    ///
    /// An unavailable store is normal: the fields start empty and the
    /// session is simply non-persistent.
    pub fn new(
        config: Config,
        saver: Arc<dyn FileSaver>,
        dispatcher: Arc<dyn UriDispatcher>,
        store: Arc<dyn KeyValueStore>,
        scheduler: Arc<dyn Scheduler>,
        probe: Arc<dyn PlatformProbe>,
    ) -> Self {
        let cache = VisitorCache::new(
            store,
            config.cache_key_name.clone(),
            config.cache_key_email.clone(),
        );
        let visitor = cache.load();

        Self {
            config,
            saver,
            dispatcher,
            scheduler,
            probe,
            cache,
            state: Arc::new(Mutex::new(FlowState::Idle)),
            visitor: Arc::new(Mutex::new(visitor)),
            errors: Arc::new(Mutex::new(FieldErrors::default())),
            pending_export: Arc::new(Mutex::new(None)),
        }
    }

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        *self.state.lock().expect("session state lock poisoned")
    }

    /// Snapshot of the visitor's fields.
    pub fn visitor(&self) -> VisitorInput {
        self.visitor
            .lock()
            .expect("visitor lock poisoned")
            .clone()
    }

    /// Snapshot of the inline field errors.
    pub fn errors(&self) -> FieldErrors {
        *self.errors.lock().expect("errors lock poisoned")
    }

    /// Whether the transient export document is still held.
    pub fn export_pending(&self) -> bool {
        self.pending_export
            .lock()
            .expect("export lock poisoned")
            .is_some()
    }

    /// Export the owner's vCard and arm the follow-up prompt.
    ///
    /// Hands the document bytes, MIME type, and suggested filename to the
    /// host saver without observing the outcome, keeps the document alive
    /// for the configured release delay, and schedules the prompt. No-op
    /// once the session reached `MessageDispatched`.
    pub fn export_card(&self) {
        if self.state() == FlowState::MessageDispatched {
            return;
        }

        let owner = &self.config.owner;
        let document = vcard::build(owner);
        let filename = owner.vcf_filename();

        info!(filename = %filename, "exporting contact card");
        self.saver
            .save_file(&filename, vcard::MIME_TYPE, document.as_bytes());

        // Hold the transient document until the host has had time to
        // consume it, then release it regardless of outcome.
        *self.pending_export.lock().expect("export lock poisoned") = Some(ExportDocument {
            contents: document.into_bytes(),
        });
        let pending = self.pending_export.clone();
        self.scheduler.schedule(
            Duration::from_millis(self.config.export_release_delay_ms),
            Box::new(move || {
                if let Ok(mut slot) = pending.lock() {
                    if let Some(doc) = slot.take() {
                        debug!(bytes = doc.contents.len(), "released export document");
                    }
                }
            }),
        );

        self.set_state(FlowState::Exported);

        // Let the host's save UI settle before presenting the prompt.
        let state = self.state.clone();
        self.scheduler.schedule(
            Duration::from_millis(self.config.prompt_delay_ms),
            Box::new(move || {
                if let Ok(mut state) = state.lock() {
                    if *state == FlowState::Exported {
                        *state = FlowState::PromptShown;
                    }
                }
            }),
        );
    }

    /// Update the name field.
    ///
    /// Writes through the cache and clears the field's inline error once
    /// the value validates. Typing is never blocked.
    pub fn set_name(&self, value: &str) {
        self.visitor.lock().expect("visitor lock poisoned").name = value.to_string();
        self.cache.store_name(value);

        if validate::is_valid_name(value) {
            self.errors.lock().expect("errors lock poisoned").name = None;
        }
    }

    /// Update the email field, mirroring [`CardSession::set_name`].
    pub fn set_email(&self, value: &str) {
        self.visitor.lock().expect("visitor lock poisoned").email = value.to_string();
        self.cache.store_email(value);

        if validate::is_valid_email(value) {
            self.errors.lock().expect("errors lock poisoned").email = None;
        }
    }

    /// Re-check the email field on blur, setting or clearing its error.
    pub fn touch_email(&self) {
        let valid = validate::is_valid_email(&self.visitor().email);
        self.errors.lock().expect("errors lock poisoned").email = if valid {
            None
        } else {
            Some(validate::EMAIL_ERROR)
        };
    }

    /// Submit the prompt form.
    ///
    /// On invalid fields, sets the inline errors and stays in
    /// `PromptShown`. On success, composes the notification text, builds
    /// the platform-appropriate deep link, hands it to the dispatcher, and
    /// transitions to `MessageDispatched`. Returns whether a message was
    /// dispatched.
    pub fn submit(&self) -> bool {
        if self.state() != FlowState::PromptShown {
            return false;
        }

        let visitor = self.visitor();
        let validation = visitor.validation();

        {
            let mut errors = self.errors.lock().expect("errors lock poisoned");
            if !validation.name_valid {
                errors.name = Some(validate::NAME_ERROR);
            }
            if !validation.email_valid {
                errors.email = Some(validate::EMAIL_ERROR);
            }
        }

        if !validation.all_valid() {
            return false;
        }

        let owner = &self.config.owner;
        let message =
            compose::notification_text(&owner.first_name, &visitor.name, &visitor.email);
        let uri = compose::sms_uri(&owner.phone, &message, self.probe.family());

        info!(family = ?self.probe.family(), "dispatching notification deep link");
        self.dispatcher.open_uri(&uri);

        self.set_state(FlowState::MessageDispatched);
        true
    }

    /// Dismiss the prompt and return to `Idle`.
    pub fn dismiss(&self) {
        if self.state() == FlowState::PromptShown {
            self.set_state(FlowState::Idle);
        }
    }

    fn set_state(&self, next: FlowState) {
        *self.state.lock().expect("session state lock poisoned") = next;
    }
}
